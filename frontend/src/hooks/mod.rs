pub mod use_injected_style;
pub mod use_key_listener;

pub use use_injected_style::use_injected_style;
pub use use_key_listener::use_key_listener;
