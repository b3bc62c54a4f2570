pub mod reward_wheel;

pub use reward_wheel::{RewardWheelModal, RewardWheelModalProps};
