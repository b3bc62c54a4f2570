use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};
use yew::prelude::*;

/// Emits `on_key` whenever `key` is pressed anywhere in the window.
///
/// The latest callback is used on each press, so parents may pass a fresh
/// closure every render.
#[hook]
pub fn use_key_listener(key: &'static str, on_key: Callback<()>) {
    let latest = use_mut_ref(|| on_key.clone());
    *latest.borrow_mut() = on_key;

    use_effect_with(key, move |key| {
        let key = *key;
        let listener = window().map(|window| {
            EventListener::new(&window, "keydown", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    if event.key() == key {
                        let callback = latest.borrow().clone();
                        callback.emit(());
                    }
                }
            })
        });

        move || drop(listener)
    });
}
