use web_sys::{window, Element};
use yew::prelude::*;

fn append_style(css: &str) -> Option<Element> {
    let document = window()?.document()?;
    let head = document.head()?;
    let style = document.create_element("style").ok()?;
    style.set_text_content(Some(css));
    head.append_child(&style).ok()?;
    Some(style)
}

/// Adds a `<style>` block to the document head while the component is mounted.
#[hook]
pub fn use_injected_style(css: &'static str) {
    use_effect_with(css, move |css| {
        let style_element = append_style(css);
        if style_element.is_none() {
            log::warn!("Could not inject component styles");
        }

        move || {
            if let Some(style) = style_element {
                if let Some(parent) = style.parent_node() {
                    let _ = parent.remove_child(&style);
                }
            }
        }
    });
}
