use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Runs `on_outside` on every window mousedown whose target lies outside `target`.
///
/// The listener is removed when the owning component is disposed.
pub fn use_click_outside<F>(target: NodeRef<leptos::html::Div>, on_outside: F)
where
    F: Fn() + 'static,
{
    let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
        let Some(root) = target.get_untracked() else {
            return;
        };
        let node = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(node.as_ref()) {
            on_outside();
        }
    });
    on_cleanup(move || handle.remove());
}
