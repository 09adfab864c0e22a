use leptos::prelude::*;

use crate::shared::click_outside::use_click_outside;
use crate::shared::icons::icon;

/// Label shown on the trigger for `value`, or `placeholder` when nothing matches
pub fn selected_label(options: &[(String, String)], value: &str, placeholder: &str) -> String {
    options
        .iter()
        .find(|(v, _)| v == value)
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Open/closed state of a dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
}

impl DropdownState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Picking an item always closes the list
    pub fn choose(&mut self) {
        self.open = false;
    }

    /// Pointer pressed somewhere on the page
    pub fn pointer_down(&mut self, inside: bool) {
        if !inside {
            self.open = false;
        }
    }
}

/// Custom dropdown select.
///
/// The trigger toggles the list, picking an item reports it through
/// `on_change` and closes, and a mousedown anywhere outside the component
/// closes the list too.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Trigger text when the value matches no option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let state = RwSignal::new(DropdownState::default());
    let container = NodeRef::<leptos::html::Div>::new();

    use_click_outside(container, move || {
        if state.get_untracked().open {
            state.update(|s| s.pointer_down(false));
        }
    });

    let trigger_text = move || {
        options.with(|opts| {
            selected_label(
                opts,
                &value.get(),
                &placeholder.get().unwrap_or_default(),
            )
        })
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <div
                node_ref=container
                class=move || format!("select {}", additional_class())
                class:select--open=move || state.get().open
            >
                <button
                    type="button"
                    class="select__trigger"
                    aria-haspopup="listbox"
                    aria-expanded=move || state.get().open.to_string()
                    on:click=move |_| state.update(|s| s.toggle())
                >
                    <span class="select__value">{trigger_text}</span>
                    {icon("chevron-down")}
                </button>
                <Show when=move || state.get().open>
                    <ul class="select__content" role="listbox">
                        <For
                            each=move || options.get()
                            key=|(val, _)| val.clone()
                            children=move |(val, text)| {
                                let val_for_check = val.clone();
                                let is_selected = move || value.get() == val_for_check;
                                view! {
                                    <li
                                        class="select__item"
                                        class:select__item--selected=is_selected
                                        role="option"
                                        on:click=move |_| {
                                            state.update(|s| s.choose());
                                            if let Some(handler) = on_change {
                                                handler.run(val.clone());
                                            }
                                        }
                                    >
                                        {text}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<(String, String)> {
        vec![
            ("all".to_string(), "All Categories".to_string()),
            ("wedding".to_string(), "Wedding".to_string()),
        ]
    }

    #[test]
    fn test_selected_label() {
        assert_eq!(selected_label(&options(), "wedding", "Pick"), "Wedding");
        assert_eq!(selected_label(&options(), "gala", "Pick"), "Pick");
    }

    #[test]
    fn test_dropdown_transitions() {
        let mut state = DropdownState::default();
        state.toggle();
        assert!(state.open);

        state.pointer_down(true);
        assert!(state.open);
        state.pointer_down(false);
        assert!(!state.open);

        state.toggle();
        state.choose();
        assert!(!state.open);
    }
}
