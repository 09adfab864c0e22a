use leptos::prelude::*;

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "outline" => "button--outline",
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "hero" => "button--hero",
        "premium" => "button--premium",
        _ => "button--default",
    }
}

fn size_class(size: &str) -> &'static str {
    match size {
        "sm" => "button--sm",
        "lg" => "button--lg",
        "icon" => "button--icon",
        _ => "",
    }
}

/// Button component with variants (default, outline, secondary, ghost, hero,
/// premium) and sizes (sm, md, lg, icon)
#[component]
pub fn Button(
    /// Button variant, "default" when omitted
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm", "lg" or "icon"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Accessible label, used by icon-only buttons
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let classes = move || {
        format!(
            "button {} {} {}",
            variant_class(variant.get().as_deref().unwrap_or("default")),
            size_class(size.get().as_deref().unwrap_or("md")),
            class.get().unwrap_or_default()
        )
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=classes
            title=move || title.get()
            aria-label=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Anchor styled as a button; navigation goes through the router
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] size: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        format!(
            "button {} {} {}",
            variant_class(variant.get().as_deref().unwrap_or("default")),
            size_class(size.get().as_deref().unwrap_or("md")),
            class.get().unwrap_or_default()
        )
    };

    view! {
        <a href=href class=classes>
            {children()}
        </a>
    }
}
