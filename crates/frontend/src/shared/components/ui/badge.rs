use leptos::prelude::*;

/// Maps a variant name to its CSS modifier; unknown names fall back to `default`
pub fn badge_variant_class(variant: &str) -> &'static str {
    match variant {
        "secondary" => "badge--secondary",
        "destructive" => "badge--destructive",
        "outline" => "badge--outline",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "available" => "badge--available",
        "reserved" => "badge--reserved",
        "full" => "badge--full",
        _ => "badge--default",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "default", "secondary", "destructive", "outline",
    /// "success", "warning" or one of the decoration statuses
    /// ("available", "reserved", "full")
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class =
        move || badge_variant_class(variant.get().as_deref().unwrap_or("default"));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variants_have_own_classes() {
        assert_eq!(badge_variant_class("available"), "badge--available");
        assert_eq!(badge_variant_class("full"), "badge--full");
        assert_eq!(badge_variant_class("bogus"), "badge--default");
    }
}
