use leptos::prelude::*;

/// PageHeader component: title, optional subtitle and an actions slot
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Actions rendered on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            {children.map(|actions| view! {
                <div class="page-header__actions">{actions()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_slot_is_optional() {
        let props = PageHeaderProps::builder()
            .title("Admin Dashboard")
            .subtitle("Manage your decoration platform")
            .build();
        assert_eq!(props.title, "Admin Dashboard");
        assert!(props.children.is_none());
    }
}
