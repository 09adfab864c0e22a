use crate::shared::icons::icon;
use leptos::prelude::*;

/// Accent of a stat card value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatTone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Destructive,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Primary => "stat-card stat-card--primary",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Destructive => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Counter value
    #[prop(into)]
    value: Signal<usize>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional line below the value
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <div class="stat-card__header">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__icon">{icon(&icon_name)}</div>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
            {move || subtitle.get().map(|s| view! {
                <div class="stat-card__subtitle">{s}</div>
            })}
        </div>
    }
}
