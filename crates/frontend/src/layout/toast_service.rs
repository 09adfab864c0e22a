//! Toast notifications.
//!
//! Pages push a [`Notification`] into [`ToastService`]; [`Toaster`] renders
//! the stack and every toast dismisses itself after the configured delay.

use contracts::shared::notification::Notification;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Appends `toast`, dropping the oldest entries beyond `max_visible`
pub fn push_bounded(toasts: &mut Vec<Toast>, toast: Toast, max_visible: usize) {
    toasts.push(toast);
    let overflow = toasts.len().saturating_sub(max_visible.max(1));
    toasts.drain(..overflow);
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
    max_visible: usize,
}

impl ToastService {
    pub fn new(duration_ms: u32, max_visible: usize) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
            max_visible,
        }
    }

    /// Shows `notification` and schedules its dismissal
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        if notification.is_destructive() {
            log::warn!("{}: {}", notification.title, notification.description);
        } else {
            log::debug!("{}: {}", notification.title, notification.description);
        }

        let max_visible = self.max_visible;
        self.toasts
            .update(|list| push_bounded(list, Toast { id, notification }, max_visible));

        let this = *self;
        let delay = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // the toast may already be gone (manual dismiss or overflow)
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || service.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notification.is_destructive() {
                        "toast toast--destructive"
                    } else {
                        "toast"
                    };
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <div class="toast__title">{toast.notification.title}</div>
                                <div class="toast__description">
                                    {toast.notification.description}
                                </div>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            notification: Notification::info(format!("t{id}"), ""),
        }
    }

    #[test]
    fn test_push_bounded_drops_oldest() {
        let mut list = Vec::new();
        for id in 0..5 {
            push_bounded(&mut list, toast(id), 3);
        }
        let ids: Vec<u64> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_push_bounded_keeps_at_least_one() {
        let mut list = vec![toast(0)];
        push_bounded(&mut list, toast(1), 0);
        assert_eq!(list, vec![toast(1)]);
    }
}
