//! On-screen notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component can raise a message through the [`Notifier`] handle in
//! context. Each message schedules its own removal timer when raised; manual
//! dismissal removes only that message.

#[cfg(test)]
#[path = "notification_stack_test.rs"]
mod notification_stack_test;

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationState};
use crate::util::clock::sleep_ms;

/// Copyable handle for raising notifications.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(ttl_ms: u32) -> Self {
        Self { state: RwSignal::new(NotificationState::default()), ttl_ms }
    }

    /// Show `message` and schedule its removal after the configured lifetime.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        leptos::logging::log!("notify [{kind:?}] {message}");
        let ttl_ms = self.ttl_ms;
        let Some(id) = self.state.try_update(|s| s.push(message, kind)) else {
            return;
        };
        let state = self.state;
        leptos::task::spawn_local(async move {
            sleep_ms(ttl_ms).await;
            state.update(|s| {
                s.dismiss(id);
            });
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Info);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Warning);
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| {
            s.dismiss(id);
        });
    }
}

/// Fixed-position stack rendering every live notification, oldest first.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let items = move || notifier.state.get().items;

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=items
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=alert_class(&n) role="alert">
                            <div class="alert__body">
                                <i class=n.kind.icon()></i>
                                <span>{n.message.clone()}</span>
                            </div>
                            <button
                                class="alert__close"
                                title="Fechar"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn alert_class(n: &Notification) -> String {
    format!("{} notification", n.kind.css_class())
}
