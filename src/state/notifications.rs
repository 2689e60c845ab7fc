//! Transient on-screen notifications.
//!
//! DESIGN
//! ======
//! Entries are removed by id only. Each one's removal timer is scheduled by
//! the caller when it is pushed, so dismissing one entry never affects when
//! another disappears.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Modifier for the `alert` CSS block.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
            Self::Info => "alert alert-info",
            Self::Warning => "alert alert-warning",
        }
    }

    /// Font Awesome icon name.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Info => "fas fa-info-circle",
            Self::Warning => "fas fa-exclamation-triangle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Stack of visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Append a notification; returns its id.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message: message.into(), kind });
        id
    }

    /// Remove one notification. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
