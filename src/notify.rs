//! Notification Center
//!
//! One toast at a time. A newer toast replaces the visible one, and an expiry
//! timer only removes the toast it was started for.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u32,
}

impl NotificationCenter {
    /// Show a toast, replacing any visible one. Returns the id to expire later.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u32 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        self.next_id
    }

    /// Remove the toast with `id` if it is still the visible one
    pub fn expire(&mut self, id: u32) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
