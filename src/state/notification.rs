//! One-shot notifications for the host to display

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many undelivered notifications are kept before the oldest is dropped
pub const NOTIFICATION_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TimerExpired,
    Copied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn timer_expired() -> Self {
        Self::new(NotificationKind::TimerExpired, "Time's up!")
    }

    pub fn copied() -> Self {
        Self::new(NotificationKind::Copied, "Code copied to clipboard!")
    }
}

/// Bounded queue of notifications waiting to be picked up
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    pending: VecDeque<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.pending.len() == NOTIFICATION_CAPACITY {
            self.pending.pop_front();
        }
        self.pending.push_back(notification);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending notification, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }
}
