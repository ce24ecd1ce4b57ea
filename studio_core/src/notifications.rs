//! Notification center derived values.
//!
//! Unread counts and display tags for the notification bell. Read-state
//! mutation belongs to the external API; this layer only counts.

use crate::types::{Notification, NotificationKind};

/// Display color for a notification's kind dot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindColor {
    Blue,
    Green,
    Purple,
    Orange,
    Gray,
}

/// Kind to display color. Unknown kinds fall through to gray.
pub fn kind_color(kind: NotificationKind) -> KindColor {
    match kind {
        NotificationKind::Session => KindColor::Blue,
        NotificationKind::Payment => KindColor::Green,
        NotificationKind::Achievement => KindColor::Purple,
        NotificationKind::Reminder => KindColor::Orange,
        NotificationKind::Other => KindColor::Gray,
    }
}

/// Number of unread notifications
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Bell badge label: the count itself up to nine, then "9+"
pub fn badge_label(unread: usize) -> String {
    if unread > 9 {
        "9+".to_string()
    } else {
        unread.to_string()
    }
}
