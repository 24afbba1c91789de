use std::fmt;

use super::{heading, request_state};
use crate::domain::format_timestamp;
use crate::ui::app::state::AppState;

pub fn render(f: &mut fmt::Formatter<'_>, state: &AppState) -> fmt::Result {
    heading(f, "Notifications")?;
    let notifications = &state.notifications;
    if !request_state(
        f,
        notifications.status,
        notifications.error.as_deref(),
        "Loading notifications...",
    )? {
        return Ok(());
    }
    if notifications.items.is_empty() {
        return writeln!(f, "No notifications yet");
    }
    writeln!(f, "{} unread", notifications.unread)?;
    for notification in &notifications.items {
        writeln!(f, "#{:<4} {}", notification.id, notification.message)?;
        if let Some(date) = &notification.date {
            writeln!(f, "      {}", format_timestamp(date))?;
        }
    }
    writeln!(f)?;
    writeln!(f, "read <id> | delete <id>")
}
