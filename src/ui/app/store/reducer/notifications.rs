use super::super::super::state::AppState;
use super::super::action::NotificationAction;
use super::super::command::Command;

pub fn reduce(state: &mut AppState, action: NotificationAction) -> Vec<Command> {
    match action {
        NotificationAction::MarkRead(id) => {
            if state.notifications.items.iter().any(|n| n.id == id) {
                state.notifications.unread = state.notifications.unread.saturating_sub(1);
            }
            Vec::new()
        }
        NotificationAction::Delete(id) => vec![Command::DeleteNotification(id)],
    }
}
