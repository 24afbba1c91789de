use super::super::super::MarketApp;
use super::super::action::AsyncAction;
use super::{outcome, spawn};
use crate::domain::{NotificationId, UserId};

pub fn fetch_notifications(app: &mut MarketApp, user_id: UserId) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::NotificationsLoaded(outcome(
            api.list_user_notifications(user_id).await,
            "Failed to fetch notifications",
        ))
    });
}

pub fn delete_notification(app: &mut MarketApp, id: NotificationId) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::NotificationDeleted {
            id,
            result: outcome(
                api.delete_notification(id).await,
                "Failed to delete notification",
            ),
        }
    });
}

/// Dashboard counters; they ride along with the notification badge fetches.
pub fn fetch_stats(app: &mut MarketApp, user_id: UserId) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::StatsLoaded(outcome(api.user_stats(user_id).await, "Failed to fetch stats"))
    });
}
