use super::super::super::MarketApp;
use super::super::action::AsyncAction;
use super::{outcome, spawn};
use crate::domain::{AlertDraft, AlertId, UserId};

pub fn fetch_alerts(app: &mut MarketApp, user_id: UserId) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::AlertsLoaded(outcome(
            api.list_user_alerts(user_id).await,
            "Failed to fetch alerts",
        ))
    });
}

pub fn create_alert(app: &mut MarketApp, draft: AlertDraft) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::AlertCreated(outcome(
            api.create_alert(&draft).await,
            "Failed to create alert",
        ))
    });
}

pub fn update_alert(app: &mut MarketApp, id: AlertId, draft: AlertDraft) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::AlertUpdated(outcome(
            api.update_alert(id, &draft).await,
            "Failed to update alert",
        ))
    });
}

pub fn delete_alert(app: &mut MarketApp, id: AlertId) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::AlertDeleted {
            id,
            result: outcome(api.delete_alert(id).await, "Failed to delete alert"),
        }
    });
}

pub fn delete_all_alerts(app: &mut MarketApp, user_id: UserId) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::AlertsCleared(outcome(
            api.delete_user_alerts(user_id).await,
            "Failed to delete alerts",
        ))
    });
}
