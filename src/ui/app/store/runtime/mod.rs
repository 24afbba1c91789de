pub mod alerts;
pub mod auth;
pub mod listings;
pub mod lookup;
pub mod notifications;
pub mod session;

#[cfg(test)]
mod tests;

use std::future::Future;

use super::super::MarketApp;
use super::action::{Action, ApiFailure, ApiOutcome, AsyncAction};
use super::command::Command;
use crate::infra::api::ApiResult;

pub fn run(app: &mut MarketApp, command: Command) {
    match command {
        Command::PersistSession { token, user } => session::persist_session(app, token, user),
        Command::ClearSession => session::clear_session(app),
        Command::PersistTheme(theme) => session::persist_theme(app, theme),

        Command::SignUp(request) => auth::sign_up(app, request),
        Command::SignIn(credentials) => auth::sign_in(app, credentials),

        Command::FetchListings => listings::fetch_listings(app),
        Command::FetchUserListings(user_id) => listings::fetch_user_listings(app, user_id),
        Command::CreateListing { draft, images } => listings::create_listing(app, draft, images),
        Command::UpdateListing { id, draft } => listings::update_listing(app, id, draft),
        Command::DeleteListing(id) => listings::delete_listing(app, id),

        Command::FetchAlerts(user_id) => alerts::fetch_alerts(app, user_id),
        Command::CreateAlert(draft) => alerts::create_alert(app, draft),
        Command::UpdateAlert { id, draft } => alerts::update_alert(app, id, draft),
        Command::DeleteAlert(id) => alerts::delete_alert(app, id),
        Command::DeleteAllAlerts(user_id) => alerts::delete_all_alerts(app, user_id),

        Command::FetchNotifications(user_id) => {
            notifications::fetch_notifications(app, user_id)
        }
        Command::DeleteNotification(id) => notifications::delete_notification(app, id),
        Command::FetchStats(user_id) => notifications::fetch_stats(app, user_id),

        Command::FetchMakes => lookup::fetch_makes(app),
        Command::FetchModels(make) => lookup::fetch_models(app, make),
    }
}

/// Run `task` in the background; its completion comes back through `action_tx`.
pub(super) fn spawn<F>(app: &mut MarketApp, task: F)
where
    F: Future<Output = AsyncAction> + Send + 'static,
{
    let action_tx = app.action_tx.clone();
    app.in_flight += 1;
    tokio::spawn(async move {
        let action = task.await;
        if action_tx.send(Action::Async(action)).await.is_err() {
            log::debug!("app closed before a request completed");
        }
    });
}

/// Log a failed request and keep the part the reducer needs.
pub(super) fn outcome<T>(result: ApiResult<T>, fallback: &str) -> ApiOutcome<T> {
    result.map_err(|err| {
        log::warn!("{}: {}", fallback, err);
        ApiFailure::from_error(&err, fallback)
    })
}
