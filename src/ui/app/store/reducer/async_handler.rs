use super::super::super::routing::Route;
use super::super::super::state::{AppState, RequestStatus, Toast};
use super::super::action::{ApiFailure, ApiOutcome, AsyncAction};
use super::super::command::Command;
use super::{check_session, navigation};
use crate::application::forms::{ListingForm, SignInForm};

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::SignedUp(result) => match result {
            Ok(_) => {
                state.auth.status = RequestStatus::Fulfilled;
                state.ui.sign_in = SignInForm {
                    email: state.ui.sign_up.email.clone(),
                    password: String::new(),
                };
                state.ui.sign_up = Default::default();
                state.toast(Toast::success(
                    "Account created",
                    "You can now sign in with your email and password.",
                ));
                navigation::navigate(state, Route::SignIn)
            }
            Err(failure) => {
                state.auth.status = RequestStatus::Rejected;
                state.auth.error = Some(failure.message);
                Vec::new()
            }
        },
        AsyncAction::SignedIn(result) => match result {
            Ok(response) => {
                log::info!("signed in");
                state.auth.status = RequestStatus::Fulfilled;
                state.auth.error = None;
                state.auth.token = Some(response.token.clone());
                state.auth.user = response.user.clone();
                state.auth.is_authenticated = true;
                state.ui.sign_in.password.clear();
                let mut commands = vec![Command::PersistSession {
                    token: response.token,
                    user: response.user,
                }];
                commands.extend(navigation::navigate(state, Route::Home));
                commands
            }
            Err(failure) => {
                state.auth.status = RequestStatus::Rejected;
                state.auth.error = Some(failure.message);
                Vec::new()
            }
        },

        AsyncAction::ListingsLoaded(result) => settle(state, result, |state, listings| {
            state.listings.status = RequestStatus::Fulfilled;
            state.listings.all = listings;
            Vec::new()
        }, listings_failed),
        AsyncAction::UserListingsLoaded(result) => settle(state, result, |state, listings| {
            state.listings.status = RequestStatus::Fulfilled;
            state.listings.mine = listings;
            if let Route::EditListing(id) = state.ui.route {
                navigation::fill_edit_form(state, id);
            }
            Vec::new()
        }, listings_failed),
        AsyncAction::ListingCreated(result) => {
            state.ui.listing_submitting = false;
            settle(state, result, |state, listing| {
                state.listings.all.insert(0, listing.clone());
                state.listings.mine.insert(0, listing);
                state.ui.listing_form = ListingForm::default();
                state.toast(Toast::success("Success!", "Your car listing has been created."));
                navigation::navigate(state, Route::Home)
            }, write_failed)
        }
        AsyncAction::ListingUpdated(result) => {
            state.ui.listing_submitting = false;
            settle(state, result, |state, listing| {
                for collection in [&mut state.listings.all, &mut state.listings.mine] {
                    if let Some(slot) = collection.iter_mut().find(|l| l.id == listing.id) {
                        *slot = listing.clone();
                    }
                }
                state.toast(Toast::success("Success!", "Your car listing has been updated."));
                navigation::navigate(state, Route::Dashboard)
            }, write_failed)
        }
        AsyncAction::ListingDeleted { id, result } => settle(state, result, |state, ()| {
            state.listings.all.retain(|l| l.id != id);
            state.listings.mine.retain(|l| l.id != id);
            state.ui.carousel.remove(&id);
            if state.ui.details == Some(id) {
                state.ui.details = None;
            }
            state.toast(Toast::success("Listing deleted", "Your listing has been removed."));
            Vec::new()
        }, write_failed),

        AsyncAction::AlertsLoaded(result) => settle(state, result, |state, alerts| {
            state.alerts.status = RequestStatus::Fulfilled;
            state.alerts.items = alerts;
            Vec::new()
        }, alerts_failed),
        AsyncAction::AlertCreated(result) => {
            state.ui.alert_submitting = false;
            settle(state, result, |state, alert| {
                state.alerts.items.insert(0, alert);
                alert_dialog_done(state)
            }, write_failed)
        }
        AsyncAction::AlertUpdated(result) => {
            state.ui.alert_submitting = false;
            settle(state, result, |state, alert| {
                if let Some(slot) = state.alerts.items.iter_mut().find(|a| a.id == alert.id) {
                    *slot = alert;
                }
                alert_dialog_done(state)
            }, write_failed)
        }
        AsyncAction::AlertDeleted { id, result } => settle(state, result, |state, ()| {
            state.alerts.items.retain(|a| a.id != id);
            state.toast(Toast::success(
                "Alert deleted",
                "Your alert has been successfully deleted.",
            ));
            Vec::new()
        }, write_failed),
        AsyncAction::AlertsCleared(result) => settle(state, result, |state, ()| {
            state.alerts.items.clear();
            state.toast(Toast::success(
                "Alerts deleted",
                "All your alerts have been deleted.",
            ));
            Vec::new()
        }, write_failed),

        AsyncAction::NotificationsLoaded(result) => settle(state, result, |state, items| {
            state.notifications.status = RequestStatus::Fulfilled;
            state.notifications.unread = items.len();
            state.notifications.items = items;
            Vec::new()
        }, |state, failure| {
            state.notifications.status = RequestStatus::Rejected;
            state.notifications.error = Some(failure.message.clone());
        }),
        AsyncAction::NotificationDeleted { id, result } => settle(state, result, |state, ()| {
            state.notifications.items.retain(|n| n.id != id);
            state.notifications.unread = state.notifications.unread.saturating_sub(1);
            state.toast(Toast::success(
                "Notification deleted",
                "The notification has been successfully deleted.",
            ));
            Vec::new()
        }, write_failed),

        AsyncAction::StatsLoaded(result) => settle(state, result, |state, stats| {
            state.stats.status = RequestStatus::Fulfilled;
            state.stats.error = None;
            state.stats.stats = Some(stats);
            Vec::new()
        }, |state, failure| {
            state.stats.status = RequestStatus::Rejected;
            state.stats.error = Some(failure.message.clone());
        }),

        AsyncAction::MakesLoaded(makes) => {
            state.catalog.makes = makes;
            Vec::new()
        }
        AsyncAction::ModelsLoaded { make, models } => {
            state.catalog.models.insert(make, models);
            Vec::new()
        }
    }
}

/// Apply a completion: `on_ok` with the value, or `on_err` plus the session check.
fn settle<T>(
    state: &mut AppState,
    result: ApiOutcome<T>,
    on_ok: impl FnOnce(&mut AppState, T) -> Vec<Command>,
    on_err: impl FnOnce(&mut AppState, &ApiFailure),
) -> Vec<Command> {
    match result {
        Ok(value) => on_ok(state, value),
        Err(failure) => {
            on_err(state, &failure);
            check_session(state, &failure)
        }
    }
}

fn listings_failed(state: &mut AppState, failure: &ApiFailure) {
    state.listings.status = RequestStatus::Rejected;
    state.listings.error = Some(failure.message.clone());
}

/// Writes report through a toast; the loaded collection stays on screen.
fn write_failed(state: &mut AppState, failure: &ApiFailure) {
    state.toast(Toast::error(failure.message.clone()));
}

fn alerts_failed(state: &mut AppState, failure: &ApiFailure) {
    state.alerts.status = RequestStatus::Rejected;
    state.alerts.error = Some(failure.message.clone());
}

/// Close the alert dialog and refresh the alerts page it was opened from.
fn alert_dialog_done(state: &mut AppState) -> Vec<Command> {
    state.ui.alert_dialog = None;
    match (state.ui.route.clone(), state.user_id()) {
        (Route::Alerts, Some(user_id)) => vec![Command::FetchAlerts(user_id)],
        _ => Vec::new(),
    }
}
