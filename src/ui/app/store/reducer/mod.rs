pub mod alerts;
pub mod async_handler;
pub mod auth;
pub mod forms;
pub mod home;
pub mod listings;
pub mod navigation;
pub mod notifications;


use super::super::routing::Route;
use super::super::state::{AppState, Toast};
use super::action::{Action, ApiFailure, UiAction};
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Navigation(action) => navigation::reduce(state, action),
        Action::Auth(action) => auth::reduce(state, action),
        Action::Form(action) => forms::reduce(state, action),
        Action::Home(action) => home::reduce(state, action),
        Action::Listing(action) => listings::reduce(state, action),
        Action::Alert(action) => alerts::reduce(state, action),
        Action::Notification(action) => notifications::reduce(state, action),
        Action::Ui(action) => reduce_ui(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}

fn reduce_ui(state: &mut AppState, action: UiAction) -> Vec<Command> {
    match action {
        UiAction::ToggleTheme => {
            state.ui.theme = state.ui.theme.toggled();
            vec![Command::PersistTheme(state.ui.theme)]
        }
        UiAction::DismissAlert => {
            state.ui.blocking_alert = None;
            Vec::new()
        }
        UiAction::Quit => {
            state.ui.should_quit = true;
            Vec::new()
        }
    }
}

/// Handle the session side of a failed request: a rejected token ends the session and
/// the guard takes the user back to sign-in.
pub(super) fn check_session(state: &mut AppState, failure: &ApiFailure) -> Vec<Command> {
    if !failure.unauthorized || !state.auth.is_authenticated {
        return Vec::new();
    }
    log::info!("session rejected by the server, signing out");
    end_session(state);
    state.toast(Toast::error("Your session has expired. Please sign in again."));
    let mut commands = vec![Command::ClearSession];
    if state.ui.route.is_protected() {
        commands.extend(navigation::navigate(state, Route::SignIn));
    }
    commands
}

pub(super) fn end_session(state: &mut AppState) {
    state.auth.user = None;
    state.auth.token = None;
    state.auth.is_authenticated = false;
}

/// Require a signed-in user id, or toast the standard message.
pub(super) fn require_user(state: &mut AppState) -> Option<crate::domain::UserId> {
    let user_id = state.user_id();
    if user_id.is_none() {
        state.toast(Toast::error("User not authenticated"));
    }
    user_id
}
