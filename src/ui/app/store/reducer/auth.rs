use super::super::super::routing::Route;
use super::super::super::state::AppState;
use super::super::action::AuthAction;
use super::super::command::Command;
use super::{end_session, navigation};

pub fn reduce(state: &mut AppState, action: AuthAction) -> Vec<Command> {
    match action {
        AuthAction::Restore { token, user } => {
            state.auth.token = Some(token);
            state.auth.user = user;
            state.auth.is_authenticated = true;
            Vec::new()
        }
        AuthAction::RequestLogout => {
            if state.auth.is_authenticated {
                state.ui.confirm_logout = true;
            }
            Vec::new()
        }
        AuthAction::CancelLogout => {
            state.ui.confirm_logout = false;
            Vec::new()
        }
        AuthAction::ConfirmLogout => {
            if !state.ui.confirm_logout {
                return Vec::new();
            }
            log::info!("signing out");
            end_session(state);
            let mut commands = vec![Command::ClearSession];
            commands.extend(navigation::navigate(state, Route::Landing));
            commands
        }
    }
}
