use super::super::super::state::{AppState, Toast};
use super::super::action::AlertAction;
use super::super::command::Command;
use super::require_user;
use crate::application::forms::AlertForm;

pub fn reduce(state: &mut AppState, action: AlertAction) -> Vec<Command> {
    match action {
        AlertAction::OpenCreate => {
            state.ui.alert_dialog = Some(AlertForm::create());
            state.ui.alert_submitting = false;
            vec![Command::FetchMakes]
        }
        AlertAction::OpenEdit(id) => {
            match state.alerts.items.iter().find(|a| a.id == id) {
                Some(alert) => {
                    state.ui.alert_dialog = Some(AlertForm::edit(alert));
                    state.ui.alert_submitting = false;
                }
                None => state.toast(Toast::error(format!("Alert {id} not found"))),
            }
            Vec::new()
        }
        AlertAction::CloseDialog => {
            state.ui.alert_dialog = None;
            state.ui.alert_submitting = false;
            Vec::new()
        }
        AlertAction::Delete(id) => vec![Command::DeleteAlert(id)],
        AlertAction::DeleteAll => match require_user(state) {
            Some(user_id) => vec![Command::DeleteAllAlerts(user_id)],
            None => Vec::new(),
        },
    }
}
