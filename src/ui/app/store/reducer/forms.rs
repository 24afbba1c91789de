use super::super::super::routing::Route;
use super::super::super::state::{AppState, RequestStatus, Toast};
use super::super::action::FormAction;
use super::super::command::Command;
use super::{navigation, require_user};
use crate::application::filter::current_year;
use crate::application::forms::{AlertFormMode, Form};
use crate::domain::{UserRef, ValidationError};

/// Form currently in front of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveForm {
    AlertDialog,
    SignIn,
    SignUp,
    Listing,
}

pub fn active_form(state: &AppState) -> Option<ActiveForm> {
    if state.ui.alert_dialog.is_some() {
        return Some(ActiveForm::AlertDialog);
    }
    match state.ui.route {
        Route::SignIn => Some(ActiveForm::SignIn),
        Route::SignUp => Some(ActiveForm::SignUp),
        Route::CreateListing | Route::EditListing(_) => Some(ActiveForm::Listing),
        _ => None,
    }
}

pub fn reduce(state: &mut AppState, action: FormAction) -> Vec<Command> {
    match action {
        FormAction::Set { field, value } => set_field(state, &field, &value),
        FormAction::Toggle { field } => {
            let result = match state.ui.alert_dialog.as_mut() {
                Some(form) => form.toggle(&field),
                None => Err(ValidationError::UnknownField(field)),
            };
            if let Err(err) = result {
                state.toast(Toast::error(err.to_string()));
            }
            Vec::new()
        }
        FormAction::AttachImage(image) => {
            if state.ui.route == Route::CreateListing {
                state.ui.listing_form.attach(image);
            } else {
                state.toast(Toast::error("Images can only be attached to a new listing"));
            }
            Vec::new()
        }
        FormAction::Submit => submit(state),
        FormAction::Cancel => cancel(state),
    }
}

fn set_field(state: &mut AppState, field: &str, value: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    let result = match active_form(state) {
        Some(ActiveForm::AlertDialog) => {
            let makes = state.catalog.makes.clone();
            let brand = state
                .ui
                .alert_dialog
                .as_ref()
                .map(|f| f.brand.clone())
                .unwrap_or_default();
            let models = state.catalog.models_for(&brand).to_vec();
            match state.ui.alert_dialog.as_mut() {
                Some(form) => match field.trim().to_lowercase().as_str() {
                    "brand" => {
                        let result = form.set_brand(value, &makes);
                        if result.is_ok() && !form.brand.is_empty() && form.brand != brand {
                            commands.push(Command::FetchModels(form.brand.clone()));
                        }
                        result
                    }
                    "model" => form.set_model(value, &models),
                    _ => form.set(field, value),
                },
                None => Ok(()),
            }
        }
        Some(ActiveForm::SignIn) => state.ui.sign_in.set(field, value),
        Some(ActiveForm::SignUp) => state.ui.sign_up.set(field, value),
        Some(ActiveForm::Listing) => state.ui.listing_form.set(field, value),
        None => {
            state.toast(Toast::error("There is no form on this page"));
            return commands;
        }
    };
    if let Err(err) = result {
        state.toast(Toast::error(err.to_string()));
    }
    commands
}

fn submit(state: &mut AppState) -> Vec<Command> {
    match active_form(state) {
        Some(ActiveForm::AlertDialog) => submit_alert(state),
        Some(ActiveForm::SignIn) => match state.ui.sign_in.to_credentials() {
            Ok(credentials) => {
                state.auth.status = RequestStatus::Pending;
                state.auth.error = None;
                vec![Command::SignIn(credentials)]
            }
            Err(err) => block(state, err),
        },
        Some(ActiveForm::SignUp) => match state.ui.sign_up.to_request() {
            Ok(request) => {
                state.auth.status = RequestStatus::Pending;
                state.auth.error = None;
                vec![Command::SignUp(request)]
            }
            Err(err) => block(state, err),
        },
        Some(ActiveForm::Listing) => submit_listing(state),
        None => {
            state.toast(Toast::error("There is no form on this page"));
            Vec::new()
        }
    }
}

fn submit_listing(state: &mut AppState) -> Vec<Command> {
    if state.ui.listing_submitting {
        return Vec::new();
    }
    match state.ui.route {
        Route::CreateListing => {
            let Some(user_id) = require_user(state) else {
                return Vec::new();
            };
            match state
                .ui
                .listing_form
                .to_draft(Some(UserRef { id: user_id }), current_year())
            {
                Ok(draft) => {
                    state.ui.listing_submitting = true;
                    vec![Command::CreateListing {
                        draft,
                        images: state.ui.listing_form.images.clone(),
                    }]
                }
                Err(err) => block(state, err),
            }
        }
        Route::EditListing(id) => match state.ui.listing_form.to_draft(None, current_year()) {
            Ok(draft) => {
                state.ui.listing_submitting = true;
                vec![Command::UpdateListing { id, draft }]
            }
            Err(err) => block(state, err),
        },
        _ => Vec::new(),
    }
}

fn submit_alert(state: &mut AppState) -> Vec<Command> {
    if state.ui.alert_submitting {
        return Vec::new();
    }
    let Some(form) = state.ui.alert_dialog.clone() else {
        return Vec::new();
    };
    // Validation comes before the user check so a bad range never reaches the server.
    let draft = match form.to_draft(None) {
        Ok(draft) => draft,
        Err(err) => return block(state, err),
    };
    match form.mode {
        AlertFormMode::Create => {
            let Some(user_id) = require_user(state) else {
                return Vec::new();
            };
            state.ui.alert_submitting = true;
            vec![Command::CreateAlert(crate::domain::AlertDraft {
                user: Some(UserRef { id: user_id }),
                ..draft
            })]
        }
        AlertFormMode::Edit(id) => {
            let user = state.user_id().map(|id| UserRef { id });
            state.ui.alert_submitting = true;
            vec![Command::UpdateAlert {
                id,
                draft: crate::domain::AlertDraft { user, ..draft },
            }]
        }
    }
}

fn cancel(state: &mut AppState) -> Vec<Command> {
    if state.ui.blocking_alert.take().is_some() {
        return Vec::new();
    }
    if state.ui.alert_dialog.take().is_some() {
        state.ui.alert_submitting = false;
        return Vec::new();
    }
    if state.ui.details.take().is_some() {
        return Vec::new();
    }
    match state.ui.route {
        Route::CreateListing | Route::EditListing(_) => {
            navigation::navigate(state, Route::Dashboard)
        }
        _ => Vec::new(),
    }
}

fn block(state: &mut AppState, err: ValidationError) -> Vec<Command> {
    state.ui.blocking_alert = Some(err.to_string());
    Vec::new()
}
