//! Storage-backed commands. These run inline; a failed write is logged and the
//! in-memory session carries on.

use super::super::super::MarketApp;
use crate::domain::User;
use crate::ui::theme::ThemeMode;

pub fn persist_session(app: &mut MarketApp, token: String, user: Option<User>) {
    app.api.set_bearer_token(Some(token.clone()));
    if let Err(err) = app.storage.store_session(&token, user.as_ref()) {
        log::warn!("{}", err);
    }
}

pub fn clear_session(app: &mut MarketApp) {
    app.api.set_bearer_token(None);
    if let Err(err) = app.storage.clear_session() {
        log::warn!("{}", err);
    }
}

pub fn persist_theme(app: &mut MarketApp, theme: ThemeMode) {
    if let Err(err) = app.storage.set_theme(theme.as_str()) {
        log::warn!("{}", err);
    }
}
