use super::super::super::MarketApp;
use super::super::action::AsyncAction;
use super::{outcome, spawn};
use crate::domain::{Credentials, SignUpRequest};

pub fn sign_up(app: &mut MarketApp, request: SignUpRequest) {
    let api = app.api.clone();
    spawn(app, async move {
        log::info!("creating account for {}", request.email);
        AsyncAction::SignedUp(outcome(api.sign_up(&request).await, "Signup failed"))
    });
}

pub fn sign_in(app: &mut MarketApp, credentials: Credentials) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::SignedIn(outcome(
            api.sign_in(&credentials).await,
            "Invalid credentials",
        ))
    });
}
