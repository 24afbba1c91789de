use super::super::super::MarketApp;
use super::super::action::AsyncAction;
use super::{outcome, spawn};
use crate::domain::{ImageUpload, ListingDraft, ListingId, UserId};

pub fn fetch_listings(app: &mut MarketApp) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::ListingsLoaded(outcome(
            api.list_listings().await,
            "Failed to fetch listings",
        ))
    });
}

pub fn fetch_user_listings(app: &mut MarketApp, user_id: UserId) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::UserListingsLoaded(outcome(
            api.list_user_listings(user_id).await,
            "Failed to fetch user listings",
        ))
    });
}

pub fn create_listing(app: &mut MarketApp, draft: ListingDraft, images: Vec<ImageUpload>) {
    let api = app.api.clone();
    spawn(app, async move {
        log::info!(
            "publishing {} {} with {} image(s)",
            draft.brand,
            draft.model,
            images.len()
        );
        AsyncAction::ListingCreated(outcome(
            api.create_listing(&draft, &images).await,
            "Failed to create listing",
        ))
    });
}

pub fn update_listing(app: &mut MarketApp, id: ListingId, draft: ListingDraft) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::ListingUpdated(outcome(
            api.update_listing(id, &draft).await,
            "Failed to update listing",
        ))
    });
}

pub fn delete_listing(app: &mut MarketApp, id: ListingId) {
    let api = app.api.clone();
    spawn(app, async move {
        AsyncAction::ListingDeleted {
            id,
            result: outcome(api.delete_listing(id).await, "Failed to delete listing"),
        }
    });
}
