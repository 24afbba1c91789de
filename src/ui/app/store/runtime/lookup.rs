//! Make/model pickers. A lookup outage leaves the pickers empty rather than failing
//! the page.

use super::super::super::MarketApp;
use super::super::action::AsyncAction;
use super::spawn;

pub fn fetch_makes(app: &mut MarketApp) {
    let catalog = app.catalog.clone();
    spawn(app, async move {
        let makes = catalog.makes().await.unwrap_or_else(|err| {
            log::warn!("vehicle makes unavailable: {}", err);
            Vec::new()
        });
        AsyncAction::MakesLoaded(makes)
    });
}

pub fn fetch_models(app: &mut MarketApp, make: String) {
    let catalog = app.catalog.clone();
    spawn(app, async move {
        let models = catalog.models(&make).await.unwrap_or_else(|err| {
            log::warn!("models for {} unavailable: {}", make, err);
            Vec::new()
        });
        AsyncAction::ModelsLoaded { make, models }
    });
}
