//! Dialogs drawn over the page: listing details, the alert dialog, the logout
//! confirmation and the blocking validation alert (topmost).

use std::fmt;

use super::{alert_dialog, listing_card};
use crate::ui::app::state::AppState;

pub fn render(f: &mut fmt::Formatter<'_>, state: &AppState, image_base_url: &str) -> fmt::Result {
    if let Some(listing) = state.ui.details.and_then(|id| state.listings.find(id)) {
        writeln!(f)?;
        writeln!(f, "+-- Listing details")?;
        let index = state.ui.carousel.get(&listing.id).copied().unwrap_or(0);
        listing_card::render_details(f, listing, index, image_base_url)?;
        writeln!(f, "+-- close")?;
    }
    if let Some(form) = &state.ui.alert_dialog {
        writeln!(f)?;
        alert_dialog::render(f, form, &state.catalog, state.ui.alert_submitting)?;
    }
    if state.ui.confirm_logout {
        writeln!(f)?;
        writeln!(f, "Are you sure you want to log out? (yes / no)")?;
    }
    if let Some(message) = &state.ui.blocking_alert {
        writeln!(f)?;
        writeln!(f, "!! {}  (ok to dismiss)", message)?;
    }
    Ok(())
}
