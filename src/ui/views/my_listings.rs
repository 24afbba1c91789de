use std::fmt;

use super::{Screen, heading, request_state};
use crate::ui::components::listing_card;

pub fn render(f: &mut fmt::Formatter<'_>, screen: &Screen<'_>) -> fmt::Result {
    let state = screen.state;
    heading(f, "My Listings")?;
    let listings = &state.listings;
    if !request_state(f, listings.status, listings.error.as_deref(), "Loading...")? {
        return Ok(());
    }
    if listings.mine.is_empty() {
        return writeln!(f, "You have not created any listings yet. Type 'new' to add one.");
    }
    for listing in &listings.mine {
        let index = state.ui.carousel.get(&listing.id).copied().unwrap_or(0);
        listing_card::render(f, listing, index, screen.image_base_url)?;
        writeln!(f, "      edit {id} | delete {id}", id = listing.id)?;
    }
    Ok(())
}
