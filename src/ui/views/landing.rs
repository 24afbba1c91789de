use std::fmt;

use super::{Screen, heading, request_state};
use crate::ui::components::listing_card;

const FEATURED: usize = 6;

pub fn render(f: &mut fmt::Formatter<'_>, screen: &Screen<'_>) -> fmt::Result {
    let state = screen.state;
    heading(f, "Find your perfect car")?;
    writeln!(
        f,
        "Browse verified listings, save searches as alerts and get notified when a match is posted."
    )?;
    writeln!(f)?;

    heading(f, "Featured Cars")?;
    let listings = &state.listings;
    if request_state(f, listings.status, listings.error.as_deref(), "Loading cars...")? {
        if listings.all.is_empty() {
            if state.auth.token.is_none() {
                writeln!(f, "Sign in to see the latest listings.")?;
            } else {
                writeln!(f, "No cars listed yet.")?;
            }
        }
        for listing in listings.all.iter().take(FEATURED) {
            let index = state.ui.carousel.get(&listing.id).copied().unwrap_or(0);
            listing_card::render(f, listing, index, screen.image_base_url)?;
        }
        if listings.all.len() > FEATURED {
            let target = if state.auth.is_authenticated {
                "/dashboard"
            } else {
                "/signup"
            };
            writeln!(
                f,
                "View all {} cars: go {}",
                listings.all.len(),
                target
            )?;
        }
    }

    if !state.auth.is_authenticated {
        writeln!(f)?;
        writeln!(f, "Ready to get started? Create an account with 'signup'.")?;
    }
    Ok(())
}
