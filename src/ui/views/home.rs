use std::fmt;

use super::{Screen, heading, request_state};
use crate::application::filter::FilterField;
use crate::application::pagination::{PAGE_SIZE, page_count, page_slice, shows_page_buttons};
use crate::ui::app::state::AppState;
use crate::ui::components::listing_card;

pub fn render(f: &mut fmt::Formatter<'_>, screen: &Screen<'_>) -> fmt::Result {
    let state = screen.state;
    heading(f, "All Cars")?;
    render_filters(f, state)?;
    writeln!(f)?;

    let listings = &state.listings;
    if !request_state(f, listings.status, listings.error.as_deref(), "Loading cars...")? {
        return Ok(());
    }

    let filtered = state.ui.filter.apply(&listings.all);
    let total = filtered.len();
    if total == 0 {
        return writeln!(f, "No cars match your filters.");
    }

    let page = listings.current_page;
    let slice = page_slice(&filtered, page);
    if slice.is_empty() {
        writeln!(f, "Page {} is empty ({} cars).", page, total)?;
    } else {
        let start = (page - 1) * PAGE_SIZE + 1;
        writeln!(
            f,
            "Showing {}-{} of {} cars",
            start,
            start + slice.len() - 1,
            total
        )?;
        for listing in slice {
            let index = state.ui.carousel.get(&listing.id).copied().unwrap_or(0);
            listing_card::render(f, listing, index, screen.image_base_url)?;
        }
    }

    if shows_page_buttons(total) {
        write!(f, "Pages:")?;
        for number in 1..=page_count(total) {
            if number == page {
                write!(f, " [{}]", number)?;
            } else {
                write!(f, " {}", number)?;
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

fn render_filters(f: &mut fmt::Formatter<'_>, state: &AppState) -> fmt::Result {
    if !state.ui.show_filters {
        return writeln!(f, "Filters hidden ('filters' to show)");
    }
    writeln!(f, "Filters ('filters' to hide, 'filter reset' to clear)")?;
    let filter = &state.ui.filter;
    for field in FilterField::ALL {
        let value = filter.display_value(field).unwrap_or_else(|| "Any".into());
        write!(f, "  {:<13} {:<16}", field.label(), value)?;
        let options = match field {
            FilterField::Brand => state.catalog.makes.clone(),
            FilterField::Model => filter
                .brand
                .as_deref()
                .map(|brand| state.catalog.models_for(brand).to_vec())
                .unwrap_or_default(),
            FilterField::FuelType | FilterField::Transmission => {
                filter.option_values(&state.listings.all, field)
            }
            _ => Vec::new(),
        };
        if !options.is_empty() {
            write!(f, " ({})", options.join(", "))?;
        }
        writeln!(f)?;
    }
    Ok(())
}
