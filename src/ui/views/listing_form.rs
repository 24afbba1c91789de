use std::fmt;

use super::heading;
use crate::application::forms::Form;
use crate::domain::{FuelType, ListingId, Transmission};
use crate::ui::app::state::AppState;

pub fn render(
    f: &mut fmt::Formatter<'_>,
    state: &AppState,
    editing: Option<ListingId>,
) -> fmt::Result {
    match editing {
        None => heading(f, "Create a listing")?,
        Some(id) => {
            heading(f, &format!("Edit listing #{}", id))?;
            if state.ui.listing_form_source != Some(id) {
                return if state.listings.status.is_pending() {
                    writeln!(f, "Loading listing...")
                } else {
                    writeln!(f, "Listing not found.")
                };
            }
        }
    }

    let form = &state.ui.listing_form;
    for (key, value) in form.fields() {
        writeln!(f, "  {:<13} {}", key, value)?;
    }
    writeln!(
        f,
        "  fuel: {} | transmission: {}",
        FuelType::ALL.map(|v| v.to_string()).join(", "),
        Transmission::ALL.map(|v| v.to_string()).join(", ")
    )?;
    if editing.is_none() {
        if form.images.is_empty() {
            writeln!(f, "  photos: none ('image <path>' to attach)")?;
        } else {
            let names: Vec<&str> = form.images.iter().map(|i| i.file_name.as_str()).collect();
            writeln!(f, "  photos: {}", names.join(", "))?;
        }
    }
    if state.ui.listing_submitting {
        writeln!(f, "Saving...")?;
    }
    writeln!(f, "set <field> <value> | submit | cancel")
}
