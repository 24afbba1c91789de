use std::fmt;

use crate::domain::{Listing, format_price, group_thousands};

/// One listing as a card: title, price badge, key facts and the current photo.
pub fn render(
    f: &mut fmt::Formatter<'_>,
    listing: &Listing,
    image_index: usize,
    image_base_url: &str,
) -> fmt::Result {
    writeln!(
        f,
        "#{:<4} {}  [${}]",
        listing.id,
        listing.title(),
        format_price(listing.price)
    )?;
    writeln!(f, "      {}", or_na(&listing.location))?;
    writeln!(
        f,
        "      {} | {} mi | {} | {}",
        listing.year,
        group_thousands(listing.mileage),
        or_na(&listing.fuel_type),
        or_na(&listing.transmission)
    )?;
    match photo(listing, image_index, image_base_url) {
        Some((position, url)) => writeln!(
            f,
            "      photo {}/{}: {}",
            position,
            listing.images.len(),
            url
        ),
        None => writeln!(f, "      Photo coming soon"),
    }
}

/// Full details, as shown in the details dialog.
pub fn render_details(
    f: &mut fmt::Formatter<'_>,
    listing: &Listing,
    image_index: usize,
    image_base_url: &str,
) -> fmt::Result {
    writeln!(f, "{} - {}", listing.title(), listing.year)?;
    writeln!(
        f,
        "Price ${} | {} mi | {} | {} | {}",
        format_price(listing.price),
        group_thousands(listing.mileage),
        or_na(&listing.fuel_type),
        or_na(&listing.transmission),
        or_na(&listing.location)
    )?;
    if !listing.description.trim().is_empty() {
        writeln!(f)?;
        writeln!(f, "{}", listing.description.trim())?;
    }
    if !listing.defects.is_empty() {
        writeln!(f)?;
        writeln!(f, "Defects:")?;
        for defect in &listing.defects {
            writeln!(f, "  - {}", defect.defect)?;
        }
    }
    if let Some((position, url)) = photo(listing, image_index, image_base_url) {
        writeln!(f)?;
        writeln!(f, "Photo {}/{}: {}", position, listing.images.len(), url)?;
        if listing.images.len() > 1 {
            writeln!(f, "(prev {id} / next {id})", id = listing.id)?;
        }
    }
    Ok(())
}

/// 1-based position and resolved URL of the photo the carousel is on.
fn photo(listing: &Listing, image_index: usize, image_base_url: &str) -> Option<(usize, String)> {
    let count = listing.images.len();
    if count == 0 {
        return None;
    }
    let index = image_index % count;
    Some((index + 1, listing.images[index].url(image_base_url)))
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() { "N/A" } else { value }
}
