//! Text rendering of the current route.
//!
//! Views are pure functions of `AppState` and never dispatch; the binary prints the
//! screen and turns the next input line into actions.

mod alerts;
mod auth;
mod dashboard;
mod home;
mod landing;
mod listing_form;
mod my_listings;
mod not_found;
mod notifications;


use std::fmt;

use super::app::routing::Route;
use super::app::state::{AppState, RequestStatus};
use super::components::{navbar, overlays};

/// Everything a page needs to draw itself.
pub struct Screen<'a> {
    pub state: &'a AppState,
    pub image_base_url: &'a str,
}

impl<'a> Screen<'a> {
    pub fn new(state: &'a AppState, image_base_url: &'a str) -> Self {
        Self {
            state,
            image_base_url,
        }
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        navbar::render(f, self.state)?;
        writeln!(f)?;
        match &self.state.ui.route {
            Route::Landing => landing::render(f, self)?,
            Route::SignIn => auth::render_sign_in(f, self.state)?,
            Route::SignUp => auth::render_sign_up(f, self.state)?,
            Route::Home => home::render(f, self)?,
            Route::MyListings => my_listings::render(f, self)?,
            Route::Dashboard => dashboard::render(f, self.state)?,
            Route::CreateListing => listing_form::render(f, self.state, None)?,
            Route::EditListing(id) => listing_form::render(f, self.state, Some(*id))?,
            Route::Alerts => alerts::render(f, self.state)?,
            Route::Notifications => notifications::render(f, self.state)?,
            Route::NotFound(path) => not_found::render(f, path)?,
        }
        overlays::render(f, self.state, self.image_base_url)
    }
}

pub fn render(state: &AppState, image_base_url: &str) -> String {
    Screen::new(state, image_base_url).to_string()
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

/// Loading and error lines for a collection. Returns whether the content should follow.
fn request_state(
    f: &mut fmt::Formatter<'_>,
    status: RequestStatus,
    error: Option<&str>,
    loading: &str,
) -> Result<bool, fmt::Error> {
    match (status, error) {
        (RequestStatus::Pending, _) => {
            writeln!(f, "{}", loading)?;
            Ok(false)
        }
        (RequestStatus::Rejected, Some(error)) => {
            writeln!(f, "Error: {}", error)?;
            Ok(false)
        }
        _ => Ok(true),
    }
}
