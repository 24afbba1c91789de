use super::super::super::routing::{Route, guard};
use super::super::super::state::{AppState, RequestStatus};
use super::super::action::NavigationAction;
use super::super::command::Command;
use crate::application::forms::ListingForm;

pub fn reduce(state: &mut AppState, action: NavigationAction) -> Vec<Command> {
    match action {
        NavigationAction::Go(path) => navigate(state, Route::parse(&path)),
        NavigationAction::Refresh => on_enter(state),
    }
}

/// Show `route` (or where the guard sends it) and run its on-enter effects.
pub fn navigate(state: &mut AppState, route: Route) -> Vec<Command> {
    let route = guard(route, state.auth.is_authenticated);
    state.ui.route = route;
    state.ui.details = None;
    state.ui.alert_dialog = None;
    state.ui.confirm_logout = false;
    on_enter(state)
}

fn on_enter(state: &mut AppState) -> Vec<Command> {
    let commands = enter_commands(state);
    for command in &commands {
        let status = match command {
            Command::FetchListings | Command::FetchUserListings(_) => &mut state.listings.status,
            Command::FetchAlerts(_) => &mut state.alerts.status,
            Command::FetchNotifications(_) => &mut state.notifications.status,
            Command::FetchStats(_) => &mut state.stats.status,
            _ => continue,
        };
        *status = RequestStatus::Pending;
    }
    commands
}

fn enter_commands(state: &mut AppState) -> Vec<Command> {
    let user_id = state.user_id();
    match state.ui.route.clone() {
        Route::Landing => {
            if state.auth.token.is_some() {
                vec![Command::FetchListings]
            } else {
                Vec::new()
            }
        }
        Route::SignIn | Route::SignUp => {
            state.auth.error = None;
            Vec::new()
        }
        Route::Home => {
            let mut commands = vec![Command::FetchListings, Command::FetchMakes];
            if let Some(brand) = state.ui.filter.brand.clone() {
                commands.push(Command::FetchModels(brand));
            }
            commands
        }
        Route::MyListings => user_id
            .map(Command::FetchUserListings)
            .into_iter()
            .collect(),
        Route::Dashboard => match user_id {
            Some(id) => vec![
                Command::FetchUserListings(id),
                Command::FetchAlerts(id),
                Command::FetchNotifications(id),
                Command::FetchStats(id),
            ],
            None => Vec::new(),
        },
        Route::CreateListing => {
            state.ui.listing_form = ListingForm::default();
            state.ui.listing_form_source = None;
            Vec::new()
        }
        Route::EditListing(id) => {
            state.ui.listing_form_source = None;
            state.ui.listing_form = ListingForm::default();
            fill_edit_form(state, id);
            user_id
                .map(Command::FetchUserListings)
                .into_iter()
                .collect()
        }
        Route::Alerts => user_id.map(Command::FetchAlerts).into_iter().collect(),
        Route::Notifications => user_id
            .map(Command::FetchNotifications)
            .into_iter()
            .collect(),
        Route::NotFound(path) => {
            log::warn!("no route for {}", path);
            Vec::new()
        }
    }
}

/// Fill the edit form from the user's own listings, once per listing.
pub fn fill_edit_form(state: &mut AppState, id: crate::domain::ListingId) {
    if state.ui.listing_form_source == Some(id) {
        return;
    }
    if let Some(listing) = state.listings.mine.iter().find(|l| l.id == id) {
        state.ui.listing_form = ListingForm::from_listing(listing);
        state.ui.listing_form_source = Some(id);
    }
}
