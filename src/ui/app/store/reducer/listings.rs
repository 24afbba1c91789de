use super::super::super::state::{AppState, Toast};
use super::super::action::ListingAction;
use super::super::command::Command;

pub fn reduce(state: &mut AppState, action: ListingAction) -> Vec<Command> {
    match action {
        ListingAction::ShowDetails(id) => {
            if state.listings.find(id).is_some() {
                state.ui.details = Some(id);
            } else {
                state.toast(Toast::error(format!("Listing {id} not found")));
            }
            Vec::new()
        }
        ListingAction::CloseDetails => {
            state.ui.details = None;
            Vec::new()
        }
        ListingAction::NextImage(id) => {
            step_carousel(state, id, 1);
            Vec::new()
        }
        ListingAction::PreviousImage(id) => {
            step_carousel(state, id, -1);
            Vec::new()
        }
        ListingAction::Delete(id) => {
            let owned = state.listings.mine.iter().any(|l| l.id == id);
            if !owned {
                state.toast(Toast::error("You can only delete your own listings"));
                return Vec::new();
            }
            vec![Command::DeleteListing(id)]
        }
    }
}

/// Move a card's carousel by `step`, wrapping at both ends.
fn step_carousel(state: &mut AppState, id: crate::domain::ListingId, step: isize) {
    let Some(count) = state.listings.find(id).map(|l| l.images.len()) else {
        state.toast(Toast::error(format!("Listing {id} not found")));
        return;
    };
    if count == 0 {
        return;
    }
    let current = state.ui.carousel.get(&id).copied().unwrap_or(0) % count;
    let next = (current as isize + step).rem_euclid(count as isize) as usize;
    state.ui.carousel.insert(id, next);
}
