use super::super::super::state::{AppState, Toast};
use super::super::action::HomeAction;
use super::super::command::Command;
use crate::application::filter::{FilterChoices, FilterField, current_year};
use crate::application::pagination;

pub fn reduce(state: &mut AppState, action: HomeAction) -> Vec<Command> {
    match action {
        HomeAction::SetFilter { field, value } => {
            let previous_brand = state.ui.filter.brand.clone();
            let choices = filter_choices(state);
            if let Err(err) = state.ui.filter.set(field, &value, &choices) {
                state.toast(Toast::error(err.to_string()));
                return Vec::new();
            }
            match &state.ui.filter.brand {
                Some(brand) if field == FilterField::Brand && previous_brand.as_ref() != Some(brand) => {
                    vec![Command::FetchModels(brand.clone())]
                }
                _ => Vec::new(),
            }
        }
        HomeAction::ResetFilters => {
            state.ui.filter.reset();
            Vec::new()
        }
        HomeAction::ToggleFilters => {
            state.ui.show_filters = !state.ui.show_filters;
            Vec::new()
        }
        HomeAction::SelectPage(page) => {
            let total = filtered_count(state);
            if page == state.listings.current_page {
                return Vec::new();
            }
            if pagination::can_select(page, state.listings.current_page, total) {
                state.listings.current_page = page;
            } else {
                state.toast(Toast::error(format!(
                    "Page {} does not exist ({} page(s))",
                    page,
                    pagination::page_count(total)
                )));
            }
            Vec::new()
        }
    }
}

/// Options offered by the filter panel right now.
pub fn filter_choices(state: &AppState) -> FilterChoices {
    let filter = &state.ui.filter;
    let models = filter
        .brand
        .as_deref()
        .map(|b| state.catalog.models_for(b).to_vec())
        .unwrap_or_default();
    FilterChoices {
        makes: state.catalog.makes.clone(),
        models,
        fuel_types: filter.option_values(&state.listings.all, FilterField::FuelType),
        transmissions: filter.option_values(&state.listings.all, FilterField::Transmission),
        current_year: current_year(),
    }
}

pub fn filtered_count(state: &AppState) -> usize {
    state
        .listings
        .all
        .iter()
        .filter(|l| state.ui.filter.matches(l))
        .count()
}
