use std::fmt;

use crate::application::forms::{AlertForm, Form};
use crate::domain::{FuelType, Transmission};
use crate::ui::app::state::CatalogState;

pub fn render(
    f: &mut fmt::Formatter<'_>,
    form: &AlertForm,
    catalog: &CatalogState,
    submitting: bool,
) -> fmt::Result {
    let title = if form.is_create() {
        "Create Alert"
    } else {
        "Edit Alert"
    };
    writeln!(f, "+-- {} ", title)?;
    for (key, value) in form.fields() {
        writeln!(f, "| {:<13} {}", key, value)?;
    }
    if form.is_create() {
        if !catalog.makes.is_empty() {
            writeln!(f, "| brands: {}", catalog.makes.join(", "))?;
        }
        let models = catalog.models_for(&form.brand);
        if !models.is_empty() {
            writeln!(f, "| models: {}", models.join(", "))?;
        }
        writeln!(f, "| fuel: {}", join(&FuelType::ALL))?;
        writeln!(f, "| transmission: {}", join(&Transmission::ALL))?;
    }
    if submitting {
        writeln!(f, "| Saving...")?;
    }
    writeln!(f, "+-- set <field> <value> | toggle <field> | submit | cancel")
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}
