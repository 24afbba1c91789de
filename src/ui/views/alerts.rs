use std::fmt;

use super::{heading, request_state};
use crate::domain::{Alert, format_date, format_price, group_thousands};
use crate::ui::app::state::AppState;

pub fn render(f: &mut fmt::Formatter<'_>, state: &AppState) -> fmt::Result {
    heading(f, "Your Alerts")?;
    let alerts = &state.alerts;
    if request_state(f, alerts.status, alerts.error.as_deref(), "Loading alerts...")? {
        if alerts.items.is_empty() {
            writeln!(f, "No alerts created yet")?;
        }
        for alert in &alerts.items {
            render_alert(f, alert)?;
        }
    }
    writeln!(f)?;
    writeln!(f, "new | edit <id> | delete <id> | delete-all")
}

fn render_alert(f: &mut fmt::Formatter<'_>, alert: &Alert) -> fmt::Result {
    let title = format!("{} {}", alert.brand, alert.model);
    let title = if title.trim().is_empty() {
        "Any car"
    } else {
        title.trim()
    };
    let status = if alert.active { "Active" } else { "Inactive" };
    writeln!(f, "#{:<4} {} [{}]", alert.id, title, status)?;

    if !alert.location.is_empty() {
        writeln!(f, "      Location: {}", alert.location)?;
    }
    if alert.year_min != 0 || alert.year_max != 0 {
        writeln!(
            f,
            "      Year Range: {} - {}",
            bound(alert.year_min, alert.year_min.to_string()),
            bound(alert.year_max, alert.year_max.to_string())
        )?;
    }
    if alert.price_min != 0.0 || alert.price_max != 0.0 {
        writeln!(
            f,
            "      Price Range: {} - {}",
            bound(alert.price_min, format!("${}", format_price(alert.price_min))),
            bound(alert.price_max, format!("${}", format_price(alert.price_max)))
        )?;
    }
    if alert.mileage_max != 0 {
        writeln!(
            f,
            "      Max Mileage: {} mi",
            group_thousands(alert.mileage_max)
        )?;
    }
    if !alert.fuel_type.is_empty() {
        writeln!(f, "      Fuel Type: {}", alert.fuel_type)?;
    }
    if !alert.transmission.is_empty() {
        writeln!(f, "      Transmission: {}", alert.transmission)?;
    }
    writeln!(
        f,
        "      Has Defects: {}",
        if alert.has_defects { "Yes" } else { "No" }
    )?;
    if let Some(created) = &alert.created_at {
        writeln!(f, "      Created: {}", format_date(created))?;
    }
    Ok(())
}

/// Zero means the bound is open.
fn bound<T: PartialEq + Default>(value: T, shown: String) -> String {
    if value == T::default() {
        "any".to_string()
    } else {
        shown
    }
}
