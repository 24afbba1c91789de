use std::fmt;

use super::heading;
use crate::ui::app::state::{AppState, RequestStatus};

const BAR_WIDTH: u64 = 30;

pub fn render(f: &mut fmt::Formatter<'_>, state: &AppState) -> fmt::Result {
    heading(f, "Dashboard")?;
    if let Some(user) = &state.auth.user {
        writeln!(f, "Welcome back, {}", user.display_name())?;
    }
    writeln!(f)?;

    let stats = &state.stats;
    match (stats.status, &stats.stats, &stats.error) {
        (RequestStatus::Pending, _, _) => writeln!(f, "Loading statistics...")?,
        (RequestStatus::Rejected, _, Some(error)) => writeln!(f, "Statistics unavailable: {}", error)?,
        (_, Some(figures), _) => {
            let rows = [
                ("Listings", figures.listings),
                ("Alerts", figures.alerts),
                ("Notifications", figures.notifications),
            ];
            let max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);
            for (label, count) in rows {
                let width = (count * BAR_WIDTH).div_ceil(max) as usize;
                writeln!(f, "  {:<14} {:<30} {}", label, "#".repeat(width), count)?;
            }
        }
        _ => {}
    }
    writeln!(f)?;

    writeln!(f, "Your listings: {}", state.listings.mine.len())?;
    for listing in state.listings.mine.iter().take(5) {
        writeln!(f, "  #{} {}", listing.id, listing.title())?;
    }
    let active = state.alerts.items.iter().filter(|a| a.active).count();
    writeln!(f, "Active alerts: {}", active)?;
    writeln!(f, "Unread notifications: {}", state.notifications.unread)
}
