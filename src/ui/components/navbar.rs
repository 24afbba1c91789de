use std::fmt;

use crate::ui::app::routing::Route;
use crate::ui::app::state::AppState;

const LINKS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("My listings", Route::MyListings),
    ("Dashboard", Route::Dashboard),
    ("Alerts", Route::Alerts),
    ("Notifications", Route::Notifications),
];

pub fn render(f: &mut fmt::Formatter<'_>, state: &AppState) -> fmt::Result {
    write!(f, "CarMarket |")?;
    if state.auth.is_authenticated {
        for (label, route) in &LINKS {
            let label = match route {
                Route::Notifications if state.notifications.unread > 0 => {
                    format!("{} ({})", label, state.notifications.unread)
                }
                _ => label.to_string(),
            };
            if *route == state.ui.route {
                write!(f, " [{}]", label)?;
            } else {
                write!(f, " {}", label)?;
            }
        }
        let name = state
            .auth
            .user
            .as_ref()
            .map(|u| u.display_name())
            .unwrap_or("User");
        write!(f, " | {} | logout", name)?;
    } else {
        write!(f, " Sign in  Sign up")?;
    }
    writeln!(f, " | theme: {}", state.ui.theme)
}
