use std::fmt;

use super::heading;

pub fn render(f: &mut fmt::Formatter<'_>, path: &str) -> fmt::Result {
    heading(f, "404")?;
    writeln!(f, "Oops! Page not found: {}", path)?;
    writeln!(f, "Type 'landing' to return home.")
}
