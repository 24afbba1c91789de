use std::fmt;

use super::heading;
use crate::application::forms::Form;
use crate::ui::app::state::AppState;

pub fn render_sign_in(f: &mut fmt::Formatter<'_>, state: &AppState) -> fmt::Result {
    heading(f, "Sign in")?;
    render_fields(f, state.ui.sign_in.fields())?;
    render_status(f, state, "Signing in...")?;
    writeln!(f, "signin <email> <password> | submit | Don't have an account? signup")
}

pub fn render_sign_up(f: &mut fmt::Formatter<'_>, state: &AppState) -> fmt::Result {
    heading(f, "Create an account")?;
    render_fields(f, state.ui.sign_up.fields())?;
    render_status(f, state, "Creating account...")?;
    writeln!(f, "set <field> <value> | submit | Already registered? signin")
}

fn render_fields(f: &mut fmt::Formatter<'_>, fields: Vec<(&'static str, String)>) -> fmt::Result {
    for (key, value) in fields {
        writeln!(f, "  {:<11} {}", key, value)?;
    }
    Ok(())
}

fn render_status(f: &mut fmt::Formatter<'_>, state: &AppState, pending: &str) -> fmt::Result {
    if state.auth.status.is_pending() {
        writeln!(f, "{}", pending)?;
    }
    if let Some(error) = &state.auth.error {
        writeln!(f, "Error: {}", error)?;
    }
    Ok(())
}
