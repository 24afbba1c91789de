//! Terminal command line to store actions.
//!
//! Commands that act on "the thing in front of you" (`new`, `edit`, `delete`) resolve
//! against the current route, the way the page's buttons would.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::routing::Route;
use super::store::{
    Action, AlertAction, AuthAction, FormAction, HomeAction, ListingAction, NavigationAction,
    NotificationAction, UiAction,
};
use crate::application::filter::FilterField;
use crate::domain::ImageUpload;

pub const HELP: &str = "\
Navigation:
  go <path>             open a path, e.g. go /home
  landing | home | mine | dashboard | alerts | notifications
  signin | signup | new | edit <id> | refresh

Forms:
  set <field> [value]   fill a field on the open form or dialog (empty clears)
  toggle <field>        flip a checkbox (has-defects, active)
  image <path>          attach a photo to a new listing
  signin <email> <pass> sign in with an existing account
  submit | cancel

Listings:
  filter <field> [value]  set or clear a filter (brand, model, year, price-min, ...)
  filter reset | filters  clear all filters / show or hide the panel
  page <n>                go to a page of results
  details <id> | close    open or close a listing's details
  next <id> | prev <id>   step a listing's photos
  delete <id>             delete the listing, alert or notification on this page

Alerts and notifications:
  new | edit <id>       open the alert dialog (on the alerts page)
  delete-all            delete every alert
  read <id>             mark a notification as read

Other:
  theme | ok | logout | yes | no | help | quit";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unknown command '{0}'. Type 'help' for the list.")]
    UnknownCommand(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a valid id or page number")]
    BadNumber(String),

    #[error("Nothing to {0} on this page")]
    NotHere(&'static str),

    #[error(transparent)]
    Filter(#[from] crate::domain::ValidationError),

    #[error("Failed to read image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A parsed line of input.
#[derive(Debug)]
pub enum Input {
    Actions(Vec<Action>),
    Help,
    Nothing,
}

pub fn parse_command(line: &str, route: &Route) -> Result<Input, InputError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let command = command.to_lowercase();

    let action = match command.as_str() {
        "" => return Ok(Input::Nothing),
        "help" | "?" => return Ok(Input::Help),

        "go" | "open" => go(required(rest, "go", "a path")?),
        "landing" => go("/"),
        "home" => go("/home"),
        "mine" | "my-listings" => go("/my-annonces"),
        "dashboard" => go("/dashboard"),
        "alerts" => go("/alerts"),
        "notifications" | "inbox" => go("/notifications"),
        "signin" if rest.is_empty() => go("/signin"),
        "signin" | "login" => return login(rest, route),
        "signup" => go("/signup"),
        "refresh" => Action::Navigation(NavigationAction::Refresh),
        "new" => match route {
            Route::Alerts => Action::Alert(AlertAction::OpenCreate),
            _ => go(&Route::CreateListing.path()),
        },
        "edit" => {
            let id = number(required(rest, "edit", "an id")?)?;
            match route {
                Route::Alerts => Action::Alert(AlertAction::OpenEdit(id)),
                _ => go(&Route::EditListing(id).path()),
            }
        }

        "set" => {
            let (field, value) = split_field(required(rest, "set", "a field name")?);
            Action::Form(FormAction::Set {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
        "toggle" => Action::Form(FormAction::Toggle {
            field: required(rest, "toggle", "a field name")?.to_string(),
        }),
        "image" => Action::Form(FormAction::AttachImage(read_image(Path::new(
            required(rest, "image", "a file path")?,
        ))?)),
        "submit" | "save" => Action::Form(FormAction::Submit),
        "cancel" | "back" => Action::Form(FormAction::Cancel),

        "filter" => match rest {
            "reset" | "clear" => Action::Home(HomeAction::ResetFilters),
            _ => {
                let (field, value) = split_field(required(rest, "filter", "a field name")?);
                Action::Home(HomeAction::SetFilter {
                    field: field.parse::<FilterField>()?,
                    value: value.to_string(),
                })
            }
        },
        "filters" => Action::Home(HomeAction::ToggleFilters),
        "page" => Action::Home(HomeAction::SelectPage(number(required(
            rest,
            "page",
            "a page number",
        )?)?)),

        "details" | "show" => Action::Listing(ListingAction::ShowDetails(number(required(
            rest, "details", "an id",
        )?)?)),
        "close" => Action::Listing(ListingAction::CloseDetails),
        "next" => Action::Listing(ListingAction::NextImage(number(required(
            rest, "next", "an id",
        )?)?)),
        "prev" | "previous" => Action::Listing(ListingAction::PreviousImage(number(required(
            rest, "prev", "an id",
        )?)?)),
        "delete" => {
            let id = number(required(rest, "delete", "an id")?)?;
            match route {
                Route::Alerts => Action::Alert(AlertAction::Delete(id)),
                Route::Notifications => Action::Notification(NotificationAction::Delete(id)),
                Route::MyListings | Route::Dashboard | Route::Home => {
                    Action::Listing(ListingAction::Delete(id))
                }
                _ => return Err(InputError::NotHere("delete")),
            }
        }
        "delete-all" => Action::Alert(AlertAction::DeleteAll),
        "read" => Action::Notification(NotificationAction::MarkRead(number(required(
            rest, "read", "an id",
        )?)?)),

        "theme" => Action::Ui(UiAction::ToggleTheme),
        "ok" | "dismiss" => Action::Ui(UiAction::DismissAlert),
        "logout" => Action::Auth(AuthAction::RequestLogout),
        "yes" | "confirm" => Action::Auth(AuthAction::ConfirmLogout),
        "no" | "stay" => Action::Auth(AuthAction::CancelLogout),
        "quit" | "exit" => Action::Ui(UiAction::Quit),

        _ => return Err(InputError::UnknownCommand(command)),
    };
    Ok(Input::Actions(vec![action]))
}

fn go(path: &str) -> Action {
    Action::Navigation(NavigationAction::Go(path.to_string()))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument { command, what })
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(raw: &str) -> Result<T, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::BadNumber(raw.trim().to_string()))
}

fn split_field(rest: &str) -> (&str, &str) {
    match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
    }
}

/// Fill the sign-in form and submit it, opening the page first when needed.
fn login(rest: &str, route: &Route) -> Result<Input, InputError> {
    let (email, password) = split_field(required(rest, "signin", "an email and a password")?);
    if password.is_empty() {
        return Err(InputError::MissingArgument {
            command: "signin",
            what: "a password",
        });
    }
    let mut actions = Vec::new();
    if *route != Route::SignIn {
        actions.push(go("/signin"));
    }
    actions.extend([
        Action::Form(FormAction::Set {
            field: "email".into(),
            value: email.to_string(),
        }),
        Action::Form(FormAction::Set {
            field: "password".into(),
            value: password.to_string(),
        }),
        Action::Form(FormAction::Submit),
    ]);
    Ok(Input::Actions(actions))
}

fn read_image(path: &Path) -> Result<ImageUpload, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    Ok(ImageUpload { file_name, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn actions(line: &str, route: &Route) -> Vec<Action> {
        match parse_command(line, route).unwrap() {
            Input::Actions(actions) => actions,
            other => panic!("expected actions, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_help() {
        assert!(matches!(
            parse_command("   ", &Route::Home).unwrap(),
            Input::Nothing
        ));
        assert!(matches!(
            parse_command("help", &Route::Home).unwrap(),
            Input::Help
        ));
    }

    #[test]
    fn set_keeps_spaces_in_value() {
        let parsed = actions("set description  Clean car, one owner ", &Route::CreateListing);
        assert!(matches!(
            parsed.as_slice(),
            [Action::Form(FormAction::Set { field, value })]
                if field == "description" && value == "Clean car, one owner"
        ));
    }

    #[test]
    fn delete_depends_on_page() {
        assert!(matches!(
            actions("delete 4", &Route::Alerts).as_slice(),
            [Action::Alert(AlertAction::Delete(4))]
        ));
        assert!(matches!(
            actions("delete 4", &Route::Notifications).as_slice(),
            [Action::Notification(NotificationAction::Delete(4))]
        ));
        assert!(matches!(
            actions("delete 4", &Route::MyListings).as_slice(),
            [Action::Listing(ListingAction::Delete(4))]
        ));
        assert!(matches!(
            parse_command("delete 4", &Route::SignIn),
            Err(InputError::NotHere("delete"))
        ));
    }

    #[test]
    fn new_and_edit_on_alerts_page_open_dialog() {
        assert!(matches!(
            actions("new", &Route::Alerts).as_slice(),
            [Action::Alert(AlertAction::OpenCreate)]
        ));
        assert!(matches!(
            actions("edit 2", &Route::Alerts).as_slice(),
            [Action::Alert(AlertAction::OpenEdit(2))]
        ));
        assert!(matches!(
            actions("edit 2", &Route::Dashboard).as_slice(),
            [Action::Navigation(NavigationAction::Go(path))] if path == "/edit-annonce/2"
        ));
    }

    #[test]
    fn filter_fields_parse() {
        assert!(matches!(
            actions("filter min-price 50000", &Route::Home).as_slice(),
            [Action::Home(HomeAction::SetFilter { field: FilterField::PriceMin, value })]
                if value == "50000"
        ));
        assert!(matches!(
            actions("filter reset", &Route::Home).as_slice(),
            [Action::Home(HomeAction::ResetFilters)]
        ));
        assert!(matches!(
            parse_command("filter colour red", &Route::Home),
            Err(InputError::Filter(_))
        ));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(
            parse_command("page two", &Route::Home),
            Err(InputError::BadNumber(_))
        ));
        assert!(matches!(
            parse_command("details", &Route::Home),
            Err(InputError::MissingArgument { command: "details", .. })
        ));
        assert!(matches!(
            parse_command("fly", &Route::Home),
            Err(InputError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_command("signin a@b.c", &Route::SignIn),
            Err(InputError::MissingArgument { what: "a password", .. })
        ));
    }

    #[test]
    fn signin_fills_and_submits() {
        let parsed = actions("signin a@b.c hunter2", &Route::SignIn);
        assert_eq!(parsed.len(), 3);
        assert!(matches!(parsed[2], Action::Form(FormAction::Submit)));

        let parsed = actions("signin a@b.c hunter2", &Route::Landing);
        assert_eq!(parsed.len(), 4);
        assert!(matches!(
            &parsed[0],
            Action::Navigation(NavigationAction::Go(path)) if path == "/signin"
        ));
    }

    #[test]
    fn image_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(b"jpeg").unwrap();
        let line = format!("image {}", file.path().display());
        match actions(&line, &Route::CreateListing).as_slice() {
            [Action::Form(FormAction::AttachImage(upload))] => {
                assert_eq!(upload.bytes, b"jpeg");
                assert!(upload.file_name.ends_with(".jpg"));
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(matches!(
            parse_command("image /no/such/file.png", &Route::CreateListing),
            Err(InputError::Image { .. })
        ));
    }
}
