//! Route table and guard.

use crate::domain::ListingId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    SignUp,
    SignIn,
    Home,
    MyListings,
    Dashboard,
    CreateListing,
    EditListing(ListingId),
    Alerts,
    Notifications,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "" | "/" => Self::Landing,
            "/signup" => Self::SignUp,
            "/signin" => Self::SignIn,
            "/home" => Self::Home,
            "/my-annonces" => Self::MyListings,
            "/dashboard" => Self::Dashboard,
            "/annonce/create" => Self::CreateListing,
            "/alerts" => Self::Alerts,
            "/notifications" => Self::Notifications,
            other => other
                .strip_prefix("/edit-annonce/")
                .and_then(|id| id.parse().ok())
                .map(Self::EditListing)
                .unwrap_or_else(|| Self::NotFound(other.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".into(),
            Self::SignUp => "/signup".into(),
            Self::SignIn => "/signin".into(),
            Self::Home => "/home".into(),
            Self::MyListings => "/my-annonces".into(),
            Self::Dashboard => "/dashboard".into(),
            Self::CreateListing => "/annonce/create".into(),
            Self::EditListing(id) => format!("/edit-annonce/{id}"),
            Self::Alerts => "/alerts".into(),
            Self::Notifications => "/notifications".into(),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            Self::Landing | Self::SignUp | Self::SignIn | Self::NotFound(_)
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "CarMarket",
            Self::SignUp => "Create account",
            Self::SignIn => "Sign in",
            Self::Home => "All Cars",
            Self::MyListings => "My Listings",
            Self::Dashboard => "Dashboard",
            Self::CreateListing => "Create Listing",
            Self::EditListing(_) => "Edit Listing",
            Self::Alerts => "My Alerts",
            Self::Notifications => "Notifications",
            Self::NotFound(_) => "Page not found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Route actually shown: protected routes fall back to sign-in without a session.
pub fn guard(route: Route, is_authenticated: bool) -> Route {
    if route.is_protected() && !is_authenticated {
        Route::SignIn
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_table() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse("/home/"), Route::Home);
        assert_eq!(Route::parse("/my-annonces"), Route::MyListings);
        assert_eq!(Route::parse("/edit-annonce/12"), Route::EditListing(12));
        assert_eq!(
            Route::parse("/edit-annonce/abc"),
            Route::NotFound("/edit-annonce/abc".into())
        );
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".into()));
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Landing,
            Route::SignUp,
            Route::SignIn,
            Route::Home,
            Route::MyListings,
            Route::Dashboard,
            Route::CreateListing,
            Route::EditListing(3),
            Route::Alerts,
            Route::Notifications,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn guard_redirects_protected_routes() {
        assert_eq!(guard(Route::Dashboard, false), Route::SignIn);
        assert_eq!(guard(Route::Dashboard, true), Route::Dashboard);
        assert_eq!(guard(Route::Landing, false), Route::Landing);
        assert_eq!(
            guard(Route::NotFound("/x".into()), false),
            Route::NotFound("/x".into())
        );
    }
}
