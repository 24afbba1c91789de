use std::collections::HashMap;

use crate::application::filter::ListingFilter;
use crate::application::forms::{AlertForm, ListingForm, SignInForm, SignUpForm};
use crate::domain::{Alert, Listing, ListingId, Notification, User, UserId, UserStats};
use crate::ui::theme::ThemeMode;

use super::routing::Route;

/// Lifecycle of the last request a slice issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }
}

#[derive(Debug, Clone)]
pub struct ListingsState {
    /// Every listing, as returned by the last "all listings" fetch.
    pub all: Vec<Listing>,
    /// Listings owned by the signed-in user.
    pub mine: Vec<Listing>,
    pub status: RequestStatus,
    pub error: Option<String>,
    /// 1-based page of the listings browser.
    pub current_page: usize,
}

impl Default for ListingsState {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            mine: Vec::new(),
            status: RequestStatus::Idle,
            error: None,
            current_page: 1,
        }
    }
}

impl ListingsState {
    pub fn find(&self, id: ListingId) -> Option<&Listing> {
        self.all
            .iter()
            .chain(self.mine.iter())
            .find(|l| l.id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlertsState {
    pub items: Vec<Alert>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub status: RequestStatus,
    pub error: Option<String>,
    /// Local only; reset to the item count on every fetch.
    pub unread: usize,
}

#[derive(Debug, Clone, Default)]
pub struct StatsState {
    pub stats: Option<UserStats>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

/// Make/model lookup results.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub makes: Vec<String>,
    pub models: HashMap<String, Vec<String>>,
}

impl CatalogState {
    pub fn models_for(&self, make: &str) -> &[String] {
        self.models.get(make).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// View-local state: forms, dialogs, filters and transient messages.
#[derive(Debug, Clone)]
pub struct UiState {
    pub route: Route,
    pub theme: ThemeMode,
    /// Shown once, then drained by the front end.
    pub toasts: Vec<Toast>,
    /// Modal message that must be dismissed (validation failures).
    pub blocking_alert: Option<String>,
    pub confirm_logout: bool,

    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,

    pub filter: ListingFilter,
    pub show_filters: bool,

    pub listing_form: ListingForm,
    /// Listing the edit form was filled from.
    pub listing_form_source: Option<ListingId>,
    pub listing_submitting: bool,

    pub alert_dialog: Option<AlertForm>,
    pub alert_submitting: bool,

    /// Listing whose details dialog is open.
    pub details: Option<ListingId>,
    /// Carousel position per listing card.
    pub carousel: HashMap<ListingId, usize>,

    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            route: Route::default(),
            theme: ThemeMode::default(),
            toasts: Vec::new(),
            blocking_alert: None,
            confirm_logout: false,
            sign_in: SignInForm::default(),
            sign_up: SignUpForm::default(),
            filter: ListingFilter::default(),
            show_filters: true,
            listing_form: ListingForm::default(),
            listing_form_source: None,
            listing_submitting: false,
            alert_dialog: None,
            alert_submitting: false,
            details: None,
            carousel: HashMap::new(),
            should_quit: false,
        }
    }
}

/// All app state in one struct.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub listings: ListingsState,
    pub alerts: AlertsState,
    pub notifications: NotificationsState,
    pub stats: StatsState,
    pub catalog: CatalogState,
    pub ui: UiState,
}

impl AppState {
    pub fn user_id(&self) -> Option<UserId> {
        self.auth.user_id()
    }

    pub fn toast(&mut self, toast: Toast) {
        self.ui.toasts.push(toast);
    }
}
