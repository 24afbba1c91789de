use crate::application::filter::FilterField;
use crate::domain::{
    Alert, AlertId, ImageUpload, Listing, ListingId, Notification, NotificationId,
    SignInResponse, User, UserStats,
};
use crate::infra::api::ApiError;

/// Failure of an async request, reduced to what the views show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub message: String,
    /// The server rejected the stored session.
    pub unauthorized: bool,
}

impl ApiFailure {
    pub fn from_error(error: &ApiError, fallback: &str) -> Self {
        Self {
            message: error.user_message(fallback),
            unauthorized: error.is_unauthorized(),
        }
    }
}

pub type ApiOutcome<T> = Result<T, ApiFailure>;

#[derive(Debug)]
pub enum Action {
    Navigation(NavigationAction),
    Auth(AuthAction),
    Form(FormAction),
    Home(HomeAction),
    Listing(ListingAction),
    Alert(AlertAction),
    Notification(NotificationAction),
    Ui(UiAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum NavigationAction {
    Go(String),
    /// Re-run the current route's on-enter fetches.
    Refresh,
}

#[derive(Debug)]
pub enum AuthAction {
    /// Session read back from storage at start-up.
    Restore {
        token: String,
        user: Option<User>,
    },
    RequestLogout,
    ConfirmLogout,
    CancelLogout,
}

/// Edits to whichever form is in front: the alert dialog when open, else the page's form.
#[derive(Debug)]
pub enum FormAction {
    Set { field: String, value: String },
    Toggle { field: String },
    AttachImage(ImageUpload),
    Submit,
    Cancel,
}

#[derive(Debug)]
pub enum HomeAction {
    SetFilter { field: FilterField, value: String },
    ResetFilters,
    ToggleFilters,
    SelectPage(usize),
}

#[derive(Debug)]
pub enum ListingAction {
    ShowDetails(ListingId),
    CloseDetails,
    NextImage(ListingId),
    PreviousImage(ListingId),
    Delete(ListingId),
}

#[derive(Debug)]
pub enum AlertAction {
    OpenCreate,
    OpenEdit(AlertId),
    CloseDialog,
    Delete(AlertId),
    DeleteAll,
}

#[derive(Debug)]
pub enum NotificationAction {
    MarkRead(NotificationId),
    Delete(NotificationId),
}

#[derive(Debug)]
pub enum UiAction {
    ToggleTheme,
    DismissAlert,
    Quit,
}

/// Completions sent back by runtime tasks; each task sends exactly one.
#[derive(Debug)]
pub enum AsyncAction {
    SignedUp(ApiOutcome<Option<User>>),
    SignedIn(ApiOutcome<SignInResponse>),

    ListingsLoaded(ApiOutcome<Vec<Listing>>),
    UserListingsLoaded(ApiOutcome<Vec<Listing>>),
    ListingCreated(ApiOutcome<Listing>),
    ListingUpdated(ApiOutcome<Listing>),
    ListingDeleted {
        id: ListingId,
        result: ApiOutcome<()>,
    },

    AlertsLoaded(ApiOutcome<Vec<Alert>>),
    AlertCreated(ApiOutcome<Alert>),
    AlertUpdated(ApiOutcome<Alert>),
    AlertDeleted {
        id: AlertId,
        result: ApiOutcome<()>,
    },
    AlertsCleared(ApiOutcome<()>),

    NotificationsLoaded(ApiOutcome<Vec<Notification>>),
    NotificationDeleted {
        id: NotificationId,
        result: ApiOutcome<()>,
    },

    StatsLoaded(ApiOutcome<UserStats>),

    /// Lookup failures degrade to empty lists before reaching the reducer.
    MakesLoaded(Vec<String>),
    ModelsLoaded {
        make: String,
        models: Vec<String>,
    },
}
