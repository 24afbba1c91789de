use crate::domain::{
    AlertDraft, AlertId, Credentials, ImageUpload, ListingDraft, ListingId, NotificationId,
    SignUpRequest, User, UserId,
};
use crate::ui::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PersistSession {
        token: String,
        user: Option<User>,
    },
    ClearSession,
    PersistTheme(ThemeMode),

    SignUp(SignUpRequest),
    SignIn(Credentials),

    FetchListings,
    FetchUserListings(UserId),
    CreateListing {
        draft: ListingDraft,
        images: Vec<ImageUpload>,
    },
    UpdateListing {
        id: ListingId,
        draft: ListingDraft,
    },
    DeleteListing(ListingId),

    FetchAlerts(UserId),
    CreateAlert(AlertDraft),
    UpdateAlert {
        id: AlertId,
        draft: AlertDraft,
    },
    DeleteAlert(AlertId),
    DeleteAllAlerts(UserId),

    FetchNotifications(UserId),
    DeleteNotification(NotificationId),

    FetchStats(UserId),

    FetchMakes,
    FetchModels(String),
}
