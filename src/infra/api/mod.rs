//! Backend REST API.
//!
//! `MarketplaceApi` is the seam the store runtime talks to; `HttpMarketplaceApi` is the
//! reqwest implementation and `InMemoryMarketplace` an in-process stand-in.

pub mod error;
pub mod http;
pub mod memory;

pub use error::{ApiError, ApiResult, extract_message};
pub use http::HttpMarketplaceApi;
pub use memory::InMemoryMarketplace;

use crate::domain::{
    Alert, AlertDraft, AlertId, Credentials, ImageUpload, Listing, ListingDraft, ListingId,
    Notification, NotificationId, SignInResponse, SignUpRequest, User, UserId, UserStats,
};
use async_trait::async_trait;

#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Token attached as `Authorization: Bearer` to every request except sign-in/sign-up.
    fn set_bearer_token(&self, token: Option<String>);
    fn bearer_token(&self) -> Option<String>;

    /// The backend echoes the created user, but not every deployment does.
    async fn sign_up(&self, request: &SignUpRequest) -> ApiResult<Option<User>>;
    async fn sign_in(&self, credentials: &Credentials) -> ApiResult<SignInResponse>;

    async fn create_listing(
        &self,
        draft: &ListingDraft,
        images: &[ImageUpload],
    ) -> ApiResult<Listing>;
    async fn list_listings(&self) -> ApiResult<Vec<Listing>>;
    async fn list_user_listings(&self, user_id: UserId) -> ApiResult<Vec<Listing>>;
    async fn update_listing(&self, id: ListingId, draft: &ListingDraft) -> ApiResult<Listing>;
    async fn delete_listing(&self, id: ListingId) -> ApiResult<()>;

    async fn create_alert(&self, draft: &AlertDraft) -> ApiResult<Alert>;
    async fn list_user_alerts(&self, user_id: UserId) -> ApiResult<Vec<Alert>>;
    async fn update_alert(&self, id: AlertId, draft: &AlertDraft) -> ApiResult<Alert>;
    async fn delete_alert(&self, id: AlertId) -> ApiResult<()>;
    async fn delete_user_alerts(&self, user_id: UserId) -> ApiResult<()>;

    async fn list_user_notifications(&self, user_id: UserId) -> ApiResult<Vec<Notification>>;
    async fn delete_notification(&self, id: NotificationId) -> ApiResult<()>;

    async fn user_stats(&self, user_id: UserId) -> ApiResult<UserStats>;
}
