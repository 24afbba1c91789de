use super::{ApiError, ApiResult, MarketplaceApi};
use crate::domain::{
    Alert, AlertDraft, AlertId, Credentials, ImageUpload, Listing, ListingDraft, ListingId,
    Notification, NotificationId, SignInResponse, SignUpRequest, User, UserId, UserStats,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Method, RequestBuilder, Response, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Paths that never carry the bearer token.
const PUBLIC_PATHS: [&str; 2] = ["/user/signup", "/user/signin"];

/// reqwest-backed client for the marketplace backend.
#[derive(Clone)]
pub struct HttpMarketplaceApi {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpMarketplaceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> (RequestBuilder, bool) {
        log::debug!("{} {}", method, path);
        let builder = self.http.request(method, self.url(path));
        if !requires_auth(path) {
            return (builder, false);
        }
        match self.token.read().clone() {
            Some(token) => (builder.bearer_auth(token), true),
            None => (builder, true),
        }
    }

    async fn send(builder: RequestBuilder, authenticated: bool) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::warn!("backend answered {}: {}", status, body.trim());
        Err(ApiError::from_status(status.as_u16(), &body, authenticated))
    }

    async fn json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let (builder, authenticated) = self.request(Method::GET, path);
        let response = Self::send(builder, authenticated).await?;
        Self::json(response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (builder, authenticated) = self.request(method, path);
        let response = Self::send(builder.json(body), authenticated).await?;
        Self::json(response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let (builder, authenticated) = self.request(Method::DELETE, path);
        Self::send(builder, authenticated).await?;
        Ok(())
    }
}

pub fn requires_auth(path: &str) -> bool {
    !PUBLIC_PATHS.iter().any(|public| path.starts_with(public))
}

/// Multipart body for listing creation: an `annonce` JSON part plus one `images` part per file.
pub fn listing_form(draft: &ListingDraft, images: &[ImageUpload]) -> ApiResult<multipart::Form> {
    let payload = serde_json::to_string(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
    let mut form = multipart::Form::new().text("annonce", payload);
    for image in images {
        let part = multipart::Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        form = form.part("images", part);
    }
    Ok(form)
}

#[async_trait]
impl MarketplaceApi for HttpMarketplaceApi {
    fn set_bearer_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    fn bearer_token(&self) -> Option<String> {
        self.token.read().clone()
    }

    async fn sign_up(&self, request: &SignUpRequest) -> ApiResult<Option<User>> {
        let (builder, authenticated) = self.request(Method::POST, "/user/signup");
        let response = Self::send(builder.json(request), authenticated).await?;
        let body: serde_json::Value = Self::json(response).await.unwrap_or_default();
        Ok(serde_json::from_value(body).ok())
    }

    async fn sign_in(&self, credentials: &Credentials) -> ApiResult<SignInResponse> {
        self.send_json(Method::POST, "/user/signin", credentials)
            .await
    }

    async fn create_listing(
        &self,
        draft: &ListingDraft,
        images: &[ImageUpload],
    ) -> ApiResult<Listing> {
        let form = listing_form(draft, images)?;
        let (builder, authenticated) = self.request(Method::POST, "/annonce/create");
        let response = Self::send(builder.multipart(form), authenticated).await?;
        Self::json(response).await
    }

    async fn list_listings(&self) -> ApiResult<Vec<Listing>> {
        self.get_json("/annonce/getall").await
    }

    async fn list_user_listings(&self, user_id: UserId) -> ApiResult<Vec<Listing>> {
        self.get_json(&format!("/annonce/getall/{}", user_id)).await
    }

    async fn update_listing(&self, id: ListingId, draft: &ListingDraft) -> ApiResult<Listing> {
        self.send_json(Method::PUT, &format!("/annonce/update/{}", id), draft)
            .await
    }

    async fn delete_listing(&self, id: ListingId) -> ApiResult<()> {
        self.delete(&format!("/annonce/{}", id)).await
    }

    async fn create_alert(&self, draft: &AlertDraft) -> ApiResult<Alert> {
        self.send_json(Method::POST, "/alert/create", draft).await
    }

    async fn list_user_alerts(&self, user_id: UserId) -> ApiResult<Vec<Alert>> {
        self.get_json(&format!("/alert/getall/{}", user_id)).await
    }

    async fn update_alert(&self, id: AlertId, draft: &AlertDraft) -> ApiResult<Alert> {
        self.send_json(Method::PUT, &format!("/alert/update/{}", id), draft)
            .await
    }

    async fn delete_alert(&self, id: AlertId) -> ApiResult<()> {
        self.delete(&format!("/alert/delete/{}", id)).await
    }

    async fn delete_user_alerts(&self, user_id: UserId) -> ApiResult<()> {
        self.delete(&format!("/alert/deleteall/{}", user_id)).await
    }

    async fn list_user_notifications(&self, user_id: UserId) -> ApiResult<Vec<Notification>> {
        self.get_json(&format!("/notification/getall/{}", user_id))
            .await
    }

    async fn delete_notification(&self, id: NotificationId) -> ApiResult<()> {
        self.delete(&format!("/notification/{}", id)).await
    }

    async fn user_stats(&self, user_id: UserId) -> ApiResult<UserStats> {
        self.get_json(&format!("/stats/all/{}", user_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoints_are_public() {
        assert!(!requires_auth("/user/signup"));
        assert!(!requires_auth("/user/signin"));
        assert!(requires_auth("/annonce/getall"));
        assert!(requires_auth("/alert/deleteall/3"));
    }

    #[test]
    fn token_is_shared_between_clones() {
        let api = HttpMarketplaceApi::new("http://localhost:8082/");
        let clone = api.clone();
        api.set_bearer_token(Some("abc".into()));
        assert_eq!(clone.bearer_token().as_deref(), Some("abc"));
        assert_eq!(api.base_url(), "http://localhost:8082");
        api.set_bearer_token(None);
        assert_eq!(clone.bearer_token(), None);
    }

    #[test]
    fn listing_form_accepts_images() {
        let draft = ListingDraft::default();
        let images = vec![ImageUpload {
            file_name: "front.jpg".into(),
            bytes: vec![1, 2, 3],
        }];
        assert!(listing_form(&draft, &images).is_ok());
    }
}
