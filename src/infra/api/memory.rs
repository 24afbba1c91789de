//! In-process marketplace backend.
//!
//! Behaves like the REST backend closely enough for offline sessions and tests: bearer
//! tokens are checked, ids are assigned, listings matching an active alert produce a
//! notification for the alert's owner.

use super::{ApiError, ApiResult, MarketplaceApi};
use crate::domain::{
    Alert, AlertDraft, AlertId, Credentials, ImageRef, ImageUpload, Listing, ListingDraft,
    ListingId, Notification, NotificationId, SignInResponse, SignUpRequest, User, UserId,
    UserRef, UserStats,
};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: Vec<(User, String)>,
    tokens: HashMap<String, UserId>,
    listings: Vec<Listing>,
    alerts: Vec<Alert>,
    notifications: Vec<(UserId, Notification)>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::Status {
            status: 404,
            message: Some(format!("{what} not found")),
        }
    }
}

#[derive(Default)]
pub struct InMemoryMarketplace {
    tables: Mutex<Tables>,
    token: RwLock<Option<String>>,
    calls: Mutex<Vec<String>>,
    failures: Mutex<Vec<(String, ApiError)>>,
}

impl InMemoryMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend with one account (`demo@carmarket.ma` / `demo`) and a few listings.
    pub fn with_demo_data() -> Self {
        let backend = Self::new();
        let demo = backend.register("Demo", "demo@carmarket.ma", "demo");
        let seller = backend.register("Karim", "karim@carmarket.ma", "karim");

        let stock = [
            ("Dacia", "Logan", "diesel", "Rabat", 85000.0, 2019, 120000, "manual"),
            ("Toyota", "Yaris", "hybrid", "Casablanca", 165000.0, 2021, 30000, "automatic"),
            ("Renault", "Clio", "gasoline", "Tanger", 98000.0, 2018, 76000, "manual"),
            ("Peugeot", "208", "diesel", "Marrakech", 112000.0, 2020, 54000, "manual"),
            ("Hyundai", "Tucson", "diesel", "Agadir", 240000.0, 2022, 21000, "automatic"),
            ("Volkswagen", "Golf", "gasoline", "Fès", 150000.0, 2017, 99000, "manual"),
            ("Tesla", "Model 3", "electric", "Casablanca", 390000.0, 2023, 8000, "automatic"),
        ];
        for (i, (brand, model, fuel, city, price, year, mileage, gearbox)) in
            stock.into_iter().enumerate()
        {
            let owner = if i % 3 == 0 { demo.id } else { seller.id };
            backend.insert_listing(
                ListingDraft {
                    brand: brand.into(),
                    model: model.into(),
                    fuel_type: fuel.into(),
                    location: city.into(),
                    price,
                    year,
                    mileage,
                    transmission: gearbox.into(),
                    description: format!("{brand} {model}, well maintained."),
                    user: None,
                },
                owner,
                &[],
            );
        }
        backend.insert_notification(demo.id, "Welcome to CarMarket! Create an alert to get notified.");
        backend
    }

    pub fn register(&self, first_name: &str, email: &str, password: &str) -> User {
        let mut tables = self.tables.lock();
        let user = User {
            id: tables.next_id(),
            first_name: first_name.to_string(),
            last_name: String::new(),
            email: email.to_string(),
            phone_number: String::new(),
        };
        tables.users.push((user.clone(), password.to_string()));
        user
    }

    pub fn insert_listing(
        &self,
        draft: ListingDraft,
        owner: UserId,
        images: &[ImageUpload],
    ) -> Listing {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let images = images
            .iter()
            .map(|upload| ImageRef::Stored {
                id: Some(tables.next_id()),
                image: format!("/uploads/{}/{}", id, upload.file_name),
            })
            .collect();
        let listing = Listing {
            id,
            brand: draft.brand,
            model: draft.model,
            fuel_type: draft.fuel_type,
            location: draft.location,
            price: draft.price,
            year: draft.year,
            mileage: draft.mileage,
            transmission: draft.transmission,
            description: draft.description,
            images,
            defects: Vec::new(),
            user: Some(UserRef { id: owner }),
        };
        tables.listings.push(listing.clone());

        let matched: Vec<(UserId, AlertId)> = tables
            .alerts
            .iter()
            .filter(|a| a.active && alert_matches(a, &listing))
            .filter_map(|a| a.owner_id().filter(|o| *o != owner).map(|o| (o, a.id)))
            .collect();
        for (user_id, alert_id) in matched {
            let notification = Notification {
                id: tables.next_id(),
                message: format!("New listing matches your alert: {}", listing.title()),
                date: Some(chrono::Utc::now().to_rfc3339()),
                alert_id: Some(alert_id),
                listing_id: Some(listing.id),
            };
            tables.notifications.push((user_id, notification));
        }
        listing
    }

    pub fn insert_notification(&self, user_id: UserId, message: &str) -> Notification {
        let mut tables = self.tables.lock();
        let notification = Notification {
            id: tables.next_id(),
            message: message.to_string(),
            date: Some(chrono::Utc::now().to_rfc3339()),
            alert_id: None,
            listing_id: None,
        };
        tables.notifications.push((user_id, notification.clone()));
        notification
    }

    /// Requests served so far, as `"METHOD /path"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Fail the next request whose `"METHOD /path"` starts with `prefix`.
    pub fn fail_next(&self, prefix: &str, error: ApiError) {
        self.failures.lock().push((prefix.to_string(), error));
    }

    /// Forget every issued token, as a backend restart would.
    pub fn revoke_tokens(&self) {
        self.tables.lock().tokens.clear();
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.tables.lock().listings.clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.tables.lock().alerts.clone()
    }

    fn begin(&self, call: String) -> ApiResult<()> {
        log::debug!("{}", call);
        let injected = {
            let mut failures = self.failures.lock();
            failures
                .iter()
                .position(|(prefix, _)| call.starts_with(prefix.as_str()))
                .map(|index| failures.remove(index).1)
        };
        self.calls.lock().push(call);
        match injected {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Record the call and resolve the bearer token to a user.
    fn authorized(&self, call: String) -> ApiResult<UserId> {
        self.begin(call)?;
        let token = self.token.read().clone();
        token
            .and_then(|t| self.tables.lock().tokens.get(&t).copied())
            .ok_or(ApiError::Unauthorized {
                message: Some("Invalid or expired token".to_string()),
            })
    }
}

fn alert_matches(alert: &Alert, listing: &Listing) -> bool {
    let text = |wanted: &str, actual: &str| wanted.is_empty() || wanted.eq_ignore_ascii_case(actual);
    text(&alert.brand, &listing.brand)
        && text(&alert.model, &listing.model)
        && text(&alert.location, &listing.location)
        && text(&alert.fuel_type, &listing.fuel_type)
        && text(&alert.transmission, &listing.transmission)
        && (alert.year_min == 0 || listing.year >= alert.year_min)
        && (alert.year_max == 0 || listing.year <= alert.year_max)
        && (alert.price_min == 0.0 || listing.price >= alert.price_min)
        && (alert.price_max == 0.0 || listing.price <= alert.price_max)
        && (alert.mileage_max == 0 || listing.mileage <= alert.mileage_max)
}

fn alert_from_draft(id: AlertId, owner: UserId, draft: &AlertDraft, created_at: Option<String>) -> Alert {
    Alert {
        id,
        location: draft.location.clone(),
        brand: draft.brand.clone(),
        model: draft.model.clone(),
        year_min: draft.year_min,
        year_max: draft.year_max,
        price_min: draft.price_min,
        price_max: draft.price_max,
        mileage_max: draft.mileage_max,
        fuel_type: draft.fuel_type.clone(),
        transmission: draft.transmission.clone(),
        has_defects: draft.has_defects,
        active: draft.active,
        created_at,
        user_id: Some(owner),
        user: None,
    }
}

#[async_trait]
impl MarketplaceApi for InMemoryMarketplace {
    fn set_bearer_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    fn bearer_token(&self) -> Option<String> {
        self.token.read().clone()
    }

    async fn sign_up(&self, request: &SignUpRequest) -> ApiResult<Option<User>> {
        self.begin("POST /user/signup".into())?;
        let mut tables = self.tables.lock();
        if tables
            .users
            .iter()
            .any(|(u, _)| u.email.eq_ignore_ascii_case(&request.email))
        {
            return Err(ApiError::Status {
                status: 400,
                message: Some("Email already in use".into()),
            });
        }
        let user = User {
            id: tables.next_id(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            phone_number: request.phone_number.clone(),
        };
        tables.users.push((user.clone(), request.password.clone()));
        Ok(Some(user))
    }

    async fn sign_in(&self, credentials: &Credentials) -> ApiResult<SignInResponse> {
        self.begin("POST /user/signin".into())?;
        let mut tables = self.tables.lock();
        let user = tables
            .users
            .iter()
            .find(|(u, pw)| u.email.eq_ignore_ascii_case(&credentials.email) && *pw == credentials.password)
            .map(|(u, _)| u.clone())
            .ok_or(ApiError::Status {
                status: 401,
                message: Some("Invalid email or password".into()),
            })?;
        let token = format!("token-{}-{}", user.id, tables.next_id());
        tables.tokens.insert(token.clone(), user.id);
        Ok(SignInResponse {
            token,
            user: Some(user),
        })
    }

    async fn create_listing(
        &self,
        draft: &ListingDraft,
        images: &[ImageUpload],
    ) -> ApiResult<Listing> {
        let caller = self.authorized("POST /annonce/create".into())?;
        let owner = draft.user.map(|u| u.id).unwrap_or(caller);
        Ok(self.insert_listing(draft.clone(), owner, images))
    }

    async fn list_listings(&self) -> ApiResult<Vec<Listing>> {
        self.authorized("GET /annonce/getall".into())?;
        Ok(self.listings())
    }

    async fn list_user_listings(&self, user_id: UserId) -> ApiResult<Vec<Listing>> {
        self.authorized(format!("GET /annonce/getall/{user_id}"))?;
        Ok(self
            .listings()
            .into_iter()
            .filter(|l| l.owner_id() == Some(user_id))
            .collect())
    }

    async fn update_listing(&self, id: ListingId, draft: &ListingDraft) -> ApiResult<Listing> {
        self.authorized(format!("PUT /annonce/update/{id}"))?;
        let mut tables = self.tables.lock();
        let listing = tables
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| Tables::not_found("Listing"))?;
        listing.brand = draft.brand.clone();
        listing.model = draft.model.clone();
        listing.fuel_type = draft.fuel_type.clone();
        listing.location = draft.location.clone();
        listing.price = draft.price;
        listing.year = draft.year;
        listing.mileage = draft.mileage;
        listing.transmission = draft.transmission.clone();
        listing.description = draft.description.clone();
        Ok(listing.clone())
    }

    async fn delete_listing(&self, id: ListingId) -> ApiResult<()> {
        self.authorized(format!("DELETE /annonce/{id}"))?;
        let mut tables = self.tables.lock();
        let before = tables.listings.len();
        tables.listings.retain(|l| l.id != id);
        if tables.listings.len() == before {
            return Err(Tables::not_found("Listing"));
        }
        Ok(())
    }

    async fn create_alert(&self, draft: &AlertDraft) -> ApiResult<Alert> {
        let caller = self.authorized("POST /alert/create".into())?;
        let owner = draft.user.map(|u| u.id).unwrap_or(caller);
        let mut tables = self.tables.lock();
        let alert = alert_from_draft(
            tables.next_id(),
            owner,
            draft,
            Some(chrono::Utc::now().to_rfc3339()),
        );
        tables.alerts.push(alert.clone());
        Ok(alert)
    }

    async fn list_user_alerts(&self, user_id: UserId) -> ApiResult<Vec<Alert>> {
        self.authorized(format!("GET /alert/getall/{user_id}"))?;
        Ok(self
            .alerts()
            .into_iter()
            .filter(|a| a.owner_id() == Some(user_id))
            .collect())
    }

    async fn update_alert(&self, id: AlertId, draft: &AlertDraft) -> ApiResult<Alert> {
        self.authorized(format!("PUT /alert/update/{id}"))?;
        let mut tables = self.tables.lock();
        let existing = tables
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Tables::not_found("Alert"))?;
        let owner = existing.owner_id().unwrap_or_default();
        *existing = alert_from_draft(id, owner, draft, existing.created_at.clone());
        Ok(existing.clone())
    }

    async fn delete_alert(&self, id: AlertId) -> ApiResult<()> {
        self.authorized(format!("DELETE /alert/delete/{id}"))?;
        let mut tables = self.tables.lock();
        let before = tables.alerts.len();
        tables.alerts.retain(|a| a.id != id);
        if tables.alerts.len() == before {
            return Err(Tables::not_found("Alert"));
        }
        Ok(())
    }

    async fn delete_user_alerts(&self, user_id: UserId) -> ApiResult<()> {
        self.authorized(format!("DELETE /alert/deleteall/{user_id}"))?;
        self.tables
            .lock()
            .alerts
            .retain(|a| a.owner_id() != Some(user_id));
        Ok(())
    }

    async fn list_user_notifications(&self, user_id: UserId) -> ApiResult<Vec<Notification>> {
        self.authorized(format!("GET /notification/getall/{user_id}"))?;
        Ok(self
            .tables
            .lock()
            .notifications
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, n)| n.clone())
            .collect())
    }

    async fn delete_notification(&self, id: NotificationId) -> ApiResult<()> {
        self.authorized(format!("DELETE /notification/{id}"))?;
        let mut tables = self.tables.lock();
        let before = tables.notifications.len();
        tables.notifications.retain(|(_, n)| n.id != id);
        if tables.notifications.len() == before {
            return Err(Tables::not_found("Notification"));
        }
        Ok(())
    }

    async fn user_stats(&self, user_id: UserId) -> ApiResult<UserStats> {
        self.authorized(format!("GET /stats/all/{user_id}"))?;
        let tables = self.tables.lock();
        Ok(UserStats {
            listings: tables
                .listings
                .iter()
                .filter(|l| l.owner_id() == Some(user_id))
                .count() as u64,
            alerts: tables
                .alerts
                .iter()
                .filter(|a| a.owner_id() == Some(user_id))
                .count() as u64,
            notifications: tables
                .notifications
                .iter()
                .filter(|(owner, _)| *owner == user_id)
                .count() as u64,
        })
    }
}
