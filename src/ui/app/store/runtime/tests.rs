use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt};

use crate::domain::{AlertDraft, UserRef};
use crate::infra::api::{ApiError, ApiResult, InMemoryMarketplace};
use crate::infra::lookup::{StaticCatalog, VehicleCatalog};
use crate::infra::storage::LocalStorage;
use crate::ui::app::routing::Route;
use crate::ui::app::state::{RequestStatus, ToastVariant};
use crate::ui::app::store::action::{
    Action, AlertAction, AuthAction, FormAction, HomeAction, NavigationAction,
};
use crate::ui::app::store::command::Command;
use crate::ui::app::store::runtime;
use crate::ui::app::{Event, Input, MarketApp, parse_command};
use crate::ui::theme::ThemeMode;

fn app_with(backend: Arc<InMemoryMarketplace>, storage: Arc<LocalStorage>) -> MarketApp {
    MarketApp::new(
        backend,
        Arc::new(StaticCatalog::demo()),
        storage,
        "http://localhost:8082",
    )
}

fn go(app: &mut MarketApp, path: &str) {
    app.dispatch(Action::Navigation(NavigationAction::Go(path.into())));
}

fn set(app: &mut MarketApp, field: &str, value: &str) {
    app.dispatch(Action::Form(FormAction::Set {
        field: field.into(),
        value: value.into(),
    }));
}

async fn sign_in(app: &mut MarketApp, email: &str, password: &str) {
    go(app, "/signin");
    set(app, "email", email);
    set(app, "password", password);
    app.dispatch(Action::Form(FormAction::Submit));
    app.settle().await;
}

#[tokio::test]
async fn sign_in_persists_session_and_loads_home() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let storage = Arc::new(LocalStorage::in_memory());
    let mut app = app_with(backend.clone(), storage.clone());

    sign_in(&mut app, "demo@carmarket.ma", "demo").await;

    assert_eq!(app.in_flight, 0);
    assert!(app.state.auth.is_authenticated);
    assert_eq!(app.state.ui.route, Route::Home);
    assert_eq!(app.state.listings.all.len(), 7);
    assert!(!app.state.catalog.makes.is_empty());
    assert!(storage.token().is_some());
    assert_eq!(storage.user().map(|u| u.email), Some("demo@carmarket.ma".into()));
    assert!(app.api.bearer_token().is_some());
}

#[tokio::test]
async fn wrong_password_stays_on_sign_in() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = app_with(backend, Arc::new(LocalStorage::in_memory()));

    sign_in(&mut app, "demo@carmarket.ma", "nope").await;

    assert!(!app.state.auth.is_authenticated);
    assert_eq!(app.state.ui.route, Route::SignIn);
    assert_eq!(
        app.state.auth.error.as_deref(),
        Some("Invalid email or password")
    );
}

#[tokio::test]
async fn restored_session_survives_restart() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let storage = Arc::new(LocalStorage::in_memory());
    {
        let mut app = app_with(backend.clone(), storage.clone());
        sign_in(&mut app, "demo@carmarket.ma", "demo").await;
        app.dispatch(Action::Ui(crate::ui::app::store::action::UiAction::ToggleTheme));
    }

    let mut app = app_with(backend, storage);
    assert!(app.state.auth.is_authenticated);
    assert_eq!(app.state.ui.theme, ThemeMode::Dark);
    app.open("/dashboard");
    app.settle().await;
    assert_eq!(app.state.ui.route, Route::Dashboard);
    assert_eq!(app.state.listings.mine.len(), 3);
    assert_eq!(app.state.notifications.unread, 1);
    let stats = app.state.stats.stats.unwrap();
    assert_eq!((stats.listings, stats.notifications), (3, 1));
}

#[tokio::test]
async fn expired_token_ends_session() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let storage = Arc::new(LocalStorage::in_memory());
    let mut app = app_with(backend.clone(), storage.clone());
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;

    backend.revoke_tokens();
    go(&mut app, "/alerts");
    app.settle().await;

    assert!(!app.state.auth.is_authenticated);
    assert_eq!(app.state.ui.route, Route::SignIn);
    assert!(storage.token().is_none());
    assert!(app.api.bearer_token().is_none());
    assert!(
        app.state
            .ui
            .toasts
            .iter()
            .any(|t| t.description.contains("session has expired"))
    );
}

#[tokio::test]
async fn create_listing_with_photo_then_delete_it() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = app_with(backend.clone(), Arc::new(LocalStorage::in_memory()));
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;

    go(&mut app, "/annonce/create");
    for (field, value) in [
        ("brand", "Kia"),
        ("model", "Picanto"),
        ("year", "2021"),
        ("price", "99000"),
        ("mileage", "12000"),
        ("location", "Oujda"),
        ("fuel", "gasoline"),
        ("transmission", "manual"),
    ] {
        set(&mut app, field, value);
    }
    app.dispatch(Action::Form(FormAction::AttachImage(
        crate::domain::ImageUpload {
            file_name: "front.jpg".into(),
            bytes: vec![1, 2, 3],
        },
    )));
    app.dispatch(Action::Form(FormAction::Submit));
    app.settle().await;

    assert_eq!(app.state.ui.route, Route::Home);
    let created = app
        .state
        .listings
        .all
        .iter()
        .find(|l| l.title() == "Kia Picanto")
        .cloned()
        .unwrap();
    assert_eq!(created.images.len(), 1);
    assert!(created.images[0].path().ends_with("front.jpg"));
    assert_eq!(backend.listings().len(), 8);

    go(&mut app, "/my-annonces");
    app.settle().await;
    app.dispatch(Action::Listing(
        crate::ui::app::store::action::ListingAction::Delete(created.id),
    ));
    app.settle().await;
    assert!(app.state.listings.mine.iter().all(|l| l.id != created.id));
    assert!(app.state.listings.all.iter().all(|l| l.id != created.id));
    assert_eq!(backend.listings().len(), 7);
}

#[tokio::test]
async fn alert_lifecycle_and_matching_notification() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = app_with(backend.clone(), Arc::new(LocalStorage::in_memory()));
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;

    go(&mut app, "/alerts");
    app.dispatch(Action::Alert(AlertAction::OpenCreate));
    app.settle().await;
    set(&mut app, "brand", "toyota");
    app.settle().await;
    set(&mut app, "location", "Casablanca");
    app.dispatch(Action::Form(FormAction::Submit));
    app.settle().await;

    assert!(app.state.ui.alert_dialog.is_none());
    assert_eq!(app.state.alerts.items.len(), 1);
    let alert = app.state.alerts.items[0].clone();
    assert_eq!(alert.brand, "Toyota");

    let seller = 2;
    backend.insert_listing(
        crate::domain::ListingDraft {
            brand: "Toyota".into(),
            model: "Corolla".into(),
            location: "Casablanca".into(),
            year: 2020,
            ..Default::default()
        },
        seller,
        &[],
    );
    go(&mut app, "/notifications");
    app.settle().await;
    assert_eq!(app.state.notifications.unread, 2);
    assert!(
        app.state
            .notifications
            .items
            .iter()
            .any(|n| n.message.contains("Toyota Corolla"))
    );

    go(&mut app, "/alerts");
    app.settle().await;
    app.dispatch(Action::Alert(AlertAction::Delete(alert.id)));
    app.settle().await;
    assert!(app.state.alerts.items.is_empty());
    assert!(backend.alerts().is_empty());
}

#[tokio::test]
async fn delete_all_alerts_runs_against_backend() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = app_with(backend.clone(), Arc::new(LocalStorage::in_memory()));
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;
    let user = app.state.user_id().map(|id| UserRef { id });

    for brand in ["Fiat", "Seat"] {
        runtime::run(
            &mut app,
            Command::CreateAlert(AlertDraft {
                brand: brand.into(),
                active: true,
                user,
                ..Default::default()
            }),
        );
    }
    app.settle().await;
    assert_eq!(backend.alerts().len(), 2);

    app.dispatch(Action::Alert(AlertAction::DeleteAll));
    app.settle().await;
    assert!(backend.alerts().is_empty());
    assert!(app.state.alerts.items.is_empty());
}

#[tokio::test]
async fn server_failure_surfaces_backend_message() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = app_with(backend.clone(), Arc::new(LocalStorage::in_memory()));
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;

    backend.fail_next(
        "GET /annonce",
        ApiError::Status {
            status: 500,
            message: None,
        },
    );
    go(&mut app, "/home");
    app.settle().await;

    assert_eq!(
        app.state.listings.error.as_deref(),
        Some("Failed to fetch listings")
    );
    assert!(app.state.auth.is_authenticated);
}

#[tokio::test]
async fn lookup_outage_leaves_pickers_empty() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = MarketApp::new(
        backend,
        Arc::new(StaticCatalog::unavailable()),
        Arc::new(LocalStorage::in_memory()),
        "",
    );
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;
    app.dispatch(Action::Home(HomeAction::SetFilter {
        field: crate::application::filter::FilterField::Brand,
        value: "Dacia".into(),
    }));
    app.settle().await;

    assert!(app.state.catalog.makes.is_empty());
    assert!(app.state.catalog.models_for("Dacia").is_empty());
    assert_eq!(app.state.ui.filter.brand.as_deref(), Some("Dacia"));
}

#[tokio::test]
async fn logout_clears_storage() {
    let storage = Arc::new(LocalStorage::in_memory());
    let mut app = app_with(
        Arc::new(InMemoryMarketplace::with_demo_data()),
        storage.clone(),
    );
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;

    app.dispatch(Action::Auth(AuthAction::RequestLogout));
    app.dispatch(Action::Auth(AuthAction::ConfirmLogout));
    app.settle().await;

    assert!(storage.token().is_none());
    assert!(storage.user().is_none());
    assert_eq!(app.state.ui.route, Route::Landing);
}

#[tokio::test]
async fn skip_runtime_drops_commands() {
    let mut app = MarketApp::new_for_test();
    app.skip_runtime = true;
    go(&mut app, "/home");
    assert_eq!(app.in_flight, 0);
    assert!(!app.poll_action_messages());
}

#[tokio::test]
async fn failed_create_keeps_form_and_toasts() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = app_with(backend.clone(), Arc::new(LocalStorage::in_memory()));
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;

    go(&mut app, "/annonce/create");
    for (field, value) in [
        ("brand", "Kia"),
        ("model", "Rio"),
        ("year", "2020"),
        ("price", "90000"),
        ("mileage", "1000"),
        ("location", "Rabat"),
    ] {
        set(&mut app, field, value);
    }
    backend.fail_next(
        "POST /annonce",
        ApiError::Status {
            status: 400,
            message: Some("Images are too large".into()),
        },
    );
    app.dispatch(Action::Form(FormAction::Submit));
    app.settle().await;

    assert_eq!(app.state.ui.route, Route::CreateListing);
    assert_eq!(app.state.ui.listing_form.brand, "Kia");
    let toast = app.state.ui.toasts.last().unwrap();
    assert_eq!(toast.variant, ToastVariant::Destructive);
    assert_eq!(toast.description, "Images are too large");
}

/// A lookup service that accepts requests and never answers.
struct StalledCatalog;

#[async_trait]
impl VehicleCatalog for StalledCatalog {
    async fn makes(&self) -> ApiResult<Vec<String>> {
        std::future::pending().await
    }

    async fn models(&self, _make: &str) -> ApiResult<Vec<String>> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn input_is_handled_while_a_request_is_stalled() {
    let mut app = MarketApp::new(
        Arc::new(InMemoryMarketplace::with_demo_data()),
        Arc::new(StalledCatalog),
        Arc::new(LocalStorage::in_memory()),
        "",
    );
    let (mut keyboard, terminal) = tokio::io::duplex(64);
    let mut lines = tokio::io::BufReader::new(terminal).lines();

    go(&mut app, "/signin");
    set(&mut app, "email", "demo@carmarket.ma");
    set(&mut app, "password", "demo");
    app.dispatch(Action::Form(FormAction::Submit));

    let loaded = async {
        while app.state.listings.status != RequestStatus::Fulfilled {
            assert!(matches!(
                app.next_event(&mut lines).await.unwrap(),
                Event::Completed
            ));
        }
    };
    tokio::time::timeout(Duration::from_secs(2), loaded)
        .await
        .unwrap();
    assert_eq!(app.state.ui.route, Route::Home);
    assert_eq!(app.state.listings.all.len(), 7);
    assert_eq!(app.in_flight, 1);

    keyboard.write_all(b"filters\nquit\n").await.unwrap();
    let typed = async {
        while !app.state.ui.should_quit {
            if let Event::Input(Some(line)) = app.next_event(&mut lines).await.unwrap() {
                if let Input::Actions(actions) =
                    parse_command(&line, &app.state.ui.route).unwrap()
                {
                    for action in actions {
                        app.dispatch(action);
                    }
                }
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(2), typed)
        .await
        .unwrap();

    assert!(!app.state.ui.show_filters);
    assert_eq!(app.in_flight, 1);
    assert!(app.state.catalog.makes.is_empty());
}

#[tokio::test]
async fn page_shows_loading_until_completion_is_reduced() {
    let mut app = MarketApp::new_for_test();
    sign_in(&mut app, "demo@carmarket.ma", "demo").await;

    go(&mut app, "/home");
    assert_eq!(app.state.listings.status, RequestStatus::Pending);
    assert!(crate::ui::views::render(&app.state, "").contains("Loading cars..."));

    app.settle().await;
    assert_eq!(app.state.listings.status, RequestStatus::Fulfilled);
    assert!(!crate::ui::views::render(&app.state, "").contains("Loading cars..."));
}
