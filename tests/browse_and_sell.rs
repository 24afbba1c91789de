//! Browsing, filtering and managing listings against the demo backend.

use std::io::Write;
use std::sync::Arc;

use carmarket::infra::api::InMemoryMarketplace;
use carmarket::infra::lookup::StaticCatalog;
use carmarket::infra::storage::LocalStorage;
use carmarket::ui::app::{Input, MarketApp, Route, parse_command};
use carmarket::ui::views;

async fn run(app: &mut MarketApp, line: &str) {
    match parse_command(line, &app.state.ui.route).unwrap() {
        Input::Actions(actions) => {
            for action in actions {
                app.dispatch(action);
                app.settle().await;
            }
        }
        other => panic!("'{line}' produced {other:?}"),
    }
}

async fn signed_in(backend: Arc<InMemoryMarketplace>) -> MarketApp {
    let mut app = MarketApp::new(
        backend,
        Arc::new(StaticCatalog::demo()),
        Arc::new(LocalStorage::in_memory()),
        "http://localhost:8082",
    );
    run(&mut app, "signin demo@carmarket.ma demo").await;
    assert_eq!(app.state.ui.route, Route::Home);
    app
}

fn screen(app: &MarketApp) -> String {
    views::render(&app.state, &app.image_base_url)
}

#[tokio::test]
async fn filters_narrow_the_home_page() {
    let mut app = signed_in(Arc::new(InMemoryMarketplace::with_demo_data())).await;
    assert!(screen(&app).contains("Showing 1-6 of 7 cars"));

    run(&mut app, "filter fuel diesel").await;
    assert!(screen(&app).contains("Showing 1-3 of 3 cars"));

    run(&mut app, "filter max-price 100000").await;
    let page = screen(&app);
    assert!(page.contains("Dacia Logan"));
    assert!(!page.contains("Hyundai Tucson"));

    run(&mut app, "filter brand Tesla").await;
    assert!(screen(&app).contains("No cars match your filters."));

    run(&mut app, "filter reset").await;
    assert!(screen(&app).contains("Showing 1-6 of 7 cars"));
}

#[tokio::test]
async fn second_page_holds_the_remainder() {
    let mut app = signed_in(Arc::new(InMemoryMarketplace::with_demo_data())).await;

    run(&mut app, "page 2").await;
    assert_eq!(app.state.listings.current_page, 2);
    let page = screen(&app);
    assert!(page.contains("Showing 7-7 of 7 cars"));
    assert!(page.contains("Pages: 1 [2]"));
}

#[tokio::test]
async fn sell_a_car_with_a_photo_and_remove_it() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = signed_in(backend.clone()).await;

    let mut photo = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
    photo.write_all(b"not really a jpeg").unwrap();

    run(&mut app, "new").await;
    assert_eq!(app.state.ui.route, Route::CreateListing);
    for line in [
        "set brand Fiat",
        "set model Panda",
        "set year 2016",
        "set price 55000",
        "set mileage 140000",
        "set location Meknès",
        "set fuel gasoline",
        "set transmission manual",
        "set description City car, new tyres",
    ] {
        run(&mut app, line).await;
    }
    run(&mut app, &format!("image {}", photo.path().display())).await;
    run(&mut app, "submit").await;

    assert_eq!(app.state.ui.route, Route::Home);
    assert_eq!(backend.listings().len(), 8);
    let created = backend
        .listings()
        .into_iter()
        .find(|l| l.model == "Panda")
        .unwrap();
    assert_eq!(created.images.len(), 1);

    run(&mut app, "mine").await;
    assert!(screen(&app).contains("Fiat Panda"));
    run(&mut app, &format!("delete {}", created.id)).await;
    assert!(!screen(&app).contains("Fiat Panda"));
    assert_eq!(backend.listings().len(), 7);
}

#[tokio::test]
async fn alerts_notify_about_new_matching_listings() {
    let backend = Arc::new(InMemoryMarketplace::with_demo_data());
    let mut app = signed_in(backend.clone()).await;

    run(&mut app, "alerts").await;
    run(&mut app, "new").await;
    run(&mut app, "set brand Toyota").await;
    run(&mut app, "set location Rabat").await;
    run(&mut app, "submit").await;
    assert!(app.state.ui.alert_dialog.is_none());
    assert_eq!(backend.alerts().len(), 1);

    let seller = backend.register("Youssef", "youssef@example.ma", "pw");
    backend.insert_listing(
        carmarket::domain::ListingDraft {
            brand: "Toyota".into(),
            model: "Corolla".into(),
            location: "Rabat".into(),
            year: 2022,
            ..Default::default()
        },
        seller.id,
        &[],
    );

    run(&mut app, "notifications").await;
    assert_eq!(app.state.notifications.unread, 2);
    let note = app
        .state
        .notifications
        .items
        .iter()
        .find(|n| n.message.contains("Toyota Corolla"))
        .map(|n| n.id)
        .unwrap();
    run(&mut app, &format!("read {note}")).await;
    assert_eq!(app.state.notifications.unread, 1);
    assert!(screen(&app).contains("Notifications (1)"));
}
