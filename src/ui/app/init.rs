use std::sync::Arc;

use tokio::sync::mpsc;

use super::MarketApp;
use super::state::AppState;
use super::store::{Action, AuthAction, NavigationAction};
use crate::infra::api::MarketplaceApi;
use crate::infra::lookup::VehicleCatalog;
use crate::infra::storage::LocalStorage;
use crate::ui::theme::ThemeMode;

const ACTION_QUEUE: usize = 64;

impl MarketApp {
    /// Build the app and restore the persisted session and theme.
    pub fn new(
        api: Arc<dyn MarketplaceApi>,
        catalog: Arc<dyn VehicleCatalog>,
        storage: Arc<LocalStorage>,
        image_base_url: impl Into<String>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_QUEUE);

        let mut state = AppState::default();
        state.ui.theme = ThemeMode::from_stored(storage.theme().as_deref());

        let mut app = Self {
            state,
            api,
            catalog,
            storage,
            image_base_url: image_base_url.into(),
            action_tx,
            action_rx,
            in_flight: 0,
            skip_runtime: false,
        };

        if let Some(token) = app.storage.token() {
            log::info!("restoring stored session");
            app.api.set_bearer_token(Some(token.clone()));
            let user = app.storage.user();
            app.dispatch(Action::Auth(AuthAction::Restore { token, user }));
        }
        app
    }

    /// Enter `path` as the first page, running its on-enter fetches.
    pub fn open(&mut self, path: &str) {
        self.dispatch(Action::Navigation(NavigationAction::Go(path.to_string())));
    }

    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(
            Arc::new(crate::infra::api::InMemoryMarketplace::with_demo_data()),
            Arc::new(crate::infra::lookup::StaticCatalog::demo()),
            Arc::new(LocalStorage::in_memory()),
            "http://localhost:8082",
        )
    }
}
