//! Root app struct.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::state::AppState;
use super::store::Action;
use crate::infra::api::MarketplaceApi;
use crate::infra::lookup::VehicleCatalog;
use crate::infra::storage::LocalStorage;

/// The marketplace client: app state plus the services runtime commands talk to.
pub struct MarketApp {
    pub state: AppState,

    pub api: Arc<dyn MarketplaceApi>,
    pub catalog: Arc<dyn VehicleCatalog>,
    pub storage: Arc<LocalStorage>,

    /// Base URL listing image paths are resolved against.
    pub image_base_url: String,

    pub action_tx: mpsc::Sender<Action>,
    pub action_rx: mpsc::Receiver<Action>,

    /// Requests spawned by the runtime whose completion has not been reduced yet.
    pub in_flight: usize,

    pub skip_runtime: bool,
}
