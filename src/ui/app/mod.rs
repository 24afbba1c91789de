//! The marketplace client: state, routing, the store and the terminal input layer.
//!
//! `MarketApp` owns the state and the services; every change goes through
//! `dispatch`, which reduces an action and hands the resulting commands to the runtime.

mod init;
pub mod input;
mod polling;
mod root;
pub mod routing;
pub mod state;
pub mod store;

pub use input::{HELP, Input, InputError, parse_command};
pub use polling::Event;
pub use root::MarketApp;
pub use routing::Route;
pub use state::AppState;
pub use store::{Action, AsyncAction, Command};
