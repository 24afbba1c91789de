//! Reducer-style state updates + side-effect commands.

pub mod action;
pub mod command;
pub mod reducer;
pub mod runtime;

pub use action::{
    Action, AlertAction, ApiFailure, ApiOutcome, AsyncAction, AuthAction, FormAction, HomeAction,
    ListingAction, NavigationAction, NotificationAction, UiAction,
};
pub use command::Command;

use super::MarketApp;

impl MarketApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            if self.skip_runtime {
                log::debug!("runtime skipped: {:?}", command);
                continue;
            }
            runtime::run(self, command);
        }
    }
}
