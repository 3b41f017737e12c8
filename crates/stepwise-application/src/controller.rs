use std::sync::Arc;

use stepwise_core::methodology::MethodologyCatalog;

use crate::action::Action;
use crate::state::{AppState, apply};

/// Single owner of the application state.
///
/// Front ends translate input events into `Action`s and hand them to
/// `dispatch`; actions are applied synchronously, in the order received.
pub struct AppController {
    state: AppState,
    dispatched: u64,
}

impl AppController {
    pub fn new(catalog: Arc<MethodologyCatalog>, initial_methodology: &str) -> Self {
        Self::from_state(AppState::new(catalog, initial_methodology))
    }

    pub fn from_state(state: AppState) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of actions dispatched so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn dispatch(&mut self, action: Action) {
        self.dispatched += 1;
        tracing::debug!(
            seq = self.dispatched,
            action = action.name(),
            tab = %self.state.active_tab(),
            "dispatch"
        );
        apply(&mut self.state, &action);
    }

    pub fn into_state(self) -> AppState {
        self.state
    }
}
