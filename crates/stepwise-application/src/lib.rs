//! View controller for Stepwise.
//!
//! Owns the application state (active tab, browser selection, expansion
//! flags, session store) and the pure transition function that updates it.

pub mod action;
pub mod controller;
pub mod state;
pub mod tab;
pub mod view;

pub use action::Action;
pub use controller::AppController;
pub use state::{AppState, reduce, step_key};
pub use tab::Tab;
