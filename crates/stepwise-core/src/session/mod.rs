//! Session domain module.
//!
//! This module contains the session data model and the in-memory store that
//! owns the current session and the saved history.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `ActionItem`)
//! - `store`: Session lifecycle and edits (`SessionStore`, `SessionUpdate`)
//!
//! # Usage
//!
//! ```
//! use stepwise_core::methodology::MethodologyCatalog;
//! use stepwise_core::session::SessionStore;
//!
//! let mut store = SessionStore::new(MethodologyCatalog::builtin());
//! store.create("5-whys");
//! store.toggle_step(1);
//! assert_eq!(store.current_progress(), 20.0);
//! ```

mod model;
mod store;

// Re-export public API
pub use model::{ActionItem, Session};
pub use store::{SaveOutcome, SessionStore, SessionUpdate};
