//! Methodology domain module.
//!
//! # Module Structure
//!
//! - `model`: `Methodology` and `Step` reference content types
//! - `builtin`: the built-in methodology definitions
//! - `catalog`: `MethodologyCatalog`, the read-only registry with fallback lookup
//!
//! # Usage
//!
//! ```
//! use stepwise_core::methodology::MethodologyCatalog;
//!
//! let catalog = MethodologyCatalog::builtin();
//! assert_eq!(catalog.lookup("5-whys").step_count(), 5);
//! assert_eq!(catalog.lookup("unknown").id, "4-step");
//! ```

pub mod builtin;
mod catalog;
mod model;

// Re-export public API
pub use builtin::DEFAULT_METHODOLOGY_ID;
pub use catalog::{MethodologyCatalog, Resolved};
pub use model::{Methodology, Step, StepNumber};
