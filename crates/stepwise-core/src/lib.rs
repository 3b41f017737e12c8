pub mod config;
pub mod error;
pub mod guide;
pub mod methodology;
pub mod session;

// Re-export common types
pub use config::StepwiseConfig;
pub use error::{Result, StepwiseError};
pub use methodology::{Methodology, MethodologyCatalog, Step, StepNumber};
pub use session::{ActionItem, Session, SessionStore};
