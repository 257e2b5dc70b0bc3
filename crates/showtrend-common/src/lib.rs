//! Common utilities and types for showtrend

pub mod error;
pub mod logging;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{ChartError, Result};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
pub use types::{Episode, Rating, Show};
