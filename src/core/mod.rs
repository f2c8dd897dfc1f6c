//! Configuration, errors, logging and the liveness endpoint

pub mod config;
pub mod error;
pub mod liveness;
pub mod logging;

// Re-exports for convenience
pub use config::{Config, ConfigError};
pub use error::{AppError, AppResult};
pub use logging::init_logger;
