mod api;
mod app;
mod config;
mod consent;
mod validation;

pub use api::ApiError;
pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use consent::ConsentError;
pub use validation::ValidationError;
