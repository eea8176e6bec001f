//! Configuration loading and resolution.
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::load_config;
pub use types::{ConfigFile, Settings, resolve_consent_path};

#[cfg(test)]
pub(crate) use loader::load_config_file;
