//! CLI argument types.
mod cli;
mod defaults;


pub use cli::{ClientArgs, Command, ConsentAction};
pub use defaults::default_consent_path;
