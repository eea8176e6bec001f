mod app;
mod args;
mod config;
mod consent;
mod entry;
mod error;
mod logger;
mod session;
mod slots;
mod tour;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
