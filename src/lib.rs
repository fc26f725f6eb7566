pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::SqliteStore;
pub use core::judges::PersonQuery;
pub use core::lookup::ImportLookup;
pub use core::settings::LookupSettings;
pub use utils::error::{LookupError, Result};
