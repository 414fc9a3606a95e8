pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::display::{BufferSurface, TerminalSurface};
pub use adapters::http::HttpOrderSource;
pub use config::lookup_config::LookupConfig;
pub use config::toml_config::TomlConfig;
pub use crate::core::controller::LookupController;
pub use crate::core::render::{HTTP_FAILURE_PREFIX, TRANSPORT_FAILURE_PREFIX, VALIDATION_MESSAGE};
pub use domain::model::{LookupOutcome, LookupRequest};
pub use utils::error::{LookupError, Result};
