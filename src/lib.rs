pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use config::OutputFormat;
pub use core::{engine::ReportEngine, pipeline::DicePipeline};
pub use domain::model::{DieFace, GameOutcome, GameShape, ResultGrid, RollSource, Verdict};
pub use utils::error::{DiceError, Result};
