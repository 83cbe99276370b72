pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{GeneratorConfig, DEFAULT_FILE, DEFAULT_ROWS};
pub use core::{
    engine::{GenerationEngine, RunSummary},
    generator::LineGenerator,
};
pub use domain::{Place, Row, Temperature};
pub use utils::error::{GenError, Result};
