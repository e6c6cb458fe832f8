pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, GeneratorConfig};
pub use core::{engine::GeneratorEngine, pipeline::RunnerPipeline};
pub use utils::error::{GenError, Result};
