pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_dirs, validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_TEST_DIR: &str = "test";
pub const DEFAULT_RUNNERS_DIR: &str = "test/runners";
pub const SOURCE_PATTERN: &str = "test_*.c";

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub test_dir: PathBuf,
    pub runners_dir: PathBuf,
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            test_dir: PathBuf::from(DEFAULT_TEST_DIR),
            runners_dir: PathBuf::from(DEFAULT_RUNNERS_DIR),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Layers TOML values over the defaults. Command-line overrides are
    /// applied by the caller afterwards.
    pub fn from_toml(toml: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            test_dir: toml.paths.test_dir.clone().unwrap_or(defaults.test_dir),
            runners_dir: toml
                .paths
                .runners_dir
                .clone()
                .unwrap_or(defaults.runners_dir),
            dry_run: defaults.dry_run,
        }
    }
}

impl ConfigProvider for GeneratorConfig {
    fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    fn runners_dir(&self) -> &Path {
        &self.runners_dir
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("test_dir", &self.test_dir)?;
        validate_path("runners_dir", &self.runners_dir)?;
        validate_distinct_dirs(&self.test_dir, &self.runners_dir)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "unity-runners")]
#[command(about = "Generate Unity fixture test runners and a shared main")]
pub struct CliConfig {
    /// Directory scanned for test_*.c files
    #[arg(long)]
    pub test_dir: Option<PathBuf>,

    /// Directory receiving the generated runners and all_tests.c
    #[arg(long)]
    pub runners_dir: Option<PathBuf>,

    /// Optional TOML file with a [paths] section
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Precedence: command line, then TOML file, then built-in defaults.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let toml = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut config = GeneratorConfig::from_toml(&toml);
        if let Some(test_dir) = &self.test_dir {
            config.test_dir = test_dir.clone();
        }
        if let Some(runners_dir) = &self.runners_dir {
            config.runners_dir = runners_dir.clone();
        }
        config.dry_run = self.dry_run;

        config.validate()?;
        Ok(config)
    }
}
