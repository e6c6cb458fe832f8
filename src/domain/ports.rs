use crate::domain::model::{Declarations, GenerationReport, GroupRegistry, ScannedFile};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Turns raw source text into declarations. The regex scanner is the default;
/// a stricter parser can replace it without touching aggregation or rendering.
pub trait DeclarationExtractor {
    fn extract_declarations(&self, text: &str) -> Declarations;
}

pub trait SourceStore {
    /// Files directly under `dir` whose names match `pattern`, sorted by path.
    fn list_files(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>>;
    fn read_text(&self, path: &Path) -> Result<String>;
}

pub trait ArtifactSink {
    fn create_dir_all(&self, dir: &Path) -> Result<()>;
    /// Writes the whole file, truncating any previous content.
    fn write_text(&self, path: &Path, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn test_dir(&self) -> &Path;
    fn runners_dir(&self) -> &Path;
    fn dry_run(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<ScannedFile>>;
    fn transform(&self, scanned: &[ScannedFile]) -> Result<GroupRegistry>;
    fn load(&self, registry: &GroupRegistry) -> Result<GenerationReport>;
}
