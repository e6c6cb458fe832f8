use crate::utils::error::{GenError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.trim().is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects a runners directory that is the scanned directory itself; the
/// aggregator would otherwise sit next to the sources it was generated from.
pub fn validate_distinct_dirs(test_dir: &Path, runners_dir: &Path) -> Result<()> {
    if test_dir == runners_dir {
        return Err(GenError::InvalidConfigValueError {
            field: "runners_dir".to_string(),
            value: runners_dir.to_string_lossy().to_string(),
            reason: "Output directory must differ from the test directory".to_string(),
        });
    }
    Ok(())
}
