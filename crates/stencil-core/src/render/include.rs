//! Include file loading for `{i:...}` directives

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StencilError};

/// Read an included template relative to the current base directory
///
/// Returns the file text together with the directory that becomes the base
/// for the included file's own relative includes.
pub(crate) fn load_include(base_dir: &Path, reference: &str) -> Result<(String, PathBuf)> {
    let full = base_dir.join(reference);
    let text = fs::read_to_string(&full).map_err(|source| StencilError::IncludeNotFound {
        path: full.clone(),
        source,
    })?;
    let next_base = match full.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => base_dir.to_path_buf(),
    };
    Ok((text, next_base))
}
