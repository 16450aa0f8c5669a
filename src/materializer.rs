//! Writing a generated artifact set to disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::artifacts::GeneratedArtifactSet;
use crate::constants::SOURCE_DIR;
use crate::error::{Error, Result};

/// Creates `path` and any missing parents; existing directories are fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::file_system(path, e))
}

/// Writes `content` to `path`, replacing whatever was there.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system(path, e))
}

/// Writes every artifact under `root/slug`.
///
/// # Arguments
/// * `root` - Plugins root directory
/// * `slug` - Plugin directory name
/// * `artifacts` - Artifacts to write, in their fixed order
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths of the written files, in write order
///
/// # Errors
/// * `Error::FileSystem` on the first failing directory or file. Files written
///   before the failure stay on disk.
pub fn materialize(
    root: &Path,
    slug: &str,
    artifacts: &GeneratedArtifactSet,
) -> Result<Vec<PathBuf>> {
    let plugin_dir = root.join(slug);
    ensure_dir(&plugin_dir)?;
    ensure_dir(&plugin_dir.join(SOURCE_DIR))?;

    let mut written = Vec::new();
    for artifact in artifacts.iter() {
        let target = plugin_dir.join(artifact.relative_path());
        debug!("Writing {}: {}", artifact.kind, target.display());
        write_file(&target, &artifact.content)?;
        written.push(target);
    }

    Ok(written)
}
