//! Shared helpers for `resdoc` integration tests.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use resdoc::ModelDescriptor;
use tempfile::TempDir;
use test_helpers::descriptors;

/// Resolves the compiled `resdoc` binary from test environment variables.
///
/// # Errors
///
/// Returns an error when neither cargo nor nextest exported the path.
pub(crate) fn resdoc_exe() -> Result<Utf8PathBuf> {
    ["CARGO_BIN_EXE_resdoc", "NEXTEST_BIN_EXE_resdoc"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(Utf8PathBuf::from)
        .ok_or_else(|| anyhow!("resdoc binary path not found in environment"))
}

/// Temporary project with a `descriptors/` input directory.
pub(crate) struct Project {
    _temp_dir: TempDir,
    root: Utf8PathBuf,
}

impl Project {
    /// Creates a project whose input directory holds `files`.
    pub(crate) fn with_files(files: &[(&str, Vec<ModelDescriptor>)]) -> Result<Self> {
        let temp_dir = TempDir::new().context("create temp dir")?;
        let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
            .map_err(|path| anyhow!("temp dir is not UTF-8: {}", path.display()))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())?;
        dir.create_dir("descriptors")?;
        for (name, contents) in files {
            dir.write(
                Utf8Path::new("descriptors").join(name),
                descriptors::to_json(contents)?,
            )?;
        }
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// Project holding the stock sample descriptors.
    pub(crate) fn samples() -> Result<Self> {
        Self::with_files(&[
            ("mine.json", vec![descriptors::my_own_resource()]),
            ("storage.json", vec![descriptors::storage_account()]),
        ])
    }

    /// Project root directory.
    pub(crate) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Reads a file relative to the project root.
    pub(crate) fn read(&self, path: &str) -> Result<String> {
        let dir = Dir::open_ambient_dir(&self.root, ambient_authority())?;
        dir.read_to_string(path)
            .with_context(|| format!("read {path}"))
    }

    /// Writes a file relative to the project root.
    pub(crate) fn write(&self, path: &str, contents: &str) -> Result<()> {
        let dir = Dir::open_ambient_dir(&self.root, ambient_authority())?;
        dir.write(path, contents)
            .with_context(|| format!("write {path}"))
    }
}
