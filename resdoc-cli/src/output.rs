//! Writes rendered Markdown documents to disk.

use std::collections::HashMap;
use std::io::{ErrorKind, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::OpenOptions;
use resdoc::RenderedDocument;
use tracing::{debug, info};

use crate::error::CliError;
use crate::fs_helpers::ensure_dir;

const MARKDOWN_EXTENSION: &str = "md";

/// Whether existing output files may be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Truncate and replace existing files.
    Replace,
    /// Fail when a file already exists.
    Refuse,
}

impl OverwritePolicy {
    /// Maps the `overwrite` configuration flag to a policy.
    #[must_use]
    pub const fn from_flag(overwrite: bool) -> Self {
        if overwrite { Self::Replace } else { Self::Refuse }
    }
}

/// Returns the file name a rendered document is written to.
#[must_use]
pub fn file_name(document: &RenderedDocument) -> String {
    format!("{}.{MARKDOWN_EXTENSION}", document.file_stem)
}

/// Writes each document to `<out_dir>/<file_stem>.md`.
///
/// Every target path is validated before anything is written, so a name
/// collision, or an existing file under [`OverwritePolicy::Refuse`], leaves
/// the output directory untouched. File names are compared without regard
/// to case so case-insensitive filesystems cannot merge two outputs.
///
/// # Errors
///
/// Returns [`CliError::DuplicateOutput`] when two resources share a file
/// name, [`CliError::OutputExists`] when overwriting is refused, and
/// [`CliError::Io`] for filesystem failures.
pub fn write_documents(
    out_dir: &Utf8Path,
    documents: &[RenderedDocument],
    policy: OverwritePolicy,
) -> Result<Vec<Utf8PathBuf>, CliError> {
    let mut claimed: HashMap<String, &str> = HashMap::new();
    for document in documents {
        let name = file_name(document);
        if let Some(first) = claimed.insert(name.to_lowercase(), &document.resource_type) {
            return Err(CliError::DuplicateOutput {
                path: out_dir.join(name),
                first: first.to_owned(),
                second: document.resource_type.clone(),
            });
        }
    }

    let dir = ensure_dir(out_dir)?;
    let existing = match policy {
        OverwritePolicy::Replace => None,
        OverwritePolicy::Refuse => documents
            .iter()
            .map(file_name)
            .find(|name| dir.exists(name)),
    };
    if let Some(name) = existing {
        return Err(CliError::OutputExists(out_dir.join(name)));
    }

    let mut written = Vec::with_capacity(documents.len());
    for document in documents {
        let name = file_name(document);
        let path = out_dir.join(&name);
        let mut options = OpenOptions::new();
        options.write(true);
        match policy {
            OverwritePolicy::Replace => options.create(true).truncate(true),
            OverwritePolicy::Refuse => options.create_new(true),
        };
        let mut file = dir.open_with(&name, &options).map_err(|io_err| {
            if io_err.kind() == ErrorKind::AlreadyExists {
                CliError::OutputExists(path.clone())
            } else {
                CliError::io(&path, io_err)
            }
        })?;
        file.write_all(document.markdown.as_bytes())
            .map_err(|io_err| CliError::io(&path, io_err))?;
        debug!(resource = %document.resource_type, file = %path, "wrote document");
        written.push(path);
    }

    info!(files = written.len(), out_dir = %out_dir, "wrote Markdown documents");
    Ok(written)
}

#[cfg(test)]
mod tests {
    //! Unit tests for the Markdown writer.

    use super::*;
    use cap_std::ambient_authority;
    use cap_std::fs_utf8::Dir;
    use rstest::rstest;
    use tempfile::TempDir;

    fn rendered(resource_type: &str, file_stem: &str, markdown: &str) -> RenderedDocument {
        RenderedDocument {
            resource_type: resource_type.to_owned(),
            file_stem: file_stem.to_owned(),
            markdown: markdown.to_owned(),
            diagnostics: Vec::new(),
        }
    }

    fn temp_out() -> (TempDir, Utf8PathBuf) {
        let temp_dir = TempDir::new().expect("temp dir");
        let root =
            Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("temp dir is UTF-8");
        (temp_dir, root.join("docs/reference"))
    }

    fn read(out_dir: &Utf8Path, name: &str) -> String {
        let dir = Dir::open_ambient_dir(out_dir, ambient_authority()).expect("open out dir");
        dir.read_to_string(name).expect("read document")
    }

    #[rstest]
    fn creates_directories_and_writes_files() {
        let (_temp_dir, out_dir) = temp_out();
        let written = write_documents(
            &out_dir,
            &[rendered("Widget", "Widget", "# Widget\n")],
            OverwritePolicy::Replace,
        )
        .expect("write documents");
        assert_eq!(written, vec![out_dir.join("Widget.md")]);
        assert_eq!(read(&out_dir, "Widget.md"), "# Widget\n");
    }

    #[rstest]
    #[case(OverwritePolicy::Replace, true)]
    #[case(OverwritePolicy::Refuse, false)]
    fn honours_overwrite_policy(#[case] policy: OverwritePolicy, #[case] should_succeed: bool) {
        let (_temp_dir, out_dir) = temp_out();
        write_documents(&out_dir, &[rendered("Widget", "Widget", "old\n")], policy)
            .expect("first write");

        let result = write_documents(&out_dir, &[rendered("Widget", "Widget", "new\n")], policy);
        assert_eq!(result.is_ok(), should_succeed);
        let expected = if should_succeed { "new\n" } else { "old\n" };
        assert_eq!(read(&out_dir, "Widget.md"), expected);
    }

    #[rstest]
    fn refused_overwrite_writes_nothing() {
        let (_temp_dir, out_dir) = temp_out();
        write_documents(
            &out_dir,
            &[rendered("Beta", "Beta", "old\n")],
            OverwritePolicy::Refuse,
        )
        .expect("seed existing file");

        let err = write_documents(
            &out_dir,
            &[
                rendered("Alpha", "Alpha", "alpha\n"),
                rendered("Beta", "Beta", "beta\n"),
            ],
            OverwritePolicy::Refuse,
        )
        .expect_err("existing Beta.md should be refused");
        assert!(
            matches!(&err, CliError::OutputExists(path) if *path == out_dir.join("Beta.md")),
            "unexpected error: {err}"
        );
        let dir = Dir::open_ambient_dir(&out_dir, ambient_authority()).expect("open out dir");
        assert!(!dir.exists("Alpha.md"), "no document may be written");
        assert_eq!(read(&out_dir, "Beta.md"), "old\n");
    }

    #[rstest]
    fn file_names_differing_only_in_case_collide() {
        let (_temp_dir, out_dir) = temp_out();
        let err = write_documents(
            &out_dir,
            &[
                rendered("Contoso/Widget", "Widget", "a\n"),
                rendered("Contoso/widget", "widget", "b\n"),
            ],
            OverwritePolicy::Replace,
        )
        .expect_err("case-only collision should fail");
        assert!(
            matches!(&err, CliError::DuplicateOutput { first, second, .. }
                if first == "Contoso/Widget" && second == "Contoso/widget"),
            "unexpected error: {err}"
        );
    }

    #[rstest]
    fn colliding_file_names_write_nothing() {
        let (_temp_dir, out_dir) = temp_out();
        let err = write_documents(
            &out_dir,
            &[
                rendered("Contoso.A/widgets", "widgets", "a\n"),
                rendered("Contoso.B/widgets", "widgets", "b\n"),
            ],
            OverwritePolicy::Replace,
        )
        .expect_err("collision should fail");
        assert!(matches!(err, CliError::DuplicateOutput { .. }));
        assert!(
            Dir::open_ambient_dir(&out_dir, ambient_authority()).is_err(),
            "output directory should not be created"
        );
    }
}
