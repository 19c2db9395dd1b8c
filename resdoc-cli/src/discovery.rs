//! Loads model descriptors from JSON files.
//!
//! Every `*.json` file directly inside the input directory holds either one
//! descriptor or an array of descriptors, with annotations already flattened
//! base type first. Files are read in file-name order and nothing is retained
//! between runs.

use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use resdoc::ModelDescriptor;
use tracing::debug;

use crate::error::CliError;
use crate::fs_helpers::open_optional_dir;

const DESCRIPTOR_EXTENSION: &str = "json";

/// Reads every descriptor file in `input_dir`.
///
/// # Errors
///
/// Returns [`CliError::InputMissing`] when the directory does not exist,
/// [`CliError::DescriptorJson`] for malformed files, and [`CliError::Io`] for
/// other filesystem failures.
pub fn discover(input_dir: &Utf8Path) -> Result<Vec<ModelDescriptor>, CliError> {
    let Some(dir) = open_optional_dir(input_dir)? else {
        return Err(CliError::InputMissing(input_dir.to_path_buf()));
    };

    let mut files = Vec::new();
    for entry_result in dir
        .read_dir(".")
        .map_err(|err| CliError::io(input_dir, err))?
    {
        let entry = entry_result.map_err(|err| CliError::io(input_dir, err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| CliError::io(input_dir, err))?;
        if !file_type.is_file() {
            continue;
        }
        let file_name = entry
            .file_name()
            .map_err(|err| CliError::io(input_dir, err))?;
        if !Utf8Path::new(&file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DESCRIPTOR_EXTENSION))
        {
            continue;
        }
        files.push(Utf8PathBuf::from(file_name));
    }
    files.sort();

    let mut descriptors = Vec::new();
    for file in files {
        let path = input_dir.join(&file);
        let mut handle = dir.open(&file).map_err(|err| CliError::io(&path, err))?;
        let mut buffer = String::new();
        handle
            .read_to_string(&mut buffer)
            .map_err(|err| CliError::io(&path, err))?;
        let parsed = parse_descriptors(&buffer).map_err(|source| CliError::DescriptorJson {
            path: path.clone(),
            source,
        })?;
        debug!(file = %path, descriptors = parsed.len(), "loaded descriptor file");
        descriptors.extend(parsed);
    }

    Ok(descriptors)
}

/// Parses one descriptor file's contents.
///
/// # Errors
///
/// Returns the JSON error for the shape the contents open with: an array
/// when the first non-whitespace character is `[`, otherwise a single
/// descriptor.
pub fn parse_descriptors(contents: &str) -> Result<Vec<ModelDescriptor>, serde_json::Error> {
    if contents.trim_start().starts_with('[') {
        serde_json::from_str(contents)
    } else {
        serde_json::from_str(contents).map(|descriptor| vec![descriptor])
    }
}
