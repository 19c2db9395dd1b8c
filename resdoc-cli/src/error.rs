//! Error types for the `resdoc` command-line front end.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `resdoc` collaborators.
///
/// The documentation pipeline itself cannot fail; everything here comes from
/// configuration, discovery, logging or writing output.
#[derive(Debug, Error)]
pub enum CliError {
    /// Layered configuration could not be extracted.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found at {0}")]
    ConfigMissing(Utf8PathBuf),

    /// The descriptor input directory does not exist.
    #[error("descriptor directory not found at {0}")]
    InputMissing(Utf8PathBuf),

    /// A descriptor file holds malformed JSON.
    #[error("failed to parse descriptors in {path}: {source}")]
    DescriptorJson {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The check report could not be serialised.
    #[error("failed to serialise report: {0}")]
    ReportJson(#[from] serde_json::Error),

    /// Two resources would be written to the same file.
    #[error("resources '{first}' and '{second}' both render to {path}")]
    DuplicateOutput {
        /// Output file both resources map to.
        path: Utf8PathBuf,
        /// Resource written first.
        first: String,
        /// Resource that collided with it.
        second: String,
    },

    /// Overwriting was disabled and the output file already exists.
    #[error("refusing to overwrite existing file {0}")]
    OutputExists(Utf8PathBuf),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// A filesystem operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation targeted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the report to standard output failed.
    #[error("failed to write report: {0}")]
    Stdout(#[source] std::io::Error),
}

impl CliError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
