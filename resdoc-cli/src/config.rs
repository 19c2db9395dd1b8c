//! Layered configuration for the `resdoc` command.
//!
//! Values are merged with later layers overriding earlier ones:
//! built-in defaults, then `resdoc.toml` (or the file named by `--config`),
//! then `RESDOC_*` environment variables, then the flags given on the
//! command line.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{Args, Command, LogFormat, ReportFormat};
use crate::error::CliError;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "resdoc.toml";

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "RESDOC_";

/// Effective settings for one `resdoc` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResdocConfig {
    /// Directory holding descriptor JSON files.
    pub input_dir: Utf8PathBuf,
    /// Directory Markdown files are written to.
    pub out_dir: Utf8PathBuf,
    /// Whether existing Markdown files may be replaced.
    pub overwrite: bool,
    /// Log output format.
    pub log_format: LogFormat,
    /// Format of the `check` report.
    pub report_format: ReportFormat,
}

impl Default for ResdocConfig {
    fn default() -> Self {
        Self {
            input_dir: Utf8PathBuf::from("descriptors"),
            out_dir: Utf8PathBuf::from("docs"),
            overwrite: true,
            log_format: LogFormat::Pretty,
            report_format: ReportFormat::Text,
        }
    }
}

/// Values supplied on the command line. Absent flags are not serialised, so
/// they never mask file or environment values.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    input_dir: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overwrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_format: Option<LogFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_format: Option<ReportFormat>,
}

impl CliOverrides {
    fn from_args(args: &Args) -> Self {
        let mut overrides = Self {
            input_dir: args.input_dir.clone(),
            log_format: args.log_format,
            ..Self::default()
        };
        match &args.command {
            Command::Generate(generate) => {
                overrides.out_dir.clone_from(&generate.out_dir);
                overrides.overwrite = generate.is_overwrite_disabled.then_some(false);
            }
            Command::Check(check) => overrides.report_format = check.report_format,
        }
        overrides
    }
}

impl ResdocConfig {
    /// Loads the configuration for `args`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ConfigMissing`] when `--config` names a file that
    /// does not exist and [`CliError::Config`] when a layer holds invalid
    /// values.
    pub fn load(args: &Args) -> Result<Self, CliError> {
        let config_file = match &args.config {
            Some(path) if !path.is_file() => return Err(CliError::ConfigMissing(path.clone())),
            Some(path) => path.as_path(),
            None => Utf8Path::new(DEFAULT_CONFIG_FILE),
        };
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(CliOverrides::from_args(args)))
            .extract()?;
        debug!(?config, file = %config_file, "loaded configuration");
        Ok(config)
    }
}
