//! Helpers for running configuration tests inside a [`figment::Jail`].
//!
//! The jail isolates the working directory and environment, so tests can
//! write `resdoc.toml` files and set `RESDOC_*` variables without leaking
//! state into other tests.

use anyhow::{Result, anyhow};

/// Executes `f` inside a jail and returns its output.
///
/// # Errors
///
/// Returns an error when the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Writes a `resdoc.toml` into the jail's working directory.
///
/// # Errors
///
/// Returns an error when the file cannot be created.
pub fn write_config(jail: &figment::Jail, contents: &str) -> figment::error::Result<()> {
    jail.create_file("resdoc.toml", contents)?;
    Ok(())
}
