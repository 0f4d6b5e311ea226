//! Loading overrides inside a `figment::Jail`.

use anyhow::{Context as _, Result, anyhow};
use chop_config::{ConfigResult, OverrideStore};

/// Name of the overrides file created inside the jail.
pub const OVERRIDES_FILE: &str = "overrides.toml";

/// Loads an [`OverrideStore`] from [`OVERRIDES_FILE`] inside a fresh jail.
///
/// When `contents` is `None` the file is never written, exercising the
/// missing-file path of [`OverrideStore::load`]. The outer result reports jail
/// failures; the inner one carries the outcome of the load itself.
///
/// # Errors
///
/// Returns an error if the jail or the overrides file cannot be created.
pub fn load_overrides(contents: Option<&str>) -> Result<ConfigResult<OverrideStore>> {
    let mut loaded = None;
    figment::Jail::try_with(|jail| {
        if let Some(text) = contents {
            jail.create_file(OVERRIDES_FILE, text)?;
        }
        loaded = Some(OverrideStore::load(OVERRIDES_FILE));
        Ok(())
    })
    .map_err(|err| anyhow!("failed to prepare override jail: {err}"))?;
    loaded.context("override jail did not run its setup")
}
