//! Init command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use mdplinks_core::{Config, Store};

use crate::output::Output;

/// Create an empty database
///
/// With `--data-dir`, the directory is also written to the config file so
/// later commands find the database.
pub fn init(
    mut config: Config,
    data_dir: Option<PathBuf>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let remember_dir = data_dir.is_some();
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    let store = Store::init(config)?;

    if remember_dir {
        let save_path = config_path
            .cloned()
            .unwrap_or_else(Config::config_file_path);
        store
            .config()
            .save_to_path(&save_path)
            .context("Failed to save configuration")?;
        output.message(&format!("Saved data_dir to {}", save_path.display()));
    }

    output.success(&format!(
        "Created database at {}",
        store.config().database_path().display()
    ));

    Ok(())
}
