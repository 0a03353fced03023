pub mod generate;
pub mod init;
pub mod students;

use std::path::PathBuf;

use anyhow::Result;

use reportgen_core::config::load_config_from;
use reportgen_core::loader::load_store;
use reportgen_core::RecordStore;

/// Load the record store, letting `--data-dir` override the configuration.
fn open_store(data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<RecordStore> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    tracing::debug!("reading records from {}", config.data_dir.display());
    load_store(&config)
}
