//! Command line arguments for the application

use crate::core::errors::{validate_storage_dir, PolyResult};
use crate::core::settings::DEFAULT_STORAGE_DIR;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// command line arguments for storage location and logging
#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// directory the saved canvas is kept in between runs
    #[arg(long = "storage-dir", default_value = DEFAULT_STORAGE_DIR)]
    pub storage_dir: PathBuf,

    /// keep the canvas in memory only, nothing survives a restart
    #[arg(long, default_value_t = false)]
    pub ephemeral: bool,

    /// erase the saved canvas before starting
    #[arg(long, default_value_t = false)]
    pub reset: bool,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            ephemeral: false,
            reset: false,
            debug: false,
        }
    }
}

impl CliArgs {
    /// Checks arguments that clap cannot check on its own
    pub fn validate(&self) -> PolyResult<()> {
        if !self.ephemeral {
            validate_storage_dir(&self.storage_dir)?;
        }
        Ok(())
    }
}
