// src/lib.rs
use std::result::Result;

pub mod core;

pub use core::{
    initialize_core,
    CrucibleConfig,
    CompilerSet,
    SolcConfig,
    OptimizerSettings,
    NetworkProfile,
    DevWallet,
    CrucibleError,
    DEVELOPMENT_PROFILE,
};

pub fn start_crucible() -> Result<CrucibleConfig, String> {
    let config = initialize_core().map_err(|e| e.to_string())?;
    log::info!("Crucible Toolchain configuration loaded");
    Ok(config)
}
