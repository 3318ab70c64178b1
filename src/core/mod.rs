// src/core/mod.rs
pub mod crucible_config;
pub mod crucible_wallet;
pub mod error;
pub mod testutils;

pub use crucible_config::{
    CrucibleConfig, CompilerSet, SolcConfig, SolcSettings, OptimizerSettings,
    NetworkProfile, DEVELOPMENT_PROFILE, NETWORK_ID_WILDCARD,
};
pub use crucible_wallet::{DevWallet, DEV_MNEMONIC};
pub use error::CrucibleError;

/// Baut die effektive Konfiguration auf: Defaults plus Env-Overrides.
pub fn initialize_core() -> Result<CrucibleConfig, CrucibleError> {
    let config = CrucibleConfig::default().with_env_overrides()?;
    log::info!("Crucible core initialized with config: {}", config);
    Ok(config)
}
