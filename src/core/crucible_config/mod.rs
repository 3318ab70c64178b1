// src/core/crucible_config/mod.rs

use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use log::{info, warn};

use crate::core::error::CrucibleError;

pub mod crucible_config_networks;
pub mod crucible_config_compilers;

pub use crucible_config_networks::*;
pub use crucible_config_compilers::*;

/// Name des Standard-Profils für die lokale Entwicklung.
pub const DEVELOPMENT_PROFILE: &str = "development";

/// Grundlegende Konfiguration der Crucible Toolchain.
/// Wird einmal beim Laden aufgebaut und danach nicht mehr verändert;
/// das externe Build-Tool liest nur.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CrucibleConfig {
    pub networks: BTreeMap<String, NetworkProfile>,
    pub compilers: CompilerSet,
}

impl CrucibleConfig {
    /// Liest ein Manifest von der Platte und validiert es.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CrucibleError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: CrucibleConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        info!("Loaded Crucible manifest from {}", path.as_ref().display());
        Ok(config)
    }

    /// Fehlendes Manifest fällt auf die eingebauten Standardwerte zurück.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, CrucibleError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            warn!(
                "No manifest at {}, using built-in defaults",
                path.as_ref().display()
            );
            Ok(CrucibleConfig::default())
        }
    }

    /// Schreibt das Manifest als JSON auf die Platte.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CrucibleError> {
        self.validate()?;
        fs::write(path.as_ref(), self.to_json_pretty()?)?;
        info!("Wrote Crucible manifest to {}", path.as_ref().display());
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, CrucibleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Prüft alle Profile und die Compiler-Sektion.
    pub fn validate(&self) -> Result<(), CrucibleError> {
        if self.networks.is_empty() {
            return Err(CrucibleError::InvalidConfig(
                "At least one network profile is required".into(),
            ));
        }
        for (name, profile) in &self.networks {
            if name.trim().is_empty() {
                return Err(CrucibleError::InvalidConfig(
                    "Network profile name must not be empty".into(),
                ));
            }
            profile.validate().map_err(|e| {
                CrucibleError::InvalidConfig(format!("Profile {:?}: {}", name, e))
            })?;
        }
        self.compilers.validate()
    }

    #[inline]
    pub fn development(&self) -> Option<&NetworkProfile> {
        self.networks.get(DEVELOPMENT_PROFILE)
    }

    /// Env-Overrides für das Entwicklungs-Profil, Teil des Ladevorgangs:
    /// CRUCIBLE_DEV_HOST, CRUCIBLE_DEV_PORT, CRUCIBLE_DEV_NETWORK_ID.
    pub fn with_env_overrides(mut self) -> Result<Self, CrucibleError> {
        if let Some(dev) = self.networks.get_mut(DEVELOPMENT_PROFILE) {
            if let Ok(host) = env::var("CRUCIBLE_DEV_HOST") {
                info!("Overriding development host from env: {}", host);
                dev.host = host;
            }
            if let Ok(port) = env::var("CRUCIBLE_DEV_PORT") {
                dev.port = port.parse().map_err(|_| {
                    CrucibleError::ParseError(format!(
                        "CRUCIBLE_DEV_PORT must be a TCP port, got {:?}",
                        port
                    ))
                })?;
            }
            if let Ok(network_id) = env::var("CRUCIBLE_DEV_NETWORK_ID") {
                dev.network_id = network_id;
            }
        }
        self.validate()?;
        Ok(self)
    }
}

impl Default for CrucibleConfig {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(DEVELOPMENT_PROFILE.to_string(), NetworkProfile::default());
        CrucibleConfig {
            networks,
            compilers: CompilerSet::default(),
        }
    }
}

impl fmt::Display for CrucibleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Networks: {:?}, Solc: {}",
            self.networks.keys().collect::<Vec<_>>(),
            self.compilers.solc.version
        )
    }
}
