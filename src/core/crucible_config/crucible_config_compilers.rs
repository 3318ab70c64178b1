// src/core/crucible_config/crucible_config_compilers.rs

use serde::{Serialize, Deserialize};
use crate::core::error::CrucibleError;

/// Einstellungen für den Bytecode-Optimizer des Compilers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        OptimizerSettings {
            enabled: true,
            runs: 200, // Kompromiss aus Deploy-Kosten und Laufzeit-Kosten
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SolcSettings {
    pub optimizer: OptimizerSettings,
}

/// Pinnt den Solidity-Compiler auf einen exakten Build.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SolcConfig {
    pub version: String,
    pub settings: SolcSettings,
}

impl SolcConfig {
    pub fn validate(&self) -> Result<(), CrucibleError> {
        validate_semver(&self.version)
    }
}

impl Default for SolcConfig {
    fn default() -> Self {
        SolcConfig {
            version: "0.7.6".to_string(), // Muss zur pragma der Verträge passen
            settings: SolcSettings::default(),
        }
    }
}

/// Die vom externen Build-Tool erwartete Compiler-Sektion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilerSet {
    pub solc: SolcConfig,
}

impl CompilerSet {
    pub fn validate(&self) -> Result<(), CrucibleError> {
        self.solc.validate()
    }
}

/// Syntaktische Semver-Prüfung: MAJOR.MINOR.PATCH, dezimal, keine führenden Nullen.
pub fn validate_semver(version: &str) -> Result<(), CrucibleError> {
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 {
        return Err(CrucibleError::InvalidConfig(format!(
            "Compiler version must be MAJOR.MINOR.PATCH, got {:?}",
            version
        )));
    }
    for part in parts {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CrucibleError::InvalidConfig(format!(
                "Compiler version component {:?} is not a decimal number",
                part
            )));
        }
        if part.len() > 1 && part.starts_with('0') {
            return Err(CrucibleError::InvalidConfig(format!(
                "Compiler version component {:?} has a leading zero",
                part
            )));
        }
    }
    Ok(())
}
