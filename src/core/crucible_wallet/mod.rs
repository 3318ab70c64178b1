// src/core/crucible_wallet/mod.rs

use std::env;
use log::warn;

use crate::core::error::CrucibleError;

/// Wohlbekannte Seed-Phrase des lokalen Dev-Knotens. Niemals für echte
/// Konten verwenden; produktive Phrasen kommen aus CRUCIBLE_MNEMONIC.
pub const DEV_MNEMONIC: &str =
    "candy maple cake sugar pudding cream honey rich smooth crumble sweet treat";

pub const MNEMONIC_WORD_COUNT: usize = 12;

/// Seed-Phrase für einen HD-Wallet-Provider. Das Manifest referenziert sie
/// nicht; Ableitung und Signieren übernimmt der externe Provider.
#[derive(Debug, Clone)]
pub struct DevWallet {
    mnemonic: String,
}

impl DevWallet {
    #[inline]
    pub fn new(mnemonic: &str) -> Result<Self, CrucibleError> {
        validate_mnemonic(mnemonic)?;
        Ok(DevWallet {
            mnemonic: mnemonic.to_string(),
        })
    }

    /// CRUCIBLE_MNEMONIC aus der Umgebung, sonst die Dev-Phrase.
    pub fn from_env() -> Result<Self, CrucibleError> {
        match env::var("CRUCIBLE_MNEMONIC") {
            Ok(phrase) => DevWallet::new(&phrase),
            Err(_) => {
                warn!("CRUCIBLE_MNEMONIC not set, falling back to the well-known dev phrase");
                DevWallet::new(DEV_MNEMONIC)
            }
        }
    }

    #[inline]
    pub fn phrase(&self) -> &str {
        &self.mnemonic
    }
}

/// Syntaktische Prüfung: 12 kleingeschriebene ASCII-Wörter.
pub fn validate_mnemonic(phrase: &str) -> Result<(), CrucibleError> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() != MNEMONIC_WORD_COUNT {
        return Err(CrucibleError::InvalidConfig(format!(
            "Mnemonic must have {} words, got {}",
            MNEMONIC_WORD_COUNT,
            words.len()
        )));
    }
    for word in words {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(CrucibleError::InvalidConfig(format!(
                "Mnemonic word {:?} is not lowercase ASCII",
                word
            )));
        }
    }
    Ok(())
}
