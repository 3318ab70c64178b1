// src/core/crucible_config/crucible_config_networks.rs

use serde::{Serialize, Deserialize};
use log::info;
use crate::core::error::CrucibleError;

/// Wildcard-Token: das Profil akzeptiert jede Chain-Identität.
pub const NETWORK_ID_WILDCARD: &str = "*";

/// Verbindungsparameter für einen benannten Netzwerk-Knoten.
/// Toolchain-Docs: 1.2 Netzwerk-Profile - der Knoten wird vom externen
/// Deployer angesprochen, nicht von diesem Crate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    pub host: String,
    pub port: u16,
    pub network_id: String, // "*" oder dezimale Chain-ID
}

impl NetworkProfile {
    #[inline]
    pub fn new(host: &str, port: u16, network_id: &str) -> Result<Self, CrucibleError> {
        let profile = NetworkProfile {
            host: host.to_string(),
            port,
            network_id: network_id.to_string(),
        };
        profile.validate()?;
        info!(
            "Created NetworkProfile {}:{} (network_id={})",
            profile.host, profile.port, profile.network_id
        );
        Ok(profile)
    }

    /// Prüft Host, Port und die network_id-Syntax.
    pub fn validate(&self) -> Result<(), CrucibleError> {
        if self.host.trim().is_empty() {
            return Err(CrucibleError::InvalidConfig("Host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(CrucibleError::InvalidConfig("Port must be greater than 0".into()));
        }
        if self.network_id != NETWORK_ID_WILDCARD
            && (self.network_id.is_empty()
                || !self.network_id.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(CrucibleError::InvalidConfig(format!(
                "network_id must be \"*\" or a decimal chain id, got {:?}",
                self.network_id
            )));
        }
        Ok(())
    }

    /// Wildcard-bewusster Abgleich gegen eine konkrete Chain-ID.
    #[inline]
    pub fn matches_network(&self, chain_id: u64) -> bool {
        self.network_id == NETWORK_ID_WILDCARD || self.network_id == chain_id.to_string()
    }

    /// RPC-Endpunkt des Knotens als URL.
    #[inline]
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for NetworkProfile {
    fn default() -> Self {
        NetworkProfile {
            host: "127.0.0.1".to_string(), // Lokaler Dev-Knoten
            port: 8545, // Standard-RPC-Port (Toolchain-Docs)
            network_id: NETWORK_ID_WILDCARD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = NetworkProfile::default();
        assert_eq!(profile.host, "127.0.0.1");
        assert_eq!(profile.port, 8545);
        assert_eq!(profile.network_id, NETWORK_ID_WILDCARD);
        assert_eq!(profile.endpoint(), "http://127.0.0.1:8545");
    }

    #[test]
    fn test_profile_validation() {
        assert!(NetworkProfile::new("127.0.0.1", 8545, "*").is_ok());
        assert!(NetworkProfile::new("127.0.0.1", 8545, "1337").is_ok());
        assert!(NetworkProfile::new("", 8545, "*").is_err());
        assert!(NetworkProfile::new("   ", 8545, "*").is_err());
        assert!(NetworkProfile::new("127.0.0.1", 0, "*").is_err());
        assert!(NetworkProfile::new("127.0.0.1", 8545, "").is_err());
        assert!(NetworkProfile::new("127.0.0.1", 8545, "mainnet").is_err());
        assert!(NetworkProfile::new("127.0.0.1", 8545, "-5").is_err());
    }

    #[test]
    fn test_matches_network() {
        let wildcard = NetworkProfile::default();
        assert!(wildcard.matches_network(1));
        assert!(wildcard.matches_network(1337));

        let pinned = NetworkProfile::new("127.0.0.1", 8545, "1337").unwrap();
        assert!(pinned.matches_network(1337));
        assert!(!pinned.matches_network(1));
    }

    #[test]
    fn test_network_id_wire_name() {
        let json = serde_json::to_string(&NetworkProfile::default()).unwrap();
        assert!(json.contains("\"networkId\":\"*\""), "unexpected wire shape: {}", json);
    }
}
