// src/core/testutils.rs
use crate::core::crucible_config::{CrucibleConfig, NetworkProfile};
use rand::{Rng, thread_rng};

pub fn generate_random_profiles(count: usize) -> Vec<(String, NetworkProfile)> {
    let mut rng = thread_rng();
    (0..count)
        .map(|i| {
            let profile = NetworkProfile {
                host: format!("10.0.{}.{}", rng.gen_range(0..255), rng.gen_range(1..255)),
                port: rng.gen_range(1024..65535), // Unprivilegierte Ports
                network_id: rng.gen_range(1u64..100_000).to_string(),
            };
            (format!("net_{}", i), profile)
        })
        .collect()
}

pub fn generate_random_config(profile_count: usize) -> CrucibleConfig {
    let mut config = CrucibleConfig::default();
    for (name, profile) in generate_random_profiles(profile_count) {
        config.networks.insert(name, profile);
    }
    config
}

pub fn print_profile_overview(config: &CrucibleConfig) {
    println!("Anzahl konfigurierter Profile: {}", config.networks.len());
    for (i, (name, profile)) in config.networks.iter().enumerate() {
        println!(
            "→ [{}] Profil {} | Endpoint: {} | network_id: {}",
            i,
            name,
            profile.endpoint(),
            profile.network_id
        );
    }
}
