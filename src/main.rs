// src/main.rs

use crucible_toolchain::CrucibleConfig;

const MANIFEST_PATH: &str = "crucible.json";

fn main() {
    // Initialisiere Logger und .env
    env_logger::init();
    dotenv::dotenv().ok();

    let manifest = std::env::args().nth(1).unwrap_or_else(|| MANIFEST_PATH.to_string());
    let config = CrucibleConfig::load_or_default(&manifest)
        .and_then(|config| config.with_env_overrides());

    match config.and_then(|config| config.to_json_pretty()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to load Crucible manifest {}: {}", manifest, e);
            std::process::exit(1);
        }
    }
}
