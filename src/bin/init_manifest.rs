// src/bin/init_manifest.rs

use std::path::Path;

use crucible_toolchain::CrucibleConfig;

const MANIFEST_PATH: &str = "crucible.json";

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| MANIFEST_PATH.to_string());
    if Path::new(&path).exists() {
        eprintln!("Manifest {} already exists, refusing to overwrite", path);
        std::process::exit(1);
    }
    if let Err(e) = CrucibleConfig::default().save(&path) {
        eprintln!("Failed to write manifest {}: {}", path, e);
        std::process::exit(1);
    }
    println!("Wrote default Crucible manifest to {}", path);
}
