use std::process;

use linehaul::cli;
use linehaul::config::Config;
use linehaul::storage::Storage;

fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let root = config.storage_root.or_else(Storage::default_root);
    let Some(root) = root else {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    };

    let storage = match Storage::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
