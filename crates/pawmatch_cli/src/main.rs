//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open a roster file, seed demonstration pets when empty, print a summary.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `pawmatch_cli [DATA_FILE] [ABSOLUTE_LOG_DIR]`

use log::warn;
use pawmatch_core::{
    core_version, default_log_level, init_logging, seed_sample_pets, JsonFileStorage,
    RosterService, DEFAULT_DATA_FILE,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let data_file = args.next().unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    if let Some(log_dir) = args.next() {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let storage = JsonFileStorage::new(data_file);
    let roster_path = storage.path().display().to_string();
    let (mut service, corruption) = RosterService::open(storage);
    if let Some(err) = corruption {
        warn!("event=cli_open module=cli status=fallback");
        eprintln!("warning: {err}; starting with an empty roster");
    }

    let seeded = match seed_sample_pets(&mut service) {
        Ok(count) => count,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stats = service.stats();
    println!("pawmatch_core version={}", core_version());
    println!("roster file={} seeded={}", roster_path, seeded);
    println!(
        "pets available={} adopted={} adopters={} adoptions={}",
        stats.available_pets, stats.adopted_pets, stats.adopters, stats.total_adoptions
    );
    for (status, count) in &stats.pets_by_status {
        println!("status {}={count}", status.as_str());
    }
    for (species, count) in &stats.pets_by_species {
        println!("species {species}={count}");
    }
    ExitCode::SUCCESS
}
