// CLASSIFICATION: COMMUNITY
// Filename: logging.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

use env_logger::Env;
use log::LevelFilter;

/// Install the stderr logger. `RUST_LOG` overrides the default level.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}
