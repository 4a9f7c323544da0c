// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Entry point for the irbuild binary.

use std::io;

use clap::Parser;
use irbuild::config::{Cli, Config};
use irbuild::runner::SystemRunner;
use irbuild::{logging, orchestrator};

fn main_entry() -> anyhow::Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let cfg = Config::from_cli(&cli)?;
    log::debug!("mode={} record={:?}", cfg.mode, cfg.record);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let result = orchestrator::orchestrate(
        cli.input.as_deref(),
        &cfg,
        &mut SystemRunner,
        &mut out,
        &mut err,
    );
    Ok(orchestrator::report(result, &mut err))
}

fn main() {
    match main_entry() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("irbuild: {e}");
            std::process::exit(1);
        }
    }
}
