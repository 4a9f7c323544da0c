// CLASSIFICATION: COMMUNITY
// Filename: orchestrator.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Sequences the four lowering steps for one input file.
//!
//! A missing input prints a fixed message and still exits 0. That matches
//! the historical behaviour of the tool and is kept for compatibility.

use std::io::{self, Write};

use log::{debug, info};

use crate::config::{Config, Mode};
use crate::error::{BuildError, BuildResult};
use crate::naming::ArtifactSet;
use crate::plan::{plan, StepKind};
use crate::record::BuildRecord;
use crate::runner::{StepRunner, StepStatus, SystemRunner};

/// Written to stderr when no input file is given.
/// The text after `ERR: ` is the [`BuildError::MissingArgument`] message.
pub const MISSING_INPUT_MESSAGE: &str = "ERR: Must provide an input file name.\n";

/// What happened to a single step. `status` is `None` if it never ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: StepKind,
    pub command: String,
    pub status: Option<StepStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    MissingInput,
    Built {
        artifacts: ArtifactSet,
        steps: Vec<StepReport>,
    },
}

impl Outcome {
    /// Completed runs exit 0 whether or not the tools succeeded.
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// Run the build for `input`, echoing each command to `out`.
pub fn orchestrate(
    input: Option<&str>,
    cfg: &Config,
    runner: &mut dyn StepRunner,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> BuildResult<Outcome> {
    let Some(input) = input else {
        err.write_all(MISSING_INPUT_MESSAGE.as_bytes())?;
        err.flush()?;
        return Ok(Outcome::MissingInput);
    };

    let artifacts = ArtifactSet::new(input);
    if artifacts.executable_collides() {
        debug!("executable {} will overwrite the input", artifacts.executable);
    }
    if cfg.mode == Mode::Strict {
        cfg.toolchain.preflight()?;
    }

    let mut steps = Vec::with_capacity(4);
    for step in plan(&artifacts, &cfg.toolchain) {
        let command = step.to_string();
        let result = runner.run(&step);
        writeln!(out, "{command}")?;
        out.flush()?;

        let status = match (result, cfg.mode) {
            (Ok(status), Mode::Strict) if !status.success() => {
                return Err(BuildError::BuildStepFailed {
                    step: step.kind,
                    command,
                    status,
                });
            }
            (Ok(status), _) => {
                debug!("{} step finished with {status}", step.kind);
                Some(status)
            }
            (Err(e), Mode::Strict) => return Err(e),
            (Err(e), Mode::Legacy) => {
                debug!("{} step did not run: {e}", step.kind);
                None
            }
        };
        steps.push(StepReport {
            kind: step.kind,
            command,
            status,
        });
    }

    if let Some(log) = &cfg.record {
        BuildRecord::collect(&artifacts, cfg.mode)?.append_to(log)?;
        info!("recorded build of {} in {}", artifacts.input, log.display());
    }

    Ok(Outcome::Built { artifacts, steps })
}

/// Map a build result to a process exit status, reporting errors on `err`.
pub fn report(result: BuildResult<Outcome>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            let _ = writeln!(err, "irbuild: {e}");
            1
        }
    }
}

/// `args[1]` is the input; everything else is ignored.
pub fn run_with(
    args: &[String],
    cfg: &Config,
    runner: &mut dyn StepRunner,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let input = args.get(1).map(String::as_str);
    let result = orchestrate(input, cfg, runner, out, err);
    report(result, err)
}

/// Build with the default configuration against the real toolchain.
pub fn run(args: &[String]) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(
        args,
        &Config::default(),
        &mut SystemRunner,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
