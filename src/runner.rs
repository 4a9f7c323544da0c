// CLASSIFICATION: COMMUNITY
// Filename: runner.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

use std::fmt;
use std::fs::File;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::error::{BuildError, BuildResult};
use crate::plan::BuildStep;

/// How a finished step exited. `code` is `None` when a signal killed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStatus {
    pub code: Option<i32>,
}

impl StepStatus {
    pub fn from_code(code: i32) -> Self {
        StepStatus { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for StepStatus {
    fn from(status: ExitStatus) -> Self {
        StepStatus {
            code: status.code(),
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("a signal"),
        }
    }
}

/// Executes build steps. Blocks until the step's process exits.
pub trait StepRunner {
    fn run(&mut self, step: &BuildStep) -> BuildResult<StepStatus>;
}

/// Runs steps as child processes of the current one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl StepRunner for SystemRunner {
    fn run(&mut self, step: &BuildStep) -> BuildResult<StepStatus> {
        let mut cmd = Command::new(&step.program);
        cmd.args(&step.args);
        // Same order a shell applies `< in > out`.
        if let Some(path) = &step.stdin {
            let f = File::open(path).map_err(|source| BuildError::Redirect {
                path: path.clone(),
                source,
            })?;
            cmd.stdin(Stdio::from(f));
        }
        if let Some(path) = &step.stdout {
            let f = File::create(path).map_err(|source| BuildError::Redirect {
                path: path.clone(),
                source,
            })?;
            cmd.stdout(Stdio::from(f));
        }
        debug!("spawning {step}");
        let status = cmd.status().map_err(|source| BuildError::Spawn {
            program: step.program.clone(),
            source,
        })?;
        Ok(status.into())
    }
}
