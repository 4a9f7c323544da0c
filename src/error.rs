// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Error kinds surfaced by the build driver.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::plan::StepKind;
use crate::runner::StepStatus;
use crate::toolchain::Tool;

/// Errors produced while configuring or running a build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Must provide an input file name.")]
    MissingArgument,
    #[error("{tool} program `{program}` not found")]
    ToolNotFound { tool: Tool, program: String },
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot redirect {}: {source}", path.display())]
    Redirect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{step} step failed: `{command}` exited with {status}")]
    BuildStepFailed {
        step: StepKind,
        command: String,
        status: StepStatus,
    },
    #[error("invalid config file {}: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },
    #[error("invalid {key} value '{value}'")]
    InvalidSetting { key: &'static str, value: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type BuildResult<T> = Result<T, BuildError>;
