// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Build driver that lowers an LLVM IR or bitcode file with `llc`,
//! `llvm-dis` and the system C compiler.

pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod orchestrator;
pub mod plan;
pub mod record;
pub mod runner;
pub mod toolchain;

pub use config::{Config, Mode};
pub use error::{BuildError, BuildResult};
pub use orchestrator::{orchestrate, run, run_with, Outcome};
