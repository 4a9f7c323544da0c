// CLASSIFICATION: COMMUNITY
// Filename: plan.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! The fixed four-step lowering sequence.
//!
//! Each step is an explicit argument vector. Stream redirection for the
//! disassembler is carried as file paths and applied by the runner, never
//! through a shell.

use std::fmt;
use std::path::PathBuf;

use crate::naming::ArtifactSet;
use crate::toolchain::{Tool, Toolchain};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// IR to target assembly (`<base>.s`).
    Assemble,
    /// Bitcode to readable IR (`<base>.ll`).
    Disassemble,
    /// IR to native object (`<base>.o`).
    Object,
    /// Object to executable (`<base>`).
    Link,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepKind::Assemble => "assemble",
            StepKind::Disassemble => "disassemble",
            StepKind::Object => "object",
            StepKind::Link => "link",
        })
    }
}

/// One external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub kind: StepKind,
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<PathBuf>,
    pub stdout: Option<PathBuf>,
}

impl BuildStep {
    fn new(kind: StepKind, program: &str, args: &[&str]) -> Self {
        BuildStep {
            kind,
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin: None,
            stdout: None,
        }
    }
}

/// Renders the step the way a shell user would type it, e.g.
/// `llvm-dis < foo.bc > foo.ll`.
impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        if let Some(path) = &self.stdin {
            write!(f, " < {}", path.display())?;
        }
        if let Some(path) = &self.stdout {
            write!(f, " > {}", path.display())?;
        }
        Ok(())
    }
}

/// Steps for `artifacts`, in execution order.
pub fn plan(artifacts: &ArtifactSet, tools: &Toolchain) -> Vec<BuildStep> {
    let input = artifacts.input.as_str();
    let llc = tools.program(Tool::Llc);

    let mut disassemble = BuildStep::new(StepKind::Disassemble, tools.program(Tool::LlvmDis), &[]);
    disassemble.stdin = Some(PathBuf::from(input));
    disassemble.stdout = Some(PathBuf::from(&artifacts.ir_text));

    vec![
        BuildStep::new(StepKind::Assemble, llc, &[input]),
        disassemble,
        BuildStep::new(StepKind::Object, llc, &["-filetype=obj", input]),
        BuildStep::new(
            StepKind::Link,
            tools.program(Tool::Cc),
            &[artifacts.object.as_str(), "-o", artifacts.executable.as_str()],
        ),
    ]
}
