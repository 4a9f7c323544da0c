// CLASSIFICATION: COMMUNITY
// Filename: toolchain.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

use std::fmt;
use std::path::PathBuf;

use log::debug;

use crate::error::{BuildError, BuildResult};

/// External programs the driver invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Llc,
    LlvmDis,
    Cc,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Llc, Tool::LlvmDis, Tool::Cc];

    /// Program name used when nothing overrides it.
    pub fn default_program(self) -> &'static str {
        match self {
            Tool::Llc => "llc",
            Tool::LlvmDis => "llvm-dis",
            Tool::Cc => "gcc",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_program())
    }
}

/// Program names for each tool, as they are echoed and spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    llc: String,
    llvm_dis: String,
    cc: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain {
            llc: Tool::Llc.default_program().into(),
            llvm_dis: Tool::LlvmDis.default_program().into(),
            cc: Tool::Cc.default_program().into(),
        }
    }
}

impl Toolchain {
    /// Replace the program for `tool` when `program` is set.
    pub fn with_override(mut self, tool: Tool, program: Option<String>) -> Self {
        if let Some(program) = program {
            *self.slot(tool) = program;
        }
        self
    }

    pub fn program(&self, tool: Tool) -> &str {
        match tool {
            Tool::Llc => &self.llc,
            Tool::LlvmDis => &self.llvm_dis,
            Tool::Cc => &self.cc,
        }
    }

    fn slot(&mut self, tool: Tool) -> &mut String {
        match tool {
            Tool::Llc => &mut self.llc,
            Tool::LlvmDis => &mut self.llvm_dis,
            Tool::Cc => &mut self.cc,
        }
    }

    /// Locate the executable for `tool` on `PATH` (or at its explicit path).
    pub fn resolve(&self, tool: Tool) -> BuildResult<PathBuf> {
        let program = self.program(tool);
        let not_found = || BuildError::ToolNotFound {
            tool,
            program: program.to_string(),
        };
        if program.trim().is_empty() {
            return Err(not_found());
        }
        let path = which::which(program).map_err(|_| not_found())?;
        debug!("resolved {tool} -> {}", path.display());
        Ok(path)
    }

    /// Check every tool resolves before anything runs.
    pub fn preflight(&self) -> BuildResult<()> {
        for tool in Tool::ALL {
            self.resolve(tool)?;
        }
        Ok(())
    }
}
