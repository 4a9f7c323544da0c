// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Command line, environment and config file handling.
//!
//! Settings resolve in order: command line, `IRBUILD_*` environment
//! variables, the TOML file named by `--config` / `IRBUILD_CONFIG`, then
//! built-in defaults.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::{BuildError, BuildResult};
use crate::toolchain::{Tool, Toolchain};

#[derive(Parser, Debug, Default)]
#[command(
    name = "irbuild",
    author,
    version,
    about = "Lower an LLVM IR or bitcode file to assembly, IR text, an object and an executable"
)]
pub struct Cli {
    /// Input LLVM IR or bitcode file
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,
    /// Further arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
    /// Stop at the first failing step and exit non-zero
    #[arg(long)]
    pub strict: bool,
    /// Translator used for assembly and object output
    #[arg(long, value_name = "PROG")]
    pub llc: Option<String>,
    /// Bitcode disassembler
    #[arg(long = "llvm-dis", value_name = "PROG")]
    pub llvm_dis: Option<String>,
    /// Compiler driver used to link the executable
    #[arg(long, value_name = "PROG")]
    pub cc: Option<String>,
    /// Append artifact hashes to this file after each build
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,
    /// TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Whether step failures are observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Run every step and exit 0 whatever the tools do.
    #[default]
    Legacy,
    /// Halt on the first failed step and report it.
    Strict,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Legacy => "legacy",
            Mode::Strict => "strict",
        })
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolTable {
    pub llc: Option<String>,
    pub llvm_dis: Option<String>,
    pub cc: Option<String>,
}

/// Contents of the TOML config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub strict: Option<bool>,
    pub record: Option<PathBuf>,
    pub tools: ToolTable,
}

impl FileConfig {
    pub fn load(path: &Path) -> BuildResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| BuildError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &text)
    }

    pub fn parse(path: &Path, text: &str) -> BuildResult<Self> {
        toml::from_str(text).map_err(|e| BuildError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// `IRBUILD_*` environment settings. Empty values count as unset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvOverrides {
    pub strict: Option<bool>,
    pub llc: Option<String>,
    pub llvm_dis: Option<String>,
    pub cc: Option<String>,
    pub record: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> BuildResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> BuildResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let strict = match get("IRBUILD_STRICT") {
            Some(value) => Some(parse_flag("IRBUILD_STRICT", &value)?),
            None => None,
        };
        Ok(EnvOverrides {
            strict,
            llc: get("IRBUILD_LLC"),
            llvm_dis: get("IRBUILD_LLVM_DIS"),
            cc: get("IRBUILD_CC"),
            record: get("IRBUILD_RECORD").map(PathBuf::from),
            config: get("IRBUILD_CONFIG").map(PathBuf::from),
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> BuildResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(BuildError::InvalidSetting {
            key,
            value: value.to_string(),
        }),
    }
}

/// Resolved configuration after CLI parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub toolchain: Toolchain,
    pub record: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> BuildResult<Self> {
        Self::resolve(cli, &EnvOverrides::from_env()?)
    }

    pub fn resolve(cli: &Cli, env: &EnvOverrides) -> BuildResult<Self> {
        let file = match cli.config.as_ref().or(env.config.as_ref()) {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let strict = cli.strict || env.strict.or(file.strict).unwrap_or(false);
        let mode = if strict { Mode::Strict } else { Mode::Legacy };

        let pick = |cli: &Option<String>, env: &Option<String>, file: &Option<String>| {
            cli.clone().or_else(|| env.clone()).or_else(|| file.clone())
        };
        let toolchain = Toolchain::default()
            .with_override(Tool::Llc, pick(&cli.llc, &env.llc, &file.tools.llc))
            .with_override(
                Tool::LlvmDis,
                pick(&cli.llvm_dis, &env.llvm_dis, &file.tools.llvm_dis),
            )
            .with_override(Tool::Cc, pick(&cli.cc, &env.cc, &file.tools.cc));

        let record = cli
            .record
            .clone()
            .or_else(|| env.record.clone())
            .or(file.record);

        Ok(Config {
            mode,
            toolchain,
            record,
        })
    }
}
