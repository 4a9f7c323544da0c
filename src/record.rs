// CLASSIFICATION: COMMUNITY
// Filename: record.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Build records: one line per build with a SHA-256 per artifact.
//!
//! Line format:
//! `<rfc3339> input=<path> mode=<mode> <artifact>=<hex|missing> ...`

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::config::Mode;
use crate::naming::ArtifactSet;

/// Hex SHA-256 of the file at `path`, or `None` if it does not exist.
pub fn hash_artifact(path: &Path) -> io::Result<Option<String>> {
    let mut f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = f.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(Some(hex::encode(hasher.finalize())))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRecord {
    pub input: String,
    pub mode: Mode,
    pub artifacts: Vec<(PathBuf, Option<String>)>,
}

impl BuildRecord {
    /// Hash whatever the build left behind.
    pub fn collect(artifacts: &ArtifactSet, mode: Mode) -> io::Result<Self> {
        let mut hashed = Vec::with_capacity(4);
        for path in artifacts.outputs() {
            let digest = hash_artifact(&path)?;
            hashed.push((path, digest));
        }
        Ok(BuildRecord {
            input: artifacts.input.clone(),
            mode,
            artifacts: hashed,
        })
    }

    /// The record line without its timestamp.
    pub fn render(&self) -> String {
        let mut line = format!("input={} mode={}", self.input, self.mode);
        for (path, digest) in &self.artifacts {
            line.push_str(&format!(
                " {}={}",
                path.display(),
                digest.as_deref().unwrap_or("missing")
            ));
        }
        line
    }

    pub fn append_to(&self, log: &Path) -> io::Result<()> {
        if let Some(parent) = log.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut f = OpenOptions::new().create(true).append(true).open(log)?;
        writeln!(f, "{} {}", Utc::now().to_rfc3339(), self.render())?;
        f.flush()?;
        Ok(())
    }
}
