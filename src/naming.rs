// CLASSIFICATION: COMMUNITY
// Filename: naming.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Artifact naming derived from the input path.
//!
//! Every artifact shares the input's base name: the input with its final
//! extension removed. Only the last path component is searched for an
//! extension and leading dots never start one, so `dir.d/prog` and
//! `.hidden` keep their names.

use std::path::PathBuf;

/// Split `path` into `(base, extension)`; the extension keeps its dot.
pub fn split_extension(path: &str) -> (&str, &str) {
    let name_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    let Some(dot) = path.rfind('.') else {
        return (path, "");
    };
    if dot < name_start || path[name_start..dot].bytes().all(|b| b == b'.') {
        return (path, "");
    }
    (&path[..dot], &path[dot..])
}

/// Input path with its final extension removed.
pub fn base_name(path: &str) -> &str {
    split_extension(path).0
}

/// The files one build reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub input: String,
    pub base: String,
    pub assembly: String,
    pub ir_text: String,
    pub object: String,
    pub executable: String,
}

impl ArtifactSet {
    pub fn new(input: &str) -> Self {
        let base = base_name(input).to_string();
        ArtifactSet {
            input: input.to_string(),
            assembly: format!("{base}.s"),
            ir_text: format!("{base}.ll"),
            object: format!("{base}.o"),
            executable: base.clone(),
            base,
        }
    }

    /// Outputs in the order the steps produce them.
    pub fn outputs(&self) -> [PathBuf; 4] {
        [
            PathBuf::from(&self.assembly),
            PathBuf::from(&self.ir_text),
            PathBuf::from(&self.object),
            PathBuf::from(&self.executable),
        ]
    }

    /// True when linking will overwrite the input, e.g. for `prog`.
    pub fn executable_collides(&self) -> bool {
        self.executable == self.input
    }
}
