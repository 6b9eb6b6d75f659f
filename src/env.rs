use std::env as stdenv;
use std::path::PathBuf;

/// Session state shared by the built-in commands.
///
/// Holds the shell's own notion of the current working directory. Only `cd`
/// writes it; every path-resolving command reads it. The process-wide
/// working directory is never changed, so relative `cat`/`wc` arguments
/// still resolve against the directory the shell was started from.
///
/// Invariant: always an absolute path. It is *not* guaranteed to exist —
/// `cd` to an absolute path adopts it unchecked, and the failure surfaces
/// on the next command that touches the filesystem.
#[derive(Debug, Clone)]
pub struct Environment {
    /// The current working directory for command execution.
    pub current_dir: PathBuf,
}

impl Environment {
    /// Capture the process working directory into a new `Environment`.
    pub fn new() -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { current_dir }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
