use crate::env::Environment;
use anyhow::Result;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Object-safe trait for a command built into the shell.
///
/// Built-ins execute in-process and write everything they print to the
/// provided `stdout`, which lets tests capture output in a `Vec<u8>`.
/// Expected failures (missing files, bad argument counts) are printed by
/// the command itself and reported through the exit code; an `Err` is
/// reserved for I/O the command could not handle and is rendered as a
/// single message by the dispatcher.
pub trait BuiltinCommand {
    /// Command name as typed by the user, e.g. `"echo"` or `"ls -r"`.
    fn name(&self) -> &'static str;

    /// Execute the command against the raw argument tokens.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero for
    /// error.
    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}
