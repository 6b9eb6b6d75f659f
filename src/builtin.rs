use crate::command::{BuiltinCommand, ExitCode};
use crate::env::Environment;
use anyhow::{Context, Result};
use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Change the current working directory of the session.
///
/// `..` moves to the parent (a no-op at the filesystem root). An absolute
/// target is adopted verbatim without an existence check; a relative target
/// is adopted only if it resolves to an existing directory.
pub struct Cd;

impl BuiltinCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        if args.len() != 1 {
            writeln!(stdout, "Usage: cd [directory]")?;
            return Ok(1);
        }
        let target = &args[0];
        if target == ".." {
            if let Some(parent) = env.current_dir.parent() {
                env.current_dir = parent.to_path_buf();
            }
        } else if Path::new(target).is_absolute() {
            env.current_dir = Path::new(target).to_path_buf();
        } else {
            let resolved = env.current_dir.join(target);
            if resolved.is_dir() {
                env.current_dir = resolved;
            } else {
                writeln!(stdout, "Directory not found: {}", target)?;
                return Ok(1);
            }
        }
        Ok(0)
    }
}

/// Print the current working directory to standard output.
pub struct Pwd;

impl BuiltinCommand for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(
        &self,
        _args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        writeln!(stdout, "{}", env.current_dir.display())?;
        Ok(0)
    }
}

/// Write the arguments back, each followed by a single space, then a final
/// lone space and newline.
pub struct Echo;

impl BuiltinCommand for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        for arg in args {
            write!(stdout, "{} ", arg)?;
        }
        writeln!(stdout, " ")?;
        Ok(0)
    }
}

/// List the current directory, one entry per line, sorted by name.
///
/// Registered twice: as `ls` (ascending) and as `ls -r` (descending).
pub struct Ls {
    pub descending: bool,
}

impl BuiltinCommand for Ls {
    fn name(&self) -> &'static str {
        if self.descending { "ls -r" } else { "ls" }
    }

    fn execute(
        &self,
        _args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let entries = fs::read_dir(&env.current_dir)
            .with_context(|| format!("Failed to read directory: {}", env.current_dir.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        if self.descending {
            names.reverse();
        }
        for name in names {
            writeln!(stdout, "{}", name)?;
        }
        Ok(0)
    }
}

/// Create one directory per argument under the current directory.
///
/// A failure on one argument is reported and the batch continues; it never
/// aborts early.
pub struct Mkdir;

impl BuiltinCommand for Mkdir {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let mut code = 0;
        for arg in args {
            if fs::create_dir(env.current_dir.join(arg)).is_err() {
                writeln!(stdout, "Failed to create directory: {}", arg)?;
                code = 1;
            }
        }
        Ok(code)
    }
}

/// Remove a file or empty directory under the current directory.
///
/// The single argument `*` instead removes every direct child of the
/// current directory, one level deep only: non-empty child directories are
/// left alone because `remove_dir` refuses them. Never recurses.
pub struct Rmdir;

impl BuiltinCommand for Rmdir {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let Some(arg) = args.first() else {
            writeln!(stdout, "Usage: rmdir [directory | *]")?;
            return Ok(1);
        };
        if arg == "*" {
            let entries = fs::read_dir(&env.current_dir).with_context(|| {
                format!("Failed to read directory: {}", env.current_dir.display())
            })?;
            for entry in entries {
                let path = entry?.path();
                // Failures (non-empty subdirectory, permission) are silent,
                // matching the single-level delete-all contract.
                let _ = if path.is_dir() {
                    fs::remove_dir(&path)
                } else {
                    fs::remove_file(&path)
                };
            }
            return Ok(0);
        }

        let target = env.current_dir.join(arg);
        if target.is_dir() {
            if fs::read_dir(&target)?.next().is_some() {
                writeln!(stdout, "Cannot remove non-empty folder")?;
                return Ok(1);
            }
            let _ = fs::remove_dir(&target);
        } else {
            // A missing target is a silent no-op.
            let _ = fs::remove_file(&target);
        }
        Ok(0)
    }
}

/// Create an empty file under the current directory, only if absent.
pub struct Touch;

impl BuiltinCommand for Touch {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        if args.len() != 1 {
            writeln!(stdout, "Usage: touch [file]")?;
            return Ok(1);
        }
        let target = env.current_dir.join(&args[0]);
        if target.exists() {
            writeln!(stdout, "File already exists: {}", args[0])?;
            return Ok(1);
        }
        fs::File::create(&target)
            .with_context(|| format!("Failed to create file: {}", args[0]))?;
        writeln!(stdout, "File created: {}", args[0])?;
        Ok(0)
    }
}

/// Remove a single file under the current directory.
///
/// Refuses directories; there is no recursive remove.
pub struct Rm;

impl BuiltinCommand for Rm {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        if args.len() != 1 {
            writeln!(stdout, "Usage: rm [file]")?;
            return Ok(1);
        }
        let target = env.current_dir.join(&args[0]);
        if !target.exists() {
            writeln!(stdout, "File not found")?;
            return Ok(1);
        }
        if target.is_dir() {
            writeln!(
                stdout,
                "Cannot remove a directory; recursive remove is not supported"
            )?;
            return Ok(1);
        }
        fs::remove_file(&target)
            .with_context(|| format!("Failed to remove file: {}", args[0]))?;
        writeln!(stdout, "File removed: {}", args[0])?;
        Ok(0)
    }
}

/// Print each named file byte by byte, followed by a lone space and newline.
///
/// Arguments are opened as given, relative to the directory the shell was
/// started from, not the session's `cd` state. A missing file is reported
/// and the remaining files are still printed.
pub struct Cat;

impl BuiltinCommand for Cat {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        let mut code = 0;
        for fname in args {
            let file = match fs::File::open(fname) {
                Ok(f) => f,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    writeln!(stdout, "the file is not found")?;
                    code = 1;
                    continue;
                }
                Err(_) => {
                    writeln!(stdout, "An error occurred while reading the file")?;
                    code = 1;
                    continue;
                }
            };
            let mut failed = false;
            for byte in BufReader::new(file).bytes() {
                match byte {
                    Ok(b) => write!(stdout, "{}", b as char)?,
                    Err(_) => {
                        failed = true;
                        break;
                    }
                }
            }
            if failed {
                writeln!(stdout, "An error occurred while reading the file")?;
                code = 1;
            } else {
                writeln!(stdout, " ")?;
            }
        }
        Ok(code)
    }
}

/// Count lines, words and characters of the first argument.
///
/// Counting rules are deliberate quirks of this shell, kept as-is rather
/// than aligned with POSIX wc: line and word counts start at 1, words
/// increment only on space bytes, and a file containing nothing but spaces
/// reports `0 0 0`.
pub struct Wc;

impl BuiltinCommand for Wc {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        let Some(fname) = args.first() else {
            writeln!(stdout, "Usage: wc [file]")?;
            return Ok(1);
        };
        let file = match fs::File::open(fname) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                writeln!(stdout, "the file is not found")?;
                return Ok(1);
            }
            Err(_) => {
                writeln!(stdout, "An error occurred while reading the file")?;
                return Ok(1);
            }
        };

        let mut lines = 1u64;
        let mut words = 1u64;
        let mut chars = 0u64;
        let mut empty = true;
        for byte in BufReader::new(file).bytes() {
            let Ok(b) = byte else {
                writeln!(stdout, "An error occurred while reading the file")?;
                return Ok(1);
            };
            if b == b'\n' {
                lines += 1;
            }
            if b == b' ' {
                words += 1;
                chars += 1;
            } else {
                chars += 1;
                empty = false;
            }
        }

        if empty {
            writeln!(stdout, "0 0 0 {}", fname)?;
        } else {
            writeln!(stdout, "{} {} {} {}", lines, words, chars, fname)?;
        }
        Ok(0)
    }
}

/// Terminate the shell process with a success status.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(
        &self,
        _args: &[String],
        _stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        std::process::exit(0)
    }
}
