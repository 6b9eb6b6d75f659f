//! A tiny interactive command shell.
//!
//! This crate provides a minimal read-eval loop around a fixed set of
//! built-in filesystem and text commands: `cd`, `pwd`, `echo`, `ls`,
//! `ls -r`, `mkdir`, `rmdir`, `touch`, `rm`, `cat`, `wc`, `history` and
//! `exit`. It is intentionally small and easy to read: one line of input is
//! parsed into a command name and arguments, then dispatched against the
//! session's own current-directory state.
//!
//! The main entry point is [`Terminal`], which owns the [`Parser`] (and the
//! command history it records) together with the builtin registry. The
//! public modules [`command`] and [`env`] expose the trait and state type
//! for implementing additional built-ins.

mod builtin;
pub mod command;
pub mod env;
mod parser;
mod terminal;

pub use parser::{ParsedCommand, Parser};
pub use terminal::Terminal;
