use crate::builtin::{Cat, Cd, Echo, Exit, Ls, Mkdir, Pwd, Rm, Rmdir, Touch, Wc};
use crate::command::{BuiltinCommand, ExitCode};
use crate::env::Environment;
use crate::parser::{ParsedCommand, Parser};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, Write};

/// The interactive terminal session.
///
/// Owns the line [`Parser`] (and with it the command history), the session
/// [`Environment`], and the registry of built-in commands. Constructed once
/// per process; there is no ambient global state.
pub struct Terminal {
    parser: Parser,
    env: Environment,
    builtins: Vec<Box<dyn BuiltinCommand>>,
}

impl Terminal {
    /// Create a terminal with a custom set of built-ins.
    pub fn new(builtins: Vec<Box<dyn BuiltinCommand>>) -> Self {
        Self {
            parser: Parser::new(),
            env: Environment::new(),
            builtins,
        }
    }

    /// Parse one raw line, returning `None` for input with no tokens.
    pub fn parse(&mut self, input: &str) -> Option<ParsedCommand> {
        self.parser.parse(input)
    }

    /// Dispatch a parsed command against the builtin registry.
    ///
    /// Every expected failure has already been rendered by the command
    /// itself; an `Err` from a built-in is reported here as a single line
    /// so no command can take down the read loop.
    pub fn dispatch(&mut self, cmd: &ParsedCommand, stdout: &mut dyn Write) -> io::Result<ExitCode> {
        // history is interpreter state rather than a filesystem operation,
        // so it is answered here instead of by the registry.
        if cmd.name == "history" {
            for (i, line) in self.parser.history().iter().enumerate() {
                writeln!(stdout, "{}- {}", i + 1, line)?;
            }
            return Ok(0);
        }

        for builtin in &self.builtins {
            if builtin.name() == cmd.name {
                return match builtin.execute(&cmd.args, stdout, &mut self.env) {
                    Ok(code) => Ok(code),
                    Err(e) => {
                        writeln!(stdout, "{}", e)?;
                        Ok(1)
                    }
                };
            }
        }

        writeln!(stdout, "the term is not recognized")?;
        Ok(1)
    }

    /// The blocking read-eval loop: prompt, read a line, parse, dispatch.
    ///
    /// Terminates on end of input or interrupt; the `exit` built-in ends
    /// the process directly.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = io::stdout();

        loop {
            match rl.readline(">") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    match self.parse(&line) {
                        Some(cmd) => {
                            self.dispatch(&cmd, &mut stdout)?;
                        }
                        None => println!("Invalid Command"),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Terminal {
    /// A terminal with the full built-in command set registered.
    fn default() -> Self {
        Self::new(vec![
            Box::new(Cd),
            Box::new(Pwd),
            Box::new(Echo),
            Box::new(Ls { descending: false }),
            Box::new(Ls { descending: true }),
            Box::new(Mkdir),
            Box::new(Rmdir),
            Box::new(Touch),
            Box::new(Rm),
            Box::new(Cat),
            Box::new(Wc),
            Box::new(Exit),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(term: &mut Terminal, line: &str) -> String {
        let cmd = term.parse(line).expect("line should parse");
        let mut out: Vec<u8> = Vec::new();
        term.dispatch(&cmd, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let mut term = Terminal::default();
        let before = term.env.current_dir.clone();
        assert_eq!(eval(&mut term, "foo"), "the term is not recognized\n");
        assert_eq!(term.env.current_dir, before);
    }

    #[test]
    fn test_history_is_one_indexed_and_verbatim() {
        let mut term = Terminal::default();
        eval(&mut term, "pwd");
        eval(&mut term, "echo hi");
        let out = eval(&mut term, "history");
        assert_eq!(out, "1- pwd\n2- echo hi\n3- history\n");
    }

    #[test]
    fn test_fused_flag_reaches_the_right_command() {
        let mut term = Terminal::default();
        let cmd = term.parse("ls -r").unwrap();
        assert_eq!(cmd.name, "ls -r");
        let mut out: Vec<u8> = Vec::new();
        let code = term.dispatch(&cmd, &mut out).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_dispatch_renders_builtin_errors_without_propagating() {
        let mut term = Terminal::default();
        let cmd = term.parse("cd /no/such/directory/anywhere").unwrap();
        let mut sink: Vec<u8> = Vec::new();
        term.dispatch(&cmd, &mut sink).unwrap();
        // The adopted directory does not exist; ls must surface that as a
        // printed line, not an Err.
        let out = eval(&mut term, "ls");
        assert!(out.starts_with("Failed to read directory:"));
    }
}
