/// A single parsed input line: the command name plus its arguments.
///
/// Produced fresh for every line read from the user and consumed within the
/// same read-eval cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    /// First token of the line, or the first two tokens joined by one space
    /// when the second token begins with `-` (flag fusion, e.g. `ls -r`).
    pub name: String,
    /// Every token after the first. When fusion happens the flag token is
    /// still present here as well as inside `name`; commands that iterate
    /// over their arguments (`mkdir`, `rmdir`) rely on seeing the raw token
    /// stream, including literal `-`-prefixed file names.
    pub args: Vec<String>,
}

/// Splits raw input lines into [`ParsedCommand`]s and records every line it
/// has seen for the `history` built-in.
#[derive(Debug, Default)]
pub struct Parser {
    history: Vec<String>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one raw input line.
    ///
    /// The line is appended to the history verbatim before any tokenization,
    /// so even lines that fail to parse show up in `history` output.
    ///
    /// Tokenization splits on single spaces. Interior empty tokens (from
    /// consecutive spaces) are kept, trailing empty tokens are dropped; a
    /// line with no tokens left is invalid and yields `None`.
    pub fn parse(&mut self, input: &str) -> Option<ParsedCommand> {
        self.history.push(input.to_string());

        let mut tokens: Vec<&str> = input.split(' ').collect();
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
        if tokens.is_empty() {
            return None;
        }

        let mut name = tokens[0].to_string();
        if tokens.len() > 1 && tokens[1].starts_with('-') {
            name.push(' ');
            name.push_str(tokens[1]);
        }

        let args = tokens[1..].iter().map(|t| t.to_string()).collect();
        Some(ParsedCommand { name, args })
    }

    /// Every line handed to [`parse`](Self::parse) so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}
