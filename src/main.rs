use terminal_commands::Terminal;

fn main() -> rustyline::Result<()> {
    Terminal::default().repl()
}
