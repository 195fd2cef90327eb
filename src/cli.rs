//! Minimal argument parsing for the demo binary: a trailing command and
//! nothing else. Flag parsing, filtering, and output formats are
//! explicitly out of scope for this crate.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tracewright")]
#[command(version)]
#[command(about = "Spawn and trace a command's system calls", long_about = None)]
pub struct Cli {
    /// Command to trace (everything after --)
    #[arg(last = true)]
    pub command: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trailing_command() {
        let cli = Cli::parse_from(["tracewright", "--", "echo", "hello"]);
        let cmd = cli.command.expect("command should be present");
        assert_eq!(cmd[0], "echo");
        assert_eq!(cmd[1], "hello");
    }

    #[test]
    fn empty_without_command() {
        let cli = Cli::parse_from(["tracewright"]);
        assert!(cli.command.is_none());
    }
}
