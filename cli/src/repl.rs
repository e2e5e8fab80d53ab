use clap::{Parser, Subcommand};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line reader over async stdin so the tick engine keeps running while the
/// prompt waits.
pub struct Repl {
    lines: Lines<BufReader<Stdin>>,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Prompt and read one line. `None` on end of input.
    pub async fn readline(&mut self) -> Result<Option<String>, String> {
        write!(std::io::stdout(), "$ ").map_err(|e| e.to_string())?;
        std::io::stdout().flush().map_err(|e| e.to_string())?;
        self.lines.next_line().await.map_err(|e| e.to_string())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "stopwatch")]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Press the start/stop control
    StartStop,
    /// Press the reset control
    Reset,
    /// Press the wait control several times in one burst
    Wait {
        #[arg(short, long, default_value_t = 2)]
        clicks: u32,
    },
    /// Press the control with the given data-role
    Click {
        #[arg(short, long)]
        role: String,
    },
    Status,
    Config {
        /// Persist the active configuration
        #[arg(short, long)]
        save: bool,
    },
    Exit,
}

/// Split a prompt line shell-style and parse it
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let args = shlex::split(line).ok_or("error: Invalid quoting")?;
    let parsed = ReplLine::try_parse_from(args).map_err(|e| e.to_string())?;
    Ok(parsed.command)
}
