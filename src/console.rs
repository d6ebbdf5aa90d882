//! Line-oriented terminal front end.
//!
//! Reads one command per line, feeds it to a [`SessionController`] and
//! prints the derived state back. No game rules live here.

use crate::games::tictactoe::{Position, RoundResult, Symbol};
use crate::session::{SessionController, Snapshot};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// `select <row> <col>`
    Select(Position),
    /// `rename <x|o> <name...>`
    Rename(Symbol, String),
    /// `rematch`
    Rematch,
    /// `show`
    Show,
    /// `log`
    Log,
    /// `quit`
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::new("Empty command"));
        };

        match verb.to_ascii_lowercase().as_str() {
            "select" | "s" => {
                let row = parse_coordinate(words.next(), "row")?;
                let col = parse_coordinate(words.next(), "column")?;
                if words.next().is_some() {
                    return Err(CommandError::new("Usage: select <row> <col>"));
                }
                Position::try_new(row, col)
                    .map(ConsoleCommand::Select)
                    .ok_or_else(|| {
                        CommandError::new(format!("({}, {}) is not on the board", row, col))
                    })
            }
            "rename" | "r" => {
                let symbol = words
                    .next()
                    .ok_or_else(|| CommandError::new("Usage: rename <x|o> <name>"))?;
                let symbol = Symbol::from_str(symbol)
                    .map_err(|_| CommandError::new(format!("Unknown symbol: {}", symbol)))?;
                let name = words.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    return Err(CommandError::new("Player name must not be empty"));
                }
                Ok(ConsoleCommand::Rename(symbol, name))
            }
            "rematch" => Ok(ConsoleCommand::Rematch),
            "show" => Ok(ConsoleCommand::Show),
            "log" => Ok(ConsoleCommand::Log),
            "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
            other => Err(CommandError::new(format!("Unknown command: {}", other))),
        }
    }
}

fn parse_coordinate(word: Option<&str>, axis: &str) -> Result<usize, CommandError> {
    let word = word.ok_or_else(|| CommandError::new(format!("Missing {}", axis)))?;
    word.parse()
        .map_err(|_| CommandError::new(format!("Invalid {}: {}", axis, word)))
}

/// Console parse error.
#[derive(Debug, Clone, Display, Error)]
#[display("{}", message)]
pub struct CommandError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandError {
    /// Creates a new command error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// How snapshots are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board drawing plus status lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Renders a snapshot for the terminal.
#[instrument(skip(snapshot))]
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    for (symbol, name) in snapshot.players().entries() {
        let marker = if symbol == *snapshot.active_player() && !snapshot.result().is_over() {
            " *"
        } else {
            ""
        };
        out.push_str(&format!("{}: {}{}\n", symbol, name, marker));
    }

    out.push('\n');
    out.push_str(&snapshot.board().to_string());
    out.push_str("\n\n");

    match snapshot.result() {
        RoundResult::NoResult => out.push_str(&format!(
            "{} to move ({}), {} squares open\n",
            snapshot.active_name(),
            snapshot.active_player(),
            snapshot.board().empty_positions().len()
        )),
        result => {
            out.push_str("Game Over! ");
            out.push_str(&result.to_string());
            out.push_str(" Type 'rematch' to play once again.\n");
        }
    }

    out
}

/// Renders the turn log, newest first.
pub fn render_turns(snapshot: &Snapshot) -> String {
    if snapshot.turns().is_empty() {
        return "No moves yet\n".to_string();
    }
    snapshot
        .turns()
        .iter()
        .map(|mv| {
            format!(
                "{} ({}) selected {}\n",
                snapshot.players().name(mv.symbol),
                mv.symbol,
                mv.position
            )
        })
        .collect()
}

fn write_snapshot<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", render_snapshot(snapshot)),
        OutputFormat::Json => {
            let json = serde_json::to_string(snapshot).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

/// Runs the command loop until `quit` or end of input.
#[instrument(skip_all, fields(format = ?format))]
pub fn run<R: BufRead, W: Write>(
    session: &mut SessionController,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> std::io::Result<()> {
    info!("Console started");
    write_snapshot(&mut output, &session.query(), format)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, line = %line, "Unparsed console line");
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };

        match command {
            ConsoleCommand::Select(position) => {
                if let Err(e) = session.select_square(position) {
                    warn!(error = %e, "Selection rejected");
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            }
            ConsoleCommand::Rename(symbol, name) => session.rename_player(symbol, name),
            ConsoleCommand::Rematch => session.rematch(),
            ConsoleCommand::Show => {}
            ConsoleCommand::Log => {
                write!(output, "{}", render_turns(&session.query()))?;
                continue;
            }
            ConsoleCommand::Quit => break,
        }

        write_snapshot(&mut output, &session.query(), format)?;
    }

    info!("Console finished");
    output.flush()
}
