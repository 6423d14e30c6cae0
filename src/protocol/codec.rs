//! Command codec
//!
//! Decoding of shell input lines into [`Command`]s, and the canonical text
//! form of each command.
//!
//! ## Line Format
//! ```text
//! ┌──────────────┬─────────────────────────────┐
//! │ keyword      │ argument (rest of the line) │
//! └──────────────┴─────────────────────────────┘
//! ```
//!
//! Keywords are case-insensitive. Single-character menu aliases are
//! accepted too:
//! - `0` quit, `1 <S|P>` dataset kind, `2 <x>` insert, `3 <x>` delete
//! - `A`..`W` statistics (`D` is size), `X` frequency table, `Y` report,
//!   `Z [path]` save

use std::path::PathBuf;

use crate::config::DatasetKind;
use crate::error::{Result, StatsError};

use super::{Command, StatKind};

/// Decode one input line
pub fn decode_command(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Err(StatsError::Command("empty command".to_string()));
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };
    let keyword = keyword.to_ascii_lowercase();

    match keyword.as_str() {
        "0" | "quit" | "exit" => no_argument(Command::Quit, &keyword, rest),
        "1" | "kind" | "type" => Ok(Command::SetKind {
            kind: decode_kind(rest)?,
        }),
        "2" | "insert" | "add" => Ok(Command::Insert {
            value: decode_value(rest)?,
        }),
        "3" | "delete" | "del" => Ok(Command::Delete {
            value: decode_value(rest)?,
        }),
        "random" | "rand" => Ok(Command::InsertRandom {
            count: decode_count(rest)?,
        }),
        "load" | "read" => Ok(Command::Load {
            path: decode_path(rest)?,
        }),
        "d" | "size" => no_argument(Command::Size, &keyword, rest),
        "x" | "freq" | "frequency" => no_argument(Command::Frequency, &keyword, rest),
        "y" | "report" | "all" => no_argument(Command::Report, &keyword, rest),
        "z" | "save" => Ok(Command::Save {
            path: if rest.is_empty() {
                None
            } else {
                Some(PathBuf::from(rest))
            },
        }),
        "show" | "list" => no_argument(Command::Show, &keyword, rest),
        "clear" => no_argument(Command::Clear, &keyword, rest),
        "help" | "?" => no_argument(Command::Help, &keyword, rest),
        "stat" => Ok(Command::Stat {
            stat: decode_stat(rest)?,
        }),
        _ => {
            let stat = single_letter(&keyword)
                .and_then(StatKind::from_letter)
                .or_else(|| StatKind::from_keyword(&keyword));
            match stat {
                Some(stat) => no_argument(Command::Stat { stat }, &keyword, rest),
                None => Err(StatsError::Command(format!(
                    "unknown command: {} (type 'help')",
                    keyword
                ))),
            }
        }
    }
}

/// Canonical text form of a command; decodes back to the same command
pub fn encode_command(command: &Command) -> String {
    match command {
        Command::Insert { value } => format!("insert {}", value),
        Command::InsertRandom { count } => format!("random {}", count),
        Command::Load { path } => format!("load {}", path.display()),
        Command::Delete { value } => format!("delete {}", value),
        Command::SetKind { kind } => format!("kind {}", kind.label()),
        Command::Size => "size".to_string(),
        Command::Stat { stat } => format!("stat {}", stat.keyword()),
        Command::Frequency => "freq".to_string(),
        Command::Report => "report".to_string(),
        Command::Save { path: Some(path) } => format!("save {}", path.display()),
        Command::Save { path: None } => "save".to_string(),
        Command::Show => "show".to_string(),
        Command::Clear => "clear".to_string(),
        Command::Help => "help".to_string(),
        Command::Quit => "quit".to_string(),
    }
}

// =============================================================================
// Argument Decoding
// =============================================================================

/// Parse a finite number
pub fn decode_value(arg: &str) -> Result<f64> {
    if arg.is_empty() {
        return Err(StatsError::Command("missing number".to_string()));
    }
    match arg.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(StatsError::Command(format!(
            "number must be finite: {}",
            arg
        ))),
        Err(_) => Err(StatsError::Command(format!("invalid number: {}", arg))),
    }
}

fn decode_count(arg: &str) -> Result<usize> {
    arg.parse::<usize>()
        .map_err(|_| StatsError::Command(format!("invalid count: {:?}", arg)))
}

fn decode_kind(arg: &str) -> Result<DatasetKind> {
    match arg.to_ascii_lowercase().as_str() {
        "s" | "sample" => Ok(DatasetKind::Sample),
        "p" | "population" => Ok(DatasetKind::Population),
        other => Err(StatsError::Command(format!(
            "dataset kind must be S (sample) or P (population), got {:?}",
            other
        ))),
    }
}

fn decode_path(arg: &str) -> Result<PathBuf> {
    if arg.is_empty() {
        return Err(StatsError::Command("missing file path".to_string()));
    }
    Ok(PathBuf::from(arg))
}

fn decode_stat(arg: &str) -> Result<StatKind> {
    single_letter(arg)
        .and_then(StatKind::from_letter)
        .or_else(|| StatKind::from_keyword(arg))
        .ok_or_else(|| StatsError::Command(format!("unknown statistic: {:?}", arg)))
}

fn no_argument(command: Command, keyword: &str, rest: &str) -> Result<Command> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(StatsError::Command(format!(
            "{} takes no argument, got {:?}",
            keyword, rest
        )))
    }
}

fn single_letter(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}
