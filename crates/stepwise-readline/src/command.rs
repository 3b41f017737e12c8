//! Parsing of REPL input lines into commands.

use std::str::FromStr;

use stepwise_application::Tab;
use stepwise_core::StepNumber;
use stepwise_core::guide::GuideSection;
use thiserror::Error;

/// Slash commands offered for completion, in help order.
pub const COMMANDS: &[&str] = &[
    "/guide",
    "/session",
    "/history",
    "/methodologies",
    "/select",
    "/expand",
    "/section",
    "/new",
    "/title",
    "/desc",
    "/note",
    "/done",
    "/add",
    "/check",
    "/rm",
    "/save",
    "/open",
    "/show",
    "/help",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Re-render the active tab.
    Show,
    Tab(Tab),
    Methodologies,
    Select(String),
    Expand(StepNumber),
    Section(GuideSection),
    New,
    Title(String),
    Description(String),
    Note { step: StepNumber, text: String },
    Done(StepNumber),
    Add { step: StepNumber, text: String },
    /// Toggle the 1-based `item` of `step`.
    Check { step: StepNumber, item: usize },
    Remove { step: StepNumber, item: usize },
    Save,
    /// Resume the 1-based history entry.
    Open(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type /help for a list of commands.")]
    Unknown(String),

    #[error("{command} expects {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: '{value}' is not a positive number")]
    InvalidNumber { command: &'static str, value: String },

    #[error("Unknown section '{0}' (expected pitfalls, rca or ai)")]
    InvalidSection(String),
}

/// Parses one non-empty, trimmed input line.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let (head, rest) = split_word(line);

    match head {
        "quit" | "exit" | "/quit" | "/exit" => Ok(Command::Quit),
        "/help" | "help" | "?" => Ok(Command::Help),
        "/show" => Ok(Command::Show),
        "/guide" => Ok(Command::Tab(Tab::Guide)),
        "/session" => Ok(Command::Tab(Tab::Session)),
        "/history" => Ok(Command::Tab(Tab::History)),
        "/methodologies" => Ok(Command::Methodologies),
        "/select" => {
            let id = required(rest, "/select", "a methodology id")?;
            Ok(Command::Select(id.to_string()))
        }
        "/expand" => Ok(Command::Expand(number(rest, "/expand")?)),
        "/section" => {
            let key = required(rest, "/section", "pitfalls, rca or ai")?;
            GuideSection::from_str(key)
                .map(Command::Section)
                .map_err(|_| CommandError::InvalidSection(key.to_string()))
        }
        "/new" => Ok(Command::New),
        // Title and description may legitimately be cleared.
        "/title" => Ok(Command::Title(rest.to_string())),
        "/desc" => Ok(Command::Description(rest.to_string())),
        "/note" => {
            let (step, text) = split_word(rest);
            Ok(Command::Note {
                step: number(step, "/note")?,
                text: text.to_string(),
            })
        }
        "/done" => Ok(Command::Done(number(rest, "/done")?)),
        "/add" => {
            let (step, text) = split_word(rest);
            Ok(Command::Add {
                step: number(step, "/add")?,
                text: text.to_string(),
            })
        }
        "/check" => {
            let (step, item) = split_word(rest);
            Ok(Command::Check {
                step: number(step, "/check")?,
                item: index(item, "/check")?,
            })
        }
        "/rm" => {
            let (step, item) = split_word(rest);
            Ok(Command::Remove {
                step: number(step, "/rm")?,
                item: index(item, "/rm")?,
            })
        }
        "/save" => Ok(Command::Save),
        "/open" => Ok(Command::Open(index(rest, "/open")?)),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

fn required<'a>(
    value: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(value)
    }
}

fn number(value: &str, command: &'static str) -> Result<StepNumber, CommandError> {
    let value = required(value, command, "a step number")?;
    match value.parse::<StepNumber>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidNumber {
            command,
            value: value.to_string(),
        }),
    }
}

fn index(value: &str, command: &'static str) -> Result<usize, CommandError> {
    let value = required(value, command, "an item number")?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidNumber {
            command,
            value: value.to_string(),
        }),
    }
}
