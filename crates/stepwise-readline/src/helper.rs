use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use stepwise_core::guide::GuideSection;
use strum::IntoEnumIterator;

use crate::command::COMMANDS;

/// rustyline helper providing command completion, highlighting, and hints.
///
/// Besides the slash commands themselves it completes methodology ids after
/// `/select` and section keys after `/section`.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    methodology_ids: Vec<String>,
    section_keys: Vec<String>,
}

impl CliHelper {
    pub fn new<'a>(methodology_ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            methodology_ids: methodology_ids.into_iter().map(str::to_string).collect(),
            section_keys: GuideSection::iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Candidates for the word being typed, and where that word starts.
    fn candidates(&self, line: &str) -> (usize, Vec<&String>) {
        if let Some(arg) = line.strip_prefix("/select ") {
            let start = line.len() - arg.len();
            return (start, prefixed(&self.methodology_ids, arg));
        }
        if let Some(arg) = line.strip_prefix("/section ") {
            let start = line.len() - arg.len();
            return (start, prefixed(&self.section_keys, arg));
        }
        if line.starts_with('/') && !line.contains(' ') {
            return (0, prefixed(&self.commands, line));
        }
        (0, Vec::new())
    }
}

fn prefixed<'a>(options: &'a [String], typed: &str) -> Vec<&'a String> {
    options.iter().filter(|o| o.starts_with(typed)).collect()
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = self.candidates(&line[..pos]);
        let pairs = candidates
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, candidates) = self.candidates(line);
        let typed = &line[start..];
        candidates
            .into_iter()
            .find(|c| c.len() > typed.len())
            .map(|c| c[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CliHelper {
        CliHelper::new(["4-step", "5-whys", "pdca"])
    }

    #[test]
    fn test_command_candidates() {
        let helper = helper();
        let (start, found) = helper.candidates("/s");
        assert_eq!(start, 0);
        let found: Vec<&str> = found.iter().map(|s| s.as_str()).collect();
        assert_eq!(found, vec!["/session", "/select", "/section", "/save", "/show"]);
    }

    #[test]
    fn test_argument_candidates() {
        let helper = helper();
        let (start, found) = helper.candidates("/select 5");
        assert_eq!(start, "/select ".len());
        assert_eq!(found, vec!["5-whys"]);

        let (_, found) = helper.candidates("/section r");
        assert_eq!(found, vec!["rca"]);
    }

    #[test]
    fn test_every_section_is_offered() {
        let helper = helper();
        let (_, found) = helper.candidates("/section ");
        assert_eq!(found, vec!["pitfalls", "rca", "ai"]);
    }

    #[test]
    fn test_plain_text_has_no_candidates() {
        let helper = helper();
        let (_, found) = helper.candidates("hello");
        assert!(found.is_empty());
    }
}
