//! The interactive loop: reads lines, turns them into actions, prints views.

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use stepwise_application::{Action, AppController, AppState, view};
use stepwise_core::StepNumber;
use stepwise_core::session::{SaveOutcome, SessionUpdate};

use crate::command::{self, Command};
use crate::helper::CliHelper;
use crate::render;

/// What the loop should do after handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

const NO_SESSION: &str = "No active session. Use /new to start one.";

/// Handles one trimmed, non-empty input line against the controller.
pub fn handle_line(app: &mut AppController, line: &str) -> Flow {
    let command = match command::parse(line) {
        Ok(command) => command,
        Err(err) => return Flow::Continue(err.to_string().red().to_string()),
    };

    let action = match command {
        Command::Quit => return Flow::Quit,
        Command::Help => return Flow::Continue(render::help()),
        Command::Show => return Flow::Continue(render::active_tab(app.state())),
        Command::Methodologies => {
            let state = app.state();
            return Flow::Continue(render::methodologies(
                state.catalog(),
                state.selected_methodology_id(),
            ));
        }
        Command::Tab(tab) => Action::SwitchTab(tab),
        Command::Select(id) => {
            if !app.state().catalog().contains(&id) {
                return notice(format!("Unknown methodology '{}'. Try /methodologies.", id));
            }
            Action::SelectMethodology(id)
        }
        Command::Expand(step) => Action::ToggleStepExpanded(step),
        Command::Section(section) => Action::ToggleSection(section),
        Command::New => Action::StartSession,
        Command::Title(title) => Action::UpdateSession(SessionUpdate::title(title)),
        Command::Description(text) => {
            Action::UpdateSession(SessionUpdate::description(text))
        }
        Command::Note { step, text } => Action::SetStepNote { step, note: text },
        Command::Done(step) => Action::ToggleStepCompleted(step),
        Command::Add { step, text } => Action::AddActionItem { step, text },
        Command::Check { step, item } => match item_id(app.state(), step, item) {
            Ok(item_id) => Action::ToggleActionItem { step, item_id },
            Err(message) => return notice(message),
        },
        Command::Remove { step, item } => match item_id(app.state(), step, item) {
            Ok(item_id) => Action::DeleteActionItem { step, item_id },
            Err(message) => return notice(message),
        },
        Command::Save => Action::SaveSession,
        Command::Open(index) => match app.state().store().history().get(index - 1) {
            Some(session) => Action::OpenSaved(session.id.clone()),
            None => return notice(format!("No saved session #{}.", index)),
        },
    };

    let is_navigation = matches!(
        action,
        Action::SwitchTab(_)
            | Action::SelectMethodology(_)
            | Action::ToggleStepExpanded(_)
            | Action::ToggleSection(_)
            | Action::StartSession
            | Action::OpenSaved(_)
    );
    let is_save = action == Action::SaveSession;

    app.dispatch(action);

    let state = app.state();
    if is_navigation {
        return Flow::Continue(render::active_tab(state));
    }
    let Some(session_view) = view::session(state) else {
        return notice(NO_SESSION.to_string());
    };

    let status = render::progress_line(&session_view);
    if is_save {
        let message = match state.last_save() {
            Some(SaveOutcome::Replaced) => "Updated saved session.",
            _ => "Saved to history.",
        };
        return Flow::Continue(format!("{} {}", message.green(), status.bright_black()));
    }
    Flow::Continue(status.bright_black().to_string())
}

fn notice(message: String) -> Flow {
    Flow::Continue(message.bright_black().to_string())
}

/// Maps a 1-based item number shown in the session view to its identifier.
fn item_id(state: &AppState, step: StepNumber, item: usize) -> Result<String, String> {
    let session = state.store().current().ok_or_else(|| NO_SESSION.to_string())?;
    session
        .items(step)
        .get(item - 1)
        .map(|found| found.id.clone())
        .ok_or_else(|| format!("Step {} has no action item #{}.", step, item))
}

fn prompt(state: &AppState) -> String {
    format!("stepwise [{}]> ", state.active_tab())
}

/// Runs the REPL until the user quits or input ends.
pub fn run(mut app: AppController) -> Result<()> {
    let helper = CliHelper::new(app.state().catalog().ids());
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", render::banner());
    println!();
    println!("{}", render::active_tab(app.state()));

    loop {
        match rl.readline(&prompt(app.state())) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match handle_line(&mut app, trimmed) {
                    Flow::Continue(output) => println!("{}", output),
                    Flow::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!("readline failed: {:?}", err);
                return Err(err.into());
            }
        }
    }

    tracing::info!("Session ended after {} actions", app.dispatched());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepwise_application::Tab;
    use stepwise_core::methodology::MethodologyCatalog;

    fn app() -> AppController {
        colored::control::set_override(false);
        AppController::new(MethodologyCatalog::builtin(), "4-step")
    }

    fn output(app: &mut AppController, line: &str) -> String {
        match handle_line(app, line) {
            Flow::Continue(text) => text,
            Flow::Quit => panic!("unexpected quit on {line}"),
        }
    }

    #[test]
    fn test_quit() {
        assert_eq!(handle_line(&mut app(), "quit"), Flow::Quit);
    }

    #[test]
    fn test_parse_errors_are_reported_not_fatal() {
        let mut app = app();
        assert!(output(&mut app, "/bogus").contains("Unknown command"));
        assert_eq!(app.dispatched(), 0);
    }

    #[test]
    fn test_edit_without_session_shows_notice() {
        let mut app = app();
        assert_eq!(output(&mut app, "/done 1"), NO_SESSION);
        assert_eq!(output(&mut app, "/check 1 1"), NO_SESSION);
    }

    #[test]
    fn test_full_walkthrough() {
        let mut app = app();
        output(&mut app, "/select 5-whys");
        let text = output(&mut app, "/new");
        assert!(text.contains("[5 Whys]"));
        assert_eq!(app.state().active_tab(), Tab::Session);

        output(&mut app, "/title Checkout errors");
        assert_eq!(
            output(&mut app, "/done 1"),
            "Progress: 1/5 steps completed (20%)"
        );
        output(&mut app, "/done 2");
        output(&mut app, "/add 2 Fix config");
        output(&mut app, "/check 2 1");

        let item = &app.state().store().current().unwrap().items(2)[0];
        assert_eq!(item.text, "Fix config");
        assert!(item.completed);

        assert!(output(&mut app, "/save").starts_with("Saved to history."));
        assert!(output(&mut app, "/save").starts_with("Updated saved session."));

        let history = output(&mut app, "/history");
        assert!(history.contains("1. Checkout errors [5 Whys]"));
        assert!(history.contains("2/5 steps"));
    }

    #[test]
    fn test_bad_references_are_notices() {
        let mut app = app();
        output(&mut app, "/new");
        assert!(output(&mut app, "/rm 1 3").contains("no action item #3"));
        assert!(output(&mut app, "/open 1").contains("No saved session #1"));
        assert!(output(&mut app, "/select lean").contains("Unknown methodology 'lean'"));
    }

    #[test]
    fn test_open_resumes_saved_session() {
        let mut app = app();
        output(&mut app, "/new");
        output(&mut app, "/title first");
        output(&mut app, "/save");
        output(&mut app, "/new");
        output(&mut app, "/open 1");

        let current = app.state().store().current().unwrap();
        assert_eq!(current.title, "first");
        assert_eq!(app.state().active_tab(), Tab::Session);
    }

    #[test]
    fn test_prompt_names_tab() {
        let app = app();
        assert_eq!(prompt(app.state()), "stepwise [guide]> ");
    }
}
