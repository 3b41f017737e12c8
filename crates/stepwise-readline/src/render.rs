//! Text rendering of the application views.
//!
//! Every function returns a `String` so output can be tested without a
//! terminal; colours come from `colored` and honour its global override.

use std::fmt::Write;

use colored::Colorize;
use stepwise_application::view::{self, GuideView, SessionSummary, SessionView};
use stepwise_application::{AppState, Tab};
use stepwise_core::guide::GuideSection;
use stepwise_core::methodology::{MethodologyCatalog, Step};

pub fn banner() -> String {
    format!(
        "{}\n{}",
        "=== Problem-Solving Methodologies ===".bright_magenta().bold(),
        "Type /help for commands, or 'quit' to exit.".bright_black()
    )
}

pub fn help() -> String {
    let lines = [
        ("/guide /session /history", "switch tab"),
        ("/methodologies", "list methodologies"),
        ("/select <id>", "browse a methodology"),
        ("/expand <step>", "expand or collapse a step in the browser"),
        ("/section <pitfalls|rca|ai>", "expand or collapse a reference section"),
        ("/new", "start a new session with the browsed methodology"),
        ("/title <text>", "set the problem title"),
        ("/desc <text>", "set the problem description"),
        ("/note <step> <text>", "replace the note for a step"),
        ("/done <step>", "mark a step complete (again to undo)"),
        ("/add <step> <text>", "add an action item"),
        ("/check <step> <item#>", "toggle an action item"),
        ("/rm <step> <item#>", "delete an action item"),
        ("/save", "save the session to history"),
        ("/open <history#>", "resume a saved session"),
        ("/show", "show the current tab again"),
        ("quit", "exit"),
    ];

    let mut out = String::new();
    for (usage, about) in lines {
        let _ = writeln!(out, "  {:<28} {}", usage.bright_cyan(), about);
    }
    out
}

fn tab_bar(active: Tab) -> String {
    [Tab::Guide, Tab::Session, Tab::History]
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label()).bold().to_string()
            } else {
                format!(" {} ", tab.label()).bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders whichever tab is active.
pub fn active_tab(state: &AppState) -> String {
    let body = match state.active_tab() {
        Tab::Guide => guide(&view::guide(state)),
        Tab::Session => match view::session(state) {
            Some(session_view) => session(&session_view),
            None => no_session(state),
        },
        Tab::History => history(&view::history(state)),
    };
    format!("{}\n\n{}", tab_bar(state.active_tab()), body)
}

pub fn methodologies(catalog: &MethodologyCatalog, selected: &str) -> String {
    let mut out = String::new();
    for methodology in catalog.iter() {
        let marker = if methodology.id == selected { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<18} {}  {}",
            marker,
            methodology.id.bright_cyan(),
            methodology.name.bold(),
            methodology.description.bright_black()
        );
    }
    out
}

fn prompts(out: &mut String, step: &Step) {
    let _ = writeln!(out, "    {}", "Key questions:".bold());
    for prompt in &step.prompts {
        let _ = writeln!(out, "      • {}", prompt);
    }
}

pub fn guide(view: &GuideView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        view.methodology.name.bold(),
        format!("({})", view.methodology.id).bright_black()
    );
    let _ = writeln!(out, "{}\n", view.methodology.description);

    for (step, expanded) in &view.steps {
        let arrow = if *expanded { "▾" } else { "▸" };
        let _ = writeln!(out, "{} {}", arrow, step.heading().bold());
        let _ = writeln!(out, "    {}", step.description.bright_black());
        if *expanded {
            let _ = writeln!(out, "    {}", step.content);
            prompts(&mut out, step);
        }
    }

    let _ = writeln!(
        out,
        "\n{}",
        format!("/new starts a session with {}", view.methodology.name).green()
    );

    for (section, expanded) in &view.sections {
        let arrow = if *expanded { "▾" } else { "▸" };
        let _ = writeln!(
            out,
            "{} {} {}",
            arrow,
            section.title().bold(),
            format!("(/section {})", section).bright_black()
        );
        if *expanded {
            guide_section(&mut out, *section);
        }
    }
    out
}

fn guide_section(out: &mut String, section: GuideSection) {
    if let Some(subtitle) = section.subtitle() {
        let _ = writeln!(out, "    {}", subtitle.bright_black());
    }
    if let Some(intro) = section.intro() {
        let _ = writeln!(out, "    {}", intro);
    }
    for group in section.groups() {
        let _ = writeln!(out, "    {}", group.heading.underline());
        for entry in group.entries {
            let _ = writeln!(
                out,
                "      {} {}",
                format!("[{}]", entry.label).yellow(),
                entry.text
            );
        }
    }
    let checklist = section.checklist();
    if !checklist.is_empty() {
        let _ = writeln!(out, "    {}", "Quality checklist".underline());
        for line in checklist {
            let _ = writeln!(out, "      ✓ {}", line);
        }
    }
    if let Some(closing) = section.closing() {
        let _ = writeln!(out, "    {}", closing.italic());
    }
}

fn no_session(state: &AppState) -> String {
    format!(
        "{}\n{}",
        "Start a new problem-solving session to begin working through a methodology."
            .bright_black(),
        format!("/new starts one with {}", state.selected_methodology().name).green()
    )
}

pub fn progress_line(view: &SessionView<'_>) -> String {
    format!(
        "Progress: {}/{} steps completed ({:.0}%)",
        view.completed, view.total, view.progress
    )
}

pub fn session(view: &SessionView<'_>) -> String {
    let session = view.session;
    let mut out = String::new();

    let _ = writeln!(out, "{}", format!("[{}]", view.methodology.name).bright_cyan());
    if view.methodology_fallback {
        let _ = writeln!(
            out,
            "{}",
            format!(
                "Warning: methodology '{}' is not available; showing {} instead.",
                session.methodology, view.methodology.name
            )
            .yellow()
        );
    }
    let title = if session.title.is_empty() {
        "Problem title... (/title)".bright_black().to_string()
    } else {
        session.title.bold().to_string()
    };
    let _ = writeln!(out, "{}", title);
    if session.description.is_empty() {
        let _ = writeln!(out, "{}", "Describe the problem... (/desc)".bright_black());
    } else {
        let _ = writeln!(out, "{}", session.description);
    }
    let _ = writeln!(out, "{}\n", progress_line(view));

    for step in &view.methodology.steps {
        let check = if session.is_step_completed(step.number) {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };
        let _ = writeln!(out, "{} {}", check, step.heading().bold());
        let _ = writeln!(out, "    {}", step.description.bright_black());
        let _ = writeln!(out, "    {}", step.content);
        prompts(&mut out, step);

        let note = session.note(step.number);
        if !note.is_empty() {
            let _ = writeln!(out, "    {} {}", "Notes:".bold(), note);
        }

        let items = session.items(step.number);
        if !items.is_empty() {
            let _ = writeln!(out, "    {}", "Action items:".bold());
            for (index, item) in items.iter().enumerate() {
                let text = if item.completed {
                    item.text.strikethrough().bright_black().to_string()
                } else {
                    item.text.clone()
                };
                let mark = if item.completed { "x" } else { " " };
                let _ = writeln!(out, "      {}. [{}] {}", index + 1, mark, text);
            }
        }
    }
    out
}

pub fn history(rows: &[SessionSummary]) -> String {
    if rows.is_empty() {
        return "Your completed and saved problem-solving sessions will appear here."
            .bright_black()
            .to_string();
    }

    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let methodology = row.methodology_name.as_deref().unwrap_or("Unknown methodology");
        let _ = writeln!(
            out,
            "{}. {} {}",
            index + 1,
            row.title.bold(),
            format!("[{}]", methodology).bright_cyan()
        );
        let _ = write!(
            out,
            "   {}  {}/{} steps  {}",
            row.description.bright_black(),
            row.completed,
            row.total,
            row.created_on.format("%Y-%m-%d")
        );
        if row.open_items > 0 {
            let _ = write!(out, "  {}", format!("{} open items", row.open_items).yellow());
        }
        out.push('\n');
    }
    let _ = write!(out, "{}", "/open <n> resumes a session".bright_black());
    out
}
