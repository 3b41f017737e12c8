//! Read-only projections of `AppState` for rendering.

use chrono::NaiveDate;
use strum::IntoEnumIterator;

use stepwise_core::guide::GuideSection;
use stepwise_core::methodology::{Methodology, MethodologyCatalog, Step};
use stepwise_core::session::Session;

use crate::state::AppState;

pub const UNTITLED: &str = "Untitled Problem";
pub const NO_DESCRIPTION: &str = "No description";

/// One row of the history list.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `None` when the saved methodology is not in the catalog.
    pub methodology_name: Option<String>,
    pub completed: usize,
    pub total: usize,
    pub open_items: usize,
    pub created_on: NaiveDate,
}

impl SessionSummary {
    pub fn new(session: &Session, methodology: Option<&Methodology>) -> Self {
        Self {
            id: session.id.clone(),
            title: non_empty_or(&session.title, UNTITLED),
            description: non_empty_or(&session.description, NO_DESCRIPTION),
            methodology_name: methodology.map(|m| m.name.clone()),
            completed: session.completed_steps.len(),
            total: methodology.map(Methodology::step_count).unwrap_or(0),
            open_items: session.open_item_count(),
            created_on: session.created_at.date_naive(),
        }
    }
}

fn non_empty_or(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// History list in save order.
pub fn history(state: &AppState) -> Vec<SessionSummary> {
    let catalog = state.catalog();
    state
        .store()
        .history()
        .iter()
        .map(|session| SessionSummary::new(session, catalog.get(&session.methodology)))
        .collect()
}

/// The session tab: the current session against its resolved methodology.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView<'a> {
    pub session: &'a Session,
    pub methodology: &'a Methodology,
    /// True when the session's methodology is unknown and the default is shown instead.
    pub methodology_fallback: bool,
    pub completed: usize,
    pub total: usize,
    pub progress: f64,
}

impl<'a> SessionView<'a> {
    /// Projects `session` against the methodology `catalog` resolves for it.
    ///
    /// Counts and percentage always describe the displayed methodology, so a
    /// fallback session reports progress against the steps it shows.
    pub fn new(session: &'a Session, catalog: &'a MethodologyCatalog) -> Self {
        let resolved = catalog.resolve(&session.methodology);
        let methodology = resolved.methodology();
        let completed = session
            .completed_steps
            .iter()
            .filter(|step| methodology.has_step(**step))
            .count();
        let total = methodology.step_count();
        let progress = if total == 0 {
            0.0
        } else {
            (completed * 100) as f64 / total as f64
        };

        Self {
            session,
            methodology,
            methodology_fallback: resolved.is_fallback(),
            completed,
            total,
            progress,
        }
    }
}

pub fn session(state: &AppState) -> Option<SessionView<'_>> {
    let session = state.store().current()?;
    Some(SessionView::new(session, state.catalog()))
}

/// The browser tab: steps of the selected methodology with their expansion
/// state, followed by the reference sections.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideView<'a> {
    pub methodology: &'a Methodology,
    pub steps: Vec<(&'a Step, bool)>,
    pub sections: Vec<(GuideSection, bool)>,
}

pub fn guide(state: &AppState) -> GuideView<'_> {
    let methodology = state.selected_methodology();
    GuideView {
        methodology,
        steps: methodology
            .steps
            .iter()
            .map(|step| (step, state.is_step_expanded(step.number)))
            .collect(),
        sections: GuideSection::iter()
            .map(|section| (section, state.is_section_expanded(section)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::state::reduce;
    use stepwise_core::session::SessionUpdate;

    fn state() -> AppState {
        AppState::new(MethodologyCatalog::builtin(), "5-whys")
    }

    #[test]
    fn test_history_placeholders() {
        let state = [Action::StartSession, Action::SaveSession]
            .iter()
            .fold(state(), reduce);

        let rows = history(&state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, UNTITLED);
        assert_eq!(rows[0].description, NO_DESCRIPTION);
        assert_eq!(rows[0].methodology_name.as_deref(), Some("5 Whys"));
        assert_eq!((rows[0].completed, rows[0].total), (0, 5));
    }

    #[test]
    fn test_history_uses_saved_fields() {
        let state = [
            Action::StartSession,
            Action::UpdateSession(SessionUpdate::title("Disk full")),
            Action::ToggleStepCompleted(1),
            Action::SaveSession,
        ]
        .iter()
        .fold(state(), reduce);

        let row = &history(&state)[0];
        assert_eq!(row.title, "Disk full");
        assert_eq!(row.completed, 1);
    }

    #[test]
    fn test_summary_for_unknown_methodology() {
        let mut session = Session::new("retired");
        session.completed_steps.insert(1);
        let row = SessionSummary::new(&session, None);
        assert_eq!(row.methodology_name, None);
        assert_eq!((row.completed, row.total), (1, 0));
    }

    #[test]
    fn test_session_view_progress() {
        assert!(session(&state()).is_none());

        let state = [
            Action::StartSession,
            Action::ToggleStepCompleted(2),
            Action::ToggleStepCompleted(4),
        ]
        .iter()
        .fold(state(), reduce);

        let view = session(&state).unwrap();
        assert_eq!(view.methodology.id, "5-whys");
        assert!(!view.methodology_fallback);
        assert_eq!((view.completed, view.total), (2, 5));
        assert_eq!(view.progress, 40.0);
    }

    #[test]
    fn test_fallback_session_progress_matches_shown_steps() {
        let catalog = MethodologyCatalog::builtin();
        let mut session = Session::new("retired");
        session.completed_steps.extend([1, 2]);

        let view = SessionView::new(&session, &catalog);
        assert!(view.methodology_fallback);
        assert_eq!(view.methodology.id, "4-step");
        assert_eq!((view.completed, view.total), (2, 4));
        assert_eq!(view.progress, 50.0);
    }

    #[test]
    fn test_guide_view_reflects_expansion() {
        let state = [
            Action::ToggleStepExpanded(3),
            Action::ToggleSection(GuideSection::Ai),
        ]
        .iter()
        .fold(state(), reduce);

        let view = guide(&state);
        assert_eq!(view.methodology.id, "5-whys");
        let expanded: Vec<u32> = view
            .steps
            .iter()
            .filter(|(_, open)| *open)
            .map(|(step, _)| step.number)
            .collect();
        assert_eq!(expanded, vec![3]);
        assert!(view.sections.contains(&(GuideSection::Ai, true)));
        assert!(view.sections.contains(&(GuideSection::Pitfalls, false)));
    }
}
