use std::sync::Arc;

use super::model::{ActionItem, Session};
use crate::methodology::{MethodologyCatalog, StepNumber};

/// Field replacements for the current session. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub methodology: Option<String>,
}

impl SessionUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn methodology(methodology: impl Into<String>) -> Self {
        Self {
            methodology: Some(methodology.into()),
            ..Self::default()
        }
    }
}

/// What `SessionStore::save` did with the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new history entry was appended.
    Appended,
    /// An existing entry with the same id was replaced in place.
    Replaced,
}

/// In-memory store for the current session and the saved history.
///
/// `SessionStore` is responsible for:
/// - Creating new sessions and making them current
/// - Applying edits (fields, notes, completion, action items) to the current session
/// - Saving the current session into history and resuming saved ones
/// - Answering progress queries
///
/// Every edit made while no session is current is silently ignored, as are
/// edits addressed to a step number the session's methodology does not have.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    catalog: Arc<MethodologyCatalog>,
    current: Option<Session>,
    history: Vec<Session>,
}

impl SessionStore {
    pub fn new(catalog: Arc<MethodologyCatalog>) -> Self {
        Self {
            catalog,
            current: None,
            history: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &MethodologyCatalog {
        &self.catalog
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Saved sessions in the order they were first saved.
    pub fn history(&self) -> &[Session] {
        &self.history
    }

    pub fn find_saved(&self, session_id: &str) -> Option<&Session> {
        self.history.iter().find(|s| s.id == session_id)
    }

    /// Starts a new, empty session and makes it current.
    ///
    /// An identifier the catalog does not know is replaced with the catalog
    /// default, so a freshly created session always references a real methodology.
    pub fn create(&mut self, methodology_id: &str) -> &Session {
        let resolved = self.catalog.resolve(methodology_id);
        if resolved.is_fallback() {
            tracing::warn!(
                "Creating session with unknown methodology '{}', using '{}'",
                methodology_id,
                resolved.methodology().id
            );
        }

        let session = Session::new(resolved.methodology().id.clone());
        tracing::debug!(
            "Created session {} ({})",
            session.id,
            session.methodology
        );
        self.current.insert(session)
    }

    pub fn update(&mut self, update: SessionUpdate) {
        let Some(session) = self.current.as_mut() else {
            tracing::debug!("update ignored: no current session");
            return;
        };

        if let Some(title) = update.title {
            session.title = title;
        }
        if let Some(description) = update.description {
            session.description = description;
        }
        if let Some(methodology_id) = update.methodology {
            match self.catalog.get(&methodology_id) {
                Some(methodology) => {
                    session.methodology = methodology.id.clone();
                    // Drop per-step state the new methodology cannot address.
                    session
                        .completed_steps
                        .retain(|step| methodology.has_step(*step));
                    session
                        .step_notes
                        .retain(|step, _| methodology.has_step(*step));
                    session
                        .action_items
                        .retain(|step, _| methodology.has_step(*step));
                }
                None => {
                    tracing::warn!(
                        "update ignored unknown methodology '{}' for session {}",
                        methodology_id,
                        session.id
                    );
                }
            }
        }
    }

    pub fn set_step_note(&mut self, step: StepNumber, note: impl Into<String>) {
        if let Some(session) = self.current_at_step(step, "set_step_note") {
            session.step_notes.insert(step, note.into());
        }
    }

    /// Adds `step` to the completed set if absent, removes it if present.
    pub fn toggle_step(&mut self, step: StepNumber) {
        if let Some(session) = self.current_at_step(step, "toggle_step") {
            if !session.completed_steps.remove(&step) {
                session.completed_steps.insert(step);
            }
            tracing::debug!(
                "Step {} of session {} completed: {}",
                step,
                session.id,
                session.completed_steps.contains(&step)
            );
        }
    }

    /// Appends an action item with trimmed `text` to `step`.
    ///
    /// Returns the new item's identifier, or `None` when nothing was added
    /// (blank text, no current session, or an unknown step).
    pub fn add_action_item(&mut self, step: StepNumber, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("add_action_item ignored: blank text");
            return None;
        }

        let session = self.current_at_step(step, "add_action_item")?;
        let item = ActionItem::new(text);
        let id = item.id.clone();
        session.action_items.entry(step).or_default().push(item);
        Some(id)
    }

    pub fn toggle_action_item(&mut self, step: StepNumber, item_id: &str) {
        let Some(session) = self.current_at_step(step, "toggle_action_item") else {
            return;
        };

        let item = session
            .action_items
            .get_mut(&step)
            .and_then(|items| items.iter_mut().find(|item| item.id == item_id));
        match item {
            Some(item) => item.completed = !item.completed,
            None => tracing::debug!(
                "toggle_action_item: no item '{}' at step {}",
                item_id,
                step
            ),
        }
    }

    pub fn delete_action_item(&mut self, step: StepNumber, item_id: &str) {
        let Some(session) = self.current_at_step(step, "delete_action_item") else {
            return;
        };

        if let Some(items) = session.action_items.get_mut(&step) {
            let before = items.len();
            items.retain(|item| item.id != item_id);
            if items.len() == before {
                tracing::debug!(
                    "delete_action_item: no item '{}' at step {}",
                    item_id,
                    step
                );
            }
        }
    }

    /// Copies the current session into history.
    ///
    /// Replaces the entry with the same id in place, or appends. The current
    /// session stays current. Returns `None` when there is nothing to save.
    pub fn save(&mut self) -> Option<SaveOutcome> {
        let Some(session) = self.current.as_ref() else {
            tracing::debug!("save ignored: no current session");
            return None;
        };

        let outcome = match self.history.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => {
                *existing = session.clone();
                SaveOutcome::Replaced
            }
            None => {
                self.history.push(session.clone());
                SaveOutcome::Appended
            }
        };
        tracing::debug!("Saved session {} ({:?})", session.id, outcome);
        Some(outcome)
    }

    /// Makes a copy of the saved session `session_id` current.
    ///
    /// Returns false (and changes nothing) if no such session was saved.
    pub fn resume(&mut self, session_id: &str) -> bool {
        match self.find_saved(session_id) {
            Some(saved) => {
                self.current = Some(saved.clone());
                tracing::debug!("Resumed session {}", session_id);
                true
            }
            None => {
                tracing::debug!("resume ignored: unknown session '{}'", session_id);
                false
            }
        }
    }

    /// Percentage (0-100) of the session's methodology steps marked complete.
    ///
    /// Looks at the current session first, then history. Returns 0 if the
    /// session or its methodology cannot be resolved.
    pub fn progress(&self, session_id: &str) -> f64 {
        self.current
            .iter()
            .chain(self.history.iter())
            .find(|s| s.id == session_id)
            .map(|s| self.progress_of(s))
            .unwrap_or(0.0)
    }

    pub fn current_progress(&self) -> f64 {
        self.current
            .as_ref()
            .map(|s| self.progress_of(s))
            .unwrap_or(0.0)
    }

    pub fn progress_of(&self, session: &Session) -> f64 {
        let Some(methodology) = self.catalog.get(&session.methodology) else {
            return 0.0;
        };
        if methodology.steps.is_empty() {
            return 0.0;
        }

        let completed = session
            .completed_steps
            .iter()
            .filter(|step| methodology.has_step(**step))
            .count();
        (completed * 100) as f64 / methodology.step_count() as f64
    }

    /// The current session, if `step` is one of its methodology's steps.
    ///
    /// A session whose methodology is unknown is edited against the fallback
    /// methodology, since that is what gets displayed for it.
    fn current_at_step(&mut self, step: StepNumber, op: &str) -> Option<&mut Session> {
        let Some(session) = self.current.as_mut() else {
            tracing::debug!("{} ignored: no current session", op);
            return None;
        };

        if !self.catalog.lookup(&session.methodology).has_step(step) {
            tracing::debug!(
                "{} ignored: step {} not in methodology '{}'",
                op,
                step,
                session.methodology
            );
            return None;
        }
        Some(session)
    }
}
