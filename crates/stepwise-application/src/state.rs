//! Application state and its transition function.
//!
//! All UI state lives in one `AppState` value. The only way to change it is
//! `reduce`, which takes the previous state and an `Action` and returns the
//! next state.

use std::collections::BTreeSet;
use std::sync::Arc;

use stepwise_core::guide::GuideSection;
use stepwise_core::methodology::{Methodology, MethodologyCatalog, StepNumber};
use stepwise_core::session::{SaveOutcome, SessionStore};

use crate::action::Action;
use crate::tab::Tab;

/// Expansion key for a step in the browser, e.g. `"5-whys-2"`.
pub fn step_key(methodology_id: &str, step: StepNumber) -> String {
    format!("{}-{}", methodology_id, step)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    active_tab: Tab,
    /// Methodology shown in the browser; independent of the current session's.
    selected_methodology: String,
    expanded_steps: BTreeSet<String>,
    expanded_sections: BTreeSet<GuideSection>,
    store: SessionStore,
    /// Result of the most recent `SaveSession`; `None` if it saved nothing.
    last_save: Option<SaveOutcome>,
}

impl AppState {
    /// Creates the startup state, browsing `initial_methodology`.
    ///
    /// An identifier the catalog does not know selects the catalog default.
    pub fn new(catalog: Arc<MethodologyCatalog>, initial_methodology: &str) -> Self {
        let selected_methodology = catalog.lookup(initial_methodology).id.clone();
        Self {
            active_tab: Tab::Guide,
            selected_methodology,
            expanded_steps: BTreeSet::new(),
            expanded_sections: BTreeSet::new(),
            store: SessionStore::new(catalog),
            last_save: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_methodology_id(&self) -> &str {
        &self.selected_methodology
    }

    pub fn selected_methodology(&self) -> &Methodology {
        self.store.catalog().lookup(&self.selected_methodology)
    }

    pub fn catalog(&self) -> &MethodologyCatalog {
        self.store.catalog()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Whether `step` of the browsed methodology is expanded.
    pub fn is_step_expanded(&self, step: StepNumber) -> bool {
        self.expanded_steps
            .contains(&step_key(&self.selected_methodology, step))
    }

    pub fn expanded_step_keys(&self) -> &BTreeSet<String> {
        &self.expanded_steps
    }

    pub fn is_section_expanded(&self, section: GuideSection) -> bool {
        self.expanded_sections.contains(&section)
    }

    pub fn last_save(&self) -> Option<SaveOutcome> {
        self.last_save
    }
}

/// Pure transition: returns the state that follows `state` after `action`.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    apply(&mut state, action);
    state
}

/// In-place form of `reduce`, used by `AppController` to avoid moving the state.
pub(crate) fn apply(state: &mut AppState, action: &Action) {
    match action {
        Action::SwitchTab(tab) => switch_tab(state, *tab),
        Action::SelectMethodology(id) => {
            if !state.catalog().contains(id) {
                tracing::warn!("select_methodology ignored unknown id '{}'", id);
                return;
            }
            state.selected_methodology = id.clone();
            state.expanded_steps.clear();
        }
        Action::ToggleStepExpanded(step) => {
            let key = step_key(&state.selected_methodology, *step);
            toggle(&mut state.expanded_steps, key);
        }
        Action::ToggleSection(section) => toggle(&mut state.expanded_sections, *section),
        Action::StartSession => {
            let methodology = state.selected_methodology.clone();
            state.store.create(&methodology);
            switch_tab(state, Tab::Session);
        }
        Action::UpdateSession(update) => state.store.update(update.clone()),
        Action::SetStepNote { step, note } => state.store.set_step_note(*step, note.clone()),
        Action::ToggleStepCompleted(step) => state.store.toggle_step(*step),
        Action::AddActionItem { step, text } => {
            state.store.add_action_item(*step, text);
        }
        Action::ToggleActionItem { step, item_id } => {
            state.store.toggle_action_item(*step, item_id)
        }
        Action::DeleteActionItem { step, item_id } => {
            state.store.delete_action_item(*step, item_id)
        }
        Action::SaveSession => state.last_save = state.store.save(),
        Action::OpenSaved(session_id) => {
            if state.store.resume(session_id) {
                switch_tab(state, Tab::Session);
            }
        }
    }
}

fn switch_tab(state: &mut AppState, tab: Tab) {
    // Step expansion resets whenever the browser regains focus.
    if tab == Tab::Guide && state.active_tab != Tab::Guide {
        state.expanded_steps.clear();
    }
    state.active_tab = tab;
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, key: T) {
    if set.contains(&key) {
        set.remove(&key);
    } else {
        set.insert(key);
    }
}
