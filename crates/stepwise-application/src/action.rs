use stepwise_core::StepNumber;
use stepwise_core::guide::GuideSection;
use stepwise_core::session::SessionUpdate;

use crate::tab::Tab;

/// A discrete user event. Actions are applied to `AppState` in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchTab(Tab),
    /// Change the methodology shown in the browser.
    SelectMethodology(String),
    /// Expand or collapse a step of the browsed methodology.
    ToggleStepExpanded(StepNumber),
    ToggleSection(GuideSection),
    /// Start a new session with the browsed methodology.
    StartSession,
    UpdateSession(SessionUpdate),
    SetStepNote {
        step: StepNumber,
        note: String,
    },
    ToggleStepCompleted(StepNumber),
    AddActionItem {
        step: StepNumber,
        text: String,
    },
    ToggleActionItem {
        step: StepNumber,
        item_id: String,
    },
    DeleteActionItem {
        step: StepNumber,
        item_id: String,
    },
    SaveSession,
    /// Resume editing a saved session.
    OpenSaved(String),
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SwitchTab(_) => "switch_tab",
            Action::SelectMethodology(_) => "select_methodology",
            Action::ToggleStepExpanded(_) => "toggle_step_expanded",
            Action::ToggleSection(_) => "toggle_section",
            Action::StartSession => "start_session",
            Action::UpdateSession(_) => "update_session",
            Action::SetStepNote { .. } => "set_step_note",
            Action::ToggleStepCompleted(_) => "toggle_step_completed",
            Action::AddActionItem { .. } => "add_action_item",
            Action::ToggleActionItem { .. } => "toggle_action_item",
            Action::DeleteActionItem { .. } => "delete_action_item",
            Action::SaveSession => "save_session",
            Action::OpenSaved(_) => "open_saved",
        }
    }
}
