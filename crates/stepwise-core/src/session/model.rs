//! Session domain model.
//!
//! A `Session` is one user's application of a single methodology to a single
//! problem. It is plain data; the mutation rules live in `SessionStore`.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::methodology::StepNumber;

/// A user-entered follow-up task attached to one step of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl ActionItem {
    /// Creates an open item with a fresh identifier. `text` is stored as given.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }
}

/// A problem-solving session.
///
/// Notes and action items are keyed by step number; iteration order for
/// display is always driven by the methodology's step sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Identifier of the methodology this session follows.
    pub methodology: String,
    pub created_at: DateTime<Utc>,
    pub completed_steps: BTreeSet<StepNumber>,
    pub step_notes: BTreeMap<StepNumber, String>,
    pub action_items: BTreeMap<StepNumber, Vec<ActionItem>>,
}

impl Session {
    /// Creates an empty session for `methodology` stamped with the current time.
    pub fn new(methodology: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            description: String::new(),
            methodology: methodology.into(),
            created_at: Utc::now(),
            completed_steps: BTreeSet::new(),
            step_notes: BTreeMap::new(),
            action_items: BTreeMap::new(),
        }
    }

    pub fn is_step_completed(&self, step: StepNumber) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Note text for `step`, empty when none was written.
    pub fn note(&self, step: StepNumber) -> &str {
        self.step_notes.get(&step).map(String::as_str).unwrap_or("")
    }

    /// Action items for `step`, empty when none were added.
    pub fn items(&self, step: StepNumber) -> &[ActionItem] {
        self.action_items
            .get(&step)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn find_item(&self, step: StepNumber, item_id: &str) -> Option<&ActionItem> {
        self.items(step).iter().find(|item| item.id == item_id)
    }

    /// Count of open (not completed) action items across all steps.
    pub fn open_item_count(&self) -> usize {
        self.action_items
            .values()
            .flatten()
            .filter(|item| !item.completed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new("pdca");
        assert!(!session.id.is_empty());
        assert!(session.title.is_empty());
        assert!(session.description.is_empty());
        assert_eq!(session.methodology, "pdca");
        assert!(session.completed_steps.is_empty());
        assert!(session.step_notes.is_empty());
        assert!(session.action_items.is_empty());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(Session::new("pdca").id, Session::new("pdca").id);
        assert_ne!(ActionItem::new("a").id, ActionItem::new("a").id);
    }

    #[test]
    fn test_missing_step_accessors_are_empty() {
        let session = Session::new("pdca");
        assert_eq!(session.note(3), "");
        assert!(session.items(3).is_empty());
        assert!(session.find_item(3, "nope").is_none());
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let mut session = Session::new("5-whys");
        session.completed_steps.insert(2);
        session.completed_steps.insert(1);

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["completedSteps"], serde_json::json!([1, 2]));
        assert!(json.get("stepNotes").is_some());
        assert!(json.get("actionItems").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_open_item_count() {
        let mut session = Session::new("pdca");
        let mut done = ActionItem::new("done");
        done.completed = true;
        session
            .action_items
            .insert(1, vec![ActionItem::new("open"), done]);
        session.action_items.insert(2, vec![ActionItem::new("open too")]);
        assert_eq!(session.open_item_count(), 2);
    }
}
