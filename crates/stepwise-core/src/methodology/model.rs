//! Methodology domain model.
//!
//! Methodologies are static reference content: they are built once at
//! startup and never mutated afterwards.

use serde::Serialize;

/// A 1-based step number, unique within its methodology.
pub type StepNumber = u32;

/// One stage of a methodology, carrying explanatory text and guiding questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Sequence number (1-based).
    pub number: StepNumber,
    /// Short title shown in headers (e.g. "Ask Questions!").
    pub title: String,
    /// One-line summary of the step.
    pub description: String,
    /// Longer body text explaining the step.
    pub content: String,
    /// Guiding questions, in display order.
    pub prompts: Vec<String>,
}

impl Step {
    pub fn new(
        number: StepNumber,
        title: &str,
        description: &str,
        content: &str,
        prompts: &[&str],
    ) -> Self {
        Self {
            number,
            title: title.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            prompts: prompts.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Header label in the form `#1 – Ask Questions!`.
    pub fn heading(&self) -> String {
        format!("#{} – {}", self.number, self.title)
    }
}

/// A named, ordered sequence of problem-solving steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Methodology {
    pub id: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<Step>,
}

impl Methodology {
    pub fn new(id: &str, name: &str, description: &str, steps: Vec<Step>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            steps,
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, number: StepNumber) -> Option<&Step> {
        self.steps.iter().find(|s| s.number == number)
    }

    /// Returns true if `number` names one of this methodology's steps.
    pub fn has_step(&self, number: StepNumber) -> bool {
        self.step(number).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Methodology {
        Methodology::new(
            "sample",
            "Sample",
            "Two steps",
            vec![
                Step::new(1, "First", "d1", "c1", &["q1", "q2"]),
                Step::new(2, "Second", "d2", "c2", &[]),
            ],
        )
    }

    #[test]
    fn test_step_lookup() {
        let m = sample();
        assert_eq!(m.step_count(), 2);
        assert_eq!(m.step(2).map(|s| s.title.as_str()), Some("Second"));
        assert!(m.has_step(1));
        assert!(!m.has_step(0));
        assert!(!m.has_step(3));
    }

    #[test]
    fn test_heading() {
        let m = sample();
        assert_eq!(m.steps[0].heading(), "#1 – First");
        assert_eq!(m.steps[0].prompts, vec!["q1".to_string(), "q2".to_string()]);
    }
}
