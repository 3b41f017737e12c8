//! Auxiliary reference sections shown alongside the methodology browser.
//!
//! These are collapsible panels with static advice that applies to every
//! methodology: common pitfalls, root cause analysis practice, and where AI
//! tooling fits into the process.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Identifies one collapsible reference section.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GuideSection {
    Pitfalls,
    Rca,
    Ai,
}

/// A labelled piece of advice (rendered as a badge plus text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideEntry {
    pub label: &'static str,
    pub text: &'static str,
}

/// A headed group of entries within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideGroup {
    pub heading: &'static str,
    pub entries: Vec<GuideEntry>,
}

const fn entry(label: &'static str, text: &'static str) -> GuideEntry {
    GuideEntry { label, text }
}

impl GuideSection {
    pub fn title(&self) -> &'static str {
        match self {
            GuideSection::Pitfalls => "Common Pitfalls",
            GuideSection::Rca => "Root Cause Analysis Best Practices",
            GuideSection::Ai => "Modern Addition: Where Does AI Fit In?",
        }
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        match self {
            GuideSection::Pitfalls => None,
            GuideSection::Rca => Some("Guidelines for conducting effective root cause analysis"),
            GuideSection::Ai => Some("Integrating AI tools into the problem-solving process"),
        }
    }

    pub fn intro(&self) -> Option<&'static str> {
        match self {
            GuideSection::Pitfalls => None,
            GuideSection::Rca => Some(
                "Root Cause Analysis (RCA) is a systematic approach to identifying the underlying causes of problems to prevent recurrence. Here's what makes an effective RCA:",
            ),
            GuideSection::Ai => Some(
                "AI can enhance any problem-solving methodology by providing additional insights and automation:",
            ),
        }
    }

    pub fn groups(&self) -> Vec<GuideGroup> {
        match self {
            GuideSection::Pitfalls => vec![GuideGroup {
                heading: "Watch out for",
                entries: vec![
                    entry(
                        "Going into Autopilot",
                        "Rushing to apply familiar solutions without properly understanding the current problem.",
                    ),
                    entry(
                        "Not Identifying the Root Cause",
                        "Fixing symptoms instead of addressing the underlying issue that caused the problem.",
                    ),
                ],
            }],
            GuideSection::Rca => vec![
                GuideGroup {
                    heading: "What Good RCA Should Include",
                    entries: vec![
                        entry(
                            "Timeline",
                            "Clear chronological sequence of events leading to the problem",
                        ),
                        entry(
                            "Evidence",
                            "Factual data, logs, measurements, and documentation rather than assumptions",
                        ),
                        entry(
                            "Multiple Causes",
                            "Recognition that most problems have multiple contributing factors",
                        ),
                        entry(
                            "Systemic View",
                            "Analysis of process, technology, and human factors involved",
                        ),
                        entry(
                            "Actionable Outcomes",
                            "Specific, measurable recommendations to prevent recurrence",
                        ),
                    ],
                },
                GuideGroup {
                    heading: "Common RCA Mistakes to Avoid",
                    entries: vec![
                        entry(
                            "Stopping at \"Human Error\"",
                            "Always dig deeper to understand why the error occurred",
                        ),
                        entry(
                            "Confirmation Bias",
                            "Looking only for evidence that supports preconceived notions",
                        ),
                        entry(
                            "Single Cause Fallacy",
                            "Assuming there's only one root cause when most problems are multifaceted",
                        ),
                    ],
                },
                GuideGroup {
                    heading: "How AI Can Enhance RCA",
                    entries: vec![
                        entry(
                            "Pattern Recognition",
                            "Analyze large volumes of log data to identify patterns and anomalies leading up to incidents",
                        ),
                        entry(
                            "Timeline Construction",
                            "Automatically correlate events across multiple systems to build comprehensive timelines",
                        ),
                        entry(
                            "Hypothesis Generation",
                            "Suggest potential causes based on similar historical incidents and current evidence",
                        ),
                        entry(
                            "Impact Analysis",
                            "Model the potential consequences of different root causes and proposed solutions",
                        ),
                        entry(
                            "Documentation",
                            "Generate comprehensive RCA reports with structured findings and recommendations",
                        ),
                    ],
                },
            ],
            GuideSection::Ai => vec![
                GuideGroup {
                    heading: "Ways to use AI",
                    entries: vec![
                        entry(
                            "Analysis",
                            "Use AI to analyze logs, error patterns, or large datasets to identify patterns humans might miss.",
                        ),
                        entry(
                            "Brainstorming",
                            "AI can help generate additional questions, hypotheses, or solution ideas based on your problem description.",
                        ),
                        entry(
                            "Research",
                            "Quickly research similar problems, best practices, or industry solutions to inform your approach.",
                        ),
                        entry(
                            "Documentation",
                            "AI can help summarize findings, create timelines, or organize your problem-solving notes.",
                        ),
                    ],
                },
                GuideGroup {
                    heading: "As a Supporting Tool",
                    entries: vec![entry(
                        "Second opinion",
                        "AI can automate routine analysis, simulate outcomes, or provide a second opinion on your reasoning.",
                    )],
                },
            ],
        }
    }

    /// Checklist lines shown at the end of a section, if any.
    pub fn checklist(&self) -> &'static [&'static str] {
        match self {
            GuideSection::Rca => &[
                "Problem statement is clear and specific",
                "Timeline includes all relevant events and changes",
                "Evidence is factual and verifiable",
                "Multiple perspectives have been considered",
                "Root causes address systemic issues, not just symptoms",
                "Recommendations are specific and actionable",
                "Success metrics for preventing recurrence are defined",
            ],
            _ => &[],
        }
    }

    pub fn closing(&self) -> Option<&'static str> {
        match self {
            GuideSection::Pitfalls => None,
            GuideSection::Rca => Some(
                "Remember: The goal of RCA is not to assign blame, but to understand how systems and processes can be improved to prevent similar problems in the future.",
            ),
            GuideSection::Ai => Some(
                "AI should augment human judgment, not replace critical thinking and domain expertise.",
            ),
        }
    }
}
