//! Query intent detection.
//!
//! Intents are independent qualifiers found by substring, so one query can
//! carry several (e.g. "practical exam in the lab").

use serde::{Deserialize, Serialize};
use std::fmt;

const LAB_TERMS: &[&str] = &["lab", "laboratory"];
const CLASSROOM_TERMS: &[&str] = &["classroom"];
const EXAM_TERMS: &[&str] = &["exam", "examination", "test"];
const GROUP_TERMS: &[&str] = &["group activity", "group work"];

/// Intent qualifiers detected in a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    pub lab: bool,
    pub classroom: bool,
    pub exam: bool,
    /// Only set together with `exam`.
    pub practical: bool,
    /// Only set together with `exam`.
    pub theory: bool,
    pub group: bool,
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

impl QueryIntent {
    /// Detect intents in a raw query
    pub fn detect(text: &str) -> Self {
        let text = text.to_lowercase();
        let exam = contains_any(&text, EXAM_TERMS);

        Self {
            lab: contains_any(&text, LAB_TERMS),
            classroom: contains_any(&text, CLASSROOM_TERMS),
            exam,
            practical: exam && text.contains("practical"),
            theory: exam && text.contains("theory"),
            group: contains_any(&text, GROUP_TERMS),
        }
    }

    /// Short labels of the active intents
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.lab, "lab"),
            (self.classroom, "classroom"),
            (self.exam, "exam"),
            (self.practical, "practical"),
            (self.theory, "theory"),
            (self.group, "group"),
        ]
        .into_iter()
        .filter_map(|(active, label)| active.then_some(label))
        .collect()
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        if labels.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&labels.join("+"))
        }
    }
}
