//! Classification - output of the query analyzer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::intent::QueryIntent;
use super::tables::{LearningPhase, GENERAL_SUBJECT};

/// Everything derived from a single query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Original query
    pub query: String,

    /// Extracted keyword string
    pub cleaned: String,

    /// Canonical subject label or "General"
    pub subject: String,

    pub phase: LearningPhase,

    pub intent: QueryIntent,

    /// Digit tokens found in the query, in order
    pub grade_digits: Vec<String>,

    /// Processing time in microseconds
    pub processing_time_us: u64,

    pub timestamp: DateTime<Utc>,
}

impl Classification {
    /// Whether any subject was detected
    pub fn has_subject(&self) -> bool {
        self.subject != GENERAL_SUBJECT
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Subject: {}, Phase: {}, Intent: {}, Grades: [{}]",
            self.subject,
            self.phase,
            self.intent,
            self.grade_digits.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let classification = Classification {
            query: "grade 9 physics lab".to_string(),
            cleaned: "grade physics lab".to_string(),
            subject: "physics".to_string(),
            phase: LearningPhase::Secondary,
            intent: QueryIntent::detect("grade 9 physics lab"),
            grade_digits: vec!["9".to_string()],
            processing_time_us: 0,
            timestamp: Utc::now(),
        };

        assert!(classification.has_subject());
        assert_eq!(
            classification.summary(),
            "Subject: physics, Phase: Secondary, Intent: lab, Grades: [9]"
        );
    }
}
