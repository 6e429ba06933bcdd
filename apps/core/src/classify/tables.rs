//! Static lookup tables for classification.
//!
//! Built once at startup into a [`ClassifierTables`] value and shared by
//! reference. Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label returned when no subject could be detected.
pub const GENERAL_SUBJECT: &str = "General";

/// Coarse grade-band category driving the default room parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningPhase {
    #[serde(rename = "Early Childhood")]
    EarlyChildhood,
    Primary,
    Middle,
    Secondary,
    #[serde(rename = "Higher Secondary")]
    HigherSecondary,
    /// Physical education, which always happens outside.
    Outdoor,
    Unknown,
}

impl LearningPhase {
    pub fn label(&self) -> &'static str {
        match self {
            LearningPhase::EarlyChildhood => "Early Childhood",
            LearningPhase::Primary => "Primary",
            LearningPhase::Middle => "Middle",
            LearningPhase::Secondary => "Secondary",
            LearningPhase::HigherSecondary => "Higher Secondary",
            LearningPhase::Outdoor => "Outdoor",
            LearningPhase::Unknown => "Unknown",
        }
    }

    /// Parses a dataset label such as `"Higher Secondary"`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Early Childhood" => Some(LearningPhase::EarlyChildhood),
            "Primary" => Some(LearningPhase::Primary),
            "Middle" => Some(LearningPhase::Middle),
            "Secondary" => Some(LearningPhase::Secondary),
            "Higher Secondary" => Some(LearningPhase::HigherSecondary),
            "Outdoor" => Some(LearningPhase::Outdoor),
            "Unknown" => Some(LearningPhase::Unknown),
            _ => None,
        }
    }

    /// Upper grade bands where lab subjects need a classroom/lab choice.
    pub fn is_senior(&self) -> bool {
        matches!(self, LearningPhase::Secondary | LearningPhase::HigherSecondary)
    }
}

impl fmt::Display for LearningPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered surface forms that all resolve to one canonical subject.
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    pub keywords: &'static [&'static str],
    pub label: &'static str,
}

/// A subject vocabulary entry.
#[derive(Debug, Clone)]
pub struct SubjectEntry {
    /// Name matched against the cleaned query.
    pub name: &'static str,
    /// Label reported when this entry matches.
    pub canonical: &'static str,
    pub phase: LearningPhase,
}

/// All classification tables, constructed once.
#[derive(Debug, Clone)]
pub struct ClassifierTables {
    /// Priority groups; list order is the tie-break order.
    pub priority_groups: Vec<KeywordGroup>,
    /// Subject vocabulary in declaration order (fuzzy tie-break order).
    pub subjects: Vec<SubjectEntry>,
    /// Literal hints consulted for medium-confidence fuzzy matches.
    pub disambiguation: Vec<(&'static str, &'static str)>,
    /// Grade tokens in declaration order (fuzzy tie-break order).
    pub grades: Vec<(&'static str, LearningPhase)>,
}

impl Default for ClassifierTables {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierTables {
    pub fn new() -> Self {
        use LearningPhase::*;

        let priority_groups = vec![
            KeywordGroup {
                keywords: &["physics", "phys", "phy"],
                label: "physics",
            },
            KeywordGroup {
                keywords: &["computer science", "computer", "cs", "coding", "programming"],
                label: "computer science",
            },
            KeywordGroup {
                keywords: &["biology", "bio", "biotech"],
                label: "biology",
            },
            KeywordGroup {
                keywords: &["chemistry", "chem", "chemical"],
                label: "chemistry",
            },
        ];

        let subject = |name, canonical, phase| SubjectEntry {
            name,
            canonical,
            phase,
        };
        let subjects = vec![
            subject("science", "science", Secondary),
            subject("math", "math", Primary),
            subject("art", "art", Middle),
            subject("english", "english", Primary),
            subject("history", "history", Middle),
            subject("physics", "physics", HigherSecondary),
            subject("chemistry", "chemistry", HigherSecondary),
            subject("biology", "biology", HigherSecondary),
            subject("computer science", "computer science", HigherSecondary),
            subject("computer", "computer science", HigherSecondary),
            subject("cs", "computer science", HigherSecondary),
            subject("coding", "computer science", HigherSecondary),
            subject("programming", "computer science", HigherSecondary),
            subject("ai", "computer science", HigherSecondary),
            subject("artificial intelligence", "computer science", HigherSecondary),
            subject("music", "music", Middle),
            subject("pe", "pe", Outdoor),
        ];

        let disambiguation = vec![
            ("circuit", "physics"),
            ("code", "computer science"),
            ("element", "chemistry"),
            ("organism", "biology"),
        ];

        let grades = vec![
            ("kg1", EarlyChildhood),
            ("kg2", EarlyChildhood),
            ("kg section", EarlyChildhood),
            ("grade 1", Primary),
            ("grade 2", Primary),
            ("grade 3", Primary),
            ("grade 4", Primary),
            ("grade 5", Primary),
            ("grade 6", Middle),
            ("grade 7", Middle),
            ("grade 8", Middle),
            ("grade 9", Secondary),
            ("grade 10", Secondary),
            ("high school", Secondary),
            ("9", Secondary),
            ("10", Secondary),
            ("grade 11", HigherSecondary),
            ("grade 12", HigherSecondary),
            ("11", HigherSecondary),
            ("12", HigherSecondary),
            ("11 COM", HigherSecondary),
            ("grade 11 COM", HigherSecondary),
            ("12 COM", HigherSecondary),
            ("grade 12 COM", HigherSecondary),
            ("11 SCI", HigherSecondary),
            ("grade 12 SCI", HigherSecondary),
        ];

        Self {
            priority_groups,
            subjects,
            disambiguation,
            grades,
        }
    }

    /// Phase for an exact grade token.
    pub fn grade_phase(&self, token: &str) -> Option<LearningPhase> {
        self.grades
            .iter()
            .find(|(grade, _)| *grade == token)
            .map(|(_, phase)| *phase)
    }

    /// Phase for a canonical subject label or one of its aliases.
    pub fn subject_phase(&self, subject: &str) -> Option<LearningPhase> {
        self.subjects
            .iter()
            .find(|entry| entry.name == subject || entry.canonical == subject)
            .map(|entry| entry.phase)
    }

    /// Canonical label for a vocabulary name, if known.
    pub fn canonical_subject(&self, name: &str) -> Option<&'static str> {
        self.subjects
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.canonical)
    }

    /// Subject names for fuzzy matching, in declaration order.
    pub fn subject_names(&self) -> Vec<&'static str> {
        self.subjects.iter().map(|entry| entry.name).collect()
    }

    /// Grade tokens for fuzzy matching, in declaration order.
    pub fn grade_keys(&self) -> Vec<&'static str> {
        self.grades.iter().map(|(grade, _)| *grade).collect()
    }
}
