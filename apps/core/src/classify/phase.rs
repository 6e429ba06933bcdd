//! Learning phase resolution.

use std::sync::Arc;
use tracing::debug;

use super::fuzzy::{extract_one, Scorer};
use super::keywords::KeywordExtractor;
use super::tables::{ClassifierTables, LearningPhase, GENERAL_SUBJECT};

/// Below this token-sort score the substring-overlap scorer is tried.
const TOKEN_SORT_MIN: u8 = 80;
/// A fuzzy grade match must score above this to count.
const GRADE_MATCH_SCORE: u8 = 60;

/// Digit tokens of the raw query, in order of appearance.
pub fn grade_digits(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

pub struct PhaseResolver {
    tables: Arc<ClassifierTables>,
    extractor: KeywordExtractor,
}

impl PhaseResolver {
    pub fn new(tables: Arc<ClassifierTables>, extractor: KeywordExtractor) -> Self {
        Self { tables, extractor }
    }

    /// Resolve the learning phase of a raw query. Never fails.
    pub fn resolve(&self, text: &str, subject: &str) -> LearningPhase {
        let numbers = grade_digits(text);
        let mut cleaned = self
            .extractor
            .extract(text)
            .replace("kg 1", "kg1")
            .replace("kg 2", "kg2");
        if !numbers.is_empty() {
            cleaned.push(' ');
            cleaned.push_str(&numbers.join(" "));
        }
        debug!("Processed input: {}", cleaned);

        if cleaned.contains("kg1") || cleaned.contains("kg2") {
            return LearningPhase::EarlyChildhood;
        }

        if let Some(phase) = numbers.iter().find_map(|num| self.tables.grade_phase(num)) {
            return phase;
        }

        if subject != GENERAL_SUBJECT {
            return self
                .tables
                .subject_phase(subject)
                .unwrap_or(LearningPhase::Unknown);
        }

        let keys = self.tables.grade_keys();
        let best = extract_one(&cleaned, &keys, Scorer::TokenSort)
            .filter(|m| m.score >= TOKEN_SORT_MIN)
            .or_else(|| extract_one(&cleaned, &keys, Scorer::PartialRatio));

        match best {
            Some(m) if m.score > GRADE_MATCH_SCORE => {
                debug!("Best grade match: {} (score: {})", m.label, m.score);
                self.tables
                    .grade_phase(&m.label)
                    .unwrap_or(LearningPhase::Unknown)
            }
            _ => LearningPhase::Unknown,
        }
    }
}
