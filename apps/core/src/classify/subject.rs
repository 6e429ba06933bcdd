//! Subject detection.
//!
//! First match wins: priority keyword groups, then the subject vocabulary,
//! then fuzzy matching with two confidence tiers.

use std::sync::Arc;
use tracing::debug;

use super::fuzzy::{extract_one, Scorer};
use super::keywords::KeywordExtractor;
use super::tables::{ClassifierTables, GENERAL_SUBJECT};

/// Fuzzy matches above this score are accepted outright.
const ACCEPT_SCORE: u8 = 70;
/// Fuzzy matches above this score are accepted after disambiguation.
const MEDIUM_SCORE: u8 = 50;
/// Terms this short only match as a whole token ("ai" is not in "chairs").
const WHOLE_TOKEN_MAX_LEN: usize = 2;

fn mentions(cleaned: &str, term: &str) -> bool {
    if term.len() <= WHOLE_TOKEN_MAX_LEN {
        cleaned.split_whitespace().any(|token| token == term)
    } else {
        cleaned.contains(term)
    }
}

pub struct SubjectClassifier {
    tables: Arc<ClassifierTables>,
    extractor: KeywordExtractor,
    /// Vocabulary names, longest first, for the substring pass.
    by_length: Vec<&'static str>,
}

impl SubjectClassifier {
    pub fn new(tables: Arc<ClassifierTables>, extractor: KeywordExtractor) -> Self {
        let mut by_length = tables.subject_names();
        // stable: equal lengths keep declaration order
        by_length.sort_by(|a, b| b.len().cmp(&a.len()));
        Self {
            tables,
            extractor,
            by_length,
        }
    }

    /// Detect the canonical subject of a raw query. Never fails.
    pub fn classify(&self, text: &str) -> String {
        let cleaned = self.extractor.extract(text).to_lowercase();
        self.classify_cleaned(&cleaned)
    }

    /// Detect the subject of an already extracted keyword string.
    pub fn classify_cleaned(&self, cleaned: &str) -> String {
        for group in &self.tables.priority_groups {
            if group.keywords.iter().any(|keyword| mentions(cleaned, keyword)) {
                return group.label.to_string();
            }
        }

        for name in &self.by_length {
            if mentions(cleaned, name) {
                return self.canonical(name);
            }
        }

        let names = self.tables.subject_names();
        let Some(best) = extract_one(cleaned, &names, Scorer::TokenSet) else {
            return GENERAL_SUBJECT.to_string();
        };
        debug!("Subject fuzzy match: {} (score: {})", best.label, best.score);

        if best.score > ACCEPT_SCORE {
            return self.canonical(&best.label);
        }

        if best.score > MEDIUM_SCORE {
            for (term, subject) in &self.tables.disambiguation {
                if mentions(cleaned, term) {
                    return (*subject).to_string();
                }
            }
            return self.canonical(&best.label);
        }

        GENERAL_SUBJECT.to_string()
    }

    fn canonical(&self, name: &str) -> String {
        self.tables
            .canonical_subject(name)
            .unwrap_or(name)
            .to_string()
    }
}
