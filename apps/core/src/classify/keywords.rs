//! Keyword extraction for classification.
//!
//! Reduces a raw query to its meaningful alphabetic words and re-appends
//! the kindergarten markers, which the tokenizer would otherwise drop as
//! non-alphabetic tokens.

use std::sync::Arc;

use super::tokenizer::{StopwordTokenizer, Tokenizer};

/// Surface forms for each kindergarten marker.
const KG_MARKERS: &[(&[&str], &str)] = &[(&["kg 1", "kg1"], "kg1"), (&["kg 2", "kg2"], "kg2")];

/// Keyword extractor backed by a pluggable tokenizer
#[derive(Clone)]
pub struct KeywordExtractor {
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor using the built-in stopword tokenizer
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(StopwordTokenizer::new()))
    }

    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Extract the cleaned, space-joined keyword string.
    pub fn extract(&self, text: &str) -> String {
        let lower = text.to_lowercase();

        let mut keywords: Vec<String> = self
            .tokenizer
            .tokenize(&lower)
            .into_iter()
            .filter(|token| token.is_alpha && !token.is_stop)
            .map(|token| token.text)
            .collect();

        for (forms, marker) in KG_MARKERS {
            if forms.iter().any(|form| lower.contains(form)) {
                keywords.push((*marker).to_string());
            }
        }

        keywords.join(" ")
    }
}
