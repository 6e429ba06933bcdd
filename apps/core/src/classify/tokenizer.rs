//! Tokenization and stopword tagging.
//!
//! The classifier only needs `(text, is_alpha, is_stop)` per token, so the
//! tokenizer sits behind a trait and any NLP backend can be plugged in.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A single token produced by a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Every character is alphabetic.
    pub is_alpha: bool,
    pub is_stop: bool,
}

/// Splits text into tagged tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// English stopwords
const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "for", "yet", "so", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
    "mine", "yours", "hers", "ours", "theirs", "this", "that", "these", "those", "who", "whom",
    "which", "what", "whose", "is", "am", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "having", "do", "does", "did", "doing", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "in", "on", "at", "to", "from", "by", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above", "below", "up",
    "down", "out", "off", "over", "under", "again", "further", "here", "there", "where", "when",
    "why", "how", "all", "each", "every", "both", "few", "more", "most", "other", "some", "any",
    "no", "not", "only", "own", "same", "than", "too", "very", "just", "also", "now", "then",
    "once", "always", "never", "if", "because", "as", "until", "while", "although", "though",
    "of", "please", "give", "show", "make", "get", "want", "need", "like", "s", "t", "ve", "re",
    "ll", "d", "m",
];

// Words, or single punctuation marks
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|[^\w\s]").expect("Invalid regex: token pattern"));

/// Default tokenizer: regex word splitting plus an English stopword list.
pub struct StopwordTokenizer {
    stopwords: HashSet<&'static str>,
}

impl Default for StopwordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordTokenizer {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS_EN.iter().copied().collect(),
        }
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word.to_lowercase().as_str())
    }
}

impl Tokenizer for StopwordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        TOKEN_PATTERN
            .find_iter(text)
            .map(|m| {
                let word = m.as_str();
                Token {
                    text: word.to_string(),
                    is_alpha: word.chars().all(char::is_alphabetic),
                    is_stop: self.is_stopword(word),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_alpha_and_stopwords() {
        let tokenizer = StopwordTokenizer::new();
        let tokens = tokenizer.tokenize("the kg1 lab, please");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "kg1", "lab", ",", "please"]);

        assert!(tokens[0].is_stop);
        assert!(!tokens[1].is_alpha);
        assert!(tokens[2].is_alpha && !tokens[2].is_stop);
        assert!(!tokens[3].is_alpha);
        assert!(tokens[4].is_stop);
    }

    #[test]
    fn test_subject_words_are_not_stopwords() {
        let tokenizer = StopwordTokenizer::new();
        for word in ["pe", "art", "cs", "ai", "math", "lab", "exam", "test"] {
            let tokens = tokenizer.tokenize(word);
            assert!(!tokens[0].is_stop, "'{}' must survive filtering", word);
        }
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = StopwordTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }
}
