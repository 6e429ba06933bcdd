//! # Classify Module
//!
//! Turns a free-text classroom query into a (subject, learning phase,
//! intent) triple. Pure rule tables plus fuzzy matching, no model.
//!
//! ## Components
//! - `tokenizer`: pluggable tokenizer with stopword tagging
//! - `keywords`: cleaned keyword string with kindergarten markers
//! - `fuzzy`: 0-100 similarity scorers and best-match extraction
//! - `tables`: immutable keyword, subject and grade tables
//! - `subject`: subject classifier
//! - `phase`: learning phase resolver
//! - `intent`: lab / exam / group qualifiers
//! - `classification`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod classification;
pub mod fuzzy;
pub mod intent;
pub mod keywords;
pub mod phase;
pub mod subject;
pub mod tables;
pub mod tokenizer;

pub use analyzer::QueryAnalyzer;
pub use classification::Classification;
#[allow(unused_imports)]
pub use intent::QueryIntent;
#[allow(unused_imports)]
pub use keywords::KeywordExtractor;
pub use tables::{ClassifierTables, LearningPhase, GENERAL_SUBJECT};
#[allow(unused_imports)]
pub use tokenizer::{StopwordTokenizer, Token, Tokenizer};
