//! Query Analyzer - orchestrates the classification pipeline.
//!
//! Subject detection runs first because the phase resolver falls back to
//! the subject's phase when the query names no grade.

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::classification::Classification;
use super::intent::QueryIntent;
use super::keywords::KeywordExtractor;
use super::phase::{grade_digits, PhaseResolver};
use super::subject::SubjectClassifier;
use super::tables::ClassifierTables;
use super::tokenizer::Tokenizer;

pub struct QueryAnalyzer {
    extractor: KeywordExtractor,
    subject_classifier: SubjectClassifier,
    phase_resolver: PhaseResolver,
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(ClassifierTables::new()))
    }
}

impl QueryAnalyzer {
    /// Create an analyzer over shared tables with the default tokenizer
    pub fn new(tables: Arc<ClassifierTables>) -> Self {
        Self::with_extractor(tables, KeywordExtractor::new())
    }

    /// Create an analyzer with a custom tokenizer backend
    #[allow(dead_code)]
    pub fn with_tokenizer(tables: Arc<ClassifierTables>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::with_extractor(tables, KeywordExtractor::with_tokenizer(tokenizer))
    }

    fn with_extractor(tables: Arc<ClassifierTables>, extractor: KeywordExtractor) -> Self {
        Self {
            subject_classifier: SubjectClassifier::new(tables.clone(), extractor.clone()),
            phase_resolver: PhaseResolver::new(tables, extractor.clone()),
            extractor,
        }
    }

    /// Classify a query into (subject, phase, intent)
    pub fn analyze(&self, query: &str) -> Classification {
        let start = Instant::now();

        let cleaned = self.extractor.extract(query);
        let subject = self.subject_classifier.classify_cleaned(&cleaned.to_lowercase());
        let phase = self.phase_resolver.resolve(query, &subject);
        let intent = QueryIntent::detect(query);

        let classification = Classification {
            query: query.to_string(),
            cleaned,
            subject,
            phase,
            intent,
            grade_digits: grade_digits(query),
            processing_time_us: start.elapsed().as_micros() as u64,
            timestamp: Utc::now(),
        };

        info!("Classified query: {}", classification.summary());
        classification
    }
}
