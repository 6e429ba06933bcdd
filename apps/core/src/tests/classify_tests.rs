//! Classify Module Tests
//!
//! Properties of keyword extraction, subject detection and phase
//! resolution across the whole pipeline.

use crate::classify::fuzzy::{extract_one, Scorer};
use crate::classify::{ClassifierTables, KeywordExtractor, LearningPhase, QueryAnalyzer, GENERAL_SUBJECT};

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_kindergarten_markers_reinjected() {
        let extractor = KeywordExtractor::new();

        for (input, marker) in [("KG 1 room", "kg1"), ("kg1 room", "kg1"), ("Kg 2 play area", "kg2")] {
            let cleaned = extractor.extract(input);
            assert!(
                cleaned.split(' ').any(|token| token == marker),
                "Expected '{}' in '{}' for '{}'",
                marker,
                cleaned,
                input
            );
        }
    }

    #[test]
    fn test_digits_and_punctuation_dropped() {
        let extractor = KeywordExtractor::new();
        assert_eq!(extractor.extract("Physics, grade 11!"), "physics grade");
    }
}

#[cfg(test)]
mod phase_tests {
    use super::*;

    #[test]
    fn test_kindergarten_is_early_childhood() {
        let analyzer = QueryAnalyzer::default();

        for query in ["KG 1 classroom", "kg2 art corner", "math for kg1"] {
            assert_eq!(
                analyzer.analyze(query).phase,
                LearningPhase::EarlyChildhood,
                "Expected Early Childhood for '{}'",
                query
            );
        }
    }

    #[test]
    fn test_grades_nine_and_ten_are_secondary() {
        let analyzer = QueryAnalyzer::default();

        for query in ["grade 9 chemistry", "grade 10 history", "10 art room"] {
            assert_eq!(
                analyzer.analyze(query).phase,
                LearningPhase::Secondary,
                "Expected Secondary for '{}'",
                query
            );
        }
    }

    #[test]
    fn test_grades_eleven_and_twelve_are_higher_secondary() {
        let analyzer = QueryAnalyzer::default();

        for query in ["grade 11 math", "grade 12 history", "12 english"] {
            assert_eq!(
                analyzer.analyze(query).phase,
                LearningPhase::HigherSecondary,
                "Expected Higher Secondary for '{}'",
                query
            );
        }
    }

    #[test]
    fn test_subject_phase_without_grade() {
        let analyzer = QueryAnalyzer::default();
        assert_eq!(analyzer.analyze("math room").phase, LearningPhase::Primary);
        assert_eq!(analyzer.analyze("biology").phase, LearningPhase::HigherSecondary);
        assert_eq!(analyzer.analyze("pe").phase, LearningPhase::Outdoor);
    }
}

#[cfg(test)]
mod subject_tests {
    use super::*;

    const CANONICAL_LABELS: &[&str] = &[
        "science",
        "math",
        "art",
        "english",
        "history",
        "physics",
        "chemistry",
        "biology",
        "computer science",
        "music",
        "pe",
    ];

    #[test]
    fn test_labels_are_fixed_points() {
        let analyzer = QueryAnalyzer::default();

        for label in CANONICAL_LABELS {
            assert_eq!(
                analyzer.analyze(label).subject,
                *label,
                "Expected '{}' to classify as itself",
                label
            );
        }
    }

    #[test]
    fn test_physics_takes_priority() {
        let analyzer = QueryAnalyzer::default();

        for query in ["physics and art lab", "art lab with physics", "music and physics"] {
            assert_eq!(analyzer.analyze(query).subject, "physics", "for '{}'", query);
        }
    }

    #[test]
    fn test_high_fuzzy_score_never_general() {
        let analyzer = QueryAnalyzer::default();
        let extractor = KeywordExtractor::new();
        let names = ClassifierTables::new().subject_names();

        for query in ["englsh", "histroy", "musc", "biolgy"] {
            let cleaned = extractor.extract(query);
            let best = extract_one(&cleaned, &names, Scorer::TokenSet).unwrap();
            assert!(best.score > 70, "Expected a strong match for '{}'", query);

            let subject = analyzer.analyze(query).subject;
            assert_ne!(subject, GENERAL_SUBJECT, "for '{}'", query);
        }
    }

    #[test]
    fn test_letters_inside_words_are_not_subjects() {
        let analyzer = QueryAnalyzer::default();

        for query in ["grade 5 classroom with chairs", "paint corner for kids", "open plan room"] {
            let classification = analyzer.analyze(query);
            assert_eq!(classification.subject, GENERAL_SUBJECT, "for '{}'", query);
            assert_ne!(classification.phase, LearningPhase::HigherSecondary, "for '{}'", query);
        }
    }

    #[test]
    fn test_no_subject_words_is_general() {
        let analyzer = QueryAnalyzer::default();
        let classification = analyzer.analyze("kg1 class");
        assert_eq!(classification.subject, GENERAL_SUBJECT);
        assert_eq!(classification.phase, LearningPhase::EarlyChildhood);
        assert!(!classification.has_subject());
    }
}
