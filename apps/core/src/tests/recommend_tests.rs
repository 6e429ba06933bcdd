//! Recommend Module Tests
//!
//! End-to-end routing from raw queries, plus dataset enrichment loaded
//! from a file on disk.

use std::io::Write;
use std::sync::Arc;

use crate::classify::{ClassifierTables, QueryAnalyzer};
use crate::recommend::{templates, FixedChooser, RecommendationDataset, RecommendationSelector, Route};

fn pipeline(dataset: RecommendationDataset) -> (QueryAnalyzer, RecommendationSelector) {
    let tables = Arc::new(ClassifierTables::new());
    let selector = RecommendationSelector::new(
        tables.clone(),
        Arc::new(dataset),
        Arc::new(FixedChooser(0)),
    );
    (QueryAnalyzer::new(tables), selector)
}

#[cfg(test)]
mod routing_tests {
    use super::*;

    #[test]
    fn test_physics_practical_exam() {
        let (analyzer, selector) = pipeline(RecommendationDataset::empty());
        let classification = analyzer.analyze("grade 9 physics practical exam");

        assert_eq!(classification.subject, "physics");
        assert_eq!(classification.phase.label(), "Secondary");

        let recommendation = selector.select(&classification);
        assert_eq!(recommendation.route, Route::PracticalScienceExam);
        assert_eq!(recommendation.text, templates::practical_science_exam("physics"));
    }

    #[test]
    fn test_kindergarten_generic_classroom() {
        let (analyzer, selector) = pipeline(RecommendationDataset::empty());
        let recommendation = selector.select(&analyzer.analyze("kg1 class"));

        assert_eq!(recommendation.route, Route::GenericClassroom);
        assert!(recommendation
            .text
            .contains("Recommended Classroom Setup for General in Early Childhood Phase"));
        assert!(recommendation.text.contains("Classroom Color: Light Yellow"));
    }

    #[test]
    fn test_queries_route_as_expected() {
        let (analyzer, selector) = pipeline(RecommendationDataset::empty());

        let cases = [
            ("pe lesson", Route::OutdoorPe),
            ("coding practical exam", Route::PracticalCsExam),
            ("grade 5 math practical exam", Route::PracticalExam),
            ("history theory examination", Route::TheoryExam),
            ("end of term test", Route::ExamPrompt),
            ("chemistry group work", Route::ScienceGroupSpace),
            ("programming group activity", Route::CsGroupWorkspace),
            ("art group activity", Route::GroupActivitySpace),
            ("biology laboratory", Route::SubjectLab),
            ("grade 12 computer science classroom", Route::CsClassroom),
            ("grade 11 chemistry", Route::Clarification),
            ("grade 3 english", Route::GenericClassroom),
            ("grade 5 classroom with chairs", Route::GenericClassroom),
            ("good air quality for grade 3", Route::GenericClassroom),
        ];

        for (query, expected) in cases {
            let route = selector.route(&analyzer.analyze(query));
            assert_eq!(route, expected, "Unexpected route for '{}'", query);
        }
    }

    #[test]
    fn test_cs_classroom_uses_grade() {
        let (analyzer, selector) = pipeline(RecommendationDataset::empty());
        let recommendation = selector.select(&analyzer.analyze("grade 9 coding classroom"));

        assert_eq!(recommendation.route, Route::CsClassroom);
        assert_eq!(recommendation.text, templates::cs_classroom(Some("9")));
    }
}

#[cfg(test)]
mod dataset_tests {
    use super::*;

    const CSV: &str = "\
Learning Phase,Classroom Size,Seating Arrangement,Neuro-Architecture,Neuro-Aesthetics,Noise Levels,Lighting
Middle,Large,Lab,Open plan,9,Low,Dim
Primary,Small,Rows,Structured,4,High,Bright
";

    #[test]
    fn test_loaded_row_enriches_generic_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let dataset = RecommendationDataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);

        let (analyzer, selector) = pipeline(dataset);
        let recommendation = selector.select(&analyzer.analyze("music room"));

        assert_eq!(recommendation.route, Route::GenericClassroom);
        let text = recommendation.text;
        assert!(text.contains("Classroom Size: 10m x 10m"));
        assert!(text.contains("Large tables with high chairs for experiments."));
        assert!(text.contains("Minimal soundproofing needed"));
        assert!(text.contains("Artificial: 200-300 lux"));
        assert!(text.contains("Neuro-aesthetic score of 9"));
    }

    #[test]
    fn test_missing_dataset_is_generative() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = RecommendationDataset::load_optional(Some(dir.path().join("absent.csv").as_path()));
        assert!(dataset.is_empty());

        let (analyzer, selector) = pipeline(dataset);
        let recommendation = selector.select(&analyzer.analyze("music room"));
        assert!(recommendation
            .text
            .contains("Recommended Classroom Setup for Music in Middle Phase"));
    }
}
