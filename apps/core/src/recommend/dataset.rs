//! Optional CSV dataset of prior classroom recommendations.
//!
//! Rows are keyed by their `Learning Phase` column. A missing file or a bad
//! row never fails a request: the generator falls back to static tables.

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::classify::LearningPhase;
use crate::error::AppError;

use super::chooser::{choose, Chooser};

/// One dataset row. Only the phase column is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Learning Phase")]
    pub learning_phase: String,
    #[serde(rename = "Classroom Size", default)]
    pub classroom_size: Option<String>,
    #[serde(rename = "Seating Arrangement", default)]
    pub seating_arrangement: Option<String>,
    #[serde(rename = "Neuro-Architecture", default)]
    pub neuro_architecture: Option<String>,
    #[serde(rename = "Neuro-Aesthetics", default)]
    pub neuro_aesthetics: Option<String>,
    #[serde(rename = "Noise Levels", default)]
    pub noise_levels: Option<String>,
    #[serde(rename = "Lighting", default)]
    pub lighting: Option<String>,
}

/// In-memory dataset, read once at startup
#[derive(Debug, Clone, Default)]
pub struct RecommendationDataset {
    rows: Vec<DatasetRow>,
}

impl RecommendationDataset {
    /// Empty dataset: generative templates only
    pub fn empty() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn from_rows(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    /// Parse CSV from any reader. Malformed rows are skipped.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, AppError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        // Fail early on an unreadable header row
        csv_reader.headers()?;

        let mut rows = Vec::new();
        for (index, record) in csv_reader.deserialize::<DatasetRow>().enumerate() {
            match record {
                Ok(row) if row.learning_phase.trim().is_empty() => {
                    warn!("Skipping dataset row {}: empty learning phase", index + 1);
                }
                Ok(row) => rows.push(row),
                Err(e) => warn!("Skipping malformed dataset row {}: {}", index + 1, e),
            }
        }

        Ok(Self { rows })
    }

    /// Load from a CSV file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!("Loaded {} dataset rows from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    /// Load if the file exists; otherwise (or on error) run without a dataset.
    pub fn load_optional(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::empty();
        };
        if !path.exists() {
            warn!("Dataset {:?} not found, using generated recommendations only", path);
            return Self::empty();
        }
        match Self::load(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!("Failed to load dataset {:?}: {}", path, e);
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose phase label matches exactly.
    pub fn rows_for(&self, phase: LearningPhase) -> Vec<&DatasetRow> {
        self.rows
            .iter()
            .filter(|row| LearningPhase::from_label(&row.learning_phase) == Some(phase))
            .collect()
    }

    /// Sample one row for the phase, if any exist.
    pub fn sample(&self, phase: LearningPhase, chooser: &dyn Chooser) -> Option<&DatasetRow> {
        let rows = self.rows_for(phase);
        choose(chooser, &rows).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::chooser::FixedChooser;

    const CSV: &str = "\
Learning Phase , Classroom Size,Seating Arrangement,Neuro-Architecture,Neuro-Aesthetics,Noise Levels,Lighting
Primary,Small,Clustered,Open,7,Low,Bright
Primary,Large,Rows,Open,6,High,Dim
,Medium,Rows,Open,5,Low,Bright
Secondary,Medium,U-Shape,Structured,,Medium,Standard
";

    #[test]
    fn test_parses_and_skips_empty_phase() {
        let dataset = RecommendationDataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows_for(LearningPhase::Primary).len(), 2);
        assert!(dataset.rows_for(LearningPhase::Middle).is_empty());
    }

    #[test]
    fn test_empty_fields_become_none() {
        let dataset = RecommendationDataset::from_reader(CSV.as_bytes()).unwrap();
        let row = dataset
            .sample(LearningPhase::Secondary, &FixedChooser(0))
            .unwrap();
        assert_eq!(row.seating_arrangement.as_deref(), Some("U-Shape"));
        assert_eq!(row.neuro_aesthetics, None);
    }

    #[test]
    fn test_sample_uses_chooser() {
        let dataset = RecommendationDataset::from_reader(CSV.as_bytes()).unwrap();
        let row = dataset.sample(LearningPhase::Primary, &FixedChooser(1)).unwrap();
        assert_eq!(row.classroom_size.as_deref(), Some("Large"));
        assert!(dataset.sample(LearningPhase::Unknown, &FixedChooser(0)).is_none());
    }

    #[test]
    fn test_load_optional_missing_file() {
        let dataset =
            RecommendationDataset::load_optional(Some(Path::new("/nonexistent/dataset.csv")));
        assert!(dataset.is_empty());
        assert!(RecommendationDataset::load_optional(None).is_empty());
    }
}
