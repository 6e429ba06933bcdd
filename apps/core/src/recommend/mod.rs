//! # Recommend Module
//!
//! Picks a recommendation text for a [`Classification`](crate::classify::Classification).
//!
//! ## Components
//! - `selector`: ordered rule dispatch
//! - `templates`: fixed exam, lab and group templates
//! - `generator`: generic classroom recommendation from lookup tables
//! - `dataset`: optional CSV enrichment
//! - `chooser`: injectable random choice

pub mod chooser;
pub mod dataset;
pub mod generator;
pub mod selector;
pub mod templates;

pub use chooser::{Chooser, RandomChooser};
#[allow(unused_imports)]
pub use chooser::FixedChooser;
pub use dataset::RecommendationDataset;
#[allow(unused_imports)]
pub use selector::{Recommendation, RecommendationSelector, Route};
