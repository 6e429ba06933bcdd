//! Test Module
//!
//! Crate-level test suite for the classroom design advisor.
//!
//! ## Test Categories
//! - `classify_tests`: keyword extraction, subject and phase properties
//! - `recommend_tests`: rule dispatch and dataset enrichment
//! - `service_tests`: JSON-lines loop and command line parsing

pub mod classify_tests;
pub mod recommend_tests;
pub mod service_tests;
