//! Recommendation selector.
//!
//! Rules are an ordered list of (predicate, handler) pairs evaluated
//! against a [`Classification`]; the first predicate that holds picks the
//! template.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::classify::{Classification, ClassifierTables, LearningPhase, QueryIntent};

use super::chooser::Chooser;
use super::dataset::RecommendationDataset;
use super::generator::ClassroomGenerator;
use super::templates;

const CS: &str = "computer science";
const SCIENCE_SUBJECTS: &[&str] = &["physics", "chemistry", "biology", "science"];
const PRACTICAL_SCIENCE_SUBJECTS: &[&str] = &["physics", "chemistry", "biology"];
const LAB_SUBJECTS: &[&str] = &["physics", "chemistry", "biology", CS];
const CS_GRADES: &[&str] = &["9", "10", "11", "12"];

/// Template path chosen for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    OutdoorPe,
    PracticalScienceExam,
    PracticalCsExam,
    PracticalExam,
    TheoryExam,
    ExamPrompt,
    ScienceGroupSpace,
    CsGroupWorkspace,
    GroupActivitySpace,
    SubjectLab,
    CsClassroom,
    Clarification,
    GenericClassroom,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::OutdoorPe => "outdoor_pe",
            Route::PracticalScienceExam => "practical_science_exam",
            Route::PracticalCsExam => "practical_cs_exam",
            Route::PracticalExam => "practical_exam",
            Route::TheoryExam => "theory_exam",
            Route::ExamPrompt => "exam_prompt",
            Route::ScienceGroupSpace => "science_group_space",
            Route::CsGroupWorkspace => "cs_group_workspace",
            Route::GroupActivitySpace => "group_activity_space",
            Route::SubjectLab => "subject_lab",
            Route::CsClassroom => "cs_classroom",
            Route::Clarification => "clarification",
            Route::GenericClassroom => "generic_classroom",
        };
        write!(f, "{}", name)
    }
}

/// Inputs a rule sees, with the subject already canonical.
pub struct RuleContext<'a> {
    pub subject: &'a str,
    pub phase: LearningPhase,
    pub intent: QueryIntent,
}

impl RuleContext<'_> {
    fn subject_in(&self, set: &[&str]) -> bool {
        set.contains(&self.subject)
    }

    fn is_cs(&self) -> bool {
        self.subject == CS
    }
}

/// One dispatch rule
pub struct Rule {
    pub route: Route,
    pub applies: fn(&RuleContext) -> bool,
}

fn rule(route: Route, applies: fn(&RuleContext) -> bool) -> Rule {
    Rule { route, applies }
}

/// Dispatch order. The last rule always applies.
pub fn rules() -> Vec<Rule> {
    vec![
        rule(Route::OutdoorPe, |c| c.subject == "pe"),
        rule(Route::PracticalScienceExam, |c| {
            c.intent.exam && c.intent.practical && c.subject_in(PRACTICAL_SCIENCE_SUBJECTS)
        }),
        rule(Route::PracticalCsExam, |c| {
            c.intent.exam && c.intent.practical && c.is_cs()
        }),
        rule(Route::PracticalExam, |c| c.intent.exam && c.intent.practical),
        rule(Route::TheoryExam, |c| c.intent.exam && c.intent.theory),
        rule(Route::ExamPrompt, |c| c.intent.exam),
        rule(Route::ScienceGroupSpace, |c| {
            c.intent.group && c.subject_in(SCIENCE_SUBJECTS)
        }),
        rule(Route::CsGroupWorkspace, |c| c.intent.group && c.is_cs()),
        rule(Route::GroupActivitySpace, |c| c.intent.group),
        rule(Route::SubjectLab, |c| c.intent.lab && c.subject_in(LAB_SUBJECTS)),
        rule(Route::CsClassroom, |c| c.intent.classroom && c.is_cs()),
        rule(Route::Clarification, |c| {
            c.subject_in(LAB_SUBJECTS) && !c.intent.classroom && c.phase.is_senior()
        }),
        rule(Route::GenericClassroom, |_| true),
    ]
}

/// Selected template text and the route that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub route: Route,
    pub text: String,
}

pub struct RecommendationSelector {
    tables: Arc<ClassifierTables>,
    rules: Vec<Rule>,
    generator: ClassroomGenerator,
}

impl RecommendationSelector {
    pub fn new(
        tables: Arc<ClassifierTables>,
        dataset: Arc<RecommendationDataset>,
        chooser: Arc<dyn Chooser>,
    ) -> Self {
        Self {
            tables,
            rules: rules(),
            generator: ClassroomGenerator::new(dataset, chooser),
        }
    }

    pub fn route(&self, classification: &Classification) -> Route {
        let subject = self.normalize(&classification.subject);
        let context = RuleContext {
            subject: &subject,
            phase: classification.phase,
            intent: classification.intent,
        };
        self.rules
            .iter()
            .find(|rule| (rule.applies)(&context))
            .map(|rule| rule.route)
            .unwrap_or(Route::GenericClassroom)
    }

    pub fn select(&self, classification: &Classification) -> Recommendation {
        let route = self.route(classification);
        let subject = self.normalize(&classification.subject);
        debug!("Selected route {} for subject {}", route, subject);

        let text = match route {
            Route::OutdoorPe => templates::pe_outdoor(),
            Route::PracticalScienceExam => templates::practical_science_exam(&subject),
            Route::PracticalCsExam => templates::practical_cs_exam(),
            Route::PracticalExam => templates::practical_general_exam(&subject),
            Route::TheoryExam => templates::theory_exam(&subject),
            Route::ExamPrompt => templates::exam_prompt(),
            Route::ScienceGroupSpace => templates::science_group_space(),
            Route::CsGroupWorkspace => templates::cs_group_workspace(),
            Route::GroupActivitySpace => templates::group_activity_space(&subject),
            Route::SubjectLab => match subject.as_str() {
                "physics" => templates::physics_lab(),
                "chemistry" => templates::chemistry_lab(),
                "biology" => templates::biology_lab(),
                _ => templates::cs_lab(),
            },
            Route::CsClassroom => {
                let grade = classification
                    .grade_digits
                    .iter()
                    .find(|digit| CS_GRADES.contains(&digit.as_str()))
                    .map(String::as_str);
                templates::cs_classroom(grade)
            }
            Route::Clarification => templates::clarification(&subject),
            Route::GenericClassroom => self.generator.generate(classification.phase, &subject),
        };

        Recommendation { route, text }
    }

    fn normalize(&self, subject: &str) -> String {
        let lowered = subject.trim().to_lowercase();
        match self.tables.canonical_subject(&lowered) {
            Some(canonical) => canonical.to_string(),
            None => subject.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::chooser::FixedChooser;
    use chrono::Utc;

    fn selector() -> RecommendationSelector {
        RecommendationSelector::new(
            Arc::new(ClassifierTables::new()),
            Arc::new(RecommendationDataset::empty()),
            Arc::new(FixedChooser(0)),
        )
    }

    fn classification(subject: &str, phase: LearningPhase, query: &str) -> Classification {
        Classification {
            query: query.to_string(),
            cleaned: query.to_string(),
            subject: subject.to_string(),
            phase,
            intent: QueryIntent::detect(query),
            grade_digits: crate::classify::phase::grade_digits(query),
            processing_time_us: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<Route> = rules().into_iter().map(|r| r.route).collect();
        assert_eq!(
            order,
            vec![
                Route::OutdoorPe,
                Route::PracticalScienceExam,
                Route::PracticalCsExam,
                Route::PracticalExam,
                Route::TheoryExam,
                Route::ExamPrompt,
                Route::ScienceGroupSpace,
                Route::CsGroupWorkspace,
                Route::GroupActivitySpace,
                Route::SubjectLab,
                Route::CsClassroom,
                Route::Clarification,
                Route::GenericClassroom,
            ]
        );
    }

    #[test]
    fn test_pe_wins_over_exam() {
        let s = selector();
        let c = classification("pe", LearningPhase::Outdoor, "pe practical exam");
        assert_eq!(s.route(&c), Route::OutdoorPe);
    }

    #[test]
    fn test_exam_routes() {
        let s = selector();
        let physics = classification("physics", LearningPhase::Secondary, "grade 9 physics practical exam");
        let rec = s.select(&physics);
        assert_eq!(rec.route, Route::PracticalScienceExam);
        assert!(rec.text.contains("PHYSICS"));

        let cs = classification("computer science", LearningPhase::HigherSecondary, "coding practical exam");
        assert_eq!(s.route(&cs), Route::PracticalCsExam);

        let math = classification("math", LearningPhase::Primary, "math practical exam");
        assert_eq!(s.route(&math), Route::PracticalExam);

        let theory = classification("history", LearningPhase::Middle, "history theory exam");
        assert_eq!(s.route(&theory), Route::TheoryExam);

        let plain = classification("General", LearningPhase::Unknown, "exam hall");
        assert_eq!(s.route(&plain), Route::ExamPrompt);
    }

    #[test]
    fn test_group_routes() {
        let s = selector();
        let science = classification("biology", LearningPhase::HigherSecondary, "biology group work");
        assert_eq!(s.route(&science), Route::ScienceGroupSpace);

        let cs = classification("computer science", LearningPhase::HigherSecondary, "group activity for coding");
        assert_eq!(s.route(&cs), Route::CsGroupWorkspace);

        let other = classification("art", LearningPhase::Middle, "art group activity");
        assert_eq!(s.route(&other), Route::GroupActivitySpace);
    }

    #[test]
    fn test_lab_and_classroom_routes() {
        let s = selector();
        let lab = s.select(&classification("chemistry", LearningPhase::HigherSecondary, "chemistry lab"));
        assert_eq!(lab.route, Route::SubjectLab);
        assert_eq!(lab.text, templates::chemistry_lab());

        let cs = s.select(&classification("computer science", LearningPhase::HigherSecondary, "grade 11 cs classroom"));
        assert_eq!(cs.route, Route::CsClassroom);
        assert_eq!(cs.text, templates::cs_classroom(Some("11")));
    }

    #[test]
    fn test_alias_subject_normalized() {
        let s = selector();
        let c = classification("coding", LearningPhase::HigherSecondary, "coding lab");
        let rec = s.select(&c);
        assert_eq!(rec.route, Route::SubjectLab);
        assert_eq!(rec.text, templates::cs_lab());
    }

    #[test]
    fn test_clarification_for_senior_lab_subject() {
        let s = selector();
        let c = classification("physics", LearningPhase::HigherSecondary, "physics setup");
        let rec = s.select(&c);
        assert_eq!(rec.route, Route::Clarification);
        assert!(rec.text.contains("physics classroom or lab setup"));

        let junior = classification("physics", LearningPhase::Primary, "physics setup");
        assert_eq!(s.route(&junior), Route::GenericClassroom);
    }

    #[test]
    fn test_generic_fallback() {
        let s = selector();
        let c = classification("General", LearningPhase::EarlyChildhood, "kg1 class");
        let rec = s.select(&c);
        assert_eq!(rec.route, Route::GenericClassroom);
        assert!(rec.text.contains("General in Early Childhood Phase"));
    }
}
