//! Generic classroom recommendation.
//!
//! Fills phase and subject lookup tables into one text template. Room
//! parameters come from a sampled dataset row when one exists for the
//! phase; otherwise the capacity band is chosen at random.

use std::sync::Arc;

use crate::classify::LearningPhase;

use super::chooser::Chooser;
use super::dataset::{DatasetRow, RecommendationDataset};
use super::templates::title_case;

const LEARNING_STYLES: &[&str] = &["Auditory", "Read/Write", "Visual", "Kinesthetic"];
const NATURAL_LIGHT: &str = "Ensure large windows for daylight integration.";

/// Classroom capacity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityBand {
    Small,
    Medium,
    Large,
}

impl CapacityBand {
    pub const ALL: [CapacityBand; 3] = [CapacityBand::Small, CapacityBand::Medium, CapacityBand::Large];

    /// Parse a dataset size such as "Small" or "medium room".
    pub fn parse(size: &str) -> Option<Self> {
        let size = size.to_lowercase();
        if size.contains("small") {
            Some(CapacityBand::Small)
        } else if size.contains("medium") {
            Some(CapacityBand::Medium)
        } else if size.contains("large") {
            Some(CapacityBand::Large)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CapacityBand::Small => "Small (10-20 students)",
            CapacityBand::Medium => "Medium (20-30 students)",
            CapacityBand::Large => "Large (>30 students)",
        }
    }

    pub fn dimensions(&self) -> &'static str {
        match self {
            CapacityBand::Small => "6m x 6m",
            CapacityBand::Medium => "8m x 8m",
            CapacityBand::Large => "10m x 10m",
        }
    }

    pub fn tables(&self) -> &'static str {
        match self {
            CapacityBand::Small => "5-8 tables (2-3 students per table)",
            CapacityBand::Medium => "8-12 tables (2-3 students per table)",
            CapacityBand::Large => "12+ tables (2-3 students per table)",
        }
    }

    pub fn chairs(&self) -> &'static str {
        match self {
            CapacityBand::Small => "10-20 chairs",
            CapacityBand::Medium => "20-30 chairs",
            CapacityBand::Large => "30+ chairs",
        }
    }

    pub fn area(&self) -> &'static str {
        match self {
            CapacityBand::Small => "30-40 sqm",
            CapacityBand::Medium => "40-60 sqm",
            CapacityBand::Large => "60+ sqm",
        }
    }
}

fn default_color(phase: LearningPhase) -> &'static str {
    match phase {
        LearningPhase::EarlyChildhood => "Light Yellow",
        LearningPhase::Primary => "Light Blue",
        LearningPhase::Middle => "White",
        LearningPhase::Secondary => "Light Gray",
        LearningPhase::HigherSecondary => "White",
        _ => "Neutral",
    }
}

fn default_shape(phase: LearningPhase) -> &'static str {
    match phase {
        LearningPhase::EarlyChildhood => "Circular",
        LearningPhase::Secondary => "Square",
        LearningPhase::HigherSecondary => "Octagonal",
        _ => "Rectangular",
    }
}

fn whiteboard_size(phase: LearningPhase) -> &'static str {
    match phase {
        LearningPhase::EarlyChildhood => "0.9m x 0.6m",
        LearningPhase::Primary => "1.2m x 0.9m",
        LearningPhase::Middle => "1.8m x 1.2m",
        LearningPhase::Secondary => "2.4m x 1.2m",
        LearningPhase::HigherSecondary => "3m x 1.5m",
        _ => "Standard size",
    }
}

fn panel_size(phase: LearningPhase) -> &'static str {
    match phase {
        LearningPhase::EarlyChildhood => "1.2m x 0.9m (at 0.6m height)",
        LearningPhase::Primary => "1.5m x 1.2m (at 0.9m height)",
        LearningPhase::Middle => "1.8m x 1.2m (at 1.2m height)",
        LearningPhase::Secondary => "2.4m x 1.2m (at 1.5m height)",
        LearningPhase::HigherSecondary => "3m x 1.5m (at 1.5m height)",
        _ => "Standard size",
    }
}

fn seating_description(arrangement: &str) -> &'static str {
    match arrangement {
        "Clustered" => "Groups of 4-6 students per table for collaboration.",
        "Rows" => "Traditional row seating facing instructor.",
        "U-Shape" => "U-shaped arrangement for discussions.",
        "Lab" => "Large tables with high chairs for experiments.",
        _ => "Standard individual desks.",
    }
}

fn soundproofing(noise: &str) -> &'static str {
    match noise {
        "Low" => "Minimal soundproofing needed, basic acoustic panels.",
        "Medium" => "Moderate soundproofing using ceiling tiles and wall panels.",
        "High" => "Enhanced soundproofing for quiet environments.",
        _ => "Standard acoustic treatment.",
    }
}

fn artificial_lighting(lighting: &str) -> &'static str {
    match lighting {
        "Dim" => "200-300 lux",
        "Bright" => "500-700 lux",
        _ => "300-500 lux",
    }
}

fn neuro_architecture_insight(subject: &str) -> &'static str {
    match subject {
        "math" => "A structured environment with clearly defined seating to support focus and problem-solving.",
        "science" => "Flexible layout with demonstration areas and visual aids for scientific concepts.",
        "art" => "An open, flexible layout with space for creative expression and movement.",
        "english" => "Circular or U-shaped seating to encourage discussions and storytelling.",
        "history" => "Rows or group tables to facilitate storytelling and collaborative analysis.",
        "computer science" => "Workstations with ergonomic chairs and proper screen positioning for coding.",
        "biology" => "Flexible space that can accommodate both lectures and occasional specimen observation.",
        _ => "Standard classroom layout.",
    }
}

fn neuro_aesthetics_insight(subject: &str, score: &str) -> String {
    let insight = match subject {
        "math" => "Calm and structured environment with cool colors like blue to enhance logical thinking.",
        "science" => "Neutral colors with bright lighting to support visual learning.",
        "art" => "Vibrant, warm colors like yellow and orange to inspire creativity.",
        "english" => "Neutral tones with warm lighting to create a cozy reading environment.",
        "history" => "Earthy colors like brown and beige to create a traditional, immersive feel.",
        "computer science" => "Cool-toned lighting to reduce eye strain during screen time.",
        "biology" => "Natural greens and earth tones to create a connection with biological concepts.",
        _ => {
            return format!(
                "Neuro-aesthetic score of {} ensures optimal cognitive engagement.",
                score
            )
        }
    };
    insight.to_string()
}

/// Research reference quoted at the end of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub text: &'static str,
    pub link: &'static str,
}

pub fn case_study(subject: &str) -> CaseStudy {
    let (text, link) = match subject {
        "computer science" => (
            "A Stanford study found that computer science students in ergonomically optimized labs with dual monitor setups showed 28% faster problem-solving times and 35% better code quality.",
            "https://cs.stanford.edu/classroom-design-study",
        ),
        "biology" => (
            "A study in Finland showed that students in well-lit, interactive biology labs performed 20% better in retention tests.",
            "https://www.researchgate.net/publication/341594986_Virtual_laboratory_for_enhancing_students%27_understanding_on_abstract_biology_concepts_and_laboratory_skills_a_systematic_review",
        ),
        "math" => (
            "Research in the International Journal of Science and Mathematics Education shows diagrams support conceptual learning and problem-solving, increasing outcomes by 35%.",
            "https://link.springer.com/article/10.1007/s10763-022-10312-3",
        ),
        "history" => (
            "Teachers report complete immersion during VR/AR history lessons, with student engagement up by 50%.",
            "https://www.classvr.com/blog/engaging-the-digital-generation-how-vr-ar-transforms-student-engagement/",
        ),
        "science" => (
            "Flexible classroom designs support team-based projects and hands-on learning, which are essential in STEM education.",
            "https://www.americanmodular.com/your-guide-to-effective-stem-classroom-design/",
        ),
        "english" => (
            "Adaptable furniture solutions lead to a 32% increase in student participation and a 32% improvement in retention of learning.",
            "https://files.eric.ed.gov/fulltext/EJ1304613.pdf",
        ),
        "art" => (
            "Classroom color influences student behavior and creativity; appropriate colors reduce distractions and foster artistic expression.",
            "https://www.educasciences.org/learning-environment-design-classroom-layout-and-design",
        ),
        "music" => (
            "Optimal classroom acoustics improve speech intelligibility and concentration, which is crucial in music education.",
            "https://www.rockfon.co.uk/sectors/education/classrooms/",
        ),
        "pe" => (
            "A study from Harvard University found that students engaging in outdoor physical education showed a 25% increase in focus and cognitive function.",
            "https://www.health.harvard.edu/mind-and-mood/exercise-can-boost-your-memory-and-thinking-skills",
        ),
        _ => (
            "Research compiled by the University of Nebraska–Lincoln shows that thermal discomfort negatively impacts student learning, and that perceived classroom conditions affect motivation, attendance, and satisfaction.",
            "https://www.researchgate.net/publication/344384174_Classrooms%27_indoor_environmental_conditions_affecting_the_academic_achievement_of_students_and_teachers_in_higher_education_A_systematic_literature_review",
        ),
    };
    CaseStudy { text, link }
}

/// Room parameters resolved before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RoomProfile {
    band: CapacityBand,
    seating: String,
    noise: String,
    lighting: String,
    aesthetic_score: String,
}

impl RoomProfile {
    fn from_row(row: &DatasetRow) -> Self {
        let field = |value: &Option<String>, default: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            band: row
                .classroom_size
                .as_deref()
                .and_then(CapacityBand::parse)
                .unwrap_or(CapacityBand::Medium),
            seating: field(&row.seating_arrangement, "Standard"),
            noise: field(&row.noise_levels, "Medium"),
            lighting: field(&row.lighting, "Standard"),
            aesthetic_score: field(&row.neuro_aesthetics, "5"),
        }
    }

    fn generated(band: CapacityBand) -> Self {
        Self {
            band,
            seating: "Standard".to_string(),
            noise: "Medium".to_string(),
            lighting: "Standard".to_string(),
            aesthetic_score: "5".to_string(),
        }
    }
}

/// Renders the generic classroom recommendation
pub struct ClassroomGenerator {
    dataset: Arc<RecommendationDataset>,
    chooser: Arc<dyn Chooser>,
}

impl ClassroomGenerator {
    pub fn new(dataset: Arc<RecommendationDataset>, chooser: Arc<dyn Chooser>) -> Self {
        Self { dataset, chooser }
    }

    fn profile(&self, phase: LearningPhase) -> RoomProfile {
        match self.dataset.sample(phase, self.chooser.as_ref()) {
            Some(row) => RoomProfile::from_row(row),
            None => {
                let index = self.chooser.choose_index(CapacityBand::ALL.len());
                RoomProfile::generated(CapacityBand::ALL[index % CapacityBand::ALL.len()])
            }
        }
    }

    pub fn generate(&self, phase: LearningPhase, subject: &str) -> String {
        let profile = self.profile(phase);
        let band = profile.band;
        let color = default_color(phase);
        let study = case_study(subject);
        let subject_title = title_case(subject);
        let phase_title = title_case(phase.label());

        format!(
            r#"========== Recommended Classroom Setup for {subject_title} in {phase_title} Phase ==========

**Learner Profile:**
- Target Learners: {styles}
- Learning Style: Reinforcement-based environment that encourages continuous learning and practice.

**Neuro-Architecture:**
- Classroom Size: {dimensions}
  (Explanation: Sufficient space for movement, collaboration, and hands-on activities.)
- Seating Arrangement: {seating}
  (Explanation: Provides a personal workspace for each student, supporting independent learning and focus.)
- Classroom Shape: {shape}
  (Explanation: Offers a structured, clear environment that promotes organization and effective learning.)

**Classroom Furniture Specifications:**
- Whiteboard Size: {whiteboard}
- Display Panel Size: {panel}
- Recommended for class size: {band_label}
  • Tables: {tables}
  • Seating Capacity: {chairs}
  • Recommended Floor Area: {area}
- Neuro-Architecture Insight: {architecture}

**Neuro-Aesthetics:**
- Classroom Color: {color}
  (Explanation: {color} is used to enhance focus and comfort.)
- Noise Levels: {noise}
  (Explanation: Helps minimize distractions and maintain focus.)
- Lighting: Artificial: {artificial}, Natural: {natural}
  (Explanation: Bright yet comfortable lighting that supports visual engagement while reducing eye strain.)
- Neuro-Aesthetic Insight: {aesthetics}

**Real-World Case Study:** {study_text}
**[Read more]({study_link})**
========================================================
**Conclusion:**
With these recommendations, the classroom environment for {subject_title} in {phase_title} phase will support both academic achievement and student well-being. The setup encourages collaboration, focus, and engagement, allowing students to thrive in a space that suits their learning style and needs.
========================================================"#,
            styles = LEARNING_STYLES.join(", "),
            dimensions = band.dimensions(),
            seating = seating_description(&profile.seating),
            shape = default_shape(phase),
            whiteboard = whiteboard_size(phase),
            panel = panel_size(phase),
            band_label = band.label(),
            tables = band.tables(),
            chairs = band.chairs(),
            area = band.area(),
            architecture = neuro_architecture_insight(subject),
            noise = soundproofing(&profile.noise),
            artificial = artificial_lighting(&profile.lighting),
            natural = NATURAL_LIGHT,
            aesthetics = neuro_aesthetics_insight(subject, &profile.aesthetic_score),
            study_text = study.text,
            study_link = study.link,
        )
    }
}
