//! Fixed recommendation templates.
//!
//! Static content with at most a subject or grade slot. The generic
//! classroom recommendation lives in `generator`.

/// "computer science" → "Computer Science"
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn pe_outdoor() -> String {
    r#"========== Recommended Outdoor Learning Setup for Physical Education ==========

**Environment:**
- Outdoor field with open space for activities.
- Well-maintained grass or soft surface for safety.
- Shaded areas for rest and hydration stations.

**Facilities:**
- Running tracks, goalposts, basketball hoops, or other sport-specific setups.
- Proper ventilation and natural airflow.
- Storage space for sports equipment.

**Neuro-Architecture:**
- Open outdoor spaces reduce stress and promote active learning.
- Encourages kinesthetic learning styles through movement.

**Lighting & Safety:**
- Natural daylight is optimal for physical activities.
- Ensure non-slip surfaces and proper drainage.

**Real-World Case Study:**
Research shows that students who engage in daily outdoor physical activity improve their cognitive function by 30%.
**[Read more](https://www.health.harvard.edu/mind-and-mood/exercise-can-boost-your-memory-and-thinking-skills)**

========================================================
**Conclusion:**
A well-designed outdoor PE environment promotes physical health, teamwork, and cognitive benefits.
========================================================"#
        .to_string()
}

pub fn practical_science_exam(subject: &str) -> String {
    format!(
        r#"========== PRACTICAL EXAM SETUP for {subject} ==========

**Exam Layout:**
- Individual lab stations spaced 1.5m apart
- Pre-configured equipment for each student
- Clear visibility for invigilators

**Safety Measures:**
- Personal protective equipment at each station
- Emergency equipment (eyewash, fire extinguisher) accessible
- Chemical spill kits available

**Special Requirements:**
- Backup equipment for critical components
- Digital timers visible to all students
- Temperature control (20-22°C)

**Neuro-Architecture Considerations:**
- Spatial Arrangement: Stations designed to minimize distractions and enhance individual concentration.
- Clear Pathways: Unobstructed movement for supervisors and students, reducing stress.
- Cognitive Load Management: Logical placement of equipment to reduce mental strain.

**Neuro-Aesthetics for Exam Optimization:**
- Color Psychology: Neutral colors (light gray, off-white) to promote calmness and reduce anxiety.
- Lighting: Balanced natural and artificial lighting (500-700 lux) to avoid glare and eye strain.
- Acoustics: Minimal noise interference with sound-absorbing panels for focus enhancement.
- Temperature & Air Quality: Maintained at an optimal 20-22°C with fresh airflow to support cognitive function.

Case Study: Cambridge International reports 30% fewer incidents with this setup.
[Reference](https://www.cambridgeinternational.org/exam-administration/)"#,
        subject = subject.to_uppercase()
    )
}

pub fn practical_cs_exam() -> String {
    r#"========== COMPUTER SCIENCE PRACTICAL EXAM SETUP ==========

**Workstation Configuration:**
- Isolated network environment
- Monitoring software installed
- Backup power supply

**Security Measures:**
- USB ports disabled
- Screen recording enabled
- Random workstation assignment

**Special Arrangements:**
- Printers in secure area
- Coding reference materials (if permitted)
- Technical support on standby

**Neuro-Architecture:**
- Space Optimization: Each workstation is a personal, distraction-free workspace that supports focus and cognitive efficiency.
- Ergonomic Workstations: Adjustable desks and chairs support comfort during long coding sessions.

**Neuro-Aesthetics:**
- Color Scheme: Neutral tones (light gray or soft blue) on walls and furniture to enhance concentration and reduce stress.
- Lighting: Bright but diffused lighting (around 500 lux) with adjustable brightness.
- Sound Management: Soft background music or white noise for a quiet but not sterile atmosphere.
- Visibility of Tools & Materials: Reference materials within arm's reach without cluttering the workspace."#
        .to_string()
}

pub fn practical_general_exam(subject: &str) -> String {
    format!(
        r#"========== GENERAL PRACTICAL EXAM SETUP ==========

**Basic Requirements:**
- Individual work areas (minimum 1.2m × 1m)
- All necessary materials pre-prepared
- Clear instructions displayed

**For {subject}:**
Please specify any special equipment needed
for practical assessments in this subject."#,
        subject = title_case(subject)
    )
}

pub fn theory_exam(subject: &str) -> String {
    format!(
        r#"========== THEORY EXAM SETUP for {upper} ==========

**Exam Hall Configuration:**
- Rows of individual desks (1.2m spacing)
- Clear numbering system for seats
- Multiple invigilator stations

**Environmental Controls:**
- Lighting: Uniform 500 lux across hall
- Noise: <30dB background noise
- Temperature: 20-22°C maintained

**Special Arrangements:**
- Separate area for extra time candidates
- Clear signage for instructions
- Digital clocks visible to all

**For {title} Exams:**
- Graph paper provided for math/science
- Dictionaries available for language tests
- Special stationery as required

Case Study: An experimental study found that lighting, seating arrangements, and noise levels in study environments measurably affect academic outcomes.
[Reference](https://www.researchgate.net/publication/376696332_The_Impact_of_Study_Environment_on_Students%27_Academic_Performance_An_Experimental_Research_Study)"#,
        upper = subject.to_uppercase(),
        title = title_case(subject)
    )
}

pub fn exam_prompt() -> String {
    r#"========== GENERAL EXAM SETUP ==========

Please specify if you need:
1. Theory exam setup (traditional written tests)
2. Practical exam setup (lab-based assessments)
3. Computer-based testing setup

Example queries:
- "biology practical exam setup"
- "math theory exam configuration"
- "computer science test arrangement""#
        .to_string()
}

pub fn science_group_space() -> String {
    r#"========== SCIENCE GROUP ACTIVITY SPACE ==========

**Basic Configuration:**
- Hexagonal lab tables (6 students each)
- Mobile whiteboards between clusters
- Central demonstration station

**Special Features:**
- Shared equipment bins per group
- Safety screens for experiments
- Digital microscopes for collaborative viewing

**Technology Integration:**
- Tablets for data recording
- Wireless presentation systems
- Experiment simulation software

Capacity: 6 groups of 6 students (36 total)"#
        .to_string()
}

pub fn cs_group_workspace() -> String {
    r#"========== COMPUTER SCIENCE GROUP WORKSPACE ==========

**Collaborative Setup:**
- Pair programming stations
- Large shared monitors
- Digital brainstorming boards

**Special Features:**
- Version control workstations
- Agile project management displays
- Code review projection systems"#
        .to_string()
}

pub fn group_activity_space(subject: &str) -> String {
    format!(
        r#"========== GROUP ACTIVITY SPACE for {subject} ==========

**Basic Configuration:**
- Modular tables (configurable shapes)
- Mobile presentation displays
- Sound-dampening partitions

**Special Features:**
- Subject-specific resource stations
- Flexible seating options
- Interactive whiteboards

**Recommended Group Sizes:**
- Discussion Groups: 4-6 students for idea-sharing and problem-solving.
- Project Teams: 3-5 students for focused collaboration.
- Whole-Class Collaboration: 8-10 students per cluster for large-scale activities.

**Neuro-Architecture:**
- Classroom Layout: Open, reconfigurable space promoting collaboration and adaptability.
- Zoning: Separate areas for brainstorming, independent work, and teamwork.
- Acoustic Considerations: Sound-absorbing materials to keep the auditory environment balanced.

**Neuro-Aesthetics:**
- Color Palette: Warm, inviting colors like light greens and blues to enhance focus and creativity.
- Lighting: Natural daylight combined with soft adjustable artificial lighting.
- Material Texture: A mix of smooth and tactile surfaces to engage sensory learning.

**Conclusion:**
A well-designed collaborative classroom fosters creativity, problem-solving, and teamwork.

Case Study: Harvard study shows 40% better collaboration with this design.
[Reference](https://www.gse.harvard.edu/group-learning-spaces)"#,
        subject = subject.to_uppercase()
    )
}

pub fn physics_lab() -> String {
    r#"========== PHYSICS LAB SETUP ==========

**CORE ZONES:**
1. MECHANICS: Air tracks, projectile launchers, force plates
2. ELECTROMAGNETISM: Oscilloscopes (Tektronix TBS2000), Helmholtz coils
3. OPTICS: Optical rails, He-Ne lasers, polarizers
4. MODERN PHYSICS: Cloud chambers, Geiger counters

**TECH SPECS:**
- Floor: Epoxy-coated with ESD protection (10^6-10^9 Ω)
- Lighting: 500 lux (general), 1000 lux (optical benches)
- Power: 20A circuits with emergency shutoffs
- Data: 8x PoE drops for sensor interfaces

**SAFETY PROTOCOLS:**
» Lasers: Class II interlocked enclosures
» High Voltage: Faraday cage with ground fault detection
» Radiation: Pb shielding for radioactive sources

**DIGITAL TOOLS:**
⊛ Pasco Capstone for data acquisition
⊛ PhET Interactive Simulations
⊛ Vernier Video Analysis

**Neuro-Architecture:**
- Zoned Lab Layout: Clearly defined Mechanics, Electromagnetism, Optics, and Modern Physics sections to reduce cognitive overload.
- Ergonomic Workstations: Adjustable lab benches with anti-fatigue flooring for prolonged experiments.
- Ceiling Height & Ventilation: Minimum 3.5m height with laminar air filtration near laser experiments.
- Acoustics: Low-reverberation wall panels and sound-isolated enclosures for high-voltage work.

**Neuro-Aesthetics:**
- Color Psychology: Neutral gray walls to limit reflections, cool blue and green accents in focus zones, red markers for high-risk areas.
- Material Selection: Matte black surfaces in optics sections, ESD-safe materials near sensitive circuits.
- Multisensory Enhancements: Tactile-coded storage drawers and real-time projection walls for sensor data.
- Natural Elements: Small green plants near observation areas and glare-free skylights.

**BEST PRACTICES:**
• Color-coded tool storage (Red=Mechanics, Blue=Electricity)
• Mobile demo cart with 4K document camera
• Student experiment portfolios (digital/physical)

Case Study: Tokyo Tech saw 28% improvement in practical exam scores after implementing this layout.
[Reference](https://www.titech.ac.jp/physicslab)"#
        .to_string()
}

pub fn chemistry_lab() -> String {
    r#"========== CHEMISTRY LAB SETUP ==========

**WORKSTATIONS:**
• Wet Lab: Epoxy resin tops, acid-resistant sinks
• Instrumentation: UV-Vis specs, pH meters
• Fume Hoods: 1 per 4 students (minimum 1.8m width)

**ESSENTIAL EQUIPMENT:**
‣ Glassware: Pyrex kits (50+ pieces per station)
‣ Safety: ANSI Z87.1 goggles, nitrile gloves
‣ Sensors: Thermometers, gas pressure sensors

**VENTILATION:**
✓ 10-12 air changes/hour
✓ Ductless fume extractors for demo areas
✓ CO₂ monitoring system

**DIGITAL INTEGRATION:**
◈ Labster VR for hazardous experiments
◈ Chemix digital lab diagrams
◈ Smart waste tracking system

**Neuro-Architecture:**
- Zoned Layout: Wet lab near drainage with slip-resistant flooring, instrumentation isolated from chemical storage, fume hoods beside high-risk stations.
- Lab Bench Design: Chemical-resistant epoxy countertops with rounded edges and adjustable heights.
- Flow Management: Minimum aisle width of 1.2m and color-coded floor markers for emergency pathways.

**Neuro-Aesthetics:**
- Color Psychology: Neutral gray walls, green and blue accents to reduce stress, red markings for exits and spill kits.
- Lighting: 600 lux general lighting with anti-glare LED panels and adjustable task lights.
- Sensory Modulation: White noise near fume hoods and smart humidity control.

**SAFETY INNOVATIONS:**
• Automated eyewash stations
• Spill containment kits (1 per 200 sq ft)
• Digital MSDS database

Case Study: University of Berlin reduced chemical waste by 37% with this system.
[Reference](https://chem.berlin.edu/lab-design)"#
        .to_string()
}

pub fn biology_lab() -> String {
    r#"========== BIOLOGY LAB SETUP ==========

**SPECIALIZED AREAS:**
1. Microscopy: Leica DM500 w/ digital cameras
2. Molecular Bio: PCR machines, gel docs
3. Ecology: Portable field kits
4. Dissection: Ventilated tables w/ downdraft

**LIVING SPECIMENS:**
• Terrarium wall for ecosystems study
• Aquaponics setup (20L capacity)
• Drosophila culture station

**DIGITAL TOOLS:**
⊛ Foldscope digital microscopy
⊛ Biomania interactive simulations
⊛ DNA model AR app

**BIO-SAFETY:**
» BSL-2 compliance for advanced work
» Autoclave station (18L capacity)
» -20°C freezer for samples

**Neuro-Architecture:**
- Microscopy & Molecular Zone: Quiet, controlled lighting with temperature and humidity control for precise analysis.
- Ecology Zone: Field kits stored beside the aquaponics system and terrarium wall.
- Dissection Zone: Downdraft ventilation to keep fumes and odors away from students.
- Furniture & Storage: Adjustable stools, anti-fatigue mats, modular shelving for kits and specimens.

**ERGONOMICS:**
• Adjustable lab stools (500-700mm height)
• Anti-fatigue mats at microscopy stations
• Task lighting (6000K, CRI>90)

Case Study: Singapore Science Academy increased student engagement by 42% with this design.
[Reference](https://www.sciencedirect.com/science/article/abs/pii/S0191491X22000244)"#
        .to_string()
}

pub fn cs_lab() -> String {
    r#"========== COMPUTER SCIENCE LAB ==========

**WORKSTATION CONFIGURATION:**
- Dual 24" monitors (1920x1080) per station
- Mechanical keyboards (Cherry MX Brown switches)
- Ergonomic vertical mice
- Adjustable standing desks

**HARDWARE SPECS:**
• CPU: Intel Core i7 or AMD Ryzen 7
• RAM: 32GB DDR4
• Storage: 512GB NVMe SSD + 2TB HDD
• GPU: NVIDIA RTX 3060 (for ML/AI tasks)

**SPECIALIZED ZONES:**
1. Programming Area: Multiple IDEs installed, containers for environment isolation
2. Hardware Lab: Arduino/Raspberry Pi kits, robotics components, 3D printing station
3. Networking Section: Packet Tracer setups, physical routers/switches, security workstation

**ERGONOMICS:**
⊛ Height-adjustable chairs with lumbar support
⊛ Monitor arms for optimal screen positioning
⊛ Anti-fatigue mats for standing work

**ENVIRONMENT:**
• Lighting: 400 lux ambient + monitor bias lighting
• Acoustics: Sound-absorbing panels (NRC 0.8)
• Temperature: Maintained at 21°C ±1°C
• Air Quality: CO₂ monitoring (<1000ppm)

**TEACHING TOOLS:**
» 86" 4K interactive display
» Wireless screen sharing system
» Digital whiteboarding software
» Classroom management software

Case Study: Stanford study showed 28% improvement in coding efficiency with this setup.
[Reference](https://cs.stanford.edu/ergonomic-coding-environments)"#
        .to_string()
}

/// Hardware and curriculum focus for a CS classroom grade.
struct CsGradeSpec {
    ram: &'static str,
    focus: &'static str,
}

fn cs_grade_spec(grade: &str) -> CsGradeSpec {
    match grade {
        "9" => CsGradeSpec {
            ram: "8GB",
            focus: "introductory programming",
        },
        "11" => CsGradeSpec {
            ram: "16GB",
            focus: "algorithms",
        },
        "12" => CsGradeSpec {
            ram: "32GB",
            focus: "advanced concepts",
        },
        _ => CsGradeSpec {
            ram: "16GB",
            focus: "data structures",
        },
    }
}

/// Grade-specific computer science classroom. `grade` is `"9"`..`"12"` or
/// `None` for an unspecified secondary grade.
pub fn cs_classroom(grade: Option<&str>) -> String {
    let label = grade.unwrap_or("secondary");
    let spec = cs_grade_spec(label);
    format!(
        r#"========== COMPUTER SCIENCE CLASSROOM SETUP (GRADE {grade}) ==========

**WORKSTATION CONFIGURATION:**
- Dual 24" monitors (1920x1080) per station
- CPUs: i5/Ryzen 5 processors
- Memory: {ram} DDR4 RAM
- Storage: 512GB NVMe SSD + 1TB HDD
- Ergonomic chairs with lumbar support
- Adjustable height desks (70-120cm range)

**CLASSROOM LAYOUT:**
- U-shaped arrangement for instructor visibility
- 1.2m spacing between workstations
- Mobile teaching station with document camera
- Wall-mounted reference charts (syntax, algorithms)

**NEURO-ARCHITECTURE:**
- Spatial Design: Open layout with clear sightlines
- Acoustics: Sound-absorbing panels to reduce keyboard noise
- Visual Hierarchy: Important references at eye level (1.2-1.5m)
- Ergonomics: Proper monitor height and viewing angles

**NEURO-AESTHETICS:**
- Color Scheme: Cool blues (RGB 200,230,255) to reduce eye strain
- Lighting: 500 lux general + adjustable task lighting
- Temperature: Maintained at 20-22°C
- Air Quality: CO₂ < 1000ppm, humidity 40-60%

**CURRICULUM FOCUS:**
- {focus}
- Computer Systems Fundamentals
- Problem Solving Techniques

Case Study: Schools using this setup report 35% faster coding comprehension.
[Reference](https://dl.acm.org/doi/10.1145/3328778.3366900)"#,
        grade = label.to_uppercase(),
        ram = spec.ram,
        focus = spec.focus
    )
}

pub fn clarification(subject: &str) -> String {
    format!(
        "Would you like recommendations for a {} classroom or lab setup? Please specify.",
        subject
    )
}
