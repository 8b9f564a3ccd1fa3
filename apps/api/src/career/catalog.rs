//! Static career table and roadmap served when the hosted model is not
//! available.

use crate::career::models::{
    CareerOption, CareerRoadmap, RoadmapPhase, RoadmapStep, SalaryBenchmarks,
};

type Row = (&'static str, &'static str, &'static str, [&'static str; 3]);

/// Keyed career suggestions. Order matters for partial matching.
const CAREER_TABLE: &[(&str, &[Row])] = &[
    (
        "python",
        &[
            ("AI Engineer", "$120k-$180k", "High", ["Python", "ML", "TensorFlow"]),
            ("Backend Developer", "$90k-$140k", "High", ["Python", "Django", "API"]),
            ("Data Scientist", "$110k-$160k", "Very High", ["Python", "ML", "Statistics"]),
            ("DevOps Engineer", "$100k-$150k", "High", ["Python", "AWS", "Docker"]),
        ],
    ),
    (
        "design",
        &[
            ("UI/UX Designer", "$75k-$120k", "High", ["Figma", "User Research", "Prototyping"]),
            ("Product Designer", "$90k-$140k", "High", ["Design Systems", "Strategy", "UX"]),
            ("Graphic Designer", "$50k-$80k", "Medium", ["Adobe Suite", "Branding", "Typography"]),
        ],
    ),
    (
        "security",
        &[
            ("Cyber Security Analyst", "$85k-$130k", "Very High", ["Security Tools", "Threat Analysis", "Incident Response"]),
            ("Penetration Tester", "$100k-$150k", "High", ["Ethical Hacking", "Vulnerability Assessment", "Reporting"]),
            ("Security Architect", "$120k-$180k", "Very High", ["Security Design", "Risk Assessment", "Compliance"]),
        ],
    ),
    (
        "javascript",
        &[
            ("Frontend Developer", "$80k-$130k", "High", ["React", "Vue", "TypeScript"]),
            ("Full Stack Developer", "$95k-$150k", "High", ["Node.js", "React", "Database"]),
            ("React Developer", "$85k-$135k", "High", ["React", "Redux", "Next.js"]),
        ],
    ),
    (
        "java",
        &[
            ("Java Developer", "$85k-$130k", "Medium", ["Java", "Spring", "Microservices"]),
            ("Android Developer", "$80k-$125k", "Medium", ["Java", "Kotlin", "Android SDK"]),
        ],
    ),
    (
        "react",
        &[
            ("React Developer", "$85k-$135k", "High", ["React", "Redux", "Next.js"]),
            ("Frontend Engineer", "$80k-$130k", "High", ["React", "TypeScript", "CSS"]),
        ],
    ),
    (
        "node",
        &[
            ("Backend Developer", "$90k-$140k", "High", ["Node.js", "Express", "API"]),
            ("Full Stack Developer", "$95k-$150k", "High", ["Node.js", "React", "Database"]),
        ],
    ),
    (
        "data",
        &[
            ("Data Scientist", "$110k-$160k", "Very High", ["Python", "ML", "Statistics"]),
            ("Data Analyst", "$70k-$110k", "Medium", ["SQL", "Excel", "Python"]),
            ("Data Engineer", "$100k-$150k", "High", ["Python", "Spark", "Big Data"]),
        ],
    ),
    (
        "cloud",
        &[
            ("Cloud Engineer", "$100k-$150k", "Very High", ["AWS", "Azure", "Docker"]),
            ("DevOps Engineer", "$100k-$150k", "High", ["CI/CD", "Kubernetes", "AWS"]),
        ],
    ),
    (
        "marketing",
        &[
            ("Digital Marketer", "$50k-$90k", "Medium", ["SEO", "Social Media", "Analytics"]),
            ("Marketing Analyst", "$60k-$100k", "Medium", ["Data Analysis", "Campaigns", "Reporting"]),
        ],
    ),
    (
        "sales",
        &[
            ("Sales Representative", "$50k-$100k", "Medium", ["Communication", "CRM", "Negotiation"]),
            ("Business Development", "$70k-$120k", "Medium", ["Strategy", "Networking", "Sales"]),
        ],
    ),
    (
        "management",
        &[
            ("Project Manager", "$80k-$130k", "Medium", ["Agile", "Leadership", "Planning"]),
            ("Product Manager", "$100k-$160k", "High", ["Strategy", "Product Development", "Analytics"]),
        ],
    ),
];

/// Exact key, then the first key that contains or is contained in `skill`,
/// then a templated pair built from the skill itself.
pub fn careers_for(skill: &str) -> Vec<CareerOption> {
    let exact = CAREER_TABLE.iter().find(|(key, _)| *key == skill);
    let partial = || {
        CAREER_TABLE
            .iter()
            .find(|(key, _)| key.contains(skill) || skill.contains(key))
    };

    match exact.or_else(partial) {
        Some((_, rows)) if !skill.is_empty() => rows.iter().map(to_option).collect(),
        _ => templated(skill),
    }
}

fn to_option(row: &Row) -> CareerOption {
    let (title, salary, growth, skills) = row;
    CareerOption {
        title: title.to_string(),
        salary: salary.to_string(),
        growth: growth.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn templated(skill: &str) -> Vec<CareerOption> {
    vec![
        CareerOption {
            title: format!("{} Specialist", capitalize(skill)),
            salary: "$70k-$110k".to_string(),
            growth: "Stable".to_string(),
            skills: vec![
                skill.to_string(),
                "Productivity".to_string(),
                "Strategy".to_string(),
            ],
        },
        CareerOption {
            title: "Consultant".to_string(),
            salary: "$80k-$130k".to_string(),
            growth: "High".to_string(),
            skills: vec![
                "Analysis".to_string(),
                "Communication".to_string(),
                "Data".to_string(),
            ],
        },
    ]
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn fallback_salaries() -> SalaryBenchmarks {
    SalaryBenchmarks {
        entry: "$60k - $85k".to_string(),
        mid: "$95k - $140k".to_string(),
        senior: "$150k - $220k".to_string(),
    }
}

/// Three phases of three steps, with the skill woven into each video query.
pub fn fallback_phases(skill: &str) -> Vec<RoadmapPhase> {
    let step = |title: &str, notes: &str, video_query: String| RoadmapStep {
        title: title.to_string(),
        notes: notes.to_string(),
        video_query,
    };

    vec![
        RoadmapPhase {
            phase: "Foundation".to_string(),
            steps: vec![
                step(
                    "Core Fundamentals",
                    "Master the basic syntax and concepts of the field.",
                    format!("{skill} for absolute beginners tutorial"),
                ),
                step(
                    "Tooling & Setup",
                    "Set up your development environment and learn essential tools.",
                    format!("best {skill} development environment setup"),
                ),
                step(
                    "Simple Projects",
                    "Apply what you've learned by building small, practical examples.",
                    format!("beginner {skill} projects for portfolio"),
                ),
            ],
        },
        RoadmapPhase {
            phase: "Specialization".to_string(),
            steps: vec![
                step(
                    "Frameworks & Libraries",
                    "Pick the tools employers ask for most and learn them in depth.",
                    format!("{skill} frameworks every professional should know"),
                ),
                step(
                    "Real-World Integrations",
                    "Connect your work to databases, APIs and other services.",
                    format!("{skill} real world project walkthrough"),
                ),
                step(
                    "Collaboration",
                    "Work with others through code review, open source or team projects.",
                    format!("{skill} open source contribution guide"),
                ),
            ],
        },
        RoadmapPhase {
            phase: "Mastery".to_string(),
            steps: vec![
                step(
                    "Architecture & Design",
                    "Study how large systems in this field are structured and why.",
                    format!("advanced {skill} architecture patterns"),
                ),
                step(
                    "Performance & Quality",
                    "Learn to measure, profile and harden what you build.",
                    format!("{skill} performance optimization best practices"),
                ),
                step(
                    "Portfolio & Interviews",
                    "Polish a flagship project and prepare to discuss it in depth.",
                    format!("{skill} interview preparation"),
                ),
            ],
        },
    ]
}

pub fn fallback_tips() -> Vec<String> {
    [
        "Build a consistent learning habit",
        "Engage with the community",
        "Focus on project-based learning",
        "Keep your portfolio updated",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The complete offline roadmap for `skill`.
pub fn fallback_roadmap(skill: &str) -> CareerRoadmap {
    CareerRoadmap {
        skill_searched: skill.to_string(),
        market_outlook: "Stable growth with consistent demand.".to_string(),
        careers: careers_for(skill),
        detailed_roadmap: fallback_phases(skill),
        salary_benchmarks: fallback_salaries(),
        difficulty_rating: 6,
        improvement_tips: fallback_tips(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_beats_partial() {
        // "java" is also a substring of "javascript", which comes first.
        let careers = careers_for("java");
        assert_eq!(careers[0].title, "Java Developer");
    }

    #[test]
    fn test_partial_match() {
        assert_eq!(careers_for("data engineering")[0].title, "Data Scientist");
        assert_eq!(careers_for("cyber security")[0].title, "Cyber Security Analyst");
    }

    #[test]
    fn test_unknown_skill_is_templated() {
        let careers = careers_for("underwater welding");
        assert_eq!(careers.len(), 2);
        assert_eq!(careers[0].title, "Underwater welding Specialist");
        assert_eq!(careers[0].skills[0], "underwater welding");
        assert_eq!(careers[1].title, "Consultant");
    }

    #[test]
    fn test_fallback_roadmap_has_three_full_phases() {
        let roadmap = fallback_roadmap("rust");
        assert_eq!(roadmap.detailed_roadmap.len(), 3);
        assert!(roadmap.detailed_roadmap.iter().all(|p| p.steps.len() == 3));
        assert_eq!(
            roadmap.detailed_roadmap[0].steps[0].video_query,
            "rust for absolute beginners tutorial"
        );
        assert_eq!(roadmap.difficulty_rating, 6);
    }
}
