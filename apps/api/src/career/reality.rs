//! Screens career goals that name fictional characters or fantasy roles.
//!
//! Keywords match whole words only, so "marketing" does not trip "king" and
//! "linkedin ads" does not trip "link".

use crate::career::models::{Alternative, RealityCheck};

const HELPFUL_TIP: &str = "💡 Focus on real-world careers that align with your interests. \
    What aspects of this character/goal excite you? The technology? Helping people? \
    Adventure? We can find a real career that matches!";

struct Redirect {
    trigger: &'static str,
    message: &'static str,
    alternatives: [(&'static str, &'static str); 4],
}

/// Specific redirects, checked in order before the generic one.
const REDIRECTS: &[Redirect] = &[
    Redirect {
        trigger: "iron man",
        message: "While becoming Iron Man isn't possible, you can pursue careers that inspired the character!",
        alternatives: [
            ("Robotics Engineer", "Design and build advanced robots and mechanical systems"),
            ("Aerospace Engineer", "Work on aircraft, spacecraft, and flight suit technology"),
            ("Mechanical Engineer", "Create innovative mechanical devices and systems"),
            ("Biomedical Engineer", "Develop prosthetics and human augmentation technology"),
        ],
    },
    Redirect {
        trigger: "superman",
        message: "Superman is fictional, but you can help people in powerful ways!",
        alternatives: [
            ("Emergency Medical Technician (EMT)", "Save lives and help people in emergencies"),
            ("Firefighter", "Rescue people from dangerous situations"),
            ("Aerospace Physicist", "Study flight, propulsion, and space exploration"),
            ("Social Worker", "Help vulnerable people and make a real difference"),
        ],
    },
    Redirect {
        trigger: "doraemon",
        message: "Doraemon is a cartoon character, but you can create amazing inventions!",
        alternatives: [
            ("Robotics Engineer", "Design and build robots and AI systems"),
            ("Inventor / Product Designer", "Create innovative gadgets and solve problems"),
            ("AI/ML Engineer", "Build intelligent systems and automation"),
            ("Mechanical Engineer", "Design mechanical devices and tools"),
        ],
    },
    Redirect {
        trigger: "wizard",
        message: "Magic isn't real, but science and technology can seem like magic!",
        alternatives: [
            ("Software Engineer", "Code can create 'magic' - apps, websites, AI"),
            ("Data Scientist", "Use data to predict the future and find hidden patterns"),
            ("Special Effects Artist", "Create visual magic for movies and games"),
            ("Chemist", "Mix compounds and create new materials (like alchemy!)"),
        ],
    },
];

static GENERIC_REDIRECT: Redirect = Redirect {
    trigger: "",
    message: "That's not a realistic career path, but let's find something practical that matches your interests!",
    alternatives: [
        ("Software Engineer", "Build technology that changes the world"),
        ("Creative Professional", "Work in animation, game design, or content creation"),
        ("Entrepreneur", "Create your own innovative business or product"),
        ("Research Scientist", "Push the boundaries of what's possible"),
    ],
};

/// Returns a redirect when `skill` names any blocklisted goal.
/// `skill` is expected lower-cased.
pub fn check(skill: &str, blocklist: &[String]) -> Option<RealityCheck> {
    let words = word_padded(skill);
    let hit = blocklist
        .iter()
        .any(|keyword| words.contains(&word_padded(keyword)));
    if !hit {
        return None;
    }

    let redirect = REDIRECTS
        .iter()
        .find(|r| words.contains(&word_padded(r.trigger)))
        .unwrap_or(&GENERIC_REDIRECT);

    Some(RealityCheck {
        skill_searched: skill.to_string(),
        is_realistic: false,
        message: redirect.message.to_string(),
        realistic_alternatives: redirect
            .alternatives
            .iter()
            .map(|(title, reason)| Alternative {
                title: title.to_string(),
                reason: reason.to_string(),
            })
            .collect(),
        helpful_tip: HELPFUL_TIP.to_string(),
    })
}

/// Lower-cases, turns punctuation other than `-` and `+` into spaces and
/// wraps the result in single spaces, so phrase lookup is a substring test.
fn word_padded(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '+' {
                c
            } else {
                ' '
            }
        })
        .collect();
    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    format!(" {joined} ")
}
