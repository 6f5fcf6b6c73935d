//! Required-skill phrases pulled out of free-form job description text.

use std::sync::OnceLock;

use regex::Regex;

const MAX_SKILLS: usize = 10;

/// "<skill> experience", "experience with <list>", "must have <list>".
const SKILL_PATTERNS: &[&str] = &[
    r"(?i)(\w+(?:\.\w+)*)\s*(?:experience|skills?|proficiency|knowledge)",
    r"(?i)(?:experience|proficient|skilled)\s+(?:in|with)\s+([\w\s,/+-]+)",
    r"(?i)(?:must|should|required)\s+(?:have|know|understand)\s+([\w\s,/+-]+)",
];

fn skill_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SKILL_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect()
    })
}

/// Returns up to ten distinct skill phrases, in first-seen order.
/// Each capture is split on `, & + /`; pieces of 3..=29 characters are kept.
pub fn extract_required_skills(text: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();

    for pattern in skill_patterns() {
        for caps in pattern.captures_iter(text) {
            let Some(list) = caps.get(1) else { continue };
            for piece in list.as_str().split([',', '&', '+', '/']) {
                let skill = piece.trim();
                let len = skill.chars().count();
                if len > 2 && len < 30 && !skills.iter().any(|s| s == skill) {
                    skills.push(skill.to_string());
                }
            }
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}
