//! Suggestion generator: fixed condition → suggestion table, truncated to a cap.

use serde::{Deserialize, Serialize};

use crate::optimization::profile::{SuggestionCondition, SuggestionRuleSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Skill,
    Experience,
    Methodology,
    Impact,
    Content,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub action: String,
}

impl SuggestionCondition {
    fn holds(&self, resume_text: &str, missing: &[String]) -> bool {
        match self {
            SuggestionCondition::KeywordMissing { keyword } => {
                missing.iter().any(|m| m.eq_ignore_ascii_case(keyword))
            }
            SuggestionCondition::ResumeLacksAll { markers } => {
                let lowered = resume_text.to_lowercase();
                !markers
                    .iter()
                    .any(|marker| lowered.contains(&marker.to_lowercase()))
            }
            // Counts newline-separated segments, so "" is one line.
            SuggestionCondition::FewerLinesThan { lines } => {
                resume_text.split('\n').count() < *lines
            }
        }
    }
}

/// Emits one suggestion per true condition, in table order, keeping the first `cap`.
/// No built-in condition reads the job description.
pub fn generate_suggestions(
    rules: &[SuggestionRuleSpec],
    resume_text: &str,
    _job_description: &str,
    missing: &[String],
    cap: usize,
) -> Vec<Suggestion> {
    rules
        .iter()
        .filter(|rule| rule.condition.holds(resume_text, missing))
        .map(|rule| rule.suggestion.clone())
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::profile::TuningProfile;
    use proptest::prelude::*;

    fn rules() -> Vec<SuggestionRuleSpec> {
        TuningProfile::default().suggestion_rules
    }

    fn long_resume() -> String {
        let mut lines = vec!["Improved build times by 40%".to_string()];
        lines.extend((0..20).map(|i| format!("line {i}")));
        lines.join("\n")
    }

    #[test]
    fn test_all_default_conditions_fire() {
        let missing = vec![
            "TypeScript".to_string(),
            "Testing".to_string(),
            "Agile".to_string(),
        ];
        let out = generate_suggestions(&rules(), "short", "", &missing, 5);
        let titles: Vec<_> = out.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Add TypeScript Experience",
                "Highlight Testing Experience",
                "Mention Agile Experience",
                "Add Quantifiable Achievements",
                "Expand Content",
            ]
        );
        assert_eq!(out[0].priority, Priority::High);
        assert_eq!(out[4].priority, Priority::Low);
    }

    #[test]
    fn test_cap_keeps_earliest() {
        let missing = vec!["TypeScript".to_string(), "Testing".to_string()];
        let out = generate_suggestions(&rules(), "short", "", &missing, 2);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, SuggestionKind::Skill);
        assert_eq!(out[1].kind, SuggestionKind::Experience);
    }

    #[test]
    fn test_strong_long_resume_gets_nothing() {
        let out = generate_suggestions(&rules(), &long_resume(), "", &[], 5);
        assert!(out.is_empty());
    }

    #[test]
    fn test_achievement_markers_case_insensitive() {
        let out = generate_suggestions(&rules(), "ACHIEVED great things", "", &[], 5);
        assert!(out.iter().all(|s| s.kind != SuggestionKind::Impact));
    }

    #[test]
    fn test_empty_resume_counts_as_one_line() {
        let cond = SuggestionCondition::FewerLinesThan { lines: 2 };
        assert!(cond.holds("", &[]));
        assert!(!cond.holds("a\nb", &[]));
    }

    #[test]
    fn test_suggestion_serializes_type_field() {
        let s = &rules()[0].suggestion;
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["type"], "skill");
        assert_eq!(json["priority"], "high");
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_cap(
            resume in ".{0,300}",
            copies in 1usize..6,
            cap in 0usize..8,
        ) {
            let mut table = vec![];
            for _ in 0..copies {
                table.extend(rules());
            }
            let missing = vec![
                "TypeScript".to_string(),
                "Testing".to_string(),
                "Agile".to_string(),
            ];
            let out = generate_suggestions(&table, &resume, "", &missing, cap);
            prop_assert!(out.len() <= cap);
        }
    }
}
