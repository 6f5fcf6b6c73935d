//! Tuning profile: the data that drives the optimizer.
//!
//! Vocabulary, rewrite rules and suggestion rules are plain serde records so a
//! deployment can swap them via `TUNING_PROFILE_PATH` without touching code.
//! `TuningProfile::default()` carries the built-in tables from `defaults.rs`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::optimization::defaults::{
    ACHIEVEMENTS_SUGGESTION, ACHIEVEMENT_MARKERS, AGILE_RULE, AGILE_SUGGESTION, EXPAND_SUGGESTION,
    SHORT_RESUME_LINES, STYLE_RULES, TECH_VOCABULARY, TESTING_RULE, TESTING_SUGGESTION,
    TYPESCRIPT_RULE, TYPESCRIPT_SUGGESTION,
};
use crate::optimization::suggestions::{Priority, Suggestion, SuggestionKind};

/// When a rewrite rule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum RewriteCondition {
    Always,
    KeywordMissing { keyword: String },
    /// Keyword missing and `marker` absent (case-insensitive) from the text rewritten so far.
    KeywordMissingAndTextLacks { keyword: String, marker: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteRuleSpec {
    pub name: String,
    /// Regex; `replacement` uses regex expansion syntax (`$1`).
    pub pattern: String,
    pub replacement: String,
    pub condition: RewriteCondition,
}

/// When a suggestion is emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum SuggestionCondition {
    KeywordMissing { keyword: String },
    /// None of the markers occur (case-insensitive) in the resume.
    ResumeLacksAll { markers: Vec<String> },
    FewerLinesThan { lines: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRuleSpec {
    pub condition: SuggestionCondition,
    pub suggestion: Suggestion,
}

/// Score adjustments and output caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Flat bonus added to the raw match percentage.
    pub bonus: u32,
    /// Upper bound on the reported score.
    pub cap: u32,
    pub max_suggestions: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            bonus: 15,
            cap: 95,
            max_suggestions: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningProfile {
    pub vocabulary: Vec<String>,
    pub rewrite_rules: Vec<RewriteRuleSpec>,
    pub suggestion_rules: Vec<SuggestionRuleSpec>,
    pub policy: ScoringPolicy,
}

impl TuningProfile {
    /// Reads a JSON profile. Sections absent from the file keep their built-in value.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tuning profile '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Tuning profile '{}' is not valid JSON", path.display()))
    }
}

impl Default for TuningProfile {
    fn default() -> Self {
        Self {
            vocabulary: TECH_VOCABULARY.iter().map(|k| k.to_string()).collect(),
            rewrite_rules: default_rewrite_rules(),
            suggestion_rules: default_suggestion_rules(),
            policy: ScoringPolicy::default(),
        }
    }
}

fn rule(spec: (&str, &str, &str), condition: RewriteCondition) -> RewriteRuleSpec {
    let (name, pattern, replacement) = spec;
    RewriteRuleSpec {
        name: name.to_string(),
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
        condition,
    }
}

fn default_rewrite_rules() -> Vec<RewriteRuleSpec> {
    let mut rules = vec![
        rule(
            TYPESCRIPT_RULE,
            RewriteCondition::KeywordMissing {
                keyword: "TypeScript".to_string(),
            },
        ),
        rule(
            TESTING_RULE,
            RewriteCondition::KeywordMissingAndTextLacks {
                keyword: "Testing".to_string(),
                marker: "test".to_string(),
            },
        ),
        rule(
            AGILE_RULE,
            RewriteCondition::KeywordMissingAndTextLacks {
                keyword: "Agile".to_string(),
                marker: "agile".to_string(),
            },
        ),
    ];
    rules.extend(
        STYLE_RULES
            .iter()
            .map(|&spec| rule(spec, RewriteCondition::Always)),
    );
    rules
}

fn suggestion(
    text: (&str, &str, &str),
    kind: SuggestionKind,
    priority: Priority,
) -> Suggestion {
    let (title, description, action) = text;
    Suggestion {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        priority,
        action: action.to_string(),
    }
}

fn missing(keyword: &str) -> SuggestionCondition {
    SuggestionCondition::KeywordMissing {
        keyword: keyword.to_string(),
    }
}

fn default_suggestion_rules() -> Vec<SuggestionRuleSpec> {
    vec![
        SuggestionRuleSpec {
            condition: missing("TypeScript"),
            suggestion: suggestion(TYPESCRIPT_SUGGESTION, SuggestionKind::Skill, Priority::High),
        },
        SuggestionRuleSpec {
            condition: missing("Testing"),
            suggestion: suggestion(
                TESTING_SUGGESTION,
                SuggestionKind::Experience,
                Priority::Medium,
            ),
        },
        SuggestionRuleSpec {
            condition: missing("Agile"),
            suggestion: suggestion(
                AGILE_SUGGESTION,
                SuggestionKind::Methodology,
                Priority::Medium,
            ),
        },
        SuggestionRuleSpec {
            condition: SuggestionCondition::ResumeLacksAll {
                markers: ACHIEVEMENT_MARKERS.iter().map(|m| m.to_string()).collect(),
            },
            suggestion: suggestion(ACHIEVEMENTS_SUGGESTION, SuggestionKind::Impact, Priority::High),
        },
        SuggestionRuleSpec {
            condition: SuggestionCondition::FewerLinesThan {
                lines: SHORT_RESUME_LINES,
            },
            suggestion: suggestion(EXPAND_SUGGESTION, SuggestionKind::Content, Priority::Low),
        },
    ]
}
