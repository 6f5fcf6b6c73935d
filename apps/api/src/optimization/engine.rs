//! Optimizer: the resume/JD pipeline: extract → score → rewrite → suggest.
//!
//! Pure and synchronous. `AppState` holds one compiled `Optimizer` behind an `Arc`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::optimization::profile::{ScoringPolicy, SuggestionRuleSpec, TuningProfile};
use crate::optimization::rewriter::Rewriter;
use crate::optimization::scorer::score_match;
use crate::optimization::suggestions::{generate_suggestions, Suggestion};
use crate::optimization::vocabulary::Vocabulary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub total: usize,
    pub matched: usize,
    pub missing: usize,
}

/// Built fresh per call; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_text: String,
    /// Reported score: raw + bonus, capped.
    pub ats_score: u32,
    pub raw_score: u32,
    /// False when the job description contained no recognized keywords.
    pub scored: bool,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub keyword_analysis: KeywordAnalysis,
}

/// Reported scores never exceed this, whatever the profile says.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone)]
pub struct Optimizer {
    vocabulary: Vocabulary,
    rewriter: Rewriter,
    suggestion_rules: Vec<SuggestionRuleSpec>,
    policy: ScoringPolicy,
}

impl Optimizer {
    pub fn from_profile(profile: TuningProfile) -> Result<Self, AppError> {
        let vocabulary = Vocabulary::new(profile.vocabulary);
        if vocabulary.is_empty() {
            return Err(AppError::Profile("vocabulary cannot be empty".to_string()));
        }
        if profile.policy.cap > MAX_SCORE {
            return Err(AppError::Profile(format!(
                "policy cap must be at most {MAX_SCORE}, got {}",
                profile.policy.cap
            )));
        }
        let rewriter = Rewriter::compile(&profile.rewrite_rules)?;
        Ok(Self {
            vocabulary,
            rewriter,
            suggestion_rules: profile.suggestion_rules,
            policy: profile.policy,
        })
    }

    pub fn default_profile() -> Result<Self, AppError> {
        Self::from_profile(TuningProfile::default())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.vocabulary.extract(text)
    }

    pub fn optimize(&self, resume_text: &str, job_description: &str) -> OptimizationResult {
        let jd_keywords = self.vocabulary.extract(job_description);
        let resume_keywords = self.vocabulary.extract(resume_text);

        let scored = score_match(&resume_keywords, &jd_keywords, &self.policy);
        if !scored.scored {
            info!("Job description has no recognized keywords; score defaults to 0");
        }

        let optimized_text = self.rewriter.rewrite(resume_text, &scored.missing);
        let suggestions = generate_suggestions(
            &self.suggestion_rules,
            resume_text,
            job_description,
            &scored.missing,
            self.policy.max_suggestions,
        );

        info!(
            jd_keywords = jd_keywords.len(),
            matched = scored.matched.len(),
            ats_score = scored.final_score,
            suggestions = suggestions.len(),
            "Resume optimized"
        );

        OptimizationResult {
            optimized_text,
            ats_score: scored.final_score,
            raw_score: scored.raw_score,
            scored: scored.scored,
            keyword_analysis: KeywordAnalysis {
                total: jd_keywords.len(),
                matched: scored.matched.len(),
                missing: scored.missing.len(),
            },
            matching_keywords: scored.matched,
            missing_keywords: scored.missing,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimizer() -> Optimizer {
        Optimizer::default_profile().unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let result = optimizer().optimize("React, Node.js", "React, TypeScript, Testing, Agile");
        assert_eq!(result.matching_keywords, vec!["React"]);
        assert_eq!(result.missing_keywords, vec!["TypeScript", "Testing", "Agile"]);
        assert_eq!(result.raw_score, 25);
        assert_eq!(result.ats_score, 40);
        assert_eq!(
            result.keyword_analysis,
            KeywordAnalysis {
                total: 4,
                matched: 1,
                missing: 3
            }
        );
        assert_eq!(result.suggestions.len(), 5);
    }

    #[test]
    fn test_unrecognized_jd_does_not_panic() {
        let result = optimizer().optimize("React developer", "We need a barista");
        assert!(!result.scored);
        assert_eq!(result.ats_score, 0);
        assert_eq!(result.keyword_analysis.total, 0);
    }

    #[test]
    fn test_empty_resume() {
        let result = optimizer().optimize("", "React and TypeScript");
        assert_eq!(result.optimized_text, "");
        assert!(result.matching_keywords.is_empty());
        assert_eq!(result.ats_score, 15);
    }

    #[test]
    fn test_suggestions_capped_by_policy() {
        let mut profile = TuningProfile::default();
        profile.policy.max_suggestions = 1;
        let opt = Optimizer::from_profile(profile).unwrap();
        let result = opt.optimize("", "TypeScript Testing Agile");
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].title, "Add TypeScript Experience");
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let profile = TuningProfile {
            vocabulary: vec![],
            ..TuningProfile::default()
        };
        assert!(matches!(
            Optimizer::from_profile(profile),
            Err(AppError::Profile(_))
        ));
    }

    #[test]
    fn test_cap_above_hundred_rejected() {
        let mut profile = TuningProfile::default();
        profile.policy.cap = 500;
        profile.policy.bonus = 80;
        assert!(matches!(
            Optimizer::from_profile(profile),
            Err(AppError::Profile(_))
        ));
    }

    #[test]
    fn test_cap_of_hundred_accepted() {
        let mut profile = TuningProfile::default();
        profile.policy.cap = 100;
        profile.policy.bonus = 80;
        let opt = Optimizer::from_profile(profile).unwrap();
        assert_eq!(opt.optimize("React", "React").ats_score, 100);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = optimizer().optimize("JavaScript", "TypeScript");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["optimizedText"], "JavaScript/TypeScript");
        assert_eq!(json["atsScore"], 15);
        assert!(json["keywordAnalysis"]["total"].is_number());
        assert!(json["missingKeywords"].is_array());
    }
}
