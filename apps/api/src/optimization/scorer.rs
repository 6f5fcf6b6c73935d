//! Match scorer: partitions job-description keywords into matched/missing and
//! converts the match ratio into an ATS score.

use serde::{Deserialize, Serialize};

use crate::optimization::profile::ScoringPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Job-description keywords also present in the resume, in JD order.
    pub matched: Vec<String>,
    /// Job-description keywords absent from the resume, in JD order.
    pub missing: Vec<String>,
    /// round(matched / jd keywords × 100); 0 when the JD has no keywords.
    pub raw_score: u32,
    /// Raw score plus bonus, capped. 0 when the JD has no keywords.
    pub final_score: u32,
    /// False when the job description yielded no recognized keywords.
    pub scored: bool,
}

/// Every JD keyword lands in exactly one of `matched` / `missing`.
pub fn score_match(
    resume_keywords: &[String],
    jd_keywords: &[String],
    policy: &ScoringPolicy,
) -> MatchResult {
    let (matched, missing): (Vec<String>, Vec<String>) = jd_keywords
        .iter()
        .cloned()
        .partition(|kw| resume_keywords.iter().any(|r| r.eq_ignore_ascii_case(kw)));

    if jd_keywords.is_empty() {
        return MatchResult {
            matched,
            missing,
            raw_score: 0,
            final_score: 0,
            scored: false,
        };
    }

    let raw_score = ((matched.len() as f64 / jd_keywords.len() as f64) * 100.0).round() as u32;
    let final_score = apply_policy(raw_score, policy);

    MatchResult {
        matched,
        missing,
        raw_score,
        final_score,
        scored: true,
    }
}

fn apply_policy(raw_score: u32, policy: &ScoringPolicy) -> u32 {
    raw_score.saturating_add(policy.bonus).min(policy.cap)
}
