//! Heuristic rewriter: ordered regex substitutions, each gated on a condition.
//!
//! Rules run in profile order and each one sees the output of the previous.
//! A match that already sits inside the rule's own expansion is left alone, so
//! feeding the output back in with the same missing set is a no-op.

use regex::{Captures, Regex};

use crate::errors::AppError;
use crate::optimization::profile::{RewriteCondition, RewriteRuleSpec};

#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub name: String,
    regex: Regex,
    replacement: String,
    condition: RewriteCondition,
}

impl RewriteRule {
    pub fn compile(spec: &RewriteRuleSpec) -> Result<Self, AppError> {
        let regex = Regex::new(&spec.pattern).map_err(|e| {
            AppError::Profile(format!("rewrite rule '{}' has invalid pattern: {e}", spec.name))
        })?;
        Ok(Self {
            name: spec.name.clone(),
            regex,
            replacement: spec.replacement.clone(),
            condition: spec.condition.clone(),
        })
    }

    fn applies(&self, text: &str, missing: &[String]) -> bool {
        match &self.condition {
            RewriteCondition::Always => true,
            RewriteCondition::KeywordMissing { keyword } => is_missing(missing, keyword),
            RewriteCondition::KeywordMissingAndTextLacks { keyword, marker } => {
                is_missing(missing, keyword)
                    && !text.to_lowercase().contains(&marker.to_lowercase())
            }
        }
    }

    fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in self.regex.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            let expanded = self.expand(&caps);
            if already_expanded(text, m.start(), m.as_str(), &expanded) {
                continue;
            }
            out.push_str(&text[last..m.start()]);
            out.push_str(&expanded);
            last = m.end();
        }

        out.push_str(&text[last..]);
        out
    }

    fn expand(&self, caps: &Captures<'_>) -> String {
        let mut expanded = String::new();
        caps.expand(&self.replacement, &mut expanded);
        expanded
    }
}

fn is_missing(missing: &[String], keyword: &str) -> bool {
    missing.iter().any(|m| m.eq_ignore_ascii_case(keyword))
}

/// True when the match at `start` is already surrounded by `expanded`.
fn already_expanded(text: &str, start: usize, matched: &str, expanded: &str) -> bool {
    let Some(offset) = expanded.find(matched) else {
        return false;
    };
    let Some(window_start) = start.checked_sub(offset) else {
        return false;
    };
    text.get(window_start..)
        .is_some_and(|rest| rest.starts_with(expanded))
}

/// Ordered rule table.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: Vec<RewriteRule>,
}

impl Rewriter {
    pub fn compile(specs: &[RewriteRuleSpec]) -> Result<Self, AppError> {
        let rules = specs
            .iter()
            .map(RewriteRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rewrite(&self, original: &str, missing: &[String]) -> String {
        let mut text = original.to_string();
        for rule in &self.rules {
            if !rule.applies(&text, missing) {
                continue;
            }
            let rewritten = rule.apply(&text);
            if rewritten != text {
                tracing::debug!(rule = %rule.name, "rewrite rule applied");
            }
            text = rewritten;
        }
        text
    }
}
