//! Stored job descriptions, tagged with job-posting keywords and required skills
//! whenever their text is written.

pub mod handlers;
pub mod skills;

use crate::optimization::vocabulary::Vocabulary;

/// Keywords and required skills derived from a job description's text.
#[derive(Debug, Clone, PartialEq)]
pub struct JobAnalysis {
    pub keywords: Vec<String>,
    pub required_skills: Vec<String>,
}

pub fn analyze(text: &str, vocabulary: &Vocabulary) -> JobAnalysis {
    JobAnalysis {
        keywords: vocabulary.extract(text),
        required_skills: skills::extract_required_skills(text),
    }
}
