//! Keyword vocabulary and extractor.
//!
//! Matching is plain substring containment on case-folded text: no tokenization,
//! no word boundaries. "Java" is found inside "JavaScript", "AI" inside "maintain".

/// Fixed, ordered list of recognized terms.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    folded: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let folded = terms.iter().map(|t| t.to_uppercase()).collect();
        Self { terms, folded }
    }

    pub fn from_static(terms: &[&str]) -> Self {
        Self::new(terms.iter().copied())
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the vocabulary terms whose folded text occurs anywhere in `text`,
    /// in vocabulary order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }
        let haystack = text.to_uppercase();
        self.terms
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| !folded.is_empty() && haystack.contains(folded.as_str()))
            .map(|(term, _)| term.clone())
            .collect()
    }
}
