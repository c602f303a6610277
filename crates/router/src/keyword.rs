// crates/router/src/keyword.rs

/// Marker-term detector layered on top of intent dispatch. Works on the raw
/// query text carried in the NLU result, independent of classification.
pub struct KeywordOverlay {
    term: String,
    fragment: String,
}

impl KeywordOverlay {
    pub fn new(term: &str, fragment: &str) -> Self {
        Self {
            term: term.to_lowercase(),
            fragment: fragment.to_string(),
        }
    }

    pub fn detect(&self, query: &str) -> bool {
        if self.term.is_empty() {
            return false;
        }
        query.to_lowercase().contains(&self.term)
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Default for KeywordOverlay {
    fn default() -> Self {
        Self::new("biene", "BIENE")
    }
}
