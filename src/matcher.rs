//! Term matching for settings search.
//!
//! A query is split on whitespace into terms; a text matches when every term
//! is a substring of it (AND semantics). An empty term list matches anything.

/// Split a raw query into whitespace-delimited terms.
pub fn split_terms(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Case-insensitive AND match of `terms` against `text`.
pub fn matches<S: AsRef<str>>(text: &str, terms: &[S]) -> bool {
    let text = text.to_lowercase();
    terms
        .iter()
        .all(|term| text.contains(&term.as_ref().to_lowercase()))
}

/// Terms of one query, folded once so every node visit is a plain substring
/// test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    terms: Vec<String>,
    case_sensitive: bool,
}

impl QueryTerms {
    /// Parse a query into terms, folding case unless `case_sensitive` is set.
    pub fn parse(query: &str, case_sensitive: bool) -> Self {
        let terms = split_terms(query)
            .into_iter()
            .map(|term| {
                if case_sensitive {
                    term.to_string()
                } else {
                    term.to_lowercase()
                }
            })
            .collect();
        Self {
            terms,
            case_sensitive,
        }
    }

    /// The empty term list, which matches every text.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether every term occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        if self.case_sensitive {
            self.terms.iter().all(|term| text.contains(term.as_str()))
        } else {
            let text = text.to_lowercase();
            self.terms.iter().all(|term| text.contains(term.as_str()))
        }
    }
}
