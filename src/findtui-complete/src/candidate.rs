//! Candidate and result types returned by the completion engine.

use serde::Serialize;

use crate::prefix::common_prefix;

/// One completion proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Text shown in the candidate list.
    pub label: String,
    /// Text inserted when the candidate is accepted.
    pub value: String,
}

impl Candidate {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// A candidate whose label and inserted value are the same text.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
        }
    }
}

/// Candidates for one token plus the prefix they all share.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub candidates: Vec<Candidate>,
    /// Longest common prefix of the candidate values.
    pub common_prefix: String,
}

impl Completion {
    /// Wraps a candidate list, computing the common prefix over the values.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        let common_prefix = common_prefix(candidates.iter().map(|c| c.value.as_str()));
        Self {
            candidates,
            common_prefix,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Inserted values, in candidate order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.value.as_str())
    }
}

/// What a token is completed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionDomain {
    /// Filesystem entries.
    Path,
    /// Flags from the option catalog.
    OptionName,
}

impl CompletionDomain {
    /// Domain implied by the token itself: a leading `-` means a flag.
    pub fn infer(token: &str) -> Self {
        if token.starts_with('-') {
            CompletionDomain::OptionName
        } else {
            CompletionDomain::Path
        }
    }
}

/// A token to complete and, optionally, the domain to complete it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionQuery {
    pub token: String,
    /// `None` infers the domain from the token.
    pub domain: Option<CompletionDomain>,
}

impl CompletionQuery {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            domain: None,
        }
    }

    pub fn in_domain(mut self, domain: CompletionDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// The explicit domain, or the one inferred from the token.
    pub fn resolved_domain(&self) -> CompletionDomain {
        self.domain
            .unwrap_or_else(|| CompletionDomain::infer(&self.token))
    }
}
