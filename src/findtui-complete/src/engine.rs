//! The completion engine: path and option-name completion behind one type.

use std::path::{Path, PathBuf};

use findtui_catalog::{Catalog, OptionDescriptor, VocabularyEntry};
use tracing::trace;

use crate::candidate::{Candidate, Completion, CompletionDomain, CompletionQuery};
use crate::path::list_candidates;

/// Completes path tokens against the filesystem and flag tokens against
/// the catalog vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Completer {
    vocabulary: Vec<VocabularyEntry>,
    base_dir: Option<PathBuf>,
}

impl Completer {
    /// Creates a completer over the flags of `catalog`.
    pub fn new(catalog: &Catalog) -> Self {
        Self::from_vocabulary(catalog.vocabulary().iter().cloned())
    }

    pub fn from_vocabulary(vocabulary: impl IntoIterator<Item = VocabularyEntry>) -> Self {
        Self {
            vocabulary: vocabulary.into_iter().collect(),
            base_dir: None,
        }
    }

    /// Resolves relative path tokens against `dir` instead of the current
    /// working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Completes a query in its explicit or inferred domain.
    pub fn complete(&self, query: &CompletionQuery) -> Completion {
        match query.resolved_domain() {
            CompletionDomain::Path => self.complete_path(&query.token),
            CompletionDomain::OptionName => self.complete_option_name(&query.token),
        }
    }

    /// Filesystem entries starting with the token. Case-sensitive, in
    /// listing order.
    pub fn complete_path(&self, token: &str) -> Completion {
        let base = self.base_dir.as_deref().unwrap_or_else(|| Path::new("."));
        let completion = Completion::from_candidates(list_candidates(base, token));
        trace!(token, count = completion.len(), "Path completion");
        completion
    }

    /// Catalog flags starting with the token, labelled with their
    /// description.
    pub fn complete_option_name(&self, token: &str) -> Completion {
        let candidates = self
            .vocabulary
            .iter()
            .filter(|entry| entry.flag.starts_with(token))
            .map(|entry| Candidate::new(entry.label.clone(), entry.flag.clone()))
            .collect();
        let completion = Completion::from_candidates(candidates);
        trace!(token, count = completion.len(), "Option completion");
        completion
    }

    /// Completes a value typed into an option's field.
    ///
    /// Path fields complete against the filesystem and choice fields
    /// against their choices. Other kinds have no candidates.
    pub fn complete_value(&self, option: &OptionDescriptor, token: &str) -> Completion {
        if option.kind().is_completable() {
            return self.complete_path(token);
        }
        let candidates = option
            .choices()
            .iter()
            .filter(|choice| choice.starts_with(token))
            .map(|choice| Candidate::plain(choice.as_str()))
            .collect();
        Completion::from_candidates(candidates)
    }

    /// Option-name completion for tokens starting with `-`, path
    /// completion otherwise.
    pub fn complete_any(&self, token: &str) -> Completion {
        self.complete(&CompletionQuery::new(token))
    }
}
