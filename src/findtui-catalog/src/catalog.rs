//! The category -> options table and the flattened flag vocabulary.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::option::{OptionDescriptor, OptionEntry};

/// Category whose options are post-match actions rather than predicates.
pub const ACTIONS_CATEGORY: &str = "Actions";

/// One completable flag of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    /// Dash-prefixed flag, inserted on completion (`-type`).
    pub flag: String,
    /// Display label embedding the description (`-type -- is of type chosen`).
    pub label: String,
}

/// Serialized form of a catalog file.
///
/// ```toml
/// [[categories.Name]]
/// name = "name"
/// kind = "path_input"
/// description = "basename matches pattern given"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<OptionEntry>>,
}

/// Immutable option catalog, grouped by menu category.
///
/// Categories are kept in sorted order and options are sorted by name
/// inside each category. Option names are unique across the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<OptionDescriptor>>,
    vocabulary: Vec<VocabularyEntry>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from unvalidated entries, grouped by category.
    pub fn from_entries<I, S>(groups: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<OptionEntry>)>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        catalog.extend_entries(groups)?;
        Ok(catalog)
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml(text: &str) -> CatalogResult<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::from_entries(file.categories)
    }

    /// Loads a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| CatalogError::read_file(path, e))?;
        debug!(path = %path.display(), "Loading option catalog");
        Self::from_toml(&text)
    }

    /// Adds entries to the catalog, appending to existing categories.
    ///
    /// Fails without modifying the catalog if any entry is invalid or
    /// clashes with an existing option name.
    pub fn extend_entries<I, S>(&mut self, groups: I) -> CatalogResult<()>
    where
        I: IntoIterator<Item = (S, Vec<OptionEntry>)>,
        S: Into<String>,
    {
        let mut owners: HashMap<String, String> = self
            .categories
            .iter()
            .flat_map(|(category, options)| {
                options
                    .iter()
                    .map(move |opt| (opt.name().to_string(), category.clone()))
            })
            .collect();

        let mut staged = self.categories.clone();
        for (category, entries) in groups {
            let category: String = category.into();
            let slot = staged.entry(category.clone()).or_default();
            for entry in entries {
                let descriptor = OptionDescriptor::try_from(entry)?;
                if let Some(first) = owners.get(descriptor.name()) {
                    return Err(CatalogError::duplicate(
                        descriptor.name(),
                        first.clone(),
                        category,
                    ));
                }
                owners.insert(descriptor.name().to_string(), category.clone());
                slot.push(descriptor);
            }
        }

        for options in staged.values_mut() {
            options.sort_by(|a, b| a.name().cmp(b.name()));
        }

        self.categories = staged;
        self.rebuild_vocabulary();
        Ok(())
    }

    /// Merges another catalog into this one.
    pub fn merge(&mut self, other: &Catalog) -> CatalogResult<()> {
        self.extend_entries(other.categories.iter().map(|(category, options)| {
            let entries = options.iter().map(OptionEntry::from).collect::<Vec<_>>();
            (category.clone(), entries)
        }))
    }

    fn rebuild_vocabulary(&mut self) {
        self.vocabulary = self
            .categories
            .values()
            .flatten()
            .map(|opt| VocabularyEntry {
                flag: opt.flag(),
                label: opt.label(),
            })
            .collect();
    }

    /// Menu names, sorted.
    pub fn menus(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Options of one category, sorted by name.
    pub fn options(&self, category: &str) -> &[OptionDescriptor] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates `(category, descriptor)` over the whole catalog.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionDescriptor)> {
        self.categories
            .iter()
            .flat_map(|(category, options)| options.iter().map(move |o| (category.as_str(), o)))
    }

    /// Looks up an option by bare name or by flag.
    pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
        let name = name.strip_prefix('-').unwrap_or(name);
        self.categories
            .values()
            .flatten()
            .find(|opt| opt.name() == name)
    }

    /// Category that declares `name`, if any.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix('-').unwrap_or(name);
        self.iter()
            .find(|(_, opt)| opt.name() == name)
            .map(|(category, _)| category)
    }

    /// Whether `name` is a post-match action rather than a predicate.
    pub fn is_action(&self, name: &str) -> bool {
        self.category_of(name) == Some(ACTIONS_CATEGORY)
    }

    /// The flattened, dash-prefixed flag vocabulary.
    pub fn vocabulary(&self) -> &[VocabularyEntry] {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

impl From<&OptionDescriptor> for OptionEntry {
    fn from(desc: &OptionDescriptor) -> Self {
        OptionEntry {
            name: desc.name().to_string(),
            kind: desc.kind(),
            description: desc.description().to_string(),
            choices: desc.choices().to_vec(),
            example: desc.example().map(str::to_string),
        }
    }
}
