//! Option descriptors: one entry of the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// How an option takes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Present or absent, no value (`-L`, `-delete`).
    Checkbox,
    /// One value out of a fixed set (`-type f`).
    Choice,
    /// A path or name pattern (`-name '*.rs'`).
    PathInput,
    /// Free text (`-perm -220`).
    TextInput,
    /// An integer (`-maxdepth 2`).
    IntInput,
}

impl OptionKind {
    /// Stable lowercase name, as used in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Checkbox => "checkbox",
            OptionKind::Choice => "choice",
            OptionKind::PathInput => "path_input",
            OptionKind::TextInput => "text_input",
            OptionKind::IntInput => "int_input",
        }
    }

    /// Whether values of this kind can be filled in by path completion.
    pub fn is_completable(&self) -> bool {
        matches!(self, OptionKind::PathInput)
    }

    /// Whether the option carries a value at all.
    pub fn takes_value(&self) -> bool {
        !matches!(self, OptionKind::Checkbox)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated option entry, as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub name: String,
    pub kind: OptionKind,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl OptionEntry {
    pub fn new(name: &str, kind: OptionKind, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            description: description.to_string(),
            choices: Vec::new(),
            example: None,
        }
    }

    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        self.choices = choices.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }
}

/// A validated, immutable option descriptor.
///
/// `choices` is non-empty exactly when `kind` is [`OptionKind::Choice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDescriptor {
    name: String,
    kind: OptionKind,
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<String>,
}

impl OptionDescriptor {
    /// Bare option name, without the leading dash.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The flag as typed on the command line (`-name`).
    pub fn flag(&self) -> String {
        format!("-{}", self.name)
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Dedented usage example, if the catalog provides one.
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// Display label used by option completion: `-name -- description`.
    pub fn label(&self) -> String {
        format!("-{} -- {}", self.name, self.description)
    }
}

impl TryFrom<OptionEntry> for OptionDescriptor {
    type Error = CatalogError;

    fn try_from(entry: OptionEntry) -> CatalogResult<Self> {
        let OptionEntry {
            name,
            kind,
            description,
            choices,
            example,
        } = entry;

        if name.is_empty() || name.starts_with('-') || name.contains(char::is_whitespace) {
            return Err(CatalogError::invalid_name(name));
        }

        match (kind, choices.is_empty()) {
            (OptionKind::Choice, true) => return Err(CatalogError::missing_choices(name)),
            (OptionKind::Choice, false) | (_, true) => {}
            (other, false) => return Err(CatalogError::unexpected_choices(name, other.as_str())),
        }

        let example = example
            .map(|text| textwrap::dedent(&text).trim_matches('\n').to_string())
            .filter(|text| !text.is_empty());

        Ok(Self {
            name,
            kind,
            description,
            choices,
            example,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_completable() {
        assert!(OptionKind::PathInput.is_completable());
        assert!(!OptionKind::TextInput.is_completable());
        assert!(!OptionKind::Choice.is_completable());
        assert!(!OptionKind::Checkbox.takes_value());
        assert!(OptionKind::IntInput.takes_value());
    }

    #[test]
    fn test_choice_requires_choices() {
        let entry = OptionEntry::new("type", OptionKind::Choice, "is of type chosen");
        let err = OptionDescriptor::try_from(entry).unwrap_err();
        assert!(matches!(err, CatalogError::MissingChoices(ref n) if n == "type"));

        let entry = OptionEntry::new("type", OptionKind::Choice, "is of type chosen")
            .with_choices(&["f", "d"]);
        let desc = OptionDescriptor::try_from(entry).unwrap();
        assert_eq!(desc.choices(), ["f", "d"]);
    }

    #[test]
    fn test_non_choice_rejects_choices() {
        let entry =
            OptionEntry::new("name", OptionKind::PathInput, "basename").with_choices(&["x"]);
        let err = OptionDescriptor::try_from(entry).unwrap_err();
        assert!(err.to_string().contains("path_input"));
    }

    #[test]
    fn test_rejects_dashed_name() {
        let entry = OptionEntry::new("-name", OptionKind::PathInput, "basename");
        assert!(matches!(
            OptionDescriptor::try_from(entry),
            Err(CatalogError::InvalidName(_))
        ));
    }

    #[test]
    fn test_example_is_dedented() {
        let entry = OptionEntry::new("depth", OptionKind::Checkbox, "contents first")
            .with_example(
                "
                $ find . -depth
                ./a
                .
                ",
            );
        let desc = OptionDescriptor::try_from(entry).unwrap();
        assert_eq!(desc.example(), Some("$ find . -depth\n./a\n."));
    }

    #[test]
    fn test_label_and_flag() {
        let desc =
            OptionDescriptor::try_from(OptionEntry::new("true", OptionKind::Checkbox, "always true"))
                .unwrap();
        assert_eq!(desc.flag(), "-true");
        assert_eq!(desc.label(), "-true -- always true");
    }
}
