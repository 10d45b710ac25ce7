//! Linear representation of a `find` command line.
//!
//! A command line is split into three fields:
//!
//! ```text
//! find ./src -type f -name '*.rs' -exec wc -l {} ;
//!      |___| |_________________|       |___|
//!      path        options            action
//! ```
//!
//! Parsing is permissive and lossy: unusual spacing in hand-typed text is
//! normalised, and anything that does not start with the program name
//! parses to empty fields.

use serde::{Deserialize, Serialize};

/// Program name used when none is configured.
pub const DEFAULT_PROGRAM: &str = "find";

/// Token that introduces the per-match action clause.
pub const EXEC_INTRODUCER: &str = " -exec ";

/// Placeholder replaced by the matched file name.
pub const PLACEHOLDER: &str = "{}";

/// Terminator appended after the placeholder.
pub const TERMINATOR: &str = ";";

/// The three fields of a linearized command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    /// Starting point of the traversal.
    pub path: String,
    /// Predicate options, verbatim (`-type f -name x`).
    pub options: String,
    /// Payload of the `-exec <payload> {} ;` clause, empty when absent.
    pub action: String,
}

impl CommandLine {
    pub fn new(
        path: impl Into<String>,
        options: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            options: options.into(),
            action: action.into(),
        }
    }

    /// Parses free text that should begin with `program`.
    ///
    /// The `-exec` clause is extracted first: its payload runs from the
    /// first `" -exec "` to the last `{}` after it. A clause without a
    /// placeholder keeps everything up to the end of the text. The remainder
    /// is then split at the first `" -"`: what precedes it is the path, the
    /// rest is options.
    pub fn parse(program: &str, text: &str) -> Self {
        let Some(mut rest) = strip_program(program, text) else {
            return Self::default();
        };

        let mut action = String::new();
        if let Some(start) = rest.find(EXEC_INTRODUCER) {
            let body = &rest[start + EXEC_INTRODUCER.len()..];
            let payload = match body.rfind(PLACEHOLDER) {
                Some(end) => &body[..end],
                None => body,
            };
            action = payload.trim().to_string();
            rest = &rest[..start];
        }

        match rest.find(" -") {
            Some(split) => Self {
                path: rest[..split].trim().to_string(),
                options: rest[split..].trim().to_string(),
                action,
            },
            None => Self {
                path: rest.trim().to_string(),
                options: String::new(),
                action,
            },
        }
    }

    /// Serializes with the legacy spacing rules.
    ///
    /// Fields are joined by single spaces even when empty, so an empty path
    /// or option list leaves a double space behind. Only trailing
    /// whitespace is removed.
    pub fn to_command(&self, program: &str) -> String {
        let mut cmd = format!("{program} {} {}", self.path, self.options);
        if !self.action.is_empty() {
            cmd.push_str(EXEC_INTRODUCER);
            cmd.push_str(&self.action);
            cmd.push(' ');
            cmd.push_str(PLACEHOLDER);
            cmd.push(' ');
            cmd.push_str(TERMINATOR);
        }
        cmd.truncate(cmd.trim_end().len());
        cmd
    }

    /// Fills an empty path or action from `previous`.
    ///
    /// Options are never inherited: they are always owned by the
    /// structured assignments.
    pub fn inherit_missing(&mut self, previous: &CommandLine) {
        if self.path.is_empty() {
            self.path = previous.path.clone();
        }
        if self.action.is_empty() {
            self.action = previous.action.clone();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.options.is_empty() && self.action.is_empty()
    }
}

/// Returns the text following the program token, or `None` if `text` does
/// not start with it.
fn strip_program<'a>(program: &str, text: &'a str) -> Option<&'a str> {
    let rest = text.trim_start().strip_prefix(program)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}
