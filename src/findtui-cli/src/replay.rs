//! Scripted editing sessions.
//!
//! A replay script drives a [`CommandModel`] the way the interactive view
//! does, one edit per line. Blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! path src
//! set type f
//! set name '*.rs'
//! exec wc -l
//! confirm
//! ```
//!
//! | Directive               | Effect                                        |
//! |-------------------------|-----------------------------------------------|
//! | `path TEXT`             | set the starting point                        |
//! | `set NAME [VALUE]`      | widget edit, routed and checked by the catalog |
//! | `clear NAME`            | widget cleared                                |
//! | `option NAME [VALUE]`   | raw option assignment                         |
//! | `unset-option NAME`     | remove an option                              |
//! | `action NAME [VALUE]`   | raw action assignment                         |
//! | `unset-action NAME`     | remove an action                              |
//! | `exec TEXT`             | hand-typed `-exec` payload                    |
//! | `type TEXT`             | hand-edited command line                      |
//! | `reset`                 | drop hand-typed options                       |
//! | `confirm` / `cancel`    | end the session                               |
//!
//! A script that ends without `confirm` is cancelled.

use findtui_catalog::{Catalog, OptionKind};
use findtui_command::{CommandModel, OptionEdit, SessionOutcome, Slot};
use tracing::{debug, warn};

/// Result type alias for replay scripts.
pub type ScriptResult<T> = std::result::Result<T, ScriptError>;

/// Errors in a replay script. Every variant carries the 1-based line.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Line {line}: unknown directive '{directive}'")]
    UnknownDirective { line: usize, directive: String },

    #[error("Line {line}: '{directive}' needs {what}")]
    MissingArgument {
        line: usize,
        directive: String,
        what: &'static str,
    },

    #[error("Line {line}: unknown option '{name}'")]
    UnknownOption { line: usize, name: String },

    #[error("Line {line}: '{value}' is not a choice of -{name} (one of: {choices})")]
    InvalidChoice {
        line: usize,
        name: String,
        value: String,
        choices: String,
    },

    #[error("Line {line}: -{name} takes no value")]
    UnexpectedValue { line: usize, name: String },

    #[error("Line {line}: -{name} expects an integer, got '{value}'")]
    NotAnInteger {
        line: usize,
        name: String,
        value: String,
    },
}

impl ScriptError {
    fn missing(line: usize, directive: &str, what: &'static str) -> Self {
        Self::MissingArgument {
            line,
            directive: directive.to_string(),
            what,
        }
    }

    /// Script line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::UnknownDirective { line, .. }
            | Self::MissingArgument { line, .. }
            | Self::UnknownOption { line, .. }
            | Self::InvalidChoice { line, .. }
            | Self::UnexpectedValue { line, .. }
            | Self::NotAnInteger { line, .. } => *line,
        }
    }
}

/// One parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Path(String),
    Set { name: String, value: String },
    Clear(String),
    Option { name: String, value: String },
    UnsetOption(String),
    Action { name: String, value: String },
    UnsetAction(String),
    Exec(String),
    Type(String),
    Reset,
    Confirm,
    Cancel,
}

/// A directive with its line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub number: usize,
    pub step: Step,
}

/// Parses a whole script.
pub fn parse_script(text: &str) -> ScriptResult<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let number = idx + 1;
        if let Some(step) = parse_line(number, raw)? {
            lines.push(ScriptLine { number, step });
        }
    }
    Ok(lines)
}

/// Parses one line. Blank lines and comments yield `None`.
pub fn parse_line(number: usize, raw: &str) -> ScriptResult<Option<Step>> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (directive, rest) = match line.split_once(char::is_whitespace) {
        Some((directive, rest)) => (directive, rest.trim()),
        None => (line, ""),
    };

    let named = |rest: &str| -> ScriptResult<(String, String)> {
        let (name, value) = match rest.split_once(char::is_whitespace) {
            Some((name, value)) => (name, value.trim()),
            None => (rest, ""),
        };
        let name = name.strip_prefix('-').unwrap_or(name);
        if name.is_empty() {
            return Err(ScriptError::missing(number, directive, "an option name"));
        }
        Ok((name.to_string(), value.to_string()))
    };
    let bare_name = |rest: &str| -> ScriptResult<String> {
        let (name, value) = named(rest)?;
        if value.is_empty() {
            Ok(name)
        } else {
            Err(ScriptError::UnexpectedValue { line: number, name })
        }
    };

    let step = match directive {
        "path" => Step::Path(rest.to_string()),
        "set" => {
            let (name, value) = named(rest)?;
            Step::Set { name, value }
        }
        "clear" => Step::Clear(bare_name(rest)?),
        "option" => {
            let (name, value) = named(rest)?;
            Step::Option { name, value }
        }
        "unset-option" => Step::UnsetOption(bare_name(rest)?),
        "action" => {
            let (name, value) = named(rest)?;
            Step::Action { name, value }
        }
        "unset-action" => Step::UnsetAction(bare_name(rest)?),
        "exec" => Step::Exec(rest.to_string()),
        "type" => Step::Type(rest.to_string()),
        "reset" => Step::Reset,
        "confirm" => Step::Confirm,
        "cancel" => Step::Cancel,
        other => {
            return Err(ScriptError::UnknownDirective {
                line: number,
                directive: other.to_string(),
            });
        }
    };
    Ok(Some(step))
}

/// Applies script lines to a model until the session ends.
pub struct Replay<'a> {
    catalog: &'a Catalog,
    model: CommandModel,
}

impl<'a> Replay<'a> {
    pub fn new(catalog: &'a Catalog, model: CommandModel) -> Self {
        Self { catalog, model }
    }

    pub fn model(&self) -> &CommandModel {
        &self.model
    }

    /// Runs the script. Lines after `confirm` or `cancel` are ignored.
    pub fn run(mut self, script: &[ScriptLine]) -> ScriptResult<SessionOutcome> {
        for (idx, line) in script.iter().enumerate() {
            if let Some(outcome) = self.apply(line)? {
                let ignored = script.len() - idx - 1;
                if ignored > 0 {
                    warn!(line = line.number, ignored, "Ignoring lines after the session ended");
                }
                return Ok(outcome);
            }
        }
        debug!("Script ended without confirm");
        Ok(SessionOutcome::Cancelled)
    }

    /// Applies one line. Returns the outcome when the line ends the session.
    pub fn apply(&mut self, line: &ScriptLine) -> ScriptResult<Option<SessionOutcome>> {
        let number = line.number;
        match &line.step {
            Step::Path(path) => self.model.set_path(path),
            Step::Set { name, value } => {
                let (slot, name, edit) = self.widget_edit(number, name, value)?;
                self.model.apply_edit(slot, &name, edit);
            }
            Step::Clear(name) => {
                let (slot, name, edit) = self.widget_clear(number, name)?;
                self.model.apply_edit(slot, &name, edit);
            }
            Step::Option { name, value } => self.model.set_option(name.as_str(), value.as_str()),
            Step::UnsetOption(name) => self.model.remove_option(name),
            Step::Action { name, value } => self.model.set_action(name.as_str(), value.as_str()),
            Step::UnsetAction(name) => self.model.remove_action(name),
            Step::Exec(text) => self.model.set_freeform_action(text),
            Step::Type(text) => self.model.accept_free_text(text),
            Step::Reset => self.model.reset(),
            Step::Confirm => return Ok(Some(self.model.confirm())),
            Step::Cancel => return Ok(Some(SessionOutcome::Cancelled)),
        }
        debug!(line = number, command = %self.model.command(), "Applied script line");
        Ok(None)
    }

    fn slot_of(&self, name: &str) -> Slot {
        if self.catalog.is_action(name) {
            Slot::Action
        } else {
            Slot::Option
        }
    }

    /// Translates `set NAME VALUE` into the edit its widget would emit.
    fn widget_edit(
        &self,
        line: usize,
        name: &str,
        value: &str,
    ) -> ScriptResult<(Slot, String, OptionEdit)> {
        let desc = self
            .catalog
            .get(name)
            .ok_or_else(|| ScriptError::UnknownOption {
                line,
                name: name.to_string(),
            })?;
        let name = desc.name().to_string();
        let kind = desc.kind();

        if !kind.takes_value() {
            if !value.is_empty() {
                return Err(ScriptError::UnexpectedValue { line, name });
            }
            return Ok((self.slot_of(&name), name, OptionEdit::Toggle(true)));
        }
        if value.is_empty() {
            return Err(ScriptError::missing(line, "set", "a value"));
        }

        let edit = match kind {
            OptionKind::Choice => {
                if !desc.choices().iter().any(|c| c == value) {
                    return Err(ScriptError::InvalidChoice {
                        line,
                        name,
                        value: value.to_string(),
                        choices: desc.choices().join(", "),
                    });
                }
                OptionEdit::Choose(Some(value.to_string()))
            }
            OptionKind::IntInput => {
                if value.parse::<i64>().is_err() {
                    return Err(ScriptError::NotAnInteger {
                        line,
                        name,
                        value: value.to_string(),
                    });
                }
                OptionEdit::Input(value.to_string())
            }
            OptionKind::Checkbox | OptionKind::PathInput | OptionKind::TextInput => {
                OptionEdit::Input(value.to_string())
            }
        };
        Ok((self.slot_of(&name), name, edit))
    }

    fn widget_clear(&self, line: usize, name: &str) -> ScriptResult<(Slot, String, OptionEdit)> {
        let desc = self
            .catalog
            .get(name)
            .ok_or_else(|| ScriptError::UnknownOption {
                line,
                name: name.to_string(),
            })?;
        let edit = match desc.kind() {
            kind if !kind.takes_value() => OptionEdit::Toggle(false),
            OptionKind::Choice => OptionEdit::Choose(None),
            _ => OptionEdit::Input(String::new()),
        };
        let name = desc.name().to_string();
        Ok((self.slot_of(&name), name, edit))
    }
}

/// Parses and runs a script against a fresh model.
pub fn replay_script(
    catalog: &Catalog,
    model: CommandModel,
    text: &str,
) -> ScriptResult<SessionOutcome> {
    let script = parse_script(text)?;
    Replay::new(catalog, model).run(&script)
}
