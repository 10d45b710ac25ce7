//! Edit model behind the command line display.
//!
//! The model keeps option and action assignments as the source of truth
//! and re-derives the command line text after every mutation. The
//! presentation layer forwards widget changes here and reads
//! [`CommandModel::command`] back for display.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::line::{CommandLine, DEFAULT_PROGRAM, PLACEHOLDER, TERMINATOR};
use crate::outcome::SessionOutcome;

/// Action whose value becomes the `-exec` clause payload.
pub const EXEC_ACTION: &str = "exec";

/// Actions that take a command and need the `{} ;` terminator.
const TERMINATED_ACTIONS: &[&str] = &["execdir", "ok", "okdir"];

/// Which assignment map an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Predicate options (`-type f`).
    Option,
    /// Post-match actions (`-delete`, `-exec cmd {} ;`).
    Action,
}

/// A change coming from an option widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionEdit {
    /// A checkbox was ticked or cleared.
    Toggle(bool),
    /// A choice was picked, or cleared with `None`.
    Choose(Option<String>),
    /// A text, path, or integer field changed. Empty input clears it.
    Input(String),
}

/// Structured command state plus its derived text.
#[derive(Debug, Clone, Serialize)]
pub struct CommandModel {
    program: String,
    line: CommandLine,
    options: IndexMap<String, String>,
    actions: IndexMap<String, String>,
    raw_action: String,
    /// Options from the last hand-typed command, cleared when a structured
    /// option is set.
    typed_options: String,
    command: String,
}

impl Default for CommandModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandModel {
    /// Creates an empty model for `find`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Creates an empty model for another program name (`gfind`, ...).
    pub fn with_program(program: impl Into<String>) -> Self {
        let mut model = Self {
            program: program.into(),
            line: CommandLine::default(),
            options: IndexMap::new(),
            actions: IndexMap::new(),
            raw_action: String::new(),
            typed_options: String::new(),
            command: String::new(),
        };
        model.reconcile();
        model
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The derived command line text.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The current three-field representation.
    pub fn line(&self) -> &CommandLine {
        &self.line
    }

    pub fn path(&self) -> &str {
        &self.line.path
    }

    pub fn options(&self) -> &IndexMap<String, String> {
        &self.options
    }

    pub fn actions(&self) -> &IndexMap<String, String> {
        &self.actions
    }

    pub fn raw_action(&self) -> &str {
        &self.raw_action
    }

    /// Sets an option. An empty value means "present without a value".
    ///
    /// Options typed by hand are dropped for good once a structured option
    /// is set.
    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.typed_options.clear();
        self.options.insert(name.into(), value.into());
        self.reconcile();
    }

    /// Removes an option; absent names are ignored.
    pub fn remove_option(&mut self, name: &str) {
        self.options.shift_remove(name);
        self.reconcile();
    }

    pub fn set_action(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.actions.insert(name.into(), value.into());
        self.reconcile();
    }

    pub fn remove_action(&mut self, name: &str) {
        self.actions.shift_remove(name);
        self.reconcile();
    }

    pub fn set_path(&mut self, path: &str) {
        self.line.path = path.trim().to_string();
        self.reconcile();
    }

    /// Sets the hand-typed `-exec` payload, used when no structured `exec`
    /// action is assigned.
    pub fn set_freeform_action(&mut self, text: &str) {
        self.raw_action = text.to_string();
        self.reconcile();
    }

    /// Replaces everything with the parse of a hand-edited command line.
    ///
    /// Structured assignments are dropped. The typed options and `-exec`
    /// payload stay in effect until a structured option or action replaces
    /// them.
    pub fn accept_free_text(&mut self, text: &str) {
        let line = CommandLine::parse(&self.program, text);
        if line.is_empty() && !text.trim().is_empty() {
            debug!(program = %self.program, "Free text does not start with the program name");
        }
        self.options.clear();
        self.actions.clear();
        self.raw_action = line.action.clone();
        self.typed_options = line.options.clone();
        self.line = line;
        self.reconcile();
    }

    /// Applies a widget change to an option or action.
    pub fn apply_edit(&mut self, slot: Slot, name: &str, edit: OptionEdit) {
        let value = match edit {
            OptionEdit::Toggle(true) => Some(String::new()),
            OptionEdit::Toggle(false) | OptionEdit::Choose(None) => None,
            OptionEdit::Choose(Some(choice)) => Some(choice),
            OptionEdit::Input(text) if text.is_empty() => None,
            OptionEdit::Input(text) => Some(text),
        };
        match (slot, value) {
            (Slot::Option, Some(value)) => self.set_option(name, value),
            (Slot::Option, None) => self.remove_option(name),
            (Slot::Action, Some(value)) => self.set_action(name, value),
            (Slot::Action, None) => self.remove_action(name),
        }
    }

    /// Drops hand-typed options and re-derives the command from the
    /// structured assignments alone.
    pub fn reset(&mut self) {
        self.typed_options.clear();
        self.reconcile();
    }

    /// Re-derives the options segment, the action payload, and the command
    /// text from the current assignments.
    pub fn reconcile(&mut self) {
        let mut segments: Vec<String> = if self.options.is_empty() {
            if self.typed_options.is_empty() {
                Vec::new()
            } else {
                vec![self.typed_options.clone()]
            }
        } else {
            self.options
                .iter()
                .map(|(name, value)| render_assignment(name, value))
                .collect()
        };
        segments.extend(
            self.actions
                .iter()
                .filter(|(name, _)| name.as_str() != EXEC_ACTION)
                .map(|(name, value)| render_action(name, value)),
        );
        self.line.options = segments.join(" ");

        let exec = self
            .actions
            .get(EXEC_ACTION)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| self.raw_action.trim());
        self.line.action = exec.to_string();

        self.command = self.line.to_command(&self.program);
        trace!(command = %self.command, "Reconciled command line");
    }

    /// Renders the command over what is currently displayed.
    ///
    /// An empty path or action payload is taken from `displayed`, so text
    /// the user typed into the command field survives an option change.
    pub fn render_over(&self, displayed: &str) -> String {
        let previous = CommandLine::parse(&self.program, displayed);
        let mut line = self.line.clone();
        line.inherit_missing(&previous);
        line.to_command(&self.program)
    }

    /// Finishes the session with the derived command.
    pub fn confirm(&self) -> SessionOutcome {
        SessionOutcome::Confirmed(self.command.clone())
    }
}

fn render_assignment(name: &str, value: &str) -> String {
    format!("-{name} {value}").trim_end().to_string()
}

fn render_action(name: &str, value: &str) -> String {
    let value = value.trim();
    if TERMINATED_ACTIONS.contains(&name) && !value.is_empty() {
        format!("-{name} {value} {PLACEHOLDER} {TERMINATOR}")
    } else {
        render_assignment(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model() {
        let model = CommandModel::new();
        assert_eq!(model.command(), "find");
        assert_eq!(model.program(), "find");
    }

    #[test]
    fn test_checkbox_option_has_no_trailing_space() {
        let mut model = CommandModel::new();
        model.set_path(".");
        model.set_option("L", "");
        model.set_option("type", "f");
        assert_eq!(model.command(), "find . -L -type f");
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut model = CommandModel::new();
        model.set_option("name", "x");
        model.set_option("type", "f");
        model.set_option("name", "y");
        assert_eq!(model.line().options, "-name y -type f");
        model.remove_option("name");
        model.set_option("name", "z");
        assert_eq!(model.line().options, "-type f -name z");
    }

    #[test]
    fn test_apply_edit() {
        let mut model = CommandModel::new();
        model.apply_edit(Slot::Option, "empty", OptionEdit::Toggle(true));
        model.apply_edit(Slot::Option, "type", OptionEdit::Choose(Some("d".into())));
        model.apply_edit(Slot::Option, "maxdepth", OptionEdit::Input("2".into()));
        assert_eq!(model.line().options, "-empty -type d -maxdepth 2");

        model.apply_edit(Slot::Option, "empty", OptionEdit::Toggle(false));
        model.apply_edit(Slot::Option, "type", OptionEdit::Choose(None));
        model.apply_edit(Slot::Option, "maxdepth", OptionEdit::Input(String::new()));
        assert!(model.options().is_empty());
        assert_eq!(model.command(), "find");
    }

    #[test]
    fn test_directive_actions_follow_options() {
        let mut model = CommandModel::new();
        model.set_path("src");
        model.apply_edit(Slot::Action, "delete", OptionEdit::Toggle(true));
        model.set_option("name", "'*.o'");
        assert_eq!(model.command(), "find src -name '*.o' -delete");
    }

    #[test]
    fn test_terminated_actions() {
        let mut model = CommandModel::new();
        model.set_path(".");
        model.set_action("execdir", "rm");
        assert_eq!(model.command(), "find . -execdir rm {} ;");
    }

    #[test]
    fn test_exec_action_overrides_freeform() {
        let mut model = CommandModel::new();
        model.set_path(".");
        model.set_freeform_action("du -h");
        assert_eq!(model.line().action, "du -h");

        model.set_action("exec", "wc -l");
        assert_eq!(model.command(), "find .  -exec wc -l {} ;");

        model.remove_action("exec");
        assert_eq!(model.command(), "find .  -exec du -h {} ;");
    }

    #[test]
    fn test_accept_free_text_then_structured_edit() {
        let mut model = CommandModel::new();
        model.set_option("type", "f");
        model.accept_free_text("find typed -name x -exec echo {} ;");
        assert!(model.options().is_empty());
        assert_eq!(model.path(), "typed");
        assert_eq!(model.raw_action(), "echo");
        assert_eq!(model.command(), "find typed -name x -exec echo {} ;");

        model.set_option("size", "+1k");
        assert_eq!(model.command(), "find typed -size +1k -exec echo {} ;");
    }

    #[test]
    fn test_typed_options_do_not_return_after_remove() {
        let mut model = CommandModel::new();
        model.accept_free_text("find . -name x");
        model.set_option("type", "f");
        assert_eq!(model.command(), "find . -type f");

        model.remove_option("type");
        assert!(model.options().is_empty());
        assert_eq!(model.line().options, "");
        assert_eq!(model.command(), "find .");
    }

    #[test]
    fn test_widget_edit_drops_typed_options() {
        let mut model = CommandModel::new();
        model.accept_free_text("find . -name x");
        model.apply_edit(Slot::Option, "empty", OptionEdit::Toggle(true));
        model.apply_edit(Slot::Option, "empty", OptionEdit::Toggle(false));
        assert_eq!(model.command(), "find .");
    }

    #[test]
    fn test_directive_action_keeps_freeform_payload() {
        let mut model = CommandModel::new();
        model.set_path(".");
        model.set_freeform_action("du -h");
        model.set_action("delete", "");
        assert_eq!(model.command(), "find . -delete -exec du -h {} ;");

        model.set_action("exec", "rm");
        assert_eq!(model.command(), "find . -delete -exec rm {} ;");
    }

    #[test]
    fn test_reset_drops_typed_options() {
        let mut model = CommandModel::new();
        model.accept_free_text("find . -name x");
        model.reset();
        assert_eq!(model.command(), "find .");
    }

    #[test]
    fn test_render_over_inherits_path_and_action() {
        let mut model = CommandModel::new();
        model.set_option("type", "f");
        let shown = model.render_over("find edited/path -name old -exec ls {} ;");
        assert_eq!(shown, "find edited/path -type f -exec ls {} ;");
    }

    #[test]
    fn test_other_program() {
        let mut model = CommandModel::with_program("gfind");
        model.accept_free_text("gfind /tmp -type d");
        assert_eq!(model.path(), "/tmp");
        model.accept_free_text("find /tmp -type d");
        assert_eq!(model.command(), "gfind");
    }
}
