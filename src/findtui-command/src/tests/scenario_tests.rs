//! End-to-end edit scenarios against the command model.

use pretty_assertions::assert_eq;

use crate::*;

#[test]
fn test_path_with_freeform_action() {
    let mut model = CommandModel::new();
    model.set_path("path");
    model.set_freeform_action("du -h");
    // An empty option list keeps its separator.
    assert_eq!(model.command(), "find path  -exec du -h {} ;");
}

#[test]
fn test_set_then_remove_option_empties_segment() {
    let mut model = CommandModel::new();
    model.set_option("type", "f");
    assert_eq!(model.line().options, "-type f");
    model.remove_option("type");
    assert_eq!(model.line().options, "");
    assert_eq!(model.command(), "find");
}

#[test]
fn test_free_text_path_read_back() {
    let mut model = CommandModel::new();
    model.accept_free_text("find custom/path -name x");
    assert_eq!(model.path(), "custom/path");
    assert_eq!(model.line().options, "-name x");
}

#[test]
fn test_free_text_not_starting_with_program() {
    let mut model = CommandModel::new();
    model.set_path("kept?");
    model.accept_free_text("rm -rf /");
    assert_eq!(model.line(), &CommandLine::default());
    assert_eq!(model.command(), "find");
}

#[test]
fn test_full_session_confirmed() {
    let mut model = CommandModel::new();
    model.set_path(".");
    model.apply_edit(Slot::Option, "name", OptionEdit::Input("'*.rs'".into()));
    model.apply_edit(Slot::Option, "type", OptionEdit::Choose(Some("f".into())));
    model.apply_edit(Slot::Action, "exec", OptionEdit::Input("wc -l".into()));

    let outcome = model.confirm();
    assert_eq!(
        outcome,
        SessionOutcome::Confirmed("find . -name '*.rs' -type f -exec wc -l {} ;".into())
    );
}

#[test]
fn test_display_keeps_hand_typed_path() {
    let mut model = CommandModel::new();
    let displayed = "find ~/notes -exec grep -l todo {} ;";
    model.set_option("name", "'*.md'");
    assert_eq!(
        model.render_over(displayed),
        "find ~/notes -name '*.md' -exec grep -l todo {} ;"
    );
    // The model itself is untouched.
    assert_eq!(model.command(), "find  -name '*.md'");
}
