//! Invariants that hold for any command built through the setters.

use crate::*;

fn build(path: &str, options: &[(&str, &str)], action: &str) -> CommandModel {
    let mut model = CommandModel::new();
    model.set_path(path);
    for (name, value) in options {
        model.set_option(*name, *value);
    }
    model.set_freeform_action(action);
    model
}

fn samples() -> Vec<CommandModel> {
    let paths = ["", ".", "src/lib", "/var/log"];
    let options: [&[(&str, &str)]; 4] = [
        &[],
        &[("type", "f")],
        &[("L", ""), ("name", "'*.rs'")],
        &[("mtime", "-2"), ("size", "+10k"), ("empty", "")],
    ];
    let actions = ["", "du -h", "sh -c 'echo {}'"];

    let mut models = Vec::new();
    for path in paths {
        for opts in options {
            for action in actions {
                models.push(build(path, opts, action));
            }
        }
    }
    models
}

#[test]
fn test_round_trip_preserves_path_and_action() {
    for model in samples() {
        let parsed = CommandLine::parse(model.program(), model.command());
        assert_eq!(parsed.path, model.line().path, "path of {:?}", model.command());
        assert_eq!(
            parsed.action,
            model.line().action,
            "action of {:?}",
            model.command()
        );
    }
}

#[test]
fn test_serialize_is_idempotent_under_round_trip() {
    for model in samples() {
        let reparsed = CommandLine::parse(model.program(), model.command());
        assert_eq!(reparsed.to_command(model.program()), model.command());
    }
}

#[test]
fn test_free_text_of_own_output_is_stable() {
    for model in samples() {
        let mut copy = CommandModel::new();
        copy.accept_free_text(model.command());
        assert_eq!(copy.command(), model.command());
    }
}

#[test]
fn test_remove_absent_option_is_noop() {
    let mut model = build("src", &[("type", "f"), ("name", "x")], "");
    let before = model.options().clone();
    let command = model.command().to_string();
    model.remove_option("maxdepth");
    assert_eq!(model.options(), &before);
    assert_eq!(model.command(), command);
}

#[test]
fn test_reconcile_is_idempotent() {
    for mut model in samples() {
        model.reconcile();
        let first = model.command().to_string();
        model.reconcile();
        assert_eq!(model.command(), first);
    }
}
