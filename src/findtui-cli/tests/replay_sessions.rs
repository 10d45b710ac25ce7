use std::fs;

use findtui_cli::cli::GlobalArgs;
use findtui_cli::{FindtuiConfig, ScriptError, Settings, replay_script};
use findtui_command::{CommandModel, SessionOutcome};
use pretty_assertions::assert_eq;

fn settings_with(config: FindtuiConfig) -> Settings {
    Settings::resolve(&GlobalArgs::default(), config).unwrap()
}

#[test]
fn test_hand_edit_then_widgets() {
    let settings = settings_with(FindtuiConfig::default());
    let script = "\
# user types a command, then refines it with the menus
type find /var/log -name '*.gz' -exec ls -l {} ;
set mtime +30
set delete
confirm
";
    let outcome = replay_script(&settings.catalog, CommandModel::new(), script).unwrap();
    assert_eq!(
        outcome,
        SessionOutcome::Confirmed("find /var/log -mtime +30 -delete -exec ls -l {} ;".into())
    );
}

#[test]
fn test_configured_program_and_dialect() {
    let settings = settings_with(FindtuiConfig {
        program: Some("gfind".into()),
        dialect: Some("bsd".parse().unwrap()),
        ..Default::default()
    });
    let model = CommandModel::with_program(settings.program.as_str());
    let script = "path ~\nset Bmin -5\nconfirm";
    let outcome = replay_script(&settings.catalog, model, script).unwrap();
    assert_eq!(outcome.command(), Some("gfind ~ -Bmin -5"));
}

#[test]
fn test_gnu_only_option_rejected_for_bsd() {
    let settings = settings_with(FindtuiConfig {
        dialect: Some("bsd".parse().unwrap()),
        ..Default::default()
    });
    let err = replay_script(&settings.catalog, CommandModel::new(), "set xtype f").unwrap_err();
    assert!(matches!(err, ScriptError::UnknownOption { line: 1, .. }));
}

#[test]
fn test_script_from_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "program = \"bfs\"\n").unwrap();
    let settings = Settings::load(&GlobalArgs {
        config: Some(config),
        ..Default::default()
    })
    .unwrap();

    let model = CommandModel::with_program(settings.program.as_str());
    let outcome = replay_script(&settings.catalog, model, "type bfs . -type l\nconfirm").unwrap();
    assert_eq!(outcome.command(), Some("bfs . -type l"));
}
