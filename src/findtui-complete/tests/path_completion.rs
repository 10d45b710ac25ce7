use std::fs;

use findtui_catalog::{Catalog, Dialect};
use findtui_complete::{Completer, CompletionDomain, CompletionQuery};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".gitignore"), "target\n").unwrap();
    fs::create_dir_all(dir.path().join("src/bin")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "").unwrap();
    fs::write(dir.path().join("src/main.rs"), "").unwrap();
    fs::write(dir.path().join("Cargo.toml"), "").unwrap();
    dir
}

fn sorted_values(completer: &Completer, token: &str) -> Vec<String> {
    let mut values: Vec<String> = completer
        .complete_path(token)
        .values()
        .map(str::to_string)
        .collect();
    values.sort();
    values
}

#[test]
fn test_git_prefix() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir(dir.path());

    let completion = completer.complete_path(".gi");
    let mut values: Vec<_> = completion.values().collect();
    values.sort();
    assert_eq!(values, [".git/", ".gitignore"]);
    assert_eq!(completion.common_prefix, ".git");
    for candidate in &completion.candidates {
        assert_eq!(candidate.label, candidate.value);
    }
}

#[test]
fn test_directory_contents_keep_directory_in_label() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir(dir.path());

    assert_eq!(
        sorted_values(&completer, "src/"),
        ["src/bin/", "src/lib.rs", "src/main.rs"]
    );
    assert_eq!(sorted_values(&completer, "src/m"), ["src/main.rs"]);
    assert_eq!(completer.complete_path("src/m").common_prefix, "src/main.rs");
}

#[test]
fn test_case_sensitive() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir(dir.path());

    assert_eq!(sorted_values(&completer, "C"), ["Cargo.toml"]);
    assert!(completer.complete_path("c").is_empty());
}

#[test]
fn test_missing_directory_gives_nothing() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir(dir.path());

    let completion = completer.complete_path("no/such/dir/x");
    assert!(completion.is_empty());
    assert_eq!(completion.common_prefix, "");
}

#[test]
fn test_file_as_directory_gives_nothing() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir(dir.path());

    assert!(completer.complete_path("Cargo.toml/x").is_empty());
}

#[test]
fn test_absolute_token_ignores_base_dir() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir("/nonexistent/findtui/base");

    let token = format!("{}/.gi", dir.path().display());
    let completion = completer.complete_path(&token);
    assert_eq!(completion.len(), 2);
    assert_eq!(completion.common_prefix, format!("{}/.git", dir.path().display()));
}

#[test]
fn test_query_with_explicit_domain() {
    let dir = fixture();
    fs::create_dir(dir.path().join("-odd")).unwrap();
    let completer = Completer::default().with_base_dir(dir.path());

    let query = CompletionQuery::new("-o").in_domain(CompletionDomain::Path);
    let completion = completer.complete(&query);
    assert_eq!(completion.values().collect::<Vec<_>>(), ["-odd/"]);

    assert!(completer.complete(&CompletionQuery::new("-o")).is_empty());
}

#[test]
fn test_complete_text_descends() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir(dir.path());

    let splice = completer.complete_text("find sr", Some(CompletionDomain::Path));
    assert_eq!(splice.text, "find src/");
    let mut values: Vec<_> = splice.completion.values().collect();
    values.sort();
    assert_eq!(values, ["src/bin/", "src/lib.rs", "src/main.rs"]);
}

#[test]
fn test_complete_text_unique_file() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir(dir.path());

    let splice = completer.complete_text("find . -newer Car", Some(CompletionDomain::Path));
    assert_eq!(splice.text, "find . -newer Cargo.toml");
    assert!(splice.changed("find . -newer Car"));
}

#[test]
fn test_complete_text_ambiguous_unchanged() {
    let dir = fixture();
    let completer = Completer::default().with_base_dir(dir.path());

    let splice = completer.complete_text(".git", None);
    assert_eq!(splice.text, ".git");
    assert_eq!(splice.completion.len(), 2);
}

#[test]
fn test_value_of_path_option_lists_files() {
    let dir = fixture();
    let catalog = Catalog::builtin(Dialect::Gnu).unwrap();
    let completer = Completer::new(&catalog).with_base_dir(dir.path());

    let newer = catalog.get("newer").unwrap();
    assert!(newer.kind().is_completable());
    let completion = completer.complete_value(newer, "src/l");
    assert_eq!(completion.values().collect::<Vec<_>>(), ["src/lib.rs"]);
}
