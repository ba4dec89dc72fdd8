use std::fs;

use assert_cmd::Command;
use boiling::cli::{Args, Command as CliCommand};
use clap::Parser;
use predicates::prelude::*;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["boiling"];
    argv.extend(args);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_parse_new() {
    let args = parse(&["new", "--lang", "c"]);
    match args.command {
        CliCommand::New { name, lang } => {
            assert_eq!(name, None);
            assert_eq!(lang, "c");
        }
        other => panic!("Expected New, got {:?}", other),
    }
}

#[test]
fn test_parse_new_with_name_and_short_lang() {
    let args = parse(&["new", "--name", "Acme", "-l", "cpp"]);
    match args.command {
        CliCommand::New { name, lang } => {
            assert_eq!(name.as_deref(), Some("Acme"));
            assert_eq!(lang, "cpp");
        }
        other => panic!("Expected New, got {:?}", other),
    }
}

#[test]
fn test_new_requires_lang() {
    let result = Args::try_parse_from(["boiling", "new"]);
    assert!(result.is_err());
}

#[test]
fn test_config_flags_may_repeat() {
    let args = parse(&["config", "-v", "--verify", "-w", "--where"]);
    match args.command {
        CliCommand::Config { verify, where_ } => {
            assert_eq!(verify, 2);
            assert_eq!(where_, 2);
        }
        other => panic!("Expected Config, got {:?}", other),
    }
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Args::try_parse_from(["boiling", "config", "--frobnicate"]).is_err());
}

// End-to-end tests below drive the compiled binary with $HOME pointed at a
// temporary directory so the configuration lookup is fully isolated.

fn boiling() -> Command {
    Command::cargo_bin("boiling").unwrap()
}

fn write_config(home: &TempDir, text: &str) {
    let dir = home.path().join(".config/boiling");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("boiling.conf"), text).unwrap();
}

#[test]
fn test_where_without_config() {
    let home = TempDir::new().unwrap();

    boiling()
        .env("HOME", home.path())
        .args(["config", "--where"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No config found"));
}

#[test]
fn test_where_prints_config_path() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[Core]\nname=demo\n");

    boiling()
        .env("HOME", home.path())
        .args(["config", "--where"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boiling.conf"));
}

#[test]
fn test_verify_reports_clean_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[Core]\nname=demo\ngitrepo=false\n");

    boiling()
        .env("HOME", home.path())
        .args(["config", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config contains no errors."));
}

#[test]
fn test_repeated_verify_runs_once() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[Core]\nname=demo\n");

    boiling()
        .env("HOME", home.path())
        .args(["config", "--verify", "--verify", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config contains no errors.").count(1));
}

#[test]
fn test_verify_rejects_unknown_section() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[Bogus]\nname=demo\n");

    boiling()
        .env("HOME", home.path())
        .args(["config", "--verify"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Bogus"));
}

#[test]
fn test_verify_rejects_non_boolean_gitrepo() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[Core]\nname=demo\ngitrepo=yes\n");

    boiling()
        .env("HOME", home.path())
        .args(["config", "--verify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gitrepo"));
}

#[test]
fn test_new_with_unsupported_language() {
    let home = TempDir::new().unwrap();

    boiling()
        .env("HOME", home.path())
        .args(["new", "--lang", "rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a supported language"));
}

#[test]
fn test_new_with_minimal_config_creates_nothing() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(&home, "[Core]\nname=demo\n");

    boiling()
        .env("HOME", home.path())
        .current_dir(project.path())
        .args(["new", "--lang", "c"])
        .assert()
        .success();

    assert_eq!(fs::read_dir(project.path()).unwrap().count(), 0);
}

#[test]
fn test_new_creates_repo_and_directories() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(
        &home,
        "[Core]\nname=demo\ngitrepo=true\n[Language]\nname=clang\nsrc=source\nbin=out\n",
    );

    boiling()
        .env("HOME", home.path())
        .current_dir(project.path())
        .args(["new", "--lang", "c"])
        .assert()
        .success();

    assert!(project.path().join("source").is_dir());
    assert!(project.path().join("out").is_dir());
    assert!(project.path().join(".git").is_dir());
}

#[test]
fn test_new_fails_before_mutation_on_invalid_config() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(
        &home,
        "[Core]\nname=demo\ngitrepo=yes\n[Language]\nname=clang\nsrc=source\n",
    );

    boiling()
        .env("HOME", home.path())
        .current_dir(project.path())
        .args(["new", "--lang", "c"])
        .assert()
        .failure();

    // Validation failed, so scaffolding never ran.
    assert_eq!(fs::read_dir(project.path()).unwrap().count(), 0);
}

#[test]
fn test_unknown_command_is_rejected() {
    boiling().arg("frobnicate").assert().failure();
}
