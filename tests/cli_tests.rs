//! End-to-end tests for the `figdraw` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn figdraw() -> Command {
    Command::cargo_bin("figdraw").expect("binary should build")
}

#[test]
fn test_writes_output_named_in_scene() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out = dir.path().join("art.txt");
    let scene = dir.path().join("scene.txt");
    fs::write(
        &scene,
        format!(
            "canvas 5 3\noutput {}\nfigure rectangle 0 0 2 2 #\nfigure triangle 3 0 2 3 ^\n",
            out.display()
        ),
    )
    .expect("Failed to write scene");

    figdraw().arg(&scene).assert().success();

    let rendered = fs::read_to_string(&out).expect("output should exist");
    assert_eq!(rendered, "## ^ \n## ^ \n  ^^^\n");
}

#[test]
fn test_output_flag_overrides_scene() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let scene = dir.path().join("scene.txt");
    let ignored = dir.path().join("ignored.txt");
    let chosen = dir.path().join("chosen.txt");
    fs::write(
        &scene,
        format!("canvas 3 3\noutput {}\nfigure circle 1 1 1 o\n", ignored.display()),
    )
    .expect("Failed to write scene");

    figdraw().arg(&scene).arg("-o").arg(&chosen).assert().success();

    assert!(!ignored.exists());
    assert_eq!(
        fs::read_to_string(&chosen).expect("output should exist"),
        " o \nooo\n o \n"
    );
}

#[test]
fn test_stdout_mode() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let scene = dir.path().join("scene.toml");
    fs::write(
        &scene,
        "[canvas]\nwidth = 4\nheight = 2\n\n[[figure]]\nkind = \"rectangle\"\nx = 1\ny = 0\nwidth = 2\nheight = 2\nsymbol = \"=\"\n",
    )
    .expect("Failed to write scene");

    figdraw()
        .arg(&scene)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(" == \n == \n");
}

#[test]
fn test_invalid_figure_fails_without_output() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out = dir.path().join("art.txt");
    let scene = dir.path().join("scene.txt");
    fs::write(
        &scene,
        format!("canvas 5 5\noutput {}\nfigure triangle 2 0 4 0 ^\n", out.display()),
    )
    .expect("Failed to write scene");

    figdraw()
        .arg(&scene)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid triangle height"));
    assert!(!out.exists());
}

#[test]
fn test_missing_output_path_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let scene = dir.path().join("scene.txt");
    fs::write(&scene, "canvas 2 2\n").expect("Failed to write scene");

    figdraw()
        .arg(&scene)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no output path"));
}

#[test]
fn test_missing_scene_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    figdraw()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load scene"));
}

#[test]
fn test_requires_config_argument() {
    figdraw().assert().failure();
}
