use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn lsif_client() -> Command {
    Command::cargo_bin("lsif-client").expect("binary")
}

fn setup_solution() -> (tempfile::TempDir, std::path::PathBuf) {
    let temp = tempdir().unwrap();
    let root = temp.path().canonicalize().unwrap();

    fs::create_dir_all(root.join("src/App")).unwrap();
    fs::write(
        root.join("src/App/App.csproj"),
        r#"<Project Sdk="Microsoft.NET.Sdk"></Project>"#,
    )
    .unwrap();
    fs::write(
        root.join("src/App/Program.cs"),
        "namespace App { public class Program { static void Main() { } } }",
    )
    .unwrap();
    fs::write(
        root.join("src/App/Widget.cs"),
        "namespace App { internal class Widget { private int x, y; } }",
    )
    .unwrap();
    fs::write(
        root.join("App.sln"),
        "Project(\"{9A19103F-16F7-4668-BE54-9A1E7A4F7556}\") = \"App\", \"src\\App\\App.csproj\", \"{A}\"\nEndProject\n",
    )
    .unwrap();

    (temp, root)
}

#[test]
fn prints_document_graph_as_json_array() {
    let (_temp, root) = setup_solution();

    let output = lsif_client()
        .arg(root.join("App.sln"))
        .output()
        .expect("command run");
    assert!(output.status.success());

    let graph: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let vertices = graph.as_array().expect("array");
    assert_eq!(vertices.len(), 2);
    assert_eq!(vertices[0]["id"], 1);
    assert_eq!(vertices[1]["id"], 2);
    for vertex in vertices {
        assert_eq!(vertex["type"], "vertex");
        assert_eq!(vertex["label"], "project");
        assert_eq!(vertex["languageId"], "csharp");
    }
    assert!(vertices[0]["uri"]
        .as_str()
        .expect("uri string")
        .ends_with("/src/App/Program.cs"));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains(&root.join("src/App/App.csproj").display().to_string()));
}

#[test]
fn extracts_structure_of_every_document() {
    let (_temp, root) = setup_solution();

    let output = lsif_client()
        .env("RUST_LOG", "lsif_cli=debug")
        .arg(root.join("App.sln"))
        .output()
        .expect("command run");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(!stderr.contains("Failed to read"), "{stderr}");
    assert!(stderr.contains("class Program"), "{stderr}");
    assert!(stderr.contains("method Main"), "{stderr}");
    assert!(stderr.contains("class Widget"), "{stderr}");
    assert!(stderr.contains("field y"), "{stderr}");
}

#[test]
fn missing_project_is_reported_once() {
    let (_temp, root) = setup_solution();
    fs::write(
        root.join("App.sln"),
        concat!(
            "Project(\"{9A19103F-16F7-4668-BE54-9A1E7A4F7556}\") = \"App\", \"src\\App\\App.csproj\", \"{A}\"\nEndProject\n",
            "Project(\"{9A19103F-16F7-4668-BE54-9A1E7A4F7556}\") = \"Gone\", \"src\\Gone\\Gone.csproj\", \"{B}\"\nEndProject\n",
        ),
    )
    .unwrap();

    let output = lsif_client()
        .arg(root.join("App.sln"))
        .output()
        .expect("command run");
    assert!(output.status.success());

    let graph: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(graph.as_array().expect("array").len(), 2);

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    let warnings: Vec<&str> = stderr.lines().filter(|line| line.contains("Gone.csproj:")).collect();
    assert_eq!(warnings.len(), 1, "{stderr}");
    assert!(warnings[0].contains("Failed to load project"));
}

#[test]
fn missing_argument_fails() {
    lsif_client()
        .assert()
        .failure()
        .stderr(predicate::str::contains("BUILD_DESCRIPTION"));
}

#[test]
fn missing_build_description_fails() {
    let temp = tempdir().unwrap();

    lsif_client()
        .arg(temp.path().join("Missing.sln"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Build description not found"));
}
