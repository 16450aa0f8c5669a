use std::fs;

use kothi::artifacts::produce_all;
use kothi::error::Error;
use kothi::materializer::{ensure_dir, materialize};
use kothi::naming::derive;
use kothi::renderer::MiniJinjaRenderer;
use kothi::request::GenerationRequest;
use tempfile::TempDir;

fn kot_printer_artifacts() -> kothi::artifacts::GeneratedArtifactSet {
    let request = GenerationRequest::new("kot-printer");
    produce_all(&derive("kot-printer").unwrap(), &request, &MiniJinjaRenderer::new()).unwrap()
}

#[test]
fn test_materialize_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("packages/plugins");
    let artifacts = kot_printer_artifacts();

    let written = materialize(&root, "kot-printer", &artifacts).unwrap();

    let plugin_dir = root.join("kot-printer");
    assert_eq!(
        written,
        vec![
            plugin_dir.join("package.json"),
            plugin_dir.join("tsconfig.json"),
            plugin_dir.join("src/index.ts"),
            plugin_dir.join("README.md"),
        ]
    );
    assert_eq!(
        fs::read_to_string(plugin_dir.join("src/index.ts")).unwrap(),
        artifacts.source_stub.content
    );
}

#[test]
fn test_materialize_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let plugin_dir = temp_dir.path().join("kot-printer");
    fs::create_dir_all(plugin_dir.join("src")).unwrap();
    fs::write(plugin_dir.join("README.md"), "my notes").unwrap();

    materialize(temp_dir.path(), "kot-printer", &kot_printer_artifacts()).unwrap();

    let readme = fs::read_to_string(plugin_dir.join("README.md")).unwrap();
    assert!(readme.starts_with("# KotPrinterPlugin"));
}

#[test]
fn test_materialize_path_collision() {
    let temp_dir = TempDir::new().unwrap();
    let plugin_path = temp_dir.path().join("kot-printer");
    fs::write(&plugin_path, "not a directory").unwrap();

    match materialize(temp_dir.path(), "kot-printer", &kot_printer_artifacts()) {
        Err(Error::FileSystem { path, .. }) => assert_eq!(path, plugin_path),
        other => panic!("Expected FileSystem error, got {other:?}"),
    }
}

#[test]
fn test_materialize_keeps_earlier_writes() {
    let temp_dir = TempDir::new().unwrap();
    let plugin_dir = temp_dir.path().join("kot-printer");
    // A directory where the readme should go makes the last write fail.
    fs::create_dir_all(plugin_dir.join("README.md")).unwrap();

    match materialize(temp_dir.path(), "kot-printer", &kot_printer_artifacts()) {
        Err(Error::FileSystem { path, .. }) => assert_eq!(path, plugin_dir.join("README.md")),
        other => panic!("Expected FileSystem error, got {other:?}"),
    }

    assert!(plugin_dir.join("package.json").is_file());
    assert!(plugin_dir.join("tsconfig.json").is_file());
    assert!(plugin_dir.join("src/index.ts").is_file());
}

#[test]
fn test_ensure_dir_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a/b/c");

    ensure_dir(&path).unwrap();
    ensure_dir(&path).unwrap();
    assert!(path.is_dir());
}
