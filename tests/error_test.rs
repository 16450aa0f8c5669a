use std::io;
use std::path::PathBuf;

use kothi::error::Error;

#[test]
fn test_file_system_error_keeps_path_and_cause() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err = Error::file_system("/plugins/kot-printer", io_err);

    match &err {
        Error::FileSystem { path, source } => {
            assert_eq!(path, &PathBuf::from("/plugins/kot-printer"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        _ => panic!("Expected FileSystem variant"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_error_display() {
    let err = Error::InvalidName {
        name: "Bad_Name".to_string(),
    };
    assert!(err.to_string().contains("'Bad_Name'"));

    let err = Error::Config("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::PluginExists {
        plugin_dir: PathBuf::from("plugins/kot-printer"),
    };
    assert_eq!(
        err.to_string(),
        "Plugin directory 'plugins/kot-printer' already exists. Use --force to overwrite it."
    );
}

#[test]
fn test_serialization_error_is_unknown() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();

    assert!(matches!(err, Error::Unknown(_)));
}
