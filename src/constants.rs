//! Common constants used throughout the generator.

/// Display name of the host framework
pub const FRAMEWORK_NAME: &str = "Kothi";

/// npm scope of the host framework's packages
pub const PACKAGE_SCOPE: &str = "@kothi";

/// Suffix appended to every generated plugin class
pub const CLASS_SUFFIX: &str = "Plugin";

/// Version written into freshly generated manifests
pub const INITIAL_VERSION: &str = "0.1.0";

/// Supported project configuration file names
pub const CONFIG_FILES: [&str; 3] = ["kothi.json", "kothi.yml", "kothi.yaml"];

/// Plugins root relative to the project root, unless configured otherwise
pub const DEFAULT_PLUGINS_DIR: &str = "packages/plugins";

/// Source directory inside a generated plugin
pub const SOURCE_DIR: &str = "src";

/// Build output directory inside a generated plugin
pub const OUTPUT_DIR: &str = "dist";

pub const MANIFEST_FILE: &str = "package.json";
pub const BUILD_CONFIG_FILE: &str = "tsconfig.json";
pub const SOURCE_ENTRY_FILE: &str = "src/index.ts";
pub const README_FILE: &str = "README.md";
