//! Kothi is a plugin scaffolding generator for the Kothi framework.
//! It turns a plugin name into a ready-to-build plugin package: manifest,
//! TypeScript build configuration, source stub and documentation.

/// Code generators for the individual plugin files
pub mod artifacts;

/// Command-line interface module for the kothi application
pub mod cli;

/// Project configuration and runtime settings
/// Supports JSON and YAML formats (kothi.json, kothi.yml, kothi.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the kothi application
pub mod error;

/// Orchestration of a single plugin generation
pub mod generator;

/// Writes generated files into the plugins directory
pub mod materializer;

/// Plugin name validation and identifier derivation
pub mod naming;

/// User input and interaction handling
pub mod prompt;

/// MiniJinja template rendering
pub mod renderer;

/// Caller input for a generation
pub mod request;
