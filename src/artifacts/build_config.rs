//! `tsconfig.json` producer.

use serde::Serialize;

use super::{to_json, ArtifactKind, GeneratedArtifact};
use crate::constants::{OUTPUT_DIR, SOURCE_DIR};
use crate::error::Result;

/// Shared base configuration, relative to the plugin directory.
const BASE_CONFIG: &str = "../../../tsconfig.base.json";

/// The shared package, relative to the plugin directory.
const SHARED_PROJECT: &str = "../../../packages/shared";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub extends: String,
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub references: Vec<ProjectReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub out_dir: String,
    pub root_dir: String,
    pub composite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReference {
    pub path: String,
}

/// Builds the compiler configuration; identical for every plugin.
pub fn build() -> BuildConfig {
    BuildConfig {
        extends: BASE_CONFIG.to_string(),
        compiler_options: CompilerOptions {
            out_dir: OUTPUT_DIR.to_string(),
            root_dir: SOURCE_DIR.to_string(),
            composite: true,
        },
        include: vec![SOURCE_DIR.to_string()],
        exclude: vec![OUTPUT_DIR.to_string()],
        references: vec![ProjectReference {
            path: SHARED_PROJECT.to_string(),
        }],
    }
}

pub fn produce() -> Result<GeneratedArtifact> {
    Ok(GeneratedArtifact::new(ArtifactKind::BuildConfig, to_json(&build())?))
}
