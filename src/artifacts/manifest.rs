//! `package.json` producer.

use indexmap::IndexMap;
use serde::Serialize;

use super::{to_json, ArtifactKind, GeneratedArtifact};
use crate::constants::{FRAMEWORK_NAME, INITIAL_VERSION, OUTPUT_DIR, PACKAGE_SCOPE};
use crate::error::Result;
use crate::naming::DerivedIdentifiers;
use crate::request::GenerationRequest;

/// Package descriptor of a generated plugin. Field order is the output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub main: String,
    pub types: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

const SCRIPTS: [(&str, &str); 7] = [
    ("build", "tsc"),
    ("dev", "tsc --watch"),
    ("test", "jest"),
    ("lint", "eslint src --ext .ts"),
    ("format", "prettier --write src/**/*.ts"),
    ("clean", "rm -rf dist"),
    ("type-check", "tsc --noEmit"),
];

const TYPESCRIPT_VERSION: &str = "^5.7.3";

/// Resolves sibling packages from the monorepo instead of the registry.
const WORKSPACE_REFERENCE: &str = "workspace:*";

/// Description used when the request carries none.
pub fn default_description(raw_name: &str) -> String {
    format!("{FRAMEWORK_NAME} plugin for {raw_name}")
}

fn string_map<'a, I>(pairs: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Builds the manifest for a plugin.
pub fn build(ids: &DerivedIdentifiers, request: &GenerationRequest) -> Manifest {
    // An empty description counts as missing.
    let description = request
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map_or_else(|| default_description(&request.raw_name), str::to_string);

    let core = format!("{PACKAGE_SCOPE}/core");
    let shared = format!("{PACKAGE_SCOPE}/shared");

    Manifest {
        name: format!("{PACKAGE_SCOPE}/plugins/{}", ids.slug),
        version: INITIAL_VERSION.to_string(),
        description,
        author: request.author.clone().unwrap_or_default(),
        main: format!("{OUTPUT_DIR}/index.js"),
        types: format!("{OUTPUT_DIR}/index.d.ts"),
        scripts: string_map(SCRIPTS),
        dependencies: string_map([
            (core.as_str(), WORKSPACE_REFERENCE),
            (shared.as_str(), WORKSPACE_REFERENCE),
        ]),
        dev_dependencies: string_map([("typescript", TYPESCRIPT_VERSION)]),
    }
}

pub fn produce(ids: &DerivedIdentifiers, request: &GenerationRequest) -> Result<GeneratedArtifact> {
    let content = to_json(&build(ids, request))?;
    Ok(GeneratedArtifact::new(ArtifactKind::Manifest, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::derive;

    #[test]
    fn test_scripts_keep_declaration_order() {
        let request = GenerationRequest::new("kot-printer");
        let manifest = build(&derive("kot-printer").unwrap(), &request);

        let keys: Vec<&str> = manifest.scripts.keys().map(String::as_str).collect();
        assert_eq!(keys, ["build", "dev", "test", "lint", "format", "clean", "type-check"]);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let request = GenerationRequest::new("kot-printer");
        let artifact = produce(&derive("kot-printer").unwrap(), &request).unwrap();

        assert!(artifact.content.contains("\"devDependencies\": {"));
        assert!(artifact.content.ends_with("}\n"));
    }
}
