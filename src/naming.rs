//! Derivation of canonical identifiers from a raw plugin name.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::constants::CLASS_SUFFIX;
use crate::error::{Error, Result};

/// Lowercase segments separated by single hyphens; the first character is a letter.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap());

/// Canonical identifier forms of a plugin name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    /// Directory and package name, e.g. `kot-printer`.
    pub slug: String,
    /// Generated class name, e.g. `KotPrinterPlugin`.
    pub class_identifier: String,
}

/// Returns true if `name` is an acceptable plugin name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Derives the slug and class identifier from a raw plugin name.
///
/// # Errors
/// * `Error::InvalidName` if the name is empty or not in `kebab-case`
pub fn derive(raw_name: &str) -> Result<DerivedIdentifiers> {
    if !is_valid_name(raw_name) {
        return Err(Error::InvalidName {
            name: raw_name.to_string(),
        });
    }

    let mut class_identifier: String = raw_name.split('-').map(capitalize).collect();
    class_identifier.push_str(CLASS_SUFFIX);

    debug!("Derived class identifier '{class_identifier}' from '{raw_name}'.");

    Ok(DerivedIdentifiers {
        slug: raw_name.to_string(),
        class_identifier,
    })
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
