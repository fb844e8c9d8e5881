/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Identifier normalization.
//!
//! Symbolic enum names in the repository are PascalCase (`TestRequest`,
//! `IOIQualifier`); the dictionary format expects `UPPER_SNAKE_CASE`.

use regex::Regex;
use std::sync::LazyLock;

/// Lowercase letter or digit followed by an uppercase letter: `aB`, `0A`.
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static pattern"));

/// Run of uppercase letters followed by an uppercase-lowercase pair: `ABc`.
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("static pattern"));

/// Components whose names collide with field names in the dictionary format,
/// paired with the alias emitted in their place.
pub const COMPONENT_ALIASES: [(&str, &str); 3] = [
    ("SecurityXML", "SecurityXMLBlock"),
    ("DerivativeSecurityXML", "DerivativeSecurityXMLBlock"),
    ("RateSource", "RateSourceBlock"),
];

/// Converts a PascalCase or camelCase identifier to `UPPER_SNAKE_CASE`.
///
/// Identifiers that already contain an underscore keep their segmentation
/// and are only uppercased.
///
/// # Arguments
/// * `name` - The symbolic name from the repository
#[must_use]
pub fn camel_to_upper_snake(name: &str) -> String {
    if name.contains('_') {
        return name.to_uppercase();
    }

    // The acronym pass must run second: it only sees boundaries the word
    // pass left untouched.
    let split = WORD_BOUNDARY.replace_all(name, "${1}_${2}");
    let split = ACRONYM_BOUNDARY.replace_all(&split, "${1}_${2}");
    split.to_uppercase()
}

/// Returns the name a component is emitted under.
///
/// Resolution always works with the repository name; the alias is applied
/// only when the dictionary is written.
#[must_use]
pub fn component_alias(name: &str) -> &str {
    COMPONENT_ALIASES
        .iter()
        .find(|(original, _)| *original == name)
        .map_or(name, |&(_, alias)| alias)
}
