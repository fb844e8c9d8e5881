/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Repository version strings.
//!
//! Two forms exist: the session transport layer `FIXT.<major>.<minor>` and
//! application layers `FIX.<major>.<minor>[SP<servicepack>]`.

use crate::error::ResolveError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Default version of the session transport layer.
pub const DEFAULT_DEPENDENT_VERSION: &str = "FIXT.1.1";

/// Application layer paired with [`DEFAULT_DEPENDENT_VERSION`] when no
/// fallback is given explicitly.
pub const DEFAULT_APPLICATION_FALLBACK: &str = "FIX.5.0SP2";

static APPLICATION_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:SP(\d+))?").expect("static pattern"));

/// Protocol family of a repository version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixFamily {
    /// Application layer (`FIX.x.y`).
    Fix,
    /// Session transport layer (`FIXT.x.y`).
    Fixt,
}

impl FixFamily {
    /// Returns the family tag written to the dictionary root.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fix => "FIX",
            Self::Fixt => "FIXT",
        }
    }
}

impl fmt::Display for FixFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed repository version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Protocol family.
    pub family: FixFamily,
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Service pack, 0 when absent.
    pub servicepack: u32,
}

impl SchemaVersion {
    /// Version assumed for an application layer whose string cannot be parsed.
    pub const APPLICATION_DEFAULT: Self = Self::new(FixFamily::Fix, 5, 0, 2);

    /// Version assumed for a transport layer whose string cannot be parsed.
    pub const DEPENDENT_DEFAULT: Self = Self::new(FixFamily::Fixt, 1, 1, 0);

    /// Creates a version.
    #[must_use]
    pub const fn new(family: FixFamily, major: u32, minor: u32, servicepack: u32) -> Self {
        Self {
            family,
            major,
            minor,
            servicepack,
        }
    }

    /// Returns true if the version string names a session transport layer.
    #[must_use]
    pub fn is_dependent_layer_str(version: &str) -> bool {
        version.starts_with("FIXT")
    }

    /// Returns true for the session transport layer.
    #[must_use]
    pub const fn is_dependent_layer(&self) -> bool {
        matches!(self.family, FixFamily::Fixt)
    }

    /// Parses a version string, failing on anything outside the grammar.
    ///
    /// # Errors
    /// Returns [`ResolveError::InvalidVersion`] when the numeric parts are
    /// missing or malformed.
    pub fn parse_strict(version: &str) -> Result<Self, ResolveError> {
        Self::try_parse(version).ok_or_else(|| ResolveError::InvalidVersion(version.to_string()))
    }

    /// Parses a version string, substituting the family default when the
    /// numeric parts cannot be read.
    ///
    /// Application layers fall back to 5.0 SP2 and the transport layer to 1.1.
    #[must_use]
    pub fn parse_lenient(version: &str) -> Self {
        Self::try_parse(version).unwrap_or_else(|| {
            let fallback = if Self::is_dependent_layer_str(version) {
                Self::DEPENDENT_DEFAULT
            } else {
                Self::APPLICATION_DEFAULT
            };
            tracing::warn!(version, %fallback, "unparseable version string, using default");
            fallback
        })
    }

    fn try_parse(version: &str) -> Option<Self> {
        if Self::is_dependent_layer_str(version) {
            let rest = version.strip_prefix("FIXT.").unwrap_or(version);
            let mut parts = rest.split('.');
            let major = parts.next()?.parse().ok()?;
            let minor = match parts.next() {
                Some(minor) => minor.parse().ok()?,
                None => 0,
            };
            Some(Self::new(FixFamily::Fixt, major, minor, 0))
        } else {
            let rest = version.strip_prefix("FIX.").unwrap_or(version);
            let captures = APPLICATION_VERSION.captures(rest)?;
            let major = captures.get(1)?.as_str().parse().ok()?;
            let minor = captures.get(2)?.as_str().parse().ok()?;
            let servicepack = match captures.get(3) {
                Some(sp) => sp.as_str().parse().ok()?,
                None => 0,
            };
            Some(Self::new(FixFamily::Fix, major, minor, servicepack))
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.family, self.major, self.minor)?;
        if self.servicepack > 0 {
            write!(f, "SP{}", self.servicepack)?;
        }
        Ok(())
    }
}
