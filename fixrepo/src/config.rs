/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Converter configuration.

use fixrepo_core::version::{DEFAULT_APPLICATION_FALLBACK, DEFAULT_DEPENDENT_VERSION};
use fixrepo_resolver::ResolverOptions;
use fixrepo_writer::WriterConfig;
use std::path::PathBuf;

/// Returns the fallback version used when none is configured explicitly.
///
/// Only the transport layer borrows from an application layer by default.
#[must_use]
pub fn default_fallback_for(version: &str) -> Option<&'static str> {
    (version == DEFAULT_DEPENDENT_VERSION).then_some(DEFAULT_APPLICATION_FALLBACK)
}

/// Configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Repository root holding one directory per version.
    pub repo_dir: PathBuf,
    /// Version to convert (e.g., "FIXT.1.1").
    pub version: String,
    /// Output XML path.
    pub output: PathBuf,
    /// Explicit fallback version.
    pub fallback_version: Option<String>,
    /// Whether an unparseable version string is an error.
    pub strict_version: bool,
    /// Rendering settings.
    pub writer: WriterConfig,
}

impl ConverterConfig {
    /// Creates a configuration with required fields.
    ///
    /// # Arguments
    /// * `repo_dir` - Repository root directory
    /// * `version` - Version directory name to convert
    /// * `output` - Output XML file path
    #[must_use]
    pub fn new(
        repo_dir: impl Into<PathBuf>,
        version: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            version: version.into(),
            output: output.into(),
            fallback_version: None,
            strict_version: false,
            writer: WriterConfig::default(),
        }
    }

    /// Sets an explicit fallback version.
    #[must_use]
    pub fn with_fallback_version(mut self, version: impl Into<String>) -> Self {
        self.fallback_version = Some(version.into());
        self
    }

    /// Sets strict version parsing.
    #[must_use]
    pub const fn with_strict_version(mut self, strict: bool) -> Self {
        self.strict_version = strict;
        self
    }

    /// Sets the rendering configuration.
    #[must_use]
    pub fn with_writer_config(mut self, writer: WriterConfig) -> Self {
        self.writer = writer;
        self
    }

    /// Returns the fallback version in effect: the explicit one, else the
    /// default for the target version.
    #[must_use]
    pub fn fallback_version(&self) -> Option<&str> {
        self.fallback_version
            .as_deref()
            .or_else(|| default_fallback_for(&self.version))
    }

    /// Returns the resolver options derived from this configuration.
    #[must_use]
    pub const fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            strict_version: self.strict_version,
        }
    }
}
