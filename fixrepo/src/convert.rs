/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Conversion pipeline: load, resolve, write.

use crate::config::ConverterConfig;
use fixrepo_core::Result;
use fixrepo_repository::Repository;
use fixrepo_resolver::Resolver;
use fixrepo_writer::DictionaryWriter;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Path the dictionary was written to.
    pub output: PathBuf,
    /// Number of messages.
    pub messages: usize,
    /// Number of components.
    pub components: usize,
    /// Number of field definitions.
    pub fields: usize,
    /// Number of group counter fields.
    pub groups: usize,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Messages: {}, Components: {}, Fields: {}, Groups: {}",
            self.messages, self.components, self.fields, self.groups
        )
    }
}

/// Runs one conversion.
///
/// The output file is only created once every stage has succeeded.
///
/// # Errors
/// Returns an error if a repository cannot be loaded, the version is
/// rejected in strict mode, or the output cannot be written.
pub fn convert(config: &ConverterConfig) -> Result<ConversionReport> {
    info!(version = %config.version, repo_dir = %config.repo_dir.display(), "loading repository");
    let primary = Repository::load(&config.repo_dir, &config.version)?;

    let fallback = match config.fallback_version() {
        Some(version) => {
            info!(%version, "loading fallback repository");
            Some(Repository::load(&config.repo_dir, version)?)
        }
        None => None,
    };

    let dictionary = Resolver::new(&primary, fallback.as_ref())
        .with_options(config.resolver_options())
        .resolve(&config.version)?;

    DictionaryWriter::with_config(config.writer.clone()).write_to_path(&dictionary, &config.output)?;

    Ok(ConversionReport {
        output: config.output.clone(),
        messages: dictionary.messages.len(),
        components: dictionary.components.len(),
        fields: dictionary.fields.len(),
        groups: dictionary.group_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = ConversionReport {
            output: PathBuf::from("out.xml"),
            messages: 7,
            components: 3,
            fields: 120,
            groups: 9,
        };
        assert_eq!(
            report.to_string(),
            "Messages: 7, Components: 3, Fields: 120, Groups: 9"
        );
    }
}
