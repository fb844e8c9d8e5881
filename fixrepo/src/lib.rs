/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixrepo
//!
//! Converts a FIX Repository 2010 Edition export into a denormalized,
//! name-addressed dictionary XML for tag-value codec libraries.
//!
//! The repository stores fields, enums, components, messages and message
//! contents as separate ID-indexed tables. The generated dictionary expands
//! every repeating group inline, names components instead of numbering them,
//! and keeps only the fields that are actually referenced.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixrepo::prelude::*;
//!
//! let config = ConverterConfig::new("fix_repository", "FIXT.1.1", "out/FIXT11.xml");
//! let report = convert(&config)?;
//! println!("{report}");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Normalizers, ordering keys, versions and error definitions
//! - [`repository`]: Repository table loading and indexing
//! - [`dictionary`]: The resolved dictionary model
//! - [`resolver`]: Repository to dictionary resolution
//! - [`writer`]: Dictionary XML rendering

pub mod config;
pub mod convert;

pub mod core {
    //! Normalizers, ordering keys, versions and error definitions.
    pub use fixrepo_core::*;
}

pub mod repository {
    //! Repository table loading and indexing.
    pub use fixrepo_repository::*;
}

pub mod dictionary {
    //! The resolved dictionary model.
    pub use fixrepo_dictionary::*;
}

pub mod resolver {
    //! Repository to dictionary resolution.
    pub use fixrepo_resolver::*;
}

pub mod writer {
    //! Dictionary XML rendering.
    pub use fixrepo_writer::*;
}

pub use config::{ConverterConfig, default_fallback_for};
pub use convert::{ConversionReport, convert};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ConverterConfig, default_fallback_for};
    pub use crate::convert::{ConversionReport, convert};

    // Core types
    pub use fixrepo_core::{
        FixFamily, FixRepoError, RepositoryError, ResolveError, Result, SchemaVersion, WriteError,
    };

    // Repository
    pub use fixrepo_repository::{Repository, RepositoryBuilder};

    // Dictionary
    pub use fixrepo_dictionary::{
        ComponentDef, Dictionary, EnumValue, FieldDef, Member, MessageCategory, MessageDef,
    };

    // Resolution and rendering
    pub use fixrepo_resolver::{Resolver, ResolverOptions};
    pub use fixrepo_writer::{DictionaryWriter, WriterConfig};
}
