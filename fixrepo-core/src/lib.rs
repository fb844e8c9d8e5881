/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixrepo Core
//!
//! Core types, normalizers, and error definitions shared by the fixrepo crates.
//!
//! This crate provides:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Normalizers**: Repository type names to canonical tokens, symbolic
//!   enum names to `UPPER_SNAKE_CASE`, and the fixed component alias table
//! - **Ordering keys**: Dotted content positions and message type codes
//! - **Versions**: `FIX.x.y[SPn]` and `FIXT.x.y` version strings

pub mod error;
pub mod naming;
pub mod ordering;
pub mod types;
pub mod version;

pub use error::{FixRepoError, RepositoryError, ResolveError, Result, WriteError};
pub use naming::{camel_to_upper_snake, component_alias};
pub use ordering::{MsgTypeKey, Position, msg_type_sort_key};
pub use types::{NUM_IN_GROUP, canonical_type};
pub use version::{FixFamily, SchemaVersion};
