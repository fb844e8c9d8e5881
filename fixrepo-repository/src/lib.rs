/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixrepo Repository
//!
//! In-memory model of one FIX Repository 2010 Edition version.
//!
//! This crate provides:
//! - **Records**: Fields, enumerations, components, messages and content rows
//! - **Indexes**: Lookups by tag, name and component id, with content rows
//!   grouped per container and ordered by position
//! - **Loader**: Reads `<root>/<version>/Base/*.xml` into a [`Repository`]
//!
//! A repository is immutable once built. References between tables are not
//! checked here; dangling ones are dealt with during resolution.

pub mod loader;
pub mod model;
pub mod repository;

pub use loader::{BASE_DIR, load_repository};
pub use model::{Component, Enum, Field, Message, MsgContent};
pub use repository::{Repository, RepositoryBuilder};
