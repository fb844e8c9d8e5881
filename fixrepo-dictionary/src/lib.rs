/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixrepo Dictionary
//!
//! The resolved dictionary produced from a FIX repository.
//!
//! This crate provides:
//! - **Schema definitions**: Members, field, message, and component definitions
//! - **Traversal**: A single visitor over member trees used for field
//!   collection and rendering

pub mod schema;
pub mod visit;

pub use schema::{
    ComponentDef, Dictionary, EnumValue, FieldDef, Member, MessageCategory, MessageDef,
};
pub use visit::{MemberVisitor, walk_members};
