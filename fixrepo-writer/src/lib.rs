/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixrepo Writer
//!
//! Renders a resolved [`Dictionary`](fixrepo_dictionary::Dictionary) as the
//! QuickFIX-style XML document consumed by tag-value codec libraries.
//!
//! The writer never reorders anything; list order is the resolver's.
//! Component names colliding with field names are replaced by their alias
//! here and only here.

pub mod writer;

pub use writer::{DictionaryWriter, WriterConfig};
