/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixrepo Resolver
//!
//! Turns an ID-indexed [`Repository`](fixrepo_repository::Repository) into a
//! name-addressed [`Dictionary`](fixrepo_dictionary::Dictionary).
//!
//! A transport layer repository (`FIXT.1.1`) only defines a handful of
//! fields, components and messages of its own and borrows the rest from an
//! application layer (`FIX.5.0SP2`). The resolver therefore looks every
//! reference up in an ordered [`LookupChain`]: the primary repository first,
//! the fallback only on a miss.
//!
//! Resolution steps:
//! 1. Header, with repeating group components inlined (transport layer only)
//! 2. Trailer (transport layer only)
//! 3. Messages, filtered and ordered by message type
//! 4. Components, minus the header, trailer and header-inlined groups
//! 5. Field definitions for exactly the tags referenced by 1-4

pub mod chain;
pub mod classify;
pub mod closure;
pub mod resolver;

pub use chain::LookupChain;
pub use classify::BodyShape;
pub use closure::{FieldCollector, collect_referenced_tags};
pub use resolver::{MSG_TYPE_TAG, Resolver, ResolverOptions};
