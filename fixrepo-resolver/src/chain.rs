/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Ordered repository lookup.

use fixrepo_repository::{Component, Field, MsgContent, Repository};
use smallvec::SmallVec;

/// Repositories queried in order until one answers.
#[derive(Debug, Clone)]
pub struct LookupChain<'a> {
    sources: SmallVec<[&'a Repository; 2]>,
}

impl<'a> LookupChain<'a> {
    /// Creates a chain of a primary repository and an optional fallback.
    #[must_use]
    pub fn new(primary: &'a Repository, fallback: Option<&'a Repository>) -> Self {
        let mut sources = SmallVec::new();
        sources.push(primary);
        sources.extend(fallback);
        Self { sources }
    }

    /// Returns the primary repository.
    #[must_use]
    pub fn primary(&self) -> &'a Repository {
        self.sources[0]
    }

    /// Returns the fallback repository, if any.
    #[must_use]
    pub fn fallback(&self) -> Option<&'a Repository> {
        self.sources.get(1).copied()
    }

    /// Returns the first answer of `lookup` across the chain.
    fn find<T>(&self, lookup: impl Fn(&'a Repository) -> Option<T>) -> Option<T> {
        self.sources.iter().find_map(|&repo| lookup(repo))
    }

    /// Gets a field by tag.
    #[must_use]
    pub fn field(&self, tag: u32) -> Option<&'a Field> {
        self.find(|repo| repo.field(tag))
    }

    /// Gets a field by name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&'a Field> {
        self.find(|repo| repo.field_by_name(name))
    }

    /// Gets a component by id.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&'a Component> {
        self.find(|repo| repo.component(id))
    }

    /// Gets a component by name.
    #[must_use]
    pub fn component_by_name(&self, name: &str) -> Option<&'a Component> {
        self.find(|repo| repo.component_by_name(name))
    }

    /// Returns the first non-empty content list for `id`.
    #[must_use]
    pub fn contents(&self, id: &str) -> &'a [MsgContent] {
        self.find(|repo| Some(repo.contents(id)).filter(|rows| !rows.is_empty()))
            .unwrap_or(&[])
    }
}
