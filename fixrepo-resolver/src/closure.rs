/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Collection of the field tags a dictionary actually references.
//!
//! A base repository carries well over a thousand fields while a single
//! layer uses a fraction of them. Only tags reachable from a field member or
//! a group counter end up in the output.

use crate::chain::LookupChain;
use fixrepo_dictionary::{Member, MemberVisitor, walk_members};
use std::collections::BTreeSet;
use std::convert::Infallible;
use tracing::trace;

/// Visitor that records the tag of every field and group counter it meets.
///
/// Component references are not fields and are ignored.
#[derive(Debug)]
pub struct FieldCollector<'c, 'a> {
    chain: &'c LookupChain<'a>,
    tags: BTreeSet<u32>,
}

impl<'c, 'a> FieldCollector<'c, 'a> {
    /// Creates a collector resolving names through `chain`.
    #[must_use]
    pub fn new(chain: &'c LookupChain<'a>) -> Self {
        Self {
            chain,
            tags: BTreeSet::new(),
        }
    }

    /// Returns the collected tags in ascending order.
    #[must_use]
    pub fn into_tags(self) -> BTreeSet<u32> {
        self.tags
    }

    fn record(&mut self, name: &str) {
        match self.chain.field_by_name(name) {
            Some(field) => {
                self.tags.insert(field.tag);
            }
            None => trace!(name, "referenced name is not a known field"),
        }
    }
}

impl MemberVisitor for FieldCollector<'_, '_> {
    type Error = Infallible;

    fn visit_field(&mut self, name: &str, _required: bool) -> Result<(), Infallible> {
        self.record(name);
        Ok(())
    }

    fn enter_group(&mut self, group: &Member) -> Result<(), Infallible> {
        self.record(group.name());
        Ok(())
    }
}

/// Collects the tags referenced by any of the given member lists.
pub fn collect_referenced_tags<'m>(
    chain: &LookupChain<'_>,
    member_lists: impl IntoIterator<Item = &'m [Member]>,
) -> BTreeSet<u32> {
    let mut collector = FieldCollector::new(chain);
    for members in member_lists {
        match walk_members(members, &mut collector) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
    collector.into_tags()
}
