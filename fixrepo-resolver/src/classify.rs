/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Repeating group detection.
//!
//! The repository marks most repeating groups with a `*Repeating` component
//! type, but not all of them. A container whose first row is a `NumInGroup`
//! counter field is a group as well.

use crate::chain::LookupChain;
use fixrepo_repository::MsgContent;

/// Shape of a message or component body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape<'a> {
    /// Repeating group: the first row is the counter, the rest the entry.
    Group(&'a [MsgContent]),
    /// Plain list of fields and component references.
    Flat(&'a [MsgContent]),
}

impl<'a> BodyShape<'a> {
    /// Returns true for repeating groups.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Returns the content rows, ordered by position.
    #[must_use]
    pub const fn rows(&self) -> &'a [MsgContent] {
        match *self {
            Self::Group(rows) | Self::Flat(rows) => rows,
        }
    }
}

impl<'a> LookupChain<'a> {
    /// Classifies the body of the message or component with the given id.
    #[must_use]
    pub fn classify(&self, id: &str) -> BodyShape<'a> {
        let rows = self.contents(id);
        let repeating = self.component(id).is_some_and(|c| c.is_repeating());
        let counter_first = rows
            .first()
            .and_then(MsgContent::tag_number)
            .and_then(|tag| self.field(tag))
            .is_some_and(|field| field.is_num_in_group());

        if repeating || counter_first {
            BodyShape::Group(rows)
        } else {
            BodyShape::Flat(rows)
        }
    }
}
