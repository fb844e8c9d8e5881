/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Repository records.
//!
//! One struct per table row, keeping the raw repository spelling of every
//! value. Interpretation (type mapping, name casing) happens later.

use fixrepo_core::types::NUM_IN_GROUP;
use serde::{Deserialize, Serialize};

/// Marker row that pulls in the standard header.
pub const STANDARD_HEADER: &str = "StandardHeader";

/// Marker row that pulls in the standard trailer.
pub const STANDARD_TRAILER: &str = "StandardTrailer";

/// A row of `Fields.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Repository type name (e.g. `String`, `NumInGroup`).
    pub type_name: String,
}

impl Field {
    /// Creates a field record.
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Returns true if this field counts repeating group entries.
    #[must_use]
    pub fn is_num_in_group(&self) -> bool {
        self.type_name == NUM_IN_GROUP
    }
}

/// A row of `Enums.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    /// Tag of the field this value belongs to.
    pub tag: u32,
    /// Wire value.
    pub value: String,
    /// PascalCase symbolic name.
    pub symbolic_name: String,
    /// Ordering hint within the field's values.
    pub sort: i64,
}

impl Enum {
    /// Creates an enumeration record.
    #[must_use]
    pub fn new(
        tag: u32,
        value: impl Into<String>,
        symbolic_name: impl Into<String>,
        sort: i64,
    ) -> Self {
        Self {
            tag,
            value: value.into(),
            symbolic_name: symbolic_name.into(),
            sort,
        }
    }
}

/// A row of `Components.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component id, shared with content rows.
    pub id: String,
    /// Component name.
    pub name: String,
    /// Component type (`Block`, `BlockRepeating`, `ImplicitBlockRepeating`, ...).
    pub component_type: String,
}

impl Component {
    /// Creates a component record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type: component_type.into(),
        }
    }

    /// Returns true if the component type marks a repeating group.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.component_type.contains("Repeating")
    }
}

/// A row of `Messages.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Id of the content rows forming the message body.
    pub component_id: String,
    /// Message name.
    pub name: String,
    /// Message type code (tag 35 value).
    pub msg_type: String,
    /// Category (`Session`, `SingleGeneralOrderHandling`, ...).
    pub category_id: String,
}

impl Message {
    /// Creates a message record.
    #[must_use]
    pub fn new(
        component_id: impl Into<String>,
        name: impl Into<String>,
        msg_type: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            name: name.into(),
            msg_type: msg_type.into(),
            category_id: category_id.into(),
        }
    }

    /// Returns true for session level messages.
    #[must_use]
    pub fn is_session(&self) -> bool {
        self.category_id == "Session"
    }
}

/// A row of `MsgContents.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgContent {
    /// Id of the message or component this row belongs to.
    pub component_id: String,
    /// Field tag digits or a component name.
    pub tag_text: String,
    /// Dotted position within the container.
    pub position: String,
    /// Required flag, `"1"` when required.
    pub required: String,
    /// Nesting depth hint.
    pub indent: u32,
}

impl MsgContent {
    /// Creates a content row.
    #[must_use]
    pub fn new(
        component_id: impl Into<String>,
        tag_text: impl Into<String>,
        position: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            tag_text: tag_text.into(),
            position: position.into(),
            required: if required { "1" } else { "0" }.to_string(),
            indent: 0,
        }
    }

    /// Returns true if the row references a field by tag.
    #[must_use]
    pub fn is_field_ref(&self) -> bool {
        !self.tag_text.is_empty() && self.tag_text.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns the referenced tag, if the row references a field.
    #[must_use]
    pub fn tag_number(&self) -> Option<u32> {
        if self.is_field_ref() {
            self.tag_text.parse().ok()
        } else {
            None
        }
    }

    /// Returns true for the standard header and trailer marker rows.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.tag_text == STANDARD_HEADER || self.tag_text == STANDARD_TRAILER
    }

    /// Returns true if the row is required in its container.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required == "1"
    }
}
