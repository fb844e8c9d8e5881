/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Schema definitions for resolved dictionaries.
//!
//! This module defines the structures of the output dictionary:
//! - [`Member`]: Field, component reference, or repeating group entry
//! - [`FieldDef`]: Field definitions with number, name, type and values
//! - [`MessageDef`]: Message definitions with their members
//! - [`ComponentDef`]: Reusable component definitions
//! - [`Dictionary`]: Complete dictionary of one repository version
//!
//! All lists keep the order the resolver produced them in.

use fixrepo_core::types::NUM_IN_GROUP_TOKEN;
use fixrepo_core::version::SchemaVersion;
use serde::{Deserialize, Serialize};

/// An entry of a header, trailer, message, component, or group body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    /// Reference to a field by name.
    Field {
        /// Field name.
        name: String,
        /// Whether the field is required.
        required: bool,
    },
    /// Reference to a component by its repository name.
    Component {
        /// Component name.
        name: String,
        /// Whether the component is required.
        required: bool,
    },
    /// Repeating group, named after its counter field.
    Group {
        /// Counter field name.
        name: String,
        /// Whether the group is required.
        required: bool,
        /// Members of each group entry.
        members: Vec<Member>,
    },
}

impl Member {
    /// Creates a field member.
    #[must_use]
    pub fn field(name: impl Into<String>, required: bool) -> Self {
        Self::Field {
            name: name.into(),
            required,
        }
    }

    /// Creates a component reference.
    #[must_use]
    pub fn component(name: impl Into<String>, required: bool) -> Self {
        Self::Component {
            name: name.into(),
            required,
        }
    }

    /// Creates a repeating group.
    #[must_use]
    pub fn group(name: impl Into<String>, required: bool, members: Vec<Member>) -> Self {
        Self::Group {
            name: name.into(),
            required,
            members,
        }
    }

    /// Returns the referenced name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field { name, .. } | Self::Component { name, .. } | Self::Group { name, .. } => {
                name
            }
        }
    }

    /// Returns whether the member is required.
    #[must_use]
    pub const fn required(&self) -> bool {
        match self {
            Self::Field { required, .. }
            | Self::Component { required, .. }
            | Self::Group { required, .. } => *required,
        }
    }

    /// Overrides the required flag.
    pub fn set_required(&mut self, value: bool) {
        match self {
            Self::Field { required, .. }
            | Self::Component { required, .. }
            | Self::Group { required, .. } => *required = value,
        }
    }

    /// Returns true for repeating groups.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

/// An enumerated value of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Wire value.
    pub value: String,
    /// `UPPER_SNAKE_CASE` description.
    pub description: String,
}

impl EnumValue {
    /// Creates an enumerated value.
    #[must_use]
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
        }
    }
}

/// Definition of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub number: u32,
    /// Field name.
    pub name: String,
    /// Canonical type token (e.g. `STRING`, `NUMINGROUP`).
    pub field_type: String,
    /// Enumerated values, in output order.
    pub values: Vec<EnumValue>,
}

impl FieldDef {
    /// Creates a field definition without values.
    ///
    /// # Arguments
    /// * `number` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The canonical type token
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            field_type: field_type.into(),
            values: Vec::new(),
        }
    }

    /// Adds enumerated values.
    #[must_use]
    pub fn with_values(mut self, values: Vec<EnumValue>) -> Self {
        self.values = values;
        self
    }

    /// Returns true if the field counts repeating group entries.
    #[must_use]
    pub fn is_group_counter(&self) -> bool {
        self.field_type == NUM_IN_GROUP_TOKEN
    }
}

/// Message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageCategory {
    /// Administrative message (session level).
    Admin,
    /// Application message.
    App,
}

impl MessageCategory {
    /// Returns the category as written to the dictionary.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::App => "app",
        }
    }
}

/// Definition of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Message name.
    pub name: String,
    /// Message type value (tag 35).
    pub msg_type: String,
    /// Message category.
    pub category: MessageCategory,
    /// Body members.
    pub members: Vec<Member>,
}

/// Definition of a reusable component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDef {
    /// Component name as found in the repository.
    pub name: String,
    /// Body members.
    pub members: Vec<Member>,
}

/// Complete resolved dictionary for one repository version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Protocol family and version.
    pub version: SchemaVersion,
    /// Header members.
    pub header: Vec<Member>,
    /// Trailer members.
    pub trailer: Vec<Member>,
    /// Messages, ordered by message type.
    pub messages: Vec<MessageDef>,
    /// Components, in repository order.
    pub components: Vec<ComponentDef>,
    /// Field definitions, ordered by tag.
    pub fields: Vec<FieldDef>,
}

impl Dictionary {
    /// Creates an empty dictionary for the specified version.
    ///
    /// # Arguments
    /// * `version` - The repository version
    #[must_use]
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            header: Vec::new(),
            trailer: Vec::new(),
            messages: Vec::new(),
            components: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Gets a field definition by tag.
    #[must_use]
    pub fn get_field(&self, number: u32) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.number == number)
    }

    /// Gets a field definition by name.
    #[must_use]
    pub fn get_field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Gets a message definition by type.
    #[must_use]
    pub fn get_message(&self, msg_type: &str) -> Option<&MessageDef> {
        self.messages.iter().find(|m| m.msg_type == msg_type)
    }

    /// Gets a component definition by name.
    #[must_use]
    pub fn get_component(&self, name: &str) -> Option<&ComponentDef> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Returns the number of repeating group counter fields.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_group_counter()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixrepo_core::version::FixFamily;

    #[test]
    fn test_member_accessors() {
        let mut group = Member::group(
            "NoPartyIDs",
            false,
            vec![Member::field("PartyID", true)],
        );
        assert_eq!(group.name(), "NoPartyIDs");
        assert!(!group.required());
        assert!(group.is_group());

        group.set_required(true);
        assert!(group.required());
        assert!(!Member::component("Instrument", true).is_group());
    }

    #[test]
    fn test_message_category_as_str() {
        assert_eq!(MessageCategory::Admin.as_str(), "admin");
        assert_eq!(MessageCategory::App.as_str(), "app");
    }

    #[test]
    fn test_dictionary_lookups() {
        let mut dict = Dictionary::new(SchemaVersion::new(FixFamily::Fix, 5, 0, 2));
        dict.fields.push(FieldDef::new(35, "MsgType", "STRING"));
        dict.fields.push(FieldDef::new(453, "NoPartyIDs", "NUMINGROUP"));
        dict.messages.push(MessageDef {
            name: "Heartbeat".into(),
            msg_type: "0".into(),
            category: MessageCategory::Admin,
            members: vec![Member::field("TestReqID", false)],
        });

        assert!(dict.get_field(35).is_some());
        assert!(dict.get_field_by_name("NoPartyIDs").is_some());
        assert!(dict.get_field(999).is_none());
        assert_eq!(dict.get_message("0").map(|m| m.name.as_str()), Some("Heartbeat"));
        assert!(dict.get_component("Parties").is_none());
        assert_eq!(dict.group_count(), 1);
    }
}
