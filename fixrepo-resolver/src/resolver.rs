/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Repository to dictionary resolution.

use crate::chain::LookupChain;
use crate::classify::BodyShape;
use crate::closure::collect_referenced_tags;
use fixrepo_core::error::ResolveError;
use fixrepo_core::naming::camel_to_upper_snake;
use fixrepo_core::ordering::msg_type_sort_key;
use fixrepo_core::types::canonical_type;
use fixrepo_core::version::SchemaVersion;
use fixrepo_dictionary::{
    ComponentDef, Dictionary, EnumValue, FieldDef, Member, MessageCategory, MessageDef,
};
use fixrepo_repository::model::{STANDARD_HEADER, STANDARD_TRAILER};
use fixrepo_repository::{Enum, MsgContent, Repository};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

/// Tag of the `MsgType` field.
pub const MSG_TYPE_TAG: u32 = 35;

/// Options controlling resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Fail on version strings outside the grammar instead of substituting
    /// the family default.
    pub strict_version: bool,
}

impl ResolverOptions {
    /// Sets strict version parsing.
    #[must_use]
    pub const fn with_strict_version(mut self, strict: bool) -> Self {
        self.strict_version = strict;
        self
    }
}

/// Resolves a primary repository, backed by an optional fallback, into a
/// [`Dictionary`].
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    chain: LookupChain<'a>,
    options: ResolverOptions,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver with default options.
    ///
    /// # Arguments
    /// * `primary` - The repository being converted
    /// * `fallback` - Repository consulted when `primary` lacks a definition
    #[must_use]
    pub fn new(primary: &'a Repository, fallback: Option<&'a Repository>) -> Self {
        Self {
            chain: LookupChain::new(primary, fallback),
            options: ResolverOptions::default(),
        }
    }

    /// Replaces the resolver options.
    #[must_use]
    pub const fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the lookup chain.
    #[must_use]
    pub const fn chain(&self) -> &LookupChain<'a> {
        &self.chain
    }

    /// Resolves the repositories into a dictionary.
    ///
    /// # Arguments
    /// * `version` - Version string of the primary repository
    ///
    /// # Errors
    /// Returns [`ResolveError::InvalidVersion`] for an unparseable version
    /// string in strict mode. Never fails otherwise.
    pub fn resolve(&self, version: &str) -> Result<Dictionary, ResolveError> {
        let version = if self.options.strict_version {
            SchemaVersion::parse_strict(version)?
        } else {
            SchemaVersion::parse_lenient(version)
        };
        let dependent = version.is_dependent_layer();

        let mut dictionary = Dictionary::new(version);
        if dependent {
            dictionary.header = self.resolve_header();
            dictionary.trailer = self.resolve_trailer();
        }
        dictionary.messages = self.resolve_messages(dependent);
        dictionary.components = self.resolve_components(dependent);

        let referenced = collect_referenced_tags(
            &self.chain,
            dictionary
                .messages
                .iter()
                .map(|m| m.members.as_slice())
                .chain(dictionary.components.iter().map(|c| c.members.as_slice()))
                .chain([dictionary.header.as_slice(), dictionary.trailer.as_slice()]),
        );
        dictionary.fields = self.build_field_defs(&referenced, dependent);

        info!(
            %version,
            messages = dictionary.messages.len(),
            components = dictionary.components.len(),
            fields = dictionary.fields.len(),
            groups = dictionary.group_count(),
            "dictionary resolved"
        );
        Ok(dictionary)
    }

    /// Resolves a field row, skipping tags no repository defines.
    fn resolve_field_row(&self, row: &MsgContent) -> Option<Member> {
        let field = row.tag_number().and_then(|tag| self.chain.field(tag));
        if field.is_none() {
            debug!(container = %row.component_id, tag = %row.tag_text, "skipping unknown field tag");
        }
        field.map(|f| Member::field(f.name.clone(), row.is_required()))
    }

    /// Resolves rows one to one: fields stay fields, anything else becomes a
    /// component reference. Standard header and trailer markers are dropped.
    fn resolve_flat(&self, rows: &[MsgContent]) -> Vec<Member> {
        rows.iter()
            .filter(|row| !row.is_standard())
            .filter_map(|row| {
                if row.is_field_ref() {
                    self.resolve_field_row(row)
                } else {
                    Some(Member::component(row.tag_text.clone(), row.is_required()))
                }
            })
            .collect()
    }

    /// Resolves a repeating group body: the first row is the counter, the
    /// remaining rows form one group entry.
    fn resolve_group(&self, rows: &[MsgContent]) -> Vec<Member> {
        let Some((counter, entry)) = rows.split_first() else {
            return Vec::new();
        };

        let counter_name = if counter.is_field_ref() {
            counter
                .tag_number()
                .and_then(|tag| self.chain.field(tag))
                .map(|f| f.name.clone())
        } else {
            Some(counter.tag_text.clone())
        };
        let Some(counter_name) = counter_name.filter(|name| !name.is_empty()) else {
            debug!(container = %counter.component_id, counter = %counter.tag_text, "unresolvable group counter");
            return Vec::new();
        };

        vec![Member::group(
            counter_name,
            counter.is_required(),
            self.resolve_flat(entry),
        )]
    }

    fn resolve_shape(&self, shape: BodyShape<'_>) -> Vec<Member> {
        match shape {
            BodyShape::Group(rows) => self.resolve_group(rows),
            BodyShape::Flat(rows) => self.resolve_flat(rows),
        }
    }

    /// Resolves the body of a message or component.
    fn resolve_body(&self, id: &str) -> Vec<Member> {
        self.resolve_shape(self.chain.classify(id))
    }

    /// Rows of a primary repository container. The standard header and
    /// trailer are never taken from the fallback.
    fn container_rows(&self, name: &str) -> &'a [MsgContent] {
        self.chain
            .primary()
            .component_by_name(name)
            .map_or(&[][..], |c| self.chain.contents(&c.id))
    }

    /// Returns the group body of a component referenced by name, if the
    /// component is a repeating group.
    fn referenced_group(&self, name: &str) -> Option<BodyShape<'a>> {
        let component = self.chain.component_by_name(name)?;
        Some(self.chain.classify(&component.id)).filter(BodyShape::is_group)
    }

    /// Resolves the standard header. Repeating group components referenced
    /// by the header are inlined, carrying the header row's required flag.
    ///
    /// Only the primary repository's `StandardHeader` is used; a primary
    /// without one yields an empty header.
    fn resolve_header(&self) -> Vec<Member> {
        let mut members = Vec::new();
        for row in self.container_rows(STANDARD_HEADER) {
            if row.is_standard() {
                continue;
            }
            if row.is_field_ref() {
                members.extend(self.resolve_field_row(row));
                continue;
            }
            match self.referenced_group(&row.tag_text) {
                Some(shape) => {
                    let mut body = self.resolve_shape(shape);
                    for member in body.iter_mut().filter(|m| m.is_group()) {
                        member.set_required(row.is_required());
                    }
                    members.extend(body);
                }
                None => members.push(Member::component(row.tag_text.clone(), row.is_required())),
            }
        }
        members
    }

    fn resolve_trailer(&self) -> Vec<Member> {
        self.resolve_flat(self.container_rows(STANDARD_TRAILER))
    }

    /// Names of the group components the header inlines.
    fn header_inlined_components(&self) -> HashSet<&'a str> {
        self.container_rows(STANDARD_HEADER)
            .iter()
            .filter(|row| !row.is_field_ref() && !row.is_standard())
            .filter(|row| self.referenced_group(&row.tag_text).is_some())
            .map(|row| row.tag_text.as_str())
            .collect()
    }

    fn resolve_messages(&self, dependent: bool) -> Vec<MessageDef> {
        let mut messages: Vec<MessageDef> = self
            .chain
            .primary()
            .messages()
            .iter()
            .filter(|msg| dependent || !msg.is_session())
            .filter_map(|msg| {
                let members = self.resolve_body(&msg.component_id);
                if members.is_empty() {
                    debug!(message = %msg.name, "dropping message without body");
                    return None;
                }
                Some(MessageDef {
                    name: msg.name.clone(),
                    msg_type: msg.msg_type.clone(),
                    category: if msg.is_session() {
                        MessageCategory::Admin
                    } else {
                        MessageCategory::App
                    },
                    members,
                })
            })
            .collect();
        messages.sort_by_key(|m| msg_type_sort_key(&m.msg_type));
        messages
    }

    fn resolve_components(&self, dependent: bool) -> Vec<ComponentDef> {
        let inlined = if dependent {
            self.header_inlined_components()
        } else {
            HashSet::new()
        };

        self.chain
            .primary()
            .components()
            .iter()
            .filter(|c| c.name != STANDARD_HEADER && c.name != STANDARD_TRAILER)
            .filter(|c| !inlined.contains(c.name.as_str()))
            .map(|c| ComponentDef {
                name: c.name.clone(),
                members: self.resolve_body(&c.id),
            })
            .collect()
    }

    /// Returns the enumerations of a field before ordering.
    ///
    /// The primary repository's list wins when non-empty. A transport layer
    /// additionally accepts every message type of its application layer.
    fn field_enums(&self, tag: u32, dependent: bool) -> Vec<&'a Enum> {
        let primary = self.chain.primary().enums(tag);
        let fallback = self.chain.fallback().map_or(&[][..], |repo| repo.enums(tag));

        if dependent && tag == MSG_TYPE_TAG && self.chain.fallback().is_some() {
            let mut seen: HashSet<&str> = primary.iter().map(|e| e.value.as_str()).collect();
            let mut merged: Vec<&Enum> = primary.iter().collect();
            merged.extend(fallback.iter().filter(|e| seen.insert(e.value.as_str())));
            merged
        } else if primary.is_empty() {
            fallback.iter().collect()
        } else {
            primary.iter().collect()
        }
    }

    fn build_field_defs(&self, referenced: &BTreeSet<u32>, dependent: bool) -> Vec<FieldDef> {
        referenced
            .iter()
            .filter_map(|&tag| self.chain.field(tag))
            .map(|field| {
                let mut enums = self.field_enums(field.tag, dependent);
                enums.sort_by(|a, b| a.sort.cmp(&b.sort).then_with(|| a.value.cmp(&b.value)));
                let values = enums
                    .into_iter()
                    .map(|e| EnumValue::new(e.value.clone(), camel_to_upper_snake(&e.symbolic_name)))
                    .collect();
                FieldDef::new(field.tag, field.name.clone(), canonical_type(&field.type_name))
                    .with_values(values)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixrepo_core::version::FixFamily;
    use fixrepo_dictionary::{MemberVisitor, walk_members};
    use fixrepo_repository::{Component, Field, Message};
    use pretty_assertions::assert_eq;

    /// Transport layer with a header that references a hop group.
    fn fixt() -> Repository {
        Repository::builder("FIXT.1.1")
            .field(Field::new(8, "BeginString", "String"))
            .field(Field::new(35, "MsgType", "String"))
            .field(Field::new(10, "CheckSum", "String"))
            .field(Field::new(112, "TestReqID", "String"))
            .field(Field::new(627, "NoHops", "NumInGroup"))
            .field(Field::new(628, "HopCompID", "String"))
            .enumeration(Enum::new(35, "0", "Heartbeat", 1))
            .enumeration(Enum::new(35, "A", "Logon", 2))
            .component(Component::new("1001", "StandardHeader", "Block"))
            .component(Component::new("1002", "StandardTrailer", "Block"))
            .component(Component::new("2085", "HopGrp", "Block"))
            .message(Message::new("1", "Heartbeat", "0", "Session"))
            .message(Message::new("2", "Logon", "A", "Session"))
            .content(MsgContent::new("1001", "8", "1", true))
            .content(MsgContent::new("1001", "35", "2", true))
            .content(MsgContent::new("1001", "HopGrp", "3", true))
            .content(MsgContent::new("1002", "10", "1", true))
            .content(MsgContent::new("2085", "627", "1", false))
            .content(MsgContent::new("2085", "628", "2", false))
            .content(MsgContent::new("1", "StandardHeader", "1", true))
            .content(MsgContent::new("1", "112", "2", false))
            .content(MsgContent::new("1", "StandardTrailer", "3", true))
            .content(MsgContent::new("2", "StandardHeader", "1", true))
            .content(MsgContent::new("2", "StandardTrailer", "2", true))
            .build()
    }

    /// Application layer with two group shapes and a few unused fields.
    fn fix50() -> Repository {
        Repository::builder("FIX.5.0SP2")
            .field(Field::new(1, "Account", "String"))
            .field(Field::new(11, "ClOrdID", "String"))
            .field(Field::new(35, "MsgType", "String"))
            .field(Field::new(54, "Side", "char"))
            .field(Field::new(55, "Symbol", "String"))
            .field(Field::new(58, "Text", "String"))
            .field(Field::new(448, "PartyID", "String"))
            .field(Field::new(453, "NoPartyIDs", "NumInGroup"))
            .field(Field::new(5000, "UnusedField", "Pattern"))
            .field(Field::new(112, "TestReqID", "String"))
            .enumeration(Enum::new(35, "0", "Heartbeat", 1))
            .enumeration(Enum::new(35, "D", "NewOrderSingle", 14))
            .enumeration(Enum::new(35, "AE", "TradeCaptureReport", 60))
            .enumeration(Enum::new(54, "2", "Sell", 2))
            .enumeration(Enum::new(54, "1", "Buy", 1))
            .enumeration(Enum::new(54, "B", "AsDefined", 1))
            .component(Component::new("1003", "Instrument", "Block"))
            .component(Component::new("1012", "Parties", "Block"))
            .component(Component::new("1020", "BrokenGroup", "BlockRepeating"))
            .message(Message::new("1", "Heartbeat", "0", "Session"))
            .message(Message::new("60", "TradeCaptureReport", "AE", "TradeCapture"))
            .message(Message::new("14", "NewOrderSingle", "D", "SingleGeneralOrderHandling"))
            .message(Message::new("99", "XMLnonFIX", "n", "Session"))
            .message(Message::new("98", "EmptyApp", "z", "Other"))
            .content(MsgContent::new("1003", "55", "1", false))
            .content(MsgContent::new("1012", "453", "1", false))
            .content(MsgContent::new("1012", "448", "2", false))
            .content(MsgContent::new("1020", "9999", "1", false))
            .content(MsgContent::new("1020", "448", "2", false))
            .content(MsgContent::new("1", "StandardHeader", "1", true))
            .content(MsgContent::new("1", "112", "2", false))
            .content(MsgContent::new("14", "StandardHeader", "1", true))
            .content(MsgContent::new("14", "11", "2", true))
            .content(MsgContent::new("14", "Parties", "3", false))
            .content(MsgContent::new("14", "54", "4", true))
            .content(MsgContent::new("14", "Instrument", "5", true))
            .content(MsgContent::new("14", "StandardTrailer", "6", true))
            .content(MsgContent::new("60", "1", "1", false))
            .content(MsgContent::new("98", "StandardHeader", "1", true))
            .content(MsgContent::new("98", "StandardTrailer", "2", true))
            .build()
    }

    /// Every field and group counter name found in `dict`.
    fn referenced_names(dict: &Dictionary) -> Vec<String> {
        struct Names(Vec<String>);
        impl MemberVisitor for Names {
            type Error = std::convert::Infallible;
            fn visit_field(&mut self, name: &str, _: bool) -> Result<(), Self::Error> {
                self.0.push(name.to_string());
                Ok(())
            }
            fn enter_group(&mut self, group: &Member) -> Result<(), Self::Error> {
                self.0.push(group.name().to_string());
                Ok(())
            }
        }

        let mut names = Names(Vec::new());
        let lists = dict
            .messages
            .iter()
            .map(|m| &m.members)
            .chain(dict.components.iter().map(|c| &c.members))
            .chain([&dict.header, &dict.trailer]);
        for members in lists {
            walk_members(members, &mut names).unwrap();
        }
        names.0
    }

    #[test]
    fn test_minimal_repository() {
        let repo = Repository::builder("FIX.4.4")
            .field(Field::new(1, "Account", "String"))
            .message(Message::new("1", "Heartbeat", "0", "Admin"))
            .content(MsgContent::new("1", "1", "1", true))
            .build();

        let dict = Resolver::new(&repo, None).resolve("FIX.4.4").unwrap();
        assert_eq!(dict.version, SchemaVersion::new(FixFamily::Fix, 4, 4, 0));
        assert_eq!(
            dict.messages,
            vec![MessageDef {
                name: "Heartbeat".into(),
                msg_type: "0".into(),
                category: MessageCategory::App,
                members: vec![Member::field("Account", true)],
            }]
        );
        assert_eq!(dict.fields, vec![FieldDef::new(1, "Account", "STRING")]);
        assert!(dict.header.is_empty());
        assert!(dict.trailer.is_empty());
        assert!(dict.components.is_empty());
    }

    #[test]
    fn test_group_detected_by_counter_type() {
        let repo = fix50();
        let dict = Resolver::new(&repo, None).resolve("FIX.5.0SP2").unwrap();
        let parties = dict.get_component("Parties").unwrap();
        assert_eq!(
            parties.members,
            vec![Member::group(
                "NoPartyIDs",
                false,
                vec![Member::field("PartyID", false)]
            )]
        );
    }

    #[test]
    fn test_unresolvable_counter_yields_empty_body() {
        let repo = fix50();
        let dict = Resolver::new(&repo, None).resolve("FIX.5.0SP2").unwrap();
        let broken = dict.get_component("BrokenGroup").unwrap();
        assert!(broken.members.is_empty());
    }

    #[test]
    fn test_application_layer_messages() {
        let repo = fix50();
        let dict = Resolver::new(&repo, None).resolve("FIX.5.0SP2").unwrap();

        // Session messages dropped, empty bodies dropped, ordered by type.
        let types: Vec<_> = dict.messages.iter().map(|m| m.msg_type.as_str()).collect();
        assert_eq!(types, vec!["D", "AE"]);
        assert!(dict.messages.iter().all(|m| m.category == MessageCategory::App));

        let order = dict.get_message("D").unwrap();
        assert_eq!(
            order.members,
            vec![
                Member::field("ClOrdID", true),
                Member::component("Parties", false),
                Member::field("Side", true),
                Member::component("Instrument", true),
            ]
        );
        assert!(dict.header.is_empty());
    }

    #[test]
    fn test_field_closure_is_minimal_and_complete() {
        let repo = fix50();
        let dict = Resolver::new(&repo, None).resolve("FIX.5.0SP2").unwrap();

        let numbers: Vec<_> = dict.fields.iter().map(|f| f.number).collect();
        assert_eq!(numbers, vec![1, 11, 54, 55, 448, 453]);

        for name in referenced_names(&dict) {
            assert!(dict.get_field_by_name(&name).is_some(), "missing field {name}");
        }
        assert!(dict.get_field(5000).is_none());
        assert!(dict.get_field(112).is_none());
    }

    #[test]
    fn test_field_types_and_enums() {
        let repo = fix50();
        let dict = Resolver::new(&repo, None).resolve("FIX.5.0SP2").unwrap();

        let side = dict.get_field(54).unwrap();
        assert_eq!(side.field_type, "CHAR");
        assert_eq!(
            side.values,
            vec![
                EnumValue::new("1", "BUY"),
                EnumValue::new("B", "AS_DEFINED"),
                EnumValue::new("2", "SELL"),
            ]
        );
        assert_eq!(dict.get_field(453).unwrap().field_type, "NUMINGROUP");
        assert_eq!(dict.group_count(), 1);
    }

    #[test]
    fn test_header_inlines_groups() {
        let (t, f) = (fixt(), fix50());
        let dict = Resolver::new(&t, Some(&f)).resolve("FIXT.1.1").unwrap();

        assert_eq!(
            dict.header,
            vec![
                Member::field("BeginString", true),
                Member::field("MsgType", true),
                Member::group("NoHops", true, vec![Member::field("HopCompID", false)]),
            ]
        );
        assert_eq!(dict.trailer, vec![Member::field("CheckSum", true)]);
        assert!(dict.get_component("HopGrp").is_none());
        assert!(dict.get_component("StandardHeader").is_none());
        assert!(dict.get_component("StandardTrailer").is_none());
    }

    #[test]
    fn test_transport_layer_messages() {
        let (t, f) = (fixt(), fix50());
        let dict = Resolver::new(&t, Some(&f)).resolve("FIXT.1.1").unwrap();

        // Logon has nothing but markers and is dropped.
        assert_eq!(dict.messages.len(), 1);
        let heartbeat = &dict.messages[0];
        assert_eq!(heartbeat.name, "Heartbeat");
        assert_eq!(heartbeat.category, MessageCategory::Admin);
        assert_eq!(heartbeat.members, vec![Member::field("TestReqID", false)]);
    }

    #[test]
    fn test_msg_type_enum_union() {
        let (t, f) = (fixt(), fix50());
        let dict = Resolver::new(&t, Some(&f)).resolve("FIXT.1.1").unwrap();

        let msg_type = dict.get_field(MSG_TYPE_TAG).unwrap();
        let values: Vec<_> = msg_type.values.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["0", "A", "D", "AE"]);

        for app in f.enums(MSG_TYPE_TAG) {
            assert_eq!(values.iter().filter(|v| **v == app.value).count(), 1);
        }
    }

    #[test]
    fn test_msg_type_enum_not_merged_for_application_layer() {
        let f = fix50();
        let primary = Repository::builder("FIX.5.0SP2")
            .field(Field::new(35, "MsgType", "String"))
            .enumeration(Enum::new(35, "X", "MarketDataIncrementalRefresh", 1))
            .message(Message::new("1", "Probe", "X", "MarketData"))
            .content(MsgContent::new("1", "35", "1", true))
            .build();
        let dict = Resolver::new(&primary, Some(&f)).resolve("FIX.5.0SP2").unwrap();
        let values: Vec<_> = dict.get_field(35).unwrap().values.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["X"]);
    }

    #[test]
    fn test_fallback_fields_and_enums() {
        let primary = Repository::builder("FIXT.1.1")
            .field(Field::new(54, "Side", "String"))
            .message(Message::new("1", "Probe", "0", "Session"))
            .content(MsgContent::new("1", "54", "1", true))
            .content(MsgContent::new("1", "58", "2", false))
            .content(MsgContent::new("1", "77", "3", false))
            .build();
        let f = fix50();
        let dict = Resolver::new(&primary, Some(&f)).resolve("FIXT.1.1").unwrap();

        // Primary definition wins on collision; enums come from the fallback.
        let side = dict.get_field(54).unwrap();
        assert_eq!(side.field_type, "STRING");
        assert_eq!(side.values.len(), 3);

        // 58 only exists in the fallback, 77 nowhere.
        assert_eq!(
            dict.messages[0].members,
            vec![Member::field("Side", true), Member::field("Text", false)]
        );
        assert!(dict.get_field(58).is_some());
    }

    #[test]
    fn test_numeric_position_order() {
        let repo = Repository::builder("FIX.4.4")
            .field(Field::new(1, "Account", "String"))
            .field(Field::new(11, "ClOrdID", "String"))
            .message(Message::new("1", "Probe", "D", "Other"))
            .content(MsgContent::new("1", "11", "11.21", false))
            .content(MsgContent::new("1", "1", "8.1", false))
            .build();
        let dict = Resolver::new(&repo, None).resolve("FIX.4.4").unwrap();
        assert_eq!(
            dict.messages[0].members,
            vec![Member::field("Account", false), Member::field("ClOrdID", false)]
        );
    }

    #[test]
    fn test_version_leniency() {
        let repo = fix50();
        let dict = Resolver::new(&repo, None).resolve("FIX.Latest").unwrap();
        assert_eq!(dict.version, SchemaVersion::APPLICATION_DEFAULT);

        let strict = Resolver::new(&repo, None)
            .with_options(ResolverOptions::default().with_strict_version(true));
        assert_eq!(
            strict.resolve("FIX.Latest"),
            Err(ResolveError::InvalidVersion("FIX.Latest".into()))
        );
        assert!(strict.resolve("FIX.5.0SP2").is_ok());
    }

    #[test]
    fn test_components_keep_file_order() {
        let repo = Repository::builder("FIX.4.4")
            .field(Field::new(1, "Account", "String"))
            .component(Component::new("30", "Zeta", "Block"))
            .component(Component::new("10", "Alpha", "Block"))
            .component(Component::new("20", "Mid", "Block"))
            .content(MsgContent::new("30", "1", "1", false))
            .content(MsgContent::new("10", "1", "1", false))
            .content(MsgContent::new("20", "1", "1", false))
            .build();
        let dict = Resolver::new(&repo, None).resolve("FIX.4.4").unwrap();

        let names: Vec<_> = dict.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_message_body_starting_with_counter_is_group() {
        let repo = Repository::builder("FIX.4.4")
            .field(Field::new(453, "NoPartyIDs", "NumInGroup"))
            .field(Field::new(448, "PartyID", "String"))
            .message(Message::new("7", "GroupMsg", "Z", "Other"))
            .content(MsgContent::new("7", "453", "1", true))
            .content(MsgContent::new("7", "448", "2", false))
            .build();
        let dict = Resolver::new(&repo, None).resolve("FIX.4.4").unwrap();

        assert_eq!(
            dict.get_message("Z").unwrap().members,
            vec![Member::group(
                "NoPartyIDs",
                true,
                vec![Member::field("PartyID", false)]
            )]
        );
    }

    #[test]
    fn test_header_and_trailer_come_from_primary_only() {
        let primary = Repository::builder("FIXT.1.1")
            .field(Field::new(112, "TestReqID", "String"))
            .message(Message::new("1", "Heartbeat", "0", "Session"))
            .content(MsgContent::new("1", "112", "1", false))
            .build();
        let f = fixt();
        let dict = Resolver::new(&primary, Some(&f)).resolve("FIXT.1.1").unwrap();

        assert!(dict.header.is_empty());
        assert!(dict.trailer.is_empty());
        assert!(dict.get_field(8).is_none());
        assert_eq!(
            dict.messages[0].members,
            vec![Member::field("TestReqID", false)]
        );
    }
}
