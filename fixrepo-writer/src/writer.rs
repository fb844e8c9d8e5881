/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Dictionary XML writer.
//!
//! Output layout:
//!
//! ```xml
//! <fix type="FIXT" major="1" minor="1" servicepack="0">
//!  <header>...</header>
//!  <messages>...</messages>
//!  <trailer>...</trailer>
//!  <components>...</components>
//!  <fields>...</fields>
//! </fix>
//! ```

use fixrepo_core::error::WriteError;
use fixrepo_core::naming::component_alias;
use fixrepo_dictionary::{
    ComponentDef, Dictionary, FieldDef, Member, MemberVisitor, MessageDef, walk_members,
};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::fs;
use std::path::Path;
use tracing::info;

/// Configuration for dictionary rendering.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Character used for indentation.
    pub indent_char: u8,
    /// Indentation characters per nesting level.
    pub indent_size: usize,
    /// Whether to replace colliding component names with their alias.
    pub alias_components: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 1,
            alias_components: true,
        }
    }
}

/// Renders dictionaries to XML.
#[derive(Debug, Default)]
pub struct DictionaryWriter {
    config: WriterConfig,
}

impl DictionaryWriter {
    /// Creates a writer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the specified configuration.
    #[must_use]
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Renders a dictionary to an XML string ending in a newline.
    ///
    /// # Errors
    /// Returns [`WriteError::Emit`] if the XML writer rejects an event.
    pub fn render(&self, dict: &Dictionary) -> Result<String, WriteError> {
        let mut emitter = Emitter {
            writer: Writer::new_with_indent(Vec::new(), self.config.indent_char, self.config.indent_size),
            alias_components: self.config.alias_components,
        };
        emitter.dictionary(dict)?;

        let mut xml = String::from_utf8(emitter.writer.into_inner())?;
        xml.push('\n');
        Ok(xml)
    }

    /// Renders a dictionary and writes it to `path`, creating missing parent
    /// directories.
    ///
    /// Nothing is written unless rendering succeeds.
    ///
    /// # Errors
    /// Returns a rendering error or [`WriteError::Io`].
    pub fn write_to_path(&self, dict: &Dictionary, path: impl AsRef<Path>) -> Result<(), WriteError> {
        let path = path.as_ref();
        let xml = self.render(dict)?;

        let io_error = |source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, xml).map_err(io_error)?;

        info!(path = %path.display(), fields = dict.fields.len(), "dictionary written");
        Ok(())
    }
}

const fn required_flag(required: bool) -> &'static str {
    if required { "Y" } else { "N" }
}

struct Emitter {
    writer: Writer<Vec<u8>>,
    alias_components: bool,
}

impl Emitter {
    fn emit(&mut self, event: Event<'_>) -> Result<(), WriteError> {
        self.writer
            .write_event(event)
            .map_err(|e| WriteError::Emit(e.to_string()))
    }

    fn component_name<'n>(&self, name: &'n str) -> &'n str {
        if self.alias_components {
            component_alias(name)
        } else {
            name
        }
    }

    /// Writes `start` as an empty element, or as an open/close pair around
    /// `body` when `has_children`.
    fn element(
        &mut self,
        start: BytesStart<'_>,
        has_children: bool,
        body: impl FnOnce(&mut Self) -> Result<(), WriteError>,
    ) -> Result<(), WriteError> {
        if !has_children {
            return self.emit(Event::Empty(start));
        }
        let end = start.to_end().into_owned();
        self.emit(Event::Start(start))?;
        body(self)?;
        self.emit(Event::End(end))
    }

    fn dictionary(&mut self, dict: &Dictionary) -> Result<(), WriteError> {
        let mut root = BytesStart::new("fix");
        root.push_attribute(("type", dict.version.family.as_str()));
        root.push_attribute(("major", itoa::Buffer::new().format(dict.version.major)));
        root.push_attribute(("minor", itoa::Buffer::new().format(dict.version.minor)));
        root.push_attribute((
            "servicepack",
            itoa::Buffer::new().format(dict.version.servicepack),
        ));

        self.emit(Event::Start(root))?;
        self.members_section("header", &dict.header)?;
        self.element(BytesStart::new("messages"), !dict.messages.is_empty(), |e| {
            dict.messages.iter().try_for_each(|m| e.message(m))
        })?;
        self.members_section("trailer", &dict.trailer)?;
        self.element(BytesStart::new("components"), !dict.components.is_empty(), |e| {
            dict.components.iter().try_for_each(|c| e.component(c))
        })?;
        self.element(BytesStart::new("fields"), !dict.fields.is_empty(), |e| {
            dict.fields.iter().try_for_each(|f| e.field(f))
        })?;
        self.emit(Event::End(BytesEnd::new("fix")))
    }

    fn members_section(&mut self, tag: &str, members: &[Member]) -> Result<(), WriteError> {
        self.element(BytesStart::new(tag), !members.is_empty(), |e| {
            walk_members(members, e)
        })
    }

    fn message(&mut self, message: &MessageDef) -> Result<(), WriteError> {
        let mut start = BytesStart::new("message");
        start.push_attribute(("name", message.name.as_str()));
        start.push_attribute(("msgtype", message.msg_type.as_str()));
        start.push_attribute(("msgcat", message.category.as_str()));
        self.element(start, !message.members.is_empty(), |e| {
            walk_members(&message.members, e)
        })
    }

    fn component(&mut self, component: &ComponentDef) -> Result<(), WriteError> {
        let mut start = BytesStart::new("component");
        start.push_attribute(("name", self.component_name(&component.name)));
        self.element(start, !component.members.is_empty(), |e| {
            walk_members(&component.members, e)
        })
    }

    fn field(&mut self, field: &FieldDef) -> Result<(), WriteError> {
        let mut start = BytesStart::new("field");
        start.push_attribute(("number", itoa::Buffer::new().format(field.number)));
        start.push_attribute(("name", field.name.as_str()));
        start.push_attribute(("type", field.field_type.as_str()));
        self.element(start, !field.values.is_empty(), |e| {
            for value in &field.values {
                let mut item = BytesStart::new("value");
                item.push_attribute(("enum", value.value.as_str()));
                item.push_attribute(("description", value.description.as_str()));
                e.emit(Event::Empty(item))?;
            }
            Ok(())
        })
    }
}

impl MemberVisitor for Emitter {
    type Error = WriteError;

    fn visit_field(&mut self, name: &str, required: bool) -> Result<(), WriteError> {
        let mut start = BytesStart::new("field");
        start.push_attribute(("name", name));
        start.push_attribute(("required", required_flag(required)));
        self.emit(Event::Empty(start))
    }

    fn visit_component(&mut self, name: &str, required: bool) -> Result<(), WriteError> {
        let mut start = BytesStart::new("component");
        start.push_attribute(("name", self.component_name(name)));
        start.push_attribute(("required", required_flag(required)));
        self.emit(Event::Empty(start))
    }

    fn enter_group(&mut self, group: &Member) -> Result<(), WriteError> {
        let mut start = BytesStart::new("group");
        start.push_attribute(("name", group.name()));
        start.push_attribute(("required", required_flag(group.required())));
        if has_members(group) {
            self.emit(Event::Start(start))
        } else {
            self.emit(Event::Empty(start))
        }
    }

    fn leave_group(&mut self, group: &Member) -> Result<(), WriteError> {
        if has_members(group) {
            self.emit(Event::End(BytesEnd::new("group")))
        } else {
            Ok(())
        }
    }
}

fn has_members(group: &Member) -> bool {
    matches!(group, Member::Group { members, .. } if !members.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixrepo_core::version::{FixFamily, SchemaVersion};
    use fixrepo_dictionary::{EnumValue, MessageCategory};
    use pretty_assertions::assert_eq;

    fn sample() -> Dictionary {
        let mut dict = Dictionary::new(SchemaVersion::new(FixFamily::Fixt, 1, 1, 0));
        dict.header = vec![
            Member::field("BeginString", true),
            Member::group("NoHops", false, vec![Member::field("HopCompID", false)]),
        ];
        dict.trailer = vec![Member::field("CheckSum", true)];
        dict.messages = vec![MessageDef {
            name: "Heartbeat".into(),
            msg_type: "0".into(),
            category: MessageCategory::Admin,
            members: vec![
                Member::field("TestReqID", false),
                Member::component("RateSource", false),
            ],
        }];
        dict.components = vec![
            ComponentDef {
                name: "RateSource".into(),
                members: vec![Member::group(
                    "NoRateSources",
                    false,
                    vec![Member::field("RateSourceType", false)],
                )],
            },
            ComponentDef {
                name: "Empty".into(),
                members: Vec::new(),
            },
        ];
        dict.fields = vec![
            FieldDef::new(8, "BeginString", "STRING"),
            FieldDef::new(35, "MsgType", "STRING").with_values(vec![
                EnumValue::new("0", "HEARTBEAT"),
                EnumValue::new("A", "LOGON"),
            ]),
        ];
        dict
    }

    fn trimmed_lines(xml: &str) -> Vec<&str> {
        xml.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn test_render_layout() {
        let xml = DictionaryWriter::new().render(&sample()).unwrap();
        assert!(xml.ends_with('\n'));
        assert_eq!(
            trimmed_lines(&xml),
            vec![
                r#"<fix type="FIXT" major="1" minor="1" servicepack="0">"#,
                r#"<header>"#,
                r#"<field name="BeginString" required="Y"/>"#,
                r#"<group name="NoHops" required="N">"#,
                r#"<field name="HopCompID" required="N"/>"#,
                r#"</group>"#,
                r#"</header>"#,
                r#"<messages>"#,
                r#"<message name="Heartbeat" msgtype="0" msgcat="admin">"#,
                r#"<field name="TestReqID" required="N"/>"#,
                r#"<component name="RateSourceBlock" required="N"/>"#,
                r#"</message>"#,
                r#"</messages>"#,
                r#"<trailer>"#,
                r#"<field name="CheckSum" required="Y"/>"#,
                r#"</trailer>"#,
                r#"<components>"#,
                r#"<component name="RateSourceBlock">"#,
                r#"<group name="NoRateSources" required="N">"#,
                r#"<field name="RateSourceType" required="N"/>"#,
                r#"</group>"#,
                r#"</component>"#,
                r#"<component name="Empty"/>"#,
                r#"</components>"#,
                r#"<fields>"#,
                r#"<field number="8" name="BeginString" type="STRING"/>"#,
                r#"<field number="35" name="MsgType" type="STRING">"#,
                r#"<value enum="0" description="HEARTBEAT"/>"#,
                r#"<value enum="A" description="LOGON"/>"#,
                r#"</field>"#,
                r#"</fields>"#,
                r#"</fix>"#,
            ]
        );
    }

    #[test]
    fn test_render_without_aliases() {
        let writer = DictionaryWriter::with_config(WriterConfig {
            alias_components: false,
            ..WriterConfig::default()
        });
        let xml = writer.render(&sample()).unwrap();
        assert!(xml.contains(r#"<component name="RateSource">"#));
        assert!(!xml.contains("RateSourceBlock"));
    }

    #[test]
    fn test_render_empty_sections() {
        let dict = Dictionary::new(SchemaVersion::new(FixFamily::Fix, 5, 0, 2));
        let xml = DictionaryWriter::new().render(&dict).unwrap();
        assert_eq!(
            trimmed_lines(&xml),
            vec![
                r#"<fix type="FIX" major="5" minor="0" servicepack="2">"#,
                "<header/>",
                "<messages/>",
                "<trailer/>",
                "<components/>",
                "<fields/>",
                "</fix>",
            ]
        );
    }

    #[test]
    fn test_render_escapes_attributes() {
        let mut dict = Dictionary::new(SchemaVersion::new(FixFamily::Fix, 4, 4, 0));
        dict.fields = vec![
            FieldDef::new(1, "Odd", "STRING").with_values(vec![EnumValue::new("<&>", "\"Q\"")]),
        ];
        let xml = DictionaryWriter::new().render(&dict).unwrap();
        assert!(xml.contains(r#"enum="&lt;&amp;&gt;""#));
        assert!(xml.contains(r#"description="&quot;Q&quot;""#));
    }

    #[test]
    fn test_write_to_path_creates_parents() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out").join("FIXT11.xml");
        DictionaryWriter::new().write_to_path(&sample(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<fix "));
        assert!(written.contains("<fields>"));
    }

    #[test]
    fn test_required_flag() {
        assert_eq!(required_flag(true), "Y");
        assert_eq!(required_flag(false), "N");
    }
}
