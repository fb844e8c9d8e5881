/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Indexed repository tables.

use crate::model::{Component, Enum, Field, Message, MsgContent};
use fixrepo_core::ordering::Position;
use std::collections::HashMap;

/// One repository version, indexed for lookup.
///
/// Built once through [`RepositoryBuilder`] (directly or via the loader) and
/// never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    /// Version directory name (e.g. `FIX.5.0SP2`).
    version: String,
    /// Fields indexed by tag.
    fields_by_tag: HashMap<u32, Field>,
    /// Field tags indexed by field name.
    tags_by_name: HashMap<String, u32>,
    /// Enumerations grouped by field tag, in file order.
    enums_by_tag: HashMap<u32, Vec<Enum>>,
    /// Components in file order.
    components: Vec<Component>,
    /// Component positions indexed by id.
    components_by_id: HashMap<String, usize>,
    /// Component positions indexed by name.
    components_by_name: HashMap<String, usize>,
    /// Messages in file order.
    messages: Vec<Message>,
    /// Content rows grouped by container id, ordered by position.
    contents_by_id: HashMap<String, Vec<MsgContent>>,
}

impl Repository {
    /// Starts building a repository for the given version.
    #[must_use]
    pub fn builder(version: impl Into<String>) -> RepositoryBuilder {
        RepositoryBuilder::new(version)
    }

    /// Returns the version directory name.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Gets a field by tag.
    #[must_use]
    pub fn field(&self, tag: u32) -> Option<&Field> {
        self.fields_by_tag.get(&tag)
    }

    /// Gets a field by name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.tags_by_name
            .get(name)
            .and_then(|tag| self.fields_by_tag.get(tag))
    }

    /// Returns the enumerations of a field, in file order.
    ///
    /// Empty when the field has none.
    #[must_use]
    pub fn enums(&self, tag: u32) -> &[Enum] {
        self.enums_by_tag.get(&tag).map_or(&[][..], Vec::as_slice)
    }

    /// Gets a component by id.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components_by_id
            .get(id)
            .map(|&index| &self.components[index])
    }

    /// Gets a component by name.
    #[must_use]
    pub fn component_by_name(&self, name: &str) -> Option<&Component> {
        self.components_by_name
            .get(name)
            .map(|&index| &self.components[index])
    }

    /// Returns all components in file order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns all messages in file order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the content rows of a message or component, ordered by
    /// position.
    ///
    /// Empty when the id has no rows.
    #[must_use]
    pub fn contents(&self, component_id: &str) -> &[MsgContent] {
        self.contents_by_id
            .get(component_id)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields_by_tag.len()
    }

    /// Returns the number of enumeration values kept.
    #[must_use]
    pub fn enum_count(&self) -> usize {
        self.enums_by_tag.values().map(Vec::len).sum()
    }

    /// Returns the number of content rows.
    #[must_use]
    pub fn content_count(&self) -> usize {
        self.contents_by_id.values().map(Vec::len).sum()
    }
}

/// Builder that indexes repository rows as they are added.
#[derive(Debug, Default)]
pub struct RepositoryBuilder {
    repository: Repository,
}

impl RepositoryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            repository: Repository {
                version: version.into(),
                ..Repository::default()
            },
        }
    }

    /// Adds a field. A later field with the same tag or name replaces the
    /// earlier one in both indexes.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.push_field(field);
        self
    }

    /// Adds an enumeration value.
    ///
    /// Values without a symbolic name are dropped.
    #[must_use]
    pub fn enumeration(mut self, entry: Enum) -> Self {
        self.push_enum(entry);
        self
    }

    /// Adds a component.
    #[must_use]
    pub fn component(mut self, component: Component) -> Self {
        self.push_component(component);
        self
    }

    /// Adds a message.
    #[must_use]
    pub fn message(mut self, message: Message) -> Self {
        self.push_message(message);
        self
    }

    /// Adds a content row.
    #[must_use]
    pub fn content(mut self, content: MsgContent) -> Self {
        self.push_content(content);
        self
    }

    pub(crate) fn push_field(&mut self, field: Field) {
        let repo = &mut self.repository;
        let stale_name = repo
            .fields_by_tag
            .get(&field.tag)
            .map(|previous| previous.name.clone())
            .filter(|name| *name != field.name && repo.tags_by_name.get(name) == Some(&field.tag));
        if let Some(name) = stale_name {
            repo.tags_by_name.remove(&name);
        }
        repo.tags_by_name.insert(field.name.clone(), field.tag);
        repo.fields_by_tag.insert(field.tag, field);
    }

    pub(crate) fn push_enum(&mut self, entry: Enum) {
        if entry.symbolic_name.is_empty() {
            tracing::trace!(tag = entry.tag, value = %entry.value, "dropping enum without symbolic name");
            return;
        }
        self.repository
            .enums_by_tag
            .entry(entry.tag)
            .or_default()
            .push(entry);
    }

    pub(crate) fn push_component(&mut self, component: Component) {
        let repo = &mut self.repository;
        let index = match repo.components_by_id.get(&component.id) {
            Some(&index) => {
                let previous = &repo.components[index];
                if repo.components_by_name.get(&previous.name) == Some(&index) {
                    repo.components_by_name.remove(&previous.name);
                }
                repo.components[index] = component;
                index
            }
            None => {
                repo.components.push(component);
                repo.components.len() - 1
            }
        };
        let component = &repo.components[index];
        repo.components_by_id.insert(component.id.clone(), index);
        repo.components_by_name.insert(component.name.clone(), index);
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.repository.messages.push(message);
    }

    pub(crate) fn push_content(&mut self, content: MsgContent) {
        self.repository
            .contents_by_id
            .entry(content.component_id.clone())
            .or_default()
            .push(content);
    }

    /// Orders every content list by position and returns the repository.
    #[must_use]
    pub fn build(mut self) -> Repository {
        for rows in self.repository.contents_by_id.values_mut() {
            rows.sort_by_cached_key(|row| Position::parse(&row.position));
        }
        self.repository
    }
}
