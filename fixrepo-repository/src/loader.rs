/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Repository loader.
//!
//! Reads the normalized FIX Repository 2010 Edition export of one version:
//!
//! ```text
//! <root>/<version>/Base/Fields.xml
//! <root>/<version>/Base/Enums.xml        (optional)
//! <root>/<version>/Base/Components.xml
//! <root>/<version>/Base/Messages.xml
//! <root>/<version>/Base/MsgContents.xml
//! ```
//!
//! Each document is a flat list of row elements whose cells are child
//! elements. Unknown cells and attributes are ignored.

use crate::model::{Component, Enum, Field, Message, MsgContent};
use crate::repository::{Repository, RepositoryBuilder};
use fixrepo_core::error::RepositoryError;
use quick_xml::de::from_str;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Subdirectory of a version directory holding the tables.
pub const BASE_DIR: &str = "Base";

const FIELDS_FILE: &str = "Fields.xml";
const ENUMS_FILE: &str = "Enums.xml";
const COMPONENTS_FILE: &str = "Components.xml";
const MESSAGES_FILE: &str = "Messages.xml";
const MSG_CONTENTS_FILE: &str = "MsgContents.xml";

#[derive(Debug, Deserialize)]
struct FieldsDocument {
    #[serde(rename = "Field", default)]
    rows: Vec<FieldRow>,
}

#[derive(Debug, Deserialize)]
struct FieldRow {
    #[serde(rename = "Tag")]
    tag: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type", default)]
    type_name: String,
}

#[derive(Debug, Deserialize)]
struct EnumsDocument {
    #[serde(rename = "Enum", default)]
    rows: Vec<EnumRow>,
}

#[derive(Debug, Deserialize)]
struct EnumRow {
    #[serde(rename = "Tag")]
    tag: u32,
    #[serde(rename = "Value", default)]
    value: String,
    #[serde(rename = "SymbolicName", default)]
    symbolic_name: Option<String>,
    #[serde(rename = "Sort", default)]
    sort: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ComponentsDocument {
    #[serde(rename = "Component", default)]
    rows: Vec<ComponentRow>,
}

#[derive(Debug, Deserialize)]
struct ComponentRow {
    #[serde(rename = "ComponentID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "ComponentType", default)]
    component_type: String,
}

#[derive(Debug, Deserialize)]
struct MessagesDocument {
    #[serde(rename = "Message", default)]
    rows: Vec<MessageRow>,
}

#[derive(Debug, Deserialize)]
struct MessageRow {
    #[serde(rename = "ComponentID")]
    component_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "MsgType", default)]
    msg_type: String,
    #[serde(rename = "CategoryID", default)]
    category_id: String,
}

#[derive(Debug, Deserialize)]
struct MsgContentsDocument {
    #[serde(rename = "MsgContent", default)]
    rows: Vec<MsgContentRow>,
}

#[derive(Debug, Deserialize)]
struct MsgContentRow {
    #[serde(rename = "ComponentID")]
    component_id: String,
    #[serde(rename = "TagText")]
    tag_text: String,
    #[serde(rename = "Position", default)]
    position: String,
    #[serde(rename = "Reqd", default)]
    required: String,
    #[serde(rename = "Indent", default)]
    indent: Option<String>,
}

/// Parses an optional numeric cell, treating blanks and garbage as 0.
fn numeric_cell<T: std::str::FromStr + Default>(cell: Option<&str>) -> T {
    cell.and_then(|text| text.trim().parse().ok())
        .unwrap_or_default()
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, RepositoryError> {
    let text = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&text).map_err(|e| RepositoryError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Returns the directory holding the tables of a version.
#[must_use]
pub fn base_dir(root: &Path, version: &str) -> PathBuf {
    root.join(version).join(BASE_DIR)
}

/// Loads one repository version.
///
/// # Arguments
/// * `root` - Repository root containing one directory per version
/// * `version` - Version directory name (e.g. `FIXT.1.1`, `FIX.5.0SP2`)
///
/// # Errors
/// Returns [`RepositoryError::DirectoryNotFound`] when the version has no
/// `Base` directory, and an I/O or parse error when a required document
/// cannot be read.
pub fn load_repository(root: impl AsRef<Path>, version: &str) -> Result<Repository, RepositoryError> {
    let dir = base_dir(root.as_ref(), version);
    if !dir.is_dir() {
        return Err(RepositoryError::DirectoryNotFound { path: dir });
    }

    let mut builder = RepositoryBuilder::new(version);

    let fields: FieldsDocument = read_document(&dir.join(FIELDS_FILE))?;
    for row in fields.rows {
        builder.push_field(Field::new(row.tag, row.name, row.type_name));
    }

    let enums_path = dir.join(ENUMS_FILE);
    if enums_path.is_file() {
        let enums: EnumsDocument = read_document(&enums_path)?;
        for row in enums.rows {
            builder.push_enum(Enum::new(
                row.tag,
                row.value,
                row.symbolic_name.unwrap_or_default(),
                numeric_cell(row.sort.as_deref()),
            ));
        }
    } else {
        warn!(version, path = %enums_path.display(), "no enumeration table, fields will carry no values");
    }

    let components: ComponentsDocument = read_document(&dir.join(COMPONENTS_FILE))?;
    for row in components.rows {
        builder.push_component(Component::new(row.id, row.name, row.component_type));
    }

    let messages: MessagesDocument = read_document(&dir.join(MESSAGES_FILE))?;
    for row in messages.rows {
        builder.push_message(Message::new(
            row.component_id,
            row.name,
            row.msg_type,
            row.category_id,
        ));
    }

    let contents: MsgContentsDocument = read_document(&dir.join(MSG_CONTENTS_FILE))?;
    for row in contents.rows {
        builder.push_content(MsgContent {
            component_id: row.component_id,
            tag_text: row.tag_text,
            position: row.position,
            required: row.required,
            indent: numeric_cell(row.indent.as_deref()),
        });
    }

    let repository = builder.build();
    debug!(
        version,
        fields = repository.field_count(),
        enums = repository.enum_count(),
        components = repository.components().len(),
        messages = repository.messages().len(),
        contents = repository.content_count(),
        "repository loaded"
    );
    Ok(repository)
}

impl Repository {
    /// Loads one repository version. See [`load_repository`].
    ///
    /// # Errors
    /// Same as [`load_repository`].
    pub fn load(root: impl AsRef<Path>, version: &str) -> Result<Self, RepositoryError> {
        load_repository(root, version)
    }
}
