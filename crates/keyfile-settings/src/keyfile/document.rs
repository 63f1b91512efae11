//! In-memory key-file document: group/key access over `toml_edit`.

use std::fmt::{self, Write as _};

use toml_edit::{value, DocumentMut, Item, Table, TomlError, Value};

/// Parsed representation of a whole key file.
///
/// Wraps a format-preserving document: comments, blank lines, and entries
/// outside the groups this crate touches are kept verbatim and written
/// back unchanged by [`render`](KeyFile::render).
#[derive(Debug)]
pub struct KeyFile {
    doc: DocumentMut,
}

impl KeyFile {
    /// Parses the textual contents of a key file.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`TomlError`], whose message carries the line
    /// and column of the offending input.
    pub fn parse(text: &str) -> Result<Self, TomlError> {
        Ok(Self {
            doc: text.parse::<DocumentMut>()?,
        })
    }

    /// Key names of `group` in document order.
    ///
    /// Returns `None` when the group is absent (or the name refers to a
    /// plain value rather than a group). An existing group with no keys
    /// yields `Some` of an empty vector; the caller decides what that
    /// means.
    pub fn keys(&self, group: &str) -> Option<Vec<String>> {
        let table = self.doc.get(group)?.as_table()?;
        Some(table.iter().map(|(key, _)| key.to_string()).collect())
    }

    /// Current value of `key` under `group`, or `None` when absent.
    ///
    /// Values written by this crate are strings; hand-edited scalar
    /// entries of other types are read through their typed representation.
    /// Arrays and inline tables have no single-value reading and are
    /// reported as absent.
    pub fn value(&self, group: &str, key: &str) -> Option<String> {
        let item = self.doc.get(group)?.as_table()?.get(key)?;
        scalar_text(item.as_value()?)
    }

    /// Upserts `key` under `group` to the string `val`.
    ///
    /// The group is created at the end of the document if missing, and the
    /// key is created within it if missing. Always succeeds.
    pub fn set_value(&mut self, group: &str, key: &str, val: &str) {
        let item = self
            .doc
            .entry(group)
            .or_insert_with(|| Item::Table(Table::new()));
        if item.as_table().is_none() {
            // A scalar entry shadowing the group name gives way to the group.
            *item = Item::Table(Table::new());
        }
        if let Some(table) = item.as_table_mut() {
            table.insert(key, value(val));
        }
    }

    /// Renders the whole document (every group) back to text.
    ///
    /// # Errors
    ///
    /// Returns [`fmt::Error`] if the document cannot be written out.
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut text = String::new();
        write!(text, "{}", self.doc)?;
        Ok(text)
    }
}

/// Textual reading of a scalar value; `None` for arrays and inline tables.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.value().clone()),
        Value::Integer(n) => Some(n.value().to_string()),
        Value::Float(f) => Some(f.value().to_string()),
        Value::Boolean(b) => Some(b.value().to_string()),
        Value::Datetime(d) => Some(d.value().to_string()),
        Value::Array(_) | Value::InlineTable(_) => None,
    }
}
