//! # Attributes
//!
//! A config model exposes a fixed set of named attributes, each backed by one
//! raw key in the [`Document`]. The mapping is a static table declared once per
//! model type through [`ConfigModel::ATTRIBUTES`]:
//!
//! ```
//! use loaderconf::{AttributeDef, ConfigModel};
//!
//! struct Vconsole;
//!
//! impl ConfigModel for Vconsole {
//!     const NAME: &'static str = "vconsole";
//!     const DEFAULT_PATH: &'static str = "/etc/vconsole.conf";
//!     const ATTRIBUTES: &'static [AttributeDef] = &[
//!         AttributeDef::new("keymap", "KEYMAP"),
//!         AttributeDef::new("font", "FONT").with_default("eurlatgr"),
//!     ];
//! }
//!
//! assert_eq!(Vconsole::attribute("font").unwrap().key, "FONT");
//! ```
//!
//! Only strings cross this layer. A model that wants numbers or enums converts
//! at its own boundary so a malformed value can never break a plain read.

use crate::document::Document;
use crate::error::{Error, Result};
use serde::Serialize;

/// Binding of a semantic attribute name to a raw document key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDef {
    pub name: &'static str,
    pub key: &'static str,
    pub default: &'static str,
}

impl AttributeDef {
    /// An attribute whose default is the empty string.
    pub const fn new(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            default: "",
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Current value in `doc`, or the declared default when the key is absent.
    ///
    /// A document that was never loaded holds only what callers set on it, so
    /// this also yields the default for every untouched attribute there.
    pub fn read<'a>(&self, doc: &'a Document) -> &'a str {
        doc.get(self.key).unwrap_or(self.default)
    }

    pub fn write(&self, doc: &mut Document, value: impl Into<String>) {
        doc.set(self.key, value);
    }

    /// Removes the backing key so reads fall back to the default.
    pub fn clear(&self, doc: &mut Document) -> bool {
        doc.remove(self.key)
    }

    pub fn snapshot(&self, doc: &Document) -> AttributeValue {
        AttributeValue {
            name: self.name,
            key: self.key,
            value: self.read(doc).to_string(),
            is_set: doc.get(self.key).is_some(),
        }
    }
}

/// Finds the definition for `name` in `table`.
pub fn lookup(table: &'static [AttributeDef], name: &str) -> Result<&'static AttributeDef> {
    table
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| Error::UnknownAttribute(name.to_string()))
}

/// Static description of a configuration file type.
pub trait ConfigModel {
    /// Short human name, used in log messages.
    const NAME: &'static str;

    /// Where the file lives when the caller does not say otherwise.
    const DEFAULT_PATH: &'static str;

    /// The attribute table. Never changes at runtime.
    const ATTRIBUTES: &'static [AttributeDef];

    fn attribute(name: &str) -> Result<&'static AttributeDef> {
        lookup(Self::ATTRIBUTES, name)
    }

    /// Whether `key` is backed by one of the declared attributes.
    fn is_mapped_key(key: &str) -> bool {
        Self::ATTRIBUTES.iter().any(|def| def.key == key)
    }

    /// Checks `value` before it is stored through [`crate::ConfigFile::set_checked`].
    /// Accepts everything unless the model knows better.
    fn validate(_def: &AttributeDef, _value: &str) -> Result<()> {
        Ok(())
    }
}

/// Point-in-time view of one attribute, for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeValue {
    pub name: &'static str,
    pub key: &'static str,
    pub value: String,
    /// Whether the backing key is present, as opposed to reading the default.
    pub is_set: bool,
}
