//! # Document
//!
//! The in-memory form of a configuration file: an ordered list of [`Entry`]
//! values, one per line, plus the bits of line layout needed to write the file
//! back byte for byte.
//!
//! ## Ordering and Duplicates
//!
//! Entries keep the order they were read in. New keys are appended at the end.
//! Keys are not required to be unique; every key-level operation addresses the
//! **first** occurrence and leaves later duplicates untouched.
//!
//! ## Spacing
//!
//! A [`Entry::KeyValue`] remembers its indentation, the whitespace between key
//! and value, and any trailing whitespace (including a `\r` from a CRLF file)
//! in [`Spacing`]. Updating a value keeps that spacing; freshly created entries
//! use [`Spacing::canonical`].

/// Whitespace surrounding the key and value of a [`Entry::KeyValue`] line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Spacing {
    pub indent: String,
    pub separator: String,
    pub trailing: String,
}

impl Spacing {
    /// `key value` with a single space and nothing around it.
    pub fn canonical() -> Self {
        Self {
            indent: String::new(),
            separator: " ".to_string(),
            trailing: String::new(),
        }
    }
}

/// One line of a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    KeyValue {
        key: String,
        value: String,
        raw_spacing: Spacing,
    },
    /// Comment line, kept verbatim including leading whitespace.
    Comment { text: String },
    /// Whitespace-only line, kept verbatim.
    Blank { text: String },
}

impl Entry {
    /// Builds a new key-value entry with canonical spacing.
    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry::KeyValue {
            key: key.into(),
            value: value.into(),
            raw_spacing: Spacing::canonical(),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::KeyValue { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Entry::KeyValue { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    fn has_key(&self, wanted: &str) -> bool {
        self.key() == Some(wanted)
    }

    /// Renders the entry without its line terminator.
    pub(crate) fn render_into(&self, out: &mut String) {
        match self {
            Entry::KeyValue {
                key,
                value,
                raw_spacing,
            } => {
                out.push_str(&raw_spacing.indent);
                out.push_str(key);
                out.push_str(&raw_spacing.separator);
                out.push_str(value);
                out.push_str(&raw_spacing.trailing);
            }
            Entry::Comment { text } | Entry::Blank { text } => out.push_str(text),
        }
    }
}

/// Ordered, editable representation of a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    entries: Vec<Entry>,
    loaded: bool,
    trailing_newline: bool,
    crlf: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loaded: false,
            trailing_newline: true,
            crlf: false,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(entries: Vec<Entry>, trailing_newline: bool, crlf: bool) -> Self {
        Self {
            entries,
            loaded: false,
            trailing_newline,
            crlf,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    pub(crate) fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Whether lines of this document end in `\r\n`.
    pub fn uses_crlf(&self) -> bool {
        self.crlf
    }

    /// All keys in file order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(Entry::key)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.has_key(key))
    }

    /// Value of the first entry with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.has_key(key))
            .and_then(Entry::value)
    }

    /// Updates the first entry with `key` in place, or appends a new one.
    ///
    /// An entry is exactly one line: `value` is cut at its first line
    /// terminator and stripped of surrounding whitespace, which is what a
    /// reload would make of it anyway.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = single_line(value.into());

        if let Some(i) = self.position(key) {
            if let Entry::KeyValue {
                value: current,
                raw_spacing,
                ..
            } = &mut self.entries[i]
            {
                // A bare `key` line has no separator to keep.
                if raw_spacing.separator.is_empty() && !value.is_empty() {
                    raw_spacing.separator = " ".to_string();
                }
                *current = value;
            }
            return;
        }

        let mut raw_spacing = Spacing::canonical();
        if self.crlf {
            raw_spacing.trailing.push('\r');
        }
        self.entries.push(Entry::KeyValue {
            key: key.to_string(),
            value,
            raw_spacing,
        });
    }

    /// Removes the first entry with `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Replaces all entries and line layout with those of `source`.
    ///
    /// The `loaded` flag is left alone; the caller decides what a replacement
    /// means for it.
    pub fn replace_all(&mut self, source: Document) {
        self.entries = source.entries;
        self.trailing_newline = source.trailing_newline;
        self.crlf = source.crlf;
    }

    /// Drops every entry and resets the layout to that of a new file.
    pub(crate) fn clear(&mut self) {
        self.replace_all(Document::new());
    }
}

fn single_line(value: String) -> String {
    let line = value.split(['\r', '\n']).next().unwrap_or_default();
    if line.len() == value.len() && line.trim() == line {
        return value;
    }
    line.trim().to_string()
}
