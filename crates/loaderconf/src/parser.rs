//! Line parser for `key value` configuration files.
//!
//! The grammar is deliberately small:
//!
//! ```text
//! # comment        -> Entry::Comment (first non-whitespace char is `#`)
//!                  -> Entry::Blank   (whitespace only)
//! key  some value  -> Entry::KeyValue (first token is the key, the rest is the value)
//! ```
//!
//! Parsing never fails. Anything that is neither blank nor a comment has at
//! least one non-whitespace token and therefore becomes a key, possibly with an
//! empty value. Everything needed to reproduce the input is kept, so
//! `serialize(&parse(text)) == text` for any text that was not edited in between.

use crate::document::{Document, Entry, Spacing};

pub const COMMENT_MARKER: char = '#';

/// Parses `text` into a [`Document`]. The result is not marked as loaded.
pub fn parse(text: &str) -> Document {
    let trailing_newline = text.is_empty() || text.ends_with('\n');
    let crlf = text
        .find('\n')
        .is_some_and(|newline| text[..newline].ends_with('\r'));

    let entries = if text.is_empty() {
        Vec::new()
    } else {
        let body = text.strip_suffix('\n').unwrap_or(text);
        body.split('\n').map(parse_line).collect()
    };

    Document::from_parts(entries, trailing_newline, crlf)
}

/// Renders `doc` back to text, one line per entry.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::with_capacity(doc.len() * 24);

    for (i, entry) in doc.entries().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        entry.render_into(&mut out);
    }

    if !doc.is_empty() && doc.trailing_newline() {
        out.push('\n');
    }

    out
}

/// Classifies a single line. `line` carries no `\n`; a `\r` from CRLF input is
/// treated as ordinary trailing whitespace.
fn parse_line(line: &str) -> Entry {
    let content = line.trim_start();

    if content.trim_end().is_empty() {
        return Entry::Blank {
            text: line.to_string(),
        };
    }

    if content.starts_with(COMMENT_MARKER) {
        return Entry::Comment {
            text: line.to_string(),
        };
    }

    let indent = &line[..line.len() - content.len()];
    let key_end = content
        .find(char::is_whitespace)
        .unwrap_or(content.len());
    let (key, rest) = content.split_at(key_end);
    let value = rest.trim();

    let (separator, trailing) = if value.is_empty() {
        ("", rest)
    } else {
        let separator_len = rest.len() - rest.trim_start().len();
        (
            &rest[..separator_len],
            &rest[separator_len + value.len()..],
        )
    };

    Entry::KeyValue {
        key: key.to_string(),
        value: value.to_string(),
        raw_spacing: Spacing {
            indent: indent.to_string(),
            separator: separator.to_string(),
            trailing: trailing.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUND_TRIP_CASES: &[&str] = &[
        "",
        "\n",
        "\n\n\n",
        "timeout 10",
        "timeout 10\n",
        "# Loader configuration\ntimeout 10\nconsole_mode keep\ndefault linux\n",
        "  timeout\t\t10  \n",
        "timeout\n",
        "timeout   \n",
        "   \n\t\n",
        "  # indented comment\n",
        "timeout 10\r\ndefault linux\r\n",
        "timeout 10\r\ndefault linux",
        "mixed 1\r\nendings 2\n",
        "default opensuse-tumbleweed-*.conf  # not a comment\n",
        "timeout 10\ntimeout 20\n",
        "key value with   inner   spaces\n",
        "#\n",
        "editor\tno\n",
        "\u{a0}unicode\u{3000}spacing value\n",
    ];

    #[test]
    fn round_trip_is_lossless() {
        for text in ROUND_TRIP_CASES {
            assert_eq!(&serialize(&parse(text)), text, "round trip of {text:?}");
        }
    }

    #[test]
    fn classifies_lines() {
        let doc = parse("# Loader configuration\n\ntimeout 10\n");
        assert_eq!(
            doc.entries(),
            &[
                Entry::Comment {
                    text: "# Loader configuration".to_string()
                },
                Entry::Blank {
                    text: String::new()
                },
                Entry::key_value("timeout", "10"),
            ]
        );
    }

    #[test]
    fn value_is_trimmed_remainder() {
        let doc = parse("  default   linux  lts \n");
        assert_eq!(
            doc.entries()[0],
            Entry::KeyValue {
                key: "default".to_string(),
                value: "linux  lts".to_string(),
                raw_spacing: Spacing {
                    indent: "  ".to_string(),
                    separator: "   ".to_string(),
                    trailing: " ".to_string(),
                },
            }
        );
    }

    #[test]
    fn bare_key_has_empty_value() {
        let doc = parse("auto-entries\n");
        assert_eq!(doc.get("auto-entries"), Some(""));
    }

    #[test]
    fn hash_after_key_is_part_of_value() {
        let doc = parse("default linux # fallback\n");
        assert_eq!(doc.get("default"), Some("linux # fallback"));
    }

    #[test]
    fn crlf_is_detected_and_kept_out_of_values() {
        let doc = parse("timeout 10\r\n");
        assert!(doc.uses_crlf());
        assert_eq!(doc.get("timeout"), Some("10"));
    }

    #[test]
    fn new_entries_use_canonical_spacing() {
        let mut doc = parse("# header\n");
        doc.set("timeout", "5");
        assert_eq!(serialize(&doc), "# header\ntimeout 5\n");
    }

    #[test]
    fn append_after_missing_final_newline_starts_new_line() {
        let mut doc = parse("timeout 10");
        doc.set("default", "linux");
        assert_eq!(serialize(&doc), "timeout 10\ndefault linux");
    }

    #[test]
    fn append_to_empty_text_ends_with_newline() {
        let mut doc = parse("");
        doc.set("timeout", "5");
        assert_eq!(serialize(&doc), "timeout 5\n");
    }

    #[test]
    fn crlf_document_keeps_crlf_for_new_entries() {
        let mut doc = parse("timeout 10\r\n");
        doc.set("default", "linux");
        assert_eq!(serialize(&doc), "timeout 10\r\ndefault linux\r\n");
    }

    #[test]
    fn update_keeps_neighbours_untouched() {
        let mut doc = parse("# c\ntimeout  10\nunknown x\n");
        doc.set("timeout", "15");
        assert_eq!(serialize(&doc), "# c\ntimeout  15\nunknown x\n");
    }

    #[test]
    fn empty_document_serializes_to_empty_text() {
        assert_eq!(serialize(&Document::new()), "");
    }
}
