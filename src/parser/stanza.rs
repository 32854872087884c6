//! Stanza records and the streaming parser that produces them

use super::relationship::strip_comment;
use super::ParseResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Lines};

/// Fields that always stay lists, however many times they appear
pub const MULTIVALUE_FIELDS: [&str; 2] = ["is_a", "relationship"];

/// Value of a stanza field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Field seen exactly once
    Single(String),
    /// Repeated field, or one of [`MULTIVALUE_FIELDS`]
    Multiple(Vec<String>),
}

impl FieldValue {
    /// The scalar value, if the field collapsed to one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Single(value) => Some(value),
            FieldValue::Multiple(_) => None,
        }
    }

    /// First value regardless of shape
    pub fn first(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }

    /// All values in file order
    pub fn values(&self) -> &[String] {
        match self {
            FieldValue::Single(value) => std::slice::from_ref(value),
            FieldValue::Multiple(values) => values,
        }
    }
}

/// One OBO block, keyed by field name in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stanza {
    fields: IndexMap<String, FieldValue>,
}

impl Stanza {
    /// Finalize accumulated raw values
    ///
    /// Every field collapses to a scalar when it was seen once, unless it is
    /// a multi-value field. Multi-value fields are present even when empty.
    fn from_accumulator(accumulator: IndexMap<String, Vec<String>>) -> Self {
        let mut fields: IndexMap<String, FieldValue> = accumulator
            .into_iter()
            .map(|(key, mut values)| {
                let value = if values.len() == 1 && !MULTIVALUE_FIELDS.contains(&key.as_str()) {
                    FieldValue::Single(values.remove(0))
                } else {
                    FieldValue::Multiple(values)
                };
                (key, value)
            })
            .collect();

        for key in MULTIVALUE_FIELDS {
            fields
                .entry(key.to_string())
                .or_insert_with(|| FieldValue::Multiple(Vec::new()));
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// First value of a field
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::first)
    }

    /// All values of a field, empty when absent
    pub fn values(&self, key: &str) -> &[String] {
        self.get(key).map(FieldValue::values).unwrap_or(&[])
    }

    pub fn id(&self) -> Option<&str> {
        self.scalar("id")
    }

    /// Parent identifiers from `is_a`
    pub fn is_a(&self) -> &[String] {
        self.values("is_a")
    }

    /// Raw `relationship` values
    pub fn relationships(&self) -> &[String] {
        self.values("relationship")
    }

    /// Whether the stanza carries an `is_obsolete` flag other than `false`
    pub fn is_obsolete(&self) -> bool {
        self.values("is_obsolete")
            .iter()
            .any(|value| !value.eq_ignore_ascii_case("false"))
    }

    /// Iterate fields in first-seen order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Parser configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Emit every non-empty block, not only those carrying an `id`
    pub lenient: bool,
}

impl ParserOptions {
    pub fn lenient() -> Self {
        Self { lenient: true }
    }
}

/// Streaming stanza parser
///
/// Reads lines lazily and yields one [`Stanza`] per block. A line without a
/// `key: value` pair (blank lines, `[Term]` headers, bare comments) closes the
/// current block. Blocks without an `id` are dropped in strict mode, which
/// discards the file header. A final block with no trailing blank line is
/// still emitted at end of input.
///
/// Single pass: once exhausted it stays exhausted.
pub struct StanzaParser<R> {
    lines: Lines<R>,
    options: ParserOptions,
    pending: IndexMap<String, Vec<String>>,
    has_id: bool,
    done: bool,
}

impl<R: BufRead> StanzaParser<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ParserOptions::default())
    }

    pub fn with_options(reader: R, options: ParserOptions) -> Self {
        Self {
            lines: reader.lines(),
            options,
            pending: IndexMap::new(),
            has_id: false,
            done: false,
        }
    }

    /// Close the current block, returning it if it qualifies
    fn take_stanza(&mut self) -> Option<Stanza> {
        let emit = if self.options.lenient {
            !self.pending.is_empty()
        } else {
            self.has_id
        };
        let pending = std::mem::take(&mut self.pending);
        self.has_id = false;

        emit.then(|| Stanza::from_accumulator(pending))
    }
}

impl<R: BufRead> Iterator for StanzaParser<R> {
    type Item = ParseResult<Stanza>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => match split_line(&line) {
                    Some((key, value)) => {
                        if key == "id" {
                            self.has_id = true;
                        }
                        self.pending
                            .entry(key.to_string())
                            .or_default()
                            .push(strip_comment(value).to_string());
                    }
                    None => {
                        if let Some(stanza) = self.take_stanza() {
                            return Some(Ok(stanza));
                        }
                    }
                },
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    return self.take_stanza().map(Ok);
                }
            }
        }
    }
}

/// Split a line on its first `": "` (falling back to `":"`)
///
/// Returns `None` for lines without a separator or with an empty value.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_end();
    let (key, value) = line.split_once(": ").or_else(|| line.split_once(':'))?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some((key.trim(), value))
}
