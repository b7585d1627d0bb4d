//! In-memory model for keyword-block documents.
//!
//! A document is an ordered list of labeled blocks:
//!
//! ```text
//! #MAIN_KEYWORD
//!  $SUB_KEYWORD
//!   content ...
//! ```
//!
//! Block order and entry order are preserved everywhere; the consuming
//! simulator is order-sensitive for some file kinds.

use std::fmt;

use crate::error::{Error, Result};

/// A single token of content: integer, float, or plain text.
///
/// The float formatting (`Debug`-style shortest round-trip, integral values
/// rendered with a trailing `.0`) is the canonical on-disk representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Best-effort typing of a raw token.
    ///
    /// Integer-looking tokens become `Int`, float-looking tokens become
    /// `Float`, everything else stays `Text`. Tokens like `nan` or `inf`
    /// deliberately stay text, matching the literal-only typing of the
    /// deck dialect. This never fails; ambiguous input degrades to text.
    pub fn guess(token: &str) -> Scalar {
        if let Ok(i) = token.parse::<i64>() {
            return Scalar::Int(i);
        }
        if looks_numeric(token) {
            if let Ok(f) = token.parse::<f64>() {
                return Scalar::Float(f);
            }
        }
        Scalar::Text(token.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            Scalar::Text(_) => None,
        }
    }
}

/// Numeric literal shape check: digits plus sign/point/exponent characters.
fn looks_numeric(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            // {:?} is shortest-roundtrip and keeps ".0" on integral floats,
            // so a re-parse recovers the same variant.
            Scalar::Float(v) => write!(f, "{:?}", v),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

/// The content attached to one sub-keyword.
///
/// The shape is fixed at construction: a scalar and a one-element list are
/// distinct values with distinct serializations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// One token on one data line.
    Scalar(Scalar),
    /// Several tokens on one data line.
    List(Vec<Scalar>),
    /// One data line per row; rows may differ in length. An empty row has
    /// no textual representation and is dropped on serialization, so it
    /// does not survive a round-trip.
    Table(Vec<Vec<Scalar>>),
}

impl Value {
    pub fn scalar(v: impl Into<Scalar>) -> Self {
        Value::Scalar(v.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn table<R, I, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        Value::Table(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// View the value as data lines, regardless of shape.
    pub fn rows(&self) -> Vec<&[Scalar]> {
        match self {
            Value::Scalar(s) => vec![std::slice::from_ref(s)],
            Value::List(items) => vec![items.as_slice()],
            Value::Table(rows) => rows.iter().map(Vec::as_slice).collect(),
        }
    }
}

/// One labeled section of a deck file.
///
/// Sub-keywords may legitimately repeat; appends never overwrite. The empty
/// key holds content attached directly to the main keyword (some file kinds
/// place data right under the section header).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    name: String,
    entries: Vec<(String, Value)>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Validation("empty main keyword".into()));
        }
        Ok(Block {
            name,
            entries: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Append an entry, keeping any existing entries with the same key.
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.entries.push((key.into(), value));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// All values stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered sequence of blocks; the in-memory form of one deck file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockDocument {
    blocks: Vec<Block>,
}

impl BlockDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a new block and return its index.
    ///
    /// Keyword legality is not checked here; the model is keyword-agnostic.
    pub fn add_block<I, K>(&mut self, name: impl Into<String>, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut block = Block::new(name)?;
        for (key, value) in entries {
            block.push(key, value);
        }
        self.blocks.push(block);
        Ok(self.blocks.len() - 1)
    }

    /// Append an entry to the block at `index`.
    ///
    /// A repeated key is appended as a duplicate entry, never merged.
    pub fn append_to_block(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: Value,
    ) -> Result<()> {
        let len = self.blocks.len();
        let block = self
            .blocks
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })?;
        block.push(key, value);
        Ok(())
    }

    /// Append an entry to the most-recently-added block.
    pub fn append(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        match self.blocks.last_mut() {
            Some(block) => {
                block.push(key, value);
                Ok(())
            }
            None => Err(Error::Validation(
                "cannot append an entry to an empty document".into(),
            )),
        }
    }

    /// Remove the block at `index`, shifting later indices down by one.
    pub fn delete_block(&mut self, index: usize) -> Result<()> {
        if index >= self.blocks.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.blocks.len(),
            });
        }
        self.blocks.remove(index);
        Ok(())
    }

    pub fn get_block(&self, index: usize) -> Result<&Block> {
        self.blocks.get(index).ok_or(Error::NotFound {
            name: format!("#{index}"),
        })
    }

    /// First block with the given main keyword.
    pub fn find_block(&self, name: &str) -> Result<&Block> {
        self.blocks
            .iter()
            .find(|b| b.name() == name)
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
            })
    }

    /// Replace the entries of the block at `index` wholesale.
    pub fn update_block<I, K>(&mut self, index: usize, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let len = self.blocks.len();
        let block = self
            .blocks
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })?;
        block.entries.clear();
        for (key, value) in entries {
            block.push(key, value);
        }
        Ok(())
    }

    /// Drop every block.
    pub fn reset(&mut self) {
        self.blocks.clear();
    }
}
