//! Keyword-block document model and codec.
//!
//! Simulation input decks are line-oriented text files made of labeled
//! blocks, each holding ordered sub-keyword entries with scalar, list, or
//! table content. This crate provides the shared in-memory representation
//! ([`BlockDocument`]) and the codec that serializes it to, and parses it
//! from, a configurable marker dialect ([`Dialect`]).
//!
//! The codec guarantees round-trip fidelity of syntax; it performs no
//! semantic validation of keyword meaning (see `deck-files` for per-kind
//! keyword tables).

pub mod dialect;
pub mod document;
pub mod error;
pub mod parser;
pub mod writer;

pub use dialect::Dialect;
pub use document::{Block, BlockDocument, Scalar, Value};
pub use error::{Error, Result};
pub use parser::{parse, parse_file};
pub use writer::{serialize, write_to};
