//! Parsing of deck text back into block documents.
//!
//! A single forward pass over the lines, no backtracking. Formatting
//! variation (blank lines, comments, stray indentation) is tolerated;
//! structural problems fail the whole parse with the offending line number.

use std::path::Path;

use crate::dialect::Dialect;
use crate::document::{BlockDocument, Scalar, Value};
use crate::error::{Error, Result};

/// Parse deck text into a document.
///
/// Fails atomically: any structural error returns `Error::Parse` and no
/// partial document escapes. Content after the end marker is ignored.
pub fn parse(text: &str, dialect: &Dialect) -> Result<BlockDocument> {
    let mut doc = BlockDocument::new();
    // data lines collected for the pending sub-keyword
    let mut pending: Option<(String, Vec<Vec<Scalar>>)> = None;
    let mut in_block = false;
    let mut stop_found = false;
    let mut line_no = 0;

    for raw in text.lines() {
        line_no += 1;
        let line = dialect.uncomment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(dialect.block_start.as_str()) {
            let keyword = strip_markers(rest, dialect).trim();
            if keyword.starts_with(dialect.end.as_str()) {
                flush(&mut doc, &mut pending)?;
                stop_found = true;
                break;
            }
            if keyword.is_empty() {
                return Err(Error::parse(line_no, "block header without a keyword"));
            }
            flush(&mut doc, &mut pending)?;
            doc.add_block(keyword, Vec::<(String, Value)>::new())
                .map_err(|e| Error::parse(line_no, e.to_string()))?;
            in_block = true;
        } else if let Some(rest) = line.strip_prefix(dialect.key_entry.as_str()) {
            if !in_block {
                return Err(Error::parse(
                    line_no,
                    "sub-keyword before any block header",
                ));
            }
            let keyword = strip_markers(rest, dialect).trim();
            if keyword.is_empty() {
                return Err(Error::parse(line_no, "sub-keyword line without a keyword"));
            }
            flush(&mut doc, &mut pending)?;
            pending = Some((keyword.to_string(), Vec::new()));
        } else {
            if !in_block {
                return Err(Error::parse(line_no, "content before any block header"));
            }
            // content directly under the main keyword gets the empty key
            let (_, rows) = pending.get_or_insert_with(|| (String::new(), Vec::new()));
            rows.push(line.split_whitespace().map(Scalar::guess).collect());
        }
    }

    if !stop_found {
        return Err(Error::parse(line_no, "missing end-of-document marker"));
    }
    Ok(doc)
}

/// Parse a deck file from disk.
pub fn parse_file(path: &Path, dialect: &Dialect) -> Result<BlockDocument> {
    let text = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "parsing deck file");
    parse(&text, dialect)
}

/// Attach the pending sub-keyword run to the last block.
///
/// One data line with one token is a scalar, one line with several tokens a
/// flat list, several lines a table. A keyword with no data lines keeps an
/// empty list.
fn flush(doc: &mut BlockDocument, pending: &mut Option<(String, Vec<Vec<Scalar>>)>) -> Result<()> {
    let Some((key, mut rows)) = pending.take() else {
        return Ok(());
    };
    let value = match rows.len() {
        0 => Value::List(Vec::new()),
        1 => match <[Scalar; 1]>::try_from(rows.swap_remove(0)) {
            Ok([scalar]) => Value::Scalar(scalar),
            Err(row) => Value::List(row),
        },
        _ => Value::Table(rows),
    };
    doc.append(key, value)
}

/// Tolerate doubled/stray marker characters in hand-written decks.
fn strip_markers<'a>(mut rest: &'a str, dialect: &Dialect) -> &'a str {
    loop {
        if let Some(stripped) = rest.strip_prefix(dialect.block_start.as_str()) {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(dialect.key_entry.as_str()) {
            rest = stripped;
        } else {
            return rest;
        }
    }
}
