//! Serialization of block documents to the line-oriented deck dialect.

use std::path::Path;

use crate::dialect::Dialect;
use crate::document::{BlockDocument, Scalar};
use crate::error::Result;

/// Serialize a document to deck text.
///
/// Blocks and entries are emitted in stored order; the output always ends
/// with the dialect's end marker. An empty document serializes to just that
/// marker line. Empty table rows produce no data line, so they vanish from
/// the text and a re-parse sees the remaining rows only.
pub fn serialize(doc: &BlockDocument, dialect: &Dialect) -> String {
    let mut out = String::new();
    for block in doc.blocks() {
        out.push_str(&dialect.block_start);
        out.push_str(block.name());
        out.push('\n');
        for (key, value) in block.entries() {
            // The empty key marks content attached directly to the
            // main keyword; it has no key line of its own.
            if !key.is_empty() {
                out.push_str(&dialect.sub_indent);
                out.push_str(&dialect.key_entry);
                out.push_str(key);
                out.push('\n');
            }
            for row in value.rows() {
                if row.is_empty() {
                    continue;
                }
                out.push_str(&dialect.content_indent);
                out.push_str(&join_tokens(row));
                out.push('\n');
            }
        }
    }
    out.push_str(&dialect.end_marker());
    out.push('\n');
    out
}

/// Serialize and write to `path`, creating parent directories as needed.
///
/// `banner` lines, if any, are emitted as comment lines above the first
/// block so a re-parse discards them.
pub fn write_to(
    doc: &BlockDocument,
    dialect: &Dialect,
    path: &Path,
    banner: &[String],
) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut text = String::new();
    if let Some(comment) = dialect.comments.first() {
        for line in banner {
            text.push_str(comment);
            text.push(' ');
            text.push_str(line);
            text.push('\n');
        }
    }
    text.push_str(&serialize(doc, dialect));
    tracing::debug!(path = %path.display(), blocks = doc.len(), "writing deck file");
    std::fs::write(path, text)?;
    Ok(())
}

fn join_tokens(row: &[Scalar]) -> String {
    let mut line = String::new();
    for (i, token) in row.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&token.to_string());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_is_end_marker_only() {
        let doc = BlockDocument::new();
        assert_eq!(serialize(&doc, &Dialect::standard()), "#STOP\n");
    }

    #[test]
    fn test_block_without_entries_is_header_only() {
        let mut doc = BlockDocument::new();
        doc.add_block("PROCESS", Vec::<(String, Value)>::new())
            .unwrap();
        assert_eq!(serialize(&doc, &Dialect::standard()), "#PROCESS\n#STOP\n");
    }

    #[test]
    fn test_scalar_layout() {
        let mut doc = BlockDocument::new();
        doc.add_block("TEST", [("VALUE", Value::scalar(3.14))])
            .unwrap();
        assert_eq!(
            serialize(&doc, &Dialect::standard()),
            "#TEST\n $VALUE\n  3.14\n#STOP\n"
        );
    }

    #[test]
    fn test_table_layout_one_line_per_row() {
        let mut doc = BlockDocument::new();
        doc.add_block(
            "TEST",
            [("ROWS", Value::table([vec![1, 2], vec![3, 4, 5]]))],
        )
        .unwrap();
        assert_eq!(
            serialize(&doc, &Dialect::standard()),
            "#TEST\n $ROWS\n  1 2\n  3 4 5\n#STOP\n"
        );
    }

    #[test]
    fn test_empty_table_rows_are_dropped() {
        let mut doc = BlockDocument::new();
        doc.add_block(
            "TEST",
            [("ROWS", Value::Table(vec![vec![], vec![1.into()]]))],
        )
        .unwrap();
        // the empty row vanishes; the survivor re-parses as a scalar
        assert_eq!(
            serialize(&doc, &Dialect::standard()),
            "#TEST\n $ROWS\n  1\n#STOP\n"
        );
    }

    #[test]
    fn test_direct_content_has_no_key_line() {
        let mut doc = BlockDocument::new();
        doc.add_block("CURVE", [("", Value::table([vec![0.0, 1.0], vec![10.0, 0.5]]))])
            .unwrap();
        assert_eq!(
            serialize(&doc, &Dialect::standard()),
            "#CURVE\n  0.0 1.0\n  10.0 0.5\n#STOP\n"
        );
    }

    #[test]
    fn test_write_to_emits_banner_as_comment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pcs");
        let mut doc = BlockDocument::new();
        doc.add_block("PROCESS", [("PCS_TYPE", Value::scalar("GROUNDWATER_FLOW"))])
            .unwrap();
        write_to(
            &doc,
            &Dialect::standard(),
            &path,
            &["generated file".to_string()],
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("; generated file\n#PROCESS\n"));
    }
}
