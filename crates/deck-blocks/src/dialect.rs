//! Marker tables for the line-oriented deck dialects.
//!
//! The codec itself is marker-agnostic; each file kind supplies a `Dialect`
//! describing its literal prefixes. The stock simulator dialect looks like:
//!
//! ```text
//! #PROCESS
//!  $PCS_TYPE
//!   GROUNDWATER_FLOW
//! #STOP
//! ```

/// The marker set for one deck dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Prefix introducing a block header line.
    pub block_start: String,
    /// Prefix introducing a sub-keyword line.
    pub key_entry: String,
    /// Comment markers; anything after one of these on a line is dropped.
    pub comments: Vec<String>,
    /// Keyword that terminates the document (written after `block_start`).
    pub end: String,
    /// Indentation emitted before sub-keyword lines.
    pub sub_indent: String,
    /// Indentation emitted before data lines.
    pub content_indent: String,
}

impl Dialect {
    /// The simulator's standard dialect: `#` blocks, `$` keys, `;`//`//`
    /// comments, `#STOP` terminator.
    pub fn standard() -> Self {
        Dialect {
            block_start: "#".into(),
            key_entry: "$".into(),
            comments: vec![";".into(), "//".into()],
            end: "STOP".into(),
            sub_indent: " ".into(),
            content_indent: "  ".into(),
        }
    }

    /// Strip any trailing comment from a raw line.
    pub fn uncomment<'a>(&self, line: &'a str) -> &'a str {
        let mut cut = line.len();
        for marker in &self.comments {
            if let Some(pos) = line.find(marker.as_str()) {
                cut = cut.min(pos);
            }
        }
        &line[..cut]
    }

    /// The full end-of-document marker line.
    pub fn end_marker(&self) -> String {
        format!("{}{}", self.block_start, self.end)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncomment() {
        let d = Dialect::standard();
        assert_eq!(d.uncomment("1 2 3 ; trailing"), "1 2 3 ");
        assert_eq!(d.uncomment("1 2 // note ; nested"), "1 2 ");
        assert_eq!(d.uncomment("plain"), "plain");
    }

    #[test]
    fn test_end_marker() {
        assert_eq!(Dialect::standard().end_marker(), "#STOP");
    }
}
