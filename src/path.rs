//! Line tokenizer for dot notation paths.
//!
//! Each input line is one entry: a key path and a value joined by the first
//! `=`. The path splits on `.` into segments, and a segment ending in `]`
//! carries a bracketed list index (`pets[2]`).
//!
//! The tokenizer is deliberately dumb. It never trims, never unquotes, and
//! never validates names: `a[0`, `]a[`, and empty names are all legal
//! segment text and pass through verbatim. The only two ways a line can be
//! rejected are a missing `=` and bracket content that is not a
//! non-negative integer no larger than `i32::MAX`.
//!
//! ## Examples
//!
//! ```rust
//! use dotpath::ParsedLine;
//!
//! let line = ParsedLine::parse("user.pets[2]=Rex", 1).unwrap();
//! assert_eq!(line.segments.len(), 2);
//! assert_eq!(line.segments[0].name, "user");
//! assert_eq!(line.segments[1].name, "pets");
//! assert_eq!(line.segments[1].index, Some(2));
//! assert_eq!(line.value, "Rex");
//! ```

use crate::error::{Error, Result};

/// Largest accepted list index. Bracketed numerals above this are rejected
/// as [`Error::InvalidIndex`], the same as non-numeric text.
const MAX_INDEX: usize = i32::MAX as usize;

/// One step of a key path: a map key, optionally followed by a list index.
///
/// `pets[2]` tokenizes to `name: "pets", index: Some(2)`; `pets` alone to
/// `name: "pets", index: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Map key text, verbatim.
    pub name: String,
    /// List index, when the segment used bracket syntax.
    pub index: Option<usize>,
}

/// A tokenized input line: the path segments and the raw value text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Path segments, left to right. Never empty.
    pub segments: Vec<PathSegment>,
    /// Everything after the first `=`, verbatim.
    pub value: String,
}

impl PathSegment {
    /// Tokenizes one path segment.
    ///
    /// A segment ending in `]` is index syntax: the single trailing `]` is
    /// stripped and the segment splits on the first `[` into name and index
    /// text. Everything else is name text.
    ///
    /// `line_number` is carried into the error on a bad index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] when the bracketed text doesn't parse
    /// as a non-negative integer (`a[x]`, `a[-1]`, `a[]`, `a[0][1]`) or
    /// parses to an index above `i32::MAX`.
    pub fn parse(text: &str, line_number: usize) -> Result<PathSegment> {
        let Some(stripped) = text.strip_suffix(']') else {
            return Ok(PathSegment {
                name: text.to_string(),
                index: None,
            });
        };
        match stripped.split_once('[') {
            Some((name, index_text)) => {
                let index = index_text
                    .parse::<usize>()
                    .map_err(|_| Error::invalid_index(line_number, text, index_text))?;
                if index > MAX_INDEX {
                    return Err(Error::invalid_index(line_number, text, index_text));
                }
                Ok(PathSegment {
                    name: name.to_string(),
                    index: Some(index),
                })
            }
            // No bracket to open an index; the lone trailing ] is dropped.
            None => Ok(PathSegment {
                name: stripped.to_string(),
                index: None,
            }),
        }
    }
}

impl ParsedLine {
    /// Tokenizes one input line into path segments and value text.
    ///
    /// The line splits on the FIRST `=`; later `=` characters belong to the
    /// value. The left side splits on every `.`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLine`] when the line has no `=` at all, and
    /// [`Error::InvalidIndex`] for bad bracket content. Both carry
    /// `line_number` (1-based).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::ParsedLine;
    ///
    /// let line = ParsedLine::parse("token=abc=def", 1).unwrap();
    /// assert_eq!(line.segments[0].name, "token");
    /// assert_eq!(line.value, "abc=def");
    /// ```
    pub fn parse(text: &str, line_number: usize) -> Result<ParsedLine> {
        let Some((path, value)) = text.split_once('=') else {
            return Err(Error::malformed_line(line_number, text));
        };
        let segments = split_path(path, line_number)?;
        Ok(ParsedLine {
            segments,
            value: value.to_string(),
        })
    }
}

/// Splits a key path on `.` and tokenizes every segment.
///
/// `str::split` never yields zero items, so the result is never empty: an
/// empty path produces one segment with an empty name.
pub(crate) fn split_path(path: &str, line_number: usize) -> Result<Vec<PathSegment>> {
    path.split('.')
        .map(|segment| PathSegment::parse(segment, line_number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(name: &str, index: Option<usize>) -> PathSegment {
        PathSegment {
            name: name.to_string(),
            index,
        }
    }

    #[test]
    fn test_simple_path() {
        let line = ParsedLine::parse("a.b.c=value", 1).unwrap();
        assert_eq!(
            line.segments,
            vec![segment("a", None), segment("b", None), segment("c", None)]
        );
        assert_eq!(line.value, "value");
    }

    #[test]
    fn test_indexed_segment() {
        let line = ParsedLine::parse("pets[2]=Rex", 1).unwrap();
        assert_eq!(line.segments, vec![segment("pets", Some(2))]);
    }

    #[test]
    fn test_splits_on_first_separator_only() {
        let line = ParsedLine::parse("a=b=c", 1).unwrap();
        assert_eq!(line.segments, vec![segment("a", None)]);
        assert_eq!(line.value, "b=c");
    }

    #[test]
    fn test_empty_value_and_empty_name() {
        let line = ParsedLine::parse("a=", 1).unwrap();
        assert_eq!(line.value, "");

        let line = ParsedLine::parse("=v", 1).unwrap();
        assert_eq!(line.segments, vec![segment("", None)]);
        assert_eq!(line.value, "v");
    }

    #[test]
    fn test_no_trimming_anywhere() {
        let line = ParsedLine::parse(" a = b ", 1).unwrap();
        assert_eq!(line.segments, vec![segment(" a ", None)]);
        assert_eq!(line.value, " b ");
    }

    #[test]
    fn test_missing_separator() {
        let err = ParsedLine::parse("novalue", 3).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn test_invalid_indexes() {
        for bad in ["a[x]=1", "a[-1]=1", "a[]=1", "a[1.5]=1", "a[ 1]=1"] {
            let err = ParsedLine::parse(bad, 7).unwrap_err();
            assert!(
                matches!(err, Error::InvalidIndex { line: 7, .. }),
                "{bad} should be an invalid index"
            );
        }
    }

    #[test]
    fn test_multi_index_segment_is_invalid() {
        let err = ParsedLine::parse("a[0][1]=z", 1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIndex { ref index, .. } if index == "0][1"
        ));
    }

    #[test]
    fn test_unbalanced_brackets_are_plain_names() {
        let line = ParsedLine::parse("a[0=x", 1).unwrap();
        assert_eq!(line.segments, vec![segment("a[0", None)]);

        let line = ParsedLine::parse("]a[=x", 1).unwrap();
        assert_eq!(line.segments, vec![segment("]a[", None)]);
    }

    #[test]
    fn test_trailing_bracket_without_opener() {
        let line = ParsedLine::parse("a]=x", 1).unwrap();
        assert_eq!(line.segments, vec![segment("a", None)]);
    }

    #[test]
    fn test_consecutive_connectors_keep_empty_names() {
        let line = ParsedLine::parse("a..b=x", 1).unwrap();
        assert_eq!(
            line.segments,
            vec![segment("a", None), segment("", None), segment("b", None)]
        );
    }

    #[test]
    fn test_huge_index_is_invalid() {
        let err = ParsedLine::parse("a[99999999999999999999999]=1", 1).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { .. }));
    }

    #[test]
    fn test_index_cap_boundary() {
        let line = ParsedLine::parse("a[2147483647]=x", 1).unwrap();
        assert_eq!(line.segments, vec![segment("a", Some(2_147_483_647))]);

        let err = ParsedLine::parse("a[2147483648]=x", 1).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { .. }));
    }
}
