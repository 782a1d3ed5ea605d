//! # dotpath
//!
//! A serde library for flat dot notation: one `path=value` line per scalar
//! leaf, with dots for nesting and brackets for list indexes.
//!
//! ```text
//! name=Felipe
//! age=47
//! pets[0].name=Nina
//! pets[1].name=Bilu
//! ```
//!
//! ## Features
//!
//! - **Bidirectional**: parse text into a dynamic [`Value`] tree, serialize
//!   any `Serialize` type back to text
//! - **Serde integration**: `#[derive(Serialize, Deserialize)]` types work
//!   directly via [`to_string`] and [`from_str`]
//! - **Incremental parsing**: lines accumulate into one tree; feed multiple
//!   inputs into the same root with [`parse_into`]
//! - **Sparse lists**: `a[2]=x` alone yields `[null, null, "x"]`; holes
//!   deserialize as `None`
//! - **Configurable output**: separators, quoting, trimming, URL-encoding,
//!   date formats, and locales via [`DotSettings`]
//! - **Query strings**: [`to_query_string`] renders any value as
//!   `a=1&b.c=2` with percent-encoding
//!
//! ## Quick Start
//!
//! Serialization:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person = Person { name: "Felipe".to_string(), age: 47 };
//! let text = dotpath::to_string(&person).unwrap();
//! assert_eq!(text, "name=Felipe\nage=47\n");
//! ```
//!
//! Deserialization:
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person: Person = dotpath::from_str("name=Felipe\nage=47").unwrap();
//! assert_eq!(person.age, 47);
//! ```
//!
//! ## Dynamic Values
//!
//! Parsing produces a [`Value`] tree whose leaves are opaque strings. Build
//! trees by hand with the [`dot!`] macro:
//!
//! ```rust
//! use dotpath::{dot, parse, Value};
//!
//! let tree = parse("pets[0].name=Nina").unwrap();
//! assert_eq!(
//!     tree.lookup("pets[0].name"),
//!     Some(&Value::String("Nina".to_string()))
//! );
//!
//! let built = dot!({ "page": 10, "tags": ["a", "b"] });
//! assert!(built.is_object());
//! ```
//!
//! ## Formatting
//!
//! Every token of the output is configurable:
//!
//! ```rust
//! use dotpath::DotSettings;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let settings = DotSettings::new()
//!     .with_spacing_after_key(" ")
//!     .with_spacing_before_value(" ");
//! let text = dotpath::to_string_with_settings(&Point { x: 1, y: 2 }, settings).unwrap();
//! assert_eq!(text, "x = 1\ny = 2\n");
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All list growth and indexing is bounds-checked
//! - Proper error propagation with `Result` types
//! - Serialization of well-formed data never fails
//!
//! ## Format
//!
//! For the complete format description, see the [`format`] module.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod path;
pub mod ser;
pub mod settings;
pub mod tree;
pub mod value;

pub use chrono::Locale;
pub use de::ValueDeserializer;
pub use error::{Error, Result};
pub use map::DotMap;
pub use path::{ParsedLine, PathSegment};
pub use ser::{Serializer, ValueSerializer};
pub use settings::DotSettings;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to dot notation with default settings.
///
/// # Examples
///
/// ```rust
/// use dotpath::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "x=1\ny=2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g., a map with a
/// non-stringifiable key).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_settings(value, DotSettings::default())
}

/// Serialize any `T: Serialize` to dot notation with custom settings.
///
/// # Examples
///
/// ```rust
/// use dotpath::{to_string_with_settings, DotSettings};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let settings = DotSettings::new().with_key_value_separator(": ");
/// let text = to_string_with_settings(&Point { x: 1, y: 2 }, settings).unwrap();
/// assert_eq!(text, "x: 1\ny: 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_settings<T>(value: &T, settings: DotSettings) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(settings);
    serializer.serialize(value)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` as a URL query string.
///
/// Uses `&` between entries, percent-encodes keys and values, and leaves no
/// trailing separator.
///
/// # Examples
///
/// ```rust
/// use dotpath::to_query_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Params {
///     page: u32,
///     token: String,
/// }
///
/// let params = Params { page: 10, token: "my token/123".to_string() };
/// let query = to_query_string(&params).unwrap();
/// assert_eq!(query, "page=10&token=my%20token%2F123");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_query_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut output = to_string_with_settings(value, DotSettings::query_string())?;
    if output.ends_with('&') {
        output.pop();
    }
    Ok(output)
}

/// Convert any `T: Serialize` to a [`Value`] tree.
///
/// Useful for working with data dynamically when the structure isn't known
/// at compile time.
///
/// # Examples
///
/// ```rust
/// use dotpath::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(crate::ser::ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer in dot notation.
///
/// # Examples
///
/// ```rust
/// use dotpath::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x=1\ny=2\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_settings(writer, value, DotSettings::default())
}

/// Serialize any `T: Serialize` to a writer in dot notation with custom
/// settings.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_settings<W, T>(mut writer: W, value: &T, settings: DotSettings) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_settings(value, settings)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parse dot notation text into a [`Value`] tree.
///
/// Empty lines are skipped. Every other line must hold a `path=value`
/// entry; lines apply in order, so later entries extend or overwrite
/// earlier ones.
///
/// # Examples
///
/// ```rust
/// use dotpath::{parse, Value};
///
/// let tree = parse("name=Felipe\npets[0]=Nina").unwrap();
/// assert_eq!(tree.lookup("name"), Some(&Value::String("Felipe".to_string())));
/// assert_eq!(tree.lookup("pets[0]"), Some(&Value::String("Nina".to_string())));
/// ```
///
/// # Errors
///
/// Fails on the first line with no `=` separator or with non-numeric
/// bracket text. The error reports the 1-based line number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    let mut root = DotMap::new();
    parse_into(text, &mut root)?;
    Ok(Value::Object(root))
}

/// Parse dot notation text into an existing root map.
///
/// Merging is repeated application of the same write rule: each line
/// extends or overwrites whatever the root already holds.
///
/// # Examples
///
/// ```rust
/// use dotpath::{parse_into, DotMap};
///
/// let mut root = DotMap::new();
/// parse_into("a=1", &mut root).unwrap();
/// parse_into("b.c=2", &mut root).unwrap();
/// assert_eq!(root.len(), 2);
/// ```
///
/// # Errors
///
/// Fails on the first malformed line. Lines before it stay applied to
/// `root`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_into(text: &str, root: &mut DotMap) -> Result<()> {
    parse_lines(text.lines(), root)
}

/// Parse an iterator of lines into an existing root map.
///
/// Line numbers in errors count from 1 in iteration order.
///
/// # Examples
///
/// ```rust
/// use dotpath::{parse_lines, DotMap};
///
/// let mut root = DotMap::new();
/// parse_lines(vec!["a[0]=x", "a[1]=y"], &mut root).unwrap();
/// assert_eq!(root.get("a").and_then(|v| v.as_array()).map(|a| a.len()), Some(2));
/// ```
///
/// # Errors
///
/// Fails on the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_lines<I, S>(lines: I, root: &mut DotMap) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (number, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }
        let parsed = ParsedLine::parse(line, number + 1)?;
        tree::insert(root, parsed);
    }
    Ok(())
}

/// Deserialize an instance of type `T` from dot notation text.
///
/// Leaf values are stored as text during parsing and coerced to the target
/// type on demand, so `age=47` fills a `u32` field.
///
/// # Examples
///
/// ```rust
/// use dotpath::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person: Person = from_str("name=Felipe\nage=47").unwrap();
/// assert_eq!(person, Person { name: "Felipe".to_string(), age: 47 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid dot notation or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(text)?)
}

/// Deserialize an instance of type `T` from an I/O stream of dot notation.
///
/// # Examples
///
/// ```rust
/// use dotpath::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(b"x=1\ny=2");
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid dot notation,
/// or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&text)
}

/// Deserialize an instance of type `T` from bytes of dot notation text.
///
/// # Examples
///
/// ```rust
/// use dotpath::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_slice(b"x=1\ny=2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid dot
/// notation, or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let text = std::str::from_utf8(bytes).map_err(|e| Error::custom(e.to_string()))?;
    from_str(text)
}

/// Deserialize an instance of type `T` from a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use dotpath::{dot, from_value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let value = dot!({ "x": 1, "y": 2 });
/// let point: Point = from_value(value).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the tree cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_parse_builds_tree() {
        let tree = parse("a.b=1\nc[2]=x").unwrap();
        assert_eq!(tree.lookup("a.b"), Some(&Value::String("1".to_string())));
        assert_eq!(tree.lookup("c[2]"), Some(&Value::String("x".to_string())));
        assert_eq!(tree.lookup("c[0]"), Some(&Value::Null));
    }

    #[test]
    fn test_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            Value::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&Value::Number(Number::Integer(1))));
                assert_eq!(obj.get("y"), Some(&Value::Number(Number::Integer(2))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_query_string() {
        let user = User {
            id: 1,
            name: "my name/here".to_string(),
            active: true,
            tags: vec![],
        };

        let query = to_query_string(&user).unwrap();
        assert_eq!(query, "id=1&name=my%20name%2Fhere&active=true");
    }

    #[test]
    fn test_custom_settings() {
        let point = Point { x: 1, y: 2 };
        let settings = DotSettings::new()
            .with_spacing_after_key(" ")
            .with_spacing_before_value(" ");

        let text = to_string_with_settings(&point, settings).unwrap();
        assert_eq!(text, "x = 1\ny = 2\n");
    }
}
