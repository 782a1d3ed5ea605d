//! Dot notation serialization.
//!
//! This module provides the [`Serializer`] that flattens Rust data structures
//! into dot notation text, one line per scalar leaf.
//!
//! ## Overview
//!
//! The serializer walks a value and keeps the path from the root to the
//! current node:
//!
//! - **Struct fields** join with the connector: `user.name=Alice`
//! - **Sequences** address elements by index: `pets[0]=Rex`
//! - **Maps** address entries by bracketed key: `env[PATH]=/bin` (bare keys
//!   at the root, so output parses back)
//! - **Nulls and `None`** produce no entry at all
//!
//! Every token of the entry is controlled by [`DotSettings`]: separators,
//! quoting, trimming, surrounding texts, URL-encoding, and date rendering.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use dotpath::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//! assert_eq!(to_string(&data).unwrap(), "x=1\ny=2\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! The serializer itself is useful for prefixing and for writing several
//! values into one buffer:
//!
//! ```rust
//! use dotpath::{DotSettings, Serializer};
//!
//! let mut serializer = Serializer::new(DotSettings::new());
//! serializer.serialize_with_prefix("page", &10).unwrap();
//! serializer.serialize_with_prefix("user.id", &1).unwrap();
//! assert_eq!(serializer.into_inner(), "page=10\nuser.id=1\n");
//! ```

use crate::{DotMap, DotSettings, Error, Number, Result, Value};
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use pure_rust_locales::{locale_match, Locale};
use serde::{ser, Serialize};

/// Everything outside the RFC 3986 unreserved set gets percent-escaped.
const URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The dot notation serializer.
///
/// Accumulates entries into an output buffer. Values implementing
/// `Serialize` stream through [`Serializer::serialize`]; dynamic
/// [`Value`] trees go through [`Serializer::serialize_value`], which also
/// honors the date format and locale settings.
pub struct Serializer {
    output: String,
    settings: DotSettings,
}

impl Serializer {
    pub fn new(settings: DotSettings) -> Self {
        // Pre-allocate with reasonable capacity to reduce reallocations
        Serializer {
            output: String::with_capacity(256),
            settings,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Serializes `value` with an empty path prefix.
    pub fn serialize<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.serialize_with_prefix("", value)
    }

    /// Serializes `value` with every emitted path rooted at `prefix`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{DotSettings, Serializer};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct User { id: u32 }
    ///
    /// let mut serializer = Serializer::new(DotSettings::new());
    /// serializer.serialize_with_prefix("user", &User { id: 1 }).unwrap();
    /// assert_eq!(serializer.into_inner(), "user.id=1\n");
    /// ```
    pub fn serialize_with_prefix<T>(&mut self, prefix: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(EntrySerializer {
            ser: self,
            path: prefix.to_string(),
        })
    }

    /// Writes a dynamic [`Value`] tree rooted at `prefix`.
    ///
    /// Unlike the `Serialize` path, this renders [`Value::Date`] leaves with
    /// the configured date format and locale. Writing a tree never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{dot, DotSettings, Serializer};
    ///
    /// let tree = dot!({ "a": [1, 2] });
    /// let mut serializer = Serializer::new(DotSettings::new());
    /// serializer.serialize_value("", &tree);
    /// assert_eq!(serializer.into_inner(), "a[0]=1\na[1]=2\n");
    /// ```
    pub fn serialize_value(&mut self, prefix: &str, value: &Value) {
        match value {
            Value::Null => {}
            Value::Bool(b) => self.write_entry(prefix, if *b { "true" } else { "false" }, false),
            Value::Number(Number::Integer(i)) => self.write_entry(prefix, &i.to_string(), false),
            Value::Number(Number::Float(f)) => {
                let text = self.format_float(*f);
                self.write_entry(prefix, &text, false);
            }
            Value::String(s) => self.write_entry(prefix, s, true),
            Value::Date(dt) => {
                let text = self.format_date(dt);
                self.write_entry(prefix, &text, false);
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    if child.is_null() {
                        continue;
                    }
                    let path = format!("{}[{}]", prefix, index);
                    self.serialize_value(&path, child);
                }
            }
            Value::Object(map) => {
                for (key, child) in map.iter() {
                    if child.is_null() {
                        continue;
                    }
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}[{}]", prefix, key)
                    };
                    self.serialize_value(&path, child);
                }
            }
        }
    }

    /// Writes one complete entry: opening text, key path, spacing, separator,
    /// spacing, decorated value, closing text, entry separator.
    ///
    /// The value is trimmed first, quoted second, and URL-encoded as a whole
    /// last. `is_string` gates the quote applied by the quote-strings
    /// setting; quote-values quotes regardless.
    fn write_entry(&mut self, path: &str, text: &str, is_string: bool) {
        let trimmed = if self.settings.trim_values {
            text.trim_matches(|c: char| self.settings.trim_chars.contains(&c))
        } else {
            text
        };
        let quote = self.settings.quote_values || (self.settings.quote_strings && is_string);
        let decorated = if quote {
            format!(
                "{}{}{}",
                self.settings.quote_char, trimmed, self.settings.quote_char
            )
        } else {
            trimmed.to_string()
        };
        let key = if self.settings.url_encode {
            url_encode(path)
        } else {
            path.to_string()
        };
        let value = if self.settings.url_encode {
            url_encode(&decorated)
        } else {
            decorated
        };

        self.output.push_str(&self.settings.opening);
        self.output.push_str(&key);
        self.output.push_str(&self.settings.spacing_after_key);
        self.output.push_str(&self.settings.key_value_separator);
        self.output.push_str(&self.settings.spacing_before_value);
        self.output.push_str(&value);
        self.output.push_str(&self.settings.closing);
        self.output.push_str(&self.settings.entry_separator);
    }

    fn format_float(&self, v: f64) -> String {
        let text = v.to_string();
        let point = decimal_point(self.settings.locale);
        if point == "." {
            text
        } else {
            text.replace('.', point)
        }
    }

    fn format_date(&self, dt: &DateTime<Utc>) -> String {
        use std::fmt::Write;
        let mut text = String::new();
        let formatted = dt.format_localized(&self.settings.date_format, self.settings.locale);
        if write!(text, "{}", formatted).is_err() {
            // Unparseable strftime text in the settings; fall back to the
            // unambiguous form rather than failing the whole write.
            text.clear();
            text.push_str(&dt.to_rfc3339());
        }
        text
    }
}

fn url_encode(text: &str) -> String {
    utf8_percent_encode(text, URL_ENCODE_SET).to_string()
}

fn decimal_point(locale: Locale) -> &'static str {
    locale_match!(locale => LC_NUMERIC::DECIMAL_POINT)
}

/// Streams one node at a known path. Every scalar becomes an entry, and
/// every container hands out child serializers with extended paths.
struct EntrySerializer<'a> {
    ser: &'a mut Serializer,
    path: String,
}

impl<'a> EntrySerializer<'a> {
    /// Path for a named child (struct field or enum variant).
    fn field_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", self.path, self.ser.settings.connector, name)
        }
    }
}

impl<'a> ser::Serializer for EntrySerializer<'a> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = SeqSerializer<'a>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = StructSerializer<'a>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.ser
            .write_entry(&self.path, if v { "true" } else { "false" }, false);
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.ser.write_entry(&self.path, &v.to_string(), false);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.ser.write_entry(&self.path, &v.to_string(), false);
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        let text = self.ser.format_float(v);
        self.ser.write_entry(&self.path, &text, false);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.serialize_str(&v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.ser.write_entry(&self.path, v, true);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        use ser::SerializeSeq;
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    // Nulls produce no entry.
    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        // Variant names render like any other non-string leaf.
        self.ser.write_entry(&self.path, variant, false);
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        let path = self.field_path(variant);
        value.serialize(EntrySerializer {
            ser: self.ser,
            path,
        })
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer {
            ser: self.ser,
            path: self.path,
            index: 0,
        })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(None)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(None)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        let path = self.field_path(variant);
        Ok(SeqSerializer {
            ser: self.ser,
            path,
            index: 0,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            ser: self.ser,
            path: self.path,
            key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructSerializer {
            ser: self.ser,
            path: self.path,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        let path = self.field_path(variant);
        Ok(StructSerializer {
            ser: self.ser,
            path,
        })
    }
}

pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
    path: String,
    index: usize,
}

impl<'a> SeqSerializer<'a> {
    fn serialize_next<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let path = format!("{}[{}]", self.path, self.index);
        self.index += 1;
        value.serialize(EntrySerializer {
            ser: &mut *self.ser,
            path,
        })
    }
}

impl<'a> ser::SerializeSeq for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.serialize_next(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.serialize_next(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.serialize_next(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleVariant for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.serialize_next(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    path: String,
    key: Option<String>,
}

impl<'a> ser::SerializeMap for MapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        // Root map keys stay bare so output stays parseable; bracketed text
        // at the start of a line would read back as index syntax.
        let path = if self.path.is_empty() {
            key
        } else {
            format!("{}[{}]", self.path, key)
        };
        value.serialize(EntrySerializer {
            ser: &mut *self.ser,
            path,
        })
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

pub struct StructSerializer<'a> {
    ser: &'a mut Serializer,
    path: String,
}

impl<'a> ser::SerializeStruct for StructSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}{}{}", self.path, self.ser.settings.connector, key)
        };
        value.serialize(EntrySerializer {
            ser: &mut *self.ser,
            path,
        })
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

impl<'a> ser::SerializeStructVariant for StructSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(self, key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

/// Stringifies map keys. Strings pass through; chars, integers, and bools
/// format with `Display`. Containers can't be keys in a flat path.
struct KeySerializer;

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(if v { "true" } else { "false" }.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(key_error())
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(key_error())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(key_error())
    }

    fn serialize_none(self) -> Result<String> {
        Err(key_error())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(key_error())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(key_error())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(key_error())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_error())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_error())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_error())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_error())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_error())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(key_error())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_error())
    }
}

fn key_error() -> Error {
    Error::custom("map keys must be strings, chars, integers, or bools")
}

/// Serializer with `Ok = Value`, backing [`to_value`](crate::to_value).
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeValueMap {
    map: DotMap,
    current_key: Option<String>,
}

pub struct SerializeTupleVariantValue {
    variant: String,
    vec: Vec<Value>,
}

pub struct SerializeStructVariantValue {
    variant: String,
    map: DotMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariantValue;
    type SerializeMap = SerializeValueMap;
    type SerializeStruct = SerializeValueMap;
    type SerializeStructVariant = SerializeStructVariantValue;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = DotMap::new();
        map.insert(variant.to_string(), value.serialize(ValueSerializer)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTupleVariantValue> {
        Ok(SerializeTupleVariantValue {
            variant: variant.to_string(),
            vec: Vec::new(),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeValueMap> {
        Ok(SerializeValueMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeValueMap> {
        Ok(SerializeValueMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariantValue> {
        Ok(SerializeStructVariantValue {
            variant: variant.to_string(),
            map: DotMap::new(),
        })
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeValueMap {
    fn new() -> Self {
        SerializeValueMap {
            map: DotMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariantValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = DotMap::new();
        map.insert(self.variant, Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariantValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = DotMap::new();
        map.insert(self.variant, Value::Object(self.map));
        Ok(Value::Object(map))
    }
}
