//! Configuration settings for dot notation serialization.
//!
//! This module provides [`DotSettings`], which controls every token of the
//! serialized output. Parsing is not configurable: the parse grammar is fixed
//! to `.` connectors and a first-`=` split, so a document produced with the
//! default settings always parses back.
//!
//! ## Examples
//!
//! ```rust
//! use dotpath::{to_string_with_settings, DotSettings};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! // Spaces around the separator
//! let settings = DotSettings::new()
//!     .with_spacing_after_key(" ")
//!     .with_spacing_before_value(" ");
//! let text = to_string_with_settings(&data, settings).unwrap();
//! assert_eq!(text, "x = 1\ny = 2\n");
//! ```

use chrono::Locale;

/// Configuration settings for dot notation serialization.
///
/// Every field has a `with_*` builder. The defaults produce the plain
/// `key=value` form, one entry per line:
///
/// ```text
/// user.name=Alice
/// user.pets[0]=Rex
/// ```
///
/// # Examples
///
/// ```rust
/// use dotpath::DotSettings;
///
/// // Default line-per-entry form
/// let settings = DotSettings::new();
///
/// // Query string form (`a=1&b=2`, URL-encoded)
/// let settings = DotSettings::query_string();
///
/// // Custom configuration
/// let settings = DotSettings::new()
///     .with_quote_strings(true)
///     .with_trim_values(true);
/// ```
#[derive(Clone, Debug)]
pub struct DotSettings {
    /// Connector between path segments. Defaults to `"."`.
    pub connector: String,
    /// Separator between the full key path and the value. Defaults to `"="`.
    pub key_value_separator: String,
    /// Separator between entries. Defaults to the platform line break.
    pub entry_separator: String,
    /// Quote character used when [`quote_strings`](Self::quote_strings) or
    /// [`quote_values`](Self::quote_values) is set. Defaults to `'"'`.
    pub quote_char: char,
    /// Quote string leaves. Defaults to `false`.
    pub quote_strings: bool,
    /// Quote every leaf, overriding [`quote_strings`](Self::quote_strings).
    /// Defaults to `false`.
    pub quote_values: bool,
    /// Text after the key path, before the separator. Defaults to `""`.
    pub spacing_after_key: String,
    /// Text after the separator, before the value. Defaults to `""`.
    pub spacing_before_value: String,
    /// Trim values before writing. Defaults to `false`.
    pub trim_values: bool,
    /// Characters trimmed from both ends when
    /// [`trim_values`](Self::trim_values) is set. Defaults to `[' ']`.
    pub trim_chars: Vec<char>,
    /// Text before each entry. Defaults to `""`.
    pub opening: String,
    /// Text after each entry, before the entry separator. Defaults to `""`.
    pub closing: String,
    /// Percent-encode each key path and each decorated value. Defaults to
    /// `false`.
    pub url_encode: bool,
    /// Date format string (strftime syntax). Defaults to `"%+"` (RFC 3339).
    /// Applies to [`Value::Date`](crate::Value::Date) leaves; dates reaching
    /// the serializer through a generic `Serialize` impl arrive already
    /// rendered as strings. A format string chrono cannot interpret falls
    /// back to RFC 3339 output instead of failing the write.
    pub date_format: String,
    /// Locale used for date names and the float decimal separator. Defaults
    /// to [`Locale::POSIX`].
    pub locale: Locale,
}

fn platform_line_break() -> String {
    if cfg!(windows) {
        "\r\n".to_string()
    } else {
        "\n".to_string()
    }
}

impl Default for DotSettings {
    fn default() -> Self {
        DotSettings {
            connector: ".".to_string(),
            key_value_separator: "=".to_string(),
            entry_separator: platform_line_break(),
            quote_char: '"',
            quote_strings: false,
            quote_values: false,
            spacing_after_key: String::new(),
            spacing_before_value: String::new(),
            trim_values: false,
            trim_chars: vec![' '],
            opening: String::new(),
            closing: String::new(),
            url_encode: false,
            date_format: "%+".to_string(),
            locale: Locale::POSIX,
        }
    }
}

impl DotSettings {
    /// Creates default settings (plain `key=value`, one entry per line).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::DotSettings;
    ///
    /// let settings = DotSettings::new();
    /// assert_eq!(settings.connector, ".");
    /// assert_eq!(settings.key_value_separator, "=");
    /// assert!(!settings.url_encode);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings for URL query string output: entries joined with `&`
    /// and percent-encoded. Everything else keeps its default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::DotSettings;
    ///
    /// let settings = DotSettings::query_string();
    /// assert_eq!(settings.entry_separator, "&");
    /// assert!(settings.url_encode);
    /// ```
    #[must_use]
    pub fn query_string() -> Self {
        DotSettings {
            entry_separator: "&".to_string(),
            url_encode: true,
            ..Default::default()
        }
    }

    /// Sets the connector between path segments.
    #[must_use]
    pub fn with_connector(mut self, connector: impl Into<String>) -> Self {
        self.connector = connector.into();
        self
    }

    /// Sets the separator between the key path and the value.
    #[must_use]
    pub fn with_key_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_value_separator = separator.into();
        self
    }

    /// Sets the separator between entries.
    #[must_use]
    pub fn with_entry_separator(mut self, separator: impl Into<String>) -> Self {
        self.entry_separator = separator.into();
        self
    }

    /// Sets the quote character.
    #[must_use]
    pub fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    /// Quotes string leaves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{to_string_with_settings, DotSettings};
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([("name", "Alice")]);
    /// let settings = DotSettings::new().with_quote_strings(true);
    /// let text = to_string_with_settings(&map, settings).unwrap();
    /// assert_eq!(text, "name=\"Alice\"\n");
    /// ```
    #[must_use]
    pub fn with_quote_strings(mut self, quote_strings: bool) -> Self {
        self.quote_strings = quote_strings;
        self
    }

    /// Quotes every leaf, strings or not.
    #[must_use]
    pub fn with_quote_values(mut self, quote_values: bool) -> Self {
        self.quote_values = quote_values;
        self
    }

    /// Sets the text between the key path and the separator.
    #[must_use]
    pub fn with_spacing_after_key(mut self, spacing: impl Into<String>) -> Self {
        self.spacing_after_key = spacing.into();
        self
    }

    /// Sets the text between the separator and the value.
    #[must_use]
    pub fn with_spacing_before_value(mut self, spacing: impl Into<String>) -> Self {
        self.spacing_before_value = spacing.into();
        self
    }

    /// Trims values before writing (and before quoting).
    #[must_use]
    pub fn with_trim_values(mut self, trim_values: bool) -> Self {
        self.trim_values = trim_values;
        self
    }

    /// Sets the characters trimmed when trimming is enabled.
    #[must_use]
    pub fn with_trim_chars(mut self, trim_chars: Vec<char>) -> Self {
        self.trim_chars = trim_chars;
        self
    }

    /// Sets the texts written around each entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{to_string_with_settings, DotSettings};
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([("a", "1")]);
    /// let settings = DotSettings::new()
    ///     .with_surrounding("<", ">")
    ///     .with_entry_separator("");
    /// assert_eq!(to_string_with_settings(&map, settings).unwrap(), "<a=1>");
    /// ```
    #[must_use]
    pub fn with_surrounding(
        mut self,
        opening: impl Into<String>,
        closing: impl Into<String>,
    ) -> Self {
        self.opening = opening.into();
        self.closing = closing.into();
        self
    }

    /// Percent-encodes key paths and decorated values.
    #[must_use]
    pub fn with_url_encode(mut self, url_encode: bool) -> Self {
        self.url_encode = url_encode;
        self
    }

    /// Sets the strftime format used for date leaves. A format chrono cannot
    /// interpret falls back to RFC 3339 output.
    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Sets the locale used for date names and the float decimal separator.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
