//! Dot Notation Format
//!
//! This module documents the flat dot notation format as implemented by this
//! library.
//!
//! # Overview
//!
//! Dot notation encodes a nested structure as independent lines, one scalar
//! leaf per line. Each line carries the full path from the root to the leaf:
//!
//! ```text
//! name=Felipe
//! age=47
//! address.city=Rio
//! pets[0].name=Nina
//! pets[1].name=Bilu
//! ```
//!
//! The format is line-oriented and order-tolerant: lines accumulate into one
//! tree, and later lines may extend, replace, or add siblings to earlier
//! ones. It is a natural fit for query strings, configuration overrides, and
//! log-friendly flat dumps of nested data.
//!
//! # Core Syntax
//!
//! ## Entries
//!
//! Each non-empty line is one entry:
//!
//! ```text
//! path=value
//! ```
//!
//! **Rules**:
//! - The line splits on the **first** `=`. Everything to the left is the
//!   path, everything to the right is the value (later `=` characters belong
//!   to the value: `motto=a=b` has the value `a=b`).
//! - A line with no `=` at all is malformed and rejects the whole input.
//! - Empty lines are skipped.
//! - No trimming is applied to the path or the value. `a = 1` stores the
//!   value `" 1"` under the key `"a "`.
//!
//! ## Paths
//!
//! The path splits on `.` into segments. Each segment is a map key,
//! optionally followed by one bracketed list index:
//!
//! ```text
//! a.b=x        segments: a, b
//! a[0]=x       segments: a (index 0)
//! a[2].c[7]=x  segments: a (index 2), c (index 7)
//! ```
//!
//! **Rules**:
//! - A segment ending in `]` is split on its first `[`; the text between the
//!   brackets must parse as a non-negative integer index no larger than
//!   `i32::MAX`.
//! - Non-numeric index text (`a[x]`, `a[-1]`, `a[ 1]`) is rejected, as are
//!   numerals above the cap.
//! - Segment names are taken verbatim. There is no escaping for `.`, `[`,
//!   `]`, or `=` inside keys.
//!
//! # Values
//!
//! Parsed values are opaque text. The parser never guesses types:
//!
//! ```text
//! age=47       stored as the string "47"
//! ok=true      stored as the string "true"
//! note=        stored as the empty string
//! ```
//!
//! Typed extraction happens later, when the tree is deserialized into a
//! target type and the text is coerced on demand.
//!
//! # Building Trees
//!
//! ## Accumulation
//!
//! Lines apply to the same root in order:
//!
//! ```text
//! person.name=Ana
//! person.age=30
//! ```
//!
//! produces `{person: {name: "Ana", age: "30"}}`.
//!
//! ## Sparse Lists
//!
//! Writing an index grows the list to hold it; skipped slots hold an
//! explicit null, never an empty string:
//!
//! ```text
//! a[2]=x
//! ```
//!
//! produces a three-element list `[null, null, "x"]`. Lists grow
//! monotonically and never shrink.
//!
//! ## Last Write Wins
//!
//! Re-addressing a path replaces whatever is there, including a container:
//!
//! ```text
//! a.b=1
//! a.b=2      a.b is now "2"
//! a=flat     a is now the string "flat"; the whole map under it is gone
//! ```
//!
//! No kind-conflict error exists. Callers must not mix `a[0]` and `a.b` for
//! the same key and expect both to survive.
//!
//! # Serialization
//!
//! Serialization walks a data structure and emits one entry per scalar leaf,
//! in visiting order. The dispatch rules:
//!
//! | Node | Output |
//! |------|--------|
//! | null / `None` | nothing |
//! | struct field | path joined with the connector: `user.name=Alice` |
//! | list element | bracketed index: `pets[0]=Rex` |
//! | map entry | bracketed key: `env[PATH]=/bin` (bare at the root) |
//! | scalar | one formatted entry |
//!
//! Struct fields join with `.` while map keys and list indexes use brackets.
//! Root map keys stay bare so a flat map serializes to text the parser
//! accepts back unchanged. Bracketed **string** keys are serialize-only:
//! `env[PATH]=/bin` will not re-parse, since bracket text must be numeric.
//!
//! ## Formatting Pipeline
//!
//! Every scalar passes through, in order: type formatting (booleans
//! lowercase, dates per the configured format and locale), trimming,
//! quoting, URL-encoding. The entry is then assembled as:
//!
//! ```text
//! opening + key + spacingAfterKey + separator + spacingBeforeValue + value + closing + entrySeparator
//! ```
//!
//! URL-encoding applies to the key path and the fully quoted value, each as
//! one unit. Separators and surrounding text are never encoded.
//!
//! # Query Strings
//!
//! With the entry separator set to `&` and URL-encoding on, the same walk
//! produces a query string:
//!
//! ```text
//! page=10&user.id=1&token=my%20token%2F123
//! ```
//!
//! # Edge Cases
//!
//! ## Duplicate Indexes
//!
//! ```text
//! a[0]=x
//! a[0]=y     a[0] is "y"
//! ```
//!
//! ## Out-of-Order Indexes
//!
//! ```text
//! a[2]=x
//! a[1]=y     a is [null, "y", "x"]
//! ```
//!
//! ## Lists of Maps
//!
//! ```text
//! p[0].n=j
//! p[0].c[0]=k
//! ```
//!
//! `p` is a one-element list whose element is a map with `n = "j"` and a
//! nested one-element list `c = ["k"]`.
//!
//! # Limitations
//!
//! - **No escaping**: keys containing `.`, `[`, `]`, or `=` cannot be
//!   represented.
//! - **No multi-line values**: the line boundary is the record boundary.
//! - **Whole-input parsing**: input is parsed into a whole tree; the format
//!   is not designed for streaming multi-gigabyte payloads.
//! - **Numeric bracket text only**: bracketed map keys appear in serialized
//!   output but are not accepted by the parser.

// This module contains only documentation; no implementation code
