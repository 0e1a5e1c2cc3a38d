// ABOUTME: Row encoder turning a record into quoted columns, bound values, and placeholders
// ABOUTME: Applies tag-based column naming, omitempty skipping, and contiguous placeholder numbering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Row Encoder
//!
//! [`encode`] walks a [`Record`] and produces an [`EncodedRow`]: three
//! equal-length sequences of quoted column names, bound values, and
//! placeholder tokens. Placeholder `$i` always binds `values()[i - 1]`, and
//! numbering stays contiguous when fields are skipped.

use serde::Serialize;

use crate::errors::EncodingError;
use crate::record::{ColumnValue, JsonText, Record, ToColumnValue};
use crate::sql::{placeholder, quote_identifier};

/// Declared name of a record field plus its optional serialization tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    name: &'a str,
    tag: Option<&'a str>,
}

impl<'a> Field<'a> {
    /// Untagged field; the column is named after the field
    #[must_use]
    pub const fn new(name: &'a str) -> Self {
        Self { name, tag: None }
    }

    /// Field with a `"<column>[,omitempty]"` tag
    #[must_use]
    pub const fn tagged(name: &'a str, tag: &'a str) -> Self {
        Self {
            name,
            tag: Some(tag),
        }
    }

    /// Declared field name
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Parsed tag; an absent tag parses like an empty one
    #[must_use]
    pub fn options(&self) -> FieldTag<'a> {
        FieldTag::parse(self.tag.unwrap_or_default())
    }

    /// Column name: the tag's name when present and non-empty, else the field name
    #[must_use]
    pub fn column_name(&self) -> &'a str {
        self.options().column.unwrap_or(self.name)
    }
}

/// Parsed `"<column>[,option...]"` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldTag<'a> {
    /// Column name segment, `None` when empty
    pub column: Option<&'a str>,
    /// Skip the field when its value is the empty string
    pub omit_empty: bool,
}

impl<'a> FieldTag<'a> {
    /// Parse a tag; options other than `omitempty` are ignored
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut segments = raw.split(',');
        let column = segments
            .next()
            .map(str::trim)
            .filter(|column| !column.is_empty());
        let omit_empty = segments.any(|option| option.trim() == "omitempty");
        Self { column, omit_empty }
    }
}

/// One emitted field: column, value, and the placeholder that binds it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnBinding<'r> {
    /// Resolved column name before quoting
    pub name: &'r str,
    /// Quoted column identifier
    pub column: &'r str,
    /// Bound value
    pub value: &'r ColumnValue,
    /// Placeholder token
    pub placeholder: &'r str,
}

/// Encoded record, ready to be placed in an INSERT statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedRow {
    names: Vec<String>,
    columns: Vec<String>,
    values: Vec<ColumnValue>,
    placeholders: Vec<String>,
}

impl EncodedRow {
    /// Number of emitted columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when every field was skipped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolved column names before quoting
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Quoted column identifiers
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Bound values, aligned with `columns()`
    #[must_use]
    pub fn values(&self) -> &[ColumnValue] {
        &self.values
    }

    /// Placeholder tokens, aligned with `values()`
    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Emitted fields as column bindings, in order
    pub fn bindings(&self) -> impl Iterator<Item = ColumnBinding<'_>> {
        self.names
            .iter()
            .zip(&self.columns)
            .zip(&self.values)
            .zip(&self.placeholders)
            .map(|(((name, column), value), placeholder)| ColumnBinding {
                name,
                column,
                value,
                placeholder,
            })
    }

    /// Split into `(columns, values, placeholders)`
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<ColumnValue>, Vec<String>) {
        (self.columns, self.values, self.placeholders)
    }
}

/// Collects the fields a [`Record`] pushes
#[derive(Debug, Default)]
pub struct RowEncoder {
    row: EncodedRow,
}

impl RowEncoder {
    /// Empty encoder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a scalar or sequence field
    ///
    /// Sequences bind as native arrays; everything else binds unchanged. The
    /// field is skipped when its tag carries `omitempty` and it is a plain
    /// string holding `""`.
    pub fn value<V: ToColumnValue>(
        &mut self,
        field: Field<'_>,
        value: &V,
    ) -> Result<&mut Self, EncodingError> {
        if field.options().omit_empty && value.is_empty_string() {
            return Ok(self);
        }
        self.bind(field.column_name(), value.to_column_value());
        Ok(self)
    }

    /// Push a nested aggregate, bound as its JSON text
    pub fn nested<T: Serialize + ?Sized>(
        &mut self,
        field: Field<'_>,
        value: &T,
    ) -> Result<&mut Self, EncodingError> {
        let column = field.column_name();
        let json = JsonText::from_value(value).map_err(|source| EncodingError::NestedValue {
            column: column.to_owned(),
            source,
        })?;
        self.bind(column, ColumnValue::Json(json));
        Ok(self)
    }

    fn bind(&mut self, name: &str, value: ColumnValue) {
        let position = self.row.len() + 1;
        self.row.names.push(name.to_owned());
        self.row.columns.push(quote_identifier(name));
        self.row.values.push(value);
        self.row.placeholders.push(placeholder(position));
    }

    /// Finish encoding
    #[must_use]
    pub fn finish(self) -> EncodedRow {
        self.row
    }
}

/// Encode `record` into column bindings
///
/// Fails only when a nested aggregate cannot be serialized to JSON.
pub fn encode<R: Record + ?Sized>(record: &R) -> Result<EncodedRow, EncodingError> {
    let mut row = RowEncoder::new();
    record.encode_fields(&mut row)?;
    Ok(row.finish())
}
