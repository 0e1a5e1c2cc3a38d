// ABOUTME: Compile-time record mapping: the Record trait, bound column values, and array binding
// ABOUTME: Replaces runtime field reflection with explicit per-type field descriptors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Records and Column Values
//!
//! A [`Record`] describes one row. Its implementation pushes each field, in
//! declaration order, into a [`RowEncoder`]. Fields are bound according to
//! their Rust type:
//!
//! - scalars implementing [`ToColumnValue`] bind unchanged,
//! - `Vec<T>` / `&[T]` of an [`ArrayElement`] bind as a native PostgreSQL array,
//! - nested aggregates pushed with [`RowEncoder::nested`] bind as JSON text.
//!
//! The [`impl_record!`](crate::impl_record) macro generates the implementation
//! from a field list.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::value::RawValue;
use uuid::Uuid;

use crate::encoder::RowEncoder;
use crate::errors::EncodingError;

/// A structured value describing one row to insert
pub trait Record {
    /// Push every field into `row`, in declaration order
    fn encode_fields(&self, row: &mut RowEncoder) -> Result<(), EncodingError>;
}

/// Element types PostgreSQL can hold in a native array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// `BOOL`
    Bool,
    /// `INT2`
    SmallInt,
    /// `INT4`
    Int,
    /// `INT8`
    BigInt,
    /// `FLOAT4`
    Real,
    /// `FLOAT8`
    Double,
    /// `TEXT`
    Text,
    /// `UUID`
    Uuid,
    /// `TIMESTAMPTZ`
    Timestamp,
}

/// Store type of a bound value; needed to bind a typed `NULL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A single scalar
    Scalar(ScalarKind),
    /// JSON text of a nested aggregate
    Json,
    /// Native array of scalars
    Array(ScalarKind),
}

/// JSON text of a nested aggregate, kept byte-for-byte as serialized
#[derive(Debug, Clone)]
pub struct JsonText(Box<RawValue>);

impl JsonText {
    /// Serialize `value` to JSON text
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::value::to_raw_value(value).map(Self)
    }

    /// The JSON text
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.get()
    }
}

impl PartialEq for JsonText {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Display for JsonText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sequence bound through the store's native array representation
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValue {
    /// `BOOL[]`
    Bool(Vec<bool>),
    /// `INT2[]`
    SmallInt(Vec<i16>),
    /// `INT4[]`
    Int(Vec<i32>),
    /// `INT8[]`
    BigInt(Vec<i64>),
    /// `FLOAT4[]`
    Real(Vec<f32>),
    /// `FLOAT8[]`
    Double(Vec<f64>),
    /// `TEXT[]`
    Text(Vec<String>),
    /// `UUID[]`
    Uuid(Vec<Uuid>),
    /// `TIMESTAMPTZ[]`
    Timestamp(Vec<DateTime<Utc>>),
}

impl ArrayValue {
    /// Type of the array's elements
    #[must_use]
    pub const fn element_kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::SmallInt(_) => ScalarKind::SmallInt,
            Self::Int(_) => ScalarKind::Int,
            Self::BigInt(_) => ScalarKind::BigInt,
            Self::Real(_) => ScalarKind::Real,
            Self::Double(_) => ScalarKind::Double,
            Self::Text(_) => ScalarKind::Text,
            Self::Uuid(_) => ScalarKind::Uuid,
            Self::Timestamp(_) => ScalarKind::Timestamp,
        }
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::SmallInt(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::BigInt(v) => v.len(),
            Self::Real(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::Text(v) => v.len(),
            Self::Uuid(v) => v.len(),
            Self::Timestamp(v) => v.len(),
        }
    }

    /// True when the array has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// PostgreSQL array literal, e.g. `{1,2,3}` or `{"x","y"}`
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Bool(v) => array_literal(v, |b| String::from(if *b { "t" } else { "f" })),
            Self::SmallInt(v) => array_literal(v, ToString::to_string),
            Self::Int(v) => array_literal(v, ToString::to_string),
            Self::BigInt(v) => array_literal(v, ToString::to_string),
            Self::Real(v) => array_literal(v, |f| float_literal(f64::from(*f))),
            Self::Double(v) => array_literal(v, |f| float_literal(*f)),
            Self::Text(v) => array_literal(v, |s| quoted_element(s)),
            Self::Uuid(v) => array_literal(v, ToString::to_string),
            Self::Timestamp(v) => array_literal(v, |ts| quoted_element(&ts.to_rfc3339())),
        }
    }
}

fn array_literal<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    let elements: Vec<String> = items.iter().map(render).collect();
    format!("{{{}}}", elements.join(","))
}

fn quoted_element(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

fn float_literal(value: f64) -> String {
    if !value.is_infinite() {
        return value.to_string();
    }
    let literal = if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    };
    literal.to_owned()
}

/// A value bound to one placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// Typed `NULL`
    Null(ColumnKind),
    /// `BOOL`
    Bool(bool),
    /// `INT2`
    SmallInt(i16),
    /// `INT4`
    Int(i32),
    /// `INT8`
    BigInt(i64),
    /// `FLOAT4`
    Real(f32),
    /// `FLOAT8`
    Double(f64),
    /// `TEXT`
    Text(String),
    /// JSON text of a nested aggregate
    Json(JsonText),
    /// `UUID`
    Uuid(Uuid),
    /// `TIMESTAMPTZ`
    Timestamp(DateTime<Utc>),
    /// Native array
    Array(ArrayValue),
}

impl ColumnValue {
    /// Store type of this value
    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        match self {
            Self::Null(kind) => *kind,
            Self::Bool(_) => ColumnKind::Scalar(ScalarKind::Bool),
            Self::SmallInt(_) => ColumnKind::Scalar(ScalarKind::SmallInt),
            Self::Int(_) => ColumnKind::Scalar(ScalarKind::Int),
            Self::BigInt(_) => ColumnKind::Scalar(ScalarKind::BigInt),
            Self::Real(_) => ColumnKind::Scalar(ScalarKind::Real),
            Self::Double(_) => ColumnKind::Scalar(ScalarKind::Double),
            Self::Text(_) => ColumnKind::Scalar(ScalarKind::Text),
            Self::Json(_) => ColumnKind::Json,
            Self::Uuid(_) => ColumnKind::Scalar(ScalarKind::Uuid),
            Self::Timestamp(_) => ColumnKind::Scalar(ScalarKind::Timestamp),
            Self::Array(array) => ColumnKind::Array(array.element_kind()),
        }
    }

    /// Text payload, if this is a `TEXT` value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// JSON text, if this is a nested aggregate
    #[must_use]
    pub fn as_json_text(&self) -> Option<&str> {
        match self {
            Self::Json(json) => Some(json.as_str()),
            _ => None,
        }
    }

    /// Array payload, if this is a native array
    #[must_use]
    pub const fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }
}

/// Types that bind directly to a placeholder
pub trait ToColumnValue {
    /// Store type used when the value is absent
    fn column_kind() -> ColumnKind;

    /// The bound value
    fn to_column_value(&self) -> ColumnValue;

    /// True when this is a plain string field holding `""`
    ///
    /// Only such fields are skipped by `omitempty`. Optional strings, numbers,
    /// and sequences are always bound.
    fn is_empty_string(&self) -> bool {
        false
    }
}

/// Types that can be elements of a native array
pub trait ArrayElement: Clone {
    /// Element store type
    const KIND: ScalarKind;

    /// Wrap owned elements in the matching array representation
    fn into_array(values: Vec<Self>) -> ArrayValue;
}

macro_rules! scalar_column {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl ToColumnValue for $ty {
                fn column_kind() -> ColumnKind {
                    ColumnKind::Scalar(ScalarKind::$variant)
                }

                fn to_column_value(&self) -> ColumnValue {
                    ColumnValue::$variant(Clone::clone(self))
                }
            }

            impl ArrayElement for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn into_array(values: Vec<Self>) -> ArrayValue {
                    ArrayValue::$variant(values)
                }
            }
        )+
    };
}

scalar_column!(
    bool => Bool,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    f32 => Real,
    f64 => Double,
    Uuid => Uuid,
    DateTime<Utc> => Timestamp,
);

impl ToColumnValue for String {
    fn column_kind() -> ColumnKind {
        ColumnKind::Scalar(ScalarKind::Text)
    }

    fn to_column_value(&self) -> ColumnValue {
        ColumnValue::Text(self.clone())
    }

    fn is_empty_string(&self) -> bool {
        self.is_empty()
    }
}

impl ArrayElement for String {
    const KIND: ScalarKind = ScalarKind::Text;

    fn into_array(values: Vec<Self>) -> ArrayValue {
        ArrayValue::Text(values)
    }
}

impl ToColumnValue for &str {
    fn column_kind() -> ColumnKind {
        ColumnKind::Scalar(ScalarKind::Text)
    }

    fn to_column_value(&self) -> ColumnValue {
        ColumnValue::Text((*self).to_owned())
    }

    fn is_empty_string(&self) -> bool {
        self.is_empty()
    }
}

impl ArrayElement for &str {
    const KIND: ScalarKind = ScalarKind::Text;

    fn into_array(values: Vec<Self>) -> ArrayValue {
        ArrayValue::Text(values.into_iter().map(str::to_owned).collect())
    }
}

impl<T: ToColumnValue> ToColumnValue for Option<T> {
    fn column_kind() -> ColumnKind {
        T::column_kind()
    }

    fn to_column_value(&self) -> ColumnValue {
        self.as_ref()
            .map_or(ColumnValue::Null(T::column_kind()), ToColumnValue::to_column_value)
    }
}

impl<T: ArrayElement> ToColumnValue for Vec<T> {
    fn column_kind() -> ColumnKind {
        ColumnKind::Array(T::KIND)
    }

    fn to_column_value(&self) -> ColumnValue {
        ColumnValue::Array(T::into_array(self.clone()))
    }
}

impl<T: ArrayElement> ToColumnValue for &[T] {
    fn column_kind() -> ColumnKind {
        ColumnKind::Array(T::KIND)
    }

    fn to_column_value(&self) -> ColumnValue {
        ColumnValue::Array(T::into_array(self.to_vec()))
    }
}

/// Implement [`Record`] for a struct from its field list
///
/// Each entry is `value <field>` or `nested <field>`, optionally followed by
/// `= "<tag>"` where the tag uses the `"<column>[,omitempty]"` form. `value`
/// binds scalars and sequences; `nested` binds the field's JSON text.
///
/// ```
/// use rowkit::{encode, impl_record};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Address {
///     city: String,
/// }
///
/// struct User {
///     name: String,
///     email: String,
///     tags: Vec<String>,
///     address: Address,
/// }
///
/// impl_record!(User {
///     value name,
///     value email = "email,omitempty",
///     value tags = "tags",
///     nested address = "address",
/// });
///
/// let user = User {
///     name: "a".to_owned(),
///     email: String::new(),
///     tags: vec!["x".to_owned()],
///     address: Address { city: "Oslo".to_owned() },
/// };
///
/// let row = encode(&user).unwrap();
/// assert_eq!(row.columns(), ["\"name\"", "\"tags\"", "\"address\""]);
/// assert_eq!(row.placeholders(), ["$1", "$2", "$3"]);
/// ```
#[macro_export]
macro_rules! impl_record {
    (@field $field:ident) => {
        $crate::encoder::Field::new(::core::stringify!($field))
    };
    (@field $field:ident, $tag:literal) => {
        $crate::encoder::Field::tagged(::core::stringify!($field), $tag)
    };
    ($record:ty { $($mode:ident $field:ident $(= $tag:literal)?),* $(,)? }) => {
        impl $crate::record::Record for $record {
            fn encode_fields(
                &self,
                row: &mut $crate::encoder::RowEncoder,
            ) -> ::core::result::Result<(), $crate::errors::EncodingError> {
                $(
                    row.$mode($crate::impl_record!(@field $field $(, $tag)?), &self.$field)?;
                )*
                ::core::result::Result::Ok(())
            }
        }
    };
}
