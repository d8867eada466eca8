//! Descriptor normalization.
//!
//! Device servers advertise attribute types in many spellings: Tango names
//! (`"DevVarLongArray"`, `"PyTango.DevDouble"`), short names (`"int"`,
//! `"float"`), language type tags, canonical enum values, or nested
//! sequences whose depth encodes the dimensionality. [`normalize_type`]
//! folds all of them onto a canonical `(DataType, DataFormat)` pair and
//! [`normalize_access`] does the same for access modes.
//!
//! Both functions are total: unknown type names become
//! [`DataType::Invalid`], unknown access names become
//! [`DataAccess::ReadWrite`].

use serde_json::Value;
use tracing::trace;

use super::types::{DataAccess, DataFormat, DataType};
use crate::consts::VENDOR_PREFIX;

// ─── Descriptors ────────────────────────────────────────────────────

/// Native type tags a descriptor may carry instead of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Int,
    Long,
    Float,
    Str,
    Bool,
}

impl NativeType {
    /// Canonical data type for this tag.
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Int | Self::Long => DataType::Integer,
            Self::Float => DataType::Double,
            Self::Str => DataType::String,
            Self::Bool => DataType::Boolean,
        }
    }
}

/// A loosely-typed data type descriptor.
///
/// `Seq` encodes dimensionality: `Seq([Name("int")])` is a 1-D integer
/// spectrum, `Seq([Seq([Name("int")])])` a 2-D image. Deeper nesting is not
/// supported and resolves to [`DataType::Invalid`].
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// No type given.
    Absent,
    /// Type name, e.g. `"DevVarDoubleArray"` or `"float"`.
    Name(String),
    /// Native type tag.
    Native(NativeType),
    /// Already canonical value.
    Canonical(DataType),
    /// Sequence of descriptors; only the first element is inspected.
    Seq(Vec<TypeDescriptor>),
}

impl From<&str> for TypeDescriptor {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for TypeDescriptor {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl From<NativeType> for TypeDescriptor {
    fn from(t: NativeType) -> Self {
        Self::Native(t)
    }
}

impl From<DataType> for TypeDescriptor {
    fn from(t: DataType) -> Self {
        Self::Canonical(t)
    }
}

impl<T: Into<TypeDescriptor>> From<Option<T>> for TypeDescriptor {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<TypeDescriptor>> From<Vec<T>> for TypeDescriptor {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

/// JSON as found in controller attribute descriptions: `null`, a type name,
/// or (nested) arrays of those. Any other JSON value is not a type and
/// resolves to `Invalid`.
impl From<&Value> for TypeDescriptor {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(s) => Self::Name(s.clone()),
            Value::Array(items) => Self::Seq(items.iter().map(Self::from).collect()),
            Value::Bool(_) | Value::Number(_) | Value::Object(_) => {
                Self::Canonical(DataType::Invalid)
            }
        }
    }
}

/// A loosely-typed access descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDescriptor {
    /// No access given.
    Absent,
    /// Access name, e.g. `"read"` or `"PyTango.READ_WRITE"`.
    Name(String),
    /// Already canonical value.
    Canonical(DataAccess),
}

impl From<&str> for AccessDescriptor {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for AccessDescriptor {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl From<DataAccess> for AccessDescriptor {
    fn from(a: DataAccess) -> Self {
        Self::Canonical(a)
    }
}

impl<T: Into<AccessDescriptor>> From<Option<T>> for AccessDescriptor {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

// ─── Name handling ──────────────────────────────────────────────────

/// Reduce a type name to its lookup token.
///
/// Lower-cases, strips the vendor prefix, then a leading `dev` and a leading
/// `var`. A trailing `array` is cut (at its first occurrence) and reported
/// as [`DataFormat::OneD`].
///
/// `"DevVarLongArray"` → `("long", OneD)`
/// `"PyTango.DevDouble"` → `("double", Scalar)`
pub fn simplify_type_name(name: &str) -> (String, DataFormat) {
    let lowered = name.to_lowercase();
    let mut token = lowered.as_str();
    token = token.strip_prefix(VENDOR_PREFIX).unwrap_or(token);
    token = token.strip_prefix("dev").unwrap_or(token);
    token = token.strip_prefix("var").unwrap_or(token);

    if token.ends_with("array") {
        // ends_with guarantees a match
        let cut = token.find("array").unwrap_or(token.len());
        (token[..cut].to_string(), DataFormat::OneD)
    } else {
        (token.to_string(), DataFormat::Scalar)
    }
}

/// Look a simplified token up in the type name table.
pub fn lookup_type_token(token: &str) -> DataType {
    match token {
        "int" | "integer" | "long" => DataType::Integer,
        "float" | "double" => DataType::Double,
        "str" | "string" => DataType::String,
        "bool" | "boolean" => DataType::Boolean,
        _ => {
            trace!(token, "unrecognized data type token");
            DataType::Invalid
        }
    }
}

fn simplify_access_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    match lowered.strip_prefix(VENDOR_PREFIX) {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

// ─── Normalization ──────────────────────────────────────────────────

/// Map a descriptor onto its canonical `(DataType, DataFormat)`.
///
/// - `Absent` → `(Double, Scalar)`
/// - `Name` → simplified and looked up; an `array` suffix gives `OneD`
/// - `Native` → the corresponding type, `Scalar`
/// - `Canonical` → itself when it is in the type table (`Integer`, `Double`,
///   `String`, `Boolean`), `Invalid` otherwise; `Scalar`
/// - `Seq` → `OneD`, or `TwoD` when its first element is an array name or
///   itself a sequence (whose first element then gives the type)
///
/// Inside a sequence the element type is resolved without the top-level
/// default, so `Seq([Absent])` is `(Invalid, OneD)`. An empty sequence is
/// `(Invalid, OneD)` as well.
pub fn normalize_type(descriptor: &TypeDescriptor) -> (DataType, DataFormat) {
    match descriptor {
        TypeDescriptor::Absent => (DataType::Double, DataFormat::Scalar),
        TypeDescriptor::Name(name) => {
            let (token, format) = simplify_type_name(name);
            (lookup_type_token(&token), format)
        }
        TypeDescriptor::Native(native) => (native.data_type(), DataFormat::Scalar),
        TypeDescriptor::Canonical(dtype) => (table_type(*dtype), DataFormat::Scalar),
        TypeDescriptor::Seq(items) => match items.first() {
            Some(TypeDescriptor::Name(name)) => {
                let (token, format) = simplify_type_name(name);
                (lookup_type_token(&token), format.bump())
            }
            Some(TypeDescriptor::Seq(inner)) => (element_type(inner.first()), DataFormat::TwoD),
            first => (element_type(first), DataFormat::OneD),
        },
    }
}

/// Type of a sequence element. Names contribute only their type; their
/// `array` suffix does not deepen the format any further.
fn element_type(element: Option<&TypeDescriptor>) -> DataType {
    match element {
        Some(TypeDescriptor::Name(name)) => lookup_type_token(&simplify_type_name(name).0),
        Some(TypeDescriptor::Native(native)) => native.data_type(),
        Some(TypeDescriptor::Canonical(dtype)) => table_type(*dtype),
        Some(TypeDescriptor::Absent) | Some(TypeDescriptor::Seq(_)) | None => DataType::Invalid,
    }
}

/// Canonical values present in the type table map to themselves.
const fn table_type(dtype: DataType) -> DataType {
    match dtype {
        DataType::Integer | DataType::Double | DataType::String | DataType::Boolean => dtype,
        DataType::Encoded | DataType::Invalid => DataType::Invalid,
    }
}

/// Map an access descriptor onto its canonical [`DataAccess`].
///
/// `"read"` → `ReadOnly`; `"readwrite"` / `"read_write"` → `ReadWrite`
/// (case-insensitive, vendor prefix stripped). Any other name is
/// `ReadWrite`. `Absent` is `Invalid`.
pub fn normalize_access(descriptor: &AccessDescriptor) -> DataAccess {
    match descriptor {
        AccessDescriptor::Absent => DataAccess::Invalid,
        AccessDescriptor::Canonical(access) => *access,
        AccessDescriptor::Name(name) => match simplify_access_name(name).as_str() {
            "read" => DataAccess::ReadOnly,
            "readwrite" | "read_write" => DataAccess::ReadWrite,
            other => {
                trace!(access = other, "unrecognized access, assuming read-write");
                DataAccess::ReadWrite
            }
        },
    }
}
