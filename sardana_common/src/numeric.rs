//! Number classification and the scalar change filter.
//!
//! Attribute values reach the client loosely typed. [`AttrValue`] carries
//! them; [`is_number`] tells numbers apart from everything else and
//! [`ScalarNumberFilter`] decides whether a new reading differs enough from
//! the previous one to be reported as a change.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::EPSILON_ERROR;

/// Attribute value as received from a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// No value.
    Null,
    /// Boolean; counts as the number 0 or 1.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer too large for `Int`.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Complex number.
    Complex { re: f64, im: f64 },
    /// UTF-8 string.
    String(String),
    /// Array-library value with explicit shape; an empty shape holds one value.
    NdArray { shape: Vec<usize>, data: Vec<f64> },
    /// Sequence of values.
    Array(Vec<AttrValue>),
    /// Key-value map.
    Object(BTreeMap<String, AttrValue>),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Complex { re, im } => write!(f, "{re}{im:+}j"),
            Self::String(s) => write!(f, "{s}"),
            Self::NdArray { shape, data } => write!(f, "ndarray{shape:?}{data:?}"),
            Self::Array(items) => write!(f, "{items:?}"),
            Self::Object(map) => write!(f, "{map:?}"),
        }
    }
}

impl AttrValue {
    /// True for numeric scalars: booleans, integers, floats and complex
    /// numbers. Array values are never numbers, zero-dimensional ones included.
    pub fn is_number(&self) -> bool {
        match self {
            Self::Bool(_) | Self::Int(_) | Self::UInt(_) | Self::Float(_) | Self::Complex { .. } => {
                true
            }
            Self::Null | Self::String(_) | Self::NdArray { .. } | Self::Array(_) | Self::Object(_) => {
                false
            }
        }
    }

    /// Exact value of a boolean or integer.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Bool(b) => Some(i128::from(*b)),
            Self::Int(i) => Some(i128::from(*i)),
            Self::UInt(u) => Some(i128::from(*u)),
            _ => None,
        }
    }

    /// Real value usable in a subtraction: numbers other than complex, plus
    /// zero-dimensional array values. `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(i) => Some(*i as f64),
            Self::UInt(u) => Some(*u as f64),
            Self::Float(x) => Some(*x),
            Self::NdArray { shape, data } if shape.is_empty() && data.len() == 1 => {
                data.first().copied()
            }
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// Is `value` a numeric scalar?
#[inline]
pub fn is_number(value: &AttrValue) -> bool {
    value.is_number()
}

/// Decides whether two successive readings are different.
///
/// Returns `true` ("changed") when two real values differ by more than
/// `epsilon`, `false` when they are within it. Anything else, complex
/// numbers included, is compared with plain inequality. A NaN difference
/// is never greater than `epsilon`, so NaN readings are unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarNumberFilter {
    pub epsilon: f64,
}

impl Default for ScalarNumberFilter {
    fn default() -> Self {
        Self {
            epsilon: EPSILON_ERROR,
        }
    }
}

impl ScalarNumberFilter {
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// `true` if `a` and `b` should be reported as different.
    ///
    /// Two integers (booleans included) are subtracted exactly; any other
    /// pair of reals goes through `f64`.
    pub fn changed(&self, a: &AttrValue, b: &AttrValue) -> bool {
        if let (Some(x), Some(y)) = (a.as_i128(), b.as_i128()) {
            return (x.abs_diff(y) as f64) > self.epsilon;
        }
        match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => (x - y).abs() > self.epsilon,
            _ => a != b,
        }
    }
}
