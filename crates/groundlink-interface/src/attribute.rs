//! Typed values carried by parameter writes and action arguments

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed value sent to a provider.
///
/// Scalars cover the types providers commonly declare; `List` carries
/// structured values as an ordered sequence of attributes.
///
/// In configuration files an attribute is written as a single-key table naming
/// its type, e.g. `{ string = "on" }` or `{ double = 1.35565 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Boolean(bool),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    String(String),
    Blob(Vec<u8>),
    List(Vec<Attribute>),
}

impl Attribute {
    /// Short type name used in log lines and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Attribute::Boolean(_) => "boolean",
            Attribute::Long(_) => "long",
            Attribute::ULong(_) => "ulong",
            Attribute::Float(_) => "float",
            Attribute::Double(_) => "double",
            Attribute::String(_) => "string",
            Attribute::Blob(_) => "blob",
            Attribute::List(_) => "list",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Boolean(v) => write!(f, "{}", v),
            Attribute::Long(v) => write!(f, "{}", v),
            Attribute::ULong(v) => write!(f, "{}", v),
            Attribute::Float(v) => write!(f, "{}", v),
            Attribute::Double(v) => write!(f, "{}", v),
            Attribute::String(v) => write!(f, "{:?}", v),
            Attribute::Blob(v) => write!(f, "<{} bytes>", v.len()),
            Attribute::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Attribute {
    fn from(value: bool) -> Self {
        Attribute::Boolean(value)
    }
}

impl From<i32> for Attribute {
    fn from(value: i32) -> Self {
        Attribute::Long(i64::from(value))
    }
}

impl From<i64> for Attribute {
    fn from(value: i64) -> Self {
        Attribute::Long(value)
    }
}

impl From<u32> for Attribute {
    fn from(value: u32) -> Self {
        Attribute::ULong(u64::from(value))
    }
}

impl From<u64> for Attribute {
    fn from(value: u64) -> Self {
        Attribute::ULong(value)
    }
}

impl From<f32> for Attribute {
    fn from(value: f32) -> Self {
        Attribute::Float(value)
    }
}

impl From<f64> for Attribute {
    fn from(value: f64) -> Self {
        Attribute::Double(value)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::String(value.to_string())
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Attribute::String(value)
    }
}

impl From<Vec<u8>> for Attribute {
    fn from(value: Vec<u8>) -> Self {
        Attribute::Blob(value)
    }
}

impl From<Vec<Attribute>> for Attribute {
    fn from(value: Vec<Attribute>) -> Self {
        Attribute::List(value)
    }
}
