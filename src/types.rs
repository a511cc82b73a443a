use serde::{Deserialize, Serialize};

use crate::version::VK_API_VERSION_1_1;

/// How a single source field is read and what the store receives for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Integer of up to 64 signed bits, stored as an integer
    Int,
    /// uint64 or VkDeviceSize, stored as a `"0x..."` string
    Hex,
    /// VkBool32 encoded as a JSON number, stored as a boolean
    Bool,
    /// Floating point, stored as-is
    Double,
    /// String, stored as-is
    Str,
    /// Fixed-length integer array
    IntArray,
    /// Fixed-length floating point array
    DoubleArray,
}

/// One leaf of the source schema: the VkJSON name and how to read it.
///
/// The destination name is not stored here; it always comes from the
/// name table so both spellings stay searchable in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Field { name, kind }
    }

    pub const fn int(name: &'static str) -> Self {
        Field::new(name, FieldKind::Int)
    }

    pub const fn hex(name: &'static str) -> Self {
        Field::new(name, FieldKind::Hex)
    }

    pub const fn bool(name: &'static str) -> Self {
        Field::new(name, FieldKind::Bool)
    }

    pub const fn double(name: &'static str) -> Self {
        Field::new(name, FieldKind::Double)
    }

    pub const fn string(name: &'static str) -> Self {
        Field::new(name, FieldKind::Str)
    }

    pub const fn int_array(name: &'static str) -> Self {
        Field::new(name, FieldKind::IntArray)
    }

    pub const fn double_array(name: &'static str) -> Self {
        Field::new(name, FieldKind::DoubleArray)
    }
}

/// A scalar value written with `add_result`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Int(i64),
    Double(f64),
    Bool(bool),
    Str(String),
}

impl From<i64> for ResultValue {
    fn from(v: i64) -> Self {
        ResultValue::Int(v)
    }
}

impl From<f64> for ResultValue {
    fn from(v: f64) -> Self {
        ResultValue::Double(v)
    }
}

impl From<bool> for ResultValue {
    fn from(v: bool) -> Self {
        ResultValue::Bool(v)
    }
}

impl From<String> for ResultValue {
    fn from(v: String) -> Self {
        ResultValue::Str(v)
    }
}

impl From<&str> for ResultValue {
    fn from(v: &str) -> Self {
        ResultValue::Str(v.to_string())
    }
}

/// An array value written with `add_array_result`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayValue {
    Ints(Vec<i64>),
    Doubles(Vec<f64>),
}

impl ArrayValue {
    pub fn len(&self) -> usize {
        match self {
            ArrayValue::Ints(v) => v.len(),
            ArrayValue::Doubles(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Configuration for a translation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateConfig {
    /// Devices reporting an apiVersion at or above this also carry the
    /// Vulkan 1.1 property and feature structures
    pub version_gate: u32,

    /// Field that receives the format enum when formats are flattened
    pub format_tag: String,

    /// Field that receives the handle type when external fence and
    /// semaphore properties are flattened
    pub handle_type_tag: String,

    /// Destination array for per-device format properties
    pub formats_array_name: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        TranslateConfig {
            version_gate: VK_API_VERSION_1_1,
            format_tag: String::from("id"),
            handle_type_tag: String::from("handle_type"),
            // "formats" held an older layout in existing reports
            formats_array_name: String::from("supported_formats"),
        }
    }
}
