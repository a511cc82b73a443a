//! Field codec: read one typed VkJSON field and write it to the store
//!
//! Every reader assumes the field exists with exactly the JSON type its
//! kind implies; anything else is a schema violation and aborts the pass.

use crate::error::{JsonKind, Result, TranslateError};
use crate::names::convert_name;
use crate::store::DeviceInfoStore;
use crate::types::{ArrayValue, Field, FieldKind, ResultValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Some producers already write 64-bit values as strings
static UINT64_STRING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[xX][0-9a-fA-F]+|[0-9]+)$").unwrap());

/// Encode a 64-bit value the way the store keeps it: `0x` plus lowercase hex.
pub fn format_hex(value: u64) -> String {
    format!("0x{:x}", value)
}

/// Parse a `0x`-prefixed hex or plain decimal string back into a u64.
pub fn parse_hex_u64(s: &str) -> Option<u64> {
    if !UINT64_STRING_REGEX.is_match(s) {
        return None;
    }
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16).ok(),
        None => s.parse().ok(),
    }
}

fn mismatch(name: &str, expected: JsonKind, found: Option<&Value>) -> TranslateError {
    TranslateError::schema(name, expected, JsonKind::of(found))
}

pub fn read_object<'a>(parent: &'a Map<String, Value>, name: &str) -> Result<&'a Map<String, Value>> {
    let value = parent.get(name);
    value
        .and_then(Value::as_object)
        .ok_or_else(|| mismatch(name, JsonKind::Object, value))
}

pub fn read_array<'a>(parent: &'a Map<String, Value>, name: &str) -> Result<&'a Vec<Value>> {
    let value = parent.get(name);
    value
        .and_then(Value::as_array)
        .ok_or_else(|| mismatch(name, JsonKind::Array, value))
}

pub fn read_str<'a>(parent: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
    let value = parent.get(name);
    value
        .and_then(Value::as_str)
        .ok_or_else(|| mismatch(name, JsonKind::String, value))
}

pub fn read_int(parent: &Map<String, Value>, name: &str) -> Result<i64> {
    int_value(parent.get(name), name)
}

pub fn read_double(parent: &Map<String, Value>, name: &str) -> Result<f64> {
    double_value(parent.get(name), name)
}

/// VkBool32 arrives as a number; anything nonzero is true.
pub fn read_bool(parent: &Map<String, Value>, name: &str) -> Result<bool> {
    let value = parent.get(name);
    match value {
        Some(Value::Number(n)) => Ok(match (n.as_i64(), n.as_u64()) {
            (Some(v), _) => v != 0,
            (None, Some(v)) => v != 0,
            (None, None) => n.as_f64().map_or(false, |v| v != 0.0),
        }),
        _ => Err(mismatch(name, JsonKind::Integer, value)),
    }
}

pub fn read_hex(parent: &Map<String, Value>, name: &str) -> Result<u64> {
    let value = parent.get(name);
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => parse_hex_u64(s),
        _ => None,
    };
    parsed.ok_or_else(|| mismatch(name, JsonKind::HexString, value))
}

fn int_value(value: Option<&Value>, name: &str) -> Result<i64> {
    value
        .and_then(Value::as_i64)
        .ok_or_else(|| mismatch(name, JsonKind::Integer, value))
}

fn double_value(value: Option<&Value>, name: &str) -> Result<f64> {
    value
        .and_then(Value::as_f64)
        .ok_or_else(|| mismatch(name, JsonKind::Number, value))
}

pub fn emit_int<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, name: &str) -> Result<()> {
    let value = read_int(parent, name)?;
    store.add_result(convert_name(name)?, ResultValue::Int(value))?;
    Ok(())
}

pub fn emit_bool<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, name: &str) -> Result<()> {
    let value = read_bool(parent, name)?;
    store.add_result(convert_name(name)?, ResultValue::Bool(value))?;
    Ok(())
}

pub fn emit_double<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, name: &str) -> Result<()> {
    let value = read_double(parent, name)?;
    store.add_result(convert_name(name)?, ResultValue::Double(value))?;
    Ok(())
}

pub fn emit_string<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, name: &str) -> Result<()> {
    let value = read_str(parent, name)?;
    store.add_result(convert_name(name)?, ResultValue::Str(value.to_string()))?;
    Ok(())
}

pub fn emit_hex<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, name: &str) -> Result<()> {
    let value = read_hex(parent, name)?;
    store.add_result(convert_name(name)?, ResultValue::Str(format_hex(value)))?;
    Ok(())
}

pub fn emit_int_array<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, name: &str) -> Result<()> {
    let values = read_array(parent, name)?
        .iter()
        .enumerate()
        .map(|(i, v)| int_value(Some(v), &format!("{}[{}]", name, i)))
        .collect::<Result<Vec<_>>>()?;
    store.add_array_result(convert_name(name)?, ArrayValue::Ints(values))?;
    Ok(())
}

pub fn emit_double_array<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, name: &str) -> Result<()> {
    let values = read_array(parent, name)?
        .iter()
        .enumerate()
        .map(|(i, v)| double_value(Some(v), &format!("{}[{}]", name, i)))
        .collect::<Result<Vec<_>>>()?;
    store.add_array_result(convert_name(name)?, ArrayValue::Doubles(values))?;
    Ok(())
}

pub fn emit_field<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, field: &Field) -> Result<()> {
    match field.kind {
        FieldKind::Int => emit_int(store, parent, field.name),
        FieldKind::Hex => emit_hex(store, parent, field.name),
        FieldKind::Bool => emit_bool(store, parent, field.name),
        FieldKind::Double => emit_double(store, parent, field.name),
        FieldKind::Str => emit_string(store, parent, field.name),
        FieldKind::IntArray => emit_int_array(store, parent, field.name),
        FieldKind::DoubleArray => emit_double_array(store, parent, field.name),
    }
}

pub fn emit_fields<S: DeviceInfoStore + ?Sized>(store: &mut S, parent: &Map<String, Value>, fields: &[Field]) -> Result<()> {
    for field in fields {
        emit_field(store, parent, field)?;
    }
    Ok(())
}

/// Reshape an array of `[tag, {properties}]` tuples into uniform groups.
///
/// Each tuple becomes one anonymous group holding the tag under `tag_name`
/// followed by `fields` read from the properties object, in source order.
pub fn emit_tagged_array<S: DeviceInfoStore + ?Sized>(
    store: &mut S,
    parent: &Map<String, Value>,
    source_name: &str,
    array_name: &str,
    tag_name: &str,
    fields: &[Field],
) -> Result<()> {
    let tuples = read_array(parent, source_name)?;
    store.start_array(array_name)?;
    for (idx, tuple) in tuples.iter().enumerate() {
        let element = format!("{}[{}]", source_name, idx);
        let (tag, properties) = match tuple.as_array().map(Vec::as_slice) {
            Some([tag, properties]) => (tag, properties),
            _ => return Err(mismatch(&element, JsonKind::Array, Some(tuple))),
        };
        let tag = int_value(Some(tag), &format!("{}[0]", element))?;
        let properties = properties
            .as_object()
            .ok_or_else(|| mismatch(&format!("{}[1]", element), JsonKind::Object, Some(properties)))?;

        store.start_group()?;
        store.add_result(tag_name, ResultValue::Int(tag))?;
        emit_fields(store, properties, fields).map_err(|e| e.within(element))?;
        store.end_group()?;
    }
    store.end_array()?;
    Ok(())
}
