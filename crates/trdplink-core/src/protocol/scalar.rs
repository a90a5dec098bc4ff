//! Scalar codec: one typed value per read or write.
//!
//! Raw values arrive from the front end as JSON (form inputs are strings as
//! often as numbers), so writing a scalar first coerces the raw value to the
//! wire type. The coercion rules are a behavioral contract inherited from
//! the bridge front end, not incidental: unparsable numerics become `0`,
//! booleans follow JSON truthiness.

use serde::Serialize;
use serde_json::Value;

use super::datatype::DataType;
use super::error::ProtocolError;
use super::reader::PacketReader;

/// Decoded scalar value for one signal entry.
///
/// Serializes untagged, so a decoded mapping renders as plain JSON values
/// (`42`, `true`, `23.5`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SignalValue {
    Int32(i32),
    Uint32(u32),
    Float32(f32),
    Bool(bool),
}

/// Read one scalar of `datatype`'s width at `offset`.
pub fn read_scalar(
    reader: &PacketReader<'_>,
    offset: usize,
    datatype: DataType,
) -> Result<SignalValue, ProtocolError> {
    let value = match datatype {
        DataType::Int32 => SignalValue::Int32(reader.read_i32_le(offset)?),
        DataType::Uint32 => SignalValue::Uint32(reader.read_u32_le(offset)?),
        DataType::Float32 => SignalValue::Float32(reader.read_f32_le(offset)?),
        DataType::Boolean => SignalValue::Bool(reader.read_u8(offset)? != 0),
    };
    Ok(value)
}

/// Coerce `raw` to `datatype` and append exactly `datatype.width()`
/// little-endian bytes. Never fails.
pub fn write_scalar(buf: &mut Vec<u8>, datatype: DataType, raw: &Value) {
    match datatype {
        DataType::Int32 => buf.extend_from_slice(&coerce_i32(raw).to_le_bytes()),
        DataType::Uint32 => buf.extend_from_slice(&coerce_u32(raw).to_le_bytes()),
        DataType::Float32 => buf.extend_from_slice(&coerce_f32(raw).to_le_bytes()),
        DataType::Boolean => buf.push(u8::from(coerce_bool(raw))),
    }
}

fn coerce_numeric(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Numbers truncate toward zero and saturate at the i32 bounds; decimal
/// strings parse the same way; anything else coerces to 0.
pub fn coerce_i32(raw: &Value) -> i32 {
    coerce_numeric(raw).map_or(0, |number| number as i32)
}

/// As [`coerce_i32`], with negative values coercing to 0.
pub fn coerce_u32(raw: &Value) -> u32 {
    coerce_numeric(raw).map_or(0, |number| number as u32)
}

/// Numbers and decimal strings narrow to f32; anything else coerces to 0.0.
pub fn coerce_f32(raw: &Value) -> f32 {
    coerce_numeric(raw).map_or(0.0, |number| number as f32)
}

/// JSON truthiness: `null` and `false` are false, numbers are `!= 0`,
/// strings are non-empty, arrays and objects are true.
pub fn coerce_bool(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
