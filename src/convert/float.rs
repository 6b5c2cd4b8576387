use crate::convert::error::{ConvertError, Result};
use crate::convert::value::{Value, chase};

/// Convert any value to the canonical double-precision float.
///
/// Strings and byte sequences parse as decimal or scientific text; integer
/// kinds widen; complex numbers keep their real part only; booleans map to
/// 1.0 and 0.0.
pub fn to_float64(value: &Value) -> Result<f64> {
	match chase(value, "float64")? {
		Value::String(s) => parse_float_text(s),
		Value::Bytes(b) => parse_float_text(&String::from_utf8_lossy(b)),
		Value::Int(i) => Ok(*i as f64),
		Value::Uint(u) => Ok(*u as f64),
		Value::Float(x) => Ok(*x),
		Value::Complex(c) => Ok(c.re),
		Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
		other => Err(ConvertError::Unsupported {
			target: "float64",
			kind: other.kind(),
		}),
	}
}

fn parse_float_text(text: &str) -> Result<f64> {
	text.parse::<f64>().map_err(|source| ConvertError::ParseFloat {
		target: "float64",
		text: text.to_owned(),
		source,
	})
}

/// Narrow the canonical conversion with standard float rounding.
pub fn to_float32(value: &Value) -> Result<f32> {
	Ok(to_float64(value)? as f32)
}

/// Whether `value` converts to a float.
pub fn could_be_float(value: &Value) -> bool {
	to_float64(value).is_ok()
}

/// Double-precision conversion, panicking on failure.
pub fn expect_float64(value: &Value) -> f64 {
	match to_float64(value) {
		Ok(x) => x,
		Err(err) => panic!("{err}"),
	}
}

/// Single-precision conversion, panicking on failure.
pub fn expect_float32(value: &Value) -> f32 {
	match to_float32(value) {
		Ok(x) => x,
		Err(err) => panic!("{err}"),
	}
}
