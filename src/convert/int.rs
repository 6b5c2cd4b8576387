use crate::convert::error::{ConvertError, Result};
use crate::convert::value::{Value, chase};

/// Convert any value to the canonical 64-bit signed integer.
///
/// Strings must be base-10 integer literals (fractional text fails); floats
/// truncate toward zero; unsigned sources reinterpret with silent wrap;
/// booleans map to 1 and 0; complex numbers contribute their real part only.
pub fn to_int(value: &Value) -> Result<i64> {
	match chase(value, "int64")? {
		Value::String(s) => parse_int_text(s),
		Value::Int(i) => Ok(*i),
		Value::Uint(u) => Ok(*u as i64),
		Value::Float(x) => Ok(*x as i64),
		Value::Complex(c) => Ok(c.re as i64),
		Value::Bool(b) => Ok(i64::from(*b)),
		other => Err(ConvertError::Unsupported {
			target: "int64",
			kind: other.kind(),
		}),
	}
}

fn parse_int_text(text: &str) -> Result<i64> {
	text.parse::<i64>().map_err(|source| ConvertError::ParseInt {
		target: "int64",
		text: text.to_owned(),
		source,
	})
}

/// Narrow the canonical conversion to 8 bits with truncating wrap.
pub fn to_int8(value: &Value) -> Result<i8> {
	Ok(to_int(value)? as i8)
}

/// Narrow the canonical conversion to 16 bits with truncating wrap.
pub fn to_int16(value: &Value) -> Result<i16> {
	Ok(to_int(value)? as i16)
}

/// Narrow the canonical conversion to 32 bits with truncating wrap.
pub fn to_int32(value: &Value) -> Result<i32> {
	Ok(to_int(value)? as i32)
}

/// 64-bit form of the canonical conversion.
pub fn to_int64(value: &Value) -> Result<i64> {
	to_int(value)
}

/// Whether `value` converts to a signed integer.
pub fn could_be_int(value: &Value) -> bool {
	to_int(value).is_ok()
}

/// Canonical signed conversion, panicking on failure.
pub fn expect_int(value: &Value) -> i64 {
	match to_int(value) {
		Ok(i) => i,
		Err(err) => panic!("{err}"),
	}
}

/// 8-bit signed conversion, panicking on failure.
pub fn expect_int8(value: &Value) -> i8 {
	match to_int8(value) {
		Ok(i) => i,
		Err(err) => panic!("{err}"),
	}
}

/// 16-bit signed conversion, panicking on failure.
pub fn expect_int16(value: &Value) -> i16 {
	match to_int16(value) {
		Ok(i) => i,
		Err(err) => panic!("{err}"),
	}
}

/// 32-bit signed conversion, panicking on failure.
pub fn expect_int32(value: &Value) -> i32 {
	match to_int32(value) {
		Ok(i) => i,
		Err(err) => panic!("{err}"),
	}
}

/// 64-bit signed conversion, panicking on failure.
pub fn expect_int64(value: &Value) -> i64 {
	match to_int64(value) {
		Ok(i) => i,
		Err(err) => panic!("{err}"),
	}
}
