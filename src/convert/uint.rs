use crate::convert::error::{ConvertError, Result};
use crate::convert::value::{Value, chase};

/// Convert any value to the canonical 64-bit unsigned integer.
///
/// Mirrors the signed conversion, except every negative source (negative
/// integer, negative float, negative real part, or text parsing negative)
/// fails instead of wrapping. Byte sequences are reinterpreted as text and
/// re-parsed.
pub fn to_uint(value: &Value) -> Result<u64> {
	match chase(value, "uint64")? {
		Value::String(s) => parse_uint_text(s),
		Value::Bytes(b) => parse_uint_text(&String::from_utf8_lossy(b)),
		Value::Int(i) => {
			if *i < 0 {
				return Err(negative(*i as f64));
			}
			Ok(*i as u64)
		}
		Value::Uint(u) => Ok(*u),
		Value::Float(x) => {
			if *x < 0.0 {
				return Err(negative(*x));
			}
			Ok(*x as u64)
		}
		Value::Complex(c) => {
			if c.re < 0.0 {
				return Err(negative(c.re));
			}
			Ok(c.re as u64)
		}
		Value::Bool(b) => Ok(u64::from(*b)),
		other => Err(ConvertError::Unsupported {
			target: "uint64",
			kind: other.kind(),
		}),
	}
}

fn negative(value: f64) -> ConvertError {
	ConvertError::Negative {
		target: "uint64",
		value,
	}
}

// The signed parse keeps negative literals distinguishable from malformed text.
fn parse_uint_text(text: &str) -> Result<u64> {
	let parsed = text.parse::<i64>().map_err(|source| ConvertError::ParseInt {
		target: "uint64",
		text: text.to_owned(),
		source,
	})?;
	if parsed < 0 {
		return Err(negative(parsed as f64));
	}
	Ok(parsed as u64)
}

/// Narrow the canonical conversion to 8 bits, modulo 2^8.
pub fn to_uint8(value: &Value) -> Result<u8> {
	Ok(to_uint(value)? as u8)
}

/// Narrow the canonical conversion to 16 bits, modulo 2^16.
pub fn to_uint16(value: &Value) -> Result<u16> {
	Ok(to_uint(value)? as u16)
}

/// Narrow the canonical conversion to 32 bits, modulo 2^32.
pub fn to_uint32(value: &Value) -> Result<u32> {
	Ok(to_uint(value)? as u32)
}

/// 64-bit form of the canonical conversion.
pub fn to_uint64(value: &Value) -> Result<u64> {
	to_uint(value)
}

/// Whether `value` converts to an unsigned integer.
pub fn could_be_uint(value: &Value) -> bool {
	to_uint(value).is_ok()
}

/// Canonical unsigned conversion, panicking on failure.
pub fn expect_uint(value: &Value) -> u64 {
	match to_uint(value) {
		Ok(u) => u,
		Err(err) => panic!("{err}"),
	}
}

/// 8-bit unsigned conversion, panicking on failure.
pub fn expect_uint8(value: &Value) -> u8 {
	match to_uint8(value) {
		Ok(u) => u,
		Err(err) => panic!("{err}"),
	}
}

/// 16-bit unsigned conversion, panicking on failure.
pub fn expect_uint16(value: &Value) -> u16 {
	match to_uint16(value) {
		Ok(u) => u,
		Err(err) => panic!("{err}"),
	}
}

/// 32-bit unsigned conversion, panicking on failure.
pub fn expect_uint32(value: &Value) -> u32 {
	match to_uint32(value) {
		Ok(u) => u,
		Err(err) => panic!("{err}"),
	}
}

/// 64-bit unsigned conversion, panicking on failure.
pub fn expect_uint64(value: &Value) -> u64 {
	match to_uint64(value) {
		Ok(u) => u,
		Err(err) => panic!("{err}"),
	}
}

#[cfg(test)]
mod tests {
	use crate::convert::complex::Complex128;
	use crate::convert::error::ConvertError;
	use crate::convert::value::Value;
	use crate::convert::{to_uint, to_uint8};

	#[test]
	fn negative_sources_fail_instead_of_wrapping() {
		for source in [Value::from(-1), Value::from(-1.5), Value::from("-1"), Value::from(Complex128::new(-2.0, 0.0))] {
			let err = to_uint(&source).expect_err("negative source");
			assert!(matches!(err, ConvertError::Negative { target: "uint64", .. }));
		}
	}

	#[test]
	fn bytes_are_reparsed_as_text() {
		assert_eq!(to_uint(&Value::from(b"1234".as_slice())).expect("byte text"), 1234);
	}

	#[test]
	fn narrowing_is_modulo() {
		assert_eq!(to_uint8(&Value::from("1234")).expect("wrap to u8"), 210);
	}

	#[test]
	fn booleans_map_to_one_and_zero() {
		assert_eq!(to_uint(&Value::from(true)).expect("true"), 1);
		assert_eq!(to_uint(&Value::from(false)).expect("false"), 0);
	}
}
