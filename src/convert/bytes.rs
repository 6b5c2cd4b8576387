use std::io::Cursor;

use crate::convert::error::Result;
use crate::convert::string::to_string;
use crate::convert::value::{Value, chase};

/// Convert any value to its byte representation.
///
/// Byte projection of [`to_string`]; inherits every failure mode of the text
/// conversion, including the rejection of absent values. Byte sources pass
/// through unchanged, so arbitrary (non-UTF-8) sequences survive the trip.
pub fn to_bytes(value: &Value) -> Result<Vec<u8>> {
	if let Value::Bytes(b) = chase(value, "string")? {
		return Ok(b.clone());
	}
	Ok(to_string(value)?.into_bytes())
}

/// Whether `value` has a byte representation.
pub fn could_be_bytes(value: &Value) -> bool {
	to_bytes(value).is_ok()
}

/// Byte conversion, panicking on failure.
pub fn expect_bytes(value: &Value) -> Vec<u8> {
	match to_bytes(value) {
		Ok(bytes) => bytes,
		Err(err) => panic!("{err}"),
	}
}

/// Wrap the byte conversion in a growable, seekable buffer.
pub fn to_buffer(value: &Value) -> Result<Cursor<Vec<u8>>> {
	Ok(Cursor::new(to_bytes(value)?))
}

/// Buffer conversion, panicking on failure.
pub fn expect_buffer(value: &Value) -> Cursor<Vec<u8>> {
	match to_buffer(value) {
		Ok(buffer) => buffer,
		Err(err) => panic!("{err}"),
	}
}

#[cfg(test)]
mod tests {
	use std::io::Read as _;

	use crate::convert::error::ConvertError;
	use crate::convert::value::Value;
	use crate::convert::{to_buffer, to_bytes};

	#[test]
	fn bytes_are_the_utf8_text_projection() {
		assert_eq!(to_bytes(&Value::from("test")).expect("string"), b"test");
		assert_eq!(to_bytes(&Value::from(1234)).expect("int"), b"1234");
		assert_eq!(to_bytes(&Value::from(true)).expect("bool"), b"true");
	}

	#[test]
	fn absent_values_are_rejected() {
		let err = to_bytes(&Value::Null).expect_err("null");
		assert!(matches!(err, ConvertError::Null { target: "string" }));
	}

	#[test]
	fn buffer_reads_back_the_bytes() {
		let mut buffer = to_buffer(&Value::from("abc")).expect("buffer");
		let mut read = Vec::new();
		buffer.read_to_end(&mut read).expect("read");
		assert_eq!(read, b"abc");
	}
}
