use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::convert::bytes::to_bytes;
use crate::convert::error::{ConvertError, Result};
use crate::convert::string::to_string;
use crate::convert::value::Value;

/// Encode the byte representation of any value as standard base64 text.
pub fn to_base64(value: &Value) -> Result<String> {
	Ok(STANDARD.encode(to_bytes(value)?))
}

/// Decode the text representation of any value from standard base64.
pub fn from_base64(value: &Value) -> Result<Vec<u8>> {
	let text = to_string(value)?;
	STANDARD.decode(text.as_bytes()).map_err(|source| ConvertError::Base64 { source })
}

/// Decode from base64 and reinterpret the decoded bytes as text.
pub fn from_base64_string(value: &Value) -> Result<String> {
	Ok(String::from_utf8_lossy(&from_base64(value)?).into_owned())
}

/// Whether `value` passes through the base64 encoder.
pub fn could_be_base64(value: &Value) -> bool {
	to_base64(value).is_ok()
}

/// Base64 encoding, panicking on failure.
pub fn expect_base64(value: &Value) -> String {
	match to_base64(value) {
		Ok(text) => text,
		Err(err) => panic!("{err}"),
	}
}

/// Base64 decoding, panicking on failure.
pub fn expect_from_base64(value: &Value) -> Vec<u8> {
	match from_base64(value) {
		Ok(bytes) => bytes,
		Err(err) => panic!("{err}"),
	}
}

/// Base64 decoding to text, panicking on failure.
pub fn expect_from_base64_string(value: &Value) -> String {
	match from_base64_string(value) {
		Ok(text) => text,
		Err(err) => panic!("{err}"),
	}
}
