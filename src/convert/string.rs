use crate::convert::error::{ConvertError, Result};
use crate::convert::value::{Value, chase};

/// Convert any value to its text representation.
///
/// Dispatch order: described and error values render themselves verbatim,
/// text passes through, numbers and booleans format in their literal syntax,
/// byte sequences reinterpret as UTF-8 text, and sequences or maps marshal to
/// JSON. Indirections are followed first; absent values are rejected.
pub fn to_string(value: &Value) -> Result<String> {
	match chase(value, "string")? {
		Value::Described(d) => Ok(d.render()),
		Value::Failure(e) => Ok(e.render()),
		Value::String(s) => Ok(s.clone()),
		Value::Int(i) => Ok(i.to_string()),
		Value::Uint(u) => Ok(u.to_string()),
		Value::Float(x) => Ok(x.to_string()),
		Value::Complex(c) => Ok(c.to_string()),
		Value::Bool(b) => Ok(b.to_string()),
		Value::Bytes(b) => Ok(String::from_utf8_lossy(b).into_owned()),
		structured @ (Value::Array(_) | Value::Map(_)) => marshal(structured),
		other => Err(ConvertError::Unsupported {
			target: "string",
			kind: other.kind(),
		}),
	}
}

fn marshal(value: &Value) -> Result<String> {
	serde_json::to_string(value).map_err(|source| ConvertError::Marshal {
		kind: value.kind(),
		source,
	})
}

/// Convert to text, trim the ends, and collapse internal whitespace runs to one space.
pub fn to_compact_string(value: &Value) -> Result<String> {
	let text = to_string(value)?;
	Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Whether `value` has a text representation.
pub fn could_be_string(value: &Value) -> bool {
	to_string(value).is_ok()
}

/// Text conversion, panicking on failure.
pub fn expect_string(value: &Value) -> String {
	match to_string(value) {
		Ok(text) => text,
		Err(err) => panic!("{err}"),
	}
}

/// Compact text conversion, panicking on failure.
pub fn expect_compact_string(value: &Value) -> String {
	match to_compact_string(value) {
		Ok(text) => text,
		Err(err) => panic!("{err}"),
	}
}
