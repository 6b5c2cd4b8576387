use crate::convert::error::{ConvertError, Result};
use crate::convert::value::{Value, chase};

/// Convert any value to a boolean.
///
/// Strings parse against the strict literal set (`1/t/T/TRUE/true/True` and
/// `0/f/F/FALSE/false/False`); numeric kinds are true iff nonzero (complex:
/// either component nonzero); booleans pass through.
pub fn to_bool(value: &Value) -> Result<bool> {
	match chase(value, "bool")? {
		Value::String(s) => parse_bool_text(s),
		Value::Int(i) => Ok(*i != 0),
		Value::Uint(u) => Ok(*u != 0),
		Value::Float(x) => Ok(*x != 0.0),
		Value::Complex(c) => Ok(c.re != 0.0 || c.im != 0.0),
		Value::Bool(b) => Ok(*b),
		other => Err(ConvertError::Unsupported {
			target: "bool",
			kind: other.kind(),
		}),
	}
}

fn parse_bool_text(text: &str) -> Result<bool> {
	match text {
		"1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
		"0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
		_ => Err(ConvertError::ParseBool { text: text.to_owned() }),
	}
}

/// Whether `value` converts to a boolean.
pub fn could_be_bool(value: &Value) -> bool {
	to_bool(value).is_ok()
}

/// Boolean conversion, panicking on failure.
pub fn expect_bool(value: &Value) -> bool {
	match to_bool(value) {
		Ok(b) => b,
		Err(err) => panic!("{err}"),
	}
}
