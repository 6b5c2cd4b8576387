use thiserror::Error;

use crate::convert::value::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors produced while coercing dynamic values.
#[derive(Debug, Error)]
pub enum ConvertError {
	/// Source was absent where a concrete value was required.
	#[error("cannot convert null to {target}")]
	Null {
		/// Target type of the attempted conversion.
		target: &'static str,
	},
	/// Source kind has no rule for the requested target.
	#[error("cannot convert {kind} to {target}: no conversion rule")]
	Unsupported {
		/// Target type of the attempted conversion.
		target: &'static str,
		/// Offending source kind.
		kind: Kind,
	},
	/// Text did not parse as a boolean literal.
	#[error("cannot parse {text:?} as bool")]
	ParseBool {
		/// Offending input text.
		text: String,
	},
	/// Text did not parse as a base-10 integer.
	#[error("cannot parse {text:?} as {target}: {source}")]
	ParseInt {
		/// Target type of the attempted conversion.
		target: &'static str,
		/// Offending input text.
		text: String,
		/// Host parser failure.
		source: std::num::ParseIntError,
	},
	/// Text did not parse as a floating-point number.
	#[error("cannot parse {text:?} as {target}: {source}")]
	ParseFloat {
		/// Target type of the attempted conversion.
		target: &'static str,
		/// Offending input text.
		text: String,
		/// Host parser failure.
		source: std::num::ParseFloatError,
	},
	/// Text did not parse as a complex literal.
	#[error("cannot parse {text:?} as complex128")]
	ParseComplex {
		/// Offending input text.
		text: String,
	},
	/// Negative source routed to an unsigned target.
	#[error("cannot convert negative {value} to {target}")]
	Negative {
		/// Target type of the attempted conversion.
		target: &'static str,
		/// Offending source value.
		value: f64,
	},
	/// Base64 decode failure on malformed input.
	#[error("cannot decode base64: {source}")]
	Base64 {
		/// Codec failure.
		source: base64::DecodeError,
	},
	/// Structured value could not be marshaled to JSON text.
	#[error("cannot marshal {kind} to JSON text: {source}")]
	Marshal {
		/// Source kind being marshaled.
		kind: Kind,
		/// Serializer failure.
		source: serde_json::Error,
	},
	/// JSON text could not be unmarshaled into the destination.
	#[error("cannot unmarshal into destination: {source}")]
	Unmarshal {
		/// Deserializer failure.
		source: serde_json::Error,
	},
	/// Indirection chain exceeded the defensive hop cap.
	#[error("pointer chain too deep (max={max_hops})")]
	PtrChainTooDeep {
		/// Maximum allowed dereference hops.
		max_hops: u32,
	},
	/// Text matched none of the supported timestamp layouts.
	#[error("cannot parse {text:?} as timestamp: unknown format")]
	ParseTimestamp {
		/// Offending input text.
		text: String,
	},
	/// Millisecond timestamp outside the representable range.
	#[error("timestamp {millis}ms is out of range")]
	TimestampOutOfRange {
		/// Offending millisecond count.
		millis: i64,
	},
}
