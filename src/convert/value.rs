use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::convert::complex::{Complex64, Complex128};
use crate::convert::error::{ConvertError, Result};

/// Maximum pointer dereference hops before a chain is assumed degenerate.
pub const MAX_PTR_HOPS: u32 = 32;

/// Runtime classification of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// Absent value.
	Null,
	/// Boolean.
	Bool,
	/// Signed integer.
	Int,
	/// Unsigned integer.
	Uint,
	/// Floating-point number.
	Float,
	/// Complex number.
	Complex,
	/// Text.
	String,
	/// Sequence of 8-bit unsigned elements.
	Bytes,
	/// Generic sequence.
	Array,
	/// String-keyed object.
	Map,
	/// Pointer or boxed wrapper around another value.
	Ptr,
	/// Value carrying its own text-rendering capability.
	Described,
	/// Error value; its message text is its rendering.
	Failure,
	/// Kind with no conversion rule, carrying its name.
	Other(&'static str),
}

impl Kind {
	/// Stable name used in error messages.
	pub fn as_str(self) -> &'static str {
		match self {
			Kind::Null => "null",
			Kind::Bool => "bool",
			Kind::Int => "int64",
			Kind::Uint => "uint64",
			Kind::Float => "float64",
			Kind::Complex => "complex128",
			Kind::String => "string",
			Kind::Bytes => "bytes",
			Kind::Array => "array",
			Kind::Map => "map",
			Kind::Ptr => "pointer",
			Kind::Described => "described",
			Kind::Failure => "error",
			Kind::Other(name) => name,
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Carrier for a value that opted into rendering itself as text.
#[derive(Clone)]
pub struct Described(Arc<dyn fmt::Display + Send + Sync>);

impl Described {
	/// Wrap any displayable value.
	pub fn new(value: impl fmt::Display + Send + Sync + 'static) -> Self {
		Self(Arc::new(value))
	}

	/// Render the wrapped value verbatim.
	pub fn render(&self) -> String {
		self.0.to_string()
	}
}

impl fmt::Debug for Described {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<described {}>", self.0)
	}
}

impl PartialEq for Described {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

/// Carrier for an error value; conversions use its message text.
#[derive(Clone)]
pub struct Failure(Arc<dyn StdError + Send + Sync>);

impl Failure {
	/// Wrap any error value.
	pub fn new(err: impl StdError + Send + Sync + 'static) -> Self {
		Self(Arc::new(err))
	}

	/// Message text of the wrapped error.
	pub fn render(&self) -> String {
		self.0.to_string()
	}
}

impl fmt::Debug for Failure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<failure {}>", self.0)
	}
}

impl PartialEq for Failure {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

/// Dynamic value at a coercion boundary.
///
/// Source widths are folded at ingestion: every signed integer widens to
/// [`Value::Int`], every unsigned to [`Value::Uint`], and both float widths
/// to [`Value::Float`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value.
	Null,
	/// Boolean.
	Bool(bool),
	/// Signed integer, widened.
	Int(i64),
	/// Unsigned integer, widened.
	Uint(u64),
	/// Floating-point number, widened.
	Float(f64),
	/// Complex number as two 64-bit components.
	Complex(Complex128),
	/// Text.
	String(String),
	/// Raw byte sequence.
	Bytes(Vec<u8>),
	/// Generic sequence of dynamic values.
	Array(Vec<Value>),
	/// String-keyed object.
	Map(BTreeMap<String, Value>),
	/// Indirection: empty, or exactly one wrapped value.
	Ptr(Option<Box<Value>>),
	/// Value carrying its own text-rendering capability.
	Described(Described),
	/// Error value.
	Failure(Failure),
	/// Kind with no conversion rule.
	Other(&'static str),
}

impl Value {
	/// Runtime kind of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Null => Kind::Null,
			Value::Bool(_) => Kind::Bool,
			Value::Int(_) => Kind::Int,
			Value::Uint(_) => Kind::Uint,
			Value::Float(_) => Kind::Float,
			Value::Complex(_) => Kind::Complex,
			Value::String(_) => Kind::String,
			Value::Bytes(_) => Kind::Bytes,
			Value::Array(_) => Kind::Array,
			Value::Map(_) => Kind::Map,
			Value::Ptr(_) => Kind::Ptr,
			Value::Described(_) => Kind::Described,
			Value::Failure(_) => Kind::Failure,
			Value::Other(name) => Kind::Other(*name),
		}
	}

	/// Whether this value is absent (null or an empty pointer).
	pub fn is_absent(&self) -> bool {
		matches!(self, Value::Null | Value::Ptr(None))
	}

	/// Wrap a value implementing [`fmt::Display`]; text conversion uses its rendering verbatim.
	pub fn described(value: impl fmt::Display + Send + Sync + 'static) -> Self {
		Value::Described(Described::new(value))
	}

	/// Wrap an error value; text conversion uses its message text.
	pub fn failure(err: impl StdError + Send + Sync + 'static) -> Self {
		Value::Failure(Failure::new(err))
	}

	/// Value of a kind the engine has no rule for.
	pub fn other(kind_name: &'static str) -> Self {
		Value::Other(kind_name)
	}

	/// Non-empty indirection wrapping `value`.
	pub fn pointer(value: impl Into<Value>) -> Self {
		Value::Ptr(Some(Box::new(value.into())))
	}

	/// Empty indirection.
	pub fn null_pointer() -> Self {
		Value::Ptr(None)
	}
}

/// Fresh single-owner handle to `value`.
pub fn to_pointer<T>(value: T) -> Box<T> {
	Box::new(value)
}

/// Unwrap indirections until a concrete value is reached.
///
/// Absent values (null, empty pointer) fail for every target; chains longer
/// than [`MAX_PTR_HOPS`] are rejected rather than followed.
pub(crate) fn chase<'a>(value: &'a Value, target: &'static str) -> Result<&'a Value> {
	let mut current = value;
	let mut hops = 0_u32;
	loop {
		match current {
			Value::Null | Value::Ptr(None) => return Err(ConvertError::Null { target }),
			Value::Ptr(Some(inner)) => {
				hops += 1;
				if hops > MAX_PTR_HOPS {
					return Err(ConvertError::PtrChainTooDeep { max_hops: MAX_PTR_HOPS });
				}
				current = inner;
			}
			concrete => return Ok(concrete),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i8> for Value {
	fn from(value: i8) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<i16> for Value {
	fn from(value: i16) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<isize> for Value {
	fn from(value: isize) -> Self {
		Value::Int(value as i64)
	}
}

impl From<u8> for Value {
	fn from(value: u8) -> Self {
		Value::Uint(u64::from(value))
	}
}

impl From<u16> for Value {
	fn from(value: u16) -> Self {
		Value::Uint(u64::from(value))
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::Uint(u64::from(value))
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Value::Uint(value)
	}
}

impl From<usize> for Value {
	fn from(value: usize) -> Self {
		Value::Uint(value as u64)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::Float(f64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<Complex128> for Value {
	fn from(value: Complex128) -> Self {
		Value::Complex(value)
	}
}

impl From<Complex64> for Value {
	fn from(value: Complex64) -> Self {
		Value::Complex(value.widen())
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<&[u8]> for Value {
	fn from(value: &[u8]) -> Self {
		Value::Bytes(value.to_vec())
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		Value::Bytes(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Value::Array(value)
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(value: BTreeMap<String, Value>) -> Self {
		Value::Map(value)
	}
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value>,
{
	fn from(value: Option<T>) -> Self {
		match value {
			Some(inner) => Value::Ptr(Some(Box::new(inner.into()))),
			None => Value::Ptr(None),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					Value::Int(i)
				} else if let Some(u) = n.as_u64() {
					Value::Uint(u)
				} else {
					Value::Float(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(s) => Value::String(s),
			serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(entries) => Value::Map(entries.into_iter().map(|(key, item)| (key, Value::from(item))).collect()),
		}
	}
}

impl Serialize for Value {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Value::Null | Value::Ptr(None) => serializer.serialize_unit(),
			Value::Bool(b) => serializer.serialize_bool(*b),
			Value::Int(i) => serializer.serialize_i64(*i),
			Value::Uint(u) => serializer.serialize_u64(*u),
			Value::Float(x) => serializer.serialize_f64(*x),
			Value::String(s) => serializer.serialize_str(s),
			Value::Bytes(b) => serializer.serialize_str(&STANDARD.encode(b)),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Map(entries) => {
				let mut map = serializer.serialize_map(Some(entries.len()))?;
				for (key, item) in entries {
					map.serialize_entry(key, item)?;
				}
				map.end()
			}
			Value::Ptr(Some(inner)) => inner.serialize(serializer),
			Value::Complex(_) => Err(S::Error::custom("complex128 has no JSON representation")),
			Value::Described(d) => serializer.serialize_str(&d.render()),
			Value::Failure(e) => serializer.serialize_str(&e.render()),
			Value::Other(name) => Err(S::Error::custom(format_args!("{name} has no JSON representation"))),
		}
	}
}
