use serde::de::DeserializeOwned;

use crate::convert::boolean::to_bool;
use crate::convert::bytes::to_bytes;
use crate::convert::complex::{Complex64, Complex128, to_complex64, to_complex128};
use crate::convert::error::{ConvertError, Result};
use crate::convert::float::{to_float32, to_float64};
use crate::convert::int::{to_int, to_int8, to_int16, to_int32};
use crate::convert::string::to_string;
use crate::convert::uint::{to_uint, to_uint8, to_uint16, to_uint32};
use crate::convert::value::Value;

/// A typed location the engine can coerce a dynamic value into.
///
/// Implementations dispatch on the destination's declared type: scalar
/// targets route through their family's canonical conversion and narrow to
/// the exact width, [`Value`] accepts the source as-is, and [`Structured`]
/// routes struct, map, and sequence targets through the JSON unmarshal path.
pub trait Destination {
	/// Coerce `value` into this location.
	fn fill(&mut self, value: &Value) -> Result<()>;
}

/// Coerce a dynamic value into a pre-typed destination.
///
/// An absent source (null or empty pointer) is rejected for every
/// destination, including the fully dynamic one.
pub fn to_dest<D>(value: &Value, dest: &mut D) -> Result<()>
where
	D: Destination + ?Sized,
{
	if value.is_absent() {
		return Err(ConvertError::Null { target: "destination" });
	}
	dest.fill(value)
}

/// Destination coercion, panicking on failure.
pub fn expect_dest<D>(value: &Value, dest: &mut D)
where
	D: Destination + ?Sized,
{
	if let Err(err) = to_dest(value, dest) {
		panic!("{err}");
	}
}

/// Adapter routing a structured destination (struct, map, sequence) through
/// byte conversion and JSON unmarshal.
pub struct Structured<'a, T>(pub &'a mut T);

impl<T> Destination for Structured<'_, T>
where
	T: DeserializeOwned,
{
	fn fill(&mut self, value: &Value) -> Result<()> {
		let bytes = to_bytes(value)?;
		*self.0 = serde_json::from_slice(&bytes).map_err(|source| ConvertError::Unmarshal { source })?;
		Ok(())
	}
}

impl Destination for String {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_string(value)?;
		Ok(())
	}
}

impl Destination for bool {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_bool(value)?;
		Ok(())
	}
}

impl Destination for i8 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_int8(value)?;
		Ok(())
	}
}

impl Destination for i16 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_int16(value)?;
		Ok(())
	}
}

impl Destination for i32 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_int32(value)?;
		Ok(())
	}
}

impl Destination for i64 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_int(value)?;
		Ok(())
	}
}

impl Destination for isize {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_int(value)? as isize;
		Ok(())
	}
}

impl Destination for u8 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_uint8(value)?;
		Ok(())
	}
}

impl Destination for u16 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_uint16(value)?;
		Ok(())
	}
}

impl Destination for u32 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_uint32(value)?;
		Ok(())
	}
}

impl Destination for u64 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_uint(value)?;
		Ok(())
	}
}

impl Destination for usize {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_uint(value)? as usize;
		Ok(())
	}
}

impl Destination for f32 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_float32(value)?;
		Ok(())
	}
}

impl Destination for f64 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_float64(value)?;
		Ok(())
	}
}

impl Destination for Complex128 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_complex128(value)?;
		Ok(())
	}
}

impl Destination for Complex64 {
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = to_complex64(value)?;
		Ok(())
	}
}

impl Destination for Value {
	// Fully dynamic destination: the source is assigned as-is.
	fn fill(&mut self, value: &Value) -> Result<()> {
		*self = value.clone();
		Ok(())
	}
}

#[cfg(test)]
mod tests;
