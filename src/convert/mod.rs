mod base64;
mod boolean;
mod bytes;
mod complex;
mod dest;
mod error;
mod float;
mod int;
mod string;
mod timestamp;
mod uint;
mod value;

/// Base64 encode and decode conversions.
pub use self::base64::{could_be_base64, expect_base64, expect_from_base64, expect_from_base64_string, from_base64, from_base64_string, to_base64};
/// Boolean conversion.
pub use boolean::{could_be_bool, expect_bool, to_bool};
/// Byte-sequence and buffer conversions.
pub use bytes::{could_be_bytes, expect_buffer, expect_bytes, to_buffer, to_bytes};
/// Complex number types and conversions.
pub use complex::{Complex, Complex64, Complex128, could_be_complex, expect_complex64, expect_complex128, to_complex64, to_complex128};
/// Destination coercion trait and entry points.
pub use dest::{Destination, Structured, expect_dest, to_dest};
/// Error and result aliases.
pub use error::{ConvertError, Result};
/// Float conversions.
pub use float::{could_be_float, expect_float32, expect_float64, to_float32, to_float64};
/// Signed integer conversions.
pub use int::{could_be_int, expect_int, expect_int8, expect_int16, expect_int32, expect_int64, to_int, to_int8, to_int16, to_int32, to_int64};
/// Text conversions.
pub use string::{could_be_string, expect_compact_string, expect_string, to_compact_string, to_string};
/// Timestamp conversions.
pub use timestamp::{could_be_datetime, expect_date, expect_datetime, to_date, to_datetime};
/// Unsigned integer conversions.
pub use uint::{could_be_uint, expect_uint, expect_uint8, expect_uint16, expect_uint32, expect_uint64, to_uint, to_uint8, to_uint16, to_uint32, to_uint64};
/// Dynamic value types and helpers.
pub use value::{Described, Failure, Kind, MAX_PTR_HOPS, Value, to_pointer};
