use std::fmt;
use std::str::FromStr;

use crate::convert::error::{ConvertError, Result};
use crate::convert::value::{Value, chase};

/// Complex number over any component type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
	/// Real component.
	pub re: T,
	/// Imaginary component.
	pub im: T,
}

/// Complex number with 64-bit components.
pub type Complex128 = Complex<f64>;

/// Complex number with 32-bit components.
pub type Complex64 = Complex<f32>;

impl<T> Complex<T> {
	/// Build from components.
	pub fn new(re: T, im: T) -> Self {
		Self { re, im }
	}
}

impl Complex128 {
	/// Narrow each component independently.
	pub fn narrow(self) -> Complex64 {
		Complex64::new(self.re as f32, self.im as f32)
	}
}

impl Complex64 {
	/// Widen each component exactly.
	pub fn widen(self) -> Complex128 {
		Complex128::new(f64::from(self.re), f64::from(self.im))
	}
}

impl fmt::Display for Complex128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.im.is_sign_negative() {
			write!(f, "({}-{}i)", self.re, -self.im)
		} else {
			write!(f, "({}+{}i)", self.re, self.im)
		}
	}
}

impl fmt::Display for Complex64 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.widen().fmt(f)
	}
}

impl FromStr for Complex128 {
	type Err = ConvertError;

	fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
		parse_complex_text(text).ok_or_else(|| ConvertError::ParseComplex { text: text.to_owned() })
	}
}

fn parse_complex_text(text: &str) -> Option<Complex128> {
	let inner = match text.strip_prefix('(') {
		Some(rest) => rest.strip_suffix(')')?,
		None => text,
	};

	let Some(body) = inner.strip_suffix('i') else {
		// Purely real literal.
		return inner.parse::<f64>().ok().map(|re| Complex128::new(re, 0.0));
	};

	match split_imaginary(body) {
		Some((re_text, im_text)) => {
			let re = re_text.parse::<f64>().ok()?;
			let im = parse_component(im_text)?;
			Some(Complex128::new(re, im))
		}
		None => parse_component(body).map(|im| Complex128::new(0.0, im)),
	}
}

// Split "a+b"/"a-b" at the sign starting the imaginary component, skipping
// exponent signs and a leading sign on the real component.
fn split_imaginary(body: &str) -> Option<(&str, &str)> {
	for (idx, ch) in body.char_indices().rev() {
		if idx == 0 || (ch != '+' && ch != '-') {
			continue;
		}
		let prev = body.as_bytes()[idx - 1];
		if prev == b'e' || prev == b'E' {
			continue;
		}
		return Some((&body[..idx], &body[idx..]));
	}
	None
}

fn parse_component(text: &str) -> Option<f64> {
	if text.is_empty() || text == "+" || text == "-" {
		return None;
	}
	text.parse::<f64>().ok()
}

/// Convert any value to the canonical 128-bit complex number.
///
/// Strings parse the `a+bi` literal form (optionally parenthesized); integer
/// and float kinds become the real component with zero imaginary part;
/// booleans map to `(1+0i)` and `(0+0i)`.
pub fn to_complex128(value: &Value) -> Result<Complex128> {
	match chase(value, "complex128")? {
		Value::String(s) => s.parse::<Complex128>(),
		Value::Int(i) => Ok(Complex128::new(*i as f64, 0.0)),
		Value::Uint(u) => Ok(Complex128::new(*u as f64, 0.0)),
		Value::Float(x) => Ok(Complex128::new(*x, 0.0)),
		Value::Complex(c) => Ok(*c),
		Value::Bool(b) => Ok(Complex128::new(if *b { 1.0 } else { 0.0 }, 0.0)),
		other => Err(ConvertError::Unsupported {
			target: "complex128",
			kind: other.kind(),
		}),
	}
}

/// Narrow the canonical conversion to 32-bit components.
pub fn to_complex64(value: &Value) -> Result<Complex64> {
	Ok(to_complex128(value)?.narrow())
}

/// Whether `value` converts to a complex number.
pub fn could_be_complex(value: &Value) -> bool {
	to_complex128(value).is_ok()
}

/// 128-bit complex conversion, panicking on failure.
pub fn expect_complex128(value: &Value) -> Complex128 {
	match to_complex128(value) {
		Ok(c) => c,
		Err(err) => panic!("{err}"),
	}
}

/// 64-bit complex conversion, panicking on failure.
pub fn expect_complex64(value: &Value) -> Complex64 {
	match to_complex64(value) {
		Ok(c) => c,
		Err(err) => panic!("{err}"),
	}
}
