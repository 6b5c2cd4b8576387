#![allow(missing_docs)]

use dynconv::convert::{
	Complex128, ConvertError, Value, to_bool, to_complex128, to_float64, to_int, to_int8, to_int16, to_string, to_uint, to_uint8, to_uint16,
};

#[test]
fn zero_is_false_and_nonzero_is_true_for_every_numeric_kind() {
	let zeros = [Value::from(0), Value::from(0_u64), Value::from(0.0), Value::from(Complex128::new(0.0, 0.0))];
	for zero in zeros {
		assert!(!to_bool(&zero).expect("zero converts"), "{zero:?}");
	}

	let nonzeros = [Value::from(-3), Value::from(7_u64), Value::from(0.25), Value::from(Complex128::new(0.0, 1.0))];
	for nonzero in nonzeros {
		assert!(to_bool(&nonzero).expect("nonzero converts"), "{nonzero:?}");
	}
}

#[test]
fn narrowing_wraps_instead_of_failing() {
	assert_eq!(to_uint8(&Value::from(1234)).expect("u8"), 210);
	assert_eq!(to_uint8(&Value::from("1234")).expect("u8 from text"), 210);
	assert_eq!(to_uint16(&Value::from(70_000)).expect("u16"), 70_000_u32 as u16);
	assert_eq!(to_int8(&Value::from(1234)).expect("i8"), -46);
	assert_eq!(to_int16(&Value::from(40_000)).expect("i16"), 40_000_i64 as i16);
}

#[test]
fn in_range_narrowing_round_trips() {
	for candidate in [-128_i64, -1, 0, 1, 127] {
		let narrowed = to_int8(&Value::from(candidate)).expect("in range");
		assert_eq!(i64::from(narrowed), candidate);
	}
}

#[test]
fn stringify_then_parse_round_trips() {
	let int_text = to_string(&Value::from(-91234)).expect("int text");
	assert_eq!(to_int(&Value::from(int_text)).expect("reparse"), -91234);

	let float_text = to_string(&Value::from(64.64)).expect("float text");
	assert_eq!(to_float64(&Value::from(float_text)).expect("reparse"), 64.64);

	let bool_text = to_string(&Value::from(true)).expect("bool text");
	assert!(to_bool(&Value::from(bool_text)).expect("reparse"));

	let complex_text = to_string(&Value::from(Complex128::new(5.0, 3.0))).expect("complex text");
	assert_eq!(complex_text, "(5+3i)");
	assert_eq!(to_complex128(&Value::from(complex_text)).expect("reparse"), Complex128::new(5.0, 3.0));
}

#[test]
fn negative_sources_never_reach_unsigned_targets() {
	let err = to_uint(&Value::from(-1)).expect_err("negative int");
	assert!(matches!(err, ConvertError::Negative { target: "uint64", .. }));

	let err = to_uint8(&Value::from("-1")).expect_err("negative text");
	assert!(matches!(err, ConvertError::Negative { .. }));
}

#[test]
fn fractional_text_is_not_an_integer() {
	let err = to_int(&Value::from("3.5")).expect_err("fractional");
	assert!(matches!(err, ConvertError::ParseInt { .. }));

	assert_eq!(to_float64(&Value::from("3.5")).expect("float parse"), 3.5);
}
