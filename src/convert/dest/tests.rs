use std::collections::BTreeMap;

use serde::Deserialize;

use crate::convert::complex::Complex128;
use crate::convert::error::ConvertError;
use crate::convert::value::Value;
use crate::convert::{Structured, to_dest};

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Document {
	name: String,
	#[serde(default)]
	sub: Sub,
	#[serde(default)]
	status: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Sub {
	integer: i32,
}

#[test]
fn scalar_destinations_narrow_to_their_width() {
	let mut text = String::new();
	to_dest(&Value::from(1234), &mut text).expect("string dest");
	assert_eq!(text, "1234");

	let mut flag = false;
	to_dest(&Value::from("true"), &mut flag).expect("bool dest");
	assert!(flag);

	let mut narrow = 0_u8;
	to_dest(&Value::from(1234), &mut narrow).expect("u8 dest");
	assert_eq!(narrow, 210);

	let mut wide = 0_i64;
	to_dest(&Value::from("-42"), &mut wide).expect("i64 dest");
	assert_eq!(wide, -42);

	let mut real = 0.0_f32;
	to_dest(&Value::from("64.64"), &mut real).expect("f32 dest");
	assert_eq!(real, 64.64_f32);

	let mut c = Complex128::new(0.0, 0.0);
	to_dest(&Value::from("5+3i"), &mut c).expect("complex dest");
	assert_eq!(c, Complex128::new(5.0, 3.0));
}

#[test]
fn structured_destination_populates_from_json_text() {
	let source = Value::from(r#"{"name":"report","sub":{"integer":7}}"#);
	let mut doc = Document::default();
	to_dest(&source, &mut Structured(&mut doc)).expect("struct dest");

	assert_eq!(doc.name, "report");
	assert_eq!(doc.sub.integer, 7);
	assert_eq!(doc.status, None);
}

#[test]
fn structured_destination_accepts_map_sources() {
	let mut entries = BTreeMap::new();
	entries.insert("name".to_owned(), Value::from("inline"));
	let source = Value::Map(entries);

	let mut doc = Document::default();
	to_dest(&source, &mut Structured(&mut doc)).expect("map source marshals then unmarshals");
	assert_eq!(doc.name, "inline");
}

#[test]
fn structured_destination_fills_maps_and_sequences() {
	let mut map: BTreeMap<String, String> = BTreeMap::new();
	to_dest(&Value::from(r#"{"a":"apple"}"#), &mut Structured(&mut map)).expect("map dest");
	assert_eq!(map.get("a").map(String::as_str), Some("apple"));

	let mut items: Vec<i64> = Vec::new();
	to_dest(&Value::from("[1,2,3]"), &mut Structured(&mut items)).expect("vec dest");
	assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn malformed_json_fails_without_panicking() {
	let mut doc = Document::default();
	let err = to_dest(&Value::from("{not json"), &mut Structured(&mut doc)).expect_err("parse error");
	assert!(matches!(err, ConvertError::Unmarshal { .. }));
}

#[test]
fn dynamic_destination_takes_the_source_as_is() {
	let source = Value::pointer(5);
	let mut slot = Value::Null;
	to_dest(&source, &mut slot).expect("dynamic dest");
	assert_eq!(slot, source);
}

#[test]
fn absent_sources_are_rejected_for_every_destination() {
	let mut slot = Value::Null;
	let err = to_dest(&Value::Null, &mut slot).expect_err("null source");
	assert!(matches!(err, ConvertError::Null { .. }));

	let mut n = 0_i32;
	let err = to_dest(&Value::null_pointer(), &mut n).expect_err("empty pointer source");
	assert!(matches!(err, ConvertError::Null { .. }));
}
