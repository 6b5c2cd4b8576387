#![allow(missing_docs)]

use serde::Deserialize;

use dynconv::convert::{Structured, Value, to_dest, to_string};

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Limits {
	max_connections: u32,
	#[serde(default)]
	timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Config {
	name: String,
	enabled: bool,
	limits: Limits,
}

#[test]
fn json_payload_flows_through_value_into_typed_fields() {
	let payload: serde_json::Value =
		serde_json::from_str(r#"{"name":"edge","enabled":"true","limits":{"max_connections":64},"port":"8080"}"#).expect("payload parses");
	let dynamic = Value::from(payload);

	let Value::Map(fields) = &dynamic else {
		panic!("expected a map payload");
	};

	// Loosely-typed scalar fields coerce one by one.
	let mut enabled = false;
	to_dest(&fields["enabled"], &mut enabled).expect("bool from text");
	assert!(enabled);

	let mut port = 0_u16;
	to_dest(&fields["port"], &mut port).expect("port from text");
	assert_eq!(port, 8080);

	// The nested object marshals back to JSON and lands in a typed struct.
	let mut limits = Limits::default();
	to_dest(&fields["limits"], &mut Structured(&mut limits)).expect("limits struct");
	assert_eq!(limits.max_connections, 64);
	assert_eq!(limits.timeout_secs, None);
}

#[test]
fn whole_payload_can_land_in_one_structured_destination() {
	let source = Value::from(r#"{"name":"edge","enabled":true,"limits":{"max_connections":64,"timeout_secs":30}}"#);

	let mut config = Config::default();
	to_dest(&source, &mut Structured(&mut config)).expect("config struct");

	assert_eq!(config.name, "edge");
	assert!(config.enabled);
	assert_eq!(config.limits.timeout_secs, Some(30));
}

#[test]
fn map_values_stringify_to_their_json_text() {
	let payload: serde_json::Value = serde_json::from_str(r#"{"a":"apple"}"#).expect("payload parses");
	assert_eq!(to_string(&Value::from(payload)).expect("marshal"), r#"{"a":"apple"}"#);
}
