use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::convert::error::{ConvertError, Result};
use crate::convert::value::{Value, chase};

// Naive layouts tried after the offset-carrying RFC forms; parses are taken
// as UTC. Layouts naming a bare timezone abbreviation are not supported.
const DATETIME_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%a %b %e %H:%M:%S %Y"];
const TIME_LAYOUTS: &[&str] = &["%H:%M:%S", "%I:%M%p"];

/// Convert any value to a UTC timestamp.
///
/// Strings are tried against a fixed layout list (RFC 3339, RFC 2822, then
/// common date and time layouts); integer, unsigned, and float kinds are Unix
/// milliseconds.
pub fn to_datetime(value: &Value) -> Result<DateTime<Utc>> {
	match chase(value, "timestamp")? {
		Value::String(s) => parse_datetime_text(s),
		Value::Int(i) => from_unix_millis(*i),
		Value::Uint(u) => from_unix_millis(*u as i64),
		Value::Float(x) => from_unix_millis(*x as i64),
		other => Err(ConvertError::Unsupported {
			target: "timestamp",
			kind: other.kind(),
		}),
	}
}

/// Convert to a UTC timestamp truncated to midnight.
pub fn to_date(value: &Value) -> Result<DateTime<Utc>> {
	let at = to_datetime(value)?;
	Ok(at.date_naive().and_time(NaiveTime::MIN).and_utc())
}

/// Whether `value` converts to a timestamp.
pub fn could_be_datetime(value: &Value) -> bool {
	to_datetime(value).is_ok()
}

/// Timestamp conversion, panicking on failure.
pub fn expect_datetime(value: &Value) -> DateTime<Utc> {
	match to_datetime(value) {
		Ok(at) => at,
		Err(err) => panic!("{err}"),
	}
}

/// Date conversion, panicking on failure.
pub fn expect_date(value: &Value) -> DateTime<Utc> {
	match to_date(value) {
		Ok(at) => at,
		Err(err) => panic!("{err}"),
	}
}

fn from_unix_millis(millis: i64) -> Result<DateTime<Utc>> {
	DateTime::from_timestamp_millis(millis).ok_or(ConvertError::TimestampOutOfRange { millis })
}

fn parse_datetime_text(text: &str) -> Result<DateTime<Utc>> {
	if let Ok(at) = DateTime::parse_from_rfc3339(text) {
		return Ok(at.with_timezone(&Utc));
	}
	if let Ok(at) = DateTime::parse_from_rfc2822(text) {
		return Ok(at.with_timezone(&Utc));
	}
	for layout in DATETIME_LAYOUTS {
		if let Ok(at) = NaiveDateTime::parse_from_str(text, layout) {
			return Ok(at.and_utc());
		}
	}
	if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
		return Ok(date.and_time(NaiveTime::MIN).and_utc());
	}
	for layout in TIME_LAYOUTS {
		if let Ok(time) = NaiveTime::parse_from_str(text, layout) {
			return Ok(DateTime::<Utc>::UNIX_EPOCH.date_naive().and_time(time).and_utc());
		}
	}
	Err(ConvertError::ParseTimestamp { text: text.to_owned() })
}
