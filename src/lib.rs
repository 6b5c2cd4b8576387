//! Dynamic type coercion for loosely-typed boundary data.
//!
//! Values arriving from parsed configuration, JSON payloads, or external
//! parameters carry no useful static type. [`convert::Value`] captures such a
//! value together with its runtime kind, and the [`convert`] module coerces it
//! into strongly-typed targets under a fixed rule set per target family.

/// Coercion engine: dynamic values and the per-target conversion rules.
pub mod convert;
