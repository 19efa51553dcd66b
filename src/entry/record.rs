use super::value::Value;
use indexmap::IndexMap;

/// Ordered key/value record of one desktop entry.
///
/// Iteration follows insertion order. Re-inserting a key replaces its value
/// without moving it.
pub type KeyedRecord = IndexMap<String, Value>;
