// Forex pair symbols as listed by the provider.
use serde_json::Value;
use std::collections::BTreeSet;

/// Distinct `symbol` values of the forex list rows, sorted.
///
/// Rows that are not objects or carry no usable `symbol` are skipped.
pub fn distinct_symbols(rows: &[Value]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.as_object())
        .filter_map(|row| row.get("symbol").and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
