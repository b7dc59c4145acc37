// structures and routines related to 1 minute price bars.
use crate::utils;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const DATE: &str = "date";
pub const DATE_IST: &str = "date_IST";

/// One bar as returned by the provider.
///
/// Only `date` is interpreted, open/high/low/close/volume and anything else
/// the provider adds are carried through as is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Bar(Map<String, Value>);

impl Bar {
    pub fn from_value(v: Value) -> Option<Bar> {
        match v {
            Value::Object(map) => Some(Bar(map)),
            _ => None,
        }
    }

    pub fn date(&self) -> Option<&str> {
        self.0
            .get(DATE)
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    // Copy of this bar with the IST rendering of `date` appended.
    pub fn with_ist(&self) -> Bar {
        let mut bar = self.clone();
        if let Some(dt) = self.date() {
            let dt_ist = utils::convert_utc_to_ist(dt);
            if !dt_ist.is_empty() {
                bar.0.insert(DATE_IST.to_string(), Value::String(dt_ist));
            }
        }
        bar
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        write!(f, "{}", s)
    }
}

/// Pick the latest bar out of a 1 minute chart response.
///
/// The provider returns bars most recent first so the head of the array is
/// taken. The rest of the array is only checked so an ordering change on the
/// provider side shows up in the log.
pub fn latest_bar(rows: &[Value]) -> Option<Bar> {
    let latest = Bar::from_value(rows.first()?.clone())?;

    if let Some(head) = latest.date() {
        let newer = rows
            .iter()
            .skip(1)
            .filter_map(|r| r.get(DATE).and_then(Value::as_str))
            .filter(|d| *d > head)
            .max();
        if let Some(newer) = newer {
            warn!(
                "chart not ordered most recent first, head is {} but {} is present",
                head, newer
            );
        }
    }

    Some(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils;

    use serde_json::json;

    fn bar(v: Value) -> Bar {
        Bar::from_value(v).unwrap()
    }

    #[test]
    fn ist_field_appended() {
        let b = bar(json!({"date": "2023-04-26 13:45:00", "open": 1.1, "close": 1.2}));
        let b = b.with_ist();
        assert_eq!(b.get(DATE_IST), Some(&json!("2023-04-26 19:15:00")));
        assert_eq!(b.get("open"), Some(&json!(1.1)));
        assert_eq!(b.date(), Some("2023-04-26 13:45:00"));
    }

    #[test]
    fn ist_field_passthrough_on_bad_date() {
        let b = bar(json!({"date": "yesterday"})).with_ist();
        assert_eq!(b.get(DATE_IST), Some(&json!("yesterday")));
    }

    #[test]
    fn no_date() {
        let b = bar(json!({"close": 1.0}));
        assert_eq!(b.date(), None);
        assert_eq!(b.with_ist(), b);

        let b = bar(json!({"date": 12}));
        assert_eq!(b.date(), None);

        let b = bar(json!({"date": "", "close": 1.0}));
        assert_eq!(b.date(), None);
        assert_eq!(b.with_ist(), b);
    }

    #[test]
    fn display_keeps_field_order() {
        let b = bar(json!({"date": "2024-01-02 00:00:00", "open": 1.5, "volume": 10})).with_ist();
        assert_eq!(
            b.to_string(),
            r#"{"date":"2024-01-02 00:00:00","open":1.5,"volume":10,"date_IST":"2024-01-02 05:30:00"}"#
        );
    }

    #[test]
    fn latest_is_head() {
        let rows = vec![
            json!({"date": "2024-01-02 10:01:00"}),
            json!({"date": "2024-01-02 10:00:00"}),
        ];
        assert_eq!(latest_bar(&rows).unwrap().date(), Some("2024-01-02 10:01:00"));
    }

    #[test]
    fn latest_out_of_order_still_head() {
        let _ = utils::init_logging("debug");
        let rows = vec![
            json!({"date": "2024-01-02 10:00:00"}),
            json!({"date": "2024-01-02 10:01:00"}),
        ];
        assert_eq!(latest_bar(&rows).unwrap().date(), Some("2024-01-02 10:00:00"));
    }

    #[test]
    fn latest_nothing() {
        assert!(latest_bar(&[]).is_none());
        assert!(latest_bar(&[json!("2024-01-02 10:00:00")]).is_none());
    }
}
