//! The legacy event list: positional rows of
//! `[name, venue, lineup, date, is_festival?, end_date?]`.
//!
//! Rows are kept as raw JSON until conversion so one broken row can be
//! reported and skipped without rejecting the whole list.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::ConvertError;
use crate::models::LegacyEvent;

const LEGACY_EVENTS_JSON: &str = include_str!("../data/legacy_events.json");

pub fn embedded_records() -> Result<Vec<Value>, ConvertError> {
    parse_records(LEGACY_EVENTS_JSON)
}

pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to read event list {}", path.display()))?;
    parse_records(&contents).with_context(|| format!("invalid event list {}", path.display()))
}

pub fn parse_records(text: &str) -> Result<Vec<Value>, ConvertError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| ConvertError::Dataset(err.to_string()))?;
    match value {
        Value::Array(rows) => Ok(rows),
        _ => Err(ConvertError::Dataset(
            "top level must be an array of event rows".to_string(),
        )),
    }
}

/// Name used when reporting a row, falling back to its position.
pub fn record_label(record: &Value, index: usize) -> String {
    record
        .get(0)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", index + 1))
}

impl TryFrom<&Value> for LegacyEvent {
    type Error = ConvertError;

    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        let fields = record.as_array().ok_or(ConvertError::NotARecord)?;

        let name = required_str(fields, 0, "name")?;
        let venue = required_str(fields, 1, "venue")?;
        let lineup = fields
            .get(2)
            .ok_or(ConvertError::MissingField("lineup"))?
            .as_array()
            .ok_or(ConvertError::WrongType {
                field: "lineup",
                expected: "an array of strings",
            })?
            .iter()
            .map(|artist| {
                artist
                    .as_str()
                    .map(str::to_string)
                    .ok_or(ConvertError::WrongType {
                        field: "lineup",
                        expected: "an array of strings",
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let date = required_str(fields, 3, "date")?;

        let is_festival = match fields.get(4) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                return Err(ConvertError::WrongType {
                    field: "is_festival",
                    expected: "a boolean",
                })
            }
        };

        let end_date = match fields.get(5) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) if text.is_empty() => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                return Err(ConvertError::WrongType {
                    field: "end_date",
                    expected: "a string",
                })
            }
        };

        Ok(LegacyEvent {
            name,
            venue,
            lineup,
            date,
            is_festival,
            end_date,
        })
    }
}

fn required_str(
    fields: &[Value],
    index: usize,
    field: &'static str,
) -> Result<String, ConvertError> {
    fields
        .get(index)
        .ok_or(ConvertError::MissingField(field))?
        .as_str()
        .map(str::to_string)
        .ok_or(ConvertError::WrongType {
            field,
            expected: "a string",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_list_has_every_row() {
        let records = embedded_records().unwrap();
        assert_eq!(records.len(), 128);
        assert!(records
            .iter()
            .all(|record| LegacyEvent::try_from(record).is_ok()));
    }

    #[test]
    fn short_row_defaults_optional_fields() {
        let record = json!(["Nackt II Tour", "Centralstation", ["Subway to Sally"], "11-03-28"]);
        let event = LegacyEvent::try_from(&record).unwrap();
        assert_eq!(event.name, "Nackt II Tour");
        assert_eq!(event.lineup, vec!["Subway to Sally"]);
        assert!(!event.is_festival);
        assert_eq!(event.end_date, None);
    }

    #[test]
    fn festival_row_keeps_flag_and_end_date() {
        let record = json!([
            "W:O:A 2013",
            "Wacken",
            ["Alice Cooper", "Deep Purple"],
            "13-08-01",
            true,
            "13-08-03"
        ]);
        let event = LegacyEvent::try_from(&record).unwrap();
        assert!(event.is_festival);
        assert_eq!(event.end_date.as_deref(), Some("13-08-03"));
    }

    #[test]
    fn null_and_empty_optionals_are_absent() {
        let record = json!(["X", "Y", [], "20-01-01", null, ""]);
        let event = LegacyEvent::try_from(&record).unwrap();
        assert!(!event.is_festival);
        assert_eq!(event.end_date, None);
        assert!(event.lineup.is_empty());
    }

    #[test]
    fn broken_rows_are_rejected() {
        assert!(matches!(
            LegacyEvent::try_from(&json!({"name": "x"})),
            Err(ConvertError::NotARecord)
        ));
        assert!(matches!(
            LegacyEvent::try_from(&json!(["Only a name", "Venue"])),
            Err(ConvertError::MissingField("lineup"))
        ));
        assert!(matches!(
            LegacyEvent::try_from(&json!(["A", "B", ["C", 3], "20-01-01"])),
            Err(ConvertError::WrongType { field: "lineup", .. })
        ));
        assert!(matches!(
            LegacyEvent::try_from(&json!(["A", "B", [], "20-01-01", "yes"])),
            Err(ConvertError::WrongType {
                field: "is_festival",
                ..
            })
        ));
    }

    #[test]
    fn labels_fall_back_to_position() {
        assert_eq!(record_label(&json!(["Voicefest"]), 4), "Voicefest");
        assert_eq!(record_label(&json!([42]), 4), "#5");
        assert_eq!(record_label(&json!(null), 0), "#1");
    }

    #[test]
    fn parse_records_requires_array() {
        assert!(matches!(
            parse_records("{}"),
            Err(ConvertError::Dataset(_))
        ));
        assert!(parse_records("[]").unwrap().is_empty());
    }
}
