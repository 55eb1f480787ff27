use serde_json::{Map, Value};

use crate::core::domain::Event;
use crate::error::{LoadError, LoadResult};
use crate::parsing::headers::Field;
use crate::parsing::normalize::{
    clean_attendees, join_time_range, normalize_date, normalize_status, split_attendees,
};
use crate::parsing::BYTE_ORDER_MARK;

/// Key under which a wrapped document carries its rows
const DATA_KEY: &str = "data";

/// Parse a structured schedule document into events.
///
/// The document is either a top-level array of row objects or an object with
/// such an array under `data`. A leading byte-order mark is ignored. Blank rows
/// are discarded; an empty result is not an error at this level.
///
/// # Returns
/// * `Ok(events)` - adapted events in document order
/// * `Err(LoadError::Format)` - invalid JSON or an unexpected top-level shape
pub fn parse_events_json_str(json_str: &str) -> LoadResult<Vec<Event>> {
    let json_str = json_str.strip_prefix(BYTE_ORDER_MARK).unwrap_or(json_str);
    let json_value: Value = serde_json::from_str(json_str).map_err(|e| {
        let preview: String = json_str.chars().take(200).collect();
        LoadError::Format(format!(
            "Invalid JSON syntax: {}. First 200 chars: {}",
            e, preview
        ))
    })?;

    let rows = extract_rows(&json_value)?;
    Ok(adapt_json_rows(rows))
}

/// Locate the row list inside a parsed document.
fn extract_rows(json_value: &Value) -> LoadResult<&[Value]> {
    match json_value {
        Value::Array(rows) => Ok(rows),
        Value::Object(map) => match map.get(DATA_KEY) {
            Some(Value::Array(rows)) => Ok(rows),
            _ => Err(LoadError::Format(format!(
                "JSON object must contain a '{}' list. Found keys: {:?}",
                DATA_KEY,
                map.keys().collect::<Vec<_>>()
            ))),
        },
        other => Err(LoadError::Format(format!(
            "Expected a list of rows or an object with a '{}' list, found {}",
            DATA_KEY,
            value_kind(other)
        ))),
    }
}

/// Adapt every row, dropping blank rows and anything that is not an object.
pub fn adapt_json_rows(rows: &[Value]) -> Vec<Event> {
    rows.iter().filter_map(adapt_json_row).collect()
}

/// Adapt a single structured row.
///
/// Returns `None` for non-object rows and for rows whose center, date and time
/// are all empty.
pub fn adapt_json_row(row: &Value) -> Option<Event> {
    let row = row.as_object()?;

    let attendees = match field_value(row, Field::Attendees) {
        Some(Value::Array(items)) => clean_attendees(items.iter().map(value_to_text)),
        Some(other) => split_attendees(&value_to_text(other)),
        None => Vec::new(),
    };

    let event = Event {
        center: field_text(row, Field::Center).trim().to_string(),
        date: normalize_date(&field_text(row, Field::Date)),
        time_range: join_time_range(
            &field_text(row, Field::Time),
            &field_text(row, Field::StartTime),
            &field_text(row, Field::EndTime),
        ),
        responsible: field_text(row, Field::Responsible).trim().to_string(),
        status: normalize_status(field_text(row, Field::Status).trim()),
        shift: field_text(row, Field::Shift).trim().to_string(),
        area: field_text(row, Field::Area).trim().to_string(),
        attendees,
    };

    (!event.is_blank()).then_some(event)
}

/// First non-null value among the keys accepted for `field`.
///
/// Keys are compared with the same normalization used for delimited headers.
/// When several keys match, the one naming the earliest synonym wins.
fn field_value(row: &Map<String, Value>, field: Field) -> Option<&Value> {
    row.iter()
        .filter(|(_, value)| !value.is_null())
        .filter_map(|(key, value)| field.rank(key).map(|rank| (rank, value)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, value)| value)
}

fn field_text(row: &Map<String, Value>, field: Field) -> String {
    field_value(row, field).map(value_to_text).unwrap_or_default()
}

/// Text form of a scalar JSON value. Strings are taken as-is, numbers and
/// booleans are rendered, null is empty.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
