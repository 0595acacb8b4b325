use chrono::NaiveDate;

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::ConvertError;

/// Two-digit years at or below this land in the 2000s, the rest in the 1900s.
const PIVOT_YEAR: u32 = 30;

/// Expands a `YY-MM-DD` (or `YYYY-MM-DD`) string to `YYYY-MM-DD`.
///
/// Month and day are copied verbatim; only the year is interpreted.
pub fn normalize_date(input: &str) -> Result<String, ConvertError> {
    let parts: Vec<&str> = input.split('-').collect();
    let [year_part, month, day] = parts.as_slice() else {
        return Err(ConvertError::BadDate(input.to_string()));
    };

    let year_value =
        parse_digits(year_part).ok_or_else(|| ConvertError::BadDate(input.to_string()))?;
    let year = if year_part.len() == 2 {
        if year_value <= PIVOT_YEAR {
            2000 + year_value
        } else {
            1900 + year_value
        }
    } else {
        year_value
    };

    Ok(format!("{year:04}-{month}-{day}"))
}

/// [`normalize_date`], falling back to the untouched input with a warning.
pub fn convert_date(input: &str, diagnostics: &mut Diagnostics) -> String {
    match normalize_date(input) {
        Ok(date) => date,
        Err(_) => {
            diagnostics.record(Warning::UnparsedDate {
                input: input.to_string(),
            });
            input.to_string()
        }
    }
}

/// Flags end dates that precede the start, and strings that are not real
/// calendar dates. Never changes the record.
pub fn check_chronology(
    event: &str,
    date: &str,
    end_date: Option<&str>,
    diagnostics: &mut Diagnostics,
) {
    let start = calendar_date(event, date, diagnostics);
    let end = end_date.and_then(|value| calendar_date(event, value, diagnostics));

    if let (Some(start), Some(end), Some(end_text)) = (start, end, end_date) {
        if end < start {
            diagnostics.record(Warning::EndBeforeStart {
                event: event.to_string(),
                date: date.to_string(),
                end_date: end_text.to_string(),
            });
        }
    }
}

fn calendar_date(event: &str, value: &str, diagnostics: &mut Diagnostics) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            diagnostics.record(Warning::NotACalendarDate {
                event: event.to_string(),
                date: value.to_string(),
            });
            None
        }
    }
}

fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
