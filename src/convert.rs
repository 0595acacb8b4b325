use serde_json::Value;
use tracing::debug;

use crate::catalog::Catalog;
use crate::dates::{check_chronology, convert_date};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::ConvertError;
use crate::legacy::record_label;
use crate::models::{Concert, ConcertType, LegacyEvent};
use crate::utils::slugify;

pub struct Conversion {
    pub concerts: Vec<Concert>,
    pub skipped: usize,
    pub diagnostics: Diagnostics,
}

pub fn convert_event(
    catalog: &Catalog,
    event: &LegacyEvent,
    diagnostics: &mut Diagnostics,
) -> Concert {
    let date = convert_date(&event.date, diagnostics);
    let end_date = event
        .end_date
        .as_deref()
        .map(|value| convert_date(value, diagnostics));
    check_chronology(&event.name, &date, end_date.as_deref(), diagnostics);

    let artist_ids = event
        .lineup
        .iter()
        .map(|artist| catalog.resolve_artist(artist, diagnostics).into_id())
        .collect();
    let venue_id = catalog.resolve_venue(&event.venue, diagnostics).into_id();

    Concert {
        id: slugify(&event.name),
        date,
        end_date,
        artist_ids,
        venue_id,
        kind: ConcertType::from_flag(event.is_festival),
        name: event.name.clone(),
        price: None,
        logo: None,
        notes: None,
    }
}

pub fn convert_record(
    catalog: &Catalog,
    record: &Value,
    diagnostics: &mut Diagnostics,
) -> Result<Concert, ConvertError> {
    let event = LegacyEvent::try_from(record)?;
    Ok(convert_event(catalog, &event, diagnostics))
}

/// Converts every row, dropping the ones that fail, and sorts the rest by
/// date. The sort is stable so rows sharing a date keep their list order.
pub fn convert_all(catalog: &Catalog, records: &[Value]) -> Conversion {
    let mut diagnostics = Diagnostics::new();
    let mut concerts = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
        match convert_record(catalog, record, &mut diagnostics) {
            Ok(concert) => {
                debug!(id = %concert.id, date = %concert.date, "converted event");
                concerts.push(concert);
            }
            Err(err) => {
                skipped += 1;
                diagnostics.record(Warning::SkippedRecord {
                    event: record_label(record, index),
                    reason: err.to_string(),
                });
            }
        }
    }

    concerts.sort_by(|a, b| a.date.cmp(&b.date));

    Conversion {
        concerts,
        skipped,
        diagnostics,
    }
}
