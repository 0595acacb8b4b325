use std::fmt;

use crate::models::Concert;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub festivals: usize,
    pub concerts: usize,
    pub skipped: usize,
    pub generated_ids: usize,
    /// `None` when nothing converted.
    pub date_range: Option<DateRange>,
}

impl Summary {
    /// Expects `concerts` already sorted by date.
    pub fn from_sorted(concerts: &[Concert], skipped: usize, generated_ids: usize) -> Self {
        let festivals = concerts.iter().filter(|c| c.is_festival()).count();
        let date_range = match (concerts.first(), concerts.last()) {
            (Some(first), Some(last)) => Some(DateRange {
                first: first.date.clone(),
                last: last.date.clone(),
            }),
            _ => None,
        };
        Self {
            total: concerts.len(),
            festivals,
            concerts: concerts.len() - festivals,
            skipped,
            generated_ids,
            date_range,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion Statistics:")?;
        writeln!(f, "Total events: {}", self.total)?;
        writeln!(f, "Festivals: {}", self.festivals)?;
        writeln!(f, "Concerts: {}", self.concerts)?;
        if self.skipped > 0 {
            writeln!(f, "Skipped: {}", self.skipped)?;
        }
        if self.generated_ids > 0 {
            writeln!(f, "Generated IDs: {}", self.generated_ids)?;
        }
        match &self.date_range {
            Some(range) => write!(f, "Date range: {} to {}", range.first, range.last),
            None => write!(f, "Date range: none"),
        }
    }
}
