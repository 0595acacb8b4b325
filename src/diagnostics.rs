use std::fmt;

use tracing::warn;

/// Non-fatal findings raised while converting. Each one is logged when it is
/// recorded and kept so the run summary (and tests) can inspect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    UnmappedArtist { name: String, generated: String },
    UnmappedVenue { name: String, generated: String },
    UnparsedDate { input: String },
    NotACalendarDate { event: String, date: String },
    EndBeforeStart { event: String, date: String, end_date: String },
    SkippedRecord { event: String, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnmappedArtist { name, generated } => write!(
                f,
                "artist '{name}' not found in mapping, using generated ID '{generated}'"
            ),
            Warning::UnmappedVenue { name, generated } => write!(
                f,
                "venue '{name}' not found in mapping, using generated ID '{generated}'"
            ),
            Warning::UnparsedDate { input } => write!(f, "could not parse date '{input}'"),
            Warning::NotACalendarDate { event, date } => {
                write!(f, "event '{event}': '{date}' is not a calendar date")
            }
            Warning::EndBeforeStart {
                event,
                date,
                end_date,
            } => write!(f, "event '{event}': end date {end_date} precedes start {date}"),
            Warning::SkippedRecord { event, reason } => {
                write!(f, "error converting event {event}: {reason}")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, warning: Warning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Warning) -> bool,
    {
        self.warnings.iter().filter(|w| predicate(*w)).count()
    }

    pub fn generated_ids(&self) -> usize {
        self.count_where(|w| {
            matches!(
                w,
                Warning::UnmappedArtist { .. } | Warning::UnmappedVenue { .. }
            )
        })
    }
}
