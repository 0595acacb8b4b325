use serde::{Deserialize, Serialize};

/// One row of the legacy event list, after its positional shape was checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyEvent {
    pub name: String,
    pub venue: String,
    pub lineup: Vec<String>,
    pub date: String,
    pub is_festival: bool,
    pub end_date: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConcertType {
    Concert,
    Festival,
}

impl ConcertType {
    pub fn from_flag(is_festival: bool) -> Self {
        if is_festival {
            ConcertType::Festival
        } else {
            ConcertType::Concert
        }
    }
}

// Field order is the key order of the written files.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Concert {
    pub id: String, // slug of name, not checked for uniqueness
    pub date: String,
    pub end_date: Option<String>,
    pub artist_ids: Vec<String>,
    pub venue_id: String,
    #[serde(rename = "type")]
    pub kind: ConcertType,
    pub name: String,
    pub price: Option<String>,
    pub logo: Option<String>,
    pub notes: Option<String>,
}

impl Concert {
    pub fn is_festival(&self) -> bool {
        self.kind == ConcertType::Festival
    }
}
