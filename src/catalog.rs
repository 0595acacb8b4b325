//! Name → id lookup for the artist and venue catalogs.
//!
//! The tables mirror the ids maintained in the site's `artists.js` and
//! `venues.js`. They ship inside the binary as JSON resources and are parsed
//! once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::ConvertError;
use crate::utils::slugify;

const ARTISTS_JSON: &str = include_str!("../data/artists.json");
const VENUES_JSON: &str = include_str!("../data/venues.json");

static EMBEDDED: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(ARTISTS_JSON, VENUES_JSON).expect("embedded catalog tables are valid JSON")
});

/// Where a resolved id came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Mapped(String),
    Generated(String),
}

impl Resolution {
    pub fn id(&self) -> &str {
        match self {
            Resolution::Mapped(id) | Resolution::Generated(id) => id,
        }
    }

    pub fn into_id(self) -> String {
        match self {
            Resolution::Mapped(id) | Resolution::Generated(id) => id,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Resolution::Generated(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: HashMap<String, String>,
    venues: HashMap<String, String>,
}

impl Catalog {
    pub fn embedded() -> &'static Catalog {
        &EMBEDDED
    }

    pub fn new(artists: HashMap<String, String>, venues: HashMap<String, String>) -> Self {
        Self { artists, venues }
    }

    pub fn from_json(artists: &str, venues: &str) -> Result<Self, ConvertError> {
        let artists = serde_json::from_str(artists)
            .map_err(|err| ConvertError::Catalog(format!("artist table: {err}")))?;
        let venues = serde_json::from_str(venues)
            .map_err(|err| ConvertError::Catalog(format!("venue table: {err}")))?;
        Ok(Self { artists, venues })
    }

    pub fn artists(&self) -> impl Iterator<Item = (&str, &str)> {
        self.artists.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn venues(&self) -> impl Iterator<Item = (&str, &str)> {
        self.venues.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn lookup_artist(&self, name: &str) -> Resolution {
        lookup(&self.artists, name)
    }

    pub fn lookup_venue(&self, name: &str) -> Resolution {
        lookup(&self.venues, name)
    }

    /// Like [`Catalog::lookup_artist`], recording a warning on a miss.
    pub fn resolve_artist(&self, name: &str, diagnostics: &mut Diagnostics) -> Resolution {
        let resolved = self.lookup_artist(name);
        if let Resolution::Generated(ref generated) = resolved {
            diagnostics.record(Warning::UnmappedArtist {
                name: name.to_string(),
                generated: generated.clone(),
            });
        }
        resolved
    }

    pub fn resolve_venue(&self, name: &str, diagnostics: &mut Diagnostics) -> Resolution {
        let resolved = self.lookup_venue(name);
        if let Resolution::Generated(ref generated) = resolved {
            diagnostics.record(Warning::UnmappedVenue {
                name: name.to_string(),
                generated: generated.clone(),
            });
        }
        resolved
    }
}

fn lookup(table: &HashMap<String, String>, name: &str) -> Resolution {
    match table.get(name) {
        Some(id) => Resolution::Mapped(id.clone()),
        None => Resolution::Generated(slugify(name)),
    }
}
