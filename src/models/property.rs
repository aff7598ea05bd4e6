//! Property Entity
//!
//! The single domain record served by the API, plus its optional extension
//! attributes and the creation payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Property Status ==
/// Lifecycle state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Active,
    Pending,
    Sold,
}

// == Property Extras ==
/// Optional attributes used by the statistics layer.
///
/// Absent counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyExtras {
    pub status: Option<PropertyStatus>,
    pub square_footage: Option<f64>,
    pub views: u64,
    pub inquiries: u64,
    pub favorites: u64,
}

// == Property ==
/// A listed property as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Store-assigned identifier
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Asking price, `None` when not yet priced
    pub price: Option<f64>,
    pub location: String,
    /// Insertion timestamp assigned by the store
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extras: PropertyExtras,
}

impl Property {
    // == Has Price ==
    /// The one predicate deciding whether a property counts as priced.
    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }

    /// Returns true if the listing is marked with the given status.
    pub fn has_status(&self, status: PropertyStatus) -> bool {
        self.extras.status == Some(status)
    }
}

// == New Property ==
/// Payload for creating or replacing a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    pub location: String,
    #[serde(flatten)]
    pub extras: PropertyExtras,
}

impl NewProperty {
    /// Materializes the payload into a stored record.
    pub fn into_property(self, id: i64, created_at: DateTime<Utc>) -> Property {
        Property {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            location: self.location,
            created_at,
            extras: self.extras,
        }
    }
}

// == Recommendation Preferences ==
/// A buyer's criteria for scoring a property.
///
/// A zero `max_price` or an empty location list counts as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationPreferences {
    pub max_price: Option<f64>,
    pub preferred_locations: Option<Vec<String>>,
}
