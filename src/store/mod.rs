//! Property Store Module
//!
//! The source of truth for `Property` records and the aggregate queries the
//! statistics layer runs against it.

mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewProperty, Property};

pub use memory::MemoryStore;

// == Aggregates ==
/// Count/average over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceAggregate {
    pub total: u64,
    /// Properties for which `Property::has_price` holds
    pub priced: u64,
    /// Mean over priced properties, `None` when there are none
    pub average_price: Option<f64>,
}

/// One row of the group-by-location aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationAggregate {
    pub location: String,
    pub property_count: u64,
    pub average_price: Option<f64>,
}

/// Case-insensitive substring filters; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub title: String,
    pub location: String,
}

impl SearchFilter {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }

    pub fn matches(&self, property: &Property) -> bool {
        contains_ignore_case(&property.title, &self.title)
            && contains_ignore_case(&property.location, &self.location)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

// == Property Store ==
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Every property, in id order.
    async fn list_all(&self) -> Result<Vec<Property>>;

    async fn get(&self, id: i64) -> Result<Option<Property>>;

    /// Inserts a new record, assigning its id and creation time.
    async fn create(&self, new: NewProperty) -> Result<Property>;

    /// Replaces the mutable fields of `id`; `None` when it does not exist.
    async fn update(&self, id: i64, changes: NewProperty) -> Result<Option<Property>>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Property>>;

    async fn count(&self) -> Result<u64>;

    async fn price_aggregate(&self) -> Result<PriceAggregate>;

    /// Group-by-location counts and average prices, sorted by location.
    async fn location_aggregates(&self) -> Result<Vec<LocationAggregate>>;
}
