//! In-Memory Property Store
//!
//! Keeps records in an ordered map behind an async RwLock and computes the
//! aggregate queries directly over it.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::models::{NewProperty, Property};
use crate::store::{LocationAggregate, PriceAggregate, PropertyStore, SearchFilter};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Property>,
    next_id: i64,
}

/// Shared in-memory store. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// Running sum/count for one group of prices.
#[derive(Default)]
struct PriceAccumulator {
    count: u64,
    priced: u64,
    sum: f64,
}

impl PriceAccumulator {
    fn add(&mut self, property: &Property) {
        self.count += 1;
        if property.has_price() {
            self.priced += 1;
            self.sum += property.price.unwrap_or_default();
        }
    }

    fn average(&self) -> Option<f64> {
        (self.priced > 0).then(|| self.sum / self.priced as f64)
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Property>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Property>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, new: NewProperty) -> Result<Property> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let property = new.into_property(table.next_id, Utc::now());
        table.rows.insert(property.id, property.clone());

        debug!(id = property.id, "property inserted");
        Ok(property)
    }

    async fn update(&self, id: i64, changes: NewProperty) -> Result<Option<Property>> {
        let mut table = self.table.write().await;
        let Some(existing) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        // id and created_at are immutable
        *existing = changes.into_property(existing.id, existing.created_at);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Property>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|property| filter.matches(property))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.table.read().await.rows.len() as u64)
    }

    async fn price_aggregate(&self) -> Result<PriceAggregate> {
        let table = self.table.read().await;
        let mut acc = PriceAccumulator::default();
        table.rows.values().for_each(|property| acc.add(property));

        Ok(PriceAggregate {
            total: acc.count,
            priced: acc.priced,
            average_price: acc.average(),
        })
    }

    async fn location_aggregates(&self) -> Result<Vec<LocationAggregate>> {
        let table = self.table.read().await;
        let mut groups: BTreeMap<&str, PriceAccumulator> = BTreeMap::new();
        for property in table.rows.values() {
            groups
                .entry(property.location.as_str())
                .or_default()
                .add(property);
        }

        Ok(groups
            .into_iter()
            .map(|(location, acc)| LocationAggregate {
                location: location.to_string(),
                property_count: acc.count,
                average_price: acc.average(),
            })
            .collect())
    }
}
