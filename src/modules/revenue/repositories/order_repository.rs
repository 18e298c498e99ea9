use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::core::Result;
use crate::modules::revenue::models::{PartnerProfile, RawOrderRecord, SellerProfile};
use crate::modules::revenue::repositories::RecordSource;

/// Seed shape for the in-memory order store: the order lines plus the
/// partner and seller master data they join against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub orders: Vec<RawOrderRecord>,
    #[serde(default)]
    pub partners: Vec<PartnerProfile>,
    #[serde(default)]
    pub sellers: Vec<SellerProfile>,
}

/// In-memory order store standing in for the portal's document database,
/// which lives outside this service. Loaded once at startup; reads are
/// cheap clones of the matching window.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Vec<RawOrderRecord>,
    partners: HashMap<String, PartnerProfile>,
    sellers: HashMap<String, SellerProfile>,
}

impl InMemoryOrderRepository {
    pub fn from_dataset(dataset: Dataset) -> Self {
        let partners = dataset
            .partners
            .into_iter()
            .map(|p| (p.provider_name.clone(), p))
            .collect();
        let sellers = dataset
            .sellers
            .into_iter()
            .map(|s| (s.name.clone(), s))
            .collect();

        Self {
            orders: dataset.orders,
            partners,
            sellers,
        }
    }

    /// Load the store from a JSON dataset file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        Ok(Self::from_dataset(dataset))
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl RecordSource for InMemoryOrderRepository {
    fn orders_in_window(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<RawOrderRecord> {
        self.orders
            .iter()
            .filter(|o| o.order_date >= start && o.order_date <= end)
            .cloned()
            .collect()
    }

    fn partner_profiles(&self) -> &HashMap<String, PartnerProfile> {
        &self.partners
    }

    fn seller_profiles(&self) -> &HashMap<String, SellerProfile> {
        &self.sellers
    }
}
