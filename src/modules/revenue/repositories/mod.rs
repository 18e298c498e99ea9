pub mod order_repository;

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::modules::revenue::models::{PartnerProfile, RawOrderRecord, SellerProfile};

pub use order_repository::{Dataset, InMemoryOrderRepository};

/// The consumed record-store interface: order lines for an inclusive
/// window plus the partner and seller master data.
///
/// The settlement engine never goes through this trait itself; the service
/// layer materializes everything up front so aggregation stays pure.
pub trait RecordSource {
    fn orders_in_window(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<RawOrderRecord>;

    fn partner_profiles(&self) -> &HashMap<String, PartnerProfile>;

    fn seller_profiles(&self) -> &HashMap<String, SellerProfile>;
}
