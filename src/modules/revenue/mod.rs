pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{OrderRecord, PartnerRevenueStat, RawOrderRecord, ReportingWindow};
pub use repositories::{Dataset, InMemoryOrderRepository, RecordSource};
pub use services::{RevenueCalculator, RevenueService};
