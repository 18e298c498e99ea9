pub mod order;
pub mod profile;
pub mod revenue_stat;

pub use order::{CsDisposition, DiscountRates, OrderRecord, OrderStatus, Pricing, RawOrderRecord};
pub use profile::{BusinessTaxStandard, PartnerProfile, SellerProfile};
pub use revenue_stat::{PartnerRevenueStat, RecordContribution, ReportingWindow};
