use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A partner's registered tax category. Determines how post-tax net profit
/// is derived from gross proceeds during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessTaxStandard {
    /// General taxpayer ("일반"): net profit is proceeds less 10%
    #[serde(rename = "일반")]
    General,
    /// Simplified taxpayer ("간이")
    #[serde(rename = "간이")]
    Simplified,
    /// Non-business individual ("비사업자"), settled like a simplified payer
    #[serde(rename = "비사업자")]
    NonBusiness,
    /// Tax-exempt ("면세"): proceeds pass through unadjusted
    #[serde(rename = "면세")]
    Exempt,
    /// Unrecognized category; treated like tax-exempt
    #[serde(other)]
    Unknown,
}

/// Contracted supplier partner, keyed by provider name.
///
/// Provider name is the identity used for financial-record joins; it is not
/// the partner's display/account name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerProfile {
    pub provider_name: String,
    /// Commission retained by the operator on its own channels
    pub lofa_fee_rate: Decimal,
    /// Commission retained by the operator on external channels
    pub other_fee_rate: Decimal,
    pub business_tax_standard: BusinessTaxStandard,
    /// Declared category tags, echoed into the partner's stat row
    #[serde(default)]
    pub product_categories: Vec<String>,
}

/// Sales platform/channel and its commission rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerProfile {
    pub name: String,
    pub fee_rate: Decimal,
}
