// Order records as they flow through settlement.
//
// Records arrive from the order store in a loose shape (RawOrderRecord):
// discount fields are optional and commission rates are not yet resolved.
// Enrichment turns them into OrderRecord, where the discount campaign is a
// sum type and both commission rates are statically present, so the
// aggregation engine never re-checks field presence at runtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::channels::is_house_channel;
use crate::core::{AppError, Result};
use crate::modules::revenue::models::profile::{
    BusinessTaxStandard, PartnerProfile, SellerProfile,
};

/// Fulfillment status of an order line. Only delivered lines ("배송")
/// count toward sales totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order received, awaiting partner confirmation
    #[serde(rename = "접수")]
    Received,
    /// Waybill entered by the partner
    #[serde(rename = "송장")]
    Waybill,
    /// Shipped out / delivered
    #[serde(rename = "배송")]
    Delivered,
    #[serde(other)]
    Unknown,
}

/// Customer-service disposition of an order line. Only "정상" (no
/// cancellation or return in effect) counts toward sales totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CsDisposition {
    #[serde(rename = "정상")]
    Normal,
    #[serde(rename = "교환")]
    Exchange,
    #[serde(rename = "반품")]
    Return,
    #[serde(rename = "취소")]
    Cancel,
    #[serde(other)]
    Unknown,
}

/// Order line as stored by the order store, before enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrderRecord {
    /// Date and time the order was recorded
    pub order_date: chrono::NaiveDateTime,
    /// Sales channel/platform name
    pub seller: String,
    /// Supplying partner, by provider name
    pub partner_name: String,
    pub product_name: String,
    /// Unit sale price, pre-discount
    pub price: Decimal,
    /// Quantity sold
    pub amount: u32,
    pub order_status: OrderStatus,
    pub cs: CsDisposition,
    /// Whether a discount campaign applies to this line
    pub is_discounted: bool,
    // Discount campaign fields. Present only when is_discounted; their
    // absence on a discounted line is a fatal data error.
    #[serde(default)]
    pub lofa_discount_levy_rate: Option<Decimal>,
    #[serde(default)]
    pub partner_discount_levy_rate: Option<Decimal>,
    #[serde(default)]
    pub platform_discount_levy_rate: Option<Decimal>,
    #[serde(default)]
    pub lofa_adjustment_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub platform_adjustment_fee_rate: Option<Decimal>,
}

/// Discount campaign rates, all percentages in the 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountRates {
    /// Share of the discount borne by the operator
    pub lofa_discount_levy_rate: Decimal,
    /// Share of the discount borne by the partner
    pub partner_discount_levy_rate: Decimal,
    /// Share of the discount borne by the platform
    pub platform_discount_levy_rate: Decimal,
    /// Corrective fee applied to the partner settlement base
    pub lofa_adjustment_fee_rate: Decimal,
    /// Corrective fee applied to the platform settlement base
    pub platform_adjustment_fee_rate: Decimal,
}

impl DiscountRates {
    /// Total sticker discount applied to the sale price.
    pub fn total_discount_rate(&self) -> Decimal {
        self.lofa_discount_levy_rate
            + self.partner_discount_levy_rate
            + self.platform_discount_levy_rate
    }
}

/// Pricing mode of an order line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pricing {
    /// Sold at list price
    Normal,
    /// Sold under a discount campaign with the given rate breakdown
    Discounted(DiscountRates),
}

/// Fully enriched order line, ready for settlement aggregation.
///
/// Commission rates are resolved from the partner and seller profiles at
/// enrichment time; the engine itself never touches the profile maps except
/// for category tagging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_date: chrono::NaiveDateTime,
    pub seller: String,
    pub partner_name: String,
    pub product_name: String,
    pub price: Decimal,
    pub amount: u32,
    pub order_status: OrderStatus,
    pub cs: CsDisposition,
    pub pricing: Pricing,
    /// Partner commission for this line's channel class (house vs. other)
    pub common_fee_rate: Decimal,
    /// Platform commission; zero (and unused) on house channels
    pub platform_fee_rate: Decimal,
    /// Partner's registered tax category, copied from the profile
    pub business_tax_standard: BusinessTaxStandard,
}

impl OrderRecord {
    /// Enrich a raw order line with commission rates and a statically
    /// complete pricing mode.
    ///
    /// # Errors
    /// Fatal data-integrity errors, each naming the offending product:
    /// - a discounted line missing any of the five discount rates
    /// - no partner profile to resolve the partner commission from
    /// - no seller profile for a non-house channel
    pub fn from_raw(
        raw: RawOrderRecord,
        partners: &HashMap<String, PartnerProfile>,
        sellers: &HashMap<String, SellerProfile>,
    ) -> Result<Self> {
        let partner = partners.get(&raw.partner_name).ok_or_else(|| {
            AppError::data_integrity(format!(
                "no partner profile for '{}' while settling product '{}'",
                raw.partner_name, raw.product_name
            ))
        })?;

        let is_house = is_house_channel(&raw.seller);
        let common_fee_rate = if is_house {
            partner.lofa_fee_rate
        } else {
            partner.other_fee_rate
        };

        let platform_fee_rate = if is_house {
            Decimal::ZERO
        } else {
            sellers
                .get(&raw.seller)
                .map(|s| s.fee_rate)
                .ok_or_else(|| {
                    AppError::data_integrity(format!(
                        "no platform fee rate for seller '{}' while settling product '{}'",
                        raw.seller, raw.product_name
                    ))
                })?
        };

        let pricing = if raw.is_discounted {
            match (
                raw.lofa_discount_levy_rate,
                raw.partner_discount_levy_rate,
                raw.platform_discount_levy_rate,
                raw.lofa_adjustment_fee_rate,
                raw.platform_adjustment_fee_rate,
            ) {
                (
                    Some(lofa_discount_levy_rate),
                    Some(partner_discount_levy_rate),
                    Some(platform_discount_levy_rate),
                    Some(lofa_adjustment_fee_rate),
                    Some(platform_adjustment_fee_rate),
                ) => Pricing::Discounted(DiscountRates {
                    lofa_discount_levy_rate,
                    partner_discount_levy_rate,
                    platform_discount_levy_rate,
                    lofa_adjustment_fee_rate,
                    platform_adjustment_fee_rate,
                }),
                _ => {
                    return Err(AppError::data_integrity(format!(
                        "discounted order for product '{}' is missing discount rate fields",
                        raw.product_name
                    )))
                }
            }
        } else {
            Pricing::Normal
        };

        Ok(Self {
            order_date: raw.order_date,
            seller: raw.seller,
            partner_name: raw.partner_name,
            product_name: raw.product_name,
            price: raw.price,
            amount: raw.amount,
            order_status: raw.order_status,
            cs: raw.cs,
            pricing,
            common_fee_rate,
            platform_fee_rate,
            business_tax_standard: partner.business_tax_standard,
        })
    }

    /// Enrich a whole batch, aborting on the first bad record.
    ///
    /// Settlement is all-or-nothing: one invalid line invalidates the whole
    /// window, so no partial batch is ever produced.
    pub fn enrich_all(
        raws: Vec<RawOrderRecord>,
        partners: &HashMap<String, PartnerProfile>,
        sellers: &HashMap<String, SellerProfile>,
    ) -> Result<Vec<Self>> {
        raws.into_iter()
            .map(|raw| Self::from_raw(raw, partners, sellers))
            .collect()
    }

    /// Whether this line was sold through one of the operator's own channels.
    pub fn is_house_channel(&self) -> bool {
        is_house_channel(&self.seller)
    }

    /// Whether this line counts toward sales totals: delivered and with a
    /// normal CS disposition.
    pub fn is_qualifying(&self) -> bool {
        self.cs == CsDisposition::Normal && self.order_status == OrderStatus::Delivered
    }

    /// Pre-discount reference total (`price * amount`).
    pub fn normal_price_total(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}
