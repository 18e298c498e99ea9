use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::core::channels::{platform_settlement_standard, PlatformSettlementStandard};
use crate::modules::revenue::models::{
    BusinessTaxStandard, OrderRecord, PartnerProfile, PartnerRevenueStat, Pricing,
    RecordContribution, ReportingWindow,
};

/// Post-tax retention factor applied under the general and simplified tax
/// standards (10% set aside for tax).
const AFTER_TAX_FACTOR: Decimal = Decimal::from_parts(9, 0, 0, false, 1); // 0.9

/// Settlement aggregation engine.
///
/// A pure, synchronous fold over already-fetched order lines: no I/O, no
/// shared state, one accumulator map per call. Aggregation is commutative
/// over the record set, so record order never affects the result.
pub struct RevenueCalculator;

impl RevenueCalculator {
    /// Aggregate per-partner settlement statistics over one window.
    ///
    /// Rows are returned in first-seen partner order. Partners missing from
    /// the profile map still aggregate normally; only their category tags
    /// come back empty. An empty record set yields an empty list.
    pub fn compute_revenue_stats(
        window: &ReportingWindow,
        records: &[OrderRecord],
        partners: &HashMap<String, PartnerProfile>,
    ) -> Vec<PartnerRevenueStat> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut stats: Vec<PartnerRevenueStat> = Vec::new();

        for record in records {
            let contribution = Self::record_contribution(record);

            let slot = match index.get(&record.partner_name) {
                Some(&i) => i,
                None => {
                    stats.push(PartnerRevenueStat::new(window, record.partner_name.clone()));
                    index.insert(record.partner_name.clone(), stats.len() - 1);
                    stats.len() - 1
                }
            };

            let stat = &mut stats[slot];
            stat.accumulate(&contribution);
            // Overwritten on every line; harmless since the tags come from
            // one static profile, not per-record data.
            stat.product_category = partners
                .get(&record.partner_name)
                .map(|p| p.product_categories.clone())
                .unwrap_or_default();
        }

        for stat in &mut stats {
            stat.finalize();
        }

        stats
    }

    /// Settlement figures for a single order line.
    fn record_contribution(record: &OrderRecord) -> RecordContribution {
        let is_lofa = record.is_house_channel();
        let qualifying = record.is_qualifying();
        let quantity = Decimal::from(record.amount);
        let hundred = Decimal::ONE_HUNDRED;

        match &record.pricing {
            Pricing::Normal => {
                let sale_total = if qualifying {
                    record.price * quantity
                } else {
                    Decimal::ZERO
                };
                let (lofa_sales_amount, other_sales_amount) = if is_lofa {
                    (sale_total, Decimal::ZERO)
                } else {
                    (Decimal::ZERO, sale_total)
                };
                let total_sales_amount = lofa_sales_amount + other_sales_amount;

                let partner_settlement =
                    total_sales_amount * (hundred - record.common_fee_rate) / hundred;
                let platform_settlement = if is_lofa {
                    total_sales_amount
                } else {
                    total_sales_amount * (hundred - record.platform_fee_rate) / hundred
                };
                let platform_fee = total_sales_amount - platform_settlement;
                let proceeds = total_sales_amount - partner_settlement - platform_fee;

                // A non-qualifying list-price line never contributes net
                // profit, whatever its tax standard says.
                let net_profit_after_tax = if qualifying {
                    Self::net_profit_after_tax(
                        record.business_tax_standard,
                        proceeds,
                        platform_settlement,
                        partner_settlement,
                    )
                } else {
                    Decimal::ZERO
                };

                RecordContribution {
                    lofa_sales_amount,
                    other_sales_amount,
                    total_sales_amount,
                    partner_settlement,
                    platform_fee,
                    lofa_discount_levy: Decimal::ZERO,
                    proceeds,
                    net_profit_after_tax,
                }
            }
            Pricing::Discounted(rates) => {
                let total_discount_rate = rates.total_discount_rate();
                let sale_total = if qualifying {
                    record.price * (hundred - total_discount_rate) / hundred * quantity
                } else {
                    Decimal::ZERO
                };
                let (lofa_sales_amount, other_sales_amount) = if is_lofa {
                    (sale_total, Decimal::ZERO)
                } else {
                    (Decimal::ZERO, sale_total)
                };
                let total_sales_amount = lofa_sales_amount + other_sales_amount;

                // Fee bases run off the undiscounted reference total, even
                // for lines that contributed no sales. The net-profit
                // override above is deliberately absent on this branch; a
                // non-qualifying discounted line can carry a non-zero
                // settlement baseline through to proceeds, matching the
                // established settlement sheet.
                let normal_price_total = record.normal_price_total();

                let partner_settlement = normal_price_total
                    * (hundred - record.common_fee_rate - rates.partner_discount_levy_rate
                        + rates.lofa_adjustment_fee_rate)
                    / hundred;

                let platform_settlement = if is_lofa {
                    total_sales_amount
                } else {
                    match platform_settlement_standard(&record.seller) {
                        PlatformSettlementStandard::ListPrice => {
                            normal_price_total
                                * (hundred
                                    - record.platform_fee_rate
                                    - rates.lofa_discount_levy_rate
                                    - rates.partner_discount_levy_rate
                                    + rates.platform_adjustment_fee_rate)
                                / hundred
                        }
                        PlatformSettlementStandard::DiscountedPrice => {
                            (normal_price_total
                                * (hundred
                                    - rates.lofa_discount_levy_rate
                                    - rates.partner_discount_levy_rate)
                                / hundred)
                                * (hundred - record.platform_fee_rate
                                    + rates.platform_adjustment_fee_rate)
                                / hundred
                        }
                    }
                };

                let platform_fee = total_sales_amount - platform_settlement;
                let lofa_discount_levy =
                    normal_price_total * rates.lofa_discount_levy_rate / hundred;
                let proceeds = total_sales_amount - partner_settlement - platform_fee;
                let net_profit_after_tax = Self::net_profit_after_tax(
                    record.business_tax_standard,
                    proceeds,
                    platform_settlement,
                    partner_settlement,
                );

                RecordContribution {
                    lofa_sales_amount,
                    other_sales_amount,
                    total_sales_amount,
                    partner_settlement,
                    platform_fee,
                    lofa_discount_levy,
                    proceeds,
                    net_profit_after_tax,
                }
            }
        }
    }

    /// Post-tax net profit by the partner's registered tax category.
    fn net_profit_after_tax(
        standard: BusinessTaxStandard,
        proceeds: Decimal,
        platform_settlement: Decimal,
        partner_settlement: Decimal,
    ) -> Decimal {
        match standard {
            BusinessTaxStandard::General => proceeds * AFTER_TAX_FACTOR,
            BusinessTaxStandard::Simplified | BusinessTaxStandard::NonBusiness => {
                platform_settlement * AFTER_TAX_FACTOR - partner_settlement
            }
            BusinessTaxStandard::Exempt | BusinessTaxStandard::Unknown => proceeds,
        }
    }
}
