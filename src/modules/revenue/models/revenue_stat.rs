use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inclusive reporting window for one aggregation call.
///
/// Callers pass calendar dates; the window expands them to full-day
/// boundaries (00:00:00 through 23:59:59) so a day's last orders are never
/// dropped by a midnight bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportingWindow {
    pub fn from_dates(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).expect("valid wall-clock time");
        Self {
            start: start_date.and_time(NaiveTime::MIN),
            end: end_date.and_time(end_of_day),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// One order line's contribution to a partner's running totals.
///
/// Produced by the settlement formulas in the revenue calculator; every
/// field is additive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordContribution {
    pub lofa_sales_amount: Decimal,
    pub other_sales_amount: Decimal,
    pub total_sales_amount: Decimal,
    pub partner_settlement: Decimal,
    pub platform_fee: Decimal,
    pub lofa_discount_levy: Decimal,
    pub proceeds: Decimal,
    pub net_profit_after_tax: Decimal,
}

/// Per-partner settlement statistics over one reporting window.
///
/// Rows live only for the duration of one aggregation call: created on the
/// first order line seen for a partner, accumulated additively, finalized
/// once the scan completes, then handed to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerRevenueStat {
    /// Window start, echoed verbatim into every row (YYYY-MM-DD)
    pub start_date: String,
    /// Window end, echoed verbatim into every row (YYYY-MM-DD)
    pub end_date: String,
    pub partner_name: String,
    /// Sales through the operator's own channels
    pub lofa_sales_amount: Decimal,
    /// Sales through external platforms
    pub other_sales_amount: Decimal,
    pub total_sales_amount: Decimal,
    /// Amount owed back to the partner
    pub partner_settlement: Decimal,
    /// Amount retained by the selling platforms
    pub platform_fee: Decimal,
    /// Discount cost borne by the operator
    pub lofa_discount_levy: Decimal,
    pub proceeds: Decimal,
    pub net_profit_after_tax: Decimal,
    /// Net profit as a percentage of total sales; zero when there were no
    /// sales
    pub return_rate: Decimal,
    /// Partner's declared category tags; empty when no profile was found
    pub product_category: Vec<String>,
}

impl PartnerRevenueStat {
    /// Zero-initialized row for a partner's first order line in the window.
    pub fn new(window: &ReportingWindow, partner_name: String) -> Self {
        Self {
            start_date: window.start_str(),
            end_date: window.end_str(),
            partner_name,
            lofa_sales_amount: Decimal::ZERO,
            other_sales_amount: Decimal::ZERO,
            total_sales_amount: Decimal::ZERO,
            partner_settlement: Decimal::ZERO,
            platform_fee: Decimal::ZERO,
            lofa_discount_levy: Decimal::ZERO,
            proceeds: Decimal::ZERO,
            net_profit_after_tax: Decimal::ZERO,
            return_rate: Decimal::ZERO,
            product_category: Vec::new(),
        }
    }

    /// Add one order line's figures into the running totals.
    pub fn accumulate(&mut self, c: &RecordContribution) {
        self.lofa_sales_amount += c.lofa_sales_amount;
        self.other_sales_amount += c.other_sales_amount;
        self.total_sales_amount += c.total_sales_amount;
        self.partner_settlement += c.partner_settlement;
        self.platform_fee += c.platform_fee;
        self.lofa_discount_levy += c.lofa_discount_levy;
        self.proceeds += c.proceeds;
        self.net_profit_after_tax += c.net_profit_after_tax;
    }

    /// Merge a partial aggregate for the same partner, summing the additive
    /// fields. The caller must call [`finalize`](Self::finalize) again after
    /// all partials are merged: return rate is derived from totals, never
    /// summed.
    pub fn merge(&mut self, other: &PartnerRevenueStat) {
        self.lofa_sales_amount += other.lofa_sales_amount;
        self.other_sales_amount += other.other_sales_amount;
        self.total_sales_amount += other.total_sales_amount;
        self.partner_settlement += other.partner_settlement;
        self.platform_fee += other.platform_fee;
        self.lofa_discount_levy += other.lofa_discount_levy;
        self.proceeds += other.proceeds;
        self.net_profit_after_tax += other.net_profit_after_tax;
    }

    /// Derive the return rate once all order lines are accumulated.
    pub fn finalize(&mut self) {
        self.return_rate = if self.total_sales_amount != Decimal::ZERO {
            self.net_profit_after_tax / self.total_sales_amount * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }
}
