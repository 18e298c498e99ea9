use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::revenue::models::{OrderRecord, PartnerRevenueStat, ReportingWindow};
use crate::modules::revenue::repositories::RecordSource;
use crate::modules::revenue::services::RevenueCalculator;

/// Service wiring the record source to the settlement engine.
///
/// Fetches and enriches every order line in the window before aggregation
/// begins; the first bad line aborts the whole call, so callers never see
/// partial settlement figures.
pub struct RevenueService<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> RevenueService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Aggregate per-partner settlement statistics for an inclusive
    /// calendar-date window.
    ///
    /// The window is not re-validated here: a start date after the end date
    /// simply matches no orders and yields an empty list, the same as any
    /// other empty window.
    ///
    /// # Errors
    /// Propagates fatal data-integrity errors from record enrichment; a
    /// partner without a profile row in the category map is not one of
    /// them.
    pub fn get_revenue_stats(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PartnerRevenueStat>> {
        let window = ReportingWindow::from_dates(start_date, end_date);

        info!(
            "Aggregating revenue stats: start={}, end={}",
            window.start_str(),
            window.end_str()
        );

        let raws = self.source.orders_in_window(window.start, window.end);
        let records =
            OrderRecord::enrich_all(raws, self.source.partner_profiles(), self.source.seller_profiles())?;

        let stats = RevenueCalculator::compute_revenue_stats(
            &window,
            &records,
            self.source.partner_profiles(),
        );

        if stats.is_empty() {
            warn!(
                "No settlement rows for window {} to {}",
                window.start_str(),
                window.end_str()
            );
        } else {
            info!(
                "Aggregated {} order lines into {} partner rows",
                records.len(),
                stats.len()
            );
        }

        Ok(stats)
    }
}
