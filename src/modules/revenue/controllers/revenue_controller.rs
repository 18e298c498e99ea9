use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::core::{AppError, Result};
use crate::modules::revenue::repositories::InMemoryOrderRepository;
use crate::modules::revenue::services::RevenueService;

/// Concrete service type served by the HTTP surface.
pub type AppRevenueService = RevenueService<InMemoryOrderRepository>;

/// Query parameters for the revenue stats endpoint
#[derive(Debug, Deserialize)]
pub struct RevenueStatsQuery {
    /// Start date of the settlement window (inclusive, format: YYYY-MM-DD)
    pub start_date: String,
    /// End date of the settlement window (inclusive, format: YYYY-MM-DD)
    pub end_date: String,
}

/// GET /revenue/stats
///
/// Returns one settlement row per partner active in the window. An empty
/// window returns an empty list; the presentation side renders that as an
/// explicit no-data state.
pub async fn get_revenue_stats(
    service: web::Data<AppRevenueService>,
    query: web::Query<RevenueStatsQuery>,
) -> Result<HttpResponse> {
    let start_date = parse_date("start_date", &query.start_date)?;
    let end_date = parse_date("end_date", &query.end_date)?;

    let stats = service.get_revenue_stats(start_date, end_date).map_err(|e| {
        error!("Revenue stats aggregation failed: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(stats))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "invalid {} '{}', expected YYYY-MM-DD",
            field, value
        ))
    })
}

/// Register revenue routes on the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/revenue/stats", web::get().to(get_revenue_stats));
}
