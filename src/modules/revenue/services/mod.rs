pub mod revenue_calculator;
pub mod revenue_service;

pub use revenue_calculator::RevenueCalculator;
pub use revenue_service::RevenueService;
