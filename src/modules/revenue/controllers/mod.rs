pub mod revenue_controller;

pub use revenue_controller::{configure, AppRevenueService};
