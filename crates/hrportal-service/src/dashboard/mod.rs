//! Read-only aggregates for the HR dashboard.

pub mod service;

pub use service::DashboardService;
