//! Leave requests and their approval workflow.

pub mod service;

pub use service::{LeaveInput, LeaveService};
