//! # hrportal-core
//!
//! Core crate for the HR portal. Contains the configuration schema and
//! loader, and the unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other portal crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
