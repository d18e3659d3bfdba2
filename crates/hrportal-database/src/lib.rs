//! # hrportal-database
//!
//! Persistence for the HR portal. The [`store`] module defines one trait
//! per table family; [`repositories`] implements them on PostgreSQL and
//! [`memory`] implements them on process-local tables. Callers receive a
//! [`Stores`] bundle and never see which backend is behind it.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::Stores;
