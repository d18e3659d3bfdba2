//! Department entities.

pub mod model;

pub use model::{Department, DepartmentHeadcount, DepartmentRef, NewDepartment};
