//! Dashboard aggregation.

use std::sync::Arc;

use hrportal_core::error::AppError;
use hrportal_database::Stores;
use hrportal_database::store::DashboardStore;
use hrportal_entity::dashboard::{EmployeesOverview, LeaveStatusCount};
use hrportal_entity::department::DepartmentHeadcount;

/// Serves dashboard aggregates.
#[derive(Clone)]
pub struct DashboardService {
    dashboard: Arc<dyn DashboardStore>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(stores: &Stores) -> Self {
        Self {
            dashboard: stores.dashboard.clone(),
        }
    }

    /// Headline counts and up to five upcoming projects.
    pub async fn employees_overview(&self) -> Result<EmployeesOverview, AppError> {
        self.dashboard.overview().await
    }

    /// Active staff per department, empty departments included.
    pub async fn distribution_by_department(&self) -> Result<Vec<DepartmentHeadcount>, AppError> {
        self.dashboard.headcount_by_department().await
    }

    /// Leave requests per status.
    pub async fn leave_status_breakdown(&self) -> Result<Vec<LeaveStatusCount>, AppError> {
        self.dashboard.leave_status_breakdown().await
    }
}
