//! Persistence traits.
//!
//! Services depend on these traits only. Every method is a suspending call;
//! neither backend holds a lock across an await in caller code.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use hrportal_core::AppResult;
use hrportal_entity::account::{Account, NewAccount};
use hrportal_entity::dashboard::{EmployeesOverview, LeaveStatusCount};
use hrportal_entity::department::{Department, DepartmentHeadcount, NewDepartment};
use hrportal_entity::leave::{LeaveRequest, LeaveStatus, LeaveWithRequester, NewLeaveRequest};
use hrportal_entity::payslip::{NewPayslip, Payslip};
use hrportal_entity::principal::PasswordDigest;
use hrportal_entity::project::{NewProject, Project, ProjectWithAssignee};
use hrportal_entity::staff::{
    EmploymentStatus, NewStaffMember, StaffMember, StaffProfileUpdate, StaffUpdate,
    StaffWithDepartment,
};

use crate::memory::MemoryStore;
use crate::repositories::{
    AccountRepository, DashboardRepository, DepartmentRepository, LeaveRepository,
    PayslipRepository, ProjectRepository, StaffRepository,
};

/// Back-office accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;
    /// Find an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;
    /// Insert an account. A taken email is a `Conflict`.
    async fn create(&self, data: &NewAccount) -> AppResult<Account>;
    /// Replace the password digest. Returns `false` if the account is gone.
    async fn update_password(&self, id: Uuid, digest: &PasswordDigest) -> AppResult<bool>;
    /// Stamp the last successful login.
    async fn record_login(&self, id: Uuid) -> AppResult<()>;
}

/// Employee records.
#[async_trait]
pub trait StaffStore: Send + Sync {
    /// Find a staff member by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StaffMember>>;
    /// Find a staff member by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<StaffMember>>;
    /// List staff members whose status is in `statuses`, by last then first name.
    async fn list(&self, statuses: &[EmploymentStatus]) -> AppResult<Vec<StaffWithDepartment>>;
    /// Insert a staff member. A taken email or employee code is a `Conflict`.
    async fn create(&self, data: &NewStaffMember) -> AppResult<StaffMember>;
    /// Apply an HR update.
    async fn update(&self, id: Uuid, data: &StaffUpdate) -> AppResult<Option<StaffMember>>;
    /// Apply a self-service profile update.
    async fn update_profile(
        &self,
        id: Uuid,
        data: &StaffProfileUpdate,
    ) -> AppResult<Option<StaffMember>>;
    /// Replace the password digest. Returns `false` if the record is gone.
    async fn update_password(&self, id: Uuid, digest: &PasswordDigest) -> AppResult<bool>;
    /// Delete a staff member together with their leave requests and payslips.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Leave requests.
#[async_trait]
pub trait LeaveStore: Send + Sync {
    /// File a new `Pending` request.
    async fn create(&self, data: &NewLeaveRequest) -> AppResult<LeaveRequest>;
    /// Find a request by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LeaveRequest>>;
    /// Every request with its requester, newest first.
    async fn list_all(&self) -> AppResult<Vec<LeaveWithRequester>>;
    /// One staff member's requests, latest start date first.
    async fn list_for_staff(&self, staff_member_id: Uuid) -> AppResult<Vec<LeaveRequest>>;
    /// Record a reviewer decision.
    ///
    /// The status write and, for `Approved`, the requester's move to
    /// `on-leave` commit together or not at all.
    async fn apply_decision(&self, id: Uuid, status: LeaveStatus)
    -> AppResult<Option<LeaveRequest>>;
}

/// Departments.
#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// All departments by name.
    async fn list(&self) -> AppResult<Vec<Department>>;
    /// Find a department by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>>;
    /// Insert a department. A taken name is a `Conflict`.
    async fn create(&self, data: &NewDepartment) -> AppResult<Department>;
    /// Replace name and description.
    async fn update(&self, id: Uuid, data: &NewDepartment) -> AppResult<Option<Department>>;
    /// Delete a department; members keep their records with no department.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Projects.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects with assignees, newest first.
    async fn list(&self) -> AppResult<Vec<ProjectWithAssignee>>;
    /// Find a project by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectWithAssignee>>;
    /// Insert a project.
    async fn create(&self, data: &NewProject) -> AppResult<Project>;
    /// Replace every project field.
    async fn update(&self, id: Uuid, data: &NewProject) -> AppResult<Option<Project>>;
    /// Delete a project.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Payslips.
#[async_trait]
pub trait PayslipStore: Send + Sync {
    /// All payslips, newest first.
    async fn list(&self) -> AppResult<Vec<Payslip>>;
    /// One staff member's payslips, latest period first.
    async fn list_for_staff(&self, staff_member_id: Uuid) -> AppResult<Vec<Payslip>>;
    /// Find a payslip by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payslip>>;
    /// Insert a payslip. A taken reference is a `Conflict`.
    async fn create(&self, data: &NewPayslip) -> AppResult<Payslip>;
    /// Replace every payslip field except the reference.
    async fn update(&self, id: Uuid, data: &NewPayslip) -> AppResult<Option<Payslip>>;
    /// Delete a payslip.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Read-only aggregates.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Headline counts and upcoming projects.
    async fn overview(&self) -> AppResult<EmployeesOverview>;
    /// Active staff per department, including empty departments, by name.
    async fn headcount_by_department(&self) -> AppResult<Vec<DepartmentHeadcount>>;
    /// Leave requests per status. Statuses with no requests are omitted.
    async fn leave_status_breakdown(&self) -> AppResult<Vec<LeaveStatusCount>>;
}

/// Every store the services need, behind trait objects.
#[derive(Clone)]
pub struct Stores {
    /// Back-office accounts.
    pub accounts: Arc<dyn AccountStore>,
    /// Employee records.
    pub staff: Arc<dyn StaffStore>,
    /// Leave requests.
    pub leaves: Arc<dyn LeaveStore>,
    /// Departments.
    pub departments: Arc<dyn DepartmentStore>,
    /// Projects.
    pub projects: Arc<dyn ProjectStore>,
    /// Payslips.
    pub payslips: Arc<dyn PayslipStore>,
    /// Dashboard aggregates.
    pub dashboard: Arc<dyn DashboardStore>,
}

impl Stores {
    /// Stores backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            accounts: Arc::new(AccountRepository::new(pool.clone())),
            staff: Arc::new(StaffRepository::new(pool.clone())),
            leaves: Arc::new(LeaveRepository::new(pool.clone())),
            departments: Arc::new(DepartmentRepository::new(pool.clone())),
            projects: Arc::new(ProjectRepository::new(pool.clone())),
            payslips: Arc::new(PayslipRepository::new(pool.clone())),
            dashboard: Arc::new(DashboardRepository::new(pool)),
        }
    }

    /// Stores backed by one shared [`MemoryStore`].
    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    /// Stores backed by an existing [`MemoryStore`].
    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            accounts: store.clone(),
            staff: store.clone(),
            leaves: store.clone(),
            departments: store.clone(),
            projects: store.clone(),
            payslips: store.clone(),
            dashboard: store,
        }
    }
}
