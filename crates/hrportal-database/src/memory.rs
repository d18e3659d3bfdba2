//! Process-local implementation of every store trait.
//!
//! All tables sit behind one [`RwLock`], so each trait method is atomic
//! with respect to every other. Used by the test suites and by
//! `database.backend = "memory"`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use hrportal_core::error::AppError;
use hrportal_core::result::AppResult;
use hrportal_entity::account::{Account, NewAccount};
use hrportal_entity::dashboard::{EmployeesOverview, LeaveStatusCount};
use hrportal_entity::department::{Department, DepartmentHeadcount, DepartmentRef, NewDepartment};
use hrportal_entity::leave::{LeaveRequest, LeaveStatus, LeaveWithRequester, NewLeaveRequest};
use hrportal_entity::payslip::{NewPayslip, Payslip};
use hrportal_entity::principal::PasswordDigest;
use hrportal_entity::project::{NewProject, Project, ProjectStatus, ProjectWithAssignee};
use hrportal_entity::staff::{
    EmploymentStatus, NewStaffMember, StaffMember, StaffProfileUpdate, StaffSummary, StaffUpdate,
    StaffWithDepartment,
};

use crate::store::{
    AccountStore, DashboardStore, DepartmentStore, LeaveStore, PayslipStore, ProjectStore,
    StaffStore,
};

#[derive(Default)]
struct Tables {
    accounts: HashMap<Uuid, Account>,
    staff: HashMap<Uuid, StaffMember>,
    leaves: HashMap<Uuid, LeaveRequest>,
    departments: HashMap<Uuid, Department>,
    projects: HashMap<Uuid, Project>,
    payslips: HashMap<Uuid, Payslip>,
}

impl Tables {
    fn staff_summary(&self, id: Option<Uuid>) -> Option<StaffSummary> {
        id.and_then(|id| self.staff.get(&id)).map(StaffSummary::from)
    }

    fn staff_email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.staff
            .values()
            .any(|s| s.email == email && Some(s.id) != except)
    }

    fn employee_code_taken(&self, code: &str, except: Option<Uuid>) -> bool {
        self.staff
            .values()
            .any(|s| s.employee_code.as_deref() == Some(code) && Some(s.id) != except)
    }

    fn department_name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.departments
            .values()
            .any(|d| d.name == name && Some(d.id) != except)
    }

    fn with_assignee(&self, project: &Project) -> ProjectWithAssignee {
        ProjectWithAssignee {
            project: project.clone(),
            employee: self.staff_summary(project.staff_member_id),
        }
    }
}

/// In-memory tables implementing every store trait.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn email_conflict() -> AppError {
    AppError::conflict("Email is already registered")
}

fn newest_first<T>(items: &mut [T], created_at: impl Fn(&T) -> chrono::DateTime<Utc>) {
    items.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        Ok(self.tables.read().await.accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let email = normalize_email(email);
        let tables = self.tables.read().await;
        Ok(tables.accounts.values().find(|a| a.email == email).cloned())
    }

    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        let email = normalize_email(&data.email);
        let mut tables = self.tables.write().await;
        if tables.accounts.values().any(|a| a.email == email) {
            return Err(email_conflict());
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            username: data.username.trim().to_string(),
            email,
            password_hash: data.password_hash.as_str().to_string(),
            role: data.role,
            profile_picture: None,
            is_active: true,
            last_login: None,
            department_id: None,
            created_at: now,
            updated_at: now,
        };
        tables.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update_password(&self, id: Uuid, digest: &PasswordDigest) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(match tables.accounts.get_mut(&id) {
            Some(account) => {
                account.password_hash = digest.as_str().to_string();
                account.updated_at = Utc::now();
                true
            }
            None => false,
        })
    }

    async fn record_login(&self, id: Uuid) -> AppResult<()> {
        if let Some(account) = self.tables.write().await.accounts.get_mut(&id) {
            account.last_login = Some(Utc::now());
        }
        Ok(())
    }
}

#[async_trait]
impl StaffStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StaffMember>> {
        Ok(self.tables.read().await.staff.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<StaffMember>> {
        let email = normalize_email(email);
        let tables = self.tables.read().await;
        Ok(tables.staff.values().find(|s| s.email == email).cloned())
    }

    async fn list(&self, statuses: &[EmploymentStatus]) -> AppResult<Vec<StaffWithDepartment>> {
        let tables = self.tables.read().await;
        let mut listed: Vec<StaffWithDepartment> = tables
            .staff
            .values()
            .filter(|s| statuses.contains(&s.status))
            .map(|s| StaffWithDepartment {
                staff: s.clone(),
                department: s
                    .department_id
                    .and_then(|id| tables.departments.get(&id))
                    .map(|d| DepartmentRef {
                        id: d.id,
                        name: d.name.clone(),
                    }),
            })
            .collect();
        listed.sort_by(|a, b| {
            (&a.staff.last_name, &a.staff.first_name)
                .cmp(&(&b.staff.last_name, &b.staff.first_name))
        });
        Ok(listed)
    }

    async fn create(&self, data: &NewStaffMember) -> AppResult<StaffMember> {
        let email = normalize_email(&data.email);
        let mut tables = self.tables.write().await;
        if tables.staff_email_taken(&email, None) {
            return Err(email_conflict());
        }
        if let Some(code) = &data.employee_code {
            if tables.employee_code_taken(code, None) {
                return Err(AppError::conflict("Employee ID is already in use"));
            }
        }

        let now = Utc::now();
        let staff = StaffMember {
            id: Uuid::new_v4(),
            employee_code: data.employee_code.clone(),
            first_name: data.first_name.trim().to_string(),
            last_name: data.last_name.trim().to_string(),
            email,
            password_hash: data.password_hash.as_str().to_string(),
            role: data.role,
            date_of_birth: data.date_of_birth,
            hire_date: data.hire_date.unwrap_or_else(|| now.date_naive()),
            position: data.position.clone(),
            status: data.status,
            department_id: data.department_id,
            created_at: now,
            updated_at: now,
        };
        tables.staff.insert(staff.id, staff.clone());
        Ok(staff)
    }

    async fn update(&self, id: Uuid, data: &StaffUpdate) -> AppResult<Option<StaffMember>> {
        let mut tables = self.tables.write().await;
        let email = data.email.as_deref().map(normalize_email);
        if let Some(email) = &email {
            if tables.staff_email_taken(email, Some(id)) {
                return Err(email_conflict());
            }
        }
        if let Some(code) = &data.employee_code {
            if tables.employee_code_taken(code, Some(id)) {
                return Err(AppError::conflict("Employee ID is already in use"));
            }
        }

        let Some(staff) = tables.staff.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(code) = &data.employee_code {
            staff.employee_code = Some(code.clone());
        }
        if let Some(first_name) = &data.first_name {
            staff.first_name = first_name.clone();
        }
        if let Some(last_name) = &data.last_name {
            staff.last_name = last_name.clone();
        }
        if let Some(email) = email {
            staff.email = email;
        }
        if let Some(digest) = &data.password_hash {
            staff.password_hash = digest.as_str().to_string();
        }
        if let Some(role) = data.role {
            staff.role = role;
        }
        if let Some(date_of_birth) = data.date_of_birth {
            staff.date_of_birth = Some(date_of_birth);
        }
        if let Some(hire_date) = data.hire_date {
            staff.hire_date = hire_date;
        }
        if let Some(position) = &data.position {
            staff.position = Some(position.clone());
        }
        if let Some(status) = data.status {
            staff.status = status;
        }
        if let Some(department_id) = data.department_id {
            staff.department_id = Some(department_id);
        }
        staff.updated_at = Utc::now();
        Ok(Some(staff.clone()))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        data: &StaffProfileUpdate,
    ) -> AppResult<Option<StaffMember>> {
        let mut tables = self.tables.write().await;
        let Some(staff) = tables.staff.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(first_name) = &data.first_name {
            staff.first_name = first_name.clone();
        }
        if let Some(last_name) = &data.last_name {
            staff.last_name = last_name.clone();
        }
        if let Some(date_of_birth) = data.date_of_birth {
            staff.date_of_birth = Some(date_of_birth);
        }
        staff.updated_at = Utc::now();
        Ok(Some(staff.clone()))
    }

    async fn update_password(&self, id: Uuid, digest: &PasswordDigest) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(match tables.staff.get_mut(&id) {
            Some(staff) => {
                staff.password_hash = digest.as_str().to_string();
                staff.updated_at = Utc::now();
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.staff.remove(&id).is_none() {
            return Ok(false);
        }
        tables.leaves.retain(|_, l| l.staff_member_id != id);
        tables.payslips.retain(|_, p| p.staff_member_id != id);
        for project in tables.projects.values_mut() {
            if project.staff_member_id == Some(id) {
                project.staff_member_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl LeaveStore for MemoryStore {
    async fn create(&self, data: &NewLeaveRequest) -> AppResult<LeaveRequest> {
        let mut tables = self.tables.write().await;
        if !tables.staff.contains_key(&data.staff_member_id) {
            return Err(AppError::not_found("Staff member not found"));
        }

        let now = Utc::now();
        let leave = LeaveRequest {
            id: Uuid::new_v4(),
            staff_member_id: data.staff_member_id,
            leave_type: data.leave_type.clone(),
            start_date: data.start_date,
            end_date: data.end_date,
            reason: data.reason.clone(),
            status: LeaveStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tables.leaves.insert(leave.id, leave.clone());
        Ok(leave)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LeaveRequest>> {
        Ok(self.tables.read().await.leaves.get(&id).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<LeaveWithRequester>> {
        let tables = self.tables.read().await;
        let mut leaves: Vec<LeaveWithRequester> = tables
            .leaves
            .values()
            .map(|l| LeaveWithRequester {
                leave: l.clone(),
                employee: tables.staff_summary(Some(l.staff_member_id)),
            })
            .collect();
        newest_first(&mut leaves, |l| l.leave.created_at);
        Ok(leaves)
    }

    async fn list_for_staff(&self, staff_member_id: Uuid) -> AppResult<Vec<LeaveRequest>> {
        let tables = self.tables.read().await;
        let mut leaves: Vec<LeaveRequest> = tables
            .leaves
            .values()
            .filter(|l| l.staff_member_id == staff_member_id)
            .cloned()
            .collect();
        leaves.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(leaves)
    }

    async fn apply_decision(
        &self,
        id: Uuid,
        status: LeaveStatus,
    ) -> AppResult<Option<LeaveRequest>> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();

        let Some(leave) = tables.leaves.get_mut(&id) else {
            return Ok(None);
        };
        leave.status = status;
        leave.updated_at = now;
        let leave = leave.clone();

        if status == LeaveStatus::Approved {
            if let Some(staff) = tables.staff.get_mut(&leave.staff_member_id) {
                staff.status = EmploymentStatus::OnLeave;
                staff.updated_at = now;
            }
        }
        Ok(Some(leave))
    }
}

#[async_trait]
impl DepartmentStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Department>> {
        let tables = self.tables.read().await;
        let mut departments: Vec<Department> = tables.departments.values().cloned().collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        Ok(self.tables.read().await.departments.get(&id).cloned())
    }

    async fn create(&self, data: &NewDepartment) -> AppResult<Department> {
        let name = data.name.trim().to_string();
        let mut tables = self.tables.write().await;
        if tables.department_name_taken(&name, None) {
            return Err(AppError::conflict("Department name already exists"));
        }

        let now = Utc::now();
        let department = Department {
            id: Uuid::new_v4(),
            name,
            description: data.description.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn update(&self, id: Uuid, data: &NewDepartment) -> AppResult<Option<Department>> {
        let name = data.name.trim().to_string();
        let mut tables = self.tables.write().await;
        if tables.department_name_taken(&name, Some(id)) {
            return Err(AppError::conflict("Department name already exists"));
        }

        let Some(department) = tables.departments.get_mut(&id) else {
            return Ok(None);
        };
        department.name = name;
        department.description = data.description.clone();
        department.updated_at = Utc::now();
        Ok(Some(department.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.departments.remove(&id).is_none() {
            return Ok(false);
        }
        for staff in tables.staff.values_mut() {
            if staff.department_id == Some(id) {
                staff.department_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<ProjectWithAssignee>> {
        let tables = self.tables.read().await;
        let mut projects: Vec<ProjectWithAssignee> = tables
            .projects
            .values()
            .map(|p| tables.with_assignee(p))
            .collect();
        newest_first(&mut projects, |p| p.project.created_at);
        Ok(projects)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectWithAssignee>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.get(&id).map(|p| tables.with_assignee(p)))
    }

    async fn create(&self, data: &NewProject) -> AppResult<Project> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            name: data.name.trim().to_string(),
            description: data.description.clone(),
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            staff_member_id: data.staff_member_id,
            created_at: now,
            updated_at: now,
        };
        let mut tables = self.tables.write().await;
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, id: Uuid, data: &NewProject) -> AppResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        let Some(project) = tables.projects.get_mut(&id) else {
            return Ok(None);
        };
        project.name = data.name.trim().to_string();
        project.description = data.description.clone();
        project.start_date = data.start_date;
        project.end_date = data.end_date;
        project.status = data.status;
        project.staff_member_id = data.staff_member_id;
        project.updated_at = Utc::now();
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.tables.write().await.projects.remove(&id).is_some())
    }
}

#[async_trait]
impl PayslipStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Payslip>> {
        let tables = self.tables.read().await;
        let mut payslips: Vec<Payslip> = tables.payslips.values().cloned().collect();
        newest_first(&mut payslips, |p| p.created_at);
        Ok(payslips)
    }

    async fn list_for_staff(&self, staff_member_id: Uuid) -> AppResult<Vec<Payslip>> {
        let tables = self.tables.read().await;
        let mut payslips: Vec<Payslip> = tables
            .payslips
            .values()
            .filter(|p| p.staff_member_id == staff_member_id)
            .cloned()
            .collect();
        payslips.sort_by(|a, b| b.pay_period_start_date.cmp(&a.pay_period_start_date));
        Ok(payslips)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payslip>> {
        Ok(self.tables.read().await.payslips.get(&id).cloned())
    }

    async fn create(&self, data: &NewPayslip) -> AppResult<Payslip> {
        let mut tables = self.tables.write().await;
        if tables.payslips.values().any(|p| p.reference == data.reference) {
            return Err(AppError::conflict("Payslip reference already exists"));
        }

        let now = Utc::now();
        let payslip = Payslip {
            id: Uuid::new_v4(),
            reference: data.reference.clone(),
            staff_member_id: data.staff_member_id,
            pay_period_start_date: data.pay_period_start_date,
            pay_period_end_date: data.pay_period_end_date,
            employee_type: data.employee_type,
            gross_pay: data.amounts.gross_pay,
            paye: data.amounts.paye,
            nssf: data.amounts.nssf,
            other_deductions: data.amounts.other_deductions,
            deductions: data.amounts.deductions,
            net_pay: data.amounts.net_pay,
            notes: data.notes.clone(),
            status: data.status,
            created_at: now,
            updated_at: now,
        };
        tables.payslips.insert(payslip.id, payslip.clone());
        Ok(payslip)
    }

    async fn update(&self, id: Uuid, data: &NewPayslip) -> AppResult<Option<Payslip>> {
        let mut tables = self.tables.write().await;
        let Some(payslip) = tables.payslips.get_mut(&id) else {
            return Ok(None);
        };
        payslip.staff_member_id = data.staff_member_id;
        payslip.pay_period_start_date = data.pay_period_start_date;
        payslip.pay_period_end_date = data.pay_period_end_date;
        payslip.employee_type = data.employee_type;
        payslip.gross_pay = data.amounts.gross_pay;
        payslip.paye = data.amounts.paye;
        payslip.nssf = data.amounts.nssf;
        payslip.other_deductions = data.amounts.other_deductions;
        payslip.deductions = data.amounts.deductions;
        payslip.net_pay = data.amounts.net_pay;
        payslip.notes = data.notes.clone();
        payslip.status = data.status;
        payslip.updated_at = Utc::now();
        Ok(Some(payslip.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.tables.write().await.payslips.remove(&id).is_some())
    }
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn overview(&self) -> AppResult<EmployeesOverview> {
        let tables = self.tables.read().await;
        let count_staff = |status: EmploymentStatus| {
            tables.staff.values().filter(|s| s.status == status).count() as i64
        };

        let mut upcoming_projects: Vec<Project> = tables
            .projects
            .values()
            .filter(|p| p.status == ProjectStatus::Planning)
            .cloned()
            .collect();
        // Undated projects sort last.
        upcoming_projects.sort_by_key(|p| (p.start_date.is_none(), p.start_date));
        upcoming_projects.truncate(5);

        Ok(EmployeesOverview {
            active_employees: count_staff(EmploymentStatus::Active),
            inactive_employees: count_staff(EmploymentStatus::Inactive),
            total_leaves: tables.leaves.len() as i64,
            pending_leaves: tables
                .leaves
                .values()
                .filter(|l| l.status == LeaveStatus::Pending)
                .count() as i64,
            total_projects: tables.projects.len() as i64,
            upcoming_projects,
        })
    }

    async fn headcount_by_department(&self) -> AppResult<Vec<DepartmentHeadcount>> {
        let tables = self.tables.read().await;
        let mut counts: Vec<DepartmentHeadcount> = tables
            .departments
            .values()
            .map(|d| DepartmentHeadcount {
                id: d.id,
                name: d.name.clone(),
                employee_count: tables
                    .staff
                    .values()
                    .filter(|s| {
                        s.department_id == Some(d.id) && s.status == EmploymentStatus::Active
                    })
                    .count() as i64,
            })
            .collect();
        counts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(counts)
    }

    async fn leave_status_breakdown(&self) -> AppResult<Vec<LeaveStatusCount>> {
        let tables = self.tables.read().await;
        Ok(LeaveStatus::ALL
            .into_iter()
            .map(|status| LeaveStatusCount {
                status,
                count: tables.leaves.values().filter(|l| l.status == status).count() as i64,
            })
            .filter(|c| c.count > 0)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use hrportal_entity::principal::Role;

    use super::*;

    fn digest() -> PasswordDigest {
        PasswordDigest::parse("$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA").unwrap()
    }

    fn new_staff(email: &str) -> NewStaffMember {
        NewStaffMember {
            employee_code: None,
            first_name: "Grace".into(),
            last_name: "Atim".into(),
            email: email.into(),
            password_hash: digest(),
            role: Role::Employee,
            date_of_birth: None,
            hire_date: None,
            position: Some("Analyst".into()),
            status: EmploymentStatus::Active,
            department_id: None,
        }
    }

    fn new_leave(staff_member_id: Uuid) -> NewLeaveRequest {
        NewLeaveRequest {
            staff_member_id,
            leave_type: "Annual".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            reason: None,
        }
    }

    #[tokio::test]
    async fn test_emails_are_normalized_and_unique_per_store() {
        let store = MemoryStore::new();
        let staff = StaffStore::create(&store, &new_staff("  Grace@Example.COM ")).await.unwrap();
        assert_eq!(staff.email, "grace@example.com");

        let err = StaffStore::create(&store, &new_staff("grace@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, hrportal_core::ErrorKind::Conflict);

        // The account store is not cross-checked against staff members.
        let account = AccountStore::create(
            &store,
            &NewAccount {
                username: "grace".into(),
                email: "GRACE@example.com".into(),
                password_hash: digest(),
                role: Role::Admin,
            },
        )
        .await
        .unwrap();
        assert_eq!(account.email, "grace@example.com");
    }

    #[tokio::test]
    async fn test_approval_marks_requester_on_leave() {
        let store = MemoryStore::new();
        let staff = StaffStore::create(&store, &new_staff("a@example.com")).await.unwrap();
        let leave = LeaveStore::create(&store, &new_leave(staff.id)).await.unwrap();
        assert_eq!(leave.status, LeaveStatus::Pending);

        let decided = store
            .apply_decision(leave.id, LeaveStatus::Approved)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(decided.status, LeaveStatus::Approved);

        let staff = StaffStore::find_by_id(&store, staff.id).await.unwrap().unwrap();
        assert_eq!(staff.status, EmploymentStatus::OnLeave);
    }

    #[tokio::test]
    async fn test_rejection_leaves_requester_status_alone() {
        let store = MemoryStore::new();
        let staff = StaffStore::create(&store, &new_staff("b@example.com")).await.unwrap();
        let leave = LeaveStore::create(&store, &new_leave(staff.id)).await.unwrap();

        store
            .apply_decision(leave.id, LeaveStatus::Rejected)
            .await
            .unwrap();

        let staff = StaffStore::find_by_id(&store, staff.id).await.unwrap().unwrap();
        assert_eq!(staff.status, EmploymentStatus::Active);
    }

    #[tokio::test]
    async fn test_decision_on_unknown_leave_is_none() {
        let store = MemoryStore::new();
        let result = store
            .apply_decision(Uuid::new_v4(), LeaveStatus::Approved)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_deleting_staff_cascades_to_leaves() {
        let store = MemoryStore::new();
        let staff = StaffStore::create(&store, &new_staff("c@example.com")).await.unwrap();
        LeaveStore::create(&store, &new_leave(staff.id)).await.unwrap();

        assert!(StaffStore::delete(&store, staff.id).await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
        assert!(!StaffStore::delete(&store, staff.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_headcount_includes_empty_departments() {
        let store = MemoryStore::new();
        let eng = DepartmentStore::create(
            &store,
            &NewDepartment {
                name: "Engineering".into(),
                description: None,
            },
        )
        .await
        .unwrap();
        DepartmentStore::create(
            &store,
            &NewDepartment {
                name: "Audit".into(),
                description: None,
            },
        )
        .await
        .unwrap();

        let mut staff = new_staff("d@example.com");
        staff.department_id = Some(eng.id);
        StaffStore::create(&store, &staff).await.unwrap();

        let counts = store.headcount_by_department().await.unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].name, "Audit");
        assert_eq!(counts[0].employee_count, 0);
        assert_eq!(counts[1].employee_count, 1);
    }
}
