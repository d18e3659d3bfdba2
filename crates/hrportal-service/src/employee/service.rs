//! Employee management operations.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use hrportal_auth::{PasswordHasher, PasswordValidator};
use hrportal_core::error::AppError;
use hrportal_database::Stores;
use hrportal_database::store::StaffStore;
use hrportal_entity::principal::Role;
use hrportal_entity::staff::{
    EmploymentStatus, NewStaffMember, StaffMember, StaffProfileUpdate, StaffUpdate,
    StaffWithDepartment,
};

use crate::context::RequestContext;

/// Statuses shown in the employee directory.
const LISTED_STATUSES: [EmploymentStatus; 2] = [EmploymentStatus::Active, EmploymentStatus::OnLeave];

/// A new employee record as entered by HR.
#[derive(Debug, Clone)]
pub struct EmployeeInput {
    /// Optional employee number.
    pub employee_code: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Initial plaintext password.
    pub password: String,
    /// Role, `Employee` when absent.
    pub role: Option<Role>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Hire date, today when absent.
    pub hire_date: Option<NaiveDate>,
    /// Job title.
    pub position: Option<String>,
    /// Initial status, `active` when absent.
    pub status: Option<EmploymentStatus>,
    /// Department.
    pub department_id: Option<Uuid>,
}

/// Partial HR edit of an employee. An empty password keeps the old one.
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub employee_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub date_of_birth: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub status: Option<EmploymentStatus>,
    pub department_id: Option<Uuid>,
}

/// Manages staff records.
#[derive(Clone)]
pub struct EmployeeService {
    staff: Arc<dyn StaffStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(
        stores: &Stores,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            staff: stores.staff.clone(),
            hasher,
            validator,
        }
    }

    /// Active and on-leave staff with their departments.
    pub async fn list(&self) -> Result<Vec<StaffWithDepartment>, AppError> {
        self.staff.list(&LISTED_STATUSES).await
    }

    /// One staff member by id.
    pub async fn get(&self, id: Uuid) -> Result<StaffMember, AppError> {
        self.staff
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))
    }

    /// Creates a staff member with a hashed initial password.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: EmployeeInput,
    ) -> Result<StaffMember, AppError> {
        if input.first_name.trim().is_empty()
            || input.last_name.trim().is_empty()
            || input.email.trim().is_empty()
        {
            return Err(AppError::validation(
                "First name, last name and email are required",
            ));
        }
        self.validator.validate(&input.password)?;

        let staff = self
            .staff
            .create(&NewStaffMember {
                employee_code: input.employee_code.filter(|c| !c.trim().is_empty()),
                first_name: input.first_name.trim().to_owned(),
                last_name: input.last_name.trim().to_owned(),
                email: input.email,
                password_hash: self.hasher.hash_password(&input.password)?,
                role: input.role.unwrap_or_default(),
                date_of_birth: input.date_of_birth,
                hire_date: input.hire_date,
                position: input.position,
                status: input.status.unwrap_or_default(),
                department_id: input.department_id,
            })
            .await?;

        info!(staff_member_id = %staff.id, created_by = %ctx.principal_id(), "Employee created");

        Ok(staff)
    }

    /// Applies an HR edit. The password is re-hashed only when a non-empty
    /// one is supplied.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: EmployeeChanges,
    ) -> Result<StaffMember, AppError> {
        let password_hash = match changes.password.as_deref() {
            Some(password) if !password.is_empty() => {
                self.validator.validate(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            _ => None,
        };

        let update = StaffUpdate {
            employee_code: changes.employee_code,
            first_name: non_blank(changes.first_name, "First name")?,
            last_name: non_blank(changes.last_name, "Last name")?,
            email: non_blank(changes.email, "Email")?,
            password_hash,
            role: changes.role,
            date_of_birth: changes.date_of_birth,
            hire_date: changes.hire_date,
            position: changes.position,
            status: changes.status,
            department_id: changes.department_id,
        };

        let staff = self
            .staff
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        info!(staff_member_id = %staff.id, updated_by = %ctx.principal_id(), "Employee updated");

        Ok(staff)
    }

    /// Deletes a staff member with their leave requests and payslips.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        if !self.staff.delete(id).await? {
            return Err(AppError::not_found("Employee not found"));
        }
        info!(staff_member_id = %id, deleted_by = %ctx.principal_id(), "Employee deleted");
        Ok(())
    }

    /// The calling staff member's current record.
    pub async fn my_profile(&self, ctx: &RequestContext) -> Result<StaffMember, AppError> {
        let staff = ctx.staff_member()?;
        self.get(staff.id).await
    }

    /// Edits the caller's name and date of birth.
    pub async fn update_my_profile(
        &self,
        ctx: &RequestContext,
        update: StaffProfileUpdate,
    ) -> Result<StaffMember, AppError> {
        let staff = ctx.staff_member()?;
        let update = StaffProfileUpdate {
            first_name: non_blank(update.first_name, "First name")?,
            last_name: non_blank(update.last_name, "Last name")?,
            date_of_birth: update.date_of_birth,
        };
        if update.is_empty() {
            return Err(AppError::validation("No valid fields to update"));
        }

        self.staff
            .update_profile(staff.id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))
    }
}

fn non_blank(value: Option<String>, field: &str) -> Result<Option<String>, AppError> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(AppError::validation(format!("{field} cannot be empty")))
        }
        Some(v) => Ok(Some(v.trim().to_owned())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use hrportal_core::ErrorKind;
    use hrportal_entity::account::NewAccount;
    use hrportal_entity::principal::{PasswordDigest, Principal};

    use super::*;
    use crate::testing;

    async fn hr_ctx(stores: &Stores) -> RequestContext {
        let account = stores
            .accounts
            .create(&NewAccount {
                username: "hr".into(),
                email: "hr@example.com".into(),
                password_hash: PasswordDigest::parse("$argon2id$v=19$x").unwrap(),
                role: Role::Hr,
            })
            .await
            .unwrap();
        RequestContext::new(Principal::Account(account))
    }

    fn service(stores: &Stores) -> EmployeeService {
        EmployeeService::new(stores, testing::hasher(), testing::validator())
    }

    fn input(email: &str) -> EmployeeInput {
        EmployeeInput {
            employee_code: Some("E-001".into()),
            first_name: "Grace".into(),
            last_name: "Achieng".into(),
            email: email.into(),
            password: "welcome1".into(),
            role: None,
            date_of_birth: None,
            hire_date: None,
            position: Some("Analyst".into()),
            status: None,
            department_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_hashes_password_and_lists() {
        let stores = testing::stores();
        let service = service(&stores);
        let ctx = hr_ctx(&stores).await;

        let staff = service.create(&ctx, input("grace@example.com")).await.unwrap();
        assert!(staff.password_hash.starts_with("$argon2id$"));
        assert_eq!(staff.role, Role::Employee);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_digest() {
        let stores = testing::stores();
        let service = service(&stores);
        let ctx = hr_ctx(&stores).await;
        let staff = service.create(&ctx, input("grace@example.com")).await.unwrap();

        let updated = service
            .update(
                &ctx,
                staff.id,
                EmployeeChanges {
                    position: Some("Lead".into()),
                    password: Some(String::new()),
                    ..EmployeeChanges::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.position.as_deref(), Some("Lead"));
        assert_eq!(updated.password_hash, staff.password_hash);

        let rehashed = service
            .update(
                &ctx,
                staff.id,
                EmployeeChanges {
                    password: Some("another1".into()),
                    ..EmployeeChanges::default()
                },
            )
            .await
            .unwrap();
        assert_ne!(rehashed.password_hash, staff.password_hash);
    }

    #[tokio::test]
    async fn test_inactive_staff_are_not_listed() {
        let stores = testing::stores();
        let service = service(&stores);
        let ctx = hr_ctx(&stores).await;
        let mut request = input("grace@example.com");
        request.status = Some(EmploymentStatus::Inactive);
        service.create(&ctx, request).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_profile_update_is_rejected() {
        let stores = testing::stores();
        let service = service(&stores);
        let hr = hr_ctx(&stores).await;
        let staff = service.create(&hr, input("grace@example.com")).await.unwrap();
        let ctx = RequestContext::new(Principal::StaffMember(staff));

        let err = service
            .update_my_profile(&ctx, StaffProfileUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let updated = service
            .update_my_profile(
                &ctx,
                StaffProfileUpdate {
                    first_name: Some("Gracie".into()),
                    ..StaffProfileUpdate::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Gracie");
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let stores = testing::stores();
        let service = service(&stores);
        let ctx = hr_ctx(&stores).await;
        let err = service.delete(&ctx, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
