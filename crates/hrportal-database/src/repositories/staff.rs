//! Staff member repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use hrportal_core::result::AppResult;
use hrportal_entity::department::DepartmentRef;
use hrportal_entity::principal::PasswordDigest;
use hrportal_entity::staff::{
    EmploymentStatus, NewStaffMember, StaffMember, StaffProfileUpdate, StaffUpdate,
    StaffWithDepartment,
};

use super::db_error;
use crate::store::StaffStore;

/// Repository for the `staff_members` table.
#[derive(Debug, Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    /// Create a new staff repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StaffListingRow {
    #[sqlx(flatten)]
    staff: StaffMember,
    department_name: Option<String>,
}

impl From<StaffListingRow> for StaffWithDepartment {
    fn from(row: StaffListingRow) -> Self {
        let department = match (row.staff.department_id, row.department_name) {
            (Some(id), Some(name)) => Some(DepartmentRef { id, name }),
            _ => None,
        };
        Self {
            staff: row.staff,
            department,
        }
    }
}

#[async_trait]
impl StaffStore for StaffRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StaffMember>> {
        sqlx::query_as::<_, StaffMember>("SELECT * FROM staff_members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find staff member by id"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<StaffMember>> {
        sqlx::query_as::<_, StaffMember>(
            "SELECT * FROM staff_members WHERE email = LOWER(TRIM($1))",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find staff member by email"))
    }

    async fn list(&self, statuses: &[EmploymentStatus]) -> AppResult<Vec<StaffWithDepartment>> {
        let statuses: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();

        let rows = sqlx::query_as::<_, StaffListingRow>(
            "SELECT s.*, d.name AS department_name \
             FROM staff_members s \
             LEFT JOIN departments d ON d.id = s.department_id \
             WHERE s.status::text = ANY($1) \
             ORDER BY s.last_name ASC, s.first_name ASC",
        )
        .bind(statuses)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list staff members"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, data: &NewStaffMember) -> AppResult<StaffMember> {
        sqlx::query_as::<_, StaffMember>(
            "INSERT INTO staff_members \
             (id, employee_code, first_name, last_name, email, password_hash, role, \
              date_of_birth, hire_date, position, status, department_id) \
             VALUES ($1, $2, $3, $4, LOWER(TRIM($5)), $6, $7, $8, COALESCE($9, CURRENT_DATE), $10, $11, $12) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.employee_code)
        .bind(data.first_name.trim())
        .bind(data.last_name.trim())
        .bind(&data.email)
        .bind(data.password_hash.as_str())
        .bind(data.role)
        .bind(data.date_of_birth)
        .bind(data.hire_date)
        .bind(&data.position)
        .bind(data.status)
        .bind(data.department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create staff member"))
    }

    async fn update(&self, id: Uuid, data: &StaffUpdate) -> AppResult<Option<StaffMember>> {
        sqlx::query_as::<_, StaffMember>(
            "UPDATE staff_members SET \
               employee_code = COALESCE($2, employee_code), \
               first_name = COALESCE($3, first_name), \
               last_name = COALESCE($4, last_name), \
               email = COALESCE(LOWER(TRIM($5)), email), \
               password_hash = COALESCE($6, password_hash), \
               role = COALESCE($7, role), \
               date_of_birth = COALESCE($8, date_of_birth), \
               hire_date = COALESCE($9, hire_date), \
               position = COALESCE($10, position), \
               status = COALESCE($11, status), \
               department_id = COALESCE($12, department_id), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.employee_code)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.password_hash.as_ref().map(PasswordDigest::as_str))
        .bind(data.role)
        .bind(data.date_of_birth)
        .bind(data.hire_date)
        .bind(&data.position)
        .bind(data.status)
        .bind(data.department_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update staff member"))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        data: &StaffProfileUpdate,
    ) -> AppResult<Option<StaffMember>> {
        sqlx::query_as::<_, StaffMember>(
            "UPDATE staff_members SET \
               first_name = COALESCE($2, first_name), \
               last_name = COALESCE($3, last_name), \
               date_of_birth = COALESCE($4, date_of_birth), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.date_of_birth)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update staff profile"))
    }

    async fn update_password(&self, id: Uuid, digest: &PasswordDigest) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE staff_members SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(digest.as_str())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update staff password"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM staff_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete staff member"))?;

        Ok(result.rows_affected() > 0)
    }
}
