//! Payslip repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use hrportal_core::result::AppResult;
use hrportal_entity::payslip::{NewPayslip, Payslip};

use super::db_error;
use crate::store::PayslipStore;

/// Repository for the `payslips` table.
#[derive(Debug, Clone)]
pub struct PayslipRepository {
    pool: PgPool,
}

impl PayslipRepository {
    /// Create a new payslip repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayslipStore for PayslipRepository {
    async fn list(&self) -> AppResult<Vec<Payslip>> {
        sqlx::query_as::<_, Payslip>("SELECT * FROM payslips ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list payslips"))
    }

    async fn list_for_staff(&self, staff_member_id: Uuid) -> AppResult<Vec<Payslip>> {
        sqlx::query_as::<_, Payslip>(
            "SELECT * FROM payslips WHERE staff_member_id = $1 \
             ORDER BY pay_period_start_date DESC",
        )
        .bind(staff_member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list payslips for staff member"))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payslip>> {
        sqlx::query_as::<_, Payslip>("SELECT * FROM payslips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find payslip"))
    }

    async fn create(&self, data: &NewPayslip) -> AppResult<Payslip> {
        sqlx::query_as::<_, Payslip>(
            "INSERT INTO payslips \
             (id, reference, staff_member_id, pay_period_start_date, pay_period_end_date, \
              employee_type, gross_pay, paye, nssf, other_deductions, deductions, net_pay, \
              notes, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.reference)
        .bind(data.staff_member_id)
        .bind(data.pay_period_start_date)
        .bind(data.pay_period_end_date)
        .bind(data.employee_type)
        .bind(data.amounts.gross_pay)
        .bind(data.amounts.paye)
        .bind(data.amounts.nssf)
        .bind(data.amounts.other_deductions)
        .bind(data.amounts.deductions)
        .bind(data.amounts.net_pay)
        .bind(&data.notes)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create payslip"))
    }

    async fn update(&self, id: Uuid, data: &NewPayslip) -> AppResult<Option<Payslip>> {
        sqlx::query_as::<_, Payslip>(
            "UPDATE payslips SET \
               staff_member_id = $2, pay_period_start_date = $3, pay_period_end_date = $4, \
               employee_type = $5, gross_pay = $6, paye = $7, nssf = $8, \
               other_deductions = $9, deductions = $10, net_pay = $11, notes = $12, \
               status = $13, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.staff_member_id)
        .bind(data.pay_period_start_date)
        .bind(data.pay_period_end_date)
        .bind(data.employee_type)
        .bind(data.amounts.gross_pay)
        .bind(data.amounts.paye)
        .bind(data.amounts.nssf)
        .bind(data.amounts.other_deductions)
        .bind(data.amounts.deductions)
        .bind(data.amounts.net_pay)
        .bind(&data.notes)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update payslip"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM payslips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete payslip"))?;

        Ok(result.rows_affected() > 0)
    }
}
