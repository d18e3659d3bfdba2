//! Payslip generation, retrieval and edits.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use hrportal_core::error::AppError;
use hrportal_database::Stores;
use hrportal_database::store::{PayslipStore, StaffStore};
use hrportal_entity::payslip::{EmployeeType, NewPayslip, PayAmounts, Payslip, PayslipStatus};
use hrportal_entity::principal::Role;

use super::reference;
use crate::context::RequestContext;

/// Data needed to generate a payslip.
#[derive(Debug, Clone)]
pub struct PayslipInput {
    /// Staff member being paid.
    pub staff_member_id: Uuid,
    /// First day of the pay period.
    pub pay_period_start_date: NaiveDate,
    /// Last day of the pay period.
    pub pay_period_end_date: NaiveDate,
    /// Pay basis, `Salaried` when absent.
    pub employee_type: Option<EmployeeType>,
    /// Gross pay before deductions.
    pub gross_pay: f64,
    /// Deductions beyond PAYE and NSSF.
    pub other_deductions: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Initial status, `Generated` when absent.
    pub status: Option<PayslipStatus>,
}

/// Partial edit of a payslip. Amounts are recomputed from the result.
#[derive(Debug, Clone, Default)]
pub struct PayslipChanges {
    pub pay_period_start_date: Option<NaiveDate>,
    pub pay_period_end_date: Option<NaiveDate>,
    pub employee_type: Option<EmployeeType>,
    pub gross_pay: Option<f64>,
    pub other_deductions: Option<f64>,
    pub notes: Option<String>,
    pub status: Option<PayslipStatus>,
}

/// Generates and serves payslips.
#[derive(Clone)]
pub struct PayslipService {
    payslips: Arc<dyn PayslipStore>,
    staff: Arc<dyn StaffStore>,
}

impl PayslipService {
    /// Creates a new payslip service.
    pub fn new(stores: &Stores) -> Self {
        Self {
            payslips: stores.payslips.clone(),
            staff: stores.staff.clone(),
        }
    }

    /// Computes statutory deductions and stores a new payslip.
    pub async fn generate(
        &self,
        ctx: &RequestContext,
        input: PayslipInput,
    ) -> Result<Payslip, AppError> {
        check_period(input.pay_period_start_date, input.pay_period_end_date)?;
        let amounts = PayAmounts::compute(input.gross_pay, input.other_deductions.unwrap_or(0.0))?;

        if self.staff.find_by_id(input.staff_member_id).await?.is_none() {
            return Err(AppError::not_found("Employee not found"));
        }

        let payslip = self
            .payslips
            .create(&NewPayslip {
                reference: reference::generate(Utc::now()),
                staff_member_id: input.staff_member_id,
                pay_period_start_date: input.pay_period_start_date,
                pay_period_end_date: input.pay_period_end_date,
                employee_type: input.employee_type.unwrap_or_default(),
                amounts,
                notes: input.notes,
                status: input.status.unwrap_or_default(),
            })
            .await?;

        info!(
            payslip_id = %payslip.id,
            reference = %payslip.reference,
            staff_member_id = %payslip.staff_member_id,
            generated_by = %ctx.principal_id(),
            net_pay = payslip.net_pay,
            "Payslip generated"
        );

        Ok(payslip)
    }

    /// Every payslip, newest first.
    pub async fn list(&self) -> Result<Vec<Payslip>, AppError> {
        self.payslips.list().await
    }

    /// The calling staff member's payslips.
    pub async fn my_payslips(&self, ctx: &RequestContext) -> Result<Vec<Payslip>, AppError> {
        let staff = ctx.staff_member()?;
        self.payslips.list_for_staff(staff.id).await
    }

    /// One payslip. Employees may only read their own.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Payslip, AppError> {
        let payslip = self.find(id).await?;
        if ctx.role() == Role::Employee && payslip.staff_member_id != ctx.principal_id() {
            return Err(AppError::forbidden(
                "Access denied. You can only view your own payslips.",
            ));
        }
        Ok(payslip)
    }

    /// Applies an edit and recomputes the amounts.
    pub async fn update(&self, id: Uuid, changes: PayslipChanges) -> Result<Payslip, AppError> {
        let current = self.find(id).await?;

        let start = changes
            .pay_period_start_date
            .unwrap_or(current.pay_period_start_date);
        let end = changes
            .pay_period_end_date
            .unwrap_or(current.pay_period_end_date);
        check_period(start, end)?;

        let amounts = PayAmounts::compute(
            changes.gross_pay.unwrap_or(current.gross_pay),
            changes.other_deductions.unwrap_or(current.other_deductions),
        )?;

        let data = NewPayslip {
            reference: current.reference,
            staff_member_id: current.staff_member_id,
            pay_period_start_date: start,
            pay_period_end_date: end,
            employee_type: changes.employee_type.unwrap_or(current.employee_type),
            amounts,
            notes: changes.notes.or(current.notes),
            status: changes.status.unwrap_or(current.status),
        };

        self.payslips
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Payslip not found"))
    }

    /// Deletes a payslip.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.payslips.delete(id).await? {
            return Err(AppError::not_found("Payslip not found"));
        }
        info!(payslip_id = %id, "Payslip deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Payslip, AppError> {
        self.payslips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Payslip not found"))
    }
}

fn check_period(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if end < start {
        return Err(AppError::validation(
            "Pay period end date cannot be before start date",
        ));
    }
    Ok(())
}
