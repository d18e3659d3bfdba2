//! Statutory deduction arithmetic.

use hrportal_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// PAYE rate applied to gross pay.
pub const PAYE_RATE: f64 = 0.088;
/// NSSF rate applied to gross pay.
pub const NSSF_RATE: f64 = 0.10;

/// Computed pay figures, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayAmounts {
    /// Gross pay.
    pub gross_pay: f64,
    /// PAYE tax.
    pub paye: f64,
    /// NSSF contribution.
    pub nssf: f64,
    /// Other deductions as supplied.
    pub other_deductions: f64,
    /// `paye + nssf + other_deductions`.
    pub deductions: f64,
    /// `gross_pay - deductions`.
    pub net_pay: f64,
}

impl PayAmounts {
    /// Compute deductions and net pay. Negative inputs or a negative net
    /// pay are validation errors.
    pub fn compute(gross_pay: f64, other_deductions: f64) -> AppResult<Self> {
        if !gross_pay.is_finite() || gross_pay < 0.0 {
            return Err(AppError::validation("grossPay must be a non-negative number"));
        }
        if !other_deductions.is_finite() || other_deductions < 0.0 {
            return Err(AppError::validation(
                "otherDeductions must be a non-negative number",
            ));
        }

        let paye = round_cents(gross_pay * PAYE_RATE);
        let nssf = round_cents(gross_pay * NSSF_RATE);
        let other_deductions = round_cents(other_deductions);
        let deductions = round_cents(paye + nssf + other_deductions);
        let net_pay = round_cents(gross_pay - deductions);

        if net_pay < 0.0 {
            return Err(AppError::validation(
                "Net pay cannot be negative. Check gross pay and deductions",
            ));
        }

        Ok(Self {
            gross_pay: round_cents(gross_pay),
            paye,
            nssf,
            other_deductions,
            deductions,
            net_pay,
        })
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
