//! Statutory default interest calculator.
//!
//! Advisory only: documents cite the accrual start date and never the computed figure.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format::{format_amount, format_date};

const DAY_COUNT_DIVISOR: i64 = 36_500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterestError {
    #[error(
        "Datum obračuna ({}) mora biti poslije dospijeća ({}).",
        display_date(.as_of),
        display_date(.accrual_start)
    )]
    InvalidDateRange {
        accrual_start: NaiveDate,
        as_of: NaiveDate,
    },
    #[error("Iznos je izvan raspona koji kalkulator može obraditi.")]
    AmountOutOfRange,
}

fn display_date(date: &NaiveDate) -> String {
    format_date(*date)
}

/// `principal * rate * days / 36500`, with `days` counted in whole calendar days.
pub fn compute_interest(
    principal: Decimal,
    annual_rate_percent: Decimal,
    accrual_start: NaiveDate,
    as_of: NaiveDate,
) -> Result<Decimal, InterestError> {
    let days = accrual_days(accrual_start, as_of)?;
    principal
        .checked_mul(annual_rate_percent)
        .and_then(|amount| amount.checked_mul(Decimal::from(days)))
        .and_then(|amount| amount.checked_div(Decimal::from(DAY_COUNT_DIVISOR)))
        .ok_or(InterestError::AmountOutOfRange)
}

fn accrual_days(accrual_start: NaiveDate, as_of: NaiveDate) -> Result<i64, InterestError> {
    let days = (as_of - accrual_start).num_days();
    if days <= 0 {
        return Err(InterestError::InvalidDateRange {
            accrual_start,
            as_of,
        });
    }
    Ok(days)
}

/// Calculator input as collected by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRequest {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub accrual_start: NaiveDate,
    pub as_of: NaiveDate,
}

/// Calculator result: the raw figures plus their 2-decimal presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestAssessment {
    pub days: i64,
    pub interest: Decimal,
    pub total_due: Decimal,
    pub interest_display: String,
    pub total_due_display: String,
}

pub fn assess_interest(request: &InterestRequest) -> Result<InterestAssessment, InterestError> {
    let days = accrual_days(request.accrual_start, request.as_of)?;
    let interest = compute_interest(
        request.principal,
        request.annual_rate_percent,
        request.accrual_start,
        request.as_of,
    )?;
    let total_due = request
        .principal
        .checked_add(interest)
        .ok_or(InterestError::AmountOutOfRange)?;

    Ok(InterestAssessment {
        days,
        interest,
        total_due,
        interest_display: format_amount(interest),
        total_due_display: format_amount(total_due),
    })
}

impl InterestAssessment {
    /// One-line summary as shown on the calculator screen.
    pub fn summary(&self) -> String {
        format!("Kamata: {} (za {} dana)", self.interest_display, self.days)
    }
}
