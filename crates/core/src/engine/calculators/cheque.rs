//! Cheque presentation: date validity, funds and type-specific handling.

use chrono::NaiveDate;

use crate::engine::format::grouped;
use crate::engine::result::{EngineResult, ResultValue};
use crate::engine::traits::{CalcContext, Calculator};
use crate::inputs::{InputError, Inputs};

/// A cheque older than this many days is stale.
pub const STALE_AFTER_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChequeType {
    Bearer,
    Order,
    Crossed,
}

impl ChequeType {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Bearer" => Some(Self::Bearer),
            "Order" => Some(Self::Order),
            "Crossed" => Some(Self::Crossed),
            _ => None,
        }
    }

    pub fn processing_note(&self) -> &'static str {
        match self {
            Self::Bearer => "Processing as Bearer Cheque - Payable to bearer",
            Self::Order => "Processing as Order Cheque - Requires endorsement",
            Self::Crossed => "Processing as Crossed Cheque - Account payee only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValidity {
    PostDated,
    Stale,
    Valid,
}

impl DateValidity {
    pub fn for_age(days: i64) -> Self {
        if days < 0 {
            Self::PostDated
        } else if days > STALE_AFTER_DAYS {
            Self::Stale
        } else {
            Self::Valid
        }
    }
}

/// Final processing status. Later checks override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChequeStatus {
    Processed,
    PostDated,
    Stale,
    InsufficientFunds,
}

impl ChequeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "Processed Successfully",
            Self::PostDated => "Post-dated Cheque - Cannot process until due date",
            Self::Stale => "Stale Cheque - Expired (>3 months old)",
            Self::InsufficientFunds => "Insufficient Funds - Cheque Dishonored",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChequeProcessing {
    pub cheque_label: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payee: String,
    pub balance: f64,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChequeOutcome {
    /// Days since the cheque date; negative when post-dated.
    pub age_days: i64,
    pub validity: DateValidity,
    pub sufficient_funds: bool,
    pub status: ChequeStatus,
}

impl Calculator for ChequeProcessing {
    type Outcome = ChequeOutcome;

    const FORMULA: &'static str =
        "Cheque Status = Date Validity + Balance Adequacy + Type-specific Processing";

    fn from_inputs(inputs: &Inputs, ctx: &CalcContext) -> Result<Self, InputError> {
        Ok(Self {
            cheque_label: inputs.text("chequeType")?,
            amount: inputs.number("amount")?,
            date: inputs.date("date")?,
            payee: inputs.text("payeeName")?,
            balance: inputs.number("accountBalance")?,
            today: ctx.today,
        })
    }

    fn compute(&self) -> EngineResult<ChequeOutcome> {
        let age_days = (self.today - self.date).num_days();
        let validity = DateValidity::for_age(age_days);
        let mut status = match validity {
            DateValidity::PostDated => ChequeStatus::PostDated,
            DateValidity::Stale => ChequeStatus::Stale,
            DateValidity::Valid => ChequeStatus::Processed,
        };

        let sufficient_funds = self.amount <= self.balance;
        if !sufficient_funds {
            status = ChequeStatus::InsufficientFunds;
        }

        Ok(ChequeOutcome { age_days, validity, sufficient_funds, status })
    }

    fn narrate(&self, o: &ChequeOutcome) -> Vec<String> {
        let mut steps = vec![
            format!("Cheque Type: {}", self.cheque_label),
            format!("Cheque Amount: ₹{}", grouped(self.amount)),
            format!("Payee Name: {}", self.payee),
            format!("Account Balance: ₹{}", grouped(self.balance)),
            format!("Cheque Date: {}", self.date.format("%a %b %d %Y")),
        ];

        steps.push(match o.validity {
            DateValidity::PostDated => {
                format!("✗ Cheque is post-dated by {} days", o.age_days.abs())
            }
            DateValidity::Stale => format!("✗ Cheque is {} days old - Stale cheque", o.age_days),
            DateValidity::Valid => {
                format!("✓ Date validation passed - {} days old", o.age_days)
            }
        });

        if o.sufficient_funds {
            steps.push("✓ Sufficient funds available".to_string());
            steps.push(format!(
                "Remaining balance after payment: ₹{}",
                grouped(self.balance - self.amount)
            ));
        } else {
            steps.push(format!(
                "✗ Insufficient balance - Shortfall: ₹{}",
                grouped(self.amount - self.balance)
            ));
        }

        if let Some(kind) = ChequeType::from_label(&self.cheque_label) {
            steps.push(kind.processing_note().to_string());
        }
        steps
    }

    fn headline(o: &ChequeOutcome) -> ResultValue {
        ResultValue::Text(o.status.as_str().to_string())
    }
}
