//! Lease versus buy-on-loan comparison.
//!
//! Asset cost and down payment are entered in lakhs while the monthly
//! rental is in rupees. The buy side is computed on the raw lakh figures,
//! so the two net costs are not in the same unit; only the "Net Buy Cost"
//! narration line scales the down payment to rupees.

use crate::engine::format::{fixed2, grouped, plain};
use crate::engine::result::{EngineError, EngineResult, ResultValue};
use crate::engine::traits::{CalcContext, Calculator};
use crate::inputs::{InputError, Inputs};

pub const RUPEES_PER_LAKH: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaseVsBuy {
    /// In lakhs.
    pub asset_cost: f64,
    /// In years.
    pub lease_period: f64,
    /// In rupees.
    pub monthly_lease: f64,
    /// Percent per annum.
    pub loan_rate: f64,
    /// In lakhs.
    pub down_payment: f64,
    /// Percent.
    pub tax_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Lease,
    Buy,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lease => "Leasing is more economical",
            Self::Buy => "Buying is more economical",
        }
    }
}

/// Lease-side amounts are in rupees, buy-side amounts in lakhs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaseComparison {
    pub months: f64,
    pub total_lease_payments: f64,
    pub lease_tax_savings: f64,
    pub net_lease_cost: f64,
    pub loan_amount: f64,
    pub emi: f64,
    pub total_loan_payments: f64,
    pub total_interest: f64,
    pub annual_tax_benefit: f64,
    pub total_tax_benefit: f64,
    pub net_buy_cost: f64,
    /// `net_buy_cost - net_lease_cost`; positive favours leasing.
    pub difference: f64,
    pub recommendation: Recommendation,
}

/// Level monthly installment for an amortizing loan.
///
/// `monthly_rate` is a fraction (e.g. `0.01` for 1% a month). A zero rate
/// degenerates to straight repayment of `principal / months`.
pub fn annuity_installment(principal: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        return principal / months;
    }
    let growth = (1.0 + monthly_rate).powf(months);
    principal * monthly_rate * growth / (growth - 1.0)
}

impl Calculator for LeaseVsBuy {
    type Outcome = LeaseComparison;

    const FORMULA: &'static str =
        "NPV Analysis: Net Lease Cost vs Net Buy Cost (including tax benefits)";

    fn from_inputs(inputs: &Inputs, _ctx: &CalcContext) -> Result<Self, InputError> {
        Ok(Self {
            asset_cost: inputs.number("assetCost")?,
            lease_period: inputs.number("leasePeriod")?,
            monthly_lease: inputs.number("monthlyLease")?,
            loan_rate: inputs.number("loanRate")?,
            down_payment: inputs.number("downPayment")?,
            tax_rate: inputs.number("taxRate")?,
        })
    }

    fn compute(&self) -> EngineResult<LeaseComparison> {
        if self.lease_period == 0.0 {
            return Err(EngineError::degenerate(
                "leasePeriod",
                "a zero-year period has no installments or depreciation",
            ));
        }

        let months = self.lease_period * 12.0;
        let total_lease_payments = self.monthly_lease * months;
        let lease_tax_savings = total_lease_payments * self.tax_rate / 100.0;
        let net_lease_cost = total_lease_payments - lease_tax_savings;

        let loan_amount = self.asset_cost - self.down_payment;
        let emi = annuity_installment(loan_amount, self.loan_rate / 100.0 / 12.0, months);
        let total_loan_payments = emi * months;
        let total_interest = total_loan_payments - loan_amount;

        let annual_depreciation = self.asset_cost / self.lease_period;
        let avg_annual_interest = total_interest / self.lease_period;
        let annual_tax_benefit = (annual_depreciation + avg_annual_interest) * self.tax_rate / 100.0;
        let total_tax_benefit = annual_tax_benefit * self.lease_period;
        let net_buy_cost = self.down_payment + total_loan_payments - total_tax_benefit;

        let difference = net_buy_cost - net_lease_cost;
        let recommendation = if difference > 0.0 { Recommendation::Lease } else { Recommendation::Buy };

        Ok(LeaseComparison {
            months,
            total_lease_payments,
            lease_tax_savings,
            net_lease_cost,
            loan_amount,
            emi,
            total_loan_payments,
            total_interest,
            annual_tax_benefit,
            total_tax_benefit,
            net_buy_cost,
            difference,
            recommendation,
        })
    }

    fn narrate(&self, o: &LeaseComparison) -> Vec<String> {
        let months = plain(o.months);
        vec![
            format!("Asset Cost: ₹{} lakhs", fixed2(self.asset_cost)),
            format!("Lease Period: {} years", plain(self.lease_period)),
            format!("Monthly Lease Rental: ₹{}", grouped(self.monthly_lease)),
            String::new(),
            "--- LEASING ANALYSIS ---".to_string(),
            format!(
                "Total Lease Payments: ₹{} × {months} months = ₹{}",
                grouped(self.monthly_lease),
                grouped(o.total_lease_payments)
            ),
            format!(
                "Tax Savings on Lease: ₹{} × {}% = ₹{}",
                grouped(o.total_lease_payments),
                plain(self.tax_rate),
                grouped(o.lease_tax_savings)
            ),
            format!(
                "Net Lease Cost: ₹{} - ₹{} = ₹{}",
                grouped(o.total_lease_payments),
                grouped(o.lease_tax_savings),
                grouped(o.net_lease_cost)
            ),
            String::new(),
            "--- BUYING ANALYSIS ---".to_string(),
            format!("Down Payment: ₹{} lakhs", fixed2(self.down_payment)),
            format!(
                "Loan Amount: ₹{} - ₹{} = ₹{} lakhs",
                fixed2(self.asset_cost),
                fixed2(self.down_payment),
                fixed2(o.loan_amount)
            ),
            format!("Monthly EMI: ₹{}", grouped(o.emi)),
            format!(
                "Total Loan Payments: ₹{} × {months} = ₹{}",
                grouped(o.emi),
                grouped(o.total_loan_payments)
            ),
            format!("Total Interest: ₹{}", grouped(o.total_interest)),
            format!("Annual Tax Benefit: ₹{}", grouped(o.annual_tax_benefit)),
            format!("Total Tax Benefit: ₹{}", grouped(o.total_tax_benefit)),
            format!(
                "Net Buy Cost: ₹{} + ₹{} - ₹{} = ₹{}",
                grouped(self.down_payment * RUPEES_PER_LAKH),
                grouped(o.total_loan_payments),
                grouped(o.total_tax_benefit),
                grouped(o.net_buy_cost)
            ),
            String::new(),
            format!("Cost Difference: ₹{}", grouped(o.difference.abs())),
            format!("Recommendation: {}", o.recommendation.as_str()),
        ]
    }

    fn headline(o: &LeaseComparison) -> ResultValue {
        ResultValue::Amount(o.difference.abs())
    }
}
