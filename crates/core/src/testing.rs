//! Sample inputs for tests.
//!
//! Compiled for this crate's own tests and, through the `test-utils`
//! feature, for test suites of dependent crates. Nothing here is reachable
//! from a normal build.

use chrono::{Duration, NaiveDate};

use crate::engine::CalculatorKind;
use crate::inputs::Inputs;

/// A complete, well-formed input set for `kind`.
///
/// Values sit inside the field bounds declared by the builtin curriculum.
/// The cheque date is placed 10 days before `today`.
pub fn sample_inputs(kind: CalculatorKind, today: NaiveDate) -> Inputs {
    match kind {
        CalculatorKind::ServiceFee => Inputs::new()
            .with("serviceType", "NEFT Transfer")
            .with("amount", 250_000.0)
            .with("accountType", "Current"),
        CalculatorKind::ReserveRatio => Inputs::new()
            .with("deposits", 1000.0)
            .with("crr_rate", 4.0)
            .with("slr_rate", 18.0),
        CalculatorKind::KycCompliance => Inputs::new()
            .with("customerType", "Individual")
            .with("panCard", "Yes")
            .with("addressProof", "Aadhaar")
            .with("accountType", "Savings")
            .with("initialDeposit", 1000.0),
        CalculatorKind::ChequeProcessing => Inputs::new()
            .with("chequeType", "Crossed")
            .with("amount", 5000.0)
            .with("date", (today - Duration::days(10)).format("%Y-%m-%d").to_string())
            .with("payeeName", "Asha Traders")
            .with("accountBalance", 20_000.0),
        CalculatorKind::DishonorPenalty => Inputs::new()
            .with("chequeAmount", 150_000.0)
            .with("dishonoredTimes", 2.0)
            .with("accountType", "Current")
            .with("bankCharges", 750.0),
        CalculatorKind::VentureReturns => Inputs::new()
            .with("initialInvestment", 50.0)
            .with("equityStake", 20.0)
            .with("exitValuation", 15.0)
            .with("investmentPeriod", 6.0)
            .with("dividendYield", 2.0),
        CalculatorKind::LeaseVsBuy => Inputs::new()
            .with("assetCost", 25.0)
            .with("leasePeriod", 5.0)
            .with("monthlyLease", 45_000.0)
            .with("loanRate", 10.5)
            .with("downPayment", 5.0)
            .with("taxRate", 30.0),
        CalculatorKind::BillDiscount => Inputs::new()
            .with("faceValue", 100_000.0)
            .with("discountRate", 12.0)
            .with("daysToMaturity", 90.0)
            .with("bankCharges", 250.0),
    }
}

/// [`sample_inputs`] with every value converted to text, as a form posts it.
pub fn sample_inputs_as_text(kind: CalculatorKind, today: NaiveDate) -> Inputs {
    sample_inputs(kind, today)
        .iter()
        .map(|(name, v)| (name.to_string(), crate::inputs::RawValue::Text(v.to_string())))
        .collect()
}
