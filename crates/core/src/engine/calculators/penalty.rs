//! Maximum exposure for a dishonoured cheque (Section 138, NI Act).

use crate::engine::format::{grouped, plain};
use crate::engine::result::{EngineResult, ResultValue};
use crate::engine::traits::{CalcContext, Calculator};
use crate::inputs::{InputError, Inputs};

/// Bank surcharge for each dishonour after the first.
pub const REPEAT_DISHONOR_FEE: f64 = 500.0;
/// Cheques above this amount attract the higher legal-cost estimate.
pub const LEGAL_COST_THRESHOLD: f64 = 100_000.0;
pub const LEGAL_COST_HIGH: f64 = 25_000.0;
pub const LEGAL_COST_LOW: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishonorAccount {
    Savings,
    Current,
    Overdraft,
}

impl DishonorAccount {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Savings" => Some(Self::Savings),
            "Current" => Some(Self::Current),
            "Overdraft" => Some(Self::Overdraft),
            _ => None,
        }
    }

    /// Shown for reference; it does not enter the total.
    pub fn multiplier(account: Option<Self>) -> f64 {
        match account {
            Some(Self::Savings) | None => 1.0,
            Some(Self::Current) => 1.5,
            Some(Self::Overdraft) => 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DishonorPenalty {
    pub cheque_amount: f64,
    pub dishonored_times: f64,
    pub account_label: String,
    pub bank_charges: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyBreakdown {
    pub multiplier: f64,
    pub criminal_penalty: f64,
    pub additional_charges: f64,
    pub total_bank_charges: f64,
    pub legal_costs: f64,
    pub total: f64,
}

impl Calculator for DishonorPenalty {
    type Outcome = PenaltyBreakdown;

    const FORMULA: &'static str =
        "Total Penalty = Criminal Penalty (2 × Cheque Amount) + Bank Charges + Legal Costs";

    fn from_inputs(inputs: &Inputs, _ctx: &CalcContext) -> Result<Self, InputError> {
        Ok(Self {
            cheque_amount: inputs.number("chequeAmount")?,
            dishonored_times: inputs.number("dishonoredTimes")?,
            account_label: inputs.text("accountType")?,
            bank_charges: inputs.number("bankCharges")?,
        })
    }

    fn compute(&self) -> EngineResult<PenaltyBreakdown> {
        let multiplier = DishonorAccount::multiplier(DishonorAccount::from_label(&self.account_label));
        let criminal_penalty = self.cheque_amount * 2.0;
        let additional_charges = if self.dishonored_times > 1.0 {
            (self.dishonored_times - 1.0) * REPEAT_DISHONOR_FEE
        } else {
            0.0
        };
        let total_bank_charges = self.bank_charges + additional_charges;
        let legal_costs = if self.cheque_amount > LEGAL_COST_THRESHOLD {
            LEGAL_COST_HIGH
        } else {
            LEGAL_COST_LOW
        };

        Ok(PenaltyBreakdown {
            multiplier,
            criminal_penalty,
            additional_charges,
            total_bank_charges,
            legal_costs,
            total: criminal_penalty + total_bank_charges + legal_costs,
        })
    }

    fn narrate(&self, o: &PenaltyBreakdown) -> Vec<String> {
        vec![
            format!("Cheque Amount: ₹{}", grouped(self.cheque_amount)),
            format!("Number of Dishonors: {}", plain(self.dishonored_times)),
            format!("Account Type: {} (Multiplier: {})", self.account_label, plain(o.multiplier)),
            format!(
                "Maximum Criminal Penalty (Section 138): ₹{} × 2 = ₹{}",
                plain(self.cheque_amount),
                grouped(o.criminal_penalty)
            ),
            format!("Base Bank Charges: ₹{}", grouped(self.bank_charges)),
            format!(
                "Additional Charges: {} × ₹500 = ₹{}",
                plain(self.dishonored_times - 1.0),
                grouped(o.additional_charges)
            ),
            format!(
                "Total Bank Charges: ₹{} + ₹{} = ₹{}",
                grouped(self.bank_charges),
                grouped(o.additional_charges),
                grouped(o.total_bank_charges)
            ),
            format!("Estimated Legal Costs: ₹{}", grouped(o.legal_costs)),
            format!(
                "Total Maximum Penalty: ₹{} + ₹{} + ₹{} = ₹{}",
                grouped(o.criminal_penalty),
                grouped(o.total_bank_charges),
                grouped(o.legal_costs),
                grouped(o.total)
            ),
        ]
    }

    fn headline(o: &PenaltyBreakdown) -> ResultValue {
        ResultValue::Amount(o.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn penalty(amount: f64, times: f64, account: &str, charges: f64) -> PenaltyBreakdown {
        let inputs = Inputs::new()
            .with("chequeAmount", amount)
            .with("dishonoredTimes", times)
            .with("accountType", account)
            .with("bankCharges", charges);
        DishonorPenalty::from_inputs(&inputs, &CalcContext::now()).unwrap().compute().unwrap()
    }

    #[test]
    fn test_single_dishonor_low_tier() {
        let o = penalty(50_000.0, 1.0, "Savings", 300.0);
        assert_eq!(o.criminal_penalty, 100_000.0);
        assert_eq!(o.additional_charges, 0.0);
        assert_eq!(o.total_bank_charges, 300.0);
        assert_eq!(o.legal_costs, LEGAL_COST_LOW);
        assert_eq!(o.total, 110_300.0);
    }

    #[test]
    fn test_repeat_dishonor_high_tier() {
        let o = penalty(200_000.0, 3.0, "Current", 500.0);
        assert_eq!(o.additional_charges, 1000.0);
        assert_eq!(o.total_bank_charges, 1500.0);
        assert_eq!(o.legal_costs, LEGAL_COST_HIGH);
        assert_eq!(o.total, 400_000.0 + 1500.0 + 25_000.0);
    }

    #[rstest]
    #[case(100_000.0, LEGAL_COST_LOW)]
    #[case(100_000.01, LEGAL_COST_HIGH)]
    fn test_legal_cost_threshold(#[case] amount: f64, #[case] expected: f64) {
        assert_eq!(penalty(amount, 1.0, "Savings", 0.0).legal_costs, expected);
    }

    #[rstest]
    #[case("Savings", 1.0)]
    #[case("Current", 1.5)]
    #[case("Overdraft", 2.0)]
    #[case("Joint", 1.0)]
    fn test_multiplier_is_informational(#[case] account: &str, #[case] multiplier: f64) {
        let o = penalty(10_000.0, 1.0, account, 0.0);
        assert_eq!(o.multiplier, multiplier);
        assert_eq!(o.total, 30_000.0);
    }
}
