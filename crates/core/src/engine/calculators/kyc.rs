//! KYC compliance scoring.
//!
//! Four independent checks add up to a score out of 100:
//!
//! | check          | outcome                                   | points |
//! |----------------|-------------------------------------------|--------|
//! | PAN card       | present                                   | 30     |
//! |                | absent, deposit below the PAN threshold   | 15     |
//! |                | absent, deposit at or above the threshold | 0      |
//! | address proof  | any document other than `None`            | 25     |
//! | customer type  | Company / Partnership                     | 20     |
//! |                | NRI                                       | 15     |
//! |                | anything else                             | 25     |
//! | account type   | Fixed / Recurring Deposit                 | 20     |
//! |                | anything else                             | 15     |

use crate::engine::format::plain;
use crate::engine::result::{EngineResult, ResultValue};
use crate::engine::traits::{CalcContext, Calculator};
use crate::inputs::{InputError, Inputs};

/// Deposits at or above this need a PAN card.
pub const PAN_THRESHOLD: f64 = 50_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerType {
    Individual,
    Partnership,
    Company,
    Trust,
    Nri,
}

impl CustomerType {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Individual" => Some(Self::Individual),
            "Partnership" => Some(Self::Partnership),
            "Company" => Some(Self::Company),
            "Trust" => Some(Self::Trust),
            "NRI" => Some(Self::Nri),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KycAccount {
    Savings,
    Current,
    FixedDeposit,
    RecurringDeposit,
}

impl KycAccount {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Savings" => Some(Self::Savings),
            "Current" => Some(Self::Current),
            "Fixed Deposit" => Some(Self::FixedDeposit),
            "Recurring Deposit" => Some(Self::RecurringDeposit),
            _ => None,
        }
    }
}

/// Compliance band for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceTier {
    Full,
    Partial,
    NonCompliant,
}

impl ComplianceTier {
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            Self::Full
        } else if score >= 60 {
            Self::Partial
        } else {
            Self::NonCompliant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "Fully Compliant",
            Self::Partial => "Partially Compliant",
            Self::NonCompliant => "Non-Compliant",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KycCompliance {
    pub customer_label: String,
    pub pan_card: bool,
    pub address_proof: String,
    pub account_label: String,
    pub initial_deposit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KycAssessment {
    pub score: u32,
    pub tier: ComplianceTier,
    /// One line per check, in evaluation order.
    pub checks: Vec<String>,
    pub issues: Vec<String>,
}

impl Calculator for KycCompliance {
    type Outcome = KycAssessment;

    const FORMULA: &'static str = "KYC Compliance Score = PAN (30) + Address Proof (25) + Customer Type (20) + Account Type (25)";

    fn from_inputs(inputs: &Inputs, _ctx: &CalcContext) -> Result<Self, InputError> {
        Ok(Self {
            customer_label: inputs.text("customerType")?,
            pan_card: inputs.text("panCard")?.trim() == "Yes",
            address_proof: inputs.text("addressProof")?,
            account_label: inputs.text("accountType")?,
            initial_deposit: inputs.number("initialDeposit")?,
        })
    }

    fn compute(&self) -> EngineResult<KycAssessment> {
        let mut score = 0;
        let mut checks = Vec::with_capacity(4);
        let mut issues = Vec::new();

        if self.pan_card {
            score += 30;
            checks.push("✓ PAN Card available - Compliant".to_string());
        } else if self.initial_deposit >= PAN_THRESHOLD {
            issues.push("PAN Card mandatory for deposits ≥ ₹50,000".to_string());
            checks.push("✗ PAN Card missing - Non-compliant for high-value deposits".to_string());
        } else {
            score += 15;
            checks.push("○ PAN Card not mandatory for deposits < ₹50,000".to_string());
        }

        if self.address_proof.trim() != "None" {
            score += 25;
            checks.push(format!("✓ Address Proof: {} - Compliant", self.address_proof));
        } else {
            issues.push("Address proof is mandatory".to_string());
            checks.push("✗ Address proof missing - Non-compliant".to_string());
        }

        match CustomerType::from_label(&self.customer_label) {
            Some(CustomerType::Company | CustomerType::Partnership) => {
                score += 20;
                checks.push("✓ Corporate documentation assumed - Compliant".to_string());
            }
            Some(CustomerType::Nri) => {
                score += 15;
                checks.push("○ NRI documentation requires additional verification".to_string());
            }
            Some(CustomerType::Individual | CustomerType::Trust) | None => {
                score += 25;
                checks.push("✓ Individual customer documentation - Standard".to_string());
            }
        }

        match KycAccount::from_label(&self.account_label) {
            Some(KycAccount::FixedDeposit | KycAccount::RecurringDeposit) => {
                score += 20;
                checks.push("✓ Deposit account - Lower compliance requirements".to_string());
            }
            _ => {
                score += 15;
                checks.push("○ Operational account - Standard compliance requirements".to_string());
            }
        }

        Ok(KycAssessment { score, tier: ComplianceTier::for_score(score), checks, issues })
    }

    fn narrate(&self, o: &KycAssessment) -> Vec<String> {
        let mut steps = vec![
            format!("Customer Type: {}", self.customer_label),
            format!("Account Type: {}", self.account_label),
            format!("Initial Deposit: ₹{}", plain(self.initial_deposit)),
        ];
        steps.extend(o.checks.iter().cloned());
        if !o.issues.is_empty() {
            steps.push(format!("Issues identified: {}", o.issues.join(", ")));
        }
        steps
    }

    fn headline(o: &KycAssessment) -> ResultValue {
        ResultValue::Text(format!("{} (Score: {}/100)", o.tier.as_str(), o.score))
    }
}
