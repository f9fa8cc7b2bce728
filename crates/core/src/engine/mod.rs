//! Calculation engine.
//!
//! [`compute_result`] is the single entry point the presentation layer
//! uses. It maps a module id to one of the calculators in [`calculators`]
//! and returns a [`SimulatorResult`]: a headline value, the display
//! formula and the ordered explanation steps.
//!
//! # Contract
//!
//! - An unknown module id is not an error: it yields
//!   [`SimulatorResult::unavailable`] (formula `"N/A"`).
//! - Inputs are parsed into typed parameters before any arithmetic.
//!   Malformed values surface as [`EngineError::Input`].
//! - Inputs that would divide by zero surface as [`EngineError::Degenerate`].
//! - The engine is pure: no state survives a call, and identical arguments
//!   with an identical [`CalcContext`] give identical results.
//!
//! # Example
//!
//! ```
//! use banksim_core::engine::compute_result;
//! use banksim_core::inputs::Inputs;
//!
//! let inputs = Inputs::new()
//!     .with("deposits", 1000.0)
//!     .with("crr_rate", 4.0)
//!     .with("slr_rate", 18.0);
//! let result = compute_result("rbi-functions", &inputs).unwrap();
//! assert_eq!(result.result.as_amount(), Some(780.0));
//! ```

pub mod calculators;
pub mod format;
pub mod result;
pub mod traits;

pub use result::{EngineError, EngineResult, ResultValue, SimulatorResult};
pub use traits::{CalcContext, Calculator, run};

use crate::inputs::Inputs;

use calculators::{
    BillDiscount, ChequeProcessing, DishonorPenalty, KycCompliance, LeaseVsBuy, ReserveRatio,
    ServiceFee, VentureReturns,
};

/// Every calculator the engine knows, one per module id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    ServiceFee,
    ReserveRatio,
    KycCompliance,
    ChequeProcessing,
    DishonorPenalty,
    VentureReturns,
    LeaseVsBuy,
    BillDiscount,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 8] = [
        Self::ServiceFee,
        Self::ReserveRatio,
        Self::KycCompliance,
        Self::ChequeProcessing,
        Self::DishonorPenalty,
        Self::VentureReturns,
        Self::LeaseVsBuy,
        Self::BillDiscount,
    ];

    /// Resolve a module id. Exact match; ids are stable slugs.
    pub fn from_module_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.module_id() == id)
    }

    /// The curriculum module this calculator backs.
    pub fn module_id(&self) -> &'static str {
        match self {
            Self::ServiceFee => "commercial-banks",
            Self::ReserveRatio => "rbi-functions",
            Self::KycCompliance => "kyc-norms",
            Self::ChequeProcessing => "negotiable-instruments-types",
            Self::DishonorPenalty => "cheque-dishonor",
            Self::VentureReturns => "venture-capital",
            Self::LeaseVsBuy => "leasing",
            Self::BillDiscount => "discounting",
        }
    }

    /// Field names the calculator reads, in the order it reads them.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::ServiceFee => &["serviceType", "accountType", "amount"],
            Self::ReserveRatio => &["deposits", "crr_rate", "slr_rate"],
            Self::KycCompliance => {
                &["customerType", "panCard", "addressProof", "accountType", "initialDeposit"]
            }
            Self::ChequeProcessing => {
                &["chequeType", "amount", "date", "payeeName", "accountBalance"]
            }
            Self::DishonorPenalty => {
                &["chequeAmount", "dishonoredTimes", "accountType", "bankCharges"]
            }
            Self::VentureReturns => &[
                "initialInvestment",
                "equityStake",
                "exitValuation",
                "investmentPeriod",
                "dividendYield",
            ],
            Self::LeaseVsBuy => {
                &["assetCost", "leasePeriod", "monthlyLease", "loanRate", "downPayment", "taxRate"]
            }
            Self::BillDiscount => &["faceValue", "discountRate", "daysToMaturity", "bankCharges"],
        }
    }

    /// Fields the calculator can do without.
    pub fn optional_fields(&self) -> &'static [&'static str] {
        match self {
            Self::VentureReturns => &["dividendYield"],
            Self::BillDiscount => &["bankCharges"],
            _ => &[],
        }
    }

    pub fn run(&self, inputs: &Inputs, ctx: &CalcContext) -> EngineResult<SimulatorResult> {
        match self {
            Self::ServiceFee => run::<ServiceFee>(inputs, ctx),
            Self::ReserveRatio => run::<ReserveRatio>(inputs, ctx),
            Self::KycCompliance => run::<KycCompliance>(inputs, ctx),
            Self::ChequeProcessing => run::<ChequeProcessing>(inputs, ctx),
            Self::DishonorPenalty => run::<DishonorPenalty>(inputs, ctx),
            Self::VentureReturns => run::<VentureReturns>(inputs, ctx),
            Self::LeaseVsBuy => run::<LeaseVsBuy>(inputs, ctx),
            Self::BillDiscount => run::<BillDiscount>(inputs, ctx),
        }
    }
}

/// Compute the result for `module_id` using today's local date.
pub fn compute_result(
    module_id: &str,
    inputs: &Inputs,
) -> EngineResult<SimulatorResult> {
    compute_result_with(module_id, inputs, &CalcContext::now())
}

/// Compute the result for `module_id` against an explicit context.
pub fn compute_result_with(
    module_id: &str,
    inputs: &Inputs,
    ctx: &CalcContext,
) -> EngineResult<SimulatorResult> {
    match CalculatorKind::from_module_id(module_id) {
        Some(kind) => {
            tracing::debug!(module_id, ?kind, fields = inputs.len(), "dispatching calculation");
            kind.run(inputs, ctx)
        }
        None => {
            tracing::debug!(module_id, "no calculator for module");
            Ok(SimulatorResult::unavailable())
        }
    }
}
