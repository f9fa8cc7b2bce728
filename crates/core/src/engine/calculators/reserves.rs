//! CRR/SLR reserve requirements and lendable funds.

use crate::engine::format::{fixed2, plain};
use crate::engine::result::{EngineResult, ResultValue};
use crate::engine::traits::{CalcContext, Calculator};
use crate::inputs::{InputError, Inputs};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReserveRatio {
    /// Total deposits in crores.
    pub deposits: f64,
    pub crr_rate: f64,
    pub slr_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reserves {
    pub crr_amount: f64,
    pub slr_amount: f64,
    pub total_reserve: f64,
    pub lendable: f64,
}

impl Calculator for ReserveRatio {
    type Outcome = Reserves;

    const FORMULA: &'static str =
        "Available for Lending = Total Deposits - (CRR Amount + SLR Amount)";

    fn from_inputs(inputs: &Inputs, _ctx: &CalcContext) -> Result<Self, InputError> {
        Ok(Self {
            deposits: inputs.number("deposits")?,
            crr_rate: inputs.number("crr_rate")?,
            slr_rate: inputs.number("slr_rate")?,
        })
    }

    fn compute(&self) -> EngineResult<Reserves> {
        let crr_amount = self.deposits * self.crr_rate / 100.0;
        let slr_amount = self.deposits * self.slr_rate / 100.0;
        let total_reserve = crr_amount + slr_amount;
        Ok(Reserves { crr_amount, slr_amount, total_reserve, lendable: self.deposits - total_reserve })
    }

    fn narrate(&self, o: &Reserves) -> Vec<String> {
        let deposits = plain(self.deposits);
        vec![
            format!("Total Deposits: ₹{deposits} crores"),
            format!("CRR Rate: {}%", plain(self.crr_rate)),
            format!("SLR Rate: {}%", plain(self.slr_rate)),
            format!(
                "CRR Amount: ₹{deposits} × {}% = ₹{} crores",
                plain(self.crr_rate),
                fixed2(o.crr_amount)
            ),
            format!(
                "SLR Amount: ₹{deposits} × {}% = ₹{} crores",
                plain(self.slr_rate),
                fixed2(o.slr_amount)
            ),
            format!(
                "Total Reserve Requirement: ₹{} + ₹{} = ₹{} crores",
                fixed2(o.crr_amount),
                fixed2(o.slr_amount),
                fixed2(o.total_reserve)
            ),
            format!(
                "Available for Lending: ₹{deposits} - ₹{} = ₹{} crores",
                fixed2(o.total_reserve),
                fixed2(o.lendable)
            ),
        ]
    }

    fn headline(o: &Reserves) -> ResultValue {
        ResultValue::Amount(o.lendable)
    }
}
