//! The interface every calculator implements.

use chrono::{Local, NaiveDate};

use crate::inputs::{InputError, Inputs};

use super::result::{EngineResult, ResultValue, SimulatorResult};

/// Ambient facts a calculation may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcContext {
    /// The date treated as "now".
    pub today: NaiveDate,
}

impl CalcContext {
    /// Context pinned to the local calendar date.
    pub fn now() -> Self {
        Self { today: Local::now().date_naive() }
    }

    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// A calculator parsed from raw inputs.
///
/// The implementing type holds the typed parameters. `compute` does the
/// arithmetic into a typed outcome; `narrate` turns parameters plus outcome
/// into the ordered explanation steps.
pub trait Calculator: Sized {
    /// Intermediate figures produced by `compute`.
    type Outcome;

    /// Display formula shown alongside the result.
    const FORMULA: &'static str;

    /// Read and type-check the raw inputs.
    fn from_inputs(inputs: &Inputs, ctx: &CalcContext) -> Result<Self, InputError>;

    fn compute(&self) -> EngineResult<Self::Outcome>;

    fn narrate(&self, outcome: &Self::Outcome) -> Vec<String>;

    fn headline(outcome: &Self::Outcome) -> ResultValue;
}

/// Parse, compute and narrate in one go.
pub fn run<C: Calculator>(inputs: &Inputs, ctx: &CalcContext) -> EngineResult<SimulatorResult> {
    let calc = C::from_inputs(inputs, ctx)?;
    let outcome = calc.compute()?;
    Ok(SimulatorResult {
        result: C::headline(&outcome),
        steps: calc.narrate(&outcome),
        formula: C::FORMULA.to_string(),
    })
}
