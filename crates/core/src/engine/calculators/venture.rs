//! Venture capital returns: exit value, dividends, multiple and CAGR.

use crate::engine::format::{fixed2, plain};
use crate::engine::result::{EngineError, EngineResult, ResultValue};
use crate::engine::traits::{CalcContext, Calculator};
use crate::inputs::{InputError, Inputs};

pub const LAKHS_PER_CRORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentureReturns {
    /// In lakhs.
    pub initial_investment: f64,
    /// Percent of the company held.
    pub equity_stake: f64,
    /// In crores.
    pub exit_valuation: f64,
    /// In years.
    pub investment_period: f64,
    /// Annual percent of the initial investment, simple (non-compounding).
    pub dividend_yield: f64,
}

/// All amounts in lakhs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentureOutcome {
    pub exit_valuation_lakhs: f64,
    pub exit_value: f64,
    pub annual_dividend: f64,
    pub total_dividends: f64,
    pub capital_gain: f64,
    pub total_return: f64,
    pub return_multiple: f64,
    /// As a fraction, e.g. `0.15` for 15%.
    pub cagr: f64,
}

impl Calculator for VentureReturns {
    type Outcome = VentureOutcome;

    const FORMULA: &'static str =
        "Total Return = (Exit Valuation × Equity Stake) + Total Dividends - Initial Investment";

    fn from_inputs(inputs: &Inputs, _ctx: &CalcContext) -> Result<Self, InputError> {
        Ok(Self {
            initial_investment: inputs.number("initialInvestment")?,
            equity_stake: inputs.number("equityStake")?,
            exit_valuation: inputs.number("exitValuation")?,
            investment_period: inputs.number("investmentPeriod")?,
            dividend_yield: inputs.number_or("dividendYield", 0.0)?,
        })
    }

    fn compute(&self) -> EngineResult<VentureOutcome> {
        if self.initial_investment == 0.0 {
            return Err(EngineError::degenerate(
                "initialInvestment",
                "return multiple is undefined for a zero investment",
            ));
        }
        if self.investment_period == 0.0 {
            return Err(EngineError::degenerate(
                "investmentPeriod",
                "CAGR is undefined for a zero-length holding period",
            ));
        }

        let exit_valuation_lakhs = self.exit_valuation * LAKHS_PER_CRORE;
        let exit_value = exit_valuation_lakhs * self.equity_stake / 100.0;
        let annual_dividend = self.initial_investment * self.dividend_yield / 100.0;
        let total_dividends = annual_dividend * self.investment_period;
        let capital_gain = exit_value - self.initial_investment;
        let total_return = capital_gain + total_dividends;
        let return_multiple = (exit_value + total_dividends) / self.initial_investment;
        if return_multiple < 0.0 {
            return Err(EngineError::degenerate(
                "exitValuation",
                "CAGR is undefined for a negative return multiple",
            ));
        }
        let cagr = return_multiple.powf(1.0 / self.investment_period) - 1.0;
        if !cagr.is_finite() {
            return Err(EngineError::degenerate(
                "investmentPeriod",
                "CAGR does not converge for this holding period",
            ));
        }

        Ok(VentureOutcome {
            exit_valuation_lakhs,
            exit_value,
            annual_dividend,
            total_dividends,
            capital_gain,
            total_return,
            return_multiple,
            cagr,
        })
    }

    fn narrate(&self, o: &VentureOutcome) -> Vec<String> {
        let initial = plain(self.initial_investment);
        let stake = plain(self.equity_stake);
        let period = plain(self.investment_period);
        vec![
            format!("Initial Investment: ₹{initial} lakhs"),
            format!("Equity Stake: {stake}%"),
            format!(
                "Exit Valuation: ₹{} crores = ₹{} lakhs",
                plain(self.exit_valuation),
                plain(o.exit_valuation_lakhs)
            ),
            format!("Investment Period: {period} years"),
            format!(
                "Exit Value for {stake}% stake: ₹{} × {stake}% = ₹{} lakhs",
                plain(o.exit_valuation_lakhs),
                fixed2(o.exit_value)
            ),
            format!(
                "Annual Dividend: ₹{initial} × {}% = ₹{} lakhs",
                plain(self.dividend_yield),
                fixed2(o.annual_dividend)
            ),
            format!(
                "Total Dividends: ₹{} × {period} = ₹{} lakhs",
                fixed2(o.annual_dividend),
                fixed2(o.total_dividends)
            ),
            format!(
                "Capital Gain: ₹{} - ₹{initial} = ₹{} lakhs",
                fixed2(o.exit_value),
                fixed2(o.capital_gain)
            ),
            format!(
                "Total Return: ₹{} + ₹{} = ₹{} lakhs",
                fixed2(o.capital_gain),
                fixed2(o.total_dividends),
                fixed2(o.total_return)
            ),
            format!("Return Multiple: {}x", fixed2(o.return_multiple)),
            format!("CAGR: {}%", fixed2(o.cagr * 100.0)),
        ]
    }

    fn headline(o: &VentureOutcome) -> ResultValue {
        ResultValue::Amount(o.total_return)
    }
}
