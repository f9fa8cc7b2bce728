//! Bill discounting: discount, net proceeds and effective annual rate.

use crate::engine::format::{grouped, plain};
use crate::engine::result::{EngineError, EngineResult, ResultValue};
use crate::engine::traits::{CalcContext, Calculator};
use crate::inputs::{InputError, Inputs};

pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillDiscount {
    pub face_value: f64,
    /// Percent per annum.
    pub discount_rate: f64,
    pub days_to_maturity: f64,
    pub bank_charges: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountOutcome {
    pub discount: f64,
    pub net_proceeds: f64,
    /// Percent per annum implied by the discount relative to net proceeds.
    pub effective_rate: f64,
    /// Discount plus processing charges.
    pub bank_take: f64,
}

impl Calculator for BillDiscount {
    type Outcome = DiscountOutcome;

    const FORMULA: &'static str =
        "Discount = Face Value × Rate × (Days/365); Net Proceeds = Face Value - Discount - Charges";

    fn from_inputs(inputs: &Inputs, _ctx: &CalcContext) -> Result<Self, InputError> {
        Ok(Self {
            face_value: inputs.number("faceValue")?,
            discount_rate: inputs.number("discountRate")?,
            days_to_maturity: inputs.number("daysToMaturity")?,
            bank_charges: inputs.number_or("bankCharges", 0.0)?,
        })
    }

    fn compute(&self) -> EngineResult<DiscountOutcome> {
        if self.days_to_maturity == 0.0 {
            return Err(EngineError::degenerate(
                "daysToMaturity",
                "a bill maturing today has no discount period to annualize",
            ));
        }

        let discount =
            self.face_value * self.discount_rate * self.days_to_maturity / (100.0 * DAYS_PER_YEAR);
        let net_proceeds = self.face_value - discount - self.bank_charges;
        if net_proceeds <= 0.0 {
            return Err(EngineError::degenerate(
                "faceValue",
                "discount and charges leave no net proceeds",
            ));
        }
        let effective_rate =
            (discount / net_proceeds) * (DAYS_PER_YEAR / self.days_to_maturity) * 100.0;

        Ok(DiscountOutcome {
            discount,
            net_proceeds,
            effective_rate,
            bank_take: discount + self.bank_charges,
        })
    }

    fn narrate(&self, o: &DiscountOutcome) -> Vec<String> {
        let face = grouped(self.face_value);
        let rate = plain(self.discount_rate);
        let days = plain(self.days_to_maturity);
        let charges = grouped(self.bank_charges);
        vec![
            format!("Face Value of Bill: ₹{face}"),
            format!("Discount Rate: {rate}% per annum"),
            format!("Days to Maturity: {days} days"),
            format!("Bank Processing Charges: ₹{charges}"),
            String::new(),
            format!("Discount Amount = ₹{face} × {rate}% × {days}/365"),
            format!(
                "Discount Amount = ₹{face} × {} × {:.4}",
                plain(self.discount_rate / 100.0),
                self.days_to_maturity / DAYS_PER_YEAR
            ),
            format!("Discount Amount = ₹{}", grouped(o.discount)),
            String::new(),
            "Net Proceeds = Face Value - Discount - Bank Charges".to_string(),
            format!("Net Proceeds = ₹{face} - ₹{} - ₹{charges}", grouped(o.discount)),
            format!("Net Proceeds = ₹{}", grouped(o.net_proceeds)),
            String::new(),
            format!("Effective Interest Rate = {:.2}% per annum", o.effective_rate),
            format!("Bank's Profit = ₹{}", grouped(o.bank_take)),
        ]
    }

    fn headline(o: &DiscountOutcome) -> ResultValue {
        ResultValue::Amount(o.net_proceeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(face: f64, rate: f64, days: f64, charges: Option<f64>) -> Inputs {
        let inputs = Inputs::new()
            .with("faceValue", face)
            .with("discountRate", rate)
            .with("daysToMaturity", days);
        match charges {
            Some(c) => inputs.with("bankCharges", c),
            None => inputs,
        }
    }

    fn discount(inputs: &Inputs) -> EngineResult<DiscountOutcome> {
        BillDiscount::from_inputs(inputs, &CalcContext::now()).unwrap().compute()
    }

    #[test]
    fn test_ninety_day_bill() {
        let o = discount(&bill(100_000.0, 12.0, 90.0, Some(0.0))).unwrap();
        assert!((o.discount - 2958.90).abs() < 0.01);
        assert!((o.net_proceeds - 97041.10).abs() < 0.01);
        assert_eq!(o.bank_take, o.discount);
        // 2958.90 / 97041.10 × 365/90 × 100
        assert!((o.effective_rate - 12.3658).abs() < 1e-3);
    }

    #[test]
    fn test_charges_default_and_reduce_proceeds() {
        let no_charges = discount(&bill(100_000.0, 12.0, 90.0, None)).unwrap();
        let charged = discount(&bill(100_000.0, 12.0, 90.0, Some(500.0))).unwrap();
        assert_eq!(no_charges.discount, charged.discount);
        assert!((no_charges.net_proceeds - charged.net_proceeds - 500.0).abs() < 1e-9);
        assert!((charged.bank_take - charged.discount - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let err = discount(&bill(100_000.0, 12.0, 0.0, None)).unwrap_err();
        assert!(matches!(err, EngineError::Degenerate { ref field, .. } if field == "daysToMaturity"));

        let err = discount(&bill(1_000.0, 12.0, 30.0, Some(1_000.0))).unwrap_err();
        assert!(matches!(err, EngineError::Degenerate { ref field, .. } if field == "faceValue"));
    }

    #[test]
    fn test_narration() {
        let inputs = bill(100_000.0, 12.0, 90.0, None);
        let calc = BillDiscount::from_inputs(&inputs, &CalcContext::now()).unwrap();
        let steps = calc.narrate(&calc.compute().unwrap());
        assert_eq!(steps[6], "Discount Amount = ₹100,000 × 0.12 × 0.2466");
        assert_eq!(steps[7], "Discount Amount = ₹2,958.904");
        assert_eq!(steps[11], "Net Proceeds = ₹97,041.096");
        assert_eq!(steps[13], "Effective Interest Rate = 12.37% per annum");
    }
}
