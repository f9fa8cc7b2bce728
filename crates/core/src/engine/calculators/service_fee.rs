//! Banking service fee with GST.

use crate::engine::format::{fixed2, plain};
use crate::engine::result::{EngineResult, ResultValue};
use crate::engine::traits::{CalcContext, Calculator};
use crate::inputs::{InputError, Inputs};

/// GST charged on every service fee.
pub const GST_RATE: f64 = 0.18;

/// Services with a published fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    CurrentAccountMaintenance,
    AtmTransactions,
    ChequeBook,
    DemandDraft,
    NeftTransfer,
    RtgsTransfer,
}

impl ServiceType {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Current Account Maintenance" => Some(Self::CurrentAccountMaintenance),
            "ATM Transactions" => Some(Self::AtmTransactions),
            "Cheque Book" => Some(Self::ChequeBook),
            "Demand Draft" => Some(Self::DemandDraft),
            "NEFT Transfer" => Some(Self::NeftTransfer),
            "RTGS Transfer" => Some(Self::RtgsTransfer),
            _ => None,
        }
    }
}

/// Flat base fee plus a proportional rate on the transaction amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    pub base: f64,
    pub rate: f64,
}

impl FeeSchedule {
    /// Unlisted services carry no fee.
    pub fn for_service(service: Option<ServiceType>) -> Self {
        let (base, rate) = match service {
            Some(ServiceType::CurrentAccountMaintenance) => (500.0, 0.001),
            Some(ServiceType::AtmTransactions) => (20.0, 0.0),
            Some(ServiceType::ChequeBook) => (100.0, 0.0),
            Some(ServiceType::DemandDraft) => (50.0, 0.001),
            Some(ServiceType::NeftTransfer) => (25.0, 0.0005),
            Some(ServiceType::RtgsTransfer) => (30.0, 0.0005),
            None => (0.0, 0.0),
        };
        Self { base, rate }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeAccount {
    Savings,
    Current,
    Premium,
}

impl FeeAccount {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Savings" => Some(Self::Savings),
            "Current" => Some(Self::Current),
            "Premium" => Some(Self::Premium),
            _ => None,
        }
    }

    /// Unlisted account types pay the standard (1×) fee.
    pub fn multiplier(account: Option<Self>) -> f64 {
        match account {
            Some(Self::Savings) | None => 1.0,
            Some(Self::Current) => 1.2,
            Some(Self::Premium) => 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceFee {
    pub service_label: String,
    pub account_label: String,
    pub amount: f64,
    pub schedule: FeeSchedule,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeBreakdown {
    pub base_fee: f64,
    pub variable_fee: f64,
    pub subtotal: f64,
    pub gst: f64,
    pub total: f64,
}

impl Calculator for ServiceFee {
    type Outcome = FeeBreakdown;

    const FORMULA: &'static str =
        "Total Fee = (Base Fee + Variable Fee) × Account Multiplier × (1 + GST Rate)";

    fn from_inputs(inputs: &Inputs, _ctx: &CalcContext) -> Result<Self, InputError> {
        let service_label = inputs.text("serviceType")?;
        let account_label = inputs.text("accountType")?;
        let amount = inputs.number("amount")?;
        Ok(Self {
            schedule: FeeSchedule::for_service(ServiceType::from_label(&service_label)),
            multiplier: FeeAccount::multiplier(FeeAccount::from_label(&account_label)),
            service_label,
            account_label,
            amount,
        })
    }

    fn compute(&self) -> EngineResult<FeeBreakdown> {
        let base_fee = self.schedule.base * self.multiplier;
        let variable_fee = self.amount * self.schedule.rate * self.multiplier;
        let subtotal = base_fee + variable_fee;
        let gst = subtotal * GST_RATE;
        Ok(FeeBreakdown { base_fee, variable_fee, subtotal, gst, total: subtotal + gst })
    }

    fn narrate(&self, o: &FeeBreakdown) -> Vec<String> {
        let effective_rate = self.schedule.rate * self.multiplier * 100.0;
        vec![
            format!("Service Type: {}", self.service_label),
            format!("Account Type: {} (Multiplier: {})", self.account_label, plain(self.multiplier)),
            format!("Base Fee: ₹{}", fixed2(o.base_fee)),
            format!(
                "Variable Fee: ₹{} × {:.3}% = ₹{}",
                plain(self.amount),
                effective_rate,
                fixed2(o.variable_fee)
            ),
            format!(
                "Subtotal: ₹{} + ₹{} = ₹{}",
                fixed2(o.base_fee),
                fixed2(o.variable_fee),
                fixed2(o.subtotal)
            ),
            format!("GST (18%): ₹{} × 18% = ₹{}", fixed2(o.subtotal), fixed2(o.gst)),
            format!(
                "Total Fee: ₹{} + ₹{} = ₹{}",
                fixed2(o.subtotal),
                fixed2(o.gst),
                fixed2(o.total)
            ),
        ]
    }

    fn headline(o: &FeeBreakdown) -> ResultValue {
        ResultValue::Amount(o.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::traits::run;

    fn calc(service: &str, account: &str, amount: f64) -> (ServiceFee, FeeBreakdown) {
        let inputs = Inputs::new()
            .with("serviceType", service)
            .with("accountType", account)
            .with("amount", amount);
        let c = ServiceFee::from_inputs(&inputs, &CalcContext::now()).unwrap();
        let o = c.compute().unwrap();
        (c, o)
    }

    #[test]
    fn test_atm_savings() {
        let (c, o) = calc("ATM Transactions", "Savings", 100.0);
        assert_eq!(c.schedule, FeeSchedule { base: 20.0, rate: 0.0 });
        assert_eq!(c.multiplier, 1.0);
        assert_eq!(o.base_fee, 20.0);
        assert_eq!(o.variable_fee, 0.0);
        assert_eq!(o.subtotal, 20.0);
        assert!((o.gst - 3.6).abs() < 1e-9);
        assert!((o.total - 23.6).abs() < 1e-9);
    }

    #[test]
    fn test_rate_and_multiplier_apply() {
        // 500 × 1.2 + 100000 × 0.001 × 1.2 = 600 + 120
        let (_, o) = calc("Current Account Maintenance", "Current", 100_000.0);
        assert!((o.base_fee - 600.0).abs() < 1e-9);
        assert!((o.variable_fee - 120.0).abs() < 1e-9);
        assert!((o.total - 720.0 * 1.18).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_keys_default() {
        let (c, o) = calc("Locker Rent", "Joint", 5000.0);
        assert_eq!(c.schedule, FeeSchedule { base: 0.0, rate: 0.0 });
        assert_eq!(c.multiplier, 1.0);
        assert_eq!(o.total, 0.0);
    }

    #[test]
    fn test_steps_narrate_breakdown() {
        let inputs = Inputs::new()
            .with("serviceType", "ATM Transactions")
            .with("accountType", "Savings")
            .with("amount", "100");
        let r = run::<ServiceFee>(&inputs, &CalcContext::now()).unwrap();
        assert_eq!(r.steps.len(), 7);
        assert_eq!(r.steps[1], "Account Type: Savings (Multiplier: 1)");
        assert_eq!(r.steps[3], "Variable Fee: ₹100 × 0.000% = ₹0.00");
        assert_eq!(r.steps[5], "GST (18%): ₹20.00 × 18% = ₹3.60");
        assert_eq!(r.steps[6], "Total Fee: ₹20.00 + ₹3.60 = ₹23.60");
    }

    #[test]
    fn test_missing_amount() {
        let inputs = Inputs::new().with("serviceType", "Cheque Book").with("accountType", "Savings");
        let err = ServiceFee::from_inputs(&inputs, &CalcContext::now()).unwrap_err();
        assert_eq!(err, InputError::Missing { field: "amount".into() });
    }
}
