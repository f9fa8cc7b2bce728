//! The individual teaching calculators.

pub mod cheque;
pub mod discounting;
pub mod kyc;
pub mod leasing;
pub mod penalty;
pub mod reserves;
pub mod service_fee;
pub mod venture;

pub use cheque::{ChequeOutcome, ChequeProcessing, ChequeStatus};
pub use discounting::{BillDiscount, DiscountOutcome};
pub use kyc::{ComplianceTier, KycAssessment, KycCompliance};
pub use leasing::{LeaseComparison, LeaseVsBuy, Recommendation};
pub use penalty::{DishonorPenalty, PenaltyBreakdown};
pub use reserves::{ReserveRatio, Reserves};
pub use service_fee::{FeeBreakdown, ServiceFee};
pub use venture::{VentureOutcome, VentureReturns};
