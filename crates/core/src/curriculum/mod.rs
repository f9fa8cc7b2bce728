//! The curriculum registry: units, modules and simulator forms.
//!
//! A builtin curriculum is compiled in; a replacement can be loaded from a
//! TOML file with the same layout.

pub mod catalog;
pub mod errors;
pub mod form;
pub mod types;

pub use catalog::Catalog;
pub use errors::CatalogError;
pub use form::{FormError, FormReport, check_form};
pub use types::{FieldKind, InputField, Module, SimulatorConfig, SimulatorKind, Unit};
