//! Raw form values and their typed accessors.
//!
//! The presentation layer collects whatever the user typed into an
//! [`Inputs`] map keyed by field name. Calculators never do arithmetic on
//! raw values: they go through the accessors here, which either yield a
//! typed value or an [`InputError`] naming the offending field.

mod errors;

pub use errors::InputError;

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single value as collected from a form control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// True for text that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Field name to raw value, as collected for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inputs {
    values: BTreeMap<String, RawValue>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<RawValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `other` into `self`; values in `other` win.
    pub fn extend(&mut self, other: Inputs) {
        self.values.extend(other.values);
    }

    /// Parse `key=value` arguments. Every value is kept as text.
    pub fn from_assignments<S: AsRef<str>>(args: &[S]) -> Result<Self, InputError> {
        let mut inputs = Self::new();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| InputError::BadAssignment(arg.to_string()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(InputError::BadAssignment(arg.to_string()));
            }
            inputs.insert(key, value);
        }
        Ok(inputs)
    }

    /// Parse a JSON object of field values.
    pub fn from_json_str(s: &str) -> Result<Self, InputError> {
        serde_json::from_str(s).map_err(|e| InputError::Document(e.to_string()))
    }

    /// Parse a YAML mapping of field values.
    pub fn from_yaml_str(s: &str) -> Result<Self, InputError> {
        serde_yaml::from_str(s).map_err(|e| InputError::Document(e.to_string()))
    }

    /// Present and not blank.
    fn present(&self, field: &str) -> Option<&RawValue> {
        self.values.get(field).filter(|v| !v.is_blank())
    }

    /// Read a numeric field.
    pub fn number(&self, field: &str) -> Result<f64, InputError> {
        let raw = self
            .present(field)
            .ok_or_else(|| InputError::Missing { field: field.to_string() })?;
        parse_number(field, raw)
    }

    /// Read an optional numeric field, falling back to `default` when absent or blank.
    pub fn number_or(&self, field: &str, default: f64) -> Result<f64, InputError> {
        match self.present(field) {
            Some(raw) => parse_number(field, raw),
            None => Ok(default),
        }
    }

    /// Read a text field. Numbers are rendered back to text.
    pub fn text(&self, field: &str) -> Result<String, InputError> {
        self.values
            .get(field)
            .map(ToString::to_string)
            .ok_or_else(|| InputError::Missing { field: field.to_string() })
    }

    /// Read a date field (`YYYY-MM-DD` or an RFC 3339 timestamp).
    pub fn date(&self, field: &str) -> Result<NaiveDate, InputError> {
        let raw = self
            .present(field)
            .ok_or_else(|| InputError::Missing { field: field.to_string() })?;
        parse_date(field, raw)
    }
}

impl FromIterator<(String, RawValue)> for Inputs {
    fn from_iter<T: IntoIterator<Item = (String, RawValue)>>(iter: T) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

/// Coerce a raw value to a finite number.
pub fn parse_number(field: &str, raw: &RawValue) -> Result<f64, InputError> {
    let n = match raw {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s.trim().parse::<f64>().map_err(|_| InputError::NotNumeric {
            field: field.to_string(),
            value: s.clone(),
        })?,
    };
    if !n.is_finite() {
        return Err(InputError::NotNumeric { field: field.to_string(), value: raw.to_string() });
    }
    Ok(n)
}

/// Coerce a raw value to a calendar date.
pub fn parse_date(field: &str, raw: &RawValue) -> Result<NaiveDate, InputError> {
    let invalid =
        || InputError::InvalidDate { field: field.to_string(), value: raw.to_string() };
    let RawValue::Text(s) = raw else {
        return Err(invalid());
    };
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_text_and_number() {
        let inputs = Inputs::new().with("a", " 42.5 ").with("b", 7.0);
        assert_eq!(inputs.number("a").unwrap(), 42.5);
        assert_eq!(inputs.number("b").unwrap(), 7.0);
    }

    #[test]
    fn test_number_missing_and_blank() {
        let inputs = Inputs::new().with("blank", "   ");
        assert!(matches!(inputs.number("blank"), Err(InputError::Missing { .. })));
        assert!(matches!(inputs.number("absent"), Err(InputError::Missing { .. })));
    }

    #[test]
    fn test_number_rejects_garbage_and_non_finite() {
        let inputs = Inputs::new().with("x", "12abc").with("y", "inf");
        match inputs.number("x") {
            Err(InputError::NotNumeric { field, value }) => {
                assert_eq!(field, "x");
                assert_eq!(value, "12abc");
            }
            other => panic!("expected NotNumeric, got {other:?}"),
        }
        assert!(matches!(inputs.number("y"), Err(InputError::NotNumeric { .. })));
    }

    #[test]
    fn test_number_or_defaults() {
        let inputs = Inputs::new().with("blank", "");
        assert_eq!(inputs.number_or("blank", 3.0).unwrap(), 3.0);
        assert_eq!(inputs.number_or("absent", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_text_renders_numbers() {
        let inputs = Inputs::new().with("n", 100.0).with("s", "Savings");
        assert_eq!(inputs.text("n").unwrap(), "100");
        assert_eq!(inputs.text("s").unwrap(), "Savings");
        assert!(inputs.text("missing").is_err());
    }

    #[test]
    fn test_date_formats() {
        let inputs = Inputs::new()
            .with("plain", "2024-03-15")
            .with("stamp", "2024-03-15T10:30:00Z")
            .with("bad", "15/03/2024");
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(inputs.date("plain").unwrap(), expected);
        assert_eq!(inputs.date("stamp").unwrap(), expected);
        assert!(matches!(inputs.date("bad"), Err(InputError::InvalidDate { .. })));
    }

    #[test]
    fn test_from_assignments() {
        let inputs =
            Inputs::from_assignments(&["amount=100", "serviceType=ATM Transactions", "x="])
                .unwrap();
        assert_eq!(inputs.text("serviceType").unwrap(), "ATM Transactions");
        assert_eq!(inputs.number("amount").unwrap(), 100.0);
        assert!(inputs.get("x").unwrap().is_blank());

        assert!(matches!(
            Inputs::from_assignments(&["novalue"]),
            Err(InputError::BadAssignment(_))
        ));
        assert!(matches!(
            Inputs::from_assignments(&["=5"]),
            Err(InputError::BadAssignment(_))
        ));
    }

    #[test]
    fn test_from_documents() {
        let json = Inputs::from_json_str(r#"{"deposits": 1000, "crr_rate": "4"}"#).unwrap();
        assert_eq!(json.get("deposits"), Some(&RawValue::Number(1000.0)));
        assert_eq!(json.get("crr_rate"), Some(&RawValue::Text("4".into())));

        let yaml = Inputs::from_yaml_str("deposits: 1000\npanCard: 'Yes'\n").unwrap();
        assert_eq!(yaml.number("deposits").unwrap(), 1000.0);
        assert_eq!(yaml.text("panCard").unwrap(), "Yes");

        assert!(matches!(Inputs::from_json_str("[1, 2]"), Err(InputError::Document(_))));
    }
}
