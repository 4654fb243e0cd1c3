//! Fund property configuration.
//!
//! Maps each fund to its breakdown by property type (e.g. "Asset Class",
//! "Region") and property name (e.g. "Equity", "Europe"), with a percentage
//! per property name. The schema is open: whatever keys the document holds
//! become property types and names.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use crate::parse::parse_lenient;

/// Property-name → weight mapping for one property type.
pub type PropertyBreakdown = IndexMap<String, PropertyWeight>;

/// Property-type → breakdown mapping for one fund.
pub type FundProperties = IndexMap<String, PropertyBreakdown>;

/// A configured percentage, kept in the form it was written.
///
/// Weights are expected in `[0, 1]` but are not validated. Strings are
/// parsed leniently. Arrays are parsed from their comma-joined text, so
/// `[0.5]` weighs 0.5; any other JSON value counts as non-numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyWeight {
    /// A JSON number.
    Number(f64),
    /// A JSON string, e.g. `"0.25"`.
    Text(String),
    /// Any other JSON value (`null`, booleans, arrays, objects).
    Other(Value),
}

impl PropertyWeight {
    /// Returns the numeric weight, or `NaN` when it is not numeric.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(v) => *v,
            Self::Text(s) => parse_lenient(s),
            Self::Other(Value::Array(items)) => parse_lenient(&joined_text(items)),
            Self::Other(_) => f64::NAN,
        }
    }

    /// Returns true if the weight yields a number (infinities included).
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !self.value().is_nan()
    }

    /// Returns the weight as it was written, for diagnostics.
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Number(v) => v.to_string(),
            Self::Text(s) => format!("{s:?}"),
            Self::Other(v) => v.to_string(),
        }
    }
}

/// Text of an array with its elements joined by commas; `null` joins as empty.
fn joined_text(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(inner) => joined_text(inner),
            Value::Object(_) => "[object Object]".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

impl From<f64> for PropertyWeight {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropertyWeight {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Value> for PropertyWeight {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl From<&PropertyWeight> for Value {
    fn from(weight: &PropertyWeight) -> Self {
        match weight {
            PropertyWeight::Number(v) => serde_json::Number::from_f64(*v)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            PropertyWeight::Text(s) => Value::String(s.clone()),
            PropertyWeight::Other(v) => v.clone(),
        }
    }
}

impl Serialize for PropertyWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropertyWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Fund → property type → property name → weight.
///
/// Key order is the order funds, types and names were inserted (or appeared
/// in the source document), which is the order results are reported in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundPropertyConfig {
    funds: IndexMap<String, FundProperties>,
}

impl FundPropertyConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from a JSON document without enforcing a schema.
    ///
    /// A non-object document yields an empty configuration. A fund whose
    /// entry is not an object is still configured, with no property types.
    /// A property type whose data is not an object is kept with no names.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        let entries = match value {
            Value::Object(entries) => entries,
            other => {
                warn!(kind = json_kind(&other), "configuration is not an object; ignoring it");
                return Self::default();
            }
        };

        let funds = entries
            .into_iter()
            .map(|(fund, properties)| {
                let properties = match properties {
                    Value::Object(types) => types
                        .into_iter()
                        .map(|(property_type, data)| {
                            let breakdown = match data {
                                Value::Object(names) => names
                                    .into_iter()
                                    .map(|(name, weight)| (name, PropertyWeight::from(weight)))
                                    .collect(),
                                other => {
                                    warn!(
                                        fund = %fund,
                                        property_type = %property_type,
                                        kind = json_kind(&other),
                                        "property data is not an object; treating it as empty"
                                    );
                                    PropertyBreakdown::new()
                                }
                            };
                            (property_type, breakdown)
                        })
                        .collect(),
                    other => {
                        warn!(
                            fund = %fund,
                            kind = json_kind(&other),
                            "fund properties are not an object; treating them as empty"
                        );
                        FundProperties::new()
                    }
                };
                (fund, properties)
            })
            .collect();

        Self { funds }
    }

    /// Sets a single weight, creating the fund and property type as needed.
    #[must_use]
    pub fn with_weight(
        mut self,
        fund: impl Into<String>,
        property_type: impl Into<String>,
        property_name: impl Into<String>,
        weight: impl Into<PropertyWeight>,
    ) -> Self {
        self.funds
            .entry(fund.into())
            .or_default()
            .entry(property_type.into())
            .or_default()
            .insert(property_name.into(), weight.into());
        self
    }

    /// Adds or replaces a fund's full property set.
    pub fn insert_fund(&mut self, fund: impl Into<String>, properties: FundProperties) {
        self.funds.insert(fund.into(), properties);
    }

    /// Returns the properties configured for a fund.
    #[must_use]
    pub fn get(&self, fund: &str) -> Option<&FundProperties> {
        self.funds.get(fund)
    }

    /// Returns true if the fund has an entry.
    #[must_use]
    pub fn contains(&self, fund: &str) -> bool {
        self.funds.contains_key(fund)
    }

    /// Returns the configured funds in insertion order.
    pub fn funds(&self) -> impl Iterator<Item = &str> {
        self.funds.keys().map(String::as_str)
    }

    /// Returns the number of configured funds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.funds.len()
    }

    /// Returns true if no fund is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

impl Serialize for FundPropertyConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.funds.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FundPropertyConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
