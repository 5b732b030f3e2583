use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Unit, UnitError};

/// A physical value: a number paired with its unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarValue {
    value: f64,
    unit: Unit,
}

impl ScalarValue {
    /// Create a value in the given unit.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Create a dimensionless value.
    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::dimensionless())
    }

    /// Parse a value string: a number, optionally followed by whitespace
    /// and a unit expression (`"10.0 s"`, `"1.2e3 Hz"`, `"5"`).
    pub fn parse(text: &str) -> Result<Self, UnitError> {
        let trimmed = text.trim();
        let mut tokens = trimmed.splitn(2, char::is_whitespace);
        let number = tokens
            .next()
            .unwrap_or_default()
            .parse::<f64>()
            .map_err(|_| UnitError::MalformedValue(text.to_string()))?;
        let unit = match tokens.next() {
            Some(rest) => Unit::parse(rest)?,
            None => Unit::dimensionless(),
        };
        Ok(Self::new(number, unit))
    }

    /// The numeric value, in this value's own unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit this value is expressed in.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Re-express this value in a dimensionally compatible unit.
    pub fn to(&self, unit: &Unit) -> Result<ScalarValue, UnitError> {
        let factor = self.unit.factor_to(unit)?;
        Ok(ScalarValue::new(self.value * factor, unit.clone()))
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol().is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol())
        }
    }
}

/// The wire form of a physical value: `{"value": number, "unit": string}`.
///
/// This is the shape every coordinate and offset takes in the exported
/// sparse mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueObject {
    /// Numeric value
    pub value: f64,
    /// Unit symbol the value is expressed in
    pub unit: String,
}

impl ValueObject {
    /// Create a wire value from a number and a unit symbol.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Parse the unit symbol and rebuild the physical value.
    pub fn to_scalar(&self) -> Result<ScalarValue, UnitError> {
        Ok(ScalarValue::new(self.value, Unit::parse(&self.unit)?))
    }
}

impl From<&ScalarValue> for ValueObject {
    fn from(value: &ScalarValue) -> Self {
        Self::new(value.value(), value.unit().symbol())
    }
}
