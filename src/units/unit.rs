use std::fmt;

use super::UnitError;

/// Number of SI base dimensions tracked per unit (m, kg, s, A, K, mol, cd).
const BASE_DIMENSIONS: usize = 7;

/// Exponent vector over the SI base dimensions.
type Dimensions = [i8; BASE_DIMENSIONS];

const DIMENSIONLESS: Dimensions = [0; BASE_DIMENSIONS];
const LENGTH: Dimensions = [1, 0, 0, 0, 0, 0, 0];
const MASS: Dimensions = [0, 1, 0, 0, 0, 0, 0];
const TIME: Dimensions = [0, 0, 1, 0, 0, 0, 0];
const FREQUENCY: Dimensions = [0, 0, -1, 0, 0, 0, 0];
const CURRENT: Dimensions = [0, 0, 0, 1, 0, 0, 0];
const TEMPERATURE: Dimensions = [0, 0, 0, 0, 1, 0, 0];
const AMOUNT: Dimensions = [0, 0, 0, 0, 0, 1, 0];
const LUMINOSITY: Dimensions = [0, 0, 0, 0, 0, 0, 1];

/// Recognized base symbols: (symbol, dimensions, scale to coherent SI).
///
/// The gram rather than the kilogram is the table entry so that SI
/// prefixes compose uniformly ("kg" = prefix "k" applied to "g").
const SYMBOL_TABLE: &[(&str, Dimensions, f64)] = &[
    ("m", LENGTH, 1.0),
    ("g", MASS, 1e-3),
    ("s", TIME, 1.0),
    ("A", CURRENT, 1.0),
    ("K", TEMPERATURE, 1.0),
    ("mol", AMOUNT, 1.0),
    ("cd", LUMINOSITY, 1.0),
    ("Hz", FREQUENCY, 1.0),
    ("min", TIME, 60.0),
    ("h", TIME, 3600.0),
    ("rad", DIMENSIONLESS, 1.0),
    ("sr", DIMENSIONLESS, 1.0),
    ("ppm", DIMENSIONLESS, 1e-6),
    ("%", DIMENSIONLESS, 1e-2),
];

/// SI prefixes accepted in front of any table symbol ("u" is an ASCII
/// alias for "µ").
const PREFIXES: &[(&str, f64)] = &[
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("µ", 1e-6),
    ("u", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
    ("z", 1e-21),
    ("y", 1e-24),
];

/// A physical unit: an exponent vector over the SI base dimensions, a
/// scale factor to coherent SI, and the display symbol it was built from.
///
/// Two units are dimensionally compatible when their exponent vectors
/// match; conversion between compatible units is the ratio of their
/// scale factors.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    dims: Dimensions,
    scale: f64,
    symbol: String,
}

impl Unit {
    /// Parse a unit expression.
    ///
    /// Accepted forms: a table symbol with an optional SI prefix and an
    /// optional integer exponent (`s`, `ms`, `cm`, `s^-1`, `µs`), products
    /// of such factors joined by `·` or `*`, and quotients (`1/s`, `m/s`,
    /// `J`-style compounds are not in the table). An empty string or `"1"`
    /// parses as the dimensionless unit.
    pub fn parse(text: &str) -> Result<Unit, UnitError> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "1" {
            return Ok(Unit::dimensionless());
        }

        let mut parts = trimmed.split('/');
        let numerator = parts.next().unwrap_or_default().trim();
        if numerator.is_empty() {
            return Err(UnitError::Malformed(text.to_string()));
        }

        let (mut dims, mut scale) = if numerator == "1" {
            (DIMENSIONLESS, 1.0)
        } else {
            parse_product(numerator, text)?
        };

        for part in parts {
            let part = part.trim();
            if part.is_empty() {
                return Err(UnitError::Malformed(text.to_string()));
            }
            let (d, s) = parse_product(part, text)?;
            for (slot, exponent) in dims.iter_mut().zip(d) {
                *slot -= exponent;
            }
            scale /= s;
        }

        Ok(Unit {
            dims,
            scale,
            symbol: trimmed.to_string(),
        })
    }

    /// The dimensionless unit (empty symbol, unit scale).
    pub fn dimensionless() -> Unit {
        Unit {
            dims: DIMENSIONLESS,
            scale: 1.0,
            symbol: String::new(),
        }
    }

    /// Parts-per-million, the fractional unit used by dimensionless mode.
    pub fn ppm() -> Unit {
        Unit {
            dims: DIMENSIONLESS,
            scale: 1e-6,
            symbol: "ppm".to_string(),
        }
    }

    /// The dimensional inverse of this unit.
    ///
    /// Exponents are negated and the scale is reciprocated; the symbol is
    /// synthesized so that it parses back to the same unit (`s` -> `1/s`,
    /// `1/s` -> `s`, `m/s` -> `s/m`).
    pub fn inverse(&self) -> Unit {
        let dims = self.dims.map(|d| -d);
        let scale = 1.0 / self.scale;
        let symbol = if self.symbol.is_empty() {
            String::new()
        } else {
            let mut parts = self.symbol.split('/');
            let head = parts.next().unwrap_or_default().to_string();
            let tail: Vec<&str> = parts.collect();
            if tail.is_empty() {
                format!("1/{}", head)
            } else if head == "1" {
                tail.join("·")
            } else {
                format!("{}/{}", tail.join("·"), head)
            }
        };
        Unit { dims, scale, symbol }
    }

    /// Whether this unit carries no physical dimension.
    pub fn is_dimensionless(&self) -> bool {
        self.dims == DIMENSIONLESS
    }

    /// Whether two units share the same physical dimension.
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dims == other.dims
    }

    /// Multiplicative factor converting a value in this unit into `other`.
    pub fn factor_to(&self, other: &Unit) -> Result<f64, UnitError> {
        if !self.is_compatible(other) {
            return Err(UnitError::Incompatible {
                from: self.symbol.clone(),
                to: other.symbol.clone(),
            });
        }
        Ok(self.scale / other.scale)
    }

    /// The display symbol this unit was built from.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub(crate) fn dims(&self) -> Dimensions {
        self.dims
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Parse a product of prefixed/exponentiated factors (`ms`, `s^-1`,
/// `kg·m`). `source` is the full expression, used for error reporting.
fn parse_product(text: &str, source: &str) -> Result<(Dimensions, f64), UnitError> {
    let mut dims = DIMENSIONLESS;
    let mut scale = 1.0;
    for factor in text.split(['·', '*']) {
        let factor = factor.trim();
        if factor.is_empty() {
            return Err(UnitError::Malformed(source.to_string()));
        }
        let (d, s) = parse_factor(factor, source)?;
        for (slot, exponent) in dims.iter_mut().zip(d) {
            *slot += exponent;
        }
        scale *= s;
    }
    Ok((dims, scale))
}

/// Parse one factor: a table symbol, optionally prefixed, optionally
/// raised to an integer exponent via `^`.
fn parse_factor(text: &str, source: &str) -> Result<(Dimensions, f64), UnitError> {
    let (symbol, exponent) = match text.split_once('^') {
        Some((s, e)) => {
            let exponent: i32 = e
                .trim()
                .parse()
                .map_err(|_| UnitError::Malformed(source.to_string()))?;
            (s.trim(), exponent)
        }
        None => (text, 1),
    };

    let (dims, scale) =
        lookup(symbol).ok_or_else(|| UnitError::UnknownSymbol(symbol.to_string()))?;

    let dims = dims.map(|d| d * exponent as i8);
    Ok((dims, scale.powi(exponent)))
}

/// Resolve a symbol against the table, trying an exact match before
/// peeling a prefix. Exact matches win so that "min" is minutes rather
/// than milli-"in".
fn lookup(symbol: &str) -> Option<(Dimensions, f64)> {
    for &(name, dims, scale) in SYMBOL_TABLE {
        if name == symbol {
            return Some((dims, scale));
        }
    }
    for &(prefix, factor) in PREFIXES {
        if let Some(rest) = symbol.strip_prefix(prefix) {
            for &(name, dims, scale) in SYMBOL_TABLE {
                if name == rest {
                    return Some((dims, factor * scale));
                }
            }
        }
    }
    None
}
