use super::Unit;

/// Quantity name for units whose dimension has no recognized name.
pub(crate) const UNKNOWN_QUANTITY: &str = "unknown";

impl Unit {
    /// The recognized physical-quantity name for this unit's dimension.
    ///
    /// Returns `"unknown"` for compound dimensions without a name.
    pub fn physical_quantity(&self) -> &'static str {
        match self.dims() {
            [0, 0, 0, 0, 0, 0, 0] => "dimensionless",
            [1, 0, 0, 0, 0, 0, 0] => "length",
            [-1, 0, 0, 0, 0, 0, 0] => "wavenumber",
            [0, 1, 0, 0, 0, 0, 0] => "mass",
            [0, 0, 1, 0, 0, 0, 0] => "time",
            [0, 0, -1, 0, 0, 0, 0] => "frequency",
            [0, 0, 0, 1, 0, 0, 0] => "electric current",
            [0, 0, 0, 0, 1, 0, 0] => "temperature",
            [0, 0, 0, 0, 0, 1, 0] => "amount of substance",
            [0, 0, 0, 0, 0, 0, 1] => "luminous intensity",
            [1, 0, -1, 0, 0, 0, 0] => "speed",
            _ => UNKNOWN_QUANTITY,
        }
    }
}

/// Resolve a requested quantity name against a unit's recognized quantity.
///
/// With no request, the unit's own recognized name is returned. A request
/// is accepted when it matches the recognized name, when it is
/// `"unknown"`, or when the unit's dimension has no recognized name to
/// validate against. Returns `None` for a mismatching request (e.g.
/// quantity `"frequency"` for a unit of seconds).
pub fn check_quantity(requested: Option<&str>, unit: &Unit) -> Option<String> {
    let recognized = unit.physical_quantity();
    match requested {
        None => Some(recognized.to_string()),
        Some(name)
            if name == recognized || name == UNKNOWN_QUANTITY || recognized == UNKNOWN_QUANTITY =>
        {
            Some(name.to_string())
        }
        Some(_) => None,
    }
}
