use crate::units::UnitError;

/// Errors that can occur while constructing or mutating a coordinate axis
#[derive(Debug, thiserror::Error)]
pub enum AxisError {
    /// A supplied value's physical dimension is incompatible with the
    /// axis's canonical unit
    #[error("Unit mismatch: expected a value compatible with '{expected}', found '{found}'")]
    UnitMismatch {
        /// Unit the value was validated against
        expected: String,
        /// Unit the value was supplied in
        found: String,
    },

    /// A quantity name is not recognized as compatible with the axis's unit
    #[error("Quantity '{quantity}' is not recognized for unit '{unit}'")]
    InvalidQuantity {
        /// The rejected quantity name
        quantity: String,
        /// The unit the name was validated against
        unit: String,
    },

    /// Dimensionless conversion attempted with a zero denominator;
    /// non-fatal: the axis remains valid and unmodified
    #[error(
        "Cannot make coordinates dimensionless: 'origin_offset' {origin_offset} + \
         'reference_offset' {reference_offset} is zero; no changes made"
    )]
    DimensionlessConversion {
        /// Origin offset at the time of the refused transition
        origin_offset: String,
        /// Reference offset at the time of the refused transition
        reference_offset: String,
    },

    /// Mutation attempted on a field that is fixed after construction
    #[error("Field '{0}' cannot be modified after construction")]
    ImmutableField(&'static str),

    /// A required construction input is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A construction or mutation input has an invalid value
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidFieldValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Error from the unit engine (parsing, conversion)
    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
