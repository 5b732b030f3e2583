/// Errors that can occur while parsing or converting units
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// A unit symbol is not in the recognized symbol table
    #[error("Unrecognized unit symbol: '{0}'")]
    UnknownSymbol(String),

    /// A unit expression could not be parsed
    #[error("Malformed unit expression: '{0}'")]
    Malformed(String),

    /// Two units have different physical dimensions
    #[error("Incompatible units: cannot convert '{from}' to '{to}'")]
    Incompatible {
        /// Symbol of the source unit
        from: String,
        /// Symbol of the target unit
        to: String,
    },

    /// A physical value string could not be parsed
    #[error("Malformed physical value: '{0}'")]
    MalformedValue(String),
}
