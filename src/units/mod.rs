//! # Physical Unit and Quantity Engine
//!
//! This module provides the unit capability consumed by the axis core:
//! parsing unit expressions, dimensional-compatibility checks, conversion
//! factors, unit inversion, and recognized physical-quantity names.
//!
//! Units are plain self-describing values (a base-dimension exponent
//! vector plus a scale factor to coherent SI); there is no global registry
//! and every conversion is a pure function, so code built on top of this
//! module stays deterministic and testable.

mod error;
mod quantity;
mod unit;
mod value;


pub use error::UnitError;
pub use quantity::check_quantity;
pub use unit::Unit;
pub use value::{ScalarValue, ValueObject};
