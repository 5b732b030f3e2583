//! # coordax - Coordinate Axes for Scientific Dataset Interchange
//!
//! `coordax` models the quantitative coordinate axes of a scientific
//! dataset interchange format: physical-unit-aware sample sequences with
//! offset/periodicity semantics, a reciprocal-space dual axis, and a
//! reversible dimensionless-normalization mode, serialized to and from a
//! sparse JSON representation.
//!
//! ## Key Features
//!
//! - **Non-linear quantitative axes**: arbitrary (non-uniformly-spaced)
//!   sample points, validated and stored in a canonical physical unit.
//!
//! - **Offset semantics**: a reference offset defines where zero sits for
//!   display, while absolute coordinates always reconstruct the original
//!   physical scale including the origin offset.
//!
//! - **Dimensionless mode**: a guarded, reversible normalization of the
//!   coordinates by `origin_offset + reference_offset`, expressed in ppm.
//!
//! - **Reciprocal space**: a Fourier-dual axis with its own offsets,
//!   periodicity, and labels, derived on demand from the primary samples.
//!
//! - **Sparse serialization**: only fields that differ from their defaults
//!   appear in the exported mapping, and export/import is a fixed point.
//!
//! ## Quick Start
//!
//! ```rust
//! use coordax::prelude::*;
//!
//! let samples: Vec<ScalarValue> = ["0 s", "1 s", "2 s", "3 s"]
//!     .iter()
//!     .map(|s| ScalarValue::parse(s))
//!     .collect::<Result<_, _>>()?;
//!
//! let mut axis = CoordinateAxis::builder(samples)
//!     .reference_offset(ScalarValue::parse("1 s")?)
//!     .build()?;
//!
//! assert_eq!(axis.coordinates(), &[-1.0, 0.0, 1.0, 2.0][..]);
//!
//! axis.set_origin_offset(ScalarValue::parse("5 s")?)?;
//! assert_eq!(axis.absolute_coordinates(), &[4.0, 5.0, 6.0, 7.0][..]);
//!
//! let json = axis.export().to_json()?;
//! let restored = CoordinateAxis::from_export(&AxisExport::from_json(&json)?)?;
//! assert_eq!(restored.coordinates(), axis.coordinates());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`units`]: the physical-unit/quantity engine (parsing, conversion,
//!   inversion, recognized quantity names)
//! - [`axis`]: the coordinate axis core (construction, derivation,
//!   dimensionless state machine, reciprocal space, sparse export)

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod axis;
pub mod units;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::axis::{AxisBuilder, AxisError, AxisExport, CoordinateAxis, ReciprocalExport};
    pub use crate::units::{check_quantity, ScalarValue, Unit, UnitError, ValueObject};
}
