//! # Coordinate Axis Core
//!
//! The non-linear quantitative controlled variable of the dataset model:
//! an ordered set of physical sample positions with offset/periodicity
//! semantics, a reciprocal-space dual axis, a guarded dimensionless
//! normalization mode, and a sparse JSON export/import surface.
//!
//! Construction goes through [`AxisBuilder`]; every later mutation routes
//! through a validating setter that re-derives the coordinate sequences
//! synchronously before returning. The structural fields (`unit`, the raw
//! samples, the point count, the sampling tag) are fixed for the axis's
//! lifetime.

mod coordinate;
mod error;
mod export;
mod metadata;

#[cfg(test)]
mod tests;

pub use coordinate::{AxisBuilder, CoordinateAxis};
pub use error::AxisError;
pub use export::{AxisExport, ReciprocalExport};
