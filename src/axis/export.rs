use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::{ScalarValue, ValueObject};

use super::coordinate::CoordinateAxis;
use super::error::AxisError;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Sparse wire form of a coordinate axis.
///
/// Only fields that differ from their defaults are serialized; the raw
/// sample sequence (in the canonical unit) is always present. Exporting
/// the raw samples rather than the derived coordinates makes the
/// export/import loop a fixed point: deserializing the mapping and
/// re-serializing reproduces the same mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisExport {
    /// The raw samples, as unit-tagged value objects in the canonical unit
    pub coordinates: Vec<ValueObject>,

    /// Primary reference offset, present when non-zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_offset: Option<ValueObject>,

    /// Primary origin offset, present when non-zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_offset: Option<ValueObject>,

    /// Reversed-display hint, present when set
    #[serde(default, skip_serializing_if = "is_false")]
    pub reverse: bool,

    /// Primary repeat interval, present when finite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<ValueObject>,

    /// Primary quantity name, present when it differs from the unit's
    /// recognized default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// Primary axis label, present when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Dimensionless-mode flag, present when active
    #[serde(default, skip_serializing_if = "is_false")]
    pub made_dimensionless: bool,

    /// Reciprocal-space fields, omitted entirely when all are default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reciprocal: Option<ReciprocalExport>,
}

/// Sparse wire form of the reciprocal-space fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReciprocalExport {
    /// Reciprocal reference offset, present when non-zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_offset: Option<ValueObject>,

    /// Reciprocal origin offset, present when non-zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_offset: Option<ValueObject>,

    /// Reversed-display hint, present when set
    #[serde(default, skip_serializing_if = "is_false")]
    pub reverse: bool,

    /// Reciprocal repeat interval, present when finite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<ValueObject>,

    /// Reciprocal quantity name, present when it differs from the inverse
    /// unit's recognized default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// Reciprocal axis label, present when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Stored reciprocal dimensionless flag, present when set
    #[serde(default, skip_serializing_if = "is_false")]
    pub made_dimensionless: bool,
}

impl ReciprocalExport {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl AxisExport {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, AxisError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AxisError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Export a non-zero offset as a value object.
fn nonzero(value: &ScalarValue) -> Option<ValueObject> {
    (value.value() != 0.0).then(|| ValueObject::from(value))
}

fn nonempty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

impl CoordinateAxis {
    /// Produce the sparse wire form of this axis.
    pub fn export(&self) -> AxisExport {
        let unit = self.unit();
        let coordinates = self
            .raw_coordinates()
            .iter()
            .map(|&value| ValueObject::new(value, unit.symbol()))
            .collect();

        // a quantity equal to the unit's recognized default is sparse
        let quantity = (self.quantity() != unit.physical_quantity())
            .then(|| self.quantity().to_string());
        let reciprocal_quantity = (self.reciprocal_quantity()
            != self.reciprocal_unit().physical_quantity())
        .then(|| self.reciprocal_quantity().to_string());

        let reciprocal = ReciprocalExport {
            reference_offset: nonzero(&self.reciprocal_reference_offset()),
            origin_offset: nonzero(&self.reciprocal_origin_offset()),
            reverse: self.reciprocal_reverse(),
            periodicity: self.reciprocal_periodicity().as_ref().map(ValueObject::from),
            quantity: reciprocal_quantity,
            label: nonempty(self.reciprocal_label()),
            made_dimensionless: self.reciprocal_made_dimensionless(),
        };

        AxisExport {
            coordinates,
            reference_offset: nonzero(&self.reference_offset()),
            origin_offset: nonzero(&self.origin_offset()),
            reverse: self.reverse(),
            periodicity: self.periodicity().as_ref().map(ValueObject::from),
            quantity,
            label: nonempty(self.label()),
            made_dimensionless: self.made_dimensionless(),
            reciprocal: (!reciprocal.is_default()).then_some(reciprocal),
        }
    }

    /// Rebuild an axis from its sparse wire form, running the full
    /// construction validation path.
    pub fn from_export(export: &AxisExport) -> Result<CoordinateAxis, AxisError> {
        let samples = export
            .coordinates
            .iter()
            .map(|wire| wire.to_scalar())
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = CoordinateAxis::builder(samples)
            .reverse(export.reverse)
            .made_dimensionless(export.made_dimensionless);
        if let Some(wire) = &export.reference_offset {
            builder = builder.reference_offset(wire.to_scalar()?);
        }
        if let Some(wire) = &export.origin_offset {
            builder = builder.origin_offset(wire.to_scalar()?);
        }
        if let Some(wire) = &export.periodicity {
            builder = builder.periodicity(wire.to_scalar()?);
        }
        if let Some(quantity) = &export.quantity {
            builder = builder.quantity(quantity.clone());
        }
        if let Some(label) = &export.label {
            builder = builder.label(label.clone());
        }

        if let Some(reciprocal) = &export.reciprocal {
            builder = builder
                .reciprocal_reverse(reciprocal.reverse)
                .reciprocal_made_dimensionless(reciprocal.made_dimensionless);
            if let Some(wire) = &reciprocal.reference_offset {
                builder = builder.reciprocal_reference_offset(wire.to_scalar()?);
            }
            if let Some(wire) = &reciprocal.origin_offset {
                builder = builder.reciprocal_origin_offset(wire.to_scalar()?);
            }
            if let Some(wire) = &reciprocal.periodicity {
                builder = builder.reciprocal_periodicity(wire.to_scalar()?);
            }
            if let Some(quantity) = &reciprocal.quantity {
                builder = builder.reciprocal_quantity(quantity.clone());
            }
            if let Some(label) = &reciprocal.label {
                builder = builder.reciprocal_label(label.clone());
            }
        }

        builder.build()
    }
}

impl fmt::Display for CoordinateAxis {
    /// Pretty-printed JSON of the sparse wire form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(&self.export()).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}
