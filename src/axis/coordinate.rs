use std::ops;

use log::{debug, warn};

use crate::units::{check_quantity, ScalarValue, Unit};

use super::error::AxisError;
use super::metadata::AxisMetadata;

/// Sampling tag carried by every non-linear quantitative axis.
const SAMPLING_TYPE: &str = "non-linear";

/// Scale factor from a pure ratio to parts-per-million.
const PPM_PER_RATIO: f64 = 1e6;

/// Unit-state of the stored coordinate sequences.
///
/// The two transitions are exact inverses; toggling twice with no other
/// mutation in between restores the physical coordinates exactly because
/// both directions re-derive from the immutable raw samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitState {
    /// Coordinates carry the axis's physical unit (or the display unit
    /// selected via `convert_to`)
    Physical,
    /// Coordinates are normalized by `origin_offset + reference_offset`
    /// and expressed in ppm
    Dimensionless,
}

/// A non-linear quantitative coordinate axis.
///
/// Owns an immutable ordered sequence of physical sample values in a
/// canonical unit fixed at construction, the derived `coordinates` and
/// `absolute_coordinates` sequences, offset/periodicity/reversal metadata
/// for both the primary and the reciprocal (Fourier-dual) space, and the
/// dimensionless-normalization state.
///
/// Every mutation that affects derived data re-runs the derivation
/// synchronously before the mutator returns; there is no deferred
/// recomputation. The axis is a plain in-memory value with no internal
/// synchronization - concurrent mutation requires external exclusion.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateAxis {
    unit: Unit,
    reciprocal_unit: Unit,
    display_unit: Unit,
    display_factor: f64,
    raw: Vec<f64>,
    coordinates: Vec<f64>,
    absolute_coordinates: Vec<f64>,
    state: UnitState,
    primary: AxisMetadata,
    reciprocal: AxisMetadata,
    reciprocal_made_dimensionless: bool,
    non_quantitative: bool,
}

/// Fluent builder for [`CoordinateAxis`].
///
/// Only the sample sequence is required; unset offsets default to zero in
/// the relevant unit and unset periodicities default to "no periodicity".
#[derive(Debug, Clone)]
pub struct AxisBuilder {
    samples: Vec<ScalarValue>,
    reference_offset: Option<ScalarValue>,
    origin_offset: Option<ScalarValue>,
    periodicity: Option<ScalarValue>,
    reverse: bool,
    label: String,
    quantity: Option<String>,
    made_dimensionless: bool,
    non_quantitative: bool,
    reciprocal_reference_offset: Option<ScalarValue>,
    reciprocal_origin_offset: Option<ScalarValue>,
    reciprocal_periodicity: Option<ScalarValue>,
    reciprocal_reverse: bool,
    reciprocal_label: String,
    reciprocal_quantity: Option<String>,
    reciprocal_made_dimensionless: bool,
}

impl AxisBuilder {
    /// Start a builder from the raw sample sequence.
    pub fn new(samples: Vec<ScalarValue>) -> Self {
        Self {
            samples,
            reference_offset: None,
            origin_offset: None,
            periodicity: None,
            reverse: false,
            label: String::new(),
            quantity: None,
            made_dimensionless: false,
            non_quantitative: false,
            reciprocal_reference_offset: None,
            reciprocal_origin_offset: None,
            reciprocal_periodicity: None,
            reciprocal_reverse: false,
            reciprocal_label: String::new(),
            reciprocal_quantity: None,
            reciprocal_made_dimensionless: false,
        }
    }

    /// Set the primary reference offset.
    pub fn reference_offset(mut self, value: ScalarValue) -> Self {
        self.reference_offset = Some(value);
        self
    }

    /// Set the primary origin offset.
    pub fn origin_offset(mut self, value: ScalarValue) -> Self {
        self.origin_offset = Some(value);
        self
    }

    /// Set the primary repeat interval.
    pub fn periodicity(mut self, value: ScalarValue) -> Self {
        self.periodicity = Some(value);
        self
    }

    /// Mark the primary axis for reversed display.
    pub fn reverse(mut self, value: bool) -> Self {
        self.reverse = value;
        self
    }

    /// Set the primary axis label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the primary quantity name (validated against the unit at build).
    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Build the axis in dimensionless mode.
    pub fn made_dimensionless(mut self, value: bool) -> Self {
        self.made_dimensionless = value;
        self
    }

    /// Tag the axis as label-only (non-physical).
    pub fn non_quantitative(mut self, value: bool) -> Self {
        self.non_quantitative = value;
        self
    }

    /// Set the reciprocal-space reference offset.
    pub fn reciprocal_reference_offset(mut self, value: ScalarValue) -> Self {
        self.reciprocal_reference_offset = Some(value);
        self
    }

    /// Set the reciprocal-space origin offset.
    pub fn reciprocal_origin_offset(mut self, value: ScalarValue) -> Self {
        self.reciprocal_origin_offset = Some(value);
        self
    }

    /// Set the reciprocal-space repeat interval.
    pub fn reciprocal_periodicity(mut self, value: ScalarValue) -> Self {
        self.reciprocal_periodicity = Some(value);
        self
    }

    /// Mark the reciprocal axis for reversed display.
    pub fn reciprocal_reverse(mut self, value: bool) -> Self {
        self.reciprocal_reverse = value;
        self
    }

    /// Set the reciprocal axis label.
    pub fn reciprocal_label(mut self, label: impl Into<String>) -> Self {
        self.reciprocal_label = label.into();
        self
    }

    /// Set the reciprocal quantity name (validated against the inverse unit).
    pub fn reciprocal_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.reciprocal_quantity = Some(quantity.into());
        self
    }

    /// Store the reciprocal dimensionless flag (see
    /// [`CoordinateAxis::set_reciprocal_made_dimensionless`]).
    pub fn reciprocal_made_dimensionless(mut self, value: bool) -> Self {
        self.reciprocal_made_dimensionless = value;
        self
    }

    /// Validate the inputs and construct the axis.
    ///
    /// The canonical unit is taken from the first sample; every other
    /// sample must be dimensionally compatible with it. Offsets and
    /// periodicities are validated against the unit of the space they
    /// belong to, quantity names against the unit's recognized physical
    /// quantity. The derived sequences are populated before this returns.
    pub fn build(self) -> Result<CoordinateAxis, AxisError> {
        let first = self
            .samples
            .first()
            .ok_or(AxisError::MissingRequiredField("coordinates"))?;
        let unit = first.unit().clone();
        let reciprocal_unit = unit.inverse();

        let mut raw = Vec::with_capacity(self.samples.len());
        for sample in &self.samples {
            raw.push(convert_into(sample, &unit)?);
        }

        let primary = AxisMetadata {
            reference_offset: offset_in(self.reference_offset.as_ref(), &unit)?,
            origin_offset: offset_in(self.origin_offset.as_ref(), &unit)?,
            periodicity: periodicity_in(self.periodicity.as_ref(), &unit, "periodicity")?,
            reverse: self.reverse,
            label: self.label,
            quantity: resolve_quantity(self.quantity.as_deref(), &unit)?,
        };
        let reciprocal = AxisMetadata {
            reference_offset: offset_in(self.reciprocal_reference_offset.as_ref(), &reciprocal_unit)?,
            origin_offset: offset_in(self.reciprocal_origin_offset.as_ref(), &reciprocal_unit)?,
            periodicity: periodicity_in(
                self.reciprocal_periodicity.as_ref(),
                &reciprocal_unit,
                "reciprocal periodicity",
            )?,
            reverse: self.reciprocal_reverse,
            label: self.reciprocal_label,
            quantity: resolve_quantity(self.reciprocal_quantity.as_deref(), &reciprocal_unit)?,
        };

        let mut axis = CoordinateAxis {
            display_unit: unit.clone(),
            display_factor: 1.0,
            unit,
            reciprocal_unit,
            raw,
            coordinates: Vec::new(),
            absolute_coordinates: Vec::new(),
            state: UnitState::Physical,
            primary,
            reciprocal,
            reciprocal_made_dimensionless: self.reciprocal_made_dimensionless,
            non_quantitative: self.non_quantitative,
        };
        axis.rederive();
        if self.made_dimensionless {
            axis.set_made_dimensionless(true)?;
        }
        Ok(axis)
    }
}

impl CoordinateAxis {
    /// Start building an axis from the raw sample sequence.
    pub fn builder(samples: Vec<ScalarValue>) -> AxisBuilder {
        AxisBuilder::new(samples)
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// The canonical physical unit, fixed at construction.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The reciprocal-space unit, the dimensional inverse of [`unit`](Self::unit).
    pub fn reciprocal_unit(&self) -> &Unit {
        &self.reciprocal_unit
    }

    /// The immutable raw samples, in the canonical unit.
    pub fn raw_coordinates(&self) -> &[f64] {
        &self.raw
    }

    /// The derived coordinate sequence (offset-adjusted, and normalized
    /// when dimensionless mode is active).
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// The unit the derived coordinates are currently expressed in: the
    /// display unit in the physical state, ppm in the dimensionless state.
    pub fn coordinate_unit(&self) -> Unit {
        match self.state {
            UnitState::Physical => self.display_unit.clone(),
            UnitState::Dimensionless => Unit::ppm(),
        }
    }

    /// The derived absolute sequence: `coordinates + origin_offset`, in
    /// the same unit-state as `coordinates`.
    pub fn absolute_coordinates(&self) -> &[f64] {
        &self.absolute_coordinates
    }

    /// Number of sample points; equal for the primary and reciprocal space.
    pub fn number_of_points(&self) -> usize {
        self.raw.len()
    }

    /// Sampling tag of this axis variant.
    pub fn sampling_type(&self) -> &'static str {
        SAMPLING_TYPE
    }

    /// Whether the axis is tagged as label-only (non-physical).
    pub fn non_quantitative(&self) -> bool {
        self.non_quantitative
    }

    /// The primary reference offset, in the canonical unit.
    pub fn reference_offset(&self) -> ScalarValue {
        ScalarValue::new(self.primary.reference_offset, self.unit.clone())
    }

    /// The primary origin offset, in the canonical unit.
    pub fn origin_offset(&self) -> ScalarValue {
        ScalarValue::new(self.primary.origin_offset, self.unit.clone())
    }

    /// The primary repeat interval, or `None` when the axis is not cyclic.
    pub fn periodicity(&self) -> Option<ScalarValue> {
        self.primary
            .has_periodicity()
            .then(|| ScalarValue::new(self.primary.periodicity, self.unit.clone()))
    }

    /// Whether the primary axis is displayed in descending order.
    pub fn reverse(&self) -> bool {
        self.primary.reverse
    }

    /// The primary axis label.
    pub fn label(&self) -> &str {
        &self.primary.label
    }

    /// The primary quantity name.
    pub fn quantity(&self) -> &str {
        &self.primary.quantity
    }

    /// Whether dimensionless mode is active.
    pub fn made_dimensionless(&self) -> bool {
        self.state == UnitState::Dimensionless
    }

    /// The reciprocal-space reference offset, in the reciprocal unit.
    pub fn reciprocal_reference_offset(&self) -> ScalarValue {
        ScalarValue::new(self.reciprocal.reference_offset, self.reciprocal_unit.clone())
    }

    /// The reciprocal-space origin offset, in the reciprocal unit.
    pub fn reciprocal_origin_offset(&self) -> ScalarValue {
        ScalarValue::new(self.reciprocal.origin_offset, self.reciprocal_unit.clone())
    }

    /// The reciprocal repeat interval, or `None` when not cyclic.
    pub fn reciprocal_periodicity(&self) -> Option<ScalarValue> {
        self.reciprocal
            .has_periodicity()
            .then(|| ScalarValue::new(self.reciprocal.periodicity, self.reciprocal_unit.clone()))
    }

    /// Whether the reciprocal axis is displayed in descending order.
    pub fn reciprocal_reverse(&self) -> bool {
        self.reciprocal.reverse
    }

    /// The reciprocal axis label.
    pub fn reciprocal_label(&self) -> &str {
        &self.reciprocal.label
    }

    /// The reciprocal quantity name.
    pub fn reciprocal_quantity(&self) -> &str {
        &self.reciprocal.quantity
    }

    /// The stored reciprocal dimensionless flag (never transforms data).
    pub fn reciprocal_made_dimensionless(&self) -> bool {
        self.reciprocal_made_dimensionless
    }

    // ------------------------------------------------------------------
    // Reciprocal derivation (on demand, never stored)
    // ------------------------------------------------------------------

    /// The reciprocal-space coordinate sequence, in the reciprocal unit.
    ///
    /// The base dual grid for N samples spanning `L = raw[N-1] - raw[0]`
    /// is `k[i] = i / L`, offset-adjusted with the reciprocal metadata.
    /// Fails for a zero-span axis (a single point, or equal endpoints),
    /// which has no dual grid.
    pub fn reciprocal_coordinates(&self) -> Result<Vec<f64>, AxisError> {
        let base = self.reciprocal_base()?;
        Ok(derive_sequences(&base, &self.reciprocal, 1.0).0)
    }

    /// The reciprocal-space absolute sequence:
    /// `reciprocal_coordinates + reciprocal_origin_offset`.
    pub fn reciprocal_absolute_coordinates(&self) -> Result<Vec<f64>, AxisError> {
        let base = self.reciprocal_base()?;
        Ok(derive_sequences(&base, &self.reciprocal, 1.0).1)
    }

    fn reciprocal_base(&self) -> Result<Vec<f64>, AxisError> {
        let first = self.raw.first().copied().unwrap_or_default();
        let last = self.raw.last().copied().unwrap_or_default();
        let span = last - first;
        if span == 0.0 {
            return Err(AxisError::InvalidFieldValue {
                field: "reciprocal_coordinates",
                reason: "the dual grid is undefined for a zero-span axis".to_string(),
            });
        }
        Ok((0..self.raw.len()).map(|i| i as f64 / span).collect())
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Set the primary reference offset and re-derive the coordinates.
    ///
    /// While dimensionless mode is active, an offset that would drive the
    /// normalization denominator to zero is rejected without any change.
    pub fn set_reference_offset(&mut self, value: ScalarValue) -> Result<(), AxisError> {
        let converted = convert_into(&value, &self.unit)?;
        self.store_reference_offset(converted)
    }

    /// Set the primary origin offset and re-derive the coordinates.
    ///
    /// Subject to the same zero-denominator guard as
    /// [`set_reference_offset`](Self::set_reference_offset).
    pub fn set_origin_offset(&mut self, value: ScalarValue) -> Result<(), AxisError> {
        let converted = convert_into(&value, &self.unit)?;
        if self.state == UnitState::Dimensionless
            && converted + self.primary.reference_offset == 0.0
        {
            return Err(AxisError::DimensionlessConversion {
                origin_offset: ScalarValue::new(converted, self.unit.clone()).to_string(),
                reference_offset: self.reference_offset().to_string(),
            });
        }
        self.primary.origin_offset = converted;
        self.rederive();
        Ok(())
    }

    /// Set the primary repeat interval. The value must be positive; an
    /// infinite value clears the periodicity.
    pub fn set_periodicity(&mut self, value: ScalarValue) -> Result<(), AxisError> {
        self.primary.periodicity = checked_periodicity(&value, &self.unit, "periodicity")?;
        Ok(())
    }

    /// Set the primary display-reversal hint. Does not reorder stored data.
    pub fn set_reverse(&mut self, value: bool) {
        self.primary.reverse = value;
    }

    /// Set the primary axis label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.primary.label = label.into();
    }

    /// Set the primary quantity name, validated against the canonical unit.
    pub fn set_quantity(&mut self, quantity: &str) -> Result<(), AxisError> {
        self.primary.quantity = resolve_quantity(Some(quantity), &self.unit)?;
        Ok(())
    }

    /// Toggle dimensionless mode.
    ///
    /// A request matching the current state returns immediately without
    /// touching the coordinates. Entering dimensionless mode requires
    /// `origin_offset + reference_offset` to be non-zero; otherwise the
    /// transition is refused, a diagnostic is logged, and the axis is left
    /// unmodified. Both directions re-derive from the raw samples, so
    /// toggling twice restores the physical coordinates exactly.
    pub fn set_made_dimensionless(&mut self, value: bool) -> Result<(), AxisError> {
        let target = if value {
            UnitState::Dimensionless
        } else {
            UnitState::Physical
        };
        if self.state == target {
            return Ok(());
        }
        if target == UnitState::Dimensionless && self.denominator() == 0.0 {
            warn!(
                "refusing dimensionless conversion: 'origin_offset' ({}) + 'reference_offset' ({}) is zero; no changes made",
                self.origin_offset(),
                self.reference_offset(),
            );
            return Err(self.zero_denominator_error());
        }
        self.state = target;
        self.rederive();
        Ok(())
    }

    /// Set the reciprocal-space reference offset.
    ///
    /// Reciprocal coordinates are derived on demand, so the effect is
    /// observed on the next reciprocal read.
    pub fn set_reciprocal_reference_offset(&mut self, value: ScalarValue) -> Result<(), AxisError> {
        self.reciprocal.reference_offset = convert_into(&value, &self.reciprocal_unit)?;
        Ok(())
    }

    /// Set the reciprocal-space origin offset.
    pub fn set_reciprocal_origin_offset(&mut self, value: ScalarValue) -> Result<(), AxisError> {
        self.reciprocal.origin_offset = convert_into(&value, &self.reciprocal_unit)?;
        Ok(())
    }

    /// Set the reciprocal repeat interval. The value must be positive; an
    /// infinite value clears the periodicity.
    pub fn set_reciprocal_periodicity(&mut self, value: ScalarValue) -> Result<(), AxisError> {
        self.reciprocal.periodicity =
            checked_periodicity(&value, &self.reciprocal_unit, "reciprocal periodicity")?;
        Ok(())
    }

    /// Set the reciprocal display-reversal hint.
    pub fn set_reciprocal_reverse(&mut self, value: bool) {
        self.reciprocal.reverse = value;
    }

    /// Set the reciprocal axis label.
    pub fn set_reciprocal_label(&mut self, label: impl Into<String>) {
        self.reciprocal.label = label.into();
    }

    /// Set the reciprocal quantity name, validated against the inverse unit.
    pub fn set_reciprocal_quantity(&mut self, quantity: &str) -> Result<(), AxisError> {
        self.reciprocal.quantity = resolve_quantity(Some(quantity), &self.reciprocal_unit)?;
        Ok(())
    }

    /// Store the reciprocal dimensionless flag.
    ///
    /// The reciprocal conversion itself is deliberately not implemented:
    /// the flag is recorded and round-trips through the export, but never
    /// transforms reciprocal data.
    pub fn set_reciprocal_made_dimensionless(&mut self, value: bool) {
        self.reciprocal_made_dimensionless = value;
    }

    // ------------------------------------------------------------------
    // Immutable structural fields
    // ------------------------------------------------------------------

    /// The canonical unit is fixed at construction; always fails.
    pub fn set_unit(&mut self, _unit: Unit) -> Result<(), AxisError> {
        Err(AxisError::ImmutableField("unit"))
    }

    /// The raw samples are fixed at construction; always fails.
    pub fn set_raw_coordinates(&mut self, _samples: Vec<ScalarValue>) -> Result<(), AxisError> {
        Err(AxisError::ImmutableField("raw_coordinates"))
    }

    /// The point count is fixed at construction; always fails.
    pub fn set_number_of_points(&mut self, _count: usize) -> Result<(), AxisError> {
        Err(AxisError::ImmutableField("number_of_points"))
    }

    /// The sampling tag is fixed for this axis variant; always fails.
    pub fn set_sampling_type(&mut self, _tag: &str) -> Result<(), AxisError> {
        Err(AxisError::ImmutableField("sampling_type"))
    }

    // ------------------------------------------------------------------
    // Unit change and shifts
    // ------------------------------------------------------------------

    /// Re-express the derived coordinates in a dimensionally compatible
    /// unit without altering the raw samples.
    ///
    /// In dimensionless mode the display unit is recorded and takes
    /// effect when the physical state returns.
    pub fn convert_to(&mut self, unit: &Unit) -> Result<(), AxisError> {
        let factor = self
            .unit
            .factor_to(unit)
            .map_err(|_| unit_mismatch(&self.unit, unit))?;
        self.display_unit = unit.clone();
        self.display_factor = factor;
        self.rederive();
        Ok(())
    }

    /// Shift the axis forward by `delta`: the effective zero point moves
    /// forward, so `reference_offset` decreases by `delta`. Equivalent to
    /// `axis += delta`.
    pub fn shift_forward(&mut self, delta: &ScalarValue) -> Result<(), AxisError> {
        let converted = convert_into(delta, &self.unit)?;
        self.store_reference_offset(self.primary.reference_offset - converted)
    }

    /// Shift the axis backward by `delta`: `reference_offset` increases by
    /// `delta`. Equivalent to `axis -= delta`.
    pub fn shift_backward(&mut self, delta: &ScalarValue) -> Result<(), AxisError> {
        let converted = convert_into(delta, &self.unit)?;
        self.store_reference_offset(self.primary.reference_offset + converted)
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    /// Store a validated reference offset and re-derive, guarding the
    /// dimensionless denominator.
    fn store_reference_offset(&mut self, value: f64) -> Result<(), AxisError> {
        if self.state == UnitState::Dimensionless && self.primary.origin_offset + value == 0.0 {
            return Err(AxisError::DimensionlessConversion {
                origin_offset: self.origin_offset().to_string(),
                reference_offset: ScalarValue::new(value, self.unit.clone()).to_string(),
            });
        }
        self.primary.reference_offset = value;
        self.rederive();
        Ok(())
    }

    /// Recompute `coordinates` and `absolute_coordinates` from the raw
    /// samples and the current offsets/state.
    fn rederive(&mut self) {
        let scale = match self.state {
            UnitState::Physical => self.display_factor,
            // the denominator is non-zero: every path into the
            // dimensionless state is guarded
            UnitState::Dimensionless => PPM_PER_RATIO / self.denominator(),
        };
        let (coordinates, absolute) = derive_sequences(&self.raw, &self.primary, scale);
        self.coordinates = coordinates;
        self.absolute_coordinates = absolute;
        debug!(
            "re-derived {} coordinates (reference_offset {}, origin_offset {}, {})",
            self.raw.len(),
            self.primary.reference_offset,
            self.primary.origin_offset,
            match self.state {
                UnitState::Physical => "physical",
                UnitState::Dimensionless => "dimensionless",
            },
        );
    }

    fn denominator(&self) -> f64 {
        self.primary.origin_offset + self.primary.reference_offset
    }

    fn zero_denominator_error(&self) -> AxisError {
        AxisError::DimensionlessConversion {
            origin_offset: self.origin_offset().to_string(),
            reference_offset: self.reference_offset().to_string(),
        }
    }
}

impl ops::AddAssign<ScalarValue> for CoordinateAxis {
    /// `axis += delta` shifts the axis forward (`reference_offset -= delta`).
    ///
    /// Panics if `delta`'s unit is incompatible with the axis unit; use
    /// [`CoordinateAxis::shift_forward`] for the fallible form.
    fn add_assign(&mut self, delta: ScalarValue) {
        if let Err(err) = self.shift_forward(&delta) {
            panic!("cannot shift axis forward: {err}");
        }
    }
}

impl ops::SubAssign<ScalarValue> for CoordinateAxis {
    /// `axis -= delta` shifts the axis backward (`reference_offset += delta`).
    ///
    /// Panics if `delta`'s unit is incompatible with the axis unit; use
    /// [`CoordinateAxis::shift_backward`] for the fallible form.
    fn sub_assign(&mut self, delta: ScalarValue) {
        if let Err(err) = self.shift_backward(&delta) {
            panic!("cannot shift axis backward: {err}");
        }
    }
}

/// Offset-adjust a base sequence against one metadata record, scaling
/// into the target display state. Shared by the primary derivation and
/// the on-demand reciprocal derivation.
fn derive_sequences(base: &[f64], meta: &AxisMetadata, scale: f64) -> (Vec<f64>, Vec<f64>) {
    let coordinates: Vec<f64> = base
        .iter()
        .map(|&x| (x - meta.reference_offset) * scale)
        .collect();
    let shift = meta.origin_offset * scale;
    let absolute = coordinates.iter().map(|&x| x + shift).collect();
    (coordinates, absolute)
}

/// Convert a value into the given unit, mapping incompatibility to the
/// axis error taxonomy.
fn convert_into(value: &ScalarValue, unit: &Unit) -> Result<f64, AxisError> {
    value
        .to(unit)
        .map(|converted| converted.value())
        .map_err(|_| unit_mismatch(unit, value.unit()))
}

fn unit_mismatch(expected: &Unit, found: &Unit) -> AxisError {
    AxisError::UnitMismatch {
        expected: expected.symbol().to_string(),
        found: found.symbol().to_string(),
    }
}

/// Validate an optional offset against the unit of its space; unset
/// offsets default to zero.
fn offset_in(value: Option<&ScalarValue>, unit: &Unit) -> Result<f64, AxisError> {
    match value {
        Some(v) => convert_into(v, unit),
        None => Ok(0.0),
    }
}

/// Validate an optional periodicity; unset means "no periodicity".
fn periodicity_in(
    value: Option<&ScalarValue>,
    unit: &Unit,
    field: &'static str,
) -> Result<f64, AxisError> {
    match value {
        Some(v) => checked_periodicity(v, unit, field),
        None => Ok(f64::INFINITY),
    }
}

/// A periodicity must be a positive value in the space's unit; a positive
/// infinity is the "no periodicity" sentinel.
fn checked_periodicity(
    value: &ScalarValue,
    unit: &Unit,
    field: &'static str,
) -> Result<f64, AxisError> {
    let converted = convert_into(value, unit)?;
    if converted > 0.0 {
        Ok(converted)
    } else {
        Err(AxisError::InvalidFieldValue {
            field,
            reason: format!("repeat interval must be positive, got {value}"),
        })
    }
}

/// Resolve a quantity name against a unit, mapping a rejected name to the
/// axis error taxonomy.
fn resolve_quantity(requested: Option<&str>, unit: &Unit) -> Result<String, AxisError> {
    check_quantity(requested, unit).ok_or_else(|| AxisError::InvalidQuantity {
        quantity: requested.unwrap_or_default().to_string(),
        unit: unit.symbol().to_string(),
    })
}
