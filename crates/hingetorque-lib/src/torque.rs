//! Hinge moment (torque) estimation for trapezoidal control surfaces.
//!
//! The model is the standard hinge moment relation
//! `H = q * S * c_bar * Ch`, with `q = 0.5 * rho * V^2`, `S` the planform area
//! and `c_bar` the mean chord of the surface.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{NM_TO_KG_CM, SAFETY_MARGIN_MAX, SAFETY_MARGIN_MIN};
use crate::error::{Error, Result};
use crate::surface::{SurfaceField, SurfaceInputs};

/// Result of a single hinge torque estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorqueEstimate {
    /// Signed hinge moment in N·m. The sign follows the hinge moment coefficient.
    pub torque_nm: f64,
    /// Torque magnitude in kg·cm, the unit used for servo ratings.
    pub torque_kg_cm: f64,
    /// Mean chord in metres.
    pub mean_chord: f64,
    /// Planform area in m².
    pub surface_area: f64,
    /// Dynamic pressure in N/m².
    pub dynamic_pressure: f64,
}

impl TorqueEstimate {
    /// Servo torque range (kg·cm) after applying the 1.5x to 2x safety margin.
    pub fn recommended_kg_cm(&self) -> (f64, f64) {
        (
            self.torque_kg_cm * SAFETY_MARGIN_MIN,
            self.torque_kg_cm * SAFETY_MARGIN_MAX,
        )
    }

    /// Name of the first derived quantity that is not finite, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("mean chord", self.mean_chord),
            ("surface area", self.surface_area),
            ("dynamic pressure", self.dynamic_pressure),
            ("hinge torque", self.torque_nm),
            ("servo torque", self.torque_kg_cm),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(quantity, _)| quantity)
    }
}

/// Arithmetic mean of the root and tip chord.
pub fn mean_chord(root_chord: f64, tip_chord: f64) -> f64 {
    (root_chord + tip_chord) / 2.0
}

/// Planform area of a trapezoidal surface.
pub fn surface_area(span: f64, mean_chord: f64) -> f64 {
    span * mean_chord
}

/// Dynamic pressure `0.5 * rho * V^2` in N/m².
pub fn dynamic_pressure(air_density: f64, velocity: f64) -> f64 {
    0.5 * air_density * velocity * velocity
}

/// Convert a torque in N·m to a kg·cm magnitude. The sign is discarded.
pub fn nm_to_kg_cm(torque_nm: f64) -> f64 {
    torque_nm.abs() * NM_TO_KG_CM
}

/// Dynamic pressure for a flight condition, rejecting invalid or overflowing inputs.
pub fn checked_dynamic_pressure(air_density: f64, velocity: f64) -> Result<f64> {
    SurfaceField::AirDensity.validate(air_density)?;
    SurfaceField::Velocity.validate(velocity)?;
    let q = dynamic_pressure(air_density, velocity);
    if !q.is_finite() {
        return Err(Error::NonFiniteEstimate {
            quantity: "dynamic pressure",
        });
    }
    Ok(q)
}

pub(crate) fn estimate(inputs: &SurfaceInputs) -> TorqueEstimate {
    let mean_chord = mean_chord(inputs.root_chord(), inputs.tip_chord());
    let surface_area = surface_area(inputs.span(), mean_chord);
    let dynamic_pressure = dynamic_pressure(inputs.air_density(), inputs.velocity());
    let torque_nm =
        dynamic_pressure * surface_area * mean_chord * inputs.hinge_moment_coefficient();

    TorqueEstimate {
        torque_nm,
        torque_kg_cm: nm_to_kg_cm(torque_nm),
        mean_chord,
        surface_area,
        dynamic_pressure,
    }
}

/// Compute the hinge torque for validated inputs.
///
/// Pure function. Every value of the result is finite, since
/// [`SurfaceInputs`] can only be built from inputs whose estimate is finite.
pub fn compute_torque(inputs: &SurfaceInputs) -> TorqueEstimate {
    let estimate = estimate(inputs);
    debug!(
        mean_chord = estimate.mean_chord,
        surface_area = estimate.surface_area,
        dynamic_pressure = estimate.dynamic_pressure,
        torque_nm = estimate.torque_nm,
        torque_kg_cm = estimate.torque_kg_cm,
        "computed hinge torque"
    );
    estimate
}
