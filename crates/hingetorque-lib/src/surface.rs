//! Control surface inputs and their validation rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::torque;

/// Range rule applied to a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Finite and strictly greater than zero.
    Positive,
    /// Finite and greater than or equal to zero.
    NonNegative,
    /// Any finite value.
    Finite,
}

impl Constraint {
    /// Returns `true` when `value` satisfies this rule.
    pub fn admits(self, value: f64) -> bool {
        match self {
            Constraint::Finite => value.is_finite(),
            Constraint::Positive => Constraint::Finite.admits(value) && value > 0.0,
            Constraint::NonNegative => Constraint::Finite.admits(value) && value >= 0.0,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Constraint::Positive => "must be greater than zero",
            Constraint::NonNegative => "must not be negative",
            Constraint::Finite => "must be a finite number",
        };
        f.write_str(text)
    }
}

/// One of the six scalar inputs collected for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceField {
    AirDensity,
    Velocity,
    HingeMomentCoefficient,
    Span,
    RootChord,
    TipChord,
}

impl SurfaceField {
    /// All fields in prompt order.
    pub const ALL: [SurfaceField; 6] = [
        SurfaceField::AirDensity,
        SurfaceField::Velocity,
        SurfaceField::HingeMomentCoefficient,
        SurfaceField::Span,
        SurfaceField::RootChord,
        SurfaceField::TipChord,
    ];

    /// Fields describing the flight condition, shared by every surface.
    pub const FLIGHT_CONDITIONS: [SurfaceField; 2] =
        [SurfaceField::AirDensity, SurfaceField::Velocity];

    /// Fields describing a single control surface.
    pub const GEOMETRY: [SurfaceField; 4] = [
        SurfaceField::HingeMomentCoefficient,
        SurfaceField::Span,
        SurfaceField::RootChord,
        SurfaceField::TipChord,
    ];

    /// Human-readable label used in prompts and messages.
    pub fn label(self) -> &'static str {
        match self {
            SurfaceField::AirDensity => "air density",
            SurfaceField::Velocity => "velocity",
            SurfaceField::HingeMomentCoefficient => "hinge moment coefficient",
            SurfaceField::Span => "span",
            SurfaceField::RootChord => "root chord",
            SurfaceField::TipChord => "tip chord",
        }
    }

    /// Conventional symbol shown next to the label.
    pub fn symbol(self) -> &'static str {
        match self {
            SurfaceField::AirDensity => "rho",
            SurfaceField::Velocity => "V",
            SurfaceField::HingeMomentCoefficient => "Ch",
            SurfaceField::Span => "b",
            SurfaceField::RootChord => "c_root",
            SurfaceField::TipChord => "c_tip",
        }
    }

    /// Unit the value is entered in, or `None` for dimensionless fields.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            SurfaceField::AirDensity => Some("kg/m^3"),
            SurfaceField::Velocity => Some("m/s"),
            SurfaceField::HingeMomentCoefficient => None,
            SurfaceField::Span | SurfaceField::RootChord | SurfaceField::TipChord => Some("m"),
        }
    }

    pub fn constraint(self) -> Constraint {
        match self {
            SurfaceField::Velocity => Constraint::NonNegative,
            SurfaceField::HingeMomentCoefficient => Constraint::Finite,
            SurfaceField::AirDensity
            | SurfaceField::Span
            | SurfaceField::RootChord
            | SurfaceField::TipChord => Constraint::Positive,
        }
    }

    /// Check `value` against this field's constraint.
    ///
    /// Non-finite values are always rejected, reported against
    /// [`Constraint::Finite`].
    pub fn validate(self, value: f64) -> Result<f64> {
        for constraint in [Constraint::Finite, self.constraint()] {
            if !constraint.admits(value) {
                return Err(Error::OutOfRange {
                    field: self,
                    value,
                    constraint,
                });
            }
        }
        Ok(value)
    }

    /// Parse user text into a validated value for this field.
    pub fn parse(self, text: &str) -> Result<f64> {
        let trimmed = text.trim();
        let value = trimmed.parse::<f64>().map_err(|_| Error::Parse {
            field: self,
            input: trimmed.to_string(),
        })?;
        self.validate(value)
    }
}

impl fmt::Display for SurfaceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The six scalar inputs for one control surface at one flight condition.
///
/// Only constructible through [`SurfaceInputs::new`] or [`SurfaceInputs::with`],
/// so every value satisfies its field constraint and the derived estimate is
/// finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceInputs {
    air_density: f64,
    velocity: f64,
    hinge_moment_coefficient: f64,
    span: f64,
    root_chord: f64,
    tip_chord: f64,
}

impl SurfaceInputs {
    pub fn new(
        air_density: f64,
        velocity: f64,
        hinge_moment_coefficient: f64,
        span: f64,
        root_chord: f64,
        tip_chord: f64,
    ) -> Result<Self> {
        let inputs = Self {
            air_density,
            velocity,
            hinge_moment_coefficient,
            span,
            root_chord,
            tip_chord,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Copy of these inputs with `field` replaced, revalidated.
    pub fn with(self, field: SurfaceField, value: f64) -> Result<Self> {
        let mut inputs = self;
        match field {
            SurfaceField::AirDensity => inputs.air_density = value,
            SurfaceField::Velocity => inputs.velocity = value,
            SurfaceField::HingeMomentCoefficient => inputs.hinge_moment_coefficient = value,
            SurfaceField::Span => inputs.span = value,
            SurfaceField::RootChord => inputs.root_chord = value,
            SurfaceField::TipChord => inputs.tip_chord = value,
        }
        inputs.validate()?;
        Ok(inputs)
    }

    /// Value stored for `field`.
    pub fn get(&self, field: SurfaceField) -> f64 {
        match field {
            SurfaceField::AirDensity => self.air_density,
            SurfaceField::Velocity => self.velocity,
            SurfaceField::HingeMomentCoefficient => self.hinge_moment_coefficient,
            SurfaceField::Span => self.span,
            SurfaceField::RootChord => self.root_chord,
            SurfaceField::TipChord => self.tip_chord,
        }
    }

    /// kg/m³
    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    /// m/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn hinge_moment_coefficient(&self) -> f64 {
        self.hinge_moment_coefficient
    }

    /// m
    pub fn span(&self) -> f64 {
        self.span
    }

    /// m
    pub fn root_chord(&self) -> f64 {
        self.root_chord
    }

    /// m
    pub fn tip_chord(&self) -> f64 {
        self.tip_chord
    }

    /// Validate every field in prompt order, then the derived estimate.
    ///
    /// Large finite inputs can still overflow the dynamic pressure or the
    /// torque product; those are reported as [`Error::NonFiniteEstimate`].
    fn validate(&self) -> Result<()> {
        for field in SurfaceField::ALL {
            field.validate(self.get(field))?;
        }
        match torque::estimate(self).first_non_finite() {
            Some(quantity) => Err(Error::NonFiniteEstimate { quantity }),
            None => Ok(()),
        }
    }
}
