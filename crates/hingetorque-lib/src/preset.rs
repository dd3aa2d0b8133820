//! Example control surfaces with default geometry for the interactive prompts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, DEFAULT_HINGE_MOMENT_COEFFICIENT, EXAMPLE_VELOCITY,
};
use crate::surface::SurfaceField;

/// A named control surface with example default inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfacePreset {
    Aileron,
    Elevator,
    Rudder,
    Custom,
}

impl SurfacePreset {
    /// Surfaces covered by a full-aircraft session, in prompt order.
    pub const AIRCRAFT: [SurfacePreset; 3] = [
        SurfacePreset::Aileron,
        SurfacePreset::Elevator,
        SurfacePreset::Rudder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SurfacePreset::Aileron => "Aileron",
            SurfacePreset::Elevator => "Elevator",
            SurfacePreset::Rudder => "Rudder",
            SurfacePreset::Custom => "Control surface",
        }
    }

    /// Short qualifier describing what the geometry covers.
    pub fn note(self) -> Option<&'static str> {
        match self {
            SurfacePreset::Aileron => Some("single aileron"),
            SurfacePreset::Elevator => Some("one half of the elevator"),
            SurfacePreset::Rudder | SurfacePreset::Custom => None,
        }
    }

    /// Default value offered for `field` when this surface is being entered.
    ///
    /// Density and hinge moment coefficient defaults are standard values; all
    /// other defaults are examples and are labelled as such by the prompter.
    pub fn default_for(self, field: SurfaceField) -> f64 {
        match field {
            SurfaceField::AirDensity => AIR_DENSITY_SEA_LEVEL,
            SurfaceField::Velocity => EXAMPLE_VELOCITY,
            SurfaceField::HingeMomentCoefficient => self.hinge_moment_coefficient(),
            SurfaceField::Span => self.geometry().0,
            SurfaceField::RootChord => self.geometry().1,
            SurfaceField::TipChord => self.geometry().2,
        }
    }

    /// Whether the default for `field` is a standard value rather than an example.
    pub fn is_standard_default(self, field: SurfaceField) -> bool {
        match field {
            SurfaceField::AirDensity => true,
            SurfaceField::HingeMomentCoefficient => self == SurfacePreset::Custom,
            _ => false,
        }
    }

    fn hinge_moment_coefficient(self) -> f64 {
        match self {
            SurfacePreset::Aileron => -0.15,
            SurfacePreset::Elevator | SurfacePreset::Rudder | SurfacePreset::Custom => {
                DEFAULT_HINGE_MOMENT_COEFFICIENT
            }
        }
    }

    // (span, root chord, tip chord) in metres
    fn geometry(self) -> (f64, f64, f64) {
        match self {
            SurfacePreset::Aileron => (0.924, 0.110, 0.050),
            SurfacePreset::Elevator => (0.318, 0.225, 0.225),
            SurfacePreset::Rudder => (0.308, 0.200, 0.150),
            SurfacePreset::Custom => (0.5, 0.08, 0.05),
        }
    }
}

impl fmt::Display for SurfacePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurfacePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aileron" => Ok(SurfacePreset::Aileron),
            "elevator" => Ok(SurfacePreset::Elevator),
            "rudder" => Ok(SurfacePreset::Rudder),
            "custom" => Ok(SurfacePreset::Custom),
            other => Err(format!(
                "unknown surface '{other}'; expected aileron, elevator, rudder or custom"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_default_is_valid() {
        for preset in [
            SurfacePreset::Aileron,
            SurfacePreset::Elevator,
            SurfacePreset::Rudder,
            SurfacePreset::Custom,
        ] {
            for field in SurfaceField::ALL {
                let value = preset.default_for(field);
                assert!(
                    field.validate(value).is_ok(),
                    "{preset} default for {field} is invalid: {value}"
                );
            }
        }
    }

    #[test]
    fn elevator_is_rectangular() {
        let p = SurfacePreset::Elevator;
        assert_eq!(
            p.default_for(SurfaceField::RootChord),
            p.default_for(SurfaceField::TipChord)
        );
    }

    #[test]
    fn custom_uses_standard_hinge_coefficient() {
        assert_eq!(
            SurfacePreset::Custom.default_for(SurfaceField::HingeMomentCoefficient),
            -0.1
        );
        assert!(SurfacePreset::Custom.is_standard_default(SurfaceField::HingeMomentCoefficient));
        assert!(!SurfacePreset::Custom.is_standard_default(SurfaceField::Span));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Aileron".parse::<SurfacePreset>().unwrap(), SurfacePreset::Aileron);
        assert!("flaperon".parse::<SurfacePreset>().is_err());
    }
}
