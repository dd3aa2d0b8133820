//! Physical constants and default inputs shared across the estimator.

/// Conversion factor from newton-metres to kilogram-centimetres.
///
/// Servo manufacturers rate stall torque in kg·cm, so every estimate is
/// reported in both units.
pub const NM_TO_KG_CM: f64 = 10.1972;

/// ISA sea-level air density in kg/m³.
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Example cruise velocity in m/s for a small electric RC aircraft.
pub const EXAMPLE_VELOCITY: f64 = 18.0;

/// Default hinge moment coefficient for a plain flap-type control surface.
pub const DEFAULT_HINGE_MOMENT_COEFFICIENT: f64 = -0.1;

/// Lower bound of the recommended servo safety margin.
pub const SAFETY_MARGIN_MIN: f64 = 1.5;

/// Upper bound of the recommended servo safety margin.
pub const SAFETY_MARGIN_MAX: f64 = 2.0;
