//! Hinge torque library entry points.
//!
//! This crate holds the aerodynamic model used to size RC servos: validated
//! control surface inputs, the hinge moment estimate, unit conversion and
//! example surface presets. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod constants;
pub mod error;
pub mod preset;
pub mod surface;
pub mod torque;

pub use constants::{AIR_DENSITY_SEA_LEVEL, NM_TO_KG_CM};
pub use error::{Error, Result};
pub use preset::SurfacePreset;
pub use surface::{Constraint, SurfaceField, SurfaceInputs};
pub use torque::{
    checked_dynamic_pressure, compute_torque, dynamic_pressure, mean_chord, nm_to_kg_cm,
    surface_area, TorqueEstimate,
};
