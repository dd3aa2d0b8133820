//! Hinge torque CLI library.
//!
//! This crate provides the interactive pieces of the servo torque estimator:
//! line-oriented prompting, estimation sessions, report rendering and
//! terminal styling.

pub mod output;
pub mod prompt;
pub mod session;
pub mod terminal;
