//! Output formatting for torque reports.
//!
//! Renders one or more surface estimates either as a human-readable report
//! or as JSON.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use hingetorque_lib::constants::{SAFETY_MARGIN_MAX, SAFETY_MARGIN_MIN};
use hingetorque_lib::{compute_torque, SurfaceInputs, SurfacePreset, TorqueEstimate};

use crate::terminal::ColorPalette;

/// Output format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Machine-readable JSON on stdout.
    Json,
}

/// Estimate for one control surface together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceReport {
    pub surface: SurfacePreset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    pub inputs: SurfaceInputs,
    pub estimate: TorqueEstimate,
    /// Servo torque range in kg·cm after the safety margin.
    pub recommended_kg_cm: [f64; 2],
}

impl SurfaceReport {
    /// Run the estimate for `inputs` and wrap it for rendering.
    pub fn new(surface: SurfacePreset, inputs: SurfaceInputs) -> Self {
        let estimate = compute_torque(&inputs);
        let (low, high) = estimate.recommended_kg_cm();
        Self {
            surface,
            note: surface.note(),
            inputs,
            estimate,
            recommended_kg_cm: [low, high],
        }
    }
}

/// Render the human-readable report.
pub fn render_text<W: Write>(
    out: &mut W,
    reports: &[SurfaceReport],
    palette: ColorPalette,
) -> Result<()> {
    let p = palette;
    writeln!(
        out,
        "\n{}--- ESTIMATED SERVO TORQUE REQUIREMENTS ---{}",
        p.heading, p.reset
    )?;

    for report in reports {
        let estimate = &report.estimate;
        let title = match report.note {
            Some(note) => format!("{} ({})", report.surface.name(), note),
            None => report.surface.name().to_string(),
        };
        writeln!(
            out,
            "\nFor the {} (using Ch = {}):",
            title, report.inputs.hinge_moment_coefficient()
        )?;
        writeln!(
            out,
            "  {}Mean chord: {:.4} m, surface area: {:.4} m^2, dynamic pressure: {:.2} N/m^2{}",
            p.muted, estimate.mean_chord, estimate.surface_area, estimate.dynamic_pressure, p.reset
        )?;
        writeln!(
            out,
            "  - Required Torque: {}{:.4} N·m{}",
            p.value, estimate.torque_nm, p.reset
        )?;
        writeln!(
            out,
            "  - Required Torque: {}{:.3} kg-cm{}",
            p.value, estimate.torque_kg_cm, p.reset
        )?;
        writeln!(
            out,
            "  - Recommended servo: {:.2} to {:.2} kg-cm",
            report.recommended_kg_cm[0], report.recommended_kg_cm[1]
        )?;
    }

    writeln!(
        out,
        "\n{}Disclaimer: This is a theoretical estimation. Real-world torque requirements \
         are higher; always choose a servo with a safety margin of {}x to {}x the estimated torque.{}",
        p.warning, SAFETY_MARGIN_MIN, SAFETY_MARGIN_MAX, p.reset
    )?;
    writeln!(
        out,
        "Ailerons: the estimate is for a single aileron; use one servo of this rating per aileron."
    )?;
    writeln!(
        out,
        "Elevator: with split servos the estimate is per half; a single servo driving both halves \
         needs twice the torque."
    )?;
    Ok(())
}

/// Render the reports as pretty-printed JSON.
pub fn render_json<W: Write>(out: &mut W, reports: &[SurfaceReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports).context("failed to serialize torque report")?;
    writeln!(out)?;
    Ok(())
}
