//! Estimation sessions: the linear collect, compute, report pipeline.

use std::io::{BufRead, Write};

use hingetorque_lib::{Result, SurfacePreset};
use tracing::info;

use crate::output::SurfaceReport;
use crate::prompt::Prompter;

/// Print the banner shown before the first prompt.
pub fn print_intro<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    let p = prompter.palette();
    prompter.line(&format!(
        "{}--- RC Servo Torque Estimator ---{}",
        p.heading, p.reset
    ))?;
    prompter.line("Enter the flight conditions and surface geometry in the units shown.")?;
    prompter.line("Press Enter to accept the value in brackets.")?;
    Ok(())
}

/// Estimate a single surface from six prompted inputs.
pub fn run_single<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: SurfacePreset,
) -> Result<Vec<SurfaceReport>> {
    print_intro(prompter)?;
    let inputs = prompter.collect_inputs(preset)?;

    info!(surface = %preset, "collected inputs");
    Ok(vec![SurfaceReport::new(preset, inputs)])
}

/// Estimate aileron, elevator and rudder at one shared flight condition.
pub fn run_all_surfaces<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<SurfaceReport>> {
    print_intro(prompter)?;
    let (air_density, velocity) = prompter.collect_flight_conditions()?;

    let mut reports = Vec::with_capacity(SurfacePreset::AIRCRAFT.len());
    for preset in SurfacePreset::AIRCRAFT {
        let inputs = prompter.collect_surface(air_density, velocity, preset, true)?;
        info!(surface = %preset, "collected inputs");
        reports.push(SurfaceReport::new(preset, inputs));
    }
    Ok(reports)
}
