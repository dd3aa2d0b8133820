//! Interactive prompting for the six estimator inputs.
//!
//! Each field is read as one line of text. An empty line selects the offered
//! default, unparsable or out-of-range input re-prompts the same field, and
//! end of input aborts with [`Error::StreamClosed`].

use std::io::{BufRead, Write};

use hingetorque_lib::{
    checked_dynamic_pressure, Error, Result, SurfaceField, SurfaceInputs, SurfacePreset,
};
use tracing::{debug, warn};

use crate::terminal::ColorPalette;

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    palette: ColorPalette,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, palette: ColorPalette) -> Self {
        Self {
            reader,
            writer,
            palette,
        }
    }

    pub fn palette(&self) -> ColorPalette {
        self.palette
    }

    /// Mutable access to the output used for prompts.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    #[cfg(test)]
    pub(crate) fn into_writer(self) -> W {
        self.writer
    }

    /// Print a section heading such as `--- Flight Conditions ---`.
    pub fn section(&mut self, title: &str) -> Result<()> {
        let p = self.palette;
        writeln!(self.writer, "\n{}--- {} ---{}", p.heading, title, p.reset)?;
        Ok(())
    }

    /// Write a free-form line to the prompt output.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Prompt for one field until a valid value is entered.
    ///
    /// `standard` marks the default as a standard value rather than an
    /// example, which only changes how it is labelled.
    pub fn prompt_field(
        &mut self,
        label: &str,
        field: SurfaceField,
        default: f64,
        standard: bool,
    ) -> Result<f64> {
        let p = self.palette;
        let hint = if standard {
            format!("default {default}")
        } else {
            format!("example {default}, Enter to accept")
        };

        loop {
            write!(self.writer, "{label} {}[{hint}]{}: ", p.muted, p.reset)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                return Err(Error::StreamClosed { field });
            }

            if line.trim().is_empty() {
                debug!(%field, value = default, "using default");
                return Ok(default);
            }

            match field.parse(&line) {
                Ok(value) => {
                    debug!(%field, value, "accepted input");
                    return Ok(value);
                }
                Err(err) if err.is_retryable() => {
                    warn!(%field, input = line.trim(), "rejected input");
                    self.reject(&err, "Please try again")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn reject(&mut self, err: &Error, hint: &str) -> Result<()> {
        let p = self.palette;
        writeln!(
            self.writer,
            "  {}Invalid input: {}. {}.{}",
            p.error, err, hint, p.reset
        )?;
        Ok(())
    }

    /// Collect air density and velocity, returned in that order, and print
    /// the resulting dynamic pressure.
    ///
    /// Both fields are asked again when their dynamic pressure overflows.
    pub fn collect_flight_conditions(&mut self) -> Result<(f64, f64)> {
        self.section("Flight Conditions")?;
        loop {
            let [air_density, velocity] =
                self.prompt_fields(SurfacePreset::Custom, None, SurfaceField::FLIGHT_CONDITIONS)?;

            match checked_dynamic_pressure(air_density, velocity) {
                Ok(q) => {
                    self.line(&format!("\nCalculated Dynamic Pressure (q): {q:.2} N/m^2"))?;
                    return Ok((air_density, velocity));
                }
                Err(err) if err.is_retryable() => {
                    warn!(air_density, velocity, "rejected flight conditions");
                    self.reject(&err, "Please re-enter the flight conditions")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Collect the four geometry fields of `preset` at a known flight condition.
    ///
    /// `named` prefixes each prompt with the surface name, as in a
    /// full-aircraft session. All four fields are asked again when the
    /// resulting estimate overflows.
    pub fn collect_surface(
        &mut self,
        air_density: f64,
        velocity: f64,
        preset: SurfacePreset,
        named: bool,
    ) -> Result<SurfaceInputs> {
        let title = match preset.note() {
            Some(note) => format!("{} Parameters ({})", preset.name(), note),
            None => format!("{} Parameters", preset.name()),
        };
        self.section(&title)?;

        let prefix = named.then(|| preset.name());
        loop {
            let [hinge_moment_coefficient, span, root_chord, tip_chord] =
                self.prompt_fields(preset, prefix, SurfaceField::GEOMETRY)?;

            match SurfaceInputs::new(
                air_density,
                velocity,
                hinge_moment_coefficient,
                span,
                root_chord,
                tip_chord,
            ) {
                Ok(inputs) => return Ok(inputs),
                Err(err) if err.is_retryable() => {
                    warn!(surface = %preset, "rejected surface geometry");
                    self.reject(&err, "Please re-enter the surface parameters")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Collect all six inputs for a single surface.
    pub fn collect_inputs(&mut self, preset: SurfacePreset) -> Result<SurfaceInputs> {
        let (air_density, velocity) = self.collect_flight_conditions()?;
        self.collect_surface(air_density, velocity, preset, false)
    }

    fn prompt_fields<const N: usize>(
        &mut self,
        preset: SurfacePreset,
        prefix: Option<&str>,
        fields: [SurfaceField; N],
    ) -> Result<[f64; N]> {
        let mut values = [0.0; N];
        for (slot, field) in values.iter_mut().zip(fields) {
            *slot = self.prompt_field(
                &field_label(prefix, field),
                field,
                preset.default_for(field),
                preset.is_standard_default(field),
            )?;
        }
        Ok(values)
    }
}

/// Build the prompt text for `field`, e.g. `Aileron span (b) in m`.
pub fn field_label(surface: Option<&str>, field: SurfaceField) -> String {
    let name = match surface {
        Some(surface) => format!("{} {}", surface, field.label()),
        None => capitalize(field.label()),
    };
    match field.unit() {
        Some(unit) => format!("{} ({}) in {}", name, field.symbol(), unit),
        None => format!("{} ({})", name, field.symbol()),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
