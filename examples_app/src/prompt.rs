use anyhow::{bail, Result};
use ringfx_core::core::error::ConfigError;
use ringfx_core::{ModulationKind, ModulationParams};
use std::io::{BufRead, Write};

/// Asks the user for modulation parameters.
///
/// Offers the preset first. Otherwise prints the typical ranges and asks for rate,
/// depth and mix in turn; anything that does not parse or fails validation is
/// reported and asked again. Only end of input aborts.
pub fn configure<R: BufRead, W: Write>(
    kind: ModulationKind,
    input: &mut R,
    output: &mut W,
) -> Result<ModulationParams> {
    write!(output, "Use default parameters? (y/n): ")?;
    output.flush()?;
    let choice = read_line(input)?;
    if matches!(choice.trim(), "y" | "Y") {
        return Ok(kind.default_params());
    }

    writeln!(output, "{}", kind.typical_ranges())?;

    let rate = ask(input, output, "Insert rate in Hz: ", ModulationParams::check_rate)?;
    writeln!(output, "Rate set to {} Hz", rate)?;

    let depth = ask(
        input,
        output,
        "Insert depth in samples: ",
        ModulationParams::check_depth,
    )?;
    writeln!(output, "Depth set to {} samples", depth)?;

    let mix = ask(input, output, "Insert wetness (0-1): ", ModulationParams::check_mix)?;
    writeln!(output, "Mix set to {}", mix)?;

    Ok(ModulationParams::new(rate, depth, mix)?)
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    check: fn(f32) -> Result<f32, ConfigError>,
) -> Result<f32> {
    loop {
        write!(output, "{}", question)?;
        output.flush()?;
        let line = read_line(input)?;

        match line.trim().parse::<f32>() {
            Ok(value) => match check(value) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(output, "Invalid value ({}). Please try again.", e)?,
            },
            Err(_) => writeln!(output, "Invalid value. Please enter a valid number.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before configuration finished");
    }
    Ok(line)
}
