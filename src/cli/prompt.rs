//! Interactive parameter entry.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the prompt asks for radius, width and resolution one line at a time
//!
//! Reader and writer are generic so the exchange can be driven from tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::domain::StripParams;
use crate::error::{AppError, ModelError};

/// Prompt on stdout and read from stdin.
pub fn prompt_for_params() -> Result<StripParams, AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    read_params(&mut input, &mut output)
}

/// Ask for the three parameters in order. Nothing is returned unless all three parse.
pub fn read_params<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<StripParams, AppError> {
    let radius: f64 = ask(input, output, "Radius from center to midline of the strip: ", "radius")?;
    let width: f64 = ask(input, output, "Enter Width of the strip: ", "width")?;
    let resolution: usize = ask(input, output, "Enter the value of Resolution: ", "resolution")?;
    Ok(StripParams::new(radius, width, resolution))
}

fn ask<T, R, W>(input: &mut R, output: &mut W, prompt: &str, name: &str) -> Result<T, AppError>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")
        .and_then(|_| output.flush())
        .map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;

    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;

    let value = line.trim();
    if bytes == 0 || value.is_empty() {
        return Err(ModelError::invalid(format!("missing {name}")).into());
    }
    value
        .parse::<T>()
        .map_err(|_| ModelError::invalid(format!("{name} must be a number (got '{value}')")).into())
}
