use diatonic::pitch::Pitch;
use structopt::StructOpt;

use crate::{parse_pitch, parse_spelling, App, CliError, CliResult};

#[derive(StructOpt)]
pub(crate) struct ShiftOptions {
    /// Pitch to shift, e.g. C#4 or Bb-1
    pitch: String,

    /// Number of semitones, e.g. 7 or -7
    #[structopt(allow_hyphen_values = true)]
    num_semitones: i32,
}

#[derive(StructOpt)]
pub(crate) struct ScaleOptions {
    /// Pitch to scale, e.g. C4
    pitch: String,

    /// Factor to multiply the frequency with, e.g. 1.5
    factor: f64,
}

#[derive(StructOpt)]
pub(crate) struct RatioOptions {
    /// Pitch in the numerator
    numer: String,

    /// Pitch in the denominator
    denom: String,
}

#[derive(StructOpt)]
pub(crate) struct NearestOptions {
    /// Reference pitch, e.g. C4
    pitch: String,

    /// Target spelling, e.g. B or Gb
    spelling: String,
}

#[derive(StructOpt)]
pub(crate) struct SortOptions {
    /// Pitches to sort, e.g. C4 B#3 Dbb4
    pitches: Vec<String>,
}

impl ShiftOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let pitch = parse_pitch(&self.pitch)?;
        let shifted = &pitch + self.num_semitones;
        log::debug!("{} + {} semitones = {}", pitch, self.num_semitones, shifted);
        app.writeln(shifted)?;
        Ok(())
    }
}

impl ScaleOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        if !(self.factor.is_finite() && self.factor > 0.0) {
            return Err(CliError::CommandError(format!(
                "Factor must be positive but was {}",
                self.factor
            )));
        }
        let pitch = parse_pitch(&self.pitch)?;
        let scaled = &pitch * self.factor;
        log::debug!("{} * {} = {}", pitch, self.factor, scaled);
        app.writeln(scaled)?;
        Ok(())
    }
}

impl RatioOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let numer = parse_pitch(&self.numer)?;
        let denom = parse_pitch(&self.denom)?;
        app.writeln(format!("{:.6}", &numer % &denom))?;
        Ok(())
    }
}

impl NearestOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let pitch = parse_pitch(&self.pitch)?;
        let spelling = parse_spelling(&self.spelling)?;
        app.writeln(pitch.nearest(spelling))?;
        Ok(())
    }
}

impl SortOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let mut pitches = self
            .pitches
            .iter()
            .map(|pitch| parse_pitch(pitch))
            .collect::<CliResult<Vec<Pitch>>>()?;
        pitches.sort();
        for pitch in pitches {
            app.writeln(pitch)?;
        }
        Ok(())
    }
}
