use diatonic::{math::ConcertPitch, pitch::Pitch};
use structopt::StructOpt;

use crate::{
    dto::{DiatonicDto, DumpDto, PitchDto},
    error::ResultExt,
    App, CliError, CliResult,
};

#[derive(StructOpt)]
pub(crate) struct MidiOptions {
    /// MIDI numbers to spell, e.g. 60 (negative numbers after --)
    #[structopt(allow_hyphen_values = true)]
    midi_numbers: Vec<i32>,
}

#[derive(StructOpt)]
pub(crate) struct HzOptions {
    /// Frequencies in Hz, e.g. 261.62
    frequencies: Vec<f64>,
}

#[derive(StructOpt)]
pub(crate) struct DumpOptions {
    /// Lowest MIDI number to print
    #[structopt(long = "lo-key", default_value = "60", allow_hyphen_values = true)]
    lower_midi_number: i32,

    /// Upper MIDI number bound (exclusive)
    #[structopt(long = "up-key", default_value = "72", allow_hyphen_values = true)]
    upper_midi_number: i32,
}

impl MidiOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        for &midi_number in &self.midi_numbers {
            let pitch = Pitch::from_midi(midi_number);
            log::debug!("MIDI number {} is spelled {}", midi_number, pitch);
            app.writeln(describe(&pitch, app.concert_pitch))?;
        }
        Ok(())
    }
}

impl HzOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        for &frequency in &self.frequencies {
            if !(frequency.is_finite() && frequency > 0.0) {
                return Err(CliError::CommandError(format!(
                    "Frequency must be positive but was {}",
                    frequency
                )));
            }
            let pitch = Pitch::from_hz_at(frequency, app.concert_pitch);
            log::debug!("{} Hz snaps to {}", frequency, pitch);
            app.writeln(describe(&pitch, app.concert_pitch))?;
        }
        Ok(())
    }
}

impl DumpOptions {
    pub fn run(&self, app: &mut App) -> CliResult<()> {
        let items = (self.lower_midi_number..self.upper_midi_number)
            .map(|midi_number| {
                PitchDto::from_pitch(&Pitch::from_midi(midi_number), app.concert_pitch)
            })
            .collect::<Vec<_>>();
        log::debug!("Dumping {} pitches", items.len());

        let dump = DiatonicDto::Dump(DumpDto {
            concert_pitch_in_hz: app.concert_pitch.a4_hz(),
            items,
        });
        let yaml =
            serde_yaml::to_string(&dump).or_command_error::<CliError>("Could not serialize dump")?;
        app.writeln(yaml.trim_end())?;
        Ok(())
    }
}

fn describe(pitch: &Pitch, concert_pitch: ConcertPitch) -> String {
    format!(
        "{} | MIDI {} | {:.3} Hz",
        pitch,
        pitch.midi(),
        pitch.hz_at(concert_pitch)
    )
}
