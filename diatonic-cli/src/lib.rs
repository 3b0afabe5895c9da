mod arith;
mod describe;
mod error;

pub mod dto;

use std::{
    fmt::{self, Debug, Display},
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use arith::{NearestOptions, RatioOptions, ScaleOptions, ShiftOptions, SortOptions};
use describe::{DumpOptions, HzOptions, MidiOptions};
use diatonic::{error::PitchError, math::ConcertPitch, pitch::Pitch, pitch_class::Spelling};
use structopt::StructOpt;

#[derive(StructOpt)]
struct MainOptions {
    /// Write output to a file instead of stdout
    #[structopt(long = "of")]
    output_file: Option<PathBuf>,

    /// Frequency of A4 in Hz
    #[structopt(long = "a4", default_value = "440")]
    a4_hz: f64,

    #[structopt(subcommand)]
    command: MainCommand,
}

#[derive(StructOpt)]
enum MainCommand {
    /// Spell MIDI numbers as pitches
    #[structopt(name = "midi")]
    Midi(MidiOptions),

    /// Find the pitches closest to the given frequencies
    #[structopt(name = "hz")]
    Hz(HzOptions),

    /// Print a range of pitches as YAML
    #[structopt(name = "dump")]
    Dump(DumpOptions),

    /// Raise or lower a pitch by a number of semitones
    #[structopt(name = "shift")]
    Shift(ShiftOptions),

    /// Multiply the frequency of a pitch and snap it to the closest pitch
    #[structopt(name = "scale")]
    Scale(ScaleOptions),

    /// Print the frequency ratio between two pitches
    #[structopt(name = "ratio")]
    Ratio(RatioOptions),

    /// Respell a pitch, staying in the same or the next lower octave
    #[structopt(name = "nearest")]
    Nearest(NearestOptions),

    /// Sort pitches by MIDI number, octave and spelling
    #[structopt(name = "sort")]
    Sort(SortOptions),
}

impl MainOptions {
    fn run(self) -> CliResult<()> {
        if !(self.a4_hz.is_finite() && self.a4_hz > 0.0) {
            return Err(CliError::CommandError(format!(
                "Concert pitch must be a positive frequency but was {}",
                self.a4_hz
            )));
        }

        let stdout = io::stdout();
        let output: Box<dyn Write> = match self.output_file {
            Some(output_file) => Box::new(File::create(output_file)?),
            None => Box::new(stdout.lock()),
        };

        let mut app = App {
            output,
            concert_pitch: ConcertPitch::from_a4_hz(self.a4_hz),
        };

        log::debug!("Using concert pitch A4 = {} Hz", self.a4_hz);
        self.command.run(&mut app)
    }
}

impl MainCommand {
    fn run(self, app: &mut App) -> CliResult<()> {
        match self {
            MainCommand::Midi(options) => options.run(app)?,
            MainCommand::Hz(options) => options.run(app)?,
            MainCommand::Dump(options) => options.run(app)?,
            MainCommand::Shift(options) => options.run(app)?,
            MainCommand::Scale(options) => options.run(app)?,
            MainCommand::Ratio(options) => options.run(app)?,
            MainCommand::Nearest(options) => options.run(app)?,
            MainCommand::Sort(options) => options.run(app)?,
        }
        Ok(())
    }
}

pub fn run_in_shell_env(args: impl IntoIterator<Item = String>) -> CliResult<()> {
    let options = match MainOptions::from_iter_safe(args) {
        Err(err) => {
            return if err.use_stderr() {
                Err(CliError::CommandError(err.message))
            } else {
                println!("{}", err);
                Ok(())
            };
        }
        Ok(options) => options,
    };

    options.run()
}

struct App<'a> {
    output: Box<dyn 'a + Write>,
    concert_pitch: ConcertPitch,
}

impl App<'_> {
    pub fn writeln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.output, "{}", message)
    }
}

fn parse_pitch(s: &str) -> CliResult<Pitch> {
    Ok(s.parse()?)
}

fn parse_spelling(s: &str) -> CliResult<Spelling> {
    Ok(s.parse()?)
}

pub type CliResult<T> = Result<T, CliError>;

pub enum CliError {
    IoError(io::Error),
    CommandError(String),
}

impl Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(err) => write!(f, "IO error / {}", err),
            CliError::CommandError(err) => write!(f, "The command failed / {}", err),
        }
    }
}

impl From<String> for CliError {
    fn from(v: String) -> Self {
        CliError::CommandError(v)
    }
}

impl From<PitchError> for CliError {
    fn from(v: PitchError) -> Self {
        let message = match v {
            PitchError::InvalidPitchClassName { name } => {
                format!("Invalid pitch class name '{}'", name)
            }
            PitchError::InvalidConstructionArgument { argument } => {
                format!("Invalid octave '{}'", argument)
            }
        };
        CliError::CommandError(message)
    }
}

impl From<io::Error> for CliError {
    fn from(v: io::Error) -> Self {
        CliError::IoError(v)
    }
}
