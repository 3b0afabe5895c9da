//! Serializable representation of pitches. At the moment, this module is not intended to become stable API.

use std::io::Read;

use diatonic::math::ConcertPitch;
use diatonic::pitch::Pitch;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ResultExt;
use crate::CliError;
use crate::CliResult;

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum DiatonicDto {
    Dump(DumpDto),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DumpDto {
    pub concert_pitch_in_hz: f64,
    pub items: Vec<PitchDto>,
}

impl DumpDto {
    pub fn read(input: impl Read) -> CliResult<DumpDto> {
        serde_yaml::from_reader(input)
            .or_command_error::<CliError>("Could not parse dump")
            .map(|DiatonicDto::Dump(dump)| dump)
    }

    pub fn pitches(&self) -> CliResult<Vec<Pitch>> {
        self.items.iter().map(PitchDto::to_pitch).collect()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PitchDto {
    pub midi_number: i64,
    pub pitch: String,
    pub pitch_in_hz: f64,
}

impl PitchDto {
    pub fn from_pitch(pitch: &Pitch, concert_pitch: ConcertPitch) -> Self {
        Self {
            midi_number: pitch.midi(),
            pitch: pitch.to_string(),
            pitch_in_hz: pitch.hz_at(concert_pitch),
        }
    }

    pub fn to_pitch(&self) -> CliResult<Pitch> {
        Ok(self.pitch.parse()?)
    }
}
