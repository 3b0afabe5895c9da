//! Spelled pitch classes and pitches under 12-tone equal temperament.
//!
//! The algebra has three layers: a [`pitch_class::PitchClass`] is one of the seven natural
//! letters, a [`pitch_class::Spelling`] is a natural with any number of sharps or flats applied
//! and a [`pitch::Pitch`] places a spelling in an octave.
//!
//! ```
//! # use diatonic::names::*;
//! # use diatonic::pitch::Pitch;
//! assert_eq!(c(4) + 1, c_sharp(4));
//! assert_eq!(c(4) - 1, b(3));
//! assert_eq!(Pitch::from_midi(69), a(4));
//! assert_ne!(c_sharp(4), d_flat(4));
//! ```

mod parse;

pub mod error;
pub mod math;
pub mod names;
pub mod pitch;
pub mod pitch_class;
