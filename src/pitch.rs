//! Spelled pitches, i.e. a [`Spelling`] placed in an octave.

use crate::error::PitchError;
use crate::math;
use crate::math::ConcertPitch;
use crate::parse;
use crate::pitch_class::PitchClass;
use crate::pitch_class::Spelling;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Rem;
use std::ops::Sub;
use std::str::FromStr;

/// A [`Spelling`] in a given octave, using scientific pitch notation (C4 = MIDI number 60).
///
/// Pitches are ordered by MIDI number, octave and [`Spelling`], in that order.
/// Equality and hashing are spelling-sensitive, i.e. enharmonic pitches are distinct.
///
/// # Examples
///
/// ```
/// # use diatonic::pitch::Pitch;
/// # use diatonic::pitch_class::PitchClass;
/// let b_sharp3 = Pitch::new(PitchClass::B.sharp(), 3);
/// let c4 = Pitch::new(PitchClass::C, 4);
/// let d_double_flat4 = Pitch::new(PitchClass::D.acc(-2), 4);
///
/// assert_eq!(b_sharp3.midi(), 60);
/// assert_eq!(c4.midi(), 60);
/// assert_eq!(d_double_flat4.midi(), 60);
///
/// assert!(b_sharp3 < c4);
/// assert!(c4 < d_double_flat4);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pitch {
    spelling: Spelling,
    octave: i32,
}

impl Pitch {
    /// Any octave is accepted. MIDI numbers are computed as `i64` s.t. they never overflow.
    pub fn new(spelling: impl Into<Spelling>, octave: i32) -> Self {
        Self {
            spelling: spelling.into(),
            octave,
        }
    }

    /// Creates a [`Pitch`] from an untyped octave value.
    ///
    /// Fails with [`PitchError::InvalidConstructionArgument`] if `octave` is not an integer in the range of `i32`.
    ///
    /// ```
    /// # use diatonic::pitch::Pitch;
    /// # use diatonic::pitch_class::PitchClass;
    /// assert_eq!(
    ///     Pitch::try_from_parts(PitchClass::G.into(), 3.0),
    ///     Ok(Pitch::new(PitchClass::G, 3))
    /// );
    /// assert!(Pitch::try_from_parts(PitchClass::G.into(), f64::NAN).is_err());
    /// assert!(Pitch::try_from_parts(PitchClass::G.into(), 1e10).is_err());
    /// ```
    pub fn try_from_parts(spelling: Spelling, octave: f64) -> Result<Self, PitchError> {
        let is_integral = octave.is_finite() && octave.fract() == 0.0;
        let is_in_range = octave >= f64::from(i32::MIN) && octave <= f64::from(i32::MAX);
        if is_integral && is_in_range {
            Ok(Self::new(spelling, octave as i32))
        } else {
            Err(PitchError::InvalidConstructionArgument {
                argument: octave.to_string(),
            })
        }
    }

    /// Creates the canonically spelled [`Pitch`] for a MIDI number.
    ///
    /// Values outside of the MIDI range (0..128) are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use diatonic::pitch::Pitch;
    /// # use diatonic::pitch_class::PitchClass;
    /// assert_eq!(Pitch::from_midi(0), Pitch::new(PitchClass::C, -1));
    /// assert_eq!(Pitch::from_midi(61), Pitch::new(PitchClass::C.sharp(), 4));
    /// assert_eq!(Pitch::from_midi(127), Pitch::new(PitchClass::G, 9));
    /// assert_eq!(Pitch::from_midi(-1), Pitch::new(PitchClass::B, -2));
    /// ```
    pub fn from_midi(midi_number: i32) -> Self {
        let midi_number = i64::from(midi_number);
        Self::at_midi(PitchClass::from_integer(midi_number), midi_number)
    }

    /// Creates the [`Pitch`] closest to `hz` at 440&nbsp;Hz concert pitch.
    ///
    /// ```
    /// # use diatonic::pitch::Pitch;
    /// # use diatonic::pitch_class::PitchClass;
    /// assert_eq!(Pitch::from_hz(440.0), Pitch::new(PitchClass::A, 4));
    /// assert_eq!(Pitch::from_hz(261.62), Pitch::new(PitchClass::C, 4));
    /// assert_eq!(Pitch::from_hz(220.0), Pitch::new(PitchClass::A, 3));
    /// ```
    pub fn from_hz(hz: f64) -> Self {
        Self::from_midi(math::ftom(hz))
    }

    pub fn from_hz_at(hz: f64, concert_pitch: ConcertPitch) -> Self {
        Self::from_midi(concert_pitch.ftom(hz))
    }

    /// Places `spelling` in the octave that makes the resulting [`Pitch`] sound at `midi_number`.
    ///
    /// `midi_number` and the rank of `spelling` need to be congruent modulo 12.
    ///
    /// # Panics
    ///
    /// Panics if the octave does not fit into an `i32`.
    fn at_midi(spelling: Spelling, midi_number: i64) -> Self {
        let (octave_index, _) =
            math::octave_and_semitone(midi_number - i64::from(spelling.rank()));
        Self::new(spelling, octave_in_range(octave_index - 1))
    }

    pub fn spelling(&self) -> &Spelling {
        &self.spelling
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// The MIDI number this [`Pitch`] sounds at.
    ///
    /// The unreduced rank of the spelling is used, s.t. B&#x266F;3 and C&#x266D;4 sound at 60 and 59, respectively.
    pub fn midi(&self) -> i64 {
        i64::from(self.spelling.rank())
            + (i64::from(self.octave) + 1) * i64::from(math::SEMITONES_PER_OCTAVE)
    }

    pub fn hz(&self) -> f64 {
        math::mtof(self.midi() as f64)
    }

    pub fn hz_at(&self, concert_pitch: ConcertPitch) -> f64 {
        concert_pitch.mtof(self.midi() as f64)
    }

    pub fn sharp(&self) -> Pitch {
        Self::new(self.spelling.sharp(), self.octave)
    }

    pub fn flat(&self) -> Pitch {
        Self::new(self.spelling.flat(), self.octave)
    }

    pub fn acc_i(&self) -> i32 {
        self.spelling.acc_i()
    }

    pub fn acc(&self, num_accidentals: i32) -> Pitch {
        Self::new(self.spelling.acc(num_accidentals), self.octave)
    }

    /// Returns the [`Pitch`] spelled as `spelling` in the same or the next lower octave.
    ///
    /// The lower octave is chosen if the unreduced ranks of the spellings are 6 or more semitones apart.
    ///
    /// # Panics
    ///
    /// Panics if the lower octave would be below `i32::MIN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use diatonic::pitch::Pitch;
    /// # use diatonic::pitch_class::PitchClass;
    /// let c4 = Pitch::new(PitchClass::C, 4);
    /// assert_eq!(c4.nearest(PitchClass::B), Pitch::new(PitchClass::B, 3));
    /// assert_eq!(c4.nearest(PitchClass::B.sharp()), Pitch::new(PitchClass::B.sharp(), 3));
    /// assert_eq!(c4.nearest(PitchClass::C), c4);
    /// assert_eq!(c4.nearest(PitchClass::D), Pitch::new(PitchClass::D, 4));
    /// assert_eq!(c4.nearest(PitchClass::F.sharp()), Pitch::new(PitchClass::F.sharp(), 3));
    /// ```
    pub fn nearest(&self, spelling: impl Into<Spelling>) -> Pitch {
        let spelling = spelling.into();
        let distance = (self.spelling.rank() - spelling.rank()).abs();
        let octave = if distance < 6 {
            i64::from(self.octave)
        } else {
            i64::from(self.octave) - 1
        };
        Self::new(spelling, octave_in_range(octave))
    }

    fn sort_key(&self) -> (i64, i32, &Spelling) {
        (self.midi(), self.octave, &self.spelling)
    }

    fn shifted(&self, num_semitones: i64) -> Pitch {
        let spelling = if num_semitones % i64::from(math::SEMITONES_PER_OCTAVE) == 0 {
            self.spelling.clone()
        } else {
            PitchClass::from_integer(i64::from(self.spelling.rank()) + num_semitones)
        };
        Pitch::at_midi(spelling, self.midi() + num_semitones)
    }
}

fn octave_in_range(octave: i64) -> i32 {
    match i32::try_from(octave) {
        Ok(octave) => octave,
        Err(_) => panic!("Octave {} is out of range", octave),
    }
}

/// Raises the [`Pitch`] by a number of semitones.
///
/// Shifts by whole octaves keep the spelling.
/// All other shifts respell canonically, carrying the octave s.t. the MIDI number grows by exactly `num_semitones`.
///
/// # Panics
///
/// Panics if the resulting octave does not fit into an `i32`.
///
/// # Examples
///
/// ```
/// # use diatonic::pitch::Pitch;
/// # use diatonic::pitch_class::PitchClass;
/// let c4 = Pitch::new(PitchClass::C, 4);
/// assert_eq!(&c4 + 1, Pitch::new(PitchClass::C.sharp(), 4));
/// assert_eq!(&c4 + -1, Pitch::new(PitchClass::B, 3));
/// assert_eq!(&c4 + 12, Pitch::new(PitchClass::C, 5));
///
/// let c_flat4 = Pitch::new(PitchClass::C.flat(), 4);
/// assert_eq!(&c_flat4 + 12, Pitch::new(PitchClass::C.flat(), 5));
/// assert_eq!(&c_flat4 + 1, Pitch::new(PitchClass::C, 4));
///
/// let b_sharp3 = Pitch::new(PitchClass::B.sharp(), 3);
/// assert_eq!(&b_sharp3 + 1, Pitch::new(PitchClass::C.sharp(), 4));
/// ```
impl Add<i32> for &Pitch {
    type Output = Pitch;

    fn add(self, num_semitones: i32) -> Self::Output {
        self.shifted(i64::from(num_semitones))
    }
}

impl Add<i32> for Pitch {
    type Output = Pitch;

    fn add(self, num_semitones: i32) -> Self::Output {
        &self + num_semitones
    }
}

/// Lowers the [`Pitch`] by a number of semitones. See [`Add`].
///
/// ```
/// # use diatonic::pitch::Pitch;
/// # use diatonic::pitch_class::PitchClass;
/// let c4 = Pitch::new(PitchClass::C, 4);
/// assert_eq!(&c4 - -1, Pitch::new(PitchClass::C.sharp(), 4));
/// assert_eq!(&c4 - 1, Pitch::new(PitchClass::B, 3));
/// assert_eq!(&c4 - 12, Pitch::new(PitchClass::C, 3));
/// ```
impl Sub<i32> for &Pitch {
    type Output = Pitch;

    fn sub(self, num_semitones: i32) -> Self::Output {
        self.shifted(-i64::from(num_semitones))
    }
}

impl Sub<i32> for Pitch {
    type Output = Pitch;

    fn sub(self, num_semitones: i32) -> Self::Output {
        &self - num_semitones
    }
}

/// Multiplies the frequency by `factor` and snaps the result to the closest canonically spelled [`Pitch`].
///
/// The snapping is lossy: Neither the spelling nor an off-lattice frequency survives the round trip.
///
/// ```
/// # use diatonic::pitch::Pitch;
/// # use diatonic::pitch_class::PitchClass;
/// let c4 = Pitch::new(PitchClass::C, 4);
/// assert_eq!(&c4 * 2.0, Pitch::new(PitchClass::C, 5));
/// assert_eq!(&c4 * 0.5, Pitch::new(PitchClass::C, 3));
/// assert_eq!(&c4 * 1.5, Pitch::new(PitchClass::G, 4));
///
/// // Respelled canonically
/// let d_flat4 = Pitch::new(PitchClass::D.flat(), 4);
/// assert_eq!(&d_flat4 * 1.0, Pitch::new(PitchClass::C.sharp(), 4));
/// ```
impl Mul<f64> for &Pitch {
    type Output = Pitch;

    fn mul(self, factor: f64) -> Self::Output {
        Pitch::from_hz(self.hz() * factor)
    }
}

impl Mul<f64> for Pitch {
    type Output = Pitch;

    fn mul(self, factor: f64) -> Self::Output {
        &self * factor
    }
}

/// Divides the frequency by `divisor`. See [`Mul`].
///
/// ```
/// # use diatonic::pitch::Pitch;
/// # use diatonic::pitch_class::PitchClass;
/// let c4 = Pitch::new(PitchClass::C, 4);
/// assert_eq!(&c4 / 0.5, Pitch::new(PitchClass::C, 5));
/// assert_eq!(&c4 / 2.0, Pitch::new(PitchClass::C, 3));
/// ```
impl Div<f64> for &Pitch {
    type Output = Pitch;

    fn div(self, divisor: f64) -> Self::Output {
        self * divisor.recip()
    }
}

impl Div<f64> for Pitch {
    type Output = Pitch;

    fn div(self, divisor: f64) -> Self::Output {
        &self / divisor
    }
}

/// The frequency ratio between two pitches.
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use diatonic::pitch::Pitch;
/// # use diatonic::pitch_class::PitchClass;
/// let c4 = Pitch::new(PitchClass::C, 4);
/// let c5 = Pitch::new(PitchClass::C, 5);
/// assert_approx_eq!(&c4 % &c5, 0.5);
/// assert_approx_eq!(&c5 % &c4, 2.0);
/// ```
impl Rem<&Pitch> for &Pitch {
    type Output = f64;

    fn rem(self, other: &Pitch) -> Self::Output {
        self.hz() / other.hz()
    }
}

impl Rem<Pitch> for Pitch {
    type Output = f64;

    fn rem(self, other: Pitch) -> Self::Output {
        &self % &other
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Pitch {
    /// ```
    /// # use diatonic::pitch::Pitch;
    /// assert_eq!(Pitch::from_midi(0).to_string(), "C-1");
    /// assert_eq!(Pitch::from_midi(70).to_string(), "A♯4");
    /// assert_eq!(Pitch::from_midi(70).flat().flat().to_string(), "A♭4");
    /// assert_eq!(format!("{:<5}|", Pitch::from_midi(69)), "A4   |");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(&format!("{}{}", self.spelling, self.octave))
    }
}

impl FromStr for Pitch {
    type Err = PitchError;

    /// Parses a [`Spelling`] followed by an integer octave.
    ///
    /// ```
    /// # use diatonic::pitch::Pitch;
    /// # use diatonic::pitch_class::PitchClass;
    /// assert_eq!("A4".parse(), Ok(Pitch::from_midi(69)));
    /// assert_eq!("bb-1".parse(), Ok(Pitch::new(PitchClass::B.flat(), -1)));
    /// assert_eq!("F♯♯10".parse(), Ok(Pitch::new(PitchClass::F.acc(2), 10)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (spelling, octave) = parse::split_octave(s);
        let spelling: Spelling = spelling.parse()?;
        let octave: i32 = octave
            .parse()
            .map_err(|_| PitchError::InvalidConstructionArgument {
                argument: octave.to_owned(),
            })?;
        Ok(Pitch::new(spelling, octave))
    }
}
