//! Conversions between the equal-tempered integer lattice and frequencies.

/// MIDI number of A4, the note the concert pitch refers to.
pub const A4_MIDI_NUMBER: i32 = 69;

/// Number of semitones per octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Converts a (possibly fractional) MIDI number to a frequency in Hz at 440&nbsp;Hz concert pitch.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use diatonic::math;
/// assert_approx_eq!(math::mtof(69.0), 440.0);
/// assert_approx_eq!(math::mtof(57.0), 220.0);
/// assert_approx_eq!(math::mtof(60.0), 261.625565);
/// assert_approx_eq!(math::mtof(69.5), 452.892984);
/// ```
pub fn mtof(midi_number: f64) -> f64 {
    ConcertPitch::default().mtof(midi_number)
}

/// Converts a frequency in Hz to the nearest MIDI number at 440&nbsp;Hz concert pitch.
///
/// Halfway cases are rounded away from zero.
/// Non-positive or non-finite inputs saturate at the bounds of `i32` (`NaN` maps to 0).
///
/// # Examples
///
/// ```
/// # use diatonic::math;
/// assert_eq!(math::ftom(440.0), 69);
/// assert_eq!(math::ftom(261.62), 60);
/// assert_eq!(math::ftom(8.18), 0);
/// assert_eq!(math::ftom(0.0), i32::MIN);
/// ```
pub fn ftom(hz: f64) -> i32 {
    ConcertPitch::default().ftom(hz)
}

/// Splits `midi_number` into an octave index and a semitone within that octave.
///
/// The octave is floored, s.t. the semitone is always in `0..12`.
/// The octave index counts from MIDI number 0, i.e. it is the scientific octave plus one.
///
/// # Examples
///
/// ```
/// # use diatonic::math;
/// assert_eq!(math::octave_and_semitone(60), (5, 0));
/// assert_eq!(math::octave_and_semitone(71), (5, 11));
/// assert_eq!(math::octave_and_semitone(0), (0, 0));
/// assert_eq!(math::octave_and_semitone(-1), (-1, 11));
/// assert_eq!(math::octave_and_semitone(-12), (-1, 0));
/// assert_eq!(math::octave_and_semitone(-13), (-2, 11));
/// assert_eq!(math::octave_and_semitone(i64::from(i32::MAX) * 12), (i64::from(i32::MAX), 0));
/// ```
pub fn octave_and_semitone(midi_number: i64) -> (i64, i32) {
    let semitones_per_octave = i64::from(SEMITONES_PER_OCTAVE);
    (
        midi_number.div_euclid(semitones_per_octave),
        // Always in 0..12
        midi_number.rem_euclid(semitones_per_octave) as i32,
    )
}

/// The frequency that A4 sounds at.
///
/// All frequency conversions use 12-tone equal temperament relative to this reference.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use diatonic::math::ConcertPitch;
/// let baroque = ConcertPitch::from_a4_hz(415.0);
/// assert_approx_eq!(baroque.mtof(69.0), 415.0);
/// assert_approx_eq!(baroque.mtof(81.0), 830.0);
/// assert_eq!(baroque.ftom(440.0), 70);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct ConcertPitch {
    a4_hz: f64,
}

impl ConcertPitch {
    /// # Panics
    ///
    /// Panics if `a4_hz` is not a finite positive number.
    ///
    /// ```should_panic
    /// # use diatonic::math::ConcertPitch;
    /// ConcertPitch::from_a4_hz(0.0);
    /// ```
    pub fn from_a4_hz(a4_hz: f64) -> Self {
        assert!(
            a4_hz.is_finite() && a4_hz > 0.0,
            "Concert pitch must be finite and positive but was {}",
            a4_hz
        );
        Self { a4_hz }
    }

    pub fn a4_hz(self) -> f64 {
        self.a4_hz
    }

    pub fn mtof(self, midi_number: f64) -> f64 {
        let semitones_above_a4 = midi_number - f64::from(A4_MIDI_NUMBER);
        self.a4_hz * (semitones_above_a4 / f64::from(SEMITONES_PER_OCTAVE)).exp2()
    }

    pub fn ftom(self, hz: f64) -> i32 {
        let semitones_above_a4 = f64::from(SEMITONES_PER_OCTAVE) * (hz / self.a4_hz).log2();
        (f64::from(A4_MIDI_NUMBER) + semitones_above_a4).round() as i32
    }
}

impl Default for ConcertPitch {
    fn default() -> Self {
        Self::from_a4_hz(440.0)
    }
}
