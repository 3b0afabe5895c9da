//! Natural pitch classes and their spellings with sharps and flats.

use crate::error::PitchError;
use crate::math;
use crate::parse;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Add;
use std::ops::Sub;
use std::str::FromStr;

const LETTERS: &str = "CDEFGAB";

/// One of the seven natural pitch classes.
///
/// The derived order coincides with the order by [`PitchClass::rank`].
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PitchClass {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 7] = [
        PitchClass::C,
        PitchClass::D,
        PitchClass::E,
        PitchClass::F,
        PitchClass::G,
        PitchClass::A,
        PitchClass::B,
    ];

    /// Returns the canonical [`Spelling`] of the chromatic residue of `integer`.
    ///
    /// Residues without a natural letter are spelled as the sharp of the natural one semitone below.
    ///
    /// # Examples
    ///
    /// ```
    /// # use diatonic::pitch_class::PitchClass;
    /// # use diatonic::pitch_class::Spelling;
    /// assert_eq!(PitchClass::from_integer(0), Spelling::from(PitchClass::C));
    /// assert_eq!(PitchClass::from_integer(6), PitchClass::F.sharp());
    /// assert_eq!(PitchClass::from_integer(71), Spelling::from(PitchClass::B));
    /// assert_eq!(PitchClass::from_integer(-2), PitchClass::A.sharp());
    /// assert_eq!(PitchClass::from_integer(i64::MAX), Spelling::from(PitchClass::G));
    /// ```
    pub fn from_integer(integer: i64) -> Spelling {
        let (_, semitone) = math::octave_and_semitone(integer);
        match Self::from_semitone(semitone) {
            Some(natural) => natural.into(),
            None => Self::from_integer(i64::from(semitone) - 1).sharp(),
        }
    }

    fn from_semitone(semitone: i32) -> Option<PitchClass> {
        PitchClass::ALL
            .iter()
            .copied()
            .find(|natural| natural.rank() == semitone)
    }

    /// Looks up a natural by its letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<PitchClass> {
        PitchClass::ALL
            .iter()
            .copied()
            .find(|natural| natural.letter() == letter.to_ascii_uppercase())
    }

    pub fn letter(self) -> char {
        char::from(LETTERS.as_bytes()[self as usize])
    }

    pub fn name(self) -> &'static str {
        let index = self as usize;
        &LETTERS[index..index + 1]
    }

    /// The position of the natural among the 12 chromatic semitones, starting at C.
    pub fn rank(self) -> i32 {
        match self {
            PitchClass::C => 0,
            PitchClass::D => 2,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::G => 7,
            PitchClass::A => 9,
            PitchClass::B => 11,
        }
    }

    pub fn natural_rank(self) -> i32 {
        self.rank()
    }

    pub fn kernel(self) -> PitchClass {
        self
    }

    pub fn acc_i(self) -> i32 {
        0
    }

    pub fn sharp(self) -> Spelling {
        Spelling::from(self).sharp()
    }

    pub fn flat(self) -> Spelling {
        Spelling::from(self).flat()
    }

    pub fn acc(self, num_accidentals: i32) -> Spelling {
        Spelling::from(self).acc(num_accidentals)
    }
}

impl Add<i32> for PitchClass {
    type Output = Spelling;

    fn add(self, num_semitones: i32) -> Self::Output {
        Spelling::from(self) + num_semitones
    }
}

impl Sub<i32> for PitchClass {
    type Output = Spelling;

    fn sub(self, num_semitones: i32) -> Self::Output {
        Spelling::from(self) - num_semitones
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let natural = match parse::split_letter(s) {
            Some((letter, "")) => PitchClass::from_letter(letter),
            _ => None,
        };
        natural.ok_or_else(|| PitchError::InvalidPitchClassName { name: s.to_owned() })
    }
}

/// Whether an [`Accidental`] raises or lowers by a semitone.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Sharp,
    Flat,
}

impl Direction {
    pub fn num_semitones(self) -> i32 {
        match self {
            Direction::Sharp => 1,
            Direction::Flat => -1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Sharp => '♯',
            Direction::Flat => '♭',
        }
    }

    fn inv(self) -> Direction {
        match self {
            Direction::Sharp => Direction::Flat,
            Direction::Flat => Direction::Sharp,
        }
    }
}

/// A [`Spelling`] raised or lowered by one semitone.
///
/// An [`Accidental`] can only be created through [`Spelling::sharp`], [`Spelling::flat`] or [`Spelling::acc`].
/// These operations cancel an opposite accidental instead of stacking on top of it.
/// As a consequence, all layers of an accidental chain share the same [`Direction`].
///
/// # Examples
///
/// ```
/// # use diatonic::pitch_class::Direction;
/// # use diatonic::pitch_class::PitchClass;
/// # use diatonic::pitch_class::Spelling;
/// let c_double_sharp = PitchClass::C.sharp().sharp();
/// let Spelling::Modified(accidental) = &c_double_sharp else {
///     panic!("Sharp of a natural is modified");
/// };
///
/// assert_eq!(accidental.direction(), Direction::Sharp);
/// assert_eq!(accidental.wrapped(), &PitchClass::C.sharp());
/// assert_eq!(accidental.kernel(), PitchClass::C);
/// assert_eq!(accidental.rank(), 2);
/// assert_eq!(accidental.natural_rank(), 0);
/// assert_eq!(accidental.flat(), PitchClass::C.sharp());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Accidental {
    direction: Direction,
    wrapped: Box<Spelling>,
}

impl Accidental {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn wrapped(&self) -> &Spelling {
        &self.wrapped
    }

    pub fn kernel(&self) -> PitchClass {
        self.wrapped.kernel()
    }

    /// The rank of the wrapped spelling shifted by one semitone.
    ///
    /// The result is not reduced, i.e. B&#x266F; has rank 12 and C&#x266D; has rank -1.
    pub fn rank(&self) -> i32 {
        self.wrapped.rank() + self.direction.num_semitones()
    }

    pub fn natural_rank(&self) -> i32 {
        self.kernel().rank()
    }

    pub fn acc_i(&self) -> i32 {
        self.wrapped.acc_i() + self.direction.num_semitones()
    }

    pub fn sharp(&self) -> Spelling {
        self.clone().into_spelling().altered(Direction::Sharp)
    }

    pub fn flat(&self) -> Spelling {
        self.clone().into_spelling().altered(Direction::Flat)
    }

    pub fn acc(&self, num_accidentals: i32) -> Spelling {
        self.clone().into_spelling().acc(num_accidentals)
    }

    fn into_spelling(self) -> Spelling {
        Spelling::Modified(self)
    }
}

impl Ord for Accidental {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.rank(), self.natural_rank()).cmp(&(other.rank(), other.natural_rank()))
    }
}

impl PartialOrd for Accidental {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Accidental {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.wrapped, self.direction.symbol())
    }
}

/// A natural [`PitchClass`] or an [`Accidental`] chain on top of it.
///
/// Equality is spelling-sensitive: Enharmonic spellings have the same [`Spelling::rank`] but are neither equal nor hash-equal.
/// The order is given by [`Spelling::rank`] first and [`Spelling::natural_rank`] second.
///
/// # Examples
///
/// ```
/// # use diatonic::pitch_class::PitchClass;
/// # use diatonic::pitch_class::Spelling;
/// let c_sharp = PitchClass::C.sharp();
/// let d_flat = PitchClass::D.flat();
///
/// assert_eq!(c_sharp.rank(), d_flat.rank());
/// assert_ne!(c_sharp, d_flat);
/// assert!(c_sharp < d_flat);
///
/// assert_eq!(c_sharp.flat(), Spelling::from(PitchClass::C));
/// assert_eq!(d_flat.acc(3), PitchClass::D.acc(2));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Spelling {
    Natural(PitchClass),
    Modified(Accidental),
}

impl Spelling {
    /// See [`PitchClass::from_integer`].
    ///
    /// ```
    /// # use diatonic::pitch_class::PitchClass;
    /// # use diatonic::pitch_class::Spelling;
    /// assert_eq!(Spelling::from_integer(3), PitchClass::D.sharp());
    /// assert_eq!(Spelling::from_integer(-12), Spelling::from(PitchClass::C));
    /// ```
    pub fn from_integer(integer: i64) -> Spelling {
        PitchClass::from_integer(integer)
    }

    pub fn rank(&self) -> i32 {
        match self {
            Spelling::Natural(natural) => natural.rank(),
            Spelling::Modified(accidental) => accidental.rank(),
        }
    }

    /// The rank of the underlying natural, ignoring all accidentals.
    pub fn natural_rank(&self) -> i32 {
        self.kernel().rank()
    }

    pub fn kernel(&self) -> PitchClass {
        match self {
            Spelling::Natural(natural) => *natural,
            Spelling::Modified(accidental) => accidental.kernel(),
        }
    }

    /// The net number of accidentals, counting sharps positively and flats negatively.
    ///
    /// ```
    /// # use diatonic::pitch_class::PitchClass;
    /// assert_eq!(PitchClass::E.acc_i(), 0);
    /// assert_eq!(PitchClass::E.sharp().acc_i(), 1);
    /// assert_eq!(PitchClass::E.acc(-3).acc_i(), -3);
    /// ```
    pub fn acc_i(&self) -> i32 {
        match self {
            Spelling::Natural(natural) => natural.acc_i(),
            Spelling::Modified(accidental) => accidental.acc_i(),
        }
    }

    pub fn sharp(&self) -> Spelling {
        self.clone().altered(Direction::Sharp)
    }

    pub fn flat(&self) -> Spelling {
        self.clone().altered(Direction::Flat)
    }

    /// Applies `num_accidentals` sharps (if positive) or flats (if negative) one at a time.
    ///
    /// Opposite accidentals cancel, s.t. `x.acc(n).acc(-n) == x`.
    pub fn acc(&self, num_accidentals: i32) -> Spelling {
        let direction = if num_accidentals < 0 {
            Direction::Flat
        } else {
            Direction::Sharp
        };

        let mut spelling = self.clone();
        for _ in 0..num_accidentals.unsigned_abs() {
            spelling = spelling.altered(direction);
        }
        spelling
    }

    fn altered(self, direction: Direction) -> Spelling {
        match self {
            Spelling::Modified(accidental) if accidental.direction == direction.inv() => {
                *accidental.wrapped
            }
            unaltered => Spelling::Modified(Accidental {
                direction,
                wrapped: Box::new(unaltered),
            }),
        }
    }
}

impl From<PitchClass> for Spelling {
    fn from(natural: PitchClass) -> Self {
        Spelling::Natural(natural)
    }
}

impl From<Accidental> for Spelling {
    fn from(accidental: Accidental) -> Self {
        accidental.into_spelling()
    }
}

/// Shifts by a number of semitones and returns the canonical spelling of the result.
///
/// Unlike whole-octave shifts of a [`Pitch`](crate::pitch::Pitch), a [`Spelling`] is respelled even when shifted by 12.
/// Thus, `(x + n) + m == x + (n + m)` holds for every spelling.
///
/// ```
/// # use diatonic::pitch_class::PitchClass;
/// # use diatonic::pitch_class::Spelling;
/// let e = Spelling::from(PitchClass::E);
/// assert_eq!(&e + 1, Spelling::from(PitchClass::F));
/// assert_eq!(&e + 2, PitchClass::F.sharp());
/// assert_eq!(&e - 5, Spelling::from(PitchClass::B));
///
/// // The spelling is normalized
/// assert_eq!(PitchClass::G.flat() + 12, PitchClass::F.sharp());
/// assert_eq!(PitchClass::C.flat() + 12, Spelling::from(PitchClass::B));
/// ```
impl Add<i32> for &Spelling {
    type Output = Spelling;

    fn add(self, num_semitones: i32) -> Self::Output {
        PitchClass::from_integer(i64::from(self.rank()) + i64::from(num_semitones))
    }
}

impl Add<i32> for Spelling {
    type Output = Spelling;

    fn add(self, num_semitones: i32) -> Self::Output {
        &self + num_semitones
    }
}

impl Sub<i32> for &Spelling {
    type Output = Spelling;

    fn sub(self, num_semitones: i32) -> Self::Output {
        PitchClass::from_integer(i64::from(self.rank()) - i64::from(num_semitones))
    }
}

impl Sub<i32> for Spelling {
    type Output = Spelling;

    fn sub(self, num_semitones: i32) -> Self::Output {
        &self - num_semitones
    }
}

impl Ord for Spelling {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.rank(), self.natural_rank()).cmp(&(other.rank(), other.natural_rank()))
    }
}

impl PartialOrd for Spelling {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Spelling {
    /// ```
    /// # use diatonic::pitch_class::PitchClass;
    /// assert_eq!(PitchClass::C.acc(0).to_string(), "C");
    /// assert_eq!(PitchClass::C.acc(1).to_string(), "C♯");
    /// assert_eq!(PitchClass::B.acc(-2).to_string(), "B♭♭");
    /// assert_eq!(format!("{:>4}", PitchClass::F.sharp()), "  F♯");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Spelling::Natural(natural) => f.pad(natural.name()),
            Spelling::Modified(accidental) => f.pad(&accidental.to_string()),
        }
    }
}

impl FromStr for Spelling {
    type Err = PitchError;

    /// Parses a letter followed by any number of `#`, `♯`, `b` or `♭` characters.
    ///
    /// ```
    /// # use diatonic::pitch_class::PitchClass;
    /// # use diatonic::pitch_class::Spelling;
    /// assert_eq!("C#".parse(), Ok(PitchClass::C.sharp()));
    /// assert_eq!("eb".parse(), Ok(PitchClass::E.flat()));
    /// assert_eq!("B♭♭".parse(), Ok(PitchClass::B.acc(-2)));
    /// assert_eq!("F#b".parse(), Ok(Spelling::from(PitchClass::F)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::split_letter(s)
            .and_then(|(letter, suffix)| {
                let natural = PitchClass::from_letter(letter)?;
                let num_accidentals = parse::net_accidentals(suffix)?;
                Some(natural.acc(num_accidentals))
            })
            .ok_or_else(|| PitchError::InvalidPitchClassName { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::Hash;
    use std::hash::Hasher;

    use PitchClass::*;

    #[test]
    fn letters_and_names() {
        let letters: String = PitchClass::ALL.iter().map(|natural| natural.letter()).collect();
        let names: Vec<_> = PitchClass::ALL.iter().map(|natural| natural.name()).collect();
        assert_eq!(letters, "CDEFGAB");
        assert_eq!(names, ["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(PitchClass::from_letter('a'), Some(A));
        assert_eq!(PitchClass::from_letter('H'), None);
    }

    #[test]
    fn natural_ranks() {
        assert_eq!(
            PitchClass::ALL.map(PitchClass::rank),
            [0, 2, 4, 5, 7, 9, 11]
        );
        for natural in PitchClass::ALL {
            assert_eq!(natural.natural_rank(), natural.rank());
            assert_eq!(natural.kernel(), natural);
            assert_eq!(natural.acc_i(), 0);
        }
    }

    #[test]
    fn from_integer_uses_sharps() {
        let spellings: Vec<_> = (0..12)
            .map(|i| PitchClass::from_integer(i).to_string())
            .collect();
        assert_eq!(
            spellings,
            ["C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B"]
        );
    }

    #[test]
    fn from_integer_reduces_modulo_12() {
        for i in -36..36 {
            let spelling = PitchClass::from_integer(i);
            assert_eq!(spelling, PitchClass::from_integer(i.rem_euclid(12)));
            assert_eq!(i64::from(spelling.rank()), i.rem_euclid(12));
        }
        assert_eq!(PitchClass::from_integer(60), Spelling::from(C));
        assert_eq!(PitchClass::from_integer(62), Spelling::from(D));
        assert_eq!(PitchClass::from_integer(71), Spelling::from(B));
        assert_eq!(PitchClass::from_integer(-1), Spelling::from(B));
        assert_eq!(PitchClass::from_integer(i64::MIN), Spelling::from(E));
        assert_eq!(PitchClass::from_integer(i64::MAX), Spelling::from(G));
    }

    #[test]
    fn parse_pitch_class() {
        assert_eq!("c".parse(), Ok(C));
        assert_eq!("G".parse(), Ok(G));
        for invalid in ["", "H", "CC", "C#", "1"] {
            assert_eq!(
                invalid.parse::<PitchClass>(),
                Err(PitchError::InvalidPitchClassName {
                    name: invalid.to_owned()
                })
            );
        }
    }

    #[test]
    fn accidental_ranks() {
        for natural in PitchClass::ALL {
            let sharp = natural.sharp();
            let flat = natural.flat();

            assert_eq!(sharp.rank(), natural.rank() + 1);
            assert_eq!(flat.rank(), natural.rank() - 1);
            assert_eq!(sharp.natural_rank(), natural.rank());
            assert_eq!(flat.natural_rank(), natural.rank());
            assert_eq!(sharp.kernel(), natural);
            assert_eq!(flat.kernel(), natural);
        }

        assert_eq!(B.acc(2).rank(), 13);
        assert_eq!(C.acc(-3).rank(), -3);
    }

    #[test]
    fn one_level_cancellation() {
        for integer in -24..24 {
            for depth in -3..=3 {
                let spelling = PitchClass::from_integer(integer).acc(depth);
                assert_eq!(spelling.sharp().flat(), spelling);
                assert_eq!(spelling.flat().sharp(), spelling);
            }
        }
    }

    #[test]
    fn accidentals_telescope() {
        let spelling = D.acc(1).acc(-1).acc(-1).acc(-1).acc(1);
        assert_eq!(spelling, D.flat());
        assert_eq!(spelling.to_string(), "D♭");

        for n in -5..=5 {
            for m in -5..=5 {
                assert_eq!(A.acc(n).acc(m), A.acc(n + m));
                assert_eq!(A.acc(n).acc(-n), Spelling::from(A));
            }
        }
    }

    #[test]
    fn accidental_display() {
        let sharps: Vec<_> = PitchClass::ALL
            .iter()
            .map(|natural| natural.sharp().to_string())
            .collect();
        assert_eq!(sharps, ["C♯", "D♯", "E♯", "F♯", "G♯", "A♯", "B♯"]);

        let flats: Vec<_> = PitchClass::ALL
            .iter()
            .map(|natural| natural.flat().to_string())
            .collect();
        assert_eq!(flats, ["C♭", "D♭", "E♭", "F♭", "G♭", "A♭", "B♭"]);
    }

    #[test]
    fn canonical_ordering() {
        for natural in PitchClass::ALL {
            let natural = Spelling::from(natural);
            assert!(natural.flat() < natural);
            assert!(natural < natural.sharp());
        }

        for (lower, upper) in [
            (C.sharp(), D.flat()),
            (D.sharp(), E.flat()),
            (E.sharp(), F.into()),
            (F.sharp(), G.flat()),
            (G.sharp(), A.flat()),
            (A.sharp(), B.flat()),
            (C.into(), D.acc(-2)),
            (C.flat(), B.into()),
            (B.into(), B.sharp()),
        ] {
            assert!(lower < upper, "{} < {}", lower, upper);
        }
    }

    #[test]
    fn semitone_arithmetic() {
        assert_eq!((C + 1).rank(), C.rank() + 1);
        assert_eq!(C + 1, C.sharp());
        assert_eq!(C - 1, Spelling::from(B));
        assert_eq!(E.flat() + 2, Spelling::from(F));
        assert_eq!(E.flat() + 3, F.sharp());

        for integer in 0..12 {
            let spelling = PitchClass::from_integer(integer);
            assert_eq!(&spelling + 12, spelling);
            assert_eq!(&spelling - 12, spelling);
            assert_eq!(&spelling + -12, spelling);
            assert_eq!(&spelling - -12, spelling);
        }
    }

    #[test]
    fn semitone_arithmetic_at_integer_bounds() {
        let c = Spelling::from(C);
        assert_eq!(&c + i32::MAX, Spelling::from(G));
        assert_eq!(&c - i32::MIN, G.sharp());
        assert_eq!(B.sharp() + i32::MAX, Spelling::from(G));
        assert_eq!(C.flat() - i32::MAX, Spelling::from(E));
        assert_eq!(C + i32::MIN, Spelling::from(E));
    }

    #[test]
    fn semitone_arithmetic_is_associative() {
        let spellings = [C.flat(), Spelling::from(C), B.sharp(), D.acc(-2), F.acc(3)];
        for spelling in &spellings {
            for n in -13..=13 {
                for m in -13..=13 {
                    assert_eq!(&(spelling + n) + m, spelling + (n + m));
                }
            }
        }
    }

    #[test]
    fn enharmonics_are_distinct_keys() {
        let c = Spelling::from(C);
        assert_eq!(hash_of(&c), hash_of(&c.clone()));
        assert_eq!(hash_of(&C.sharp()), hash_of(&C.sharp()));
        assert_eq!(hash_of(&C.flat()), hash_of(&C.flat()));

        assert_ne!(c, B.sharp());
        assert_ne!(c, D.flat().flat());
        assert_ne!(hash_of(&c), hash_of(&B.sharp()));
        assert_ne!(hash_of(&c), hash_of(&D.flat().flat()));

        let spellings: HashSet<_> = [c, B.sharp(), D.acc(-2), C.sharp().flat()]
            .into_iter()
            .collect();
        assert_eq!(spellings.len(), 3);
    }

    fn hash_of(spelling: &Spelling) -> u64 {
        let mut hasher = DefaultHasher::new();
        spelling.hash(&mut hasher);
        hasher.finish()
    }
}
