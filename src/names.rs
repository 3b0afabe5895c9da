//! Shorthand constructors for every natural, sharp and flat [`Pitch`].
//!
//! Each function takes the octave in scientific pitch notation.
//!
//! # Examples
//!
//! ```
//! # use diatonic::names::*;
//! # use diatonic::pitch::Pitch;
//! # use diatonic::pitch_class::PitchClass;
//! assert_eq!(c(-1), Pitch::from_midi(0));
//! assert_eq!(a(4), Pitch::from_midi(69));
//! assert_eq!(g(9), Pitch::from_midi(127));
//! assert_eq!(b_flat(3), Pitch::new(PitchClass::B.flat(), 3));
//! assert_eq!(e_sharp(2).midi(), f(2).midi());
//! ```

use crate::pitch::Pitch;
use crate::pitch_class::PitchClass;

macro_rules! pitch_constructors {
    ($($name:ident => $natural:ident $(. $accidental:ident)?;)*) => {
        $(
            pub fn $name(octave: i32) -> Pitch {
                Pitch::new(PitchClass::$natural $(.$accidental())?, octave)
            }
        )*
    };
}

pitch_constructors! {
    c_flat => C.flat;
    c => C;
    c_sharp => C.sharp;
    d_flat => D.flat;
    d => D;
    d_sharp => D.sharp;
    e_flat => E.flat;
    e => E;
    e_sharp => E.sharp;
    f_flat => F.flat;
    f => F;
    f_sharp => F.sharp;
    g_flat => G.flat;
    g => G;
    g_sharp => G.sharp;
    a_flat => A.flat;
    a => A;
    a_sharp => A.sharp;
    b_flat => B.flat;
    b => B;
    b_sharp => B.sharp;
}
