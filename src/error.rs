//! Errors reported when constructing pitch classes, spellings or pitches from untyped input.

/// Constructing a pitch value from a string or from untyped numbers failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PitchError {
    /// The letter is not one of A&ndash;G or the accidental suffix is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use diatonic::error::PitchError;
    /// # use diatonic::pitch_class::PitchClass;
    /// # use diatonic::pitch_class::Spelling;
    /// assert_eq!(
    ///     "H".parse::<PitchClass>(),
    ///     Err(PitchError::InvalidPitchClassName { name: "H".to_owned() })
    /// );
    /// assert_eq!(
    ///     "Cx".parse::<Spelling>(),
    ///     Err(PitchError::InvalidPitchClassName { name: "Cx".to_owned() })
    /// );
    /// ```
    InvalidPitchClassName { name: String },

    /// The octave is missing, not an integer or out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use diatonic::error::PitchError;
    /// # use diatonic::pitch::Pitch;
    /// # use diatonic::pitch_class::PitchClass;
    /// assert_eq!(
    ///     "C4.5".parse::<Pitch>(),
    ///     Err(PitchError::InvalidConstructionArgument { argument: "4.5".to_owned() })
    /// );
    /// assert_eq!(
    ///     Pitch::try_from_parts(PitchClass::C.into(), 0.5),
    ///     Err(PitchError::InvalidConstructionArgument { argument: "0.5".to_owned() })
    /// );
    /// ```
    InvalidConstructionArgument { argument: String },
}
