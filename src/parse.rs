/// Splits a textual pitch like `"Bb-1"` into its spelling (`"Bb"`) and octave (`"-1"`) part.
///
/// The first character always belongs to the spelling s.t. a leading sign is never mistaken for an octave.
pub fn split_octave(s: &str) -> (&str, &str) {
    let letter_len = s.chars().next().map_or(0, char::len_utf8);
    match s[letter_len..].find(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
        Some(index) => s.split_at(letter_len + index),
        None => (s, ""),
    }
}

/// Splits a textual spelling like `"C#"` into its letter and accidental suffix.
pub fn split_letter(s: &str) -> Option<(char, &str)> {
    let mut chars = s.chars();
    let letter = chars.next()?;
    Some((letter, chars.as_str()))
}

/// Longest accidental suffix accepted from text.
///
/// Every accidental layer adds a level of nesting to the parsed spelling.
pub const MAX_ACCIDENTALS: usize = 256;

/// Sums up an accidental suffix, counting sharps as +1 and flats as -1.
///
/// Suffixes with more than [`MAX_ACCIDENTALS`] characters are rejected.
pub fn net_accidentals(suffix: &str) -> Option<i32> {
    if suffix.chars().nth(MAX_ACCIDENTALS).is_some() {
        return None;
    }
    suffix.chars().try_fold(0, |net, c| match c {
        '#' | '♯' => Some(net + 1),
        'b' | '♭' => Some(net - 1),
        _ => None,
    })
}
