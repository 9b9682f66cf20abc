//! Static value tables for the Pythagorean cipher.

/// Letters that are always vowels. `Y` is decided by position.
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Values for `A..=Z`: three cycles of 1..=9, the last one cut at Z = 8
const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

/// Value of a letter in the standard table, case-insensitive.
/// Anything outside `A..=Z` is worth 0.
#[inline]
pub fn letter_value(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_VALUES[(upper as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Value of a vowel in the soul urge table
#[inline]
pub fn vowel_value(vowel: char) -> u32 {
    match vowel.to_ascii_uppercase() {
        'A' => 1,
        'E' => 5,
        'I' => 9,
        'O' => 6,
        'U' => 3,
        'Y' => 7,
        _ => 0,
    }
}

#[inline]
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter)
}
