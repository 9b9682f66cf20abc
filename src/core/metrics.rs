use crate::core::classify::split_letters;
use crate::core::letters::{letter_value, vowel_value};
use crate::core::reduction::{digit_sum, reduce};
use crate::error::NumerologyError;
use crate::models::{BirthDate, NumerologyProfile};

/// Life path number of an already parsed birth date.
///
/// Month and day are reduced on their own. The year's digits are summed
/// once and that sum is reduced. The three results are added and reduced
/// again.
pub fn life_path_for(date: &BirthDate) -> u32 {
    let month = reduce(date.month);
    let day = reduce(date.day);
    let year = reduce(digit_sum(date.year));

    reduce(u64::from(month + day + year))
}

/// Life path number of a `MM-DD-YYYY` or `MM/DD/YYYY` date string
pub fn life_path(birth_date: &str) -> Result<u32, NumerologyError> {
    Ok(life_path_for(&BirthDate::parse(birth_date)?))
}

/// Soul urge: vowels valued with the vowel table
pub fn soul_urge(name: &str) -> u32 {
    let total: u32 = split_letters(name).vowels.into_iter().map(vowel_value).sum();
    reduce(u64::from(total))
}

/// Expression: every letter of the name
pub fn expression(name: &str) -> u32 {
    let total: u32 = name
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphabetic())
        .map(letter_value)
        .sum();
    reduce(u64::from(total))
}

/// Personality: consonants only
pub fn personality(name: &str) -> u32 {
    let total: u32 = split_letters(name).consonants.into_iter().map(letter_value).sum();
    reduce(u64::from(total))
}

/// Profile for a name given a precomputed life path
pub fn profile_with_life_path(full_name: &str, life_path: u32) -> NumerologyProfile {
    let split = split_letters(full_name);
    let soul_urge: u32 = split.vowels.iter().copied().map(vowel_value).sum();
    let personality: u32 = split.consonants.iter().copied().map(letter_value).sum();

    NumerologyProfile {
        life_path,
        soul_urge: reduce(u64::from(soul_urge)),
        expression: expression(full_name),
        personality: reduce(u64::from(personality)),
    }
}

/// Complete numerology profile for a full name and birth date string
pub fn calculate_profile(full_name: &str, birth_date: &str) -> Result<NumerologyProfile, NumerologyError> {
    let life_path = life_path(birth_date)?;
    Ok(profile_with_life_path(full_name, life_path))
}
