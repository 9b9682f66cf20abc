use crate::core::letters::is_vowel;

/// Letters of a name split into vowels and consonants, in name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSplit {
    pub vowels: Vec<char>,
    pub consonants: Vec<char>,
}

/// Classify every letter of `name` in a single left-to-right pass.
///
/// Spaces are removed and the name is uppercased first. `Y` counts as a
/// consonant when it opens the name or follows A, E, I, O or U, and as a
/// vowel otherwise. Characters that are not letters are dropped but still
/// count as the previous character for the `Y` rule.
pub fn split_letters(name: &str) -> LetterSplit {
    let mut split = LetterSplit::default();
    let mut previous: Option<char> = None;

    for letter in name.chars().filter(|c| *c != ' ').flat_map(char::to_uppercase) {
        if is_vowel(letter) {
            split.vowels.push(letter);
        } else if letter == 'Y' {
            match previous {
                Some(prev) if !is_vowel(prev) => split.vowels.push(letter),
                _ => split.consonants.push(letter),
            }
        } else if letter.is_alphabetic() {
            split.consonants.push(letter);
        }
        previous = Some(letter);
    }

    split
}

/// Vowels of `name`, `Y` included where it acts as a vowel
pub fn vowels(name: &str) -> Vec<char> {
    split_letters(name).vowels
}

/// Consonants of `name`, `Y` included where it acts as a consonant
pub fn consonants(name: &str) -> Vec<char> {
    split_letters(name).consonants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_y_is_consonant() {
        let split = split_letters("YOLO");
        assert_eq!(split.vowels, vec!['O', 'O']);
        assert_eq!(split.consonants, vec!['Y', 'L']);
    }

    #[test]
    fn test_y_after_consonant_is_vowel() {
        assert_eq!(vowels("Kyle"), vec!['Y', 'E']);
        assert_eq!(consonants("Kyle"), vec!['K', 'L']);
    }

    #[test]
    fn test_y_after_vowel_is_consonant() {
        let split = split_letters("Mary Lynn");
        assert_eq!(split.vowels, vec!['A', 'Y', 'Y']);
        assert_eq!(split.consonants, vec!['M', 'R', 'L', 'N', 'N']);

        assert_eq!(consonants("Faye"), vec!['F', 'Y']);
    }

    #[test]
    fn test_spaces_removed_before_scan() {
        // "Amy Yates" scans as "AMYYATES": the second Y follows a Y, not a vowel
        assert_eq!(vowels("Amy Yates"), vec!['A', 'Y', 'Y', 'A', 'E']);
    }

    #[test]
    fn test_punctuation_ignored_but_breaks_vowel_run() {
        assert_eq!(vowels("Ray-Yates"), vec!['A', 'Y', 'A', 'E']);
        assert_eq!(consonants("O'Ryan"), vec!['R', 'N']);
        assert_eq!(consonants("Ray-Yates"), vec!['R', 'Y', 'T', 'S']);
    }

    #[test]
    fn test_empty_and_non_alphabetic() {
        assert_eq!(split_letters(""), LetterSplit::default());
        assert_eq!(split_letters("123 -"), LetterSplit::default());
    }
}
