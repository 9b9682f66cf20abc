// Core algorithm exports
pub mod classify;
pub mod filters;
pub mod letters;
pub mod metrics;
pub mod reduction;
pub mod search;

pub use classify::{consonants, split_letters, vowels, LetterSplit};
pub use filters::matching_components;
pub use letters::{letter_value, vowel_value};
pub use metrics::{calculate_profile, expression, life_path, life_path_for, personality, profile_with_life_path, soul_urge};
pub use reduction::{digit_sum, reduce};
pub use search::{evaluate_candidate, CandidateSearch, Cancellation, SearchOutcome, DEFAULT_PROGRESS_INTERVAL};
