use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NumerologyError;

/// Birth date as entered by the user: month, day and year with no calendar checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub month: u64,
    pub day: u64,
    pub year: u64,
}

impl BirthDate {
    /// Parse `MM-DD-YYYY` or `MM/DD/YYYY`.
    ///
    /// The first separator found wins (`-` is checked before `/`), and the
    /// input must split into exactly three unsigned integers. Zero padding
    /// is optional and values are not range checked, so `13-40-2024` and
    /// `1-1-99999999999` both parse.
    pub fn parse(input: &str) -> Result<Self, NumerologyError> {
        let invalid = || NumerologyError::InvalidDateFormat(input.to_string());

        let separator = if input.contains('-') {
            '-'
        } else if input.contains('/') {
            '/'
        } else {
            return Err(invalid());
        };

        let parts: Vec<u64> = input
            .split(separator)
            .map(|part| part.trim().parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;

        match parts.as_slice() {
            [month, day, year] => Ok(Self {
                month: *month,
                day: *day,
                year: *year,
            }),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.month, self.day, self.year)
    }
}

/// One of the numbers exempt from digit reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum MasterNumber {
    Eleven,
    TwentyTwo,
    ThirtyThree,
}

impl MasterNumber {
    pub const ALL: [MasterNumber; 3] = [
        MasterNumber::Eleven,
        MasterNumber::TwentyTwo,
        MasterNumber::ThirtyThree,
    ];

    pub fn value(self) -> u32 {
        match self {
            MasterNumber::Eleven => 11,
            MasterNumber::TwentyTwo => 22,
            MasterNumber::ThirtyThree => 33,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            11 => Some(MasterNumber::Eleven),
            22 => Some(MasterNumber::TwentyTwo),
            33 => Some(MasterNumber::ThirtyThree),
            _ => None,
        }
    }

    #[inline]
    pub fn is_master(value: u32) -> bool {
        Self::from_value(value).is_some()
    }
}

impl From<MasterNumber> for u32 {
    fn from(value: MasterNumber) -> Self {
        value.value()
    }
}

impl TryFrom<u32> for MasterNumber {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("{} is not a master number", value))
    }
}

impl fmt::Display for MasterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The four metrics of a numerology profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    LifePath,
    SoulUrge,
    Expression,
    Personality,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::LifePath,
        Component::SoulUrge,
        Component::Expression,
        Component::Personality,
    ];

    /// Machine name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::LifePath => "life_path",
            Component::SoulUrge => "soul_urge",
            Component::Expression => "expression",
            Component::Personality => "personality",
        }
    }

    /// Human-readable name for display
    pub fn label(&self) -> &'static str {
        match self {
            Component::LifePath => "Life Path",
            Component::SoulUrge => "Soul Urge",
            Component::Expression => "Expression",
            Component::Personality => "Personality",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numerology metrics for one full name and birth date.
///
/// Every value is 0..=9 or a master number; 0 only appears for names with
/// no letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub soul_urge: u32,
    pub expression: u32,
    pub personality: u32,
}

impl NumerologyProfile {
    pub fn get(&self, component: Component) -> u32 {
        match component {
            Component::LifePath => self.life_path,
            Component::SoulUrge => self.soul_urge,
            Component::Expression => self.expression,
            Component::Personality => self.personality,
        }
    }

    /// All four metrics in display order
    pub fn components(&self) -> [(Component, u32); 4] {
        Component::ALL.map(|c| (c, self.get(c)))
    }
}

/// Gender selector used to pick the name lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Any,
}

impl Gender {
    /// Resolve a free-form selector. Unrecognized input selects both pools.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Gender::Male,
            "female" | "f" | "girl" => Gender::Female,
            _ => Gender::Any,
        }
    }
}

/// A first/middle pair combined with the fixed last name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCandidate {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "middleName")]
    pub middle_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

impl NameCandidate {
    pub fn new(first_name: &str, middle_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            middle_name: middle_name.to_string(),
            last_name: last_name.to_string(),
            full_name: format!("{} {} {}", first_name, middle_name, last_name),
        }
    }
}

/// A profile component whose value hit one of the target master numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMatch {
    pub component: Component,
    pub value: u32,
}

/// Candidate that produced at least one targeted master number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub candidate: NameCandidate,
    pub profile: NumerologyProfile,
    #[serde(rename = "masterNumbers")]
    pub master_numbers: Vec<ComponentMatch>,
}

impl SearchResult {
    pub fn full_name(&self) -> &str {
        &self.candidate.full_name
    }
}
