use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::RequestError;
use crate::models::domain::{BirthDate, Component, Gender, MasterNumber};

/// Result cap used when none (or an unusable one) is supplied
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Raw search input as typed by the user.
///
/// Only the birth date and last name are required. The optional filters
/// are free text and fall back to their defaults instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "birth_date", rename = "birthDate")]
    pub birth_date: String,
    #[serde(default)]
    pub gender: String,
    #[validate(length(min = 1))]
    #[serde(alias = "last_name", rename = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub numbers: Option<String>,
    #[serde(default)]
    pub components: Option<String>,
    #[serde(default, alias = "max_results", rename = "maxResults")]
    pub max_results: Option<String>,
}

impl SearchRequest {
    /// Validate the required fields and resolve every filter.
    ///
    /// The birth date is parsed here so a malformed date is reported before
    /// any candidate is enumerated.
    pub fn into_criteria(self, default_max_results: usize) -> Result<SearchCriteria, RequestError> {
        let request = Self {
            birth_date: self.birth_date.trim().to_string(),
            gender: self.gender.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            ..self
        };
        request.validate()?;

        let birth_date = BirthDate::parse(&request.birth_date)?;

        Ok(SearchCriteria {
            birth_date,
            gender: Gender::from_selector(&request.gender),
            last_name: request.last_name,
            target_numbers: parse_target_numbers(request.numbers.as_deref()),
            target_components: parse_target_components(request.components.as_deref()),
            max_results: parse_max_results(request.max_results.as_deref(), default_max_results),
        })
    }
}

/// Fully resolved search parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(rename = "birthDate")]
    pub birth_date: BirthDate,
    pub gender: Gender,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "targetNumbers")]
    pub target_numbers: Vec<MasterNumber>,
    #[serde(rename = "targetComponents")]
    pub target_components: Vec<Component>,
    #[serde(rename = "maxResults")]
    pub max_results: usize,
}

impl SearchCriteria {
    /// Criteria targeting every master number in every component
    pub fn new(birth_date: BirthDate, gender: Gender, last_name: impl Into<String>) -> Self {
        Self {
            birth_date,
            gender,
            last_name: last_name.into(),
            target_numbers: MasterNumber::ALL.to_vec(),
            target_components: Component::ALL.to_vec(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_numbers(mut self, numbers: Vec<MasterNumber>) -> Self {
        self.target_numbers = numbers;
        self
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.target_components = components;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Parse a comma separated list of master numbers.
///
/// Any token that is not an integer discards the whole list. Integers that
/// are not master numbers, negative or huge ones included, are dropped.
/// An empty outcome means all three.
pub fn parse_target_numbers(input: Option<&str>) -> Vec<MasterNumber> {
    let input = match input.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return MasterNumber::ALL.to_vec(),
    };

    let parsed: Result<Vec<i64>, _> = input.split(',').map(|t| t.trim().parse::<i64>()).collect();
    let numbers: Vec<MasterNumber> = match parsed {
        Ok(values) => values
            .into_iter()
            .filter_map(|v| u32::try_from(v).ok())
            .filter_map(MasterNumber::from_value)
            .collect(),
        Err(_) => {
            tracing::debug!("Unparseable target numbers {:?}, using defaults", input);
            Vec::new()
        }
    };

    if numbers.is_empty() {
        MasterNumber::ALL.to_vec()
    } else {
        numbers
    }
}

/// Parse a comma separated list of component names, ignoring unknown ones.
/// An empty outcome means all four.
pub fn parse_target_components(input: Option<&str>) -> Vec<Component> {
    let components: Vec<Component> = input
        .unwrap_or_default()
        .split(',')
        .filter_map(|name| Component::from_name(name.trim()))
        .collect();

    if components.is_empty() {
        Component::ALL.to_vec()
    } else {
        components
    }
}

/// Parse a positive result cap, falling back to `default` otherwise
pub fn parse_max_results(input: Option<&str>, default: usize) -> usize {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => match s.parse::<i64>() {
            Ok(n) if n > 0 => usize::try_from(n).unwrap_or(default),
            _ => default,
        },
        None => default,
    }
}
