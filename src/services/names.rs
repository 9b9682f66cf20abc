use crate::models::Gender;
use crate::services::name_data::{
    FEMALE_FIRST_NAMES, FEMALE_MIDDLE_NAMES, MALE_FIRST_NAMES, MALE_MIDDLE_NAMES,
};

/// Source of the four ordered name lists the search draws from
///
/// The search never looks at where the names come from, so tests can plug
/// in small fixture lists.
pub trait NameSource {
    fn male_first(&self) -> &[String];
    fn female_first(&self) -> &[String];
    fn male_middle(&self) -> &[String];
    fn female_middle(&self) -> &[String];

    /// First and middle names for a gender selector.
    ///
    /// `Gender::Any` concatenates the male and female lists (male first),
    /// keeping duplicates.
    fn pool(&self, gender: Gender) -> NamePool<'_> {
        match gender {
            Gender::Male => NamePool::new(self.male_first(), self.male_middle()),
            Gender::Female => NamePool::new(self.female_first(), self.female_middle()),
            Gender::Any => NamePool {
                first_names: as_strs(self.male_first())
                    .chain(as_strs(self.female_first()))
                    .collect(),
                middle_names: as_strs(self.male_middle())
                    .chain(as_strs(self.female_middle()))
                    .collect(),
            },
        }
    }
}

fn as_strs(names: &[String]) -> impl Iterator<Item = &str> {
    names.iter().map(String::as_str)
}

/// First and middle names selected for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePool<'a> {
    pub first_names: Vec<&'a str>,
    pub middle_names: Vec<&'a str>,
}

impl<'a> NamePool<'a> {
    fn new(first: &'a [String], middle: &'a [String]) -> Self {
        Self {
            first_names: as_strs(first).collect(),
            middle_names: as_strs(middle).collect(),
        }
    }

    /// Size of the full cross product
    pub fn combinations(&self) -> usize {
        self.first_names.len() * self.middle_names.len()
    }

    /// Every (first, middle) pair, first names in the outer loop
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.first_names
            .iter()
            .flat_map(move |&first| self.middle_names.iter().map(move |&middle| (first, middle)))
    }
}

/// Owned name lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameLists {
    male_first: Vec<String>,
    female_first: Vec<String>,
    male_middle: Vec<String>,
    female_middle: Vec<String>,
}

impl NameLists {
    pub fn new<S: Into<String>>(
        male_first: impl IntoIterator<Item = S>,
        female_first: impl IntoIterator<Item = S>,
        male_middle: impl IntoIterator<Item = S>,
        female_middle: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            male_first: male_first.into_iter().map(Into::into).collect(),
            female_first: female_first.into_iter().map(Into::into).collect(),
            male_middle: male_middle.into_iter().map(Into::into).collect(),
            female_middle: female_middle.into_iter().map(Into::into).collect(),
        }
    }

    /// The bundled lists of popular names
    pub fn builtin() -> Self {
        Self::new(
            MALE_FIRST_NAMES.iter().copied(),
            FEMALE_FIRST_NAMES.iter().copied(),
            MALE_MIDDLE_NAMES.iter().copied(),
            FEMALE_MIDDLE_NAMES.iter().copied(),
        )
    }
}

impl NameSource for NameLists {
    fn male_first(&self) -> &[String] {
        &self.male_first
    }

    fn female_first(&self) -> &[String] {
        &self.female_first
    }

    fn male_middle(&self) -> &[String] {
        &self.male_middle
    }

    fn female_middle(&self) -> &[String] {
        &self.female_middle
    }
}
