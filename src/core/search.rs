use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::core::{filters::matching_components, metrics::{life_path_for, profile_with_life_path}};
use crate::error::NumerologyError;
use crate::models::{
    BirthDate, Component, Gender, MasterNumber, NameCandidate, SearchCriteria, SearchResult,
};
use crate::services::NameSource;

/// Default number of combinations between progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Cooperative stop signal polled before each candidate
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Result of a search run
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Matches in enumeration order, at most `max_results` of them
    pub results: Vec<SearchResult>,
    pub combinations_checked: usize,
    /// Set when the run stopped because of the cancellation flag
    pub cancelled: bool,
}

/// Enumerates first × middle name combinations and keeps the ones whose
/// profile hits a target master number.
///
/// # Enumeration
/// 1. First names in list order (outer loop)
/// 2. Middle names in list order (inner loop)
/// 3. Stop as soon as `max_results` matches are collected
#[derive(Debug, Clone)]
pub struct CandidateSearch<S> {
    source: S,
    progress_interval: usize,
}

impl<S: NameSource> CandidateSearch<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Log progress every `interval` combinations (0 disables progress lines)
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run a search to completion
    pub fn run(&self, criteria: &SearchCriteria) -> SearchOutcome {
        self.run_until(criteria, &AtomicBool::new(false))
    }

    /// Run a search, checking `cancel` before every candidate.
    ///
    /// A cancelled run returns the matches collected so far.
    pub fn run_until<C>(&self, criteria: &SearchCriteria, cancel: &C) -> SearchOutcome
    where
        C: Cancellation + ?Sized,
    {
        let pool = self.source.pool(criteria.gender);
        // The life path only depends on the birth date
        let life_path = life_path_for(&criteria.birth_date);

        info!(
            "Searching for names with master numbers {:?} in components {:?}",
            criteria.target_numbers.iter().map(|n| n.value()).collect::<Vec<_>>(),
            criteria.target_components.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        );
        info!(
            "Checking {} first names x {} middle names = {} combinations",
            pool.first_names.len(),
            pool.middle_names.len(),
            pool.combinations(),
        );

        let mut combinations_checked = 0usize;
        let mut found = 0usize;
        let mut cancelled = false;
        let interval = self.progress_interval;

        let results: Vec<SearchResult> = pool
            .pairs()
            .take_while(|_| {
                cancelled = cancel.is_cancelled();
                !cancelled
            })
            .filter_map(|(first, middle)| {
                combinations_checked += 1;
                if interval > 0 && combinations_checked % interval == 0 {
                    info!(
                        "Checked {} combinations, found {} matches so far...",
                        combinations_checked, found
                    );
                }

                let candidate = NameCandidate::new(first, middle, &criteria.last_name);
                let result = evaluate_candidate(candidate, life_path, criteria);
                if let Some(result) = &result {
                    found += 1;
                    debug!("Match: {} {:?}", result.full_name(), result.master_numbers);
                }
                result
            })
            .take(criteria.max_results)
            .collect();

        if cancelled {
            warn!(
                "Search cancelled after {} combinations with {} matches",
                combinations_checked,
                results.len()
            );
        } else {
            info!("Search complete! Checked {} combinations.", combinations_checked);
        }

        SearchOutcome {
            results,
            combinations_checked,
            cancelled,
        }
    }

    /// Search from raw inputs, the way an interactive caller supplies them.
    ///
    /// Fails only when the birth date cannot be parsed.
    pub fn find_master_number_names(
        &self,
        birth_date: &str,
        gender: &str,
        last_name: &str,
        target_numbers: &[MasterNumber],
        target_components: &[Component],
        max_results: usize,
    ) -> Result<Vec<SearchResult>, NumerologyError> {
        let criteria = SearchCriteria::new(
            BirthDate::parse(birth_date)?,
            Gender::from_selector(gender),
            last_name,
        )
        .with_numbers(target_numbers.to_vec())
        .with_components(target_components.to_vec())
        .with_max_results(max_results);

        Ok(self.run(&criteria).results)
    }
}

/// Score one candidate; `None` when no targeted component is a target master number
pub fn evaluate_candidate(
    candidate: NameCandidate,
    life_path: u32,
    criteria: &SearchCriteria,
) -> Option<SearchResult> {
    let profile = profile_with_life_path(&candidate.full_name, life_path);
    let master_numbers = matching_components(
        &profile,
        &criteria.target_components,
        &criteria.target_numbers,
    );

    if master_numbers.is_empty() {
        None
    } else {
        Some(SearchResult {
            candidate,
            profile,
            master_numbers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentMatch;
    use crate::services::NameLists;
    use std::cell::Cell;

    /// Stops the search once `limit` candidates have been let through
    struct CancelAfter {
        checks: Cell<usize>,
        limit: usize,
    }

    impl CancelAfter {
        fn new(limit: usize) -> Self {
            Self { checks: Cell::new(0), limit }
        }
    }

    impl Cancellation for CancelAfter {
        fn is_cancelled(&self) -> bool {
            self.checks.set(self.checks.get() + 1);
            self.checks.get() > self.limit
        }
    }

    fn create_fixture_search() -> CandidateSearch<NameLists> {
        CandidateSearch::new(NameLists::new(
            vec!["Amy", "Bob"],
            vec!["Eve", "Zoe"],
            vec!["Amy", "Max"],
            vec!["Ian", "Leo"],
        ))
    }

    fn create_criteria(gender: Gender) -> SearchCriteria {
        SearchCriteria::new(BirthDate::parse("02-09-1990").unwrap(), gender, "Smith")
    }

    #[test]
    fn test_single_expression_match() {
        let search = create_fixture_search();
        let criteria = create_criteria(Gender::Male)
            .with_components(vec![Component::Expression])
            .with_numbers(vec![MasterNumber::Eleven])
            .with_max_results(5);

        let outcome = search.run(&criteria);

        assert_eq!(outcome.combinations_checked, 4);
        assert!(!outcome.cancelled);
        assert_eq!(outcome.results.len(), 1);
        let result = &outcome.results[0];
        assert_eq!(result.full_name(), "Amy Max Smith");
        assert_eq!(
            result.master_numbers,
            vec![ComponentMatch { component: Component::Expression, value: 11 }]
        );
    }

    #[test]
    fn test_cap_short_circuits_enumeration() {
        let search = create_fixture_search();
        let criteria = create_criteria(Gender::Male)
            .with_components(vec![Component::Personality])
            .with_max_results(1);

        // Amy Amy Smith has personality 5, Amy Max Smith has 11
        let outcome = search.run(&criteria);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].full_name(), "Amy Max Smith");
        assert_eq!(outcome.combinations_checked, 2);
    }

    #[test]
    fn test_life_path_target_matches_every_candidate_or_none() {
        let search = create_fixture_search();
        let birth_date = BirthDate::parse("09-01-1990").unwrap();
        let criteria = SearchCriteria::new(birth_date, Gender::Female, "Smith")
            .with_components(vec![Component::LifePath]);

        let outcome = search.run(&criteria);
        let names: Vec<&str> = outcome.results.iter().map(|r| r.full_name()).collect();
        assert_eq!(
            names,
            vec!["Eve Ian Smith", "Eve Leo Smith", "Zoe Ian Smith", "Zoe Leo Smith"]
        );

        let outcome = search.run(&create_criteria(Gender::Female).with_components(vec![Component::LifePath]));
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.combinations_checked, 4);
    }

    #[test]
    fn test_cancelled_before_start() {
        let search = create_fixture_search();
        let cancel = AtomicBool::new(true);

        let outcome = search.run_until(&create_criteria(Gender::Any), &cancel);

        assert!(outcome.cancelled);
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.combinations_checked, 0);
    }

    #[test]
    fn test_cancelled_mid_search_keeps_partial_results() {
        let search = create_fixture_search();
        let criteria = create_criteria(Gender::Male)
            .with_components(vec![Component::Personality]);

        // Amy Max Smith (2nd) matches; Bob Max Smith (4th) would too but is never reached
        let outcome = search.run_until(&criteria, &CancelAfter::new(3));

        assert!(outcome.cancelled);
        assert_eq!(outcome.combinations_checked, 3);
        let names: Vec<&str> = outcome.results.iter().map(|r| r.full_name()).collect();
        assert_eq!(names, vec!["Amy Max Smith"]);
    }

    #[test]
    fn test_find_master_number_names_rejects_bad_date() {
        let search = create_fixture_search();
        let result = search.find_master_number_names(
            "not-a-date",
            "m",
            "Smith",
            &MasterNumber::ALL,
            &Component::ALL,
            10,
        );
        assert!(matches!(result, Err(NumerologyError::InvalidDateFormat(_))));
    }
}
