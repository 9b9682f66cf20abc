// Integration tests for Numerology Search

use numerology_search::display::render_results;
use numerology_search::models::{ComponentMatch, SearchRequest, DEFAULT_MAX_RESULTS};
use numerology_search::{BirthDate, CandidateSearch, Component, Gender, MasterNumber, NameLists, SearchCriteria};

fn create_fixture_lists() -> NameLists {
    NameLists::new(
        vec!["Amy", "Bob"],
        vec!["Eve", "Ella"],
        vec!["Amy", "Max"],
        vec!["Ruth", "Noah"],
    )
}

fn create_criteria(date: &str, gender: Gender) -> SearchCriteria {
    SearchCriteria::new(BirthDate::parse(date).unwrap(), gender, "Smith")
}

#[test]
fn test_integration_single_match_fixture() {
    let search = CandidateSearch::new(create_fixture_lists());
    let criteria = create_criteria("02-09-1990", Gender::Male)
        .with_components(vec![Component::Expression])
        .with_numbers(vec![MasterNumber::Eleven])
        .with_max_results(5);

    let outcome = search.run(&criteria);

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].candidate.first_name, "Amy");
    assert_eq!(outcome.results[0].candidate.middle_name, "Max");
    assert_eq!(outcome.results[0].full_name(), "Amy Max Smith");
}

#[test]
fn test_integration_results_bounded_and_matching() {
    let search = CandidateSearch::new(NameLists::builtin());

    for max_results in [1, 3, 10, 25] {
        let criteria = create_criteria("05-15-1990", Gender::Any).with_max_results(max_results);
        let outcome = search.run(&criteria);

        assert!(outcome.results.len() <= max_results);
        for result in &outcome.results {
            assert!(!result.master_numbers.is_empty());
            for m in &result.master_numbers {
                assert_eq!(result.profile.get(m.component), m.value);
                assert!(MasterNumber::is_master(m.value));
            }
        }
    }
}

#[test]
fn test_integration_builtin_male_search() {
    let search = CandidateSearch::new(NameLists::builtin());
    let criteria = create_criteria("02-09-1990", Gender::Male).with_max_results(3);

    let outcome = search.run(&criteria);

    let names: Vec<&str> = outcome.results.iter().map(|r| r.full_name()).collect();
    assert_eq!(
        names,
        vec!["Aaron Adam Smith", "Aaron Alan Smith", "Aaron Alexander Smith"]
    );
    assert_eq!(outcome.combinations_checked, 6);
    assert_eq!(
        outcome.results[2].master_numbers,
        vec![
            ComponentMatch { component: Component::SoulUrge, value: 11 },
            ComponentMatch { component: Component::Personality, value: 11 },
        ]
    );
}

#[test]
fn test_integration_builtin_female_33() {
    let search = CandidateSearch::new(NameLists::builtin());
    let criteria = create_criteria("05-15-1990", Gender::Female)
        .with_numbers(vec![MasterNumber::ThirtyThree])
        .with_max_results(2);

    let outcome = search.run(&criteria);

    let names: Vec<&str> = outcome.results.iter().map(|r| r.full_name()).collect();
    assert_eq!(names, vec!["Abigail Alice Smith", "Abigail Jackie Smith"]);
    assert_eq!(outcome.combinations_checked, 70);
}

#[test]
fn test_integration_any_gender_expression() {
    let search = CandidateSearch::new(NameLists::builtin());
    let results = search
        .find_master_number_names(
            "02-09-1990",
            "x",
            "Smith",
            &MasterNumber::ALL,
            &[Component::Expression],
            3,
        )
        .unwrap();

    let names: Vec<&str> = results.iter().map(|r| r.full_name()).collect();
    assert_eq!(names, vec!["Aaron Adam Smith", "Aaron Alan Smith", "Aaron Edward Smith"]);
}

#[test]
fn test_integration_request_to_report() {
    let request = SearchRequest {
        birth_date: "02/09/1990".to_string(),
        gender: "boy".to_string(),
        last_name: "Smith".to_string(),
        numbers: Some("11".to_string()),
        components: Some("expression".to_string()),
        max_results: Some("abc".to_string()),
    };
    let criteria = request.into_criteria(DEFAULT_MAX_RESULTS).unwrap();
    assert_eq!(criteria.max_results, 10);

    let search = CandidateSearch::new(create_fixture_lists()).with_progress_interval(1);
    let outcome = search.run(&criteria);
    let text = render_results(&outcome.results);

    assert!(text.contains("FOUND 1 NAME COMBINATIONS WITH MASTER NUMBERS"));
    assert!(text.contains("1. Amy Max Smith"));
}

#[test]
fn test_integration_json_shape() {
    let search = CandidateSearch::new(create_fixture_lists());
    let criteria = create_criteria("02-09-1990", Gender::Male)
        .with_components(vec![Component::Expression]);

    let outcome = search.run(&criteria);
    let json = serde_json::to_value(&outcome.results).unwrap();

    assert_eq!(json[0]["fullName"], "Amy Max Smith");
    assert_eq!(json[0]["profile"]["expression"], 11);
    assert_eq!(json[0]["masterNumbers"][0]["component"], "expression");
}
