// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BirthDate, Component, ComponentMatch, Gender, MasterNumber, NameCandidate, NumerologyProfile, SearchResult};
pub use requests::{SearchCriteria, SearchRequest, DEFAULT_MAX_RESULTS, parse_max_results, parse_target_components, parse_target_numbers};
pub use responses::SearchResponse;
