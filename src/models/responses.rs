use serde::{Deserialize, Serialize};
use crate::models::domain::SearchResult;
use crate::models::requests::SearchCriteria;

/// Machine-readable report of a finished search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub criteria: SearchCriteria,
    pub results: Vec<SearchResult>,
    #[serde(rename = "combinationsChecked")]
    pub combinations_checked: usize,
    pub cancelled: bool,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
