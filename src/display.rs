//! Console rendering of search results.

use std::fmt;

use crate::models::{MasterNumber, SearchResult};

const RULE_WIDTH: usize = 60;
const MASTER_MARKER: &str = " ✅";

/// Numbered text report over a result list
pub struct ResultsReport<'a>(pub &'a [SearchResult]);

impl fmt::Display for ResultsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.0;
        if results.is_empty() {
            return writeln!(f, "No name combinations found with the specified master numbers.");
        }

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "\n{}", rule)?;
        writeln!(f, " FOUND {} NAME COMBINATIONS WITH MASTER NUMBERS", results.len())?;
        writeln!(f, "{}", rule)?;

        for (i, result) in results.iter().enumerate() {
            writeln!(f, "\n{}. {}", i + 1, result.full_name())?;
            for (component, value) in result.profile.components() {
                let marker = if MasterNumber::is_master(value) { MASTER_MARKER } else { "" };
                writeln!(f, "   {}: {}{}", component.label(), value, marker)?;
            }
        }

        Ok(())
    }
}

/// Render a result list as the numbered text report
pub fn render_results(results: &[SearchResult]) -> String {
    ResultsReport(results).to_string()
}
