use crate::dataset::LaunchRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Search and filter state of the launch timeline. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineFilter {
    pub search: Option<String>,
    pub year: Option<i32>,
    pub rocket: Option<String>,
    pub orbit: Option<String>,
    pub outcome: Option<String>,
}

impl TimelineFilter {
    /// Free text matches payload, mission description or rocket,
    /// case-insensitively. Categorical filters compare against the same
    /// labels offered by [`FilterOptions`], so `"Unspecified"` selects
    /// records missing that field.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                [
                    record.payload.as_deref(),
                    record.mission_description.as_deref(),
                    record.rocket.as_deref(),
                ]
                .into_iter()
                .flatten()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
            }
        };

        matches_search
            && self.year.map_or(true, |year| record.year() == Some(year))
            && matches_label(self.rocket.as_deref(), record.rocket_label())
            && matches_label(self.orbit.as_deref(), record.orbit_label())
            && matches_label(self.outcome.as_deref(), record.outcome_label())
    }

    pub fn apply<'a>(&self, records: &'a [LaunchRecord]) -> Vec<&'a LaunchRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

fn matches_label(selected: Option<&str>, label: &str) -> bool {
    selected.map_or(true, |selected| selected == label)
}

/// Distinct values offered by the timeline's filter selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Newest first.
    pub years: Vec<i32>,
    pub rockets: Vec<String>,
    pub orbits: Vec<String>,
    pub outcomes: Vec<String>,
}

impl FilterOptions {
    pub fn collect(records: &[LaunchRecord]) -> Self {
        let years: BTreeSet<i32> = records.iter().filter_map(LaunchRecord::year).collect();
        Self {
            years: years.into_iter().rev().collect(),
            rockets: sorted_labels(records, LaunchRecord::rocket_label),
            orbits: sorted_labels(records, LaunchRecord::orbit_label),
            outcomes: sorted_labels(records, LaunchRecord::outcome_label),
        }
    }
}

fn sorted_labels<F>(records: &[LaunchRecord], label: F) -> Vec<String>
where
    F: Fn(&LaunchRecord) -> &str,
{
    let labels: BTreeSet<&str> = records.iter().map(label).collect();
    labels.into_iter().map(str::to_string).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeBadge {
    Success,
    Destructive,
    Warning,
    Secondary,
}

impl OutcomeBadge {
    pub fn for_outcome(outcome: Option<&str>) -> Self {
        match outcome.map(str::to_lowercase).as_deref() {
            Some("success") => Self::Success,
            Some("failure") => Self::Destructive,
            Some("partial success") => Self::Warning,
            _ => Self::Secondary,
        }
    }
}

/// `"September 24, 2025 | 10:00"`; the time is dropped when it is `00:00`.
/// Unparseable dates are shown verbatim.
pub fn format_launch_date(record: &LaunchRecord) -> String {
    let date = match record.launch_date() {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => record.date_part().to_string(),
    };

    match record.time_part() {
        Some(time) if time != "00:00" => format!("{date} | {time}"),
        _ => date,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub launch_no: String,
    pub flight_no: String,
    pub date: String,
    pub rocket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    pub orbit: String,
    pub outcome: String,
    pub badge: OutcomeBadge,
    pub launch_site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_mass_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TimelineEntry {
    pub fn from_record(record: &LaunchRecord) -> Self {
        Self {
            launch_no: record.launch_no.clone(),
            flight_no: record.flight_no.clone(),
            date: format_launch_date(record),
            rocket: record.rocket_label().to_string(),
            configuration: record.configuration.clone(),
            payload: record.payload.clone(),
            orbit: record.orbit_label().to_string(),
            outcome: record.outcome_label().to_string(),
            badge: OutcomeBadge::for_outcome(record.launch_outcome.as_deref()),
            launch_site: record.site_label().to_string(),
            payload_mass: record.payload_mass,
            payload_mass_unit: record.payload_mass_unit.clone(),
            mission_description: record.mission_description.clone(),
            notes: record.notes.clone(),
        }
    }
}
