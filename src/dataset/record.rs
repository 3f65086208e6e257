use super::parser::{self, empty_string_as_none, lenient_identifier, lenient_mass, lenient_text};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Label used wherever a categorical field is missing from a record.
pub const UNSPECIFIED: &str = "Unspecified";

/// Separator between the date and time halves of [`LaunchRecord::date_time`].
pub const DATE_TIME_SEPARATOR: &str = " | ";

/// A single launch event as it appears in the bundled dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    #[serde(default, deserialize_with = "lenient_identifier")]
    pub launch_no: String,
    #[serde(default, deserialize_with = "lenient_identifier")]
    pub flight_no: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_time: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub rocket: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub configuration: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub payload: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub orbit: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub launch_outcome: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub launch_site: Option<String>,
    #[serde(default, deserialize_with = "lenient_mass")]
    pub payload_mass: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub payload_mass_unit: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub mission_description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

/// Coarse classification of [`LaunchRecord::launch_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
    Other,
}

impl Outcome {
    /// Only the exact strings `"Success"` and `"Failure"` are recognised;
    /// everything else, including a missing value, is [`Outcome::Other`].
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some("Success") => Self::Success,
            Some("Failure") => Self::Failure,
            _ => Self::Other,
        }
    }
}

impl LaunchRecord {
    pub fn outcome(&self) -> Outcome {
        Outcome::classify(self.launch_outcome.as_deref())
    }

    pub fn is_success(&self) -> bool {
        self.outcome() == Outcome::Success
    }

    /// Payload mass with missing or non-numeric values substituted by zero.
    pub fn payload_mass_or_zero(&self) -> f64 {
        self.payload_mass.unwrap_or(0.0)
    }

    pub fn rocket_label(&self) -> &str {
        self.rocket.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn orbit_label(&self) -> &str {
        self.orbit.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn site_label(&self) -> &str {
        self.launch_site.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn outcome_label(&self) -> &str {
        self.launch_outcome.as_deref().unwrap_or(UNSPECIFIED)
    }

    /// Leading date segment of the combined `"<date> | <time>"` string.
    pub fn date_part(&self) -> &str {
        self.date_time
            .split(DATE_TIME_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim()
    }

    pub fn time_part(&self) -> Option<&str> {
        self.date_time
            .split(DATE_TIME_SEPARATOR)
            .nth(1)
            .map(str::trim)
            .filter(|time| !time.is_empty())
    }

    pub fn launch_date(&self) -> Option<NaiveDate> {
        parser::parse_launch_date(self.date_part())
    }

    pub fn year(&self) -> Option<i32> {
        self.launch_date().map(|date| date.year())
    }

    /// Launch number as an integer, when it is numeric.
    pub fn launch_number(&self) -> Option<u32> {
        self.launch_no.trim().parse().ok()
    }
}
