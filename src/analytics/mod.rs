//! Pure aggregations over a launch collection.
//!
//! Every function here is deterministic and reads only its input slice.
//! Ratios over empty groups are reported as `0.0` rather than `NaN`.

mod breakdown;
mod mission;
mod overview;
mod payload;
mod timeseries;
mod trend;
mod vehicles;

pub use breakdown::{
    orbit_summary, BreakdownOrder, CategoryBreakdown, CategoryEntry, CategoryField, OrbitSummary,
};
pub use mission::{mission_points, MissionPoint};
pub use overview::{OverviewDisplay, OverviewStats};
pub use payload::{format_mass, DeliveredPayload, FamilyPayload, VehicleFamily};
pub use timeseries::{TimeSeries, YearlyAggregate};
pub use trend::LinearTrend;
pub use vehicles::{rocket_statistics, RocketStats};

/// `part / whole * 100`, or `0.0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
