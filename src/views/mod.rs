//! Dashboard views: one variant per named view, each carrying only the
//! aggregates it renders.

mod timeline;

pub use timeline::{
    format_launch_date, FilterOptions, OutcomeBadge, TimelineEntry, TimelineFilter,
};

use crate::analytics::{
    mission_points, orbit_summary, rocket_statistics, CategoryBreakdown, CategoryEntry,
    CategoryField, DeliveredPayload, LinearTrend, MissionPoint, OrbitSummary, OverviewDisplay,
    OverviewStats, RocketStats, TimeSeries, YearlyAggregate,
};
use crate::dataset::LaunchDataset;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Overview,
    Orbital,
    Mission,
    Payload,
    Vehicles,
    Timeline,
}

impl ViewKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Overview,
            Self::Orbital,
            Self::Mission,
            Self::Payload,
            Self::Vehicles,
            Self::Timeline,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Orbital => "Orbital Analysis",
            Self::Mission => "Mission Analysis",
            Self::Payload => "Payload Analysis",
            Self::Vehicles => "Launch Vehicles",
            Self::Timeline => "Launch Timeline",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub stats: OverviewDisplay,
    pub launch_sites: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrbitalView {
    pub orbits: Vec<OrbitSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissionView {
    pub missions: Vec<MissionPoint>,
    pub rockets: Vec<CategoryEntry>,
    pub launch_sites: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayloadView {
    pub yearly: Vec<YearlyAggregate>,
    pub undated: usize,
    pub delivered: DeliveredPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<LinearTrend>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehiclesView {
    pub rockets: Vec<RocketStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineView {
    pub options: FilterOptions,
    pub total_matches: usize,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardView {
    Overview(OverviewView),
    Orbital(OrbitalView),
    Mission(MissionView),
    Payload(PayloadView),
    Vehicles(VehiclesView),
    Timeline(TimelineView),
}

impl DashboardView {
    /// Builds `kind` over the whole dataset; the timeline is unfiltered.
    pub fn build(kind: ViewKind, dataset: &LaunchDataset) -> Self {
        let records = dataset.records();
        match kind {
            ViewKind::Overview => Self::Overview(OverviewView {
                stats: OverviewStats::compute(records).display(),
                launch_sites: breakdown_entries(dataset, CategoryField::LaunchSite),
            }),
            ViewKind::Orbital => Self::Orbital(OrbitalView {
                orbits: orbit_summary(records),
            }),
            ViewKind::Mission => Self::Mission(MissionView {
                missions: mission_points(records),
                rockets: breakdown_entries(dataset, CategoryField::Rocket),
                launch_sites: breakdown_entries(dataset, CategoryField::LaunchSite),
            }),
            ViewKind::Payload => {
                let series = TimeSeries::by_year(records);
                if series.undated > 0 {
                    warn!(
                        undated = series.undated,
                        "launches without a parseable date left out of the yearly series"
                    );
                }
                let trend = series.payload_trend();
                Self::Payload(PayloadView {
                    yearly: series.points,
                    undated: series.undated,
                    delivered: DeliveredPayload::compute(records),
                    trend,
                })
            }
            ViewKind::Vehicles => Self::Vehicles(VehiclesView {
                rockets: rocket_statistics(records),
            }),
            ViewKind::Timeline => Self::timeline(dataset, &TimelineFilter::default(), None),
        }
    }

    /// Timeline restricted by `filter`, optionally truncated to `limit` entries.
    pub fn timeline(
        dataset: &LaunchDataset,
        filter: &TimelineFilter,
        limit: Option<usize>,
    ) -> Self {
        let matched = filter.apply(dataset.records());
        let total_matches = matched.len();
        let entries = matched
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(TimelineEntry::from_record)
            .collect();

        Self::Timeline(TimelineView {
            options: FilterOptions::collect(dataset.records()),
            total_matches,
            entries,
        })
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Overview(_) => ViewKind::Overview,
            Self::Orbital(_) => ViewKind::Orbital,
            Self::Mission(_) => ViewKind::Mission,
            Self::Payload(_) => ViewKind::Payload,
            Self::Vehicles(_) => ViewKind::Vehicles,
            Self::Timeline(_) => ViewKind::Timeline,
        }
    }
}

fn breakdown_entries(dataset: &LaunchDataset, field: CategoryField) -> Vec<CategoryEntry> {
    CategoryBreakdown::by_field(dataset.records(), field)
        .entries()
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_builds_its_own_variant() {
        let dataset = LaunchDataset::bundled().expect("bundled dataset parses");
        for kind in ViewKind::ordered() {
            assert_eq!(DashboardView::build(kind, &dataset).kind(), kind);
        }
    }

    #[test]
    fn view_titles_match_dashboard_sections() {
        let titles: Vec<&str> = ViewKind::ordered().into_iter().map(ViewKind::label).collect();
        assert_eq!(
            titles,
            vec![
                "Overview",
                "Orbital Analysis",
                "Mission Analysis",
                "Payload Analysis",
                "Launch Vehicles",
                "Launch Timeline",
            ]
        );
    }

    #[test]
    fn views_serialize_with_a_view_tag() {
        let dataset = LaunchDataset::bundled().expect("bundled dataset parses");
        let json = serde_json::to_value(DashboardView::build(ViewKind::Orbital, &dataset))
            .expect("view serializes");
        assert_eq!(json["view"], "orbital");
        assert!(json["orbits"].is_array());
    }

    #[test]
    fn timeline_limit_keeps_total_match_count() {
        let dataset = LaunchDataset::bundled().expect("bundled dataset parses");
        let DashboardView::Timeline(view) =
            DashboardView::timeline(&dataset, &TimelineFilter::default(), Some(3))
        else {
            panic!("expected timeline view");
        };
        assert_eq!(view.entries.len(), 3);
        assert_eq!(view.total_matches, dataset.len());
    }
}
