use launch_analytics::analytics::{
    orbit_summary, percentage, BreakdownOrder, CategoryBreakdown, CategoryField, LinearTrend,
    OverviewStats, TimeSeries,
};
use launch_analytics::dataset::{LaunchDataset, LaunchRecord};

fn launch(mass: Option<f64>, outcome: &str, rocket: &str) -> LaunchRecord {
    LaunchRecord {
        launch_no: "1".to_string(),
        date_time: "2020-01-01 | 00:00".to_string(),
        payload_mass: mass,
        launch_outcome: Some(outcome.to_string()),
        rocket: Some(rocket.to_string()),
        ..LaunchRecord::default()
    }
}

fn three_launches() -> Vec<LaunchRecord> {
    vec![
        launch(Some(100.0), "Success", "A"),
        launch(Some(200.0), "Failure", "A"),
        launch(Some(300.0), "Success", "B"),
    ]
}

fn bundled() -> LaunchDataset {
    LaunchDataset::bundled().expect("bundled dataset parses")
}

#[test]
fn three_launch_scenario_reports_expected_overview_and_breakdown() {
    let records = three_launches();
    let stats = OverviewStats::compute(&records).display();
    assert_eq!(stats.total_launches, 3);
    assert_eq!(stats.success_rate, "66.7");
    assert_eq!(stats.average_payload, "200.0");
    assert_eq!(stats.total_payload, "600.0");
    assert_eq!(stats.heaviest_payload, "300.0");
    assert_eq!(stats.payload_std_dev, "81.6");

    let rockets = CategoryBreakdown::by_field(&records, CategoryField::Rocket);
    let a = rockets.get("A").expect("rocket A present");
    assert_eq!((a.total, a.success), (2, 1));
    let b = rockets.get("B").expect("rocket B present");
    assert_eq!((b.total, b.success), (1, 1));
}

#[test]
fn missing_or_malformed_mass_contributes_zero() {
    let dataset = LaunchDataset::from_json_str(
        r#"[
            {"launchNo": "1", "dateTime": "2020-01-01 | 00:00", "payloadMass": 300, "launchOutcome": "Success"},
            {"launchNo": "2", "dateTime": "2020-02-01 | 00:00", "launchOutcome": "Success"},
            {"launchNo": "3", "dateTime": "2020-03-01 | 00:00", "payloadMass": "unknown", "launchOutcome": "Failure"}
        ]"#,
    )
    .expect("dataset parses");

    let stats = OverviewStats::compute(dataset.records());
    assert_eq!(stats.total_launches, 3);
    assert_eq!(stats.total_payload, 300.0);
    assert_eq!(stats.average_payload, 100.0);

    let series = TimeSeries::by_year(dataset.records());
    assert_eq!(series.points[0].total_payload, 300.0);
    assert_eq!(series.points[0].launch_count, 3);
}

#[test]
fn bundled_dataset_overview() {
    let dataset = bundled();
    let stats = OverviewStats::compute(dataset.records()).display();
    assert_eq!(stats.total_launches, 23);
    assert_eq!(stats.success_rate, "73.9");
    assert_eq!(stats.heaviest_payload, "5796.0");
    assert_eq!(stats.total_payload, "40003.3");
}

#[test]
fn success_rate_stays_within_bounds() {
    let dataset = bundled();
    let records = dataset.records();
    for window in 1..=records.len() {
        for slice in records.chunks(window) {
            let rate = OverviewStats::compute(slice).success_rate;
            assert!((0.0..=100.0).contains(&rate), "rate {rate} out of bounds");
        }
    }
}

#[test]
fn mean_and_population_std_dev_are_consistent() {
    let dataset = bundled();
    let masses: Vec<f64> = dataset
        .records()
        .iter()
        .map(LaunchRecord::payload_mass_or_zero)
        .collect();
    let n = masses.len() as f64;
    let mean = masses.iter().sum::<f64>() / n;
    let std_dev = (masses.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / n).sqrt();

    let stats = OverviewStats::compute(dataset.records());
    assert!((stats.average_payload - mean).abs() < 1e-9);
    assert!((stats.payload_std_dev - std_dev).abs() < 1e-9);
    assert_eq!(stats.display().average_payload, format!("{mean:.1}"));
}

#[test]
fn category_totals_cover_every_record() {
    let dataset = bundled();
    for field in CategoryField::ordered() {
        let breakdown = CategoryBreakdown::by_field(dataset.records(), field);
        let total: usize = breakdown.entries().iter().map(|entry| entry.total).sum();
        assert_eq!(total, dataset.len(), "{} totals", field.label());
        assert!(breakdown
            .entries()
            .iter()
            .all(|entry| entry.success <= entry.total));
    }
}

#[test]
fn rocket_breakdown_follows_first_occurrence_and_can_be_resorted() {
    let dataset = bundled();
    let rockets = CategoryBreakdown::by_field(dataset.records(), CategoryField::Rocket);
    let names: Vec<&str> = rockets
        .entries()
        .iter()
        .map(|entry| entry.category.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["PSLV", "GSLV", "GSLV Mk III", "LVM3", "SSLV", "Test Vehicle"]
    );

    let pslv = rockets.get("PSLV").expect("PSLV present");
    assert_eq!((pslv.total, pslv.success), (11, 8));

    let by_name = rockets.sorted(BreakdownOrder::Name);
    assert_eq!(by_name.entries()[0].category, "GSLV");
}

#[test]
fn orbit_summary_includes_unspecified_bucket() {
    let dataset = bundled();
    let orbits = orbit_summary(dataset.records());
    let unspecified = orbits
        .iter()
        .find(|orbit| orbit.orbit == "Unspecified")
        .expect("record without orbit is bucketed");
    assert_eq!(unspecified.count, 1);
    assert_eq!(unspecified.success_rate, 100.0);

    let sso = orbits
        .iter()
        .find(|orbit| orbit.orbit == "SSO")
        .expect("SSO present");
    assert_eq!(sso.count, 8);
    assert_eq!(sso.success_rate, percentage(6, 8));
}

#[test]
fn yearly_series_is_strictly_ascending() {
    let dataset = bundled();
    let series = TimeSeries::by_year(dataset.records());
    let years: Vec<i32> = series.points.iter().map(|point| point.year).collect();
    assert_eq!(
        years,
        vec![1993, 1997, 2010, 2016, 2017, 2018, 2019, 2021, 2022, 2023, 2024]
    );
    assert!(series.points.windows(2).all(|pair| pair[0].year < pair[1].year));
    assert_eq!(series.undated, 0);

    let launches: usize = series.points.iter().map(|point| point.launch_count).sum();
    assert_eq!(launches, dataset.len());
}

#[test]
fn payload_trend_is_deterministic() {
    let dataset = bundled();
    let series = TimeSeries::by_year(dataset.records());
    let first = series.payload_trend().expect("enough years for a trend");
    let second = TimeSeries::by_year(dataset.records())
        .payload_trend()
        .expect("enough years for a trend");
    assert_eq!(first.slope.to_bits(), second.slope.to_bits());
    assert_eq!(first.intercept.to_bits(), second.intercept.to_bits());
    assert_eq!(LinearTrend::fit(&series.successful_payloads()), Some(first));
}
