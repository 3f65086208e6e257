use crate::cli::TimelineArgs;
use launch_analytics::analytics::{
    rocket_statistics, BreakdownOrder, CategoryBreakdown, CategoryField, DeliveredPayload,
    OverviewStats, TimeSeries,
};
use launch_analytics::dataset::LaunchDataset;
use launch_analytics::error::AppError;
use launch_analytics::export::{export_table, export_table_to_path, ExportTable};
use launch_analytics::views::{DashboardView, ViewKind};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn overview(dataset: &LaunchDataset, format: OutputFormat) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        return print_json(&DashboardView::build(ViewKind::Overview, dataset));
    }

    let stats = OverviewStats::compute(dataset.records()).display();
    let sites = CategoryBreakdown::by_field(dataset.records(), CategoryField::LaunchSite);

    println!("Launch statistics");
    println!(
        "- Total launches: {} | Success rate: {}%",
        stats.total_launches, stats.success_rate
    );
    println!("\nPayload analysis");
    println!("- Average payload: {} kg", stats.average_payload);
    println!("- Payload std dev: {} kg", stats.payload_std_dev);
    println!("- Heaviest payload: {} kg", stats.heaviest_payload);
    println!("- Total payload: {} kg", stats.total_payload);

    println!("\nLaunch sites");
    for site in sites.entries() {
        println!("- {}: {} launches", site.category, site.total);
    }

    Ok(())
}

pub(crate) fn breakdown(
    dataset: &LaunchDataset,
    field: CategoryField,
    order: BreakdownOrder,
    format: OutputFormat,
) -> Result<(), AppError> {
    let breakdown = CategoryBreakdown::by_field(dataset.records(), field).sorted(order);

    if format == OutputFormat::Json {
        return print_json(&breakdown);
    }

    println!("{} performance", field.label());
    for entry in breakdown.entries() {
        println!(
            "- {}: {:.1}% ({}/{})",
            entry.category,
            entry.success_rate(),
            entry.success,
            entry.total
        );
    }

    Ok(())
}

pub(crate) fn series(dataset: &LaunchDataset, format: OutputFormat) -> Result<(), AppError> {
    let series = TimeSeries::by_year(dataset.records());

    if format == OutputFormat::Json {
        return print_json(&series);
    }

    println!("Launches per year");
    for point in &series.points {
        println!(
            "- {}: {} launches, {} successful ({:.1}%), {:.1} kg payload",
            point.year,
            point.launch_count,
            point.success_count,
            point.success_rate,
            point.total_payload
        );
    }

    if series.undated > 0 {
        println!(
            "\n{} launch(es) without a parseable date were left out",
            series.undated
        );
    }

    Ok(())
}

pub(crate) fn trend(dataset: &LaunchDataset, format: OutputFormat) -> Result<(), AppError> {
    let series = TimeSeries::by_year(dataset.records());
    let trend = series.payload_trend();

    if format == OutputFormat::Json {
        return print_json(&trend);
    }

    let Some(trend) = trend else {
        println!("Trend unavailable: at least two dated years of launches are required");
        return Ok(());
    };

    println!("Successful payload trend (least squares over {} years)", series.points.len());
    println!("- Slope: {:.1} kg per year step", trend.slope);
    println!("- Intercept: {:.1} kg", trend.intercept);
    println!(
        "- Projection for the next step: {:.1} kg",
        trend.predict(series.points.len() as f64)
    );

    Ok(())
}

pub(crate) fn payload(dataset: &LaunchDataset, format: OutputFormat) -> Result<(), AppError> {
    let delivered = DeliveredPayload::compute(dataset.records());

    if format == OutputFormat::Json {
        return print_json(&delivered);
    }

    println!("Total payload delivered to orbit: {}", delivered.total_formatted);
    for family in &delivered.families {
        println!("- {}: {}", family.label, family.formatted);
    }

    Ok(())
}

pub(crate) fn vehicles(dataset: &LaunchDataset, format: OutputFormat) -> Result<(), AppError> {
    let rockets = rocket_statistics(dataset.records());

    if format == OutputFormat::Json {
        return print_json(&rockets);
    }

    println!("Launch vehicles");
    for rocket in &rockets {
        println!(
            "- {}: {} launches | {:.1} kg payload | success rate {:.1}%",
            rocket.name, rocket.launches, rocket.total_payload, rocket.success_rate
        );
    }

    Ok(())
}

pub(crate) fn timeline(
    dataset: &LaunchDataset,
    args: &TimelineArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let view = DashboardView::timeline(dataset, &args.filter(), args.limit);

    if format == OutputFormat::Json {
        return print_json(&view);
    }

    let DashboardView::Timeline(timeline) = view else {
        return Ok(());
    };

    println!(
        "Launch timeline ({} of {} launches match)",
        timeline.total_matches,
        dataset.len()
    );
    for entry in &timeline.entries {
        println!(
            "- #{} {} | {} | {} | {} -> {} | {}",
            entry.launch_no,
            entry.flight_no,
            entry.date,
            entry.rocket,
            entry.payload.as_deref().unwrap_or("Unnamed payload"),
            entry.orbit,
            entry.outcome
        );
        if let Some(description) = &entry.mission_description {
            println!("    {}", description);
        }
    }

    if timeline.entries.len() < timeline.total_matches {
        println!(
            "... {} more (raise --limit to see them)",
            timeline.total_matches - timeline.entries.len()
        );
    }

    Ok(())
}

pub(crate) fn view(
    dataset: &LaunchDataset,
    kind: ViewKind,
    format: OutputFormat,
) -> Result<(), AppError> {
    if format == OutputFormat::Text {
        println!("{}", kind.label());
    }
    print_json(&DashboardView::build(kind, dataset))
}

pub(crate) fn export(
    dataset: &LaunchDataset,
    table: ExportTable,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    match output {
        Some(path) => {
            export_table_to_path(table, dataset, path)?;
        }
        None => {
            let stdout = std::io::stdout();
            export_table(table, dataset, stdout.lock())?;
        }
    }
    Ok(())
}
