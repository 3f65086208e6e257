use crate::render::{self, OutputFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};
use launch_analytics::analytics::{BreakdownOrder, CategoryField};
use launch_analytics::config::AppConfig;
use launch_analytics::dataset::LaunchDataset;
use launch_analytics::error::AppError;
use launch_analytics::export::ExportTable;
use launch_analytics::telemetry;
use launch_analytics::views::{TimelineFilter, ViewKind};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "launch-analytics",
    about = "Explore launch-vehicle statistics from the command line",
    version
)]
struct Cli {
    /// Read launches from this JSON file instead of the configured dataset
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    /// Emit JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headline statistics and launch-site counts (default command)
    Overview,
    /// Launch and success counts grouped by a categorical field
    Breakdown(BreakdownArgs),
    /// Launch activity aggregated per year
    Series,
    /// Least-squares trend of successful payload mass per year
    Trend,
    /// Payload delivered to orbit by vehicle family
    Payload,
    /// Launches, payload and success rate per rocket
    Vehicles,
    /// Searchable, filterable launch timeline
    Timeline(TimelineArgs),
    /// Emit a complete dashboard view as JSON (titled in text mode)
    View {
        #[arg(value_enum)]
        kind: ViewArg,
    },
    /// Export an aggregate table as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct BreakdownArgs {
    /// Field to group launches by
    #[arg(long, value_enum, default_value_t = BreakdownField::Rocket)]
    by: BreakdownField,
    /// Ordering of the resulting categories
    #[arg(long, value_enum, default_value_t = SortArg::FirstSeen)]
    sort: SortArg,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TimelineArgs {
    /// Case-insensitive text matched against payload, mission and rocket
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only launches from this year
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Only launches of this rocket ("Unspecified" selects missing values)
    #[arg(long)]
    pub(crate) rocket: Option<String>,
    /// Only launches to this orbit
    #[arg(long)]
    pub(crate) orbit: Option<String>,
    /// Only launches with this outcome
    #[arg(long)]
    pub(crate) outcome: Option<String>,
    /// Show at most this many launches
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

impl TimelineArgs {
    pub(crate) fn filter(&self) -> TimelineFilter {
        TimelineFilter {
            search: self.search.clone(),
            year: self.year,
            rocket: self.rocket.clone(),
            orbit: self.orbit.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(value_enum)]
    table: TableArg,
    /// Destination file (defaults to stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BreakdownField {
    Rocket,
    Site,
    Orbit,
    Outcome,
}

impl From<BreakdownField> for CategoryField {
    fn from(value: BreakdownField) -> Self {
        match value {
            BreakdownField::Rocket => CategoryField::Rocket,
            BreakdownField::Site => CategoryField::LaunchSite,
            BreakdownField::Orbit => CategoryField::Orbit,
            BreakdownField::Outcome => CategoryField::Outcome,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    FirstSeen,
    Name,
    Total,
    Success,
    Rate,
}

impl From<SortArg> for BreakdownOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::FirstSeen => BreakdownOrder::FirstSeen,
            SortArg::Name => BreakdownOrder::Name,
            SortArg::Total => BreakdownOrder::Total,
            SortArg::Success => BreakdownOrder::Success,
            SortArg::Rate => BreakdownOrder::SuccessRate,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Overview,
    Orbital,
    Mission,
    Payload,
    Vehicles,
    Timeline,
}

impl From<ViewArg> for ViewKind {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Overview => ViewKind::Overview,
            ViewArg::Orbital => ViewKind::Orbital,
            ViewArg::Mission => ViewKind::Mission,
            ViewArg::Payload => ViewKind::Payload,
            ViewArg::Vehicles => ViewKind::Vehicles,
            ViewArg::Timeline => ViewKind::Timeline,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableArg {
    Yearly,
    Missions,
}

impl From<TableArg> for ExportTable {
    fn from(value: TableArg) -> Self {
        match value {
            TableArg::Yearly => ExportTable::Yearly,
            TableArg::Missions => ExportTable::Missions,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let config = config.with_dataset_override(cli.dataset)?;

    let dataset = LaunchDataset::from_config(&config.dataset)?;
    info!(
        ?config.environment,
        records = dataset.len(),
        bundled = config.dataset.path.is_none(),
        "launch dataset ready"
    );

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command.unwrap_or(Command::Overview) {
        Command::Overview => render::overview(&dataset, format),
        Command::Breakdown(args) => {
            render::breakdown(&dataset, args.by.into(), args.sort.into(), format)
        }
        Command::Series => render::series(&dataset, format),
        Command::Trend => render::trend(&dataset, format),
        Command::Payload => render::payload(&dataset, format),
        Command::Vehicles => render::vehicles(&dataset, format),
        Command::Timeline(args) => render::timeline(&dataset, &args, format),
        Command::View { kind } => render::view(&dataset, kind.into(), format),
        Command::Export(args) => render::export(&dataset, args.table.into(), args.output),
    }
}
