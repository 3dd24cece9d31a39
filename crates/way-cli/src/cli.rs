//! Command-line interface definition for the `way` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use way_core::enums::{ItemStatus, RoadmapType, TimeHorizon};

/// Top-level CLI parser for the `way` binary.
#[derive(Debug, Parser)]
#[command(name = "way", version, about = "Waypoint - roadmap planning and visualization")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json (pretty) or raw (compact)
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List all roadmaps of a project.
    List(ListArgs),
    /// Show a roadmap with its full item collection.
    Show(RoadmapArgs),
    /// Project a roadmap into one of the planning views.
    View(ViewArgs),
    /// Aggregate category/priority/status/quarter distributions.
    Analytics(RoadmapArgs),
    /// Synthesize mock wireframe screens for planning visualization.
    Wireframes(RoadmapArgs),
    /// Export a roadmap to a multi-sheet xlsx workbook.
    Export(ExportArgs),
    /// Ask the external service to generate a roadmap.
    Generate(GenerateArgs),
    /// Change one item's status (server-confirmed).
    SetStatus(SetStatusArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Project id (falls back to `general.default_project` in config).
    #[arg(short, long)]
    pub project: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RoadmapArgs {
    /// Roadmap id.
    pub roadmap_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ViewArgs {
    /// Roadmap id.
    pub roadmap_id: String,

    /// Which projection to derive.
    #[arg(short = 'V', long = "as", value_enum, default_value = "timeline")]
    pub view: ViewKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ViewKind {
    Timeline,
    Kanban,
    List,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Roadmap id.
    pub roadmap_id: String,

    /// Output directory (overrides `export.output_dir` in config).
    #[arg(short, long)]
    pub out: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Project id (falls back to `general.default_project` in config).
    #[arg(short, long)]
    pub project: Option<String>,

    /// Roadmap name.
    pub name: String,

    /// Roadmap description.
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Roadmap type / allocation strategy family.
    #[arg(short = 't', long = "type", value_enum, default_value = "balanced")]
    pub roadmap_type: RoadmapTypeArg,

    /// Planning horizon.
    #[arg(long, value_enum, default_value = "year")]
    pub horizon: TimeHorizonArg,

    /// Custom strategic percentage (custom type only).
    #[arg(long)]
    pub strategic: Option<u32>,

    /// Custom customer-driven percentage (custom type only).
    #[arg(long)]
    pub customer_driven: Option<u32>,

    /// Custom maintenance percentage (custom type only).
    #[arg(long)]
    pub maintenance: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct SetStatusArgs {
    /// Roadmap id.
    pub roadmap_id: String,

    /// Item id.
    pub item_id: String,

    /// New status.
    #[arg(value_enum)]
    pub status: ItemStatusArg,
}

// Clap needs ValueEnum on the argument types; the core enums stay free of
// CLI concerns, so thin mirrors convert at the boundary.

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RoadmapTypeArg {
    StrategicOnly,
    CustomerOnly,
    Balanced,
    Custom,
}

impl From<RoadmapTypeArg> for RoadmapType {
    fn from(arg: RoadmapTypeArg) -> Self {
        match arg {
            RoadmapTypeArg::StrategicOnly => Self::StrategicOnly,
            RoadmapTypeArg::CustomerOnly => Self::CustomerOnly,
            RoadmapTypeArg::Balanced => Self::Balanced,
            RoadmapTypeArg::Custom => Self::Custom,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TimeHorizonArg {
    Quarter,
    HalfYear,
    Year,
}

impl From<TimeHorizonArg> for TimeHorizon {
    fn from(arg: TimeHorizonArg) -> Self {
        match arg {
            TimeHorizonArg::Quarter => Self::Quarter,
            TimeHorizonArg::HalfYear => Self::HalfYear,
            TimeHorizonArg::Year => Self::Year,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ItemStatusArg {
    Proposed,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl From<ItemStatusArg> for ItemStatus {
    fn from(arg: ItemStatusArg) -> Self {
        match arg {
            ItemStatusArg::Proposed => Self::Proposed,
            ItemStatusArg::Approved => Self::Approved,
            ItemStatusArg::InProgress => Self::InProgress,
            ItemStatusArg::Completed => Self::Completed,
            ItemStatusArg::Cancelled => Self::Cancelled,
        }
    }
}
