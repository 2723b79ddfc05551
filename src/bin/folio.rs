use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rebase every asset path in a dataset and print the result as JSON.
    Project(ProjectArgs),
    /// Report whether each value would be treated as an asset path.
    Classify(ClassifyArgs),
    /// Lay out resume experience on a proportional timeline.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Input dataset JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Deployment base path (overrides FOLIO_BASE_PATH).
    #[arg(long)]
    base: Option<String>,

    /// Asset discovery strategy (overrides FOLIO_PROJECTION_MODE).
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Strings to classify.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input dataset JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Axis width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Date used for ongoing entries (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    today: Option<String>,

    /// Which experience list to lay out.
    #[arg(long, value_enum, default_value_t = TimelineSource::Resume)]
    source: TimelineSource,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Declared,
    Heuristic,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TimelineSource {
    Resume,
    About,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Project(args) => cmd_project(args),
        Command::Classify(args) => cmd_classify(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn load_dataset(path: &std::path::Path) -> anyhow::Result<folio::Dataset> {
    let dataset = folio::Dataset::from_path(path)?;
    dataset
        .validate()
        .with_context(|| format!("validate dataset '{}'", path.display()))?;
    Ok(dataset)
}

fn cmd_project(args: ProjectArgs) -> anyhow::Result<()> {
    let dataset = load_dataset(&args.in_path)?;

    let mut config = folio::SiteConfig::from_env();
    if let Some(base) = &args.base {
        config.base_path = folio::BasePath::new(base);
    }
    if let Some(mode) = args.mode {
        config.mode = match mode {
            ModeChoice::Declared => folio::ProjectionMode::Declared,
            ModeChoice::Heuristic => folio::ProjectionMode::Heuristic,
        };
    }

    let ctx = folio::DataContext::project(&dataset, &config)?;
    let projected = ctx.to_dataset();

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &projected)
                .with_context(|| "write projected dataset")?;
            w.flush()?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &projected)
                .with_context(|| "write projected dataset")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    for value in &args.values {
        let kind = if folio::is_asset_path(value) {
            "asset"
        } else {
            "text"
        };
        writeln!(w, "{kind}\t{value}")?;
    }
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let dataset = load_dataset(&args.in_path)?;

    let today = match &args.today {
        Some(raw) => chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("parse --today '{raw}'"))?,
        None => chrono::Local::now().date_naive(),
    };
    if !args.width.is_finite() || args.width <= 0.0 {
        anyhow::bail!("--width must be finite and > 0");
    }

    let entries = match args.source {
        TimelineSource::Resume => &dataset.resume.experience,
        TimelineSource::About => &dataset.about.experience,
    };
    let layout = folio::layout_timeline(entries, args.width, today);

    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    writeln!(w, "lanes: {}", layout.lanes)?;
    for bar in &layout.bars {
        writeln!(
            w,
            "{lane}\t{x:.1}\t{width:.1}\t{start}\t{end}{ongoing}\t{id}",
            lane = bar.lane,
            x = bar.x,
            width = bar.width,
            start = bar.start,
            end = bar.end,
            ongoing = if bar.ongoing { "+" } else { "" },
            id = bar.id,
        )?;
    }
    for (year, x) in layout.year_ticks() {
        writeln!(w, "tick\t{year}\t{x:.1}")?;
    }
    Ok(())
}
