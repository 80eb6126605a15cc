// algoviz: step-by-step sorting and searching in the terminal

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algoviz::algorithm::{AlgorithmKind, Catalog, Category};
use algoviz::constants::DEFAULT_PLAY_INTERVAL_MS;
use algoviz::error::VizError;
use algoviz::player::console::ConsoleAdapter;
use algoviz::session::Session;
use algoviz::ui::App;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Step-by-step algorithm visualizer", long_about = None)]
struct Cli {
    /// Algorithm to select, e.g. `quick-sort` (see --list)
    #[arg(short, long, value_name = "ID")]
    algorithm: Option<String>,

    /// Comma-separated integers to use instead of the sample data
    #[arg(short, long, value_name = "VALUES", allow_hyphen_values = true)]
    input: Option<String>,

    /// Value to look for (search algorithms)
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// Print the algorithm catalog and exit
    #[arg(long)]
    list: bool,

    /// Play the steps to stdout instead of starting the TUI
    #[arg(long)]
    print: bool,

    /// Write the step sequence as JSON
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Auto-play interval in the TUI
    #[arg(long, default_value_t = DEFAULT_PLAY_INTERVAL_MS)]
    play_interval_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG, default `warn`)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn is_headless(&self) -> bool {
        self.list || self.print || self.export.is_some()
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref(), cli.is_headless())?;

    if cli.list {
        print_catalog(&Catalog::builtin(), &mut io::stdout().lock())?;
        return Ok(());
    }

    let mut session = Session::new(Catalog::builtin());
    select_from_cli(&mut session, &cli)?;

    if cli.is_headless() {
        if let Some(path) = &cli.export {
            export_sequence(&session, path)?;
        }
        if cli.print {
            let mut adapter = ConsoleAdapter::new(io::stdout().lock()).with_data(true);
            session.on_start(&mut adapter)?;
            adapter.into_inner().flush()?;
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, Duration::from_millis(cli.play_interval_ms));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Log to the given file, to stderr in headless runs, and nowhere while the
/// TUI owns the terminal
fn init_logging(log_file: Option<&Path>, headless: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

/// Apply `--algorithm`, `--input` and `--target`.
///
/// Headless runs fall back to bubble sort; the TUI starts with nothing
/// selected unless something was asked for.
fn select_from_cli(session: &mut Session, cli: &Cli) -> Result<(), VizError> {
    let kind = match &cli.algorithm {
        Some(id) => Some(id.parse::<AlgorithmKind>()?),
        None if cli.is_headless() || cli.input.is_some() || cli.target.is_some() => {
            Some(AlgorithmKind::BubbleSort)
        }
        None => None,
    };
    let Some(kind) = kind else {
        return Ok(());
    };

    let info = session.catalog().select(kind.id())?;
    let input = match &cli.input {
        Some(raw) => parse_values(raw)?,
        None => info.sample_input.clone(),
    };
    let target = cli.target.or(info.sample_target);
    session.select_with_input(kind, input, target)?;
    Ok(())
}

/// Parse `"5, 3,-1"` into integers
fn parse_values(raw: &str) -> Result<Vec<i64>, VizError> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value.parse::<i64>().map_err(|_| VizError::InvalidNumber {
                value: value.to_string(),
            })
        })
        .collect()
}

fn print_catalog(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    for category in Category::ALL {
        let mut entries = catalog.by_category(category).peekable();
        if entries.peek().is_none() {
            continue;
        }
        writeln!(out, "{}", category.label())?;
        for info in entries {
            writeln!(
                out,
                "  {:<20} {:<28} time {:<12} space {}",
                info.kind.id(),
                info.name,
                info.time_complexity,
                info.space_complexity
            )?;
        }
    }
    Ok(())
}

fn export_sequence(session: &Session, path: &Path) -> CliResult<()> {
    let Some(selection) = session.current() else {
        return Ok(());
    };
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, selection.sequence().as_ref())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::info!(path = %path.display(), steps = selection.player().len(), "exported steps");
    Ok(())
}
