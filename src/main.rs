mod app;
mod calendar;
mod clock;
mod config;
mod greeting;
mod holidays;
mod input;
mod locale;
mod preferences;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::App;
use calendar::MonthCursor;
use clock::{Clock, SystemClock};
use config::Config;
use preferences::{FilePreferences, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "darkwall-dash")]
#[command(about = "TUI dashboard with clock, greeting and holiday calendar")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/darkwall-dash/config.toml")]
    config: String,

    /// Month to show first (YYYY-MM)
    #[arg(long)]
    month: Option<MonthCursor>,

    /// Theme for this session only (light or dark)
    #[arg(long, value_parser = parse_theme)]
    theme: Option<ThemeMode>,

    /// Print the dashboard once to stdout and exit
    #[arg(long)]
    once: bool,

    /// Write logs to this file while the TUI is running
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_theme(s: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(s).ok_or_else(|| format!("unknown theme `{}` (expected light or dark)", s))
}

/// Logs go to stderr in `--once` mode, to `--log-file` otherwise. Without a
/// log file the TUI owns the terminal and logging stays off.
fn init_logging(log_file: Option<&Path>, once: bool) -> Result<()> {
    let default_filter = "darkwall_dash=info";
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else if once {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.once)?;

    // Load config
    let config = Config::load(&cli.config)?;
    let holidays = config.holiday_table()?;
    tracing::info!(
        "Loaded {} holidays across {} years",
        holidays.len(),
        holidays.year_count()
    );
    if holidays.is_empty() {
        tracing::warn!("Holiday table is empty; no days will be marked");
    }

    if cli.once {
        let clock = SystemClock;
        let now = clock.now();
        let cursor = cli.month.unwrap_or_else(|| MonthCursor::containing(now.date()));
        let grid = calendar::render(cursor, &holidays, now.date());
        let greeting = greeting::resolve_at(now, &holidays);
        print!(
            "{}",
            ui::plain::format_dashboard(now, &greeting, &grid, &holidays)
        );
        return Ok(());
    }

    let clock_interval = config.clock_interval();
    let greeting_interval = config.greeting_interval();
    let prefs = FilePreferences::open(config.preferences_path());

    // Create app state
    let mut app = App::new(
        config,
        holidays,
        Box::new(SystemClock),
        Box::new(prefs),
        cli.month,
        cli.theme,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app, clock_interval, greeting_interval).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Forward terminal events from a blocking reader thread into the event loop
fn spawn_input_reader(tx: mpsc::UnboundedSender<Event>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // Receiver dropped
                }
            }
            Err(e) => {
                tracing::warn!("Input reader error: {}", e);
                break;
            }
        }
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    clock_interval: Duration,
    greeting_interval: Duration,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _reader = spawn_input_reader(tx);

    let mut clock_tick = tokio::time::interval(clock_interval);
    clock_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut greeting_tick = tokio::time::interval(greeting_interval);
    greeting_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            _ = clock_tick.tick() => app.tick_clock(),
            _ = greeting_tick.tick() => app.refresh_greeting(),
            event = rx.recv() => {
                let Some(event) = event else {
                    return Ok(());
                };
                if let Some(action) = input::map_event(&event, app.popup().is_some()) {
                    if !input::apply(app, action) {
                        return Ok(());
                    }
                }
            }
        }
    }
}
