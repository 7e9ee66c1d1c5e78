mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod ticker;
mod ui;

use anyhow::Result;
use app::{AppOptions, AppState};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use domain::{window_title, MAX_MINUTES, MIN_MINUTES};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A terminal Pomodoro timer: name a task, pick a duration, focus", long_about = None)]
struct Cli {
    /// Tick interval in milliseconds
    #[arg(long, default_value_t = ticker::DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(50..))]
    tick_ms: u64,

    /// Minutes pre-filled in the form
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(MIN_MINUTES..=MAX_MINUTES))]
    minutes: Option<u32>,

    /// Disable desktop notifications when a cycle finishes
    #[arg(long)]
    no_notify: bool,

    /// Write logs to this file (filter with POMO_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the session's cycles as JSON after exiting
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn app_options(&self) -> AppOptions {
        AppOptions {
            tick_interval: Duration::from_millis(self.tick_ms),
            notify: !self.no_notify,
            default_minutes: self.minutes,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }

    let mut app = AppState::new(cli.app_options());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Never leave the trigger armed past the session
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        SetTitle(domain::APP_TITLE)
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }

    if cli.summary {
        println!("{}", app.summary_json()?);
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let mut last_title = String::new();

    loop {
        // Title mirrors the countdown while a cycle runs
        let title = window_title(&app.tracker);
        if title != last_title {
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            last_title = title;
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input, but no longer than until the next tick is due
        if event::poll(app.ticker.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.poll_ticker(Instant::now());
    }
}
