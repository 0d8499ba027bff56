// ABOUTME: Main entry point for autopilot-onboard with TUI and CLI support
//
// Binary: autopilot-onboard
// Usage: autopilot-onboard [COMMAND]
// - No command: launches the onboarding wizard
// - validate: check identity details headlessly
// - config: show the effective configuration

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

mod cli;

use autopilot_onboard::app::{App, EventHandler};
use autopilot_onboard::audit::AuditLogger;
use autopilot_onboard::components::LayoutComponent;
use autopilot_onboard::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    match args.command {
        // CLI commands print to stdout, so they skip the file logger
        Some(cli::Commands::Validate(validate_args)) => {
            cli::validate::execute(validate_args, args.format)
        }
        Some(cli::Commands::Config(config_args)) => cli::config::execute(config_args, args.format),

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui(tui_args)) => launch_tui(tui_args).await,
        None => launch_tui(cli::TuiArgs::default()).await,
    }
}

async fn launch_tui(args: cli::TuiArgs) -> Result<()> {
    let mut config = AppConfig::load()?;
    if let Some(confirm_secrets) = args.confirm_secrets {
        config.wizard.confirm_secrets = confirm_secrets;
    }

    setup_logging(&config)?;
    setup_panic_handler();

    if let Err(e) = AuditLogger::init_at(&config.log_dir().join("audit.jsonl")) {
        tracing::warn!("Audit log unavailable: {}", e);
    }

    let mut app = App::new(&config);
    app.init();
    let mut layout = LayoutComponent::new();

    tracing::info!(
        confirm_secrets = config.wizard.confirm_secrets,
        "Starting onboarding wizard"
    );

    let result = run_tui(&mut app, &mut layout, &config).await;

    // Restore the terminal if an error left it in raw mode
    if result.is_err() && crossterm::terminal::is_raw_mode_enabled().unwrap_or(false) {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, config: &AppConfig) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Flush pending terminal events so stray keypresses don't fill the first form
    while event::poll(Duration::from_millis(10)).unwrap_or(false) {
        let _ = event::read();
    }

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(app, layout, &mut terminal, config).await;

    // Always clean up terminal using unified cleanup
    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        // Fallback to basic cleanup
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut last_tick = Instant::now();

    // Startup guard: Ignore key events for the first 100ms
    let startup_time = Instant::now();
    const STARTUP_GUARD_MS: u64 = 100;

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Windows reports key release too
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }

                if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                    tracing::debug!("Ignoring key event during startup guard period");
                    continue;
                }

                if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state)
                {
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging(config: &AppConfig) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "autopilot-onboard-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()             // Output in JSON Lines format
                .with_target(true)  // Include target module in JSON
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
