mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use config::TuiConfig;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ConfigPath => {
            let path = TuiConfig::config_path()?;
            if !path.exists() {
                TuiConfig::default().save_to(&path)?;
                println!("Created default config at: {}", path.display());
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Run(args) => run(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut cfg = TuiConfig::load()?;
    cfg.apply_overrides(&args);

    match cfg.log_path().and_then(|path| logging::init(&path)) {
        Ok(()) => {}
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    let (listener, mut changes) = runtime::channel();
    let mut app = App::new(&cfg, listener).context("Invalid picker configuration")?;
    tracing::info!(
        initial_minutes = app.picker.total_minutes(),
        max_days = cfg.picker.max_days,
        max_hours = cfg.picker.max_hours,
        "picker started"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;

    // Key release events need the kitty keyboard protocol
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        app.key_release_timeout = None;
    }
    tracing::debug!(enhanced, "keyboard release reporting");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = runtime::run_app(&mut terminal, &mut app, &mut changes);

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "picker loop failed");
        eprintln!("Error: {:?}", err);
    }

    runtime::drain_changes(&mut app, &mut changes);
    tracing::info!(total_minutes = app.host.total_minutes, "picker finished");
    println!("{}", app.result_line(args.json)?);

    Ok(())
}
