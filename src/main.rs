// tradewind - Animated Asia Pacific trade route map for the terminal
// A ship sails a curved route between ports while cargo bobs along the lane

mod app;
mod engine;
mod enquiry;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::config::LOG_ENV_VAR;
use app::{
    event::{handle_key_event, handle_mouse_event},
    AppState,
};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Send tracing output to the file named by `TRADEWIND_LOG`
///
/// Logging stays off when the variable is unset; writing to the
/// terminal would corrupt the alternate screen.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var(LOG_ENV_VAR) else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(log_file = %path, "Logging initialised");
    Ok(())
}

/// Raw mode, alternate screen, mouse capture and bracketed paste for the
/// life of the guard
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore as much as possible even if one step fails
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        ) {
            tracing::warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!(error = %e, "Failed to show cursor");
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;

    let mut app = AppState::new().context("invalid built-in route configuration")?;

    let res = {
        let mut guard = TerminalGuard::new()?;
        run_app(&mut guard.terminal, &mut app)
    };
    app.shutdown();

    if let Err(err) = res {
        tracing::error!(error = ?err, "Exited with error");
        eprintln!("Error: {err:?}");
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    loop {
        let now = Instant::now();
        app.on_tick(now);

        if app.should_draw(now) {
            app.update_frame_time(now);
            terminal.draw(|f| ui::draw(f, app, now))?;
            app.mark_drawn(now);
        }

        if !app.running {
            return Ok(());
        }

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(app, key.code);
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                Event::Paste(text) => app.paste(&text),
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        if !app.running {
            return Ok(());
        }
    }
}
