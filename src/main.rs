//! Burrow - a single-panel terminal file browser

use std::io::{self, stdout};
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

mod config;
mod errors;
mod fs;
mod input;
mod logging;
mod state;
mod ui;
mod utils;

use config::Config;
use errors::AppResult;
use state::app::App;
use state::mode::Mode;
use state::navigator::Navigator;
use ui::{ConfirmDeleteDialog, DriveSelectorDialog, HelpViewer, PanelWidget, PromptDialog, StatusBar};

/// Browse, open and organize files from the terminal
#[derive(Parser, Debug)]
#[command(name = "burrow", version)]
struct Cli {
    /// Directory to start in
    dir: Option<PathBuf>,

    /// Use this config file instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level for burrow.log (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: tracing::Level,
}

/// Set up panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Initialize the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Candidate start directories, most specific first
fn start_candidates(cli_dir: Option<&Path>, config: &Config, home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = cli_dir {
        candidates.push(dir.to_path_buf());
    }
    if config.general.remember_path
        && let Some(last) = config.general.last_path.as_deref()
        && !last.is_empty()
    {
        candidates.push(PathBuf::from(last));
    }
    let start_dir = config.general.start_dir.trim();
    if !start_dir.is_empty() {
        candidates.push(utils::expand_tilde(start_dir, home));
    }
    if let Some(home) = home {
        candidates.push(home.to_path_buf());
    }
    candidates
}

/// First candidate that is an existing directory, else the working directory
fn initial_navigator(candidates: &[PathBuf], home: Option<PathBuf>) -> AppResult<Navigator> {
    for candidate in candidates {
        match Navigator::new(candidate, home.clone()) {
            Ok(nav) => return Ok(nav),
            Err(e) => tracing::warn!(path = %candidate.display(), error = %e, "skipping start directory"),
        }
    }
    let cwd = std::env::current_dir()?;
    Ok(Navigator::new(&cwd, home)?)
}

/// Main event loop
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let size = frame.area();

            if let Mode::Help { scroll } = &app.mode {
                let lines = input::help_lines(&app.config.keybindings);
                app.help_height = HelpViewer::content_height(size);
                frame.render_widget(HelpViewer::new(&lines, *scroll, &app.theme), size);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(size);

            let panel = PanelWidget::new(&app.theme, &app.config.display);
            frame.render_stateful_widget(panel, chunks[0], &mut app.panel);
            frame.render_widget(
                StatusBar::new(app.status.as_ref(), &app.config.keybindings, &app.theme),
                chunks[1],
            );

            match &app.mode {
                Mode::Prompt { kind, input, cursor } => {
                    frame.render_widget(PromptDialog::new(kind, input, *cursor, &app.theme), size);
                    if let Some(position) = ui::dialog::prompt_cursor_position(size, *cursor) {
                        frame.set_cursor_position(position);
                    }
                }
                Mode::ConfirmDelete { name, focus_yes } => {
                    frame.render_widget(ConfirmDeleteDialog::new(&name.to_string_lossy(), *focus_yes, &app.theme), size);
                }
                Mode::DriveSelector { drives, selected } => {
                    frame.render_widget(DriveSelectorDialog::new(drives, *selected, &app.theme), size);
                }
                Mode::Normal | Mode::Help { .. } => {}
            }
        })?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            // Save state before exiting
            app.save_state();
            break;
        }
    }
    Ok(())
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let log_path = logging::init(cli.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = ?log_path, "starting");

    let config_path = cli.config.clone().or_else(config::config_file);
    let config = Config::load(config_path.as_deref());

    let home = dirs::home_dir();
    let candidates = start_candidates(cli.dir.as_deref(), &config, home.as_deref());
    let nav = initial_navigator(&candidates, home)?;
    tracing::info!(dir = %nav.current().display(), "start directory");

    let opener = fs::opener::opener_from_config(&config);
    let mut app = App::new(config, config_path, nav, opener);

    setup_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal error");
    }
    tracing::info!("exiting");
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_start_candidates_order() {
        let mut config = Config::default();
        config.general.start_dir = "~/work".to_string();
        config.general.last_path = Some("/last".to_string());
        let home = Path::new("/home/ada");

        let list = start_candidates(Some(Path::new("/cli")), &config, Some(home));
        assert_eq!(
            list,
            vec![PathBuf::from("/cli"), home.join("work"), home.to_path_buf()]
        );

        config.general.remember_path = true;
        let list = start_candidates(None, &config, Some(home));
        assert_eq!(
            list,
            vec![PathBuf::from("/last"), home.join("work"), home.to_path_buf()]
        );
    }

    #[test]
    fn test_initial_navigator_skips_missing() {
        let dir = tempdir().unwrap();
        let candidates = vec![dir.path().join("missing"), dir.path().to_path_buf()];
        let nav = initial_navigator(&candidates, None).unwrap();
        assert_eq!(nav.current(), dir.path());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["burrow", "/tmp", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.log_level, tracing::Level::DEBUG);
        assert!(cli.config.is_none());
    }
}
