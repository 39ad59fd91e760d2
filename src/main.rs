use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use chroma_four::config::AppConfig;
use chroma_four::game::GameMode;
use chroma_four::ui::App;

/// Play Chroma Four in the terminal.
#[derive(Parser)]
#[command(name = "chroma-four", about = "A 4x4 two-color card capture game")]
struct Cli {
    /// Skip the menu and start a game: "one" (vs computer) or "two" (hot-seat)
    #[arg(long)]
    mode: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = match cli.mode.as_deref() {
        None => None,
        Some("one") => Some(GameMode::OnePlayer),
        Some("two") => Some(GameMode::TwoPlayer),
        Some(other) => bail!("unknown mode '{}' (expected 'one' or 'two')", other),
    };

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, mode);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI error")
}
