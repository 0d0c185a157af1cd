mod app;
mod config;
mod input;
mod swatch;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use swatch::ColorRecord;
use tui::theme::{Palette, ThemeState, palette::to_color_code};

#[derive(Debug, Parser)]
#[command(name = "swatchbook", version, about = "Color swatch viewer with a light/dark toggle")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Swatch dataset (.json or .toml); overrides the config.
    #[arg(long)]
    swatches: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print the rendered swatch list to stdout (headless).
    List {
        /// Render with the light palette instead of dark.
        #[arg(long)]
        light: bool,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print both palettes (headless).
    Palettes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    init_logging(&cfg, matches!(command, Command::Tui)).context("init logging")?;

    let swatches = match cli.swatches.as_deref().or(cfg.paths.swatches.as_deref()) {
        Some(path) => swatch::load(path)?,
        None => {
            tracing::debug!("using built-in swatches");
            swatch::builtin()
        }
    };

    match command {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, swatches);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::List { light, json } => {
            let theme = ThemeState::new(!light);
            if json {
                println!("{}", serde_json::to_string_pretty(&list_json(&swatches, theme))?);
            } else {
                print_list(&swatches, theme);
            }
        }
        Command::Palettes => {
            for palette in [&Palette::LIGHT, &Palette::DARK] {
                println!("{}:", palette.name);
                for (name, color) in palette.entries() {
                    println!("  {:16} {}", name, to_color_code(color).unwrap_or_default());
                }
            }
        }
    }

    Ok(())
}

/// The TUI owns the terminal, so it logs to a file under the data dir.
fn init_logging(cfg: &config::Config, to_file: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log.max_level());

    if to_file {
        let file = open_log_file(&cfg.paths.data_dir)?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn open_log_file(data_dir: &Path) -> anyhow::Result<std::fs::File> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("create dir {}", data_dir.display()))?;
    let path = data_dir.join("swatchbook.log");
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))
}

fn print_list(records: &[ColorRecord], theme: ThemeState) {
    println!("[{}]", theme.label());
    for item in swatch::render::render(records, theme.palette()) {
        println!(
            "{:>3}. {:20} {:8} {:9} {}",
            item.id,
            item.color_name,
            item.color_code,
            item.variant.label(),
            to_color_code(item.background).unwrap_or_default()
        );
    }
}

fn list_json(records: &[ColorRecord], theme: ThemeState) -> serde_json::Value {
    let items: Vec<serde_json::Value> = swatch::render::render(records, theme.palette())
        .iter()
        .map(|item| {
            serde_json::json!({
                "id": item.id,
                "colorName": item.color_name,
                "colorCode": item.color_code,
                "variant": item.variant.label(),
                "background": to_color_code(item.background),
            })
        })
        .collect();

    serde_json::json!({
        "theme": theme.palette().name,
        "label": theme.label(),
        "items": items,
    })
}
