//! SlideKit - presentation exporter and sidebar editor
//!
//! Entry point: parses the command line and dispatches to a subcommand.

mod cli;
mod commands;
mod editor_app;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use slidekit_editor::SidebarEditor;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, EditArgs};
use editor_app::EditorApp;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Export(args) => commands::run_export(&args),
        Command::Inspect { presentation } => commands::run_inspect(&presentation),
        Command::Edit(args) => run_editor(args),
    }
}

fn run_editor(args: EditArgs) -> Result<()> {
    let config = commands::load_presentation(&args.presentation)?;
    let editor = SidebarEditor::new(config, args.slide)
        .with_context(|| format!("Cannot edit slide {}", args.slide))?;
    let output = args.output.unwrap_or_else(|| args.presentation.clone());
    info!(path = %args.presentation.display(), slide = args.slide, "Opening editor");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("SlideKit Editor"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "SlideKit Editor",
        options,
        Box::new(move |cc| Ok(Box::new(EditorApp::new(cc, editor, output)))),
    )
    .map_err(|e| anyhow::anyhow!("Editor window failed: {}", e))?;

    Ok(())
}
