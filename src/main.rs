#![forbid(unsafe_code)]

mod cli;
mod collection;
mod constants;
mod engine;
mod font_discovery;
mod gui;
mod preview;
mod view;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use collection::{CollectionFile, FontUniverse};
use engine::MutationEngine;

/// Installed families plus any `--font` names. Discovery failure is not fatal:
/// the viewer still works on the stored collection.
fn build_universe(cli: &Cli) -> FontUniverse {
    let mut fonts = if cli.no_discovery {
        info!("Font discovery disabled");
        Vec::new()
    } else {
        font_discovery::list_font_families().unwrap_or_else(|e| {
            warn!(error = ?e, "Font discovery failed, starting with an empty font list");
            Vec::new()
        })
    };
    fonts.extend(cli.extra_fonts.iter().cloned());
    FontUniverse::new(fonts)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.trace_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let universe = build_universe(&cli);
    if universe.is_empty() {
        warn!("No fonts available, only stored collection entries will be listed");
    } else {
        info!(fonts = universe.len(), "Font universe ready");
    }

    let file = CollectionFile::new(cli.data_path());
    let (collection, startup_notice) = engine::load_or_empty(&file);
    let engine = MutationEngine::new(universe, collection);

    gui::run_gui(engine, file, startup_notice)
}
