mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::PokevizApp;
use eframe::egui;

/// Deployment-time constant: the dataset read once at process start.
const DATASET_PATH: &str = "data/pokemon.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A dataset that fails validation is fatal: the UI never starts.
    let dataset = data::loader::load_file(Path::new(DATASET_PATH))
        .with_context(|| format!("loading dataset from {DATASET_PATH}"))?;
    log::info!(
        "Loaded {} Pokémon across {} types, Total in [{}, {}]",
        dataset.len(),
        dataset.type_names.len(),
        dataset.total_min,
        dataset.total_max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PokeViz – Pokémon Type Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(PokevizApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
