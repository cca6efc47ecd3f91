mod backend_bridge;
mod controller;
mod ui;

use atlas_core::DataSource;
use clap::Parser;
use crossbeam_channel::bounded;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::CountryTableApp;

/// Searchable, filterable, sortable table of the world's countries, fed by a
/// static JSON dataset.
#[derive(Parser, Debug)]
#[command(name = "country-atlas", version, about)]
struct Cli {
    /// Path or http(s) URL of the countries JSON document.
    #[arg(long, default_value = "data/countries.json")]
    data: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let source = DataSource::parse(&cli.data);
    tracing::info!(%source, "starting country atlas");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Country Atlas")
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([860.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Country Atlas",
        options,
        Box::new(move |_cc| Ok(Box::new(CountryTableApp::new(cmd_tx, ui_rx, source)))),
    )
}
