use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing::warn;

mod controller;
mod ui;

use controller::events::UiEvent;
use ui::app::RollbookApp;
use ui_core::flash::FlashSeverity;
use ui_core::prefs::PreferenceStore;

#[derive(Parser, Debug)]
#[command(name = "rollbook", about = "Student roll book desktop UI")]
struct Args {
    /// Roster JSON file to load instead of the built-in sample roster.
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Override the directory used for persisted UI preferences.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut startup_flashes: Vec<(String, FlashSeverity)> = Vec::new();
    let roster = match &args.roster {
        Some(path) => match shared::roster::load_roster(path) {
            Ok(roster) => roster,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not load roster, using sample data");
                startup_flashes.push((
                    "Error loading roster file!".to_string(),
                    FlashSeverity::Error,
                ));
                shared::domain::sample_roster()
            }
        },
        None => shared::domain::sample_roster(),
    };

    let prefs = match PreferenceStore::resolve(args.data_dir.as_deref()) {
        Ok(store) => store,
        Err(err) => {
            warn!(%err, "theme preference will not persist this session");
            PreferenceStore::disabled()
        }
    };

    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rollbook")
            .with_inner_size([1120.0, 760.0])
            .with_min_inner_size([880.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rollbook",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(RollbookApp::new(
                ui_tx,
                ui_rx,
                roster,
                prefs,
                startup_flashes,
            )))
        }),
    )
}
