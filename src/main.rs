mod app;
mod color;
mod config;
mod controller;
mod data;
mod inputs;
mod state;
mod ui;
mod view;

use app::NitrogenDashboardApp;
use clap::Parser;
use config::Args;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Nitrogen Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(NitrogenDashboardApp::new(cc, &args)))),
    )
}
