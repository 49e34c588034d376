use eframe::egui;

use crate::config::Args;
use crate::state::{AppState, Tab};
use crate::ui::{chart, panels, summary, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NitrogenDashboardApp {
    pub state: AppState,
}

impl NitrogenDashboardApp {
    /// Build the app and start the one-time dataset load.
    pub fn new(cc: &eframe::CreationContext<'_>, args: &Args) -> Self {
        let mut state = AppState::default();
        state.sheet = args.sheet.clone();
        if let Some(path) = args.startup_dataset() {
            state.start_load(path, Some(&cc.egui_ctx));
        }
        Self { state }
    }
}

impl eframe::App for NitrogenDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_load();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(250.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabs ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::tab_bar(ui, &mut self.state.tab);
            ui.separator();
            match self.state.tab {
                Tab::Table => table::product_table(ui, &mut self.state),
                Tab::Summary => summary::summary_view(ui, &self.state),
                Tab::Visualization => chart::nitrogen_chart(ui, &self.state),
            }
        });
    }
}
