use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

/// Render the summary panel: one bold label per statistic, brand counts coloured.
pub fn summary_view(ui: &mut Ui, state: &AppState) {
    let panel = state.controller.view().summary();

    egui::Grid::new("summary_grid")
        .num_columns(2)
        .spacing([24.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            for (label, value) in panel.stats().summary_lines() {
                ui.strong(format!("{label}:"));
                ui.label(value);
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    if ui.button("Copy summary").clicked() {
        ui.ctx().copy_text(panel.text().to_string());
    }

    let counts = &panel.stats().counts_by_brand;
    if counts.is_empty() {
        return;
    }

    ui.add_space(12.0);
    ui.separator();
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (brand, count) in counts {
            let color = state.brand_colors.color_for(brand);
            ui.label(RichText::new(format!("■ {brand}: {count}")).color(color));
        }
    });
}
