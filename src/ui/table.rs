use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::COLUMNS;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

/// Render the product table. Clicking a row selects it, clicking again clears it.
pub fn product_table(ui: &mut Ui, state: &mut AppState) {
    if !state.controller.store().is_loaded() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No dataset loaded  (File → Open…)");
        });
        return;
    }

    let table_view = state.controller.view_mut().table_mut();
    let selected = table_view.selected();
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().resizable(true).clip(true), COLUMNS.len() - 1)
        .column(Column::remainder())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            let rows = table_view.rows();
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let index = row.index();
                row.set_selected(selected == Some(index));
                let product = &rows[index];
                for column in 0..COLUMNS.len() {
                    row.col(|ui| {
                        ui.label(product.cell_text(column));
                    });
                }
                if row.response().clicked() {
                    clicked = Some(index);
                }
            });
        });

    if let Some(index) = clicked {
        table_view.toggle_selected(index);
    }
}
