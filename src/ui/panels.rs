use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{PERCENTAGE_MAX, PERCENTAGE_MIN};
use crate::inputs::{Facet, FilterInputs};
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.loading {
        ui.horizontal(|ui: &mut Ui| {
            ui.spinner();
            ui.label("Loading dataset…");
        });
    } else if !state.controller.store().is_loaded() {
        ui.label("No dataset loaded.");
    }

    // Options come from the full dataset, never from the filtered view.
    let brands = state.controller.store().brand_options().to_vec();
    let categories = state.controller.store().category_options().to_vec();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            facet_selector(ui, &mut state.inputs, Facet::Brand, "Brand", &brands);
            facet_selector(ui, &mut state.inputs, Facet::Category, "Category", &categories);
            ui.separator();

            ui.strong("Product Name");
            ui.add(
                egui::TextEdit::singleline(&mut state.inputs.name_search)
                    .hint_text("Search Product"),
            );
            ui.separator();

            ui.strong("Nitrogen Percentage");
            range_sliders(ui, &mut state.inputs);
            ui.separator();

            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Apply Filters").clicked() {
                    state.apply_filters();
                }
                if ui
                    .button(RichText::new("Reset Filters").color(Color32::LIGHT_RED))
                    .clicked()
                {
                    state.reset_filters();
                }
            });
        });
}

/// Collapsible multi-select with All / None helpers.
fn facet_selector(
    ui: &mut Ui,
    inputs: &mut FilterInputs,
    facet: Facet,
    label: &str,
    options: &[String],
) {
    let n_selected = inputs.selection(facet).len();
    let header_text = if n_selected == 0 {
        format!("{label}  (any)")
    } else {
        format!("{label}  ({n_selected}/{})", options.len())
    };

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if options.is_empty() {
                ui.weak("No options");
                return;
            }
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    inputs.select_all(facet, options);
                }
                if ui.small_button("None").clicked() {
                    inputs.select_none(facet);
                }
            });

            for value in options {
                let mut checked = inputs.selection(facet).contains(value);
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    inputs.toggle(facet, value);
                }
            }
        });
}

/// Two handles over 0–100, step 1. Dragging one past the other pushes it along.
fn range_sliders(ui: &mut Ui, inputs: &mut FilterInputs) {
    let (mut low, mut high) = inputs.range();
    let bounds = PERCENTAGE_MIN..=PERCENTAGE_MAX;

    if ui
        .add(egui::Slider::new(&mut low, bounds.clone()).step_by(1.0).text("Min"))
        .changed()
    {
        inputs.set_low(low);
    }
    if ui
        .add(egui::Slider::new(&mut high, bounds).step_by(1.0).text("Max"))
        .changed()
    {
        inputs.set_high(high);
    }
}

// ---------------------------------------------------------------------------
// Tab bar
// ---------------------------------------------------------------------------

pub fn tab_bar(ui: &mut Ui, tab: &mut Tab) {
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(tab, Tab::Table, "Table View");
        ui.selectable_value(tab, Tab::Summary, "Summary");
        ui.selectable_value(tab, Tab::Visualization, "Visualization");
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            // One dataset per session: opening is only offered until one is loaded.
            let can_open = !state.controller.store().is_loaded() && !state.loading;
            if ui.add_enabled(can_open, egui::Button::new("Open…")).clicked() {
                open_file_dialog(ui.ctx(), state);
                ui.close_menu();
            }
        });

        ui.separator();

        let store = state.controller.store();
        if store.is_loaded() {
            ui.label(format!(
                "{} products loaded, {} visible",
                store.len(),
                state.controller.view().table().rows().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open product dataset")
        .add_filter(
            "Supported files",
            &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "json", "parquet", "pq"],
        )
        .add_filter("Spreadsheets", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.start_load(path, Some(ctx));
    }
}
