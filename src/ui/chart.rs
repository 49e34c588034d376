use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Nitrogen bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart instance: one bar per product, coloured by brand.
pub fn nitrogen_chart(ui: &mut Ui, state: &AppState) {
    let Some(chart) = state.controller.view().chart().current() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No dataset loaded  (File → Open…)");
        });
        return;
    };

    let bars: Vec<Bar> = chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(&chart.brands)
        .enumerate()
        .map(|(i, ((name, &value), brand))| {
            Bar::new(i as f64, value)
                .name(name)
                .width(0.8)
                .fill(state.brand_colors.color_for(brand))
        })
        .collect();

    let labels = chart.labels.clone();
    let bar_chart = BarChart::new(bars)
        .name("Nitrogen Percentage")
        .color(Color32::from_rgb(75, 192, 192))
        .element_formatter(Box::new(|bar, _chart| {
            format!("{}\n{:.2}%", bar.name, bar.value)
        }));

    // Keyed by instance id: a rebuilt chart starts without the old zoom / pan.
    Plot::new(("nitrogen_chart", chart.id))
        .x_axis_label("Product Names")
        .y_axis_label("Nitrogen Percentage")
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(bar_chart);
        });
}
