use std::sync::Arc;

use crate::data::model::Product;
use crate::data::summary::{SummaryStatistics, summarize};

// ---------------------------------------------------------------------------
// Table surface
// ---------------------------------------------------------------------------

/// Rows shown by the table tab.
#[derive(Debug, Default)]
pub struct TableView {
    rows: Vec<Arc<Product>>,
    selected: Option<usize>,
}

impl TableView {
    /// Replace all rows. The selection refers to the old rows, so it is dropped.
    pub fn replace_rows(&mut self, rows: Vec<Arc<Product>>) {
        self.rows = rows;
        self.selected = None;
    }

    pub fn rows(&self) -> &[Arc<Product>] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn toggle_selected(&mut self, row: usize) {
        self.selected = if self.selected == Some(row) || row >= self.rows.len() {
            None
        } else {
            Some(row)
        };
    }
}

// ---------------------------------------------------------------------------
// Summary surface
// ---------------------------------------------------------------------------

/// Statistics of the current subset and their rendered text.
#[derive(Debug, Default)]
pub struct SummaryPanel {
    stats: SummaryStatistics,
    text: String,
}

impl SummaryPanel {
    pub fn show(&mut self, stats: SummaryStatistics) {
        self.text = stats.to_string();
        self.stats = stats;
    }

    pub fn stats(&self) -> &SummaryStatistics {
        &self.stats
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// ---------------------------------------------------------------------------
// Chart surface
// ---------------------------------------------------------------------------

/// One built bar chart: product names as categories, nitrogen percentage as values.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartInstance {
    /// Unique per instance; also keys the plot's zoom/pan memory.
    pub id: u64,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Brand per bar, used for colouring.
    pub brands: Vec<String>,
}

impl BarChartInstance {
    fn build(id: u64, records: &[Arc<Product>]) -> Self {
        Self {
            id,
            labels: records.iter().map(|p| p.name.clone()).collect(),
            values: records.iter().map(|p| p.nitrogen_percentage).collect(),
            brands: records.iter().map(|p| p.brand.clone()).collect(),
        }
    }
}

/// The canvas the chart is drawn on. Holds at most one live chart.
#[derive(Debug, Default)]
pub struct ChartCanvas {
    current: Option<BarChartInstance>,
    last_id: u64,
    disposed: u64,
}

impl ChartCanvas {
    /// Dispose the current chart, then build a new one from `records`.
    pub fn rebuild(&mut self, records: &[Arc<Product>]) {
        if let Some(old) = self.current.take() {
            self.dispose(old);
        }
        self.last_id += 1;
        self.current = Some(BarChartInstance::build(self.last_id, records));
    }

    fn dispose(&mut self, chart: BarChartInstance) {
        self.disposed += 1;
        log::debug!(
            "Disposing chart #{} ({} bars, {} disposed so far)",
            chart.id,
            chart.values.len(),
            self.disposed
        );
    }

    pub fn current(&self) -> Option<&BarChartInstance> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn live_instances(&self) -> usize {
        usize::from(self.current.is_some())
    }

    #[cfg(test)]
    pub fn disposed_count(&self) -> u64 {
        self.disposed
    }
}

// ---------------------------------------------------------------------------
// ViewSynchronizer
// ---------------------------------------------------------------------------

/// Keeps the table, summary and chart consistent with one record subset.
#[derive(Debug, Default)]
pub struct ViewSynchronizer {
    table: TableView,
    summary: SummaryPanel,
    chart: ChartCanvas,
}

impl ViewSynchronizer {
    pub fn new(table: TableView, summary: SummaryPanel, chart: ChartCanvas) -> Self {
        Self {
            table,
            summary,
            chart,
        }
    }

    /// Show `records` on every surface: table rows, then summary, then chart.
    pub fn render(&mut self, records: &[Arc<Product>]) {
        log::debug!("Rendering {} products", records.len());
        self.table.replace_rows(records.to_vec());
        self.summary.show(summarize(records));
        self.chart.rebuild(records);
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableView {
        &mut self.table
    }

    pub fn summary(&self) -> &SummaryPanel {
        &self.summary
    }

    pub fn chart(&self) -> &ChartCanvas {
        &self.chart
    }
}
