use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui;

use crate::color::BrandColors;
use crate::controller::FilterController;
use crate::data::loader::load_file;
use crate::data::model::RawRecord;
use crate::data::store::RecordStore;
use crate::inputs::FilterInputs;
use crate::view::{ChartCanvas, SummaryPanel, TableView, ViewSynchronizer};

/// Result of a background load: the path and the parsed rows.
type LoadOutcome = (PathBuf, anyhow::Result<Vec<RawRecord>>);

/// Tabs of the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Table,
    Summary,
    Visualization,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Record store and views.
    pub controller: FilterController,

    /// Current contents of the filter widgets.
    pub inputs: FilterInputs,

    /// Bar colour per brand of the full dataset.
    pub brand_colors: BrandColors,

    /// Selected tab of the central panel.
    pub tab: Tab,

    /// Worksheet selection forwarded to the loader.
    pub sheet: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    pending: Option<Receiver<LoadOutcome>>,
}

impl Default for AppState {
    fn default() -> Self {
        let view = ViewSynchronizer::new(
            TableView::default(),
            SummaryPanel::default(),
            ChartCanvas::default(),
        );
        Self {
            controller: FilterController::new(RecordStore::new(), view),
            inputs: FilterInputs::default(),
            brand_colors: BrandColors::default(),
            tab: Tab::Table,
            sheet: None,
            status_message: None,
            loading: false,
            pending: None,
        }
    }
}

impl AppState {
    /// Read `path` on a background thread. The session holds a single dataset, so
    /// this is refused once one is loaded or while a load is running.
    pub fn start_load(&mut self, path: PathBuf, ctx: Option<&egui::Context>) {
        if self.controller.store().is_loaded() || self.loading {
            log::warn!("Ignoring load of {}: dataset already loaded", path.display());
            return;
        }

        log::info!("Loading {}", path.display());
        let (tx, rx) = mpsc::channel();
        let sheet = self.sheet.clone();
        let ctx = ctx.cloned();
        thread::spawn(move || {
            let result = load_file(&path, sheet.as_deref());
            // The receiver is gone only if the app has shut down.
            let _ = tx.send((path, result));
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });

        self.pending = Some(rx);
        self.loading = true;
        self.status_message = None;
    }

    /// Pick up a finished background load, if any.
    pub fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok((path, Ok(rows))) => {
                self.pending = None;
                log::info!("Read {} rows from {}", rows.len(), path.display());
                self.set_dataset(rows);
            }
            Ok((path, Err(e))) => {
                self.pending = None;
                self.fail_load(format!("Failed to load {}: {e:#}", path.display()));
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.fail_load("Loader thread exited without a result".to_string());
            }
        }
    }

    /// Views stay in their empty initial state.
    fn fail_load(&mut self, message: String) {
        log::error!("{message}");
        self.status_message = Some(message);
        self.loading = false;
    }

    /// Ingest a newly loaded table, reset inputs and colours, render everything.
    pub fn set_dataset(&mut self, rows: Vec<RawRecord>) {
        self.controller.load_dataset(rows);
        self.inputs.clear();
        self.brand_colors = BrandColors::new(self.controller.store().brand_options());
        self.status_message = None;
        self.loading = false;
    }

    pub fn apply_filters(&mut self) {
        self.controller.apply_filters(&self.inputs);
    }

    pub fn reset_filters(&mut self) {
        self.controller.reset_filters(&mut self.inputs);
    }
}
