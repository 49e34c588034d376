use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use super::model::{Product, RawRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no data loaded")]
    NoDataLoaded,
}

// ---------------------------------------------------------------------------
// RecordStore – the canonical dataset for the session
// ---------------------------------------------------------------------------

/// Owns the full dataset and the filter option lists derived from it.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// `None` until [`RecordStore::load`] has been called.
    records: Option<Vec<Arc<Product>>>,
    brand_options: Vec<String>,
    category_options: Vec<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert raw rows into products and keep them as the dataset.
    ///
    /// Brand and category options are computed here, once, in order of first
    /// occurrence.
    pub fn load(&mut self, raw_records: Vec<RawRecord>) {
        let records: Vec<Arc<Product>> = raw_records
            .iter()
            .enumerate()
            .map(|(row, raw)| Arc::new(Product::from_raw(raw, row)))
            .collect();

        self.brand_options = distinct_in_order(records.iter().map(|p| p.brand.as_str()));
        self.category_options = distinct_in_order(records.iter().map(|p| p.category.as_str()));

        log::info!(
            "Loaded {} products ({} brands, {} categories)",
            records.len(),
            self.brand_options.len(),
            self.category_options.len()
        );
        self.records = Some(records);
    }

    /// The full dataset.
    pub fn get_all(&self) -> Result<&[Arc<Product>], StoreError> {
        self.records.as_deref().ok_or(StoreError::NoDataLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    /// Number of loaded products (0 when nothing is loaded).
    pub fn len(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    pub fn brand_options(&self) -> &[String] {
        &self.brand_options
    }

    pub fn category_options(&self) -> &[String] {
        &self.category_options
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{COL_BRAND, COL_CATEGORY, COL_NAME, COL_PERCENTAGE, CellValue};

    fn raw(brand: &str, category: &str, name: &str, pct: f64) -> RawRecord {
        [
            (COL_BRAND, CellValue::String(brand.into())),
            (COL_CATEGORY, CellValue::String(category.into())),
            (COL_NAME, CellValue::String(name.into())),
            (COL_PERCENTAGE, CellValue::Float(pct)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    #[test]
    fn get_all_before_load_reports_no_data() {
        let store = RecordStore::new();
        assert_eq!(store.get_all().unwrap_err(), StoreError::NoDataLoaded);
        assert!(!store.is_loaded());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn load_keeps_source_order() {
        let mut store = RecordStore::new();
        store.load(vec![raw("B", "Y", "Bar", 90.0), raw("A", "X", "Foo", 10.0)]);
        let names: Vec<&str> = store
            .get_all()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Bar", "Foo"]);
    }

    #[test]
    fn options_are_distinct_in_first_occurrence_order() {
        let mut store = RecordStore::new();
        store.load(vec![
            raw("Zeta", "Lawn", "a", 1.0),
            raw("Acme", "Garden", "b", 2.0),
            raw("Zeta", "Garden", "c", 3.0),
            raw("Mid", "Lawn", "d", 4.0),
        ]);
        assert_eq!(store.brand_options(), ["Zeta", "Acme", "Mid"]);
        assert_eq!(store.category_options(), ["Lawn", "Garden"]);
    }

    #[test]
    fn loading_an_empty_table_still_counts_as_loaded() {
        let mut store = RecordStore::new();
        store.load(Vec::new());
        assert!(store.is_loaded());
        assert!(store.get_all().unwrap().is_empty());
    }
}
