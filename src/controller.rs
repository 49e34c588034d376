use crate::data::filter::{build_predicate, filter_records};
use crate::data::model::RawRecord;
use crate::data::store::RecordStore;
use crate::inputs::FilterInputs;
use crate::view::ViewSynchronizer;

// ---------------------------------------------------------------------------
// FilterController
// ---------------------------------------------------------------------------

/// Applies and resets filters, wiring the record store to the views.
#[derive(Debug, Default)]
pub struct FilterController {
    store: RecordStore,
    view: ViewSynchronizer,
}

impl FilterController {
    pub fn new(store: RecordStore, view: ViewSynchronizer) -> Self {
        Self { store, view }
    }

    /// Take a freshly loaded table as the dataset and render all of it.
    pub fn load_dataset(&mut self, raw: Vec<RawRecord>) {
        self.store.load(raw);
        if let Ok(all) = self.store.get_all() {
            self.view.render(all);
        }
    }

    /// Filter the full dataset by the current inputs and render the result.
    /// Does nothing (but log) while no dataset is loaded.
    pub fn apply_filters(&mut self, inputs: &FilterInputs) {
        let all = match self.store.get_all() {
            Ok(all) => all,
            Err(e) => {
                log::error!("Cannot apply filters: {e}");
                return;
            }
        };

        let criteria = inputs.criteria();
        let filtered = filter_records(all, &build_predicate(&criteria));
        log::info!(
            "Filters applied: {} of {} products match",
            filtered.len(),
            all.len()
        );
        self.view.render(&filtered);
    }

    /// Clear every input and render the full dataset again.
    pub fn reset_filters(&mut self, inputs: &mut FilterInputs) {
        inputs.clear();
        match self.store.get_all() {
            Ok(all) => self.view.render(all),
            Err(e) => log::warn!("Filters reset before load: {e}"),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn view(&self) -> &ViewSynchronizer {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewSynchronizer {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{
        COL_BRAND, COL_CATEGORY, COL_INGREDIENT_COUNT, COL_NAME, COL_PERCENTAGE, CellValue,
    };
    use crate::inputs::Facet;
    use crate::view::tests::visible;
    use std::collections::BTreeMap;

    fn raw(brand: &str, category: &str, name: &str, pct: f64, count: i64) -> RawRecord {
        [
            (COL_BRAND, CellValue::String(brand.into())),
            (COL_CATEGORY, CellValue::String(category.into())),
            (COL_NAME, CellValue::String(name.into())),
            (COL_PERCENTAGE, CellValue::Float(pct)),
            (COL_INGREDIENT_COUNT, CellValue::Integer(count)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    fn loaded() -> FilterController {
        let mut controller = FilterController::default();
        controller.load_dataset(vec![
            raw("A", "X", "Foo", 10.0, 2),
            raw("B", "Y", "Bar", 90.0, 4),
            raw("B", "X", "ACME Fertilizer", 100.0, 1),
        ]);
        controller
    }

    fn shown_names(controller: &FilterController) -> Vec<String> {
        controller
            .view()
            .table()
            .rows()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn load_renders_full_dataset() {
        let controller = loaded();
        assert_eq!(shown_names(&controller), ["Foo", "Bar", "ACME Fertilizer"]);
        assert_eq!(controller.view().summary().stats().total_count, 3);
    }

    #[test]
    fn brand_filter_end_to_end() {
        let mut controller = FilterController::default();
        controller.load_dataset(vec![raw("A", "X", "Foo", 10.0, 2), raw("B", "Y", "Bar", 90.0, 4)]);

        let mut inputs = FilterInputs::default();
        inputs.toggle(Facet::Brand, "A");
        controller.apply_filters(&inputs);

        assert_eq!(shown_names(&controller), ["Foo"]);
        let stats = controller.view().summary().stats();
        assert_eq!(stats.total_count, 1);
        assert_eq!(stats.average_percentage, 10.0);
        assert_eq!(stats.median_percentage, 10.0);
        assert_eq!(stats.total_nitrogen_ingredients, 2.0);
        assert_eq!(stats.counts_by_brand, BTreeMap::from([("A".to_string(), 1)]));
    }

    #[test]
    fn apply_before_load_is_a_no_op() {
        let mut controller = FilterController::default();
        controller.apply_filters(&FilterInputs::default());
        assert!(controller.view().table().rows().is_empty());
        assert!(controller.view().chart().current().is_none());
    }

    #[test]
    fn reset_before_load_clears_inputs_only() {
        let mut controller = FilterController::default();
        let mut inputs = FilterInputs::default();
        inputs.name_search = "foo".into();
        controller.reset_filters(&mut inputs);
        assert_eq!(inputs, FilterInputs::default());
        assert!(controller.view().chart().current().is_none());
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let mut controller = loaded();
        let mut inputs = FilterInputs::default();
        inputs.name_search = "a".into();
        inputs.set_low(50.0);

        controller.apply_filters(&inputs);
        let once = visible(controller.view());
        controller.apply_filters(&inputs);
        assert_eq!(visible(controller.view()), once);
        assert_eq!(shown_names(&controller), ["Bar", "ACME Fertilizer"]);
    }

    #[test]
    fn reset_restores_initial_render() {
        let mut controller = loaded();
        let initial = visible(controller.view());

        let mut inputs = FilterInputs::default();
        inputs.toggle(Facet::Category, "Y");
        controller.apply_filters(&inputs);
        inputs.set_high(5.0);
        controller.apply_filters(&inputs);
        assert!(shown_names(&controller).is_empty());

        controller.reset_filters(&mut inputs);
        assert_eq!(inputs, FilterInputs::default());
        assert_eq!(visible(controller.view()), initial);
        assert_eq!(controller.view().chart().live_instances(), 1);
    }

    #[test]
    fn filtering_leaves_options_and_dataset_untouched() {
        let mut controller = loaded();
        let mut inputs = FilterInputs::default();
        inputs.toggle(Facet::Brand, "A");
        controller.apply_filters(&inputs);

        assert_eq!(controller.store().brand_options(), ["A", "B"]);
        assert_eq!(controller.store().category_options(), ["X", "Y"]);
        assert_eq!(controller.store().len(), 3);
    }
}
