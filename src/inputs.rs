use std::collections::BTreeSet;

use crate::data::filter::{FilterCriteria, PERCENTAGE_MAX, PERCENTAGE_MIN};

// ---------------------------------------------------------------------------
// Filter input widgets' state
// ---------------------------------------------------------------------------

/// What the filter widgets currently hold. Read into a [`FilterCriteria`] on apply.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterInputs {
    pub brands: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub name_search: String,
    low: f64,
    high: f64,
}

impl Default for FilterInputs {
    fn default() -> Self {
        Self {
            brands: BTreeSet::new(),
            categories: BTreeSet::new(),
            name_search: String::new(),
            low: PERCENTAGE_MIN,
            high: PERCENTAGE_MAX,
        }
    }
}

/// Which multi-select a toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Brand,
    Category,
}

impl FilterInputs {
    /// Snapshot the widgets as filter criteria.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            brands: self.brands.clone(),
            categories: self.categories.clone(),
            name_substring: self.name_search.clone(),
            percentage_range: (self.low, self.high),
        }
    }

    /// Back to "no constraint" everywhere, range `[0, 100]`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Move the lower handle; the upper one is pushed along so `low <= high` holds.
    pub fn set_low(&mut self, value: f64) {
        self.low = snap(value);
        if self.low > self.high {
            self.high = self.low;
        }
    }

    /// Move the upper handle; the lower one is pushed along so `low <= high` holds.
    pub fn set_high(&mut self, value: f64) {
        self.high = snap(value);
        if self.high < self.low {
            self.low = self.high;
        }
    }

    fn selection_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Brand => &mut self.brands,
            Facet::Category => &mut self.categories,
        }
    }

    pub fn selection(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Brand => &self.brands,
            Facet::Category => &self.categories,
        }
    }

    /// Toggle a single value in a multi-select.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let selected = self.selection_mut(facet);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    /// Select every option of a multi-select.
    pub fn select_all(&mut self, facet: Facet, options: &[String]) {
        *self.selection_mut(facet) = options.iter().cloned().collect();
    }

    /// Deselect everything, i.e. no constraint on that field.
    pub fn select_none(&mut self, facet: Facet) {
        self.selection_mut(facet).clear();
    }
}

/// Clamp to the slider bounds with a step of 1.
fn snap(value: f64) -> f64 {
    value.round().clamp(PERCENTAGE_MIN, PERCENTAGE_MAX)
}
