use std::collections::BTreeSet;
use std::sync::Arc;

use super::model::Product;

// ---------------------------------------------------------------------------
// FilterCriteria – the user's constraints, combined with AND
// ---------------------------------------------------------------------------

pub const PERCENTAGE_MIN: f64 = 0.0;
pub const PERCENTAGE_MAX: f64 = 100.0;

/// Filter constraints. Empty sets and an empty substring mean "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub brands: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub name_substring: String,
    /// Inclusive `(low, high)` bounds on the nitrogen percentage.
    pub percentage_range: (f64, f64),
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            brands: BTreeSet::new(),
            categories: BTreeSet::new(),
            name_substring: String::new(),
            percentage_range: (PERCENTAGE_MIN, PERCENTAGE_MAX),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterPredicate
// ---------------------------------------------------------------------------

/// A compiled [`FilterCriteria`]. The name needle is lower-cased once here.
#[derive(Debug, Clone)]
pub struct FilterPredicate {
    brands: BTreeSet<String>,
    categories: BTreeSet<String>,
    needle: String,
    low: f64,
    high: f64,
}

/// Compose the brand, category, name and percentage tests into one predicate.
pub fn build_predicate(criteria: &FilterCriteria) -> FilterPredicate {
    let (low, high) = criteria.percentage_range;
    FilterPredicate {
        brands: criteria.brands.clone(),
        categories: criteria.categories.clone(),
        needle: criteria.name_substring.to_lowercase(),
        low,
        high,
    }
}

impl FilterPredicate {
    pub fn matches(&self, product: &Product) -> bool {
        self.brand_matches(product)
            && self.category_matches(product)
            && self.name_matches(product)
            && self.percentage_matches(product)
    }

    fn brand_matches(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.contains(&product.brand)
    }

    fn category_matches(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    fn name_matches(&self, product: &Product) -> bool {
        self.needle.is_empty() || product.name.to_lowercase().contains(&self.needle)
    }

    /// Inclusive on both ends; an inverted range matches nothing.
    fn percentage_matches(&self, product: &Product) -> bool {
        self.low <= product.nitrogen_percentage && product.nitrogen_percentage <= self.high
    }
}

/// Return the products passing `predicate`, in source order.
pub fn filter_records(records: &[Arc<Product>], predicate: &FilterPredicate) -> Vec<Arc<Product>> {
    records
        .iter()
        .filter(|p| predicate.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Arc<Product>> {
        vec![
            Arc::new(Product::new("A", "X", "Foo", 10.0, 2.0)),
            Arc::new(Product::new("B", "Y", "Bar", 90.0, 4.0)),
            Arc::new(Product::new("Acme", "X", "ACME Fertilizer", 100.0, 1.0)),
            Arc::new(Product::new("B", "Z", "Edge", 25.0, 0.0)),
        ]
    }

    fn names(records: &[Arc<Product>]) -> Vec<&str> {
        records.iter().map(|p| p.name.as_str()).collect()
    }

    fn run(criteria: &FilterCriteria) -> Vec<Arc<Product>> {
        filter_records(&dataset(), &build_predicate(criteria))
    }

    #[test]
    fn default_criteria_keep_everything_in_order() {
        let all = dataset();
        let kept = filter_records(&all, &build_predicate(&FilterCriteria::default()));
        assert_eq!(kept, all);
    }

    #[test]
    fn brand_filter_selects_members_only() {
        let criteria = FilterCriteria {
            brands: BTreeSet::from(["A".to_string()]),
            ..Default::default()
        };
        assert_eq!(names(&run(&criteria)), ["Foo"]);
    }

    #[test]
    fn category_and_brand_combine_with_and() {
        let criteria = FilterCriteria {
            brands: BTreeSet::from(["B".to_string(), "Acme".to_string()]),
            categories: BTreeSet::from(["X".to_string(), "Z".to_string()]),
            ..Default::default()
        };
        assert_eq!(names(&run(&criteria)), ["ACME Fertilizer", "Edge"]);
    }

    #[test]
    fn name_search_ignores_case() {
        let criteria = FilterCriteria {
            name_substring: "acme".into(),
            ..Default::default()
        };
        assert_eq!(names(&run(&criteria)), ["ACME Fertilizer"]);

        let criteria = FilterCriteria {
            name_substring: "bAR".into(),
            ..Default::default()
        };
        assert_eq!(names(&run(&criteria)), ["Bar"]);
    }

    #[test]
    fn percentage_bounds_are_inclusive() {
        assert!(names(&run(&FilterCriteria::default())).contains(&"ACME Fertilizer"));

        let criteria = FilterCriteria {
            percentage_range: (25.0, 50.0),
            ..Default::default()
        };
        assert_eq!(names(&run(&criteria)), ["Edge"]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let criteria = FilterCriteria {
            percentage_range: (60.0, 20.0),
            ..Default::default()
        };
        assert!(run(&criteria).is_empty());
    }

    #[test]
    fn equal_criteria_give_equal_results() {
        let criteria = FilterCriteria {
            categories: BTreeSet::from(["X".to_string()]),
            percentage_range: (5.0, 95.0),
            ..Default::default()
        };
        assert_eq!(run(&criteria), run(&criteria.clone()));
    }

    #[test]
    fn filtered_view_shares_records_with_dataset() {
        let all = dataset();
        let kept = filter_records(&all, &build_predicate(&FilterCriteria::default()));
        assert!(Arc::ptr_eq(&all[0], &kept[0]));
    }
}
