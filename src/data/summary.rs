use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use super::model::Product;

// ---------------------------------------------------------------------------
// SummaryStatistics
// ---------------------------------------------------------------------------

/// Aggregates over a subset of products. Recomputed on every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStatistics {
    pub total_count: usize,
    pub average_percentage: f64,
    pub median_percentage: f64,
    pub total_nitrogen_ingredients: f64,
    /// Only brands present in the subset appear here.
    pub counts_by_brand: BTreeMap<String, usize>,
}

/// Compute [`SummaryStatistics`] for `records`. Empty input yields zeros.
pub fn summarize<R: Borrow<Product>>(records: &[R]) -> SummaryStatistics {
    let percentages: Vec<f64> = records
        .iter()
        .map(|r| r.borrow().nitrogen_percentage)
        .collect();

    let mut counts_by_brand = BTreeMap::new();
    for r in records {
        *counts_by_brand.entry(r.borrow().brand.clone()).or_insert(0) += 1;
    }

    SummaryStatistics {
        total_count: records.len(),
        average_percentage: mean(&percentages),
        median_percentage: median(&percentages),
        total_nitrogen_ingredients: records
            .iter()
            .map(|r| r.borrow().nitrogen_ingredient_count)
            .sum(),
        counts_by_brand,
    }
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value (odd length) or mean of the two middle values (even length),
/// 0 for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Fixed two-decimal percentage with a `.` separator, e.g. `12.50%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

impl SummaryStatistics {
    /// `Brand: n` entries joined by `, `.
    pub fn brands_summary(&self) -> String {
        self.counts_by_brand
            .iter()
            .map(|(brand, count)| format!("{brand}: {count}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Label / value pairs in display order.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Products", self.total_count.to_string()),
            (
                "Average Nitrogen Percentage",
                format_percentage(self.average_percentage),
            ),
            (
                "Total Nitrogen Ingredients",
                self.total_nitrogen_ingredients.to_string(),
            ),
            (
                "Median Nitrogen Percentage",
                format_percentage(self.median_percentage),
            ),
            ("Products per Brand", self.brands_summary()),
        ]
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.summary_lines() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_all_zero() {
        let stats = summarize::<Product>(&[]);
        assert_eq!(
            stats,
            SummaryStatistics {
                total_count: 0,
                average_percentage: 0.0,
                median_percentage: 0.0,
                total_nitrogen_ingredients: 0.0,
                counts_by_brand: BTreeMap::new(),
            }
        );
        assert!(!stats.average_percentage.is_nan());
    }

    #[test]
    fn single_record_summary() {
        let stats = summarize::<Product>(&[Product::new("A", "X", "Foo", 10.0, 2.0)]);
        assert_eq!(stats.total_count, 1);
        assert_eq!(stats.average_percentage, 10.0);
        assert_eq!(stats.median_percentage, 10.0);
        assert_eq!(stats.total_nitrogen_ingredients, 2.0);
        assert_eq!(stats.counts_by_brand, BTreeMap::from([("A".to_string(), 1)]));
    }

    #[test]
    fn median_odd_length_takes_middle_after_sort() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
        assert_eq!(median(&[42.0]), 42.0);
    }

    #[test]
    fn median_even_length_averages_middle_pair() {
        assert_eq!(median(&[40.0, 10.0, 30.0, 20.0]), 25.0);
        assert_eq!(median(&[1.0, 2.0]), 1.5);
    }

    #[test]
    fn counts_only_brands_present() {
        let stats = summarize::<Product>(&[
            Product::new("B", "Y", "b1", 50.0, 1.0),
            Product::new("A", "X", "a1", 30.0, 2.0),
            Product::new("B", "Y", "b2", 70.0, 3.0),
        ]);
        assert_eq!(
            stats.counts_by_brand,
            BTreeMap::from([("A".to_string(), 1), ("B".to_string(), 2)])
        );
        assert_eq!(stats.average_percentage, 50.0);
        assert_eq!(stats.total_nitrogen_ingredients, 6.0);
    }

    #[test]
    fn text_uses_two_decimals() {
        let stats = summarize::<Product>(&[
            Product::new("A", "X", "a", 10.0, 1.0),
            Product::new("B", "X", "b", 12.5, 4.0),
            Product::new("B", "X", "c", 20.0, 0.0),
        ]);
        let text = stats.to_string();
        assert!(text.contains("Total Products: 3\n"));
        assert!(text.contains("Average Nitrogen Percentage: 14.17%\n"));
        assert!(text.contains("Total Nitrogen Ingredients: 5\n"));
        assert!(text.contains("Median Nitrogen Percentage: 12.50%\n"));
        assert!(text.contains("Products per Brand: A: 1, B: 2\n"));
    }

    #[test]
    fn empty_summary_text_is_zeroed() {
        let text = summarize::<Product>(&[]).to_string();
        assert!(text.contains("Average Nitrogen Percentage: 0.00%"));
        assert!(text.contains("Products per Brand: \n"));
    }
}
