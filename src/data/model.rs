use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Column names of the source table
// ---------------------------------------------------------------------------

pub const COL_BRAND: &str = "Brand";
pub const COL_CATEGORY: &str = "Product Category";
pub const COL_NAME: &str = "Product Name";
pub const COL_PERCENTAGE: &str = "Percentage of the nitrogen ingredients in the product";
pub const COL_INGREDIENT_COUNT: &str = "Number of ingredients contains nitrogen";

/// All columns in display order.
pub const COLUMNS: [&str; 5] = [
    COL_BRAND,
    COL_CATEGORY,
    COL_NAME,
    COL_PERCENTAGE,
    COL_INGREDIENT_COUNT,
];

// ---------------------------------------------------------------------------
// CellValue – a single cell of a raw row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as read from a spreadsheet, CSV, JSON or Parquet file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64`. Numeric text is parsed; NaN counts as missing.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            CellValue::String(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Bool(_) | CellValue::Null => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Interpret the value as text. `Null` has no text.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// One row of the source table before conversion: column name → cell.
pub type RawRecord = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Product – one record of the dataset
// ---------------------------------------------------------------------------

/// A single product row.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub brand: String,
    pub category: String,
    pub name: String,
    /// 0–100 by convention, not enforced.
    pub nitrogen_percentage: f64,
    pub nitrogen_ingredient_count: f64,
}

impl Product {
    #[cfg(test)]
    pub fn new(
        brand: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        nitrogen_percentage: f64,
        nitrogen_ingredient_count: f64,
    ) -> Self {
        Self {
            brand: brand.into(),
            category: category.into(),
            name: name.into(),
            nitrogen_percentage,
            nitrogen_ingredient_count,
        }
    }

    /// Build a product from a raw row.
    ///
    /// Missing text cells become `""` and missing or non-numeric numbers become `0.0`,
    /// each coercion logged with the row number.
    pub fn from_raw(raw: &RawRecord, row: usize) -> Self {
        Self {
            brand: text_field(raw, COL_BRAND, row),
            category: text_field(raw, COL_CATEGORY, row),
            name: text_field(raw, COL_NAME, row),
            nitrogen_percentage: number_field(raw, COL_PERCENTAGE, row),
            nitrogen_ingredient_count: number_field(raw, COL_INGREDIENT_COUNT, row),
        }
    }

    /// Cell text for a column, in table order.
    pub fn cell_text(&self, column: usize) -> String {
        match column {
            0 => self.brand.clone(),
            1 => self.category.clone(),
            2 => self.name.clone(),
            3 => self.nitrogen_percentage.to_string(),
            4 => self.nitrogen_ingredient_count.to_string(),
            _ => String::new(),
        }
    }
}

fn text_field(raw: &RawRecord, column: &str, row: usize) -> String {
    match raw.get(column).and_then(CellValue::as_text) {
        Some(text) => text,
        None => {
            log::warn!("Row {row}: missing '{column}', using empty text");
            String::new()
        }
    }
}

fn number_field(raw: &RawRecord, column: &str, row: usize) -> f64 {
    match raw.get(column) {
        Some(cell) => cell.as_f64().unwrap_or_else(|| {
            log::warn!("Row {row}: '{column}' is not a number ({cell:?}), using 0");
            0.0
        }),
        None => {
            log::warn!("Row {row}: missing '{column}', using 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(cells: &[(&str, CellValue)]) -> RawRecord {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn converts_complete_row() {
        let row = raw(&[
            (COL_BRAND, CellValue::String("Acme".into())),
            (COL_CATEGORY, CellValue::String("Lawn".into())),
            (COL_NAME, CellValue::String("Green Up".into())),
            (COL_PERCENTAGE, CellValue::Float(21.5)),
            (COL_INGREDIENT_COUNT, CellValue::Integer(3)),
        ]);
        assert_eq!(
            Product::from_raw(&row, 0),
            Product::new("Acme", "Lawn", "Green Up", 21.5, 3.0)
        );
    }

    #[test]
    fn coerces_missing_and_malformed_cells() {
        let row = raw(&[
            (COL_BRAND, CellValue::Integer(7)),
            (COL_PERCENTAGE, CellValue::String(" 12.5 ".into())),
            (COL_INGREDIENT_COUNT, CellValue::String("many".into())),
        ]);
        let product = Product::from_raw(&row, 4);
        assert_eq!(product.brand, "7");
        assert_eq!(product.category, "");
        assert_eq!(product.name, "");
        assert_eq!(product.nitrogen_percentage, 12.5);
        assert_eq!(product.nitrogen_ingredient_count, 0.0);
    }

    #[test]
    fn nan_is_treated_as_missing() {
        assert_eq!(CellValue::Float(f64::NAN).as_f64(), None);
        assert_eq!(CellValue::Null.as_text(), None);
    }
}
