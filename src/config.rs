use std::path::PathBuf;

use clap::Parser;

/// Default location of the product table, relative to the working directory.
pub const DEFAULT_DATASET: &str = "dataset/data.xlsx";

/// Filter, summarize and chart a product nitrogen dataset.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Product table to load at startup (.xlsx, .xls, .ods, .csv, .json, .parquet)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,

    /// Worksheet to read from a spreadsheet, by name or 0-based index
    #[arg(long, value_name = "NAME|INDEX")]
    pub sheet: Option<String>,

    /// Start without loading a dataset; pick one with File → Open…
    #[arg(long)]
    pub no_autoload: bool,
}

impl Args {
    /// The dataset to load at startup, if any.
    pub fn startup_dataset(&self) -> Option<PathBuf> {
        (!self.no_autoload).then(|| self.dataset.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bundled_dataset() {
        let args = Args::parse_from(["nitrogen-dashboard"]);
        assert_eq!(args.startup_dataset(), Some(PathBuf::from(DEFAULT_DATASET)));
        assert!(args.sheet.is_none());
    }

    #[test]
    fn no_autoload_disables_startup_dataset() {
        let args = Args::parse_from(["nitrogen-dashboard", "--no-autoload", "--sheet", "1"]);
        assert_eq!(args.startup_dataset(), None);
        assert_eq!(args.sheet.as_deref(), Some("1"));
    }

    #[test]
    fn dataset_path_is_configurable() {
        let args = Args::parse_from(["nitrogen-dashboard", "-d", "products.csv"]);
        assert_eq!(args.dataset, PathBuf::from("products.csv"));
    }
}
