use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// One output row, serialized with the dataset's column names.
#[derive(Serialize)]
struct ProductRow {
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Product Category")]
    category: String,
    #[serde(rename = "Product Name")]
    name: String,
    #[serde(rename = "Percentage of the nitrogen ingredients in the product")]
    percentage: f64,
    #[serde(rename = "Number of ingredients contains nitrogen")]
    ingredient_count: i64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

fn generate_rows(rng: &mut SimpleRng) -> Vec<ProductRow> {
    let brands = ["GreenGrow", "TerraNova", "Acme Agro", "FieldPro"];
    // (category, typical nitrogen share)
    let categories = [
        ("Lawn Fertilizer", 30.0),
        ("Garden Fertilizer", 12.0),
        ("Compost", 2.5),
        ("Liquid Feed", 8.0),
    ];
    let suffixes = ["Plus", "Max", "Organic", "Rapid", "Slow Release"];

    let mut rows = Vec::new();
    for brand in brands {
        for (category, typical) in categories {
            let variants = 1 + rng.below(3);
            for _ in 0..variants {
                let suffix = suffixes[rng.below(suffixes.len() as u64) as usize];
                let spread = (rng.next_f64() - 0.5) * typical;
                let percentage = ((typical + spread).clamp(0.0, 100.0) * 10.0).round() / 10.0;
                rows.push(ProductRow {
                    brand: brand.to_string(),
                    category: category.to_string(),
                    name: format!("{brand} {category} {suffix}"),
                    percentage,
                    ingredient_count: 1 + rng.below(5) as i64,
                });
            }
        }
    }
    rows
}

fn write_csv(path: &str, rows: &[ProductRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[ProductRow]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Brand", DataType::Utf8, false),
        Field::new("Product Category", DataType::Utf8, false),
        Field::new("Product Name", DataType::Utf8, false),
        Field::new(
            "Percentage of the nitrogen ingredients in the product",
            DataType::Float64,
            false,
        ),
        Field::new("Number of ingredients contains nitrogen", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.brand.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.category.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name.as_str()))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.percentage))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.ingredient_count))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    write_csv("sample_products.csv", &rows)?;
    write_parquet("sample_products.parquet", &rows)?;

    println!(
        "Wrote {} products to sample_products.csv and sample_products.parquet",
        rows.len()
    );
    Ok(())
}
