//! CSV output: one file per category
//!
//! Each category's products are written to `<label>.csv` with a fixed
//! header, overwriting any previous run's file.

use indexmap::IndexMap;
use std::path::Path;

use crate::{catalog::Category, error::Result, product::Product};

/// Write one CSV report per category into the current working directory
pub fn write_reports(results: &IndexMap<Category, Vec<Product>>) -> Result<()> {
    write_reports_in(Path::new("."), results)
}

/// Write one CSV report per category into the given directory
pub fn write_reports_in(dir: &Path, results: &IndexMap<Category, Vec<Product>>) -> Result<()> {
    for (category, products) in results {
        let path = dir.join(format!("{}.csv", category.label()));

        // The header is written explicitly so an empty category still
        // produces a header-only file.
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(&path)?;
        writer.write_record(Product::FIELDS)?;
        for product in products {
            writer.serialize(product)?;
        }
        writer.flush()?;

        log::info!("Wrote {} rows to {}", products.len(), path.display());
    }

    Ok(())
}
