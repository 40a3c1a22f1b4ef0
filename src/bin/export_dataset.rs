//! Headless export of the filtered Iris records.
//!
//! ```text
//! export-dataset <All|Setosa|Versicolor|Virginica> <output.csv|.json|.parquet>
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use iris_dash::data::{self, export};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(selection), Some(output)) = (args.next(), args.next()) else {
        bail!("usage: export-dataset <All|Setosa|Versicolor|Virginica> <output.csv|.json|.parquet>");
    };
    let output = PathBuf::from(output);

    let dataset = data::load().context("loading bundled Iris dataset")?;
    let view = data::filter_by_label(dataset, &selection)?;
    export::write_view(&view, &output)
        .with_context(|| format!("exporting to {}", output.display()))?;

    log::info!(
        "Exported {} {} records to {}",
        view.count(),
        view.selection,
        output.display()
    );
    println!("Wrote {} records to {}", view.count(), output.display());
    Ok(())
}
