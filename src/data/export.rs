use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

use super::model::{FilteredView, Measurement, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write the records of a filtered view to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`             – header `Sepal Length,Sepal Width,Petal Length,Petal Width,Species`
/// * `.json`            – `[{ "Sepal Length": 5.1, ..., "Species": "Setosa" }, ...]`
/// * `.parquet` / `.pq` – four Float64 columns plus a Utf8 `Species` column
pub fn write_view(view: &FilteredView, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(view, path),
        "json" => write_json(view, path),
        "parquet" | "pq" => write_parquet(view, path),
        other => bail!("Unsupported export extension: .{other}"),
    }
}

/// One exported row, keyed by the display column names.
#[derive(Debug, Serialize)]
struct ExportRow {
    #[serde(rename = "Sepal Length")]
    sepal_length: f64,
    #[serde(rename = "Sepal Width")]
    sepal_width: f64,
    #[serde(rename = "Petal Length")]
    petal_length: f64,
    #[serde(rename = "Petal Width")]
    petal_width: f64,
    #[serde(rename = "Species")]
    species: &'static str,
}

impl From<&Record> for ExportRow {
    fn from(r: &Record) -> Self {
        ExportRow {
            sepal_length: r.sepal_length,
            sepal_width: r.sepal_width,
            petal_length: r.petal_length,
            petal_width: r.petal_width,
            species: r.species.label(),
        }
    }
}

// ---------------------------------------------------------------------------
// CSV / JSON writers
// ---------------------------------------------------------------------------

fn write_csv(view: &FilteredView, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV file {}", path.display()))?;

    // serialize() only emits the header alongside the first row.
    if view.is_empty() {
        let header: Vec<&str> = Measurement::ALL
            .iter()
            .map(|m| m.display_name())
            .chain(std::iter::once("Species"))
            .collect();
        writer.write_record(&header).context("writing CSV header")?;
    }
    for (row, record) in view.records().iter().enumerate() {
        writer
            .serialize(ExportRow::from(record))
            .with_context(|| format!("writing CSV row {row}"))?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_json(view: &FilteredView, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating JSON file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let rows: Vec<ExportRow> = view.records().iter().map(ExportRow::from).collect();
    serde_json::to_writer_pretty(&mut out, &rows).context("writing JSON")?;
    out.flush().context("flushing JSON file")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

fn write_parquet(view: &FilteredView, path: &Path) -> Result<()> {
    let mut fields: Vec<Field> = Measurement::ALL
        .iter()
        .map(|m| Field::new(m.display_name(), DataType::Float64, false))
        .collect();
    fields.push(Field::new("Species", DataType::Utf8, false));
    let schema = Arc::new(Schema::new(fields));

    let mut columns: Vec<ArrayRef> = Measurement::ALL
        .iter()
        .map(|&m| Arc::new(Float64Array::from(view.values(m))) as ArrayRef)
        .collect();
    let species: Vec<&str> = view.records().iter().map(|r| r.species.label()).collect();
    columns.push(Arc::new(StringArray::from(species)));

    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = File::create(path)
        .with_context(|| format!("creating parquet file {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
