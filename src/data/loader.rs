use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, Float32Array, Float64Array};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Coordinate, CoordinateSet};

pub const LONGITUDE_COLUMN: &str = "longitude";
pub const LATITUDE_COLUMN: &str = "latitude";

// ---------------------------------------------------------------------------
// Resource-level errors
// ---------------------------------------------------------------------------

/// Failure to fetch or parse a whole resource. Individual malformed rows are
/// not errors; they are dropped during coercion and never reported here.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing CSV")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON")]
    Json(#[from] serde_json::Error),

    #[error("expected a top-level JSON array of records")]
    JsonShape,

    #[error("reading Parquet")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("reading Parquet record batch")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("column '{column}' has unsupported type {datatype}")]
    ColumnType {
        column: &'static str,
        datatype: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load accident locations from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `longitude` and `latitude` columns
/// * `.json`    – `[{ "longitude": ..., "latitude": ..., ... }, ...]`
/// * `.parquet` – flat `longitude` / `latitude` float columns
///
/// Rows whose coordinates do not coerce to finite non-zero numbers are
/// silently dropped; accepted rows keep their source order. A resource that
/// cannot be read or parsed at all fails the whole load.
pub fn load_file(path: &Path) -> Result<CoordinateSet, ResourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(ResourceError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the columns; `longitude` and `latitude`
/// hold decimal degrees, all other columns are ignored. The reader runs in
/// flexible mode so a short record counts as a row with missing fields, not
/// as a structural failure.
fn load_csv(path: &Path) -> Result<CoordinateSet, ResourceError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let lon_idx = headers
        .iter()
        .position(|h| h == LONGITUDE_COLUMN)
        .ok_or(ResourceError::MissingColumn(LONGITUDE_COLUMN))?;
    let lat_idx = headers
        .iter()
        .position(|h| h == LATITUDE_COLUMN)
        .ok_or(ResourceError::MissingColumn(LATITUDE_COLUMN))?;

    let mut points = Vec::new();

    for result in reader.records() {
        let record = result?;
        let lon = record.get(lon_idx).unwrap_or("");
        let lat = record.get(lat_idx).unwrap_or("");
        if let Some(coord) = coerce_coordinate(lon, lat) {
            points.push(coord);
        }
    }

    Ok(CoordinateSet::from_points(points))
}

/// Coerce a pair of raw cell values. `None` marks the row as dropped.
fn coerce_coordinate(lon: &str, lat: &str) -> Option<Coordinate> {
    let lon = lon.trim().parse::<f64>().ok()?;
    let lat = lat.trim().parse::<f64>().ok()?;
    Coordinate::validated(lon, lat)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "longitude": -122.45, "latitude": 37.8, "severity": 2 },
///   ...
/// ]
/// ```
///
/// Coordinates may be numbers or numeric strings. Records that are not
/// objects, or whose coordinates do not coerce, are dropped.
fn load_json(path: &Path) -> Result<CoordinateSet, ResourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root.as_array().ok_or(ResourceError::JsonShape)?;

    let mut points = Vec::with_capacity(records.len());

    for rec in records {
        let Some(obj) = rec.as_object() else {
            continue;
        };
        let lon = json_number(obj.get(LONGITUDE_COLUMN));
        let lat = json_number(obj.get(LATITUDE_COLUMN));
        if let (Some(lon), Some(lat)) = (lon, lat) {
            if let Some(coord) = Coordinate::validated(lon, lat) {
                points.push(coord);
            }
        }
    }

    Ok(CoordinateSet::from_points(points))
}

fn json_number(val: Option<&JsonValue>) -> Option<f64> {
    match val? {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat `longitude` / `latitude` columns of type
/// Float64 or Float32. Null cells drop the row; other columns are ignored.
fn load_parquet(path: &Path) -> Result<CoordinateSet, ResourceError> {
    let file = std::fs::File::open(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let mut points = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let lon_idx = schema
            .index_of(LONGITUDE_COLUMN)
            .map_err(|_| ResourceError::MissingColumn(LONGITUDE_COLUMN))?;
        let lat_idx = schema
            .index_of(LATITUDE_COLUMN)
            .map_err(|_| ResourceError::MissingColumn(LATITUDE_COLUMN))?;

        let lon_col = column_as_f64(batch.column(lon_idx), LONGITUDE_COLUMN)?;
        let lat_col = column_as_f64(batch.column(lat_idx), LATITUDE_COLUMN)?;

        for (lon, lat) in lon_col.into_iter().zip(lat_col) {
            if let (Some(lon), Some(lat)) = (lon, lat) {
                if let Some(coord) = Coordinate::validated(lon, lat) {
                    points.push(coord);
                }
            }
        }
    }

    Ok(CoordinateSet::from_points(points))
}

/// Read a whole column as optional `f64` values.
fn column_as_f64(
    col: &Arc<dyn Array>,
    name: &'static str,
) -> Result<Vec<Option<f64>>, ResourceError> {
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.iter().collect())
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.iter().map(|v| v.map(f64::from)).collect())
    } else {
        Err(ResourceError::ColumnType {
            column: name,
            datatype: format!("{:?}", col.data_type()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arrow::array::Float64Array;
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(suffix: &str, contents: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents).unwrap();
        file
    }

    fn load_csv_str(contents: &str) -> Result<CoordinateSet, ResourceError> {
        let file = write_temp(".csv", contents.as_bytes());
        load_file(file.path())
    }

    #[test]
    fn accepts_finite_nonzero_rows_and_drops_the_rest() {
        let set = load_csv_str(
            "longitude,latitude\n\
             -122.45,37.8\n\
             0,37.8\n\
             -122.3,abc\n",
        )
        .unwrap();
        assert_eq!(
            set.as_slice(),
            &[Coordinate {
                longitude: -122.45,
                latitude: 37.8
            }]
        );
    }

    #[test]
    fn preserves_source_order_of_accepted_rows() {
        let set = load_csv_str(
            "longitude,latitude\n\
             1.0,2.0\n\
             ,\n\
             3.0,4.0\n\
             nonsense,5.0\n\
             5.0,6.0\n",
        )
        .unwrap();
        let positions: Vec<[f64; 2]> = set.iter().map(|c| c.position()).collect();
        assert_eq!(positions, vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    }

    #[test]
    fn textual_nan_and_infinity_are_dropped() {
        // `"NaN".parse::<f64>()` succeeds, so the finiteness check has to
        // catch these after coercion.
        let set = load_csv_str(
            "longitude,latitude\n\
             NaN,37.8\n\
             inf,37.8\n\
             -inf,37.8\n\
             -122.45,NaN\n",
        )
        .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn short_records_are_dropped_not_fatal() {
        let set = load_csv_str(
            "id,longitude,latitude\n\
             1,-122.45,37.8\n\
             2,-122.3\n",
        )
        .unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let set = load_csv_str(
            "id,date,longitude,latitude,severity\n\
             7,2024-03-01,-0.1276,51.5072,2\n",
        )
        .unwrap();
        assert_eq!(set.as_slice()[0].position(), [-0.1276, 51.5072]);
    }

    #[test]
    fn empty_table_yields_empty_set() {
        let set = load_csv_str("longitude,latitude\n").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn repeated_loads_are_identical() {
        let file = write_temp(
            ".csv",
            b"longitude,latitude\n-122.45,37.8\n0,0\n-1.5,51.0\n",
        );
        let first = load_file(file.path()).unwrap();
        let second = load_file(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn binary_garbage_is_a_resource_error() {
        let file = write_temp(".csv", &[0xff, 0xfe, 0x00, 0x9f, 0xff, 0xfd]);
        assert!(load_file(file.path()).is_err());
    }

    #[test]
    fn missing_required_column_is_a_resource_error() {
        let err = load_csv_str("lon,lat\n-122.45,37.8\n").unwrap_err();
        assert!(matches!(err, ResourceError::MissingColumn(_)));
    }

    #[test]
    fn unsupported_extension_is_a_resource_error() {
        let file = write_temp(".txt", b"longitude,latitude\n-122.45,37.8\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, ResourceError::UnsupportedExtension(_)));
    }

    #[test]
    fn json_records_load_with_the_same_acceptance_policy() {
        let file = write_temp(
            ".json",
            br#"[
                {"longitude": -122.45, "latitude": 37.8},
                {"longitude": 0, "latitude": 37.8},
                {"longitude": "-122.3", "latitude": "47.6"},
                {"latitude": 37.8},
                "not a record"
            ]"#,
        );
        let set = load_file(file.path()).unwrap();
        let positions: Vec<[f64; 2]> = set.iter().map(|c| c.position()).collect();
        assert_eq!(positions, vec![[-122.45, 37.8], [-122.3, 47.6]]);
    }

    #[test]
    fn json_non_array_document_is_a_resource_error() {
        let file = write_temp(".json", br#"{"longitude": -122.45}"#);
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, ResourceError::JsonShape));
    }

    #[test]
    fn parquet_float_columns_load_and_filter() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(LONGITUDE_COLUMN, DataType::Float64, true),
            Field::new(LATITUDE_COLUMN, DataType::Float64, true),
        ]));
        let lon = Float64Array::from(vec![Some(-122.45), Some(0.0), None, Some(-1.5)]);
        let lat = Float64Array::from(vec![Some(37.8), Some(37.8), Some(40.0), Some(51.0)]);
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(lon), Arc::new(lat)],
        )
        .unwrap();

        let file = tempfile::Builder::new()
            .suffix(".parquet")
            .tempfile()
            .unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let set = load_file(file.path()).unwrap();
        let positions: Vec<[f64; 2]> = set.iter().map(|c| c.position()).collect();
        assert_eq!(positions, vec![[-122.45, 37.8], [-1.5, 51.0]]);
    }
}
