use std::path::Path;

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, Pokemon};

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning a file into a [`Dataset`].
///
/// Any of these is fatal at startup; at runtime (File → Open…) the caller
/// keeps the previous dataset and shows the message instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {reason}")]
    BadRow { row: usize, reason: String },

    #[error("malformed dataset: {0}")]
    Malformed(String),

    #[error("dataset contains no records")]
    Empty,

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Column names looked up in the source file.
const COL_NAME: &str = "Name";
const COL_TYPE_1: &str = "Type 1";
const COL_TYPE_2: &str = "Type 2";
const COL_TOTAL: &str = "Total";

/// Load a Pokémon dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least `Name`, `Type 1`, `Total`
/// * `.json` – records-oriented array: `[{ "Name": ..., "Type 1": ..., ... }]`
///
/// `Type 2` is optional and may be empty; all other columns are ignored.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let col = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let name_idx = col(COL_NAME)?;
    let type1_idx = col(COL_TYPE_1)?;
    let total_idx = col(COL_TOTAL)?;
    let type2_idx = headers.iter().position(|h| h == COL_TYPE_2);

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let name = record.get(name_idx).unwrap_or("").trim().to_string();
        let primary_type = record.get(type1_idx).unwrap_or("").trim().to_string();

        let total_raw = record.get(total_idx).unwrap_or("").trim();
        let total: i64 = total_raw.parse().map_err(|_| LoadError::BadRow {
            row: row_no,
            reason: format!("'{total_raw}' is not an integer Total"),
        })?;

        let secondary_type = type2_idx
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        records.push(Pokemon {
            name,
            primary_type,
            secondary_type,
            total,
        });
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Name": "Bulbasaur", "Type 1": "Grass", "Type 2": "Poison", "Total": 318 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Malformed("expected top-level JSON array".into()))?;

    let mut records = Vec::with_capacity(rows.len());

    for (row_no, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or_else(|| LoadError::BadRow {
            row: row_no,
            reason: "not a JSON object".into(),
        })?;

        let field_str = |key: &'static str| -> Result<String, LoadError> {
            obj.get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.trim().to_string())
                .ok_or_else(|| LoadError::BadRow {
                    row: row_no,
                    reason: format!("missing or non-string '{key}'"),
                })
        };

        let name = field_str(COL_NAME)?;
        let primary_type = field_str(COL_TYPE_1)?;

        let total = obj
            .get(COL_TOTAL)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| LoadError::BadRow {
                row: row_no,
                reason: format!("missing or non-integer '{COL_TOTAL}'"),
            })?;

        let secondary_type = obj
            .get(COL_TYPE_2)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        records.push(Pokemon {
            name,
            primary_type,
            secondary_type,
            total,
        });
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(Dataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_csv_and_ignores_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "pokemon.csv",
            "#,Name,Type 1,Type 2,Total,HP\n\
             1,Bulbasaur,Grass,Poison,318,45\n\
             4,Charmander,Fire,,309,39\n\
             7,Squirtle,Water,,314,44\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].name, "Bulbasaur");
        assert_eq!(ds.records[0].secondary_type.as_deref(), Some("Poison"));
        assert_eq!(ds.records[1].secondary_type, None);
        assert_eq!(ds.type_names, vec!["Grass", "Fire", "Water"]);
        assert_eq!((ds.total_min, ds.total_max), (309, 318));
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pokemon.csv", "Name,Type 1\nBulbasaur,Grass\n");

        match load_file(&path) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Total"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_total_is_rejected_with_row_number() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "pokemon.csv",
            "Name,Type 1,Total\nBulbasaur,Grass,318\nCharmander,Fire,lots\n",
        );

        match load_file(&path) {
            Err(LoadError::BadRow { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected BadRow, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pokemon.csv", "Name,Type 1,Total\n");
        assert!(matches!(load_file(&path), Err(LoadError::Empty)));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pokemon.parquet", "not parquet");
        assert!(matches!(
            load_file(&path),
            Err(LoadError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn loads_records_oriented_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "pokemon.json",
            r#"[
                { "Name": "Bulbasaur", "Type 1": "Grass", "Type 2": "Poison", "Total": 318 },
                { "Name": "Charmander", "Type 1": "Fire", "Type 2": null, "Total": 309 }
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].name, "Charmander");
        assert_eq!(ds.records[1].secondary_type, None);
        assert_eq!(ds.records[1].total, 309);
    }

    #[test]
    fn json_row_missing_total_reports_row() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "pokemon.json",
            r#"[ { "Name": "Bulbasaur", "Type 1": "Grass" } ]"#,
        );
        match load_file(&path) {
            Err(LoadError::BadRow { row, .. }) => assert_eq!(row, 0),
            other => panic!("expected BadRow, got {other:?}"),
        }
    }
}
