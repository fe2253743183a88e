//! Frame loading and saving: record-oriented JSON and flat CSV.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{RecomendarError, Result};

use super::{Frame, Value};

impl Frame {
    /// Loads a frame from a record-oriented JSON file (an array of flat
    /// objects). The column set is the union of keys across records, in
    /// first-appearance order; a record missing a key contributes a null.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file can't be read, `Serialization` if it is
    /// not a JSON array of objects.
    pub fn from_json_records<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

        let records = json.as_array().ok_or_else(|| {
            RecomendarError::Serialization(format!(
                "{}: expected a top-level JSON array of records",
                path.as_ref().display()
            ))
        })?;

        let mut names: Vec<String> = Vec::new();
        for record in records {
            let obj = record.as_object().ok_or_else(|| {
                RecomendarError::Serialization(format!(
                    "{}: expected every record to be a JSON object",
                    path.as_ref().display()
                ))
            })?;
            for key in obj.keys() {
                if !names.iter().any(|n| n == key) {
                    names.push(key.clone());
                }
            }
        }

        if names.is_empty() {
            return Err(RecomendarError::Serialization(format!(
                "{}: no records with fields",
                path.as_ref().display()
            )));
        }

        let mut columns: Vec<(String, Vec<Value>)> = names
            .into_iter()
            .map(|n| (n, Vec::with_capacity(records.len())))
            .collect();

        for record in records {
            let obj = record.as_object().expect("validated above");
            for (name, col) in &mut columns {
                col.push(match obj.get(name.as_str()) {
                    Some(v) => json_cell(v),
                    None => Value::Null,
                });
            }
        }

        Frame::new(columns)
    }

    /// Loads a frame from a CSV file with a header row.
    ///
    /// Empty cells become nulls, cells that parse as f64 become numbers,
    /// everything else is kept as a string.
    ///
    /// # Errors
    ///
    /// Returns `Csv` on malformed input, `Io` if the file can't be read.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;

        let names: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut columns: Vec<(String, Vec<Value>)> =
            names.into_iter().map(|n| (n, Vec::new())).collect();

        for record in reader.records() {
            let record = record?;
            if record.len() != columns.len() {
                return Err(RecomendarError::Csv(format!(
                    "{}: row has {} cells, header has {}",
                    path.as_ref().display(),
                    record.len(),
                    columns.len()
                )));
            }
            for (cell, (_, col)) in record.iter().zip(columns.iter_mut()) {
                col.push(csv_cell(cell));
            }
        }

        Frame::new(columns)
    }

    /// Writes the frame as CSV with a header row. Nulls become empty
    /// cells, numbers use the canonical key form (integral floats without
    /// a fractional part).
    ///
    /// # Errors
    ///
    /// Returns `Io`/`Csv` on write failure.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;

        writer.write_record(self.column_names())?;
        for row in 0..self.n_rows {
            let cells: Vec<String> = self.columns.iter().map(|(_, c)| c[row].key()).collect();
            writer.write_record(&cells)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn json_cell(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Num),
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Bool(b) => Value::Num(if *b { 1.0 } else { 0.0 }),
        // Nested structures don't occur in the pipeline's inputs.
        other => Value::Str(other.to_string()),
    }
}

fn csv_cell(cell: &str) -> Value {
    if cell.is_empty() {
        Value::Null
    } else if let Ok(n) = cell.parse::<f64>() {
        Value::Num(n)
    } else {
        Value::Str(cell.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_json_records_union_of_keys() {
        let mut tmp = tempfile::NamedTempFile::new().expect("temp");
        write!(
            tmp,
            r#"[{{"userId": 1, "filmId": 10, "rating": 4}},
                {{"userId": 2, "filmId": 11}}]"#
        )
        .expect("write");

        let frame = Frame::from_json_records(tmp.path()).expect("load");
        assert_eq!(frame.shape(), (2, 3));
        assert_eq!(frame.column("rating").expect("rating")[1], Value::Null);
    }

    #[test]
    fn test_json_records_rejects_non_array() {
        let mut tmp = tempfile::NamedTempFile::new().expect("temp");
        write!(tmp, r#"{{"userId": 1}}"#).expect("write");

        let err = Frame::from_json_records(tmp.path());
        assert!(matches!(err, Err(RecomendarError::Serialization(_))));
    }

    #[test]
    fn test_json_missing_file_is_io_error() {
        let err = Frame::from_json_records("/nonexistent/interactionData.json");
        assert!(matches!(err, Err(RecomendarError::Io(_))));
    }

    #[test]
    fn test_csv_round_trip_preserves_nulls() {
        let frame = Frame::new(vec![
            (
                "userId".to_string(),
                vec![Value::Num(1.0), Value::Num(2.0)],
            ),
            ("genre".to_string(), vec![Value::from("drama"), Value::Null]),
        ])
        .expect("frame");

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        frame.to_csv(&path).expect("write");

        let loaded = Frame::from_csv(&path).expect("read");
        assert_eq!(loaded.shape(), (2, 2));
        assert_eq!(loaded.column("userId").expect("ids")[0], Value::Num(1.0));
        assert_eq!(loaded.column("genre").expect("genre")[1], Value::Null);
    }

    #[test]
    fn test_csv_numeric_and_string_cells() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mixed.csv");
        std::fs::write(&path, "filmId,director\n10,kurosawa\n11,tati\n").expect("write");

        let frame = Frame::from_csv(&path).expect("read");
        assert_eq!(frame.column("filmId").expect("ids")[0], Value::Num(10.0));
        assert_eq!(
            frame.column("director").expect("director")[1],
            Value::from("tati")
        );
    }
}
