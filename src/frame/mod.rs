//! `Frame`: a minimal column-oriented table with nullable cells.
//!
//! The pipeline's tables are small and heterogeneous (numeric IDs next to
//! genre/director strings, with holes from the raw interaction feed), so
//! cells are a three-way `Value` rather than plain floats. Loading covers
//! the two on-disk shapes the pipeline uses: record-oriented JSON arrays
//! and flat CSV with a header row.

mod io;

use std::collections::HashMap;

use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (JSON null, absent key, or empty CSV cell).
    Null,
    /// Numeric value. All numbers are carried as f64.
    Num(f64),
    /// String value.
    Str(String),
}

impl Value {
    /// Returns true for `Value::Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the numeric content, if any.
    #[must_use]
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Canonical string form used for join/group keys and CSV cells.
    ///
    /// Integral floats render without a fractional part so that a key
    /// loaded from JSON (`42`) matches the same key re-read from CSV.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Num(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Value::Str(s) => s.clone(),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// A table of named, equal-length, nullable columns.
///
/// # Examples
///
/// ```
/// use recomendar::frame::{Frame, Value};
///
/// let frame = Frame::new(vec![
///     ("userId".to_string(), vec![Value::Num(1.0), Value::Num(2.0)]),
///     ("genre".to_string(), vec![Value::from("drama"), Value::Null]),
/// ]).expect("columns have equal length");
/// assert_eq!(frame.shape(), (2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Frame {
    columns: Vec<(String, Vec<Value>)>,
    n_rows: usize,
}

impl Frame {
    /// Creates a new `Frame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if columns are empty, have different lengths, or
    /// names are duplicated or blank.
    pub fn new(columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        if columns.is_empty() {
            return Err("Frame must have at least one column".into());
        }

        let n_rows = columns[0].1.len();
        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err("All columns must have the same length".into());
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err("Duplicate column names not allowed".into());
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns true if the named column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Returns a column's cells by name.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&[Value]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| RecomendarError::missing_column(name, "frame"))
    }

    /// Selects columns by name, returning a new `Frame`.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if any name doesn't exist.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let mut selected = Vec::with_capacity(names.len());
        for &name in names {
            let col = self.column(name)?;
            selected.push((name.to_string(), col.to_vec()));
        }
        Self::new(selected)
    }

    /// Adds a new column.
    ///
    /// # Errors
    ///
    /// Returns an error if the length doesn't match or the name exists.
    pub fn add_column(&mut self, name: String, data: Vec<Value>) -> Result<()> {
        if data.len() != self.n_rows {
            return Err("Column length must match existing rows".into());
        }
        if self.has_column(&name) {
            return Err("Column name already exists".into());
        }
        if name.is_empty() {
            return Err("Column name cannot be empty".into());
        }
        self.columns.push((name, data));
        Ok(())
    }

    /// Replaces every null cell with the given numeric default, in place.
    ///
    /// Mirrors the prepare stage's fill-missing-values step: after this
    /// call no column loaded so far contains `Value::Null`.
    pub fn fill_null(&mut self, default: f64) {
        for (_, col) in &mut self.columns {
            for cell in col.iter_mut() {
                if cell.is_null() {
                    *cell = Value::Num(default);
                }
            }
        }
    }

    /// Attaches a per-key row count as a new column.
    ///
    /// For each row, the new column holds the number of rows whose `key`
    /// column carries the same value (the per-user interaction count when
    /// keyed on `userId`).
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if the key column doesn't exist, or an
    /// error if the count column name is already taken.
    pub fn attach_group_count(&mut self, key: &str, count_name: &str) -> Result<()> {
        let key_col = self.column(key)?;

        let mut counts: HashMap<String, u64> = HashMap::new();
        for cell in key_col {
            *counts.entry(cell.key()).or_insert(0) += 1;
        }

        let col: Vec<Value> = key_col
            .iter()
            .map(|cell| Value::Num(counts[&cell.key()] as f64))
            .collect();

        self.add_column(count_name.to_string(), col)
    }

    /// Left-joins another frame on a shared key column.
    ///
    /// Every row of `self` appears exactly once in the output. The first
    /// matching row of `other` (by the key column) supplies the joined
    /// cells; rows with no match keep nulls in the joined columns. A
    /// non-key column name that exists on both sides gets a `_y` suffix on
    /// the joined side.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if either side lacks the key column.
    pub fn left_join(&self, other: &Frame, on: &str) -> Result<Frame> {
        let left_keys = self.column(on)?;
        let right_keys = other.column(on)?;

        // First occurrence wins, matching a unique-key reference table.
        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, cell) in right_keys.iter().enumerate() {
            index.entry(cell.key()).or_insert(i);
        }

        let mut columns = self.columns.clone();
        for (name, col) in &other.columns {
            if name == on {
                continue;
            }
            let out_name = if self.has_column(name) {
                format!("{name}_y")
            } else {
                name.clone()
            };
            let joined: Vec<Value> = left_keys
                .iter()
                .map(|cell| match index.get(&cell.key()) {
                    Some(&i) => col[i].clone(),
                    None => Value::Null,
                })
                .collect();
            columns.push((out_name, joined));
        }

        Frame::new(columns)
    }

    /// Keeps only rows whose `column` cell equals the given key string.
    ///
    /// Comparison uses the canonical `Value::key` form, so `42` matches
    /// whether the column was loaded from JSON or CSV.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if the column doesn't exist.
    pub fn filter_key_eq(&self, column: &str, key: &str) -> Result<Frame> {
        let col = self.column(column)?;
        let keep: Vec<usize> = col
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.key() == key)
            .map(|(i, _)| i)
            .collect();

        let columns = self
            .columns
            .iter()
            .map(|(name, cells)| {
                let filtered: Vec<Value> = keep.iter().map(|&i| cells[i].clone()).collect();
                (name.clone(), filtered)
            })
            .collect();

        // Frame::new rejects zero columns, not zero rows, so an empty
        // filter result is representable.
        Frame::new(columns)
    }

    /// Extracts a numeric column as `u32` identifiers.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if absent, or an error if a cell is not a
    /// non-negative number.
    pub fn column_ids(&self, name: &str) -> Result<Vec<u32>> {
        let col = self.column(name)?;
        col.iter()
            .map(|cell| match cell.as_num() {
                Some(n) if n >= 0.0 && n.fract() == 0.0 => Ok(n as u32),
                _ => Err(RecomendarError::Other(format!(
                    "column '{name}' contains a non-identifier cell: {cell:?}"
                ))),
            })
            .collect()
    }

    /// Builds a feature matrix from the named columns.
    ///
    /// Numeric cells pass through as f32. String cells are ordinal-encoded
    /// per column in first-seen order, which is deterministic for a given
    /// table. Nulls encode as 0.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if any named column doesn't exist.
    pub fn to_feature_matrix(&self, names: &[&str]) -> Result<Matrix> {
        let mut encoded: Vec<Vec<f32>> = Vec::with_capacity(names.len());
        for &name in names {
            let col = self.column(name)?;
            let mut codes: HashMap<&str, f32> = HashMap::new();
            let mut out = Vec::with_capacity(col.len());
            for cell in col {
                let v = match cell {
                    Value::Num(n) => *n as f32,
                    Value::Null => 0.0,
                    Value::Str(s) => {
                        let next = codes.len() as f32;
                        *codes.entry(s.as_str()).or_insert(next)
                    }
                };
                out.push(v);
            }
            encoded.push(out);
        }

        let rows = self.n_rows;
        let cols = names.len();
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in encoded.iter() {
                data.push(c[r]);
            }
        }

        Matrix::from_vec(rows, cols, data)
            .map_err(|e| RecomendarError::Other(e.to_string()))
    }
}
