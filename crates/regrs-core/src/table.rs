use csv::StringRecord;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file '{}' is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no data rows in table")]
    EmptyTable,

    #[error("column index {col} out of bounds, table has {n_cols} columns")]
    ColumnOutOfBounds { col: usize, n_cols: usize },

    #[error("row {row}, column {col}: cannot parse '{value}' as a number")]
    Parse { row: usize, col: usize, value: String },
}

/// A delimited text file split into a header record and data rows.
#[derive(Debug, Clone)]
pub struct Table {
    header: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Table, LoadError> {
        let text = String::from_utf8(fs::read(&path)?)
            .map_err(|_| LoadError::NotUtf8 { path: path.as_ref().to_path_buf() })?;
        Table::from_reader(text.as_bytes(), delimiter)
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Table, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header = rdr.headers()?.clone();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            // a file ending in a delimiter run or stray whitespace yields a
            // blank record, which is not a sample
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            rows.push(record);
        }

        if rows.is_empty() {
            return Err(LoadError::EmptyTable);
        }

        Ok(Table { header, rows })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.header
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.header.len()
    }

    /// Extract one column as numbers. Cells that fail to parse are an error,
    /// never a silent zero.
    pub fn numeric_column(&self, col: usize) -> Result<Vec<f64>, LoadError> {
        if col >= self.n_cols() {
            return Err(LoadError::ColumnOutOfBounds { col, n_cols: self.n_cols() });
        }

        let mut out = Vec::with_capacity(self.rows.len());
        for (index, record) in self.rows.iter().enumerate() {
            let raw = record.get(col).unwrap_or("").trim();
            match raw.parse::<f64>() {
                Ok(value) => out.push(value),
                Err(_) => {
                    return Err(LoadError::Parse {
                        row: index + 1,
                        col,
                        value: raw.to_string(),
                    });
                },
            }
        }
        Ok(out)
    }

    pub fn xy_columns(&self, x_col: usize, y_col: usize) -> Result<(Vec<f64>, Vec<f64>), LoadError> {
        Ok((self.numeric_column(x_col)?, self.numeric_column(y_col)?))
    }
}
