use regrs_core::fit::LinearFit;
use regrs_core::stats::FitError;
use regrs_core::table::{LoadError, Table};

use glob::glob;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug)]
pub struct Config {
    pub delimiter: u8,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    List(List),
    Columns(Columns),
    Fit(Fit),
}

#[derive(Debug, Clone)]
pub struct List {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct Columns {
    pub input: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Fit {
    pub input: PathBuf,
    pub x_col: usize,
    pub y_col: usize,
    pub predict: Vec<f64>,
    pub json: bool,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Fit(#[from] FitError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Msg(String),
}

/* =================== Fit report (--json) =================== */

#[derive(Debug, Serialize)]
struct FitReport<'a> {
    input: String,
    x_column: String,
    y_column: String,
    #[serde(flatten)]
    fit: &'a LinearFit,
    predictions: Vec<Prediction>,
}

#[derive(Debug, Serialize)]
struct Prediction {
    x: f64,
    y: f64,
}

/* =================== Execution =================== */

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        match &self.action {
            Action::List(l) => self.run_list(l),
            Action::Columns(c) => self.run_columns(c),
            Action::Fit(f) => self.run_fit(f),
        }
    }

    fn run_list(&self, l: &List) -> Result<(), CmdError> {
        let files = resolve_datasets(&l.path)?;
        if files.is_empty() {
            return Err(CmdError::Msg(format!("No dataset files found in {}", l.path)));
        }

        for (index, path) in files.iter().enumerate() {
            println!("[{}]: {}", index, path.display());
        }
        Ok(())
    }

    fn run_columns(&self, c: &Columns) -> Result<(), CmdError> {
        let table = Table::from_path(&c.input, self.delimiter)?;

        for (index, name) in table.headers().iter().enumerate() {
            println!("[{}]: {}", index, name);
        }
        Ok(())
    }

    fn run_fit(&self, f: &Fit) -> Result<(), CmdError> {
        let table = Table::from_path(&f.input, self.delimiter)?;
        let (x, y) = table.xy_columns(f.x_col, f.y_col)?;
        let fit = LinearFit::from_data(&x, &y)?;

        let predictions: Vec<Prediction> =
            f.predict.iter().map(|&x| Prediction { x, y: fit.predict(x) }).collect();

        if f.json {
            let report = FitReport {
                input: f.input.display().to_string(),
                x_column: table.headers().get(f.x_col).unwrap_or("").to_string(),
                y_column: table.headers().get(f.y_col).unwrap_or("").to_string(),
                fit: &fit,
                predictions,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{}", fit);
        for p in &predictions {
            println!("x = {} -> y = {}", p.x, p.y);
        }
        Ok(())
    }
}

/// Expand `path` into dataset files: globs with wildcards, directories via
/// read_dir, anything else taken as a literal file path.
fn resolve_datasets(path: &str) -> Result<Vec<PathBuf>, CmdError> {
    let mut out = Vec::new();

    if path.contains('*') || path.contains('?') || path.contains('[') {
        match glob(path) {
            Ok(paths) => {
                for path in paths.filter_map(Result::ok) {
                    out.push(path);
                }
            },
            Err(e) => {
                return Err(CmdError::Msg(format!("Invalid glob '{}': {}", path, e)));
            },
        }
    } else {
        let meta = fs::metadata(path)?;
        if meta.is_dir() {
            for entry in fs::read_dir(path)? {
                let entry = entry?;
                if entry.file_type()?.is_file() {
                    out.push(entry.path());
                }
            }
        } else {
            out.push(PathBuf::from(path));
        }
    }

    out.sort();
    Ok(out)
}
