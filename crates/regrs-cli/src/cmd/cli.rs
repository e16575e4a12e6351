use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::{
    Action, Columns as ColumnsCfg, Config, Fit as FitCfg, List as ListCfg,
};

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] => Ok(*b),
        [b'\\', b't'] => Ok(b'\t'),
        _ => Err(format!("delimiter must be a single byte, got '{s}'")),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "regrs",
    about = "Two-variable linear regression over delimited datasets",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Field delimiter (single byte; \t for tabs)
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "BYTE",
        value_parser = parse_delimiter,
        default_value = ",",
        global = true
    )]
    pub delimiter: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List candidate dataset files
    List(ListArgs),

    /// Show the column headers of a dataset
    Columns(ColumnsArgs),

    /// Fit a line between two columns and evaluate it
    Fit(FitArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory or glob pattern to search (quote the pattern)
    #[arg(value_hint = ValueHint::AnyPath, default_value = "data")]
    pub path: String,
}

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    /// Dataset file
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct FitArgs {
    /// Dataset file
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Column index of the inputs (x)
    #[arg(short = 'x', long = "x-col", value_name = "COL")]
    pub x_col: usize,

    /// Column index of the outputs (y)
    #[arg(short = 'y', long = "y-col", value_name = "COL")]
    pub y_col: usize,

    /// Input value(s) to evaluate the fitted line at
    #[arg(
        short = 'p',
        long = "predict",
        value_name = "VALUE",
        num_args = 1..,
        allow_negative_numbers = true
    )]
    pub predict: Vec<f64>,

    /// Emit the fit report as JSON
    #[arg(long = "json")]
    pub json: bool,
}

// -------- Map CLI -> Config/Action types --------

impl Cli {
    pub fn into_config(self) -> Config {
        let delimiter = self.delimiter;

        match self.command {
            Commands::List(args) => Config {
                delimiter,
                action: Action::List(ListCfg { path: args.path }),
            },

            Commands::Columns(args) => Config {
                delimiter,
                action: Action::Columns(ColumnsCfg { input: args.input }),
            },

            Commands::Fit(args) => Config {
                delimiter,
                action: Action::Fit(FitCfg {
                    input: args.input,
                    x_col: args.x_col,
                    y_col: args.y_col,
                    predict: args.predict,
                    json: args.json,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_delimiter;

    #[test]
    fn test_parse_delimiter_comma() {
        assert_eq!(parse_delimiter(","), Ok(b','));
    }
    #[test]
    fn test_parse_delimiter_tab_escape() {
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
    }
    #[test]
    fn test_parse_delimiter_too_long() {
        assert!(parse_delimiter("ab").is_err());
    }
}
