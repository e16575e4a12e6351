use std::fmt;

#[derive(Debug)]
pub enum FitError {
    EmptyData,
    LengthMismatch { len_x: usize, len_y: usize },
    NotEnoughPoints { len: usize, needed: usize },
    NonFiniteData,
    DegenerateX, // no variance in x
    DegenerateY, // no variance in y
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::EmptyData => {
                write!(f, "empty data")
            },
            FitError::LengthMismatch { len_x, len_y } => {
                write!(f, "x and y have different lengths: {len_x} vs {len_y}")
            },
            FitError::NotEnoughPoints { len, needed } => {
                write!(f, "not enough points: got {len}, need at least {needed}")
            },
            FitError::NonFiniteData => {
                write!(f, "data contains NaN or infinite values")
            },
            FitError::DegenerateX => {
                write!(f, "degenerate x: no variance in x")
            },
            FitError::DegenerateY => {
                write!(f, "degenerate y: no variance in y")
            },
        }
    }
}

impl std::error::Error for FitError {}

pub type FitResult<T> = Result<T, FitError>;
