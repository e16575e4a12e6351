pub mod linfit;

pub use linfit::{predict_at, LinearFit};
