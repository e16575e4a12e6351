pub mod fiterror;
pub mod linreg;
pub mod stats;

pub use fiterror::{FitError, FitResult};
pub use linreg::LinReg;
