pub mod classifier;

pub use crate::domain::model::{Classification, Label};
pub use crate::domain::ports::{DigitOrMultiple, Predicate};
pub use crate::utils::error::Result;
