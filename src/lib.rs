pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::classifier::{classify, classify_range, try_classify_range, Classifier};
pub use domain::model::{Classification, Label};
pub use domain::ports::{DigitOrMultiple, Predicate};
pub use utils::error::{KataError, Result};
