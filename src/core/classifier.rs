use crate::domain::model::{Classification, Label};
use crate::domain::ports::{DigitOrMultiple, Predicate};
use crate::utils::error::Result;
use crate::utils::validation::validate_count;

/// Stateless classifier holding the fixed "three" and "five" rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    three: DigitOrMultiple,
    five: DigitOrMultiple,
}

impl Classifier {
    pub const fn new() -> Self {
        Self {
            three: DigitOrMultiple::THREE,
            five: DigitOrMultiple::FIVE,
        }
    }

    pub fn classify(&self, n: i64) -> Classification {
        let has_three = self.three.matches(n);
        let has_five = self.five.matches(n);

        // Both-first: checking "five" alone first would hide FizzBuzz.
        let result = if has_three && has_five {
            Classification::Label(Label::FizzBuzz)
        } else if has_three {
            Classification::Label(Label::Fizz)
        } else if has_five {
            Classification::Label(Label::Buzz)
        } else {
            Classification::Number(n)
        };

        tracing::trace!(n, %result, "classified");
        result
    }

    /// Lazily yields `classify(1) ..= classify(count)`.
    pub fn iter(&self, count: usize) -> impl ExactSizeIterator<Item = Classification> {
        let classifier = *self;
        (0..count).map(move |i| classifier.classify(i as i64 + 1))
    }

    pub fn classify_range(&self, count: usize) -> Vec<Classification> {
        tracing::debug!(count, "classifying range");
        self.iter(count).collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn classify(n: i64) -> String {
    Classifier::new().classify(n).to_string()
}

pub fn classify_range(count: usize) -> Vec<String> {
    Classifier::new()
        .classify_range(count)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Signed variant of [`classify_range`]; negative counts are rejected.
pub fn try_classify_range(count: i64) -> Result<Vec<String>> {
    let count = validate_count("count", count).inspect_err(|e| {
        tracing::warn!("Rejected range request: {}", e);
    })?;
    Ok(classify_range(count))
}
