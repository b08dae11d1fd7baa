/// A rule deciding whether a number carries one of the labels.
pub trait Predicate: Send + Sync {
    fn matches(&self, n: i64) -> bool;
}

/// Matches numbers that are a multiple of `divisor` or whose decimal digits
/// contain `digit`. The sign is ignored for both checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitOrMultiple {
    pub digit: char,
    pub divisor: i64,
}

impl DigitOrMultiple {
    pub const THREE: DigitOrMultiple = DigitOrMultiple {
        digit: '3',
        divisor: 3,
    };

    pub const FIVE: DigitOrMultiple = DigitOrMultiple {
        digit: '5',
        divisor: 5,
    };

    fn is_multiple(&self, n: i64) -> bool {
        n.rem_euclid(self.divisor) == 0
    }

    fn has_digit(&self, n: i64) -> bool {
        n.unsigned_abs().to_string().contains(self.digit)
    }
}

impl Predicate for DigitOrMultiple {
    fn matches(&self, n: i64) -> bool {
        self.is_multiple(n) || self.has_digit(n)
    }
}
