use serde::{Serialize, Serializer};
use std::fmt;

/// One of the three fixed labels a number can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    Fizz,
    Buzz,
    FizzBuzz,
}

impl Label {
    pub const FIZZ: &'static str = "Fizz";
    pub const BUZZ: &'static str = "Buzz";
    pub const FIZZBUZZ: &'static str = "FizzBuzz";

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fizz => Self::FIZZ,
            Label::Buzz => Self::BUZZ,
            Label::FizzBuzz => Self::FIZZBUZZ,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a single number: a label, or the number itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Label(Label),
    Number(i64),
}

impl Classification {
    pub fn is_label(&self) -> bool {
        matches!(self, Classification::Label(_))
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            Classification::Label(label) => Some(*label),
            Classification::Number(_) => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Label(label) => label.fmt(f),
            Classification::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<Label> for Classification {
    fn from(label: Label) -> Self {
        Classification::Label(label)
    }
}

// Serialized as the same string `Display` renders.
impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_strings() {
        assert_eq!(Label::Fizz.to_string(), "Fizz");
        assert_eq!(Label::Buzz.to_string(), "Buzz");
        assert_eq!(Label::FizzBuzz.to_string(), "FizzBuzz");
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(Classification::Number(7).to_string(), "7");
        assert_eq!(Classification::Number(-7).to_string(), "-7");
        assert_eq!(Classification::from(Label::Buzz).to_string(), Label::BUZZ);
    }

    #[test]
    fn test_classification_accessors() {
        let fizz = Classification::Label(Label::Fizz);
        assert!(fizz.is_label());
        assert_eq!(fizz.label(), Some(Label::Fizz));

        let number = Classification::Number(4);
        assert!(!number.is_label());
        assert_eq!(number.label(), None);
    }
}
