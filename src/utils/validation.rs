use crate::utils::error::{KataError, Result};

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(KataError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Largest range a fallible entry point will build in one call.
pub const MAX_COUNT: i64 = 10_000_000;

/// Checks that a signed count is a usable range length and converts it.
pub fn validate_count(field_name: &str, count: i64) -> Result<usize> {
    validate_range(field_name, count, 0, MAX_COUNT)?;
    usize::try_from(count).map_err(|_| KataError::InvalidArgument {
        field: field_name.to_string(),
        value: count.to_string(),
        reason: "Value does not fit the platform's usize".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count("count", 10).unwrap(), 10);
        assert_eq!(validate_count("count", 0).unwrap(), 0);

        match validate_count("count", -3) {
            Err(KataError::InvalidArgument { field, value, .. }) => {
                assert_eq!(field, "count");
                assert_eq!(value, "-3");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_count_upper_bound() {
        assert_eq!(validate_count("count", MAX_COUNT).unwrap(), MAX_COUNT as usize);
        assert!(validate_count("count", MAX_COUNT + 1).is_err());
        assert!(validate_count("count", i64::MAX).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("count", 5, 0, 10).is_ok());
        assert!(validate_range("count", 11, 0, 10).is_err());
        assert!(validate_range("count", -1, 0, 10).is_err());
    }
}
