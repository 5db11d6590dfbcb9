//! Naming parameters and their validation

use thiserror::Error;

/// Smallest sequence number a batch may start at
pub const MIN_START_NUMBER: u64 = 1;

/// Allowed range for the zero-padded digit width
pub const DIGIT_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 1..=6;

/// Rejected naming input. Raised before any file system access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter valid numbers")]
    NotANumber,

    #[error("Start number must be at least 1")]
    StartTooSmall,

    #[error("Digit count must be between 1 and 6")]
    DigitsOutOfRange,

    #[error("Prefix must not be empty")]
    EmptyPrefix,
}

/// Validated parameters for generating `<prefix>_<NNN><ext>` names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingParameters {
    prefix: String,
    start_number: u64,
    digit_width: usize,
}

impl NamingParameters {
    /// Validate already-typed values
    pub fn new(prefix: &str, start_number: i64, digit_width: i64) -> Result<Self, ValidationError> {
        if start_number < MIN_START_NUMBER as i64 {
            return Err(ValidationError::StartTooSmall);
        }

        let digit_width = usize::try_from(digit_width)
            .ok()
            .filter(|w| DIGIT_WIDTH_RANGE.contains(w))
            .ok_or(ValidationError::DigitsOutOfRange)?;

        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(ValidationError::EmptyPrefix);
        }

        Ok(Self {
            prefix: prefix.to_string(),
            start_number: start_number as u64,
            digit_width,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn start_number(&self) -> u64 {
        self.start_number
    }

    pub fn digit_width(&self) -> usize {
        self.digit_width
    }

    /// Sequence number for the file at `index` in list order
    pub fn number_at(&self, index: usize) -> u64 {
        self.start_number + index as u64
    }

    /// Target name for the file at `index`, keeping `extension` verbatim.
    /// The width is a floor: numbers wider than it are never truncated.
    pub fn name_at(&self, index: usize, extension: &str) -> String {
        format!(
            "{}_{:0width$}{}",
            self.prefix,
            self.number_at(index),
            extension,
            width = self.digit_width
        )
    }
}

/// Parse raw form values into [`NamingParameters`].
///
/// Checks run in a fixed order: both numbers parse, start number,
/// digit width, then the trimmed prefix.
pub fn validate(
    prefix_raw: &str,
    start_num_raw: &str,
    digits_raw: &str,
) -> Result<NamingParameters, ValidationError> {
    let start_number = parse_int(start_num_raw)?;
    let digit_width = parse_int(digits_raw)?;

    NamingParameters::new(prefix_raw, start_number, digit_width)
}

fn parse_int(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let params = validate("  img ", "1", "2").unwrap();
        assert_eq!(params.prefix(), "img");
        assert_eq!(params.start_number(), 1);
        assert_eq!(params.digit_width(), 2);
    }

    #[test]
    fn test_validate_accepts_whitespace_and_sign() {
        let params = validate("photo", " +7 ", "3\n").unwrap();
        assert_eq!(params.start_number(), 7);
        assert_eq!(params.digit_width(), 3);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(validate("img", "one", "2"), Err(ValidationError::NotANumber));
        assert_eq!(validate("img", "1", "2.5"), Err(ValidationError::NotANumber));
        assert_eq!(validate("img", "", "2"), Err(ValidationError::NotANumber));
        assert_eq!(
            validate("img", "99999999999999999999", "2"),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn test_start_too_small() {
        assert_eq!(validate("img", "0", "2"), Err(ValidationError::StartTooSmall));
        assert_eq!(validate("img", "-4", "2"), Err(ValidationError::StartTooSmall));
    }

    #[test]
    fn test_digits_out_of_range() {
        assert_eq!(validate("img", "1", "0"), Err(ValidationError::DigitsOutOfRange));
        assert_eq!(validate("img", "1", "7"), Err(ValidationError::DigitsOutOfRange));
        assert_eq!(validate("img", "1", "-1"), Err(ValidationError::DigitsOutOfRange));
        assert!(validate("img", "1", "6").is_ok());
    }

    #[test]
    fn test_empty_prefix() {
        assert_eq!(validate("   ", "1", "2"), Err(ValidationError::EmptyPrefix));
        assert_eq!(validate("", "1", "2"), Err(ValidationError::EmptyPrefix));
    }

    #[test]
    fn test_check_order() {
        // Every field is wrong: the number parse is reported first
        assert_eq!(validate(" ", "x", "9"), Err(ValidationError::NotANumber));
        assert_eq!(validate(" ", "0", "9"), Err(ValidationError::StartTooSmall));
        assert_eq!(validate(" ", "1", "9"), Err(ValidationError::DigitsOutOfRange));
    }

    #[test]
    fn test_name_at_width_is_floor() {
        let params = validate("img", "99", "2").unwrap();
        assert_eq!(params.name_at(0, ".jpg"), "img_99.jpg");
        assert_eq!(params.name_at(1, ".jpg"), "img_100.jpg");
    }
}
