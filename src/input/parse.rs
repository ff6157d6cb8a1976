// Number list parser

use std::fmt;

/// Errors produced while validating a number list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing but whitespace and separators
    Empty,

    /// A token that is not a 64-bit signed integer
    InvalidToken(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Please enter at least one number."),
            ValidationError::InvalidToken(token) => {
                write!(f, "'{}' is not a valid integer.", token)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Split `text` into its non-empty tokens
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Parse a comma and/or whitespace separated list of integers.
///
/// Returns the values in input order; never returns an empty vector.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ValidationError> {
    let values = tokens(text)
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidToken(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ValidationError::Empty);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comma_separated() {
        assert_eq!(parse_values("45, 12, 88, 5"), Ok(vec![45, 12, 88, 5]));
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(parse_values(" 3,1  2,,\t-4\n+5 "), Ok(vec![3, 1, 2, -4, 5]));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(parse_values("7"), Ok(vec![7]));
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(parse_values(""), Err(ValidationError::Empty));
        assert_eq!(parse_values("   "), Err(ValidationError::Empty));
        assert_eq!(parse_values(" , ,, "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_first_bad_token_is_reported() {
        assert_eq!(
            parse_values("1, two, 3.5"),
            Err(ValidationError::InvalidToken("two".to_string()))
        );
        assert_eq!(
            parse_values("99999999999999999999"),
            Err(ValidationError::InvalidToken(
                "99999999999999999999".to_string()
            ))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Please enter at least one number."
        );
        assert_eq!(
            ValidationError::InvalidToken("x1".to_string()).to_string(),
            "'x1' is not a valid integer."
        );
    }
}
