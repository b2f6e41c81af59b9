// Field validation for registration input. Each check returns a typed
// error instead of raising, and the console decides how to report it.

use crate::console::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name can't be empty.")]
    EmptyFirstName,
    #[error("First name can't contain non-alphanumeric values.")]
    NonAlphabeticFirstName,
    #[error("Last name can't be empty.")]
    EmptyLastName,
    #[error("Last name can't contain non-alphanumeric values.")]
    NonAlphabeticLastName,
    #[error("Course name can't be empty.")]
    EmptyCourseName,
    #[error("Invalid option.  Please choose between 1-4.")]
    InvalidMenuChoice,
}

impl Diagnostic for ValidationError {
    fn category(&self) -> &'static str {
        match self {
            ValidationError::InvalidMenuChoice => "ValidationError::InvalidMenuChoice",
            _ => "ValidationError::Field",
        }
    }

    fn details(&self) -> &'static str {
        match self {
            ValidationError::InvalidMenuChoice => "Menu input was not one of the listed options.",
            _ => "A registration field was rejected and the entry was discarded.",
        }
    }
}

// Letter numbers such as 'Ⅻ' are Alphabetic in Unicode but not names.
fn is_alphabetic(value: &str) -> bool {
    value.chars().all(|c| c.is_alphabetic() && !c.is_numeric())
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyFirstName);
    }
    if !is_alphabetic(value) {
        return Err(ValidationError::NonAlphabeticFirstName);
    }
    Ok(())
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyLastName);
    }
    if !is_alphabetic(value) {
        return Err(ValidationError::NonAlphabeticLastName);
    }
    Ok(())
}

/// Course names only need to be present; any characters are accepted.
pub fn validate_course_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyCourseName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_is_checked_before_alphabetic() {
        assert_eq!(validate_first_name(""), Err(ValidationError::EmptyFirstName));
        assert_eq!(validate_last_name(""), Err(ValidationError::EmptyLastName));
    }

    #[test]
    fn names_reject_digits_punctuation_and_spaces() {
        for bad in ["Ann1", "O'Neil", "Mary Ann", "Lee-", "42"] {
            assert_eq!(
                validate_first_name(bad),
                Err(ValidationError::NonAlphabeticFirstName),
                "{bad}"
            );
            assert_eq!(
                validate_last_name(bad),
                Err(ValidationError::NonAlphabeticLastName),
                "{bad}"
            );
        }
    }

    #[test]
    fn names_accept_non_ascii_letters() {
        assert_eq!(validate_first_name("Zoë"), Ok(()));
        assert_eq!(validate_last_name("Müller"), Ok(()));
    }

    #[test]
    fn names_reject_letter_numbers() {
        assert_eq!(validate_first_name("Ⅻ"), Err(ValidationError::NonAlphabeticFirstName));
        assert_eq!(validate_last_name("Louisⅻ"), Err(ValidationError::NonAlphabeticLastName));
    }

    #[test]
    fn course_name_accepts_anything_non_empty() {
        assert_eq!(validate_course_name("Python 101"), Ok(()));
        assert_eq!(validate_course_name(""), Err(ValidationError::EmptyCourseName));
    }

    #[test]
    fn messages_match_console_text() {
        assert_eq!(
            ValidationError::NonAlphabeticLastName.to_string(),
            "Last name can't contain non-alphanumeric values."
        );
        assert_eq!(
            ValidationError::InvalidMenuChoice.to_string(),
            "Invalid option.  Please choose between 1-4."
        );
    }

    proptest! {
        #[test]
        fn alphabetic_names_pass(name in "[a-zA-Z]{1,20}") {
            prop_assert_eq!(validate_first_name(&name), Ok(()));
            prop_assert_eq!(validate_last_name(&name), Ok(()));
        }

        #[test]
        fn names_with_a_digit_fail(prefix in "[a-zA-Z]{0,8}", digit in "[0-9]", suffix in "[a-zA-Z]{0,8}") {
            let name = format!("{prefix}{digit}{suffix}");
            prop_assert_eq!(validate_first_name(&name), Err(ValidationError::NonAlphabeticFirstName));
        }
    }
}
