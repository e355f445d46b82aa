//! Field validation rules shared by construction and the setters

use crate::{EmployeeId, RecordError};

/// Lowest salary a record may hold
pub const MIN_SALARY: i64 = 0;

/// Lowest age a record may hold
pub const MIN_AGE: i32 = 18;

/// Reject an absent identifier
///
/// Any supplied value is accepted, the nil UUID included.
pub fn check_id(id: Option<EmployeeId>) -> Result<EmployeeId, RecordError> {
    id.ok_or(RecordError::NullIdentifier)
}

/// Reject a negative salary
pub fn check_salary(salary: i64) -> Result<i64, RecordError> {
    if salary < MIN_SALARY {
        return Err(RecordError::NegativeSalary(salary));
    }
    Ok(salary)
}

/// Reject an age under [`MIN_AGE`]
pub fn check_age(age: i32) -> Result<i32, RecordError> {
    if age < MIN_AGE {
        return Err(RecordError::Underage(age));
    }
    Ok(age)
}

/// Reject an email containing neither '@' nor '.'
///
/// Only the absence of both symbols is an error. A value with just one of
/// them (`"noatsign.com"`, `"user@localhost"`) passes, and their order or
/// position is not checked.
pub fn check_email(email: &str) -> Result<(), RecordError> {
    if !email.contains('@') && !email.contains('.') {
        return Err(RecordError::MalformedEmail(email.to_string()));
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: salary is accepted exactly when non-negative
        #[test]
        fn test_salary_sign(salary: i64) {
            prop_assert_eq!(check_salary(salary).is_ok(), salary >= 0);
        }

        /// Property: age is accepted exactly when at least 18
        #[test]
        fn test_age_threshold(age: i32) {
            prop_assert_eq!(check_age(age).is_ok(), age >= 18);
        }

        /// Property: strings without '@' and '.' are always rejected
        #[test]
        fn test_email_without_symbols(local in "[a-zA-Z0-9_-]{0,24}") {
            prop_assert!(check_email(&local).is_err());
        }

        /// Property: a single '@' or '.' anywhere is enough
        #[test]
        fn test_email_with_either_symbol(
            head in "[a-z]{0,12}",
            tail in "[a-z]{0,12}",
            symbol in prop::sample::select(vec!['@', '.']),
        ) {
            let email = format!("{}{}{}", head, symbol, tail);
            prop_assert!(check_email(&email).is_ok());
        }
    }
}
