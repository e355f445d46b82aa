//! Record error types

use thiserror::Error;

/// A field value rejected by one of the record rules
///
/// Every variant is an invalid-argument condition: the caller supplied a value
/// the record refuses to hold. The record is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Identifier absent or nil
    #[error("The UUID cannot be null")]
    NullIdentifier,

    /// Salary below zero
    #[error("Salary cannot be negative: {0}")]
    NegativeSalary(i64),

    /// Age below the legal minimum
    #[error("Age must be 18 or older: {0}")]
    Underage(i32),

    /// Email with neither an '@' nor a '.'
    #[error("Email '{0}' does not contain proper formatting. Check for '@' and '.' symbols")]
    MalformedEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(RecordError::NullIdentifier.to_string(), "The UUID cannot be null");
        assert_eq!(
            RecordError::NegativeSalary(-5).to_string(),
            "Salary cannot be negative: -5"
        );
        assert_eq!(RecordError::Underage(17).to_string(), "Age must be 18 or older: 17");

        let msg = RecordError::MalformedEmail("plainstring".to_string()).to_string();
        assert!(msg.contains("plainstring"));
        assert!(msg.contains("'@'"));
        assert!(msg.contains("'.'"));
    }
}
