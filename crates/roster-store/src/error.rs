//! Directory error types

use roster_domain::{EmployeeId, RecordError};
use thiserror::Error;

/// Errors that can occur during directory operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A field value was rejected by the record rules
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] RecordError),

    /// No record carries the requested identifier
    #[error("No employee was found with UUID {0}.")]
    NotFound(EmployeeId),

    /// The supplied identifier is already stored (only when duplicates are rejected)
    #[error("An employee with UUID {0} already exists")]
    DuplicateId(EmployeeId),
}

impl DirectoryError {
    /// Whether this is a lookup miss (404 for an HTTP caller)
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }

    /// Whether the caller supplied bad input (400-class for an HTTP caller)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DirectoryError::InvalidArgument(_) | DirectoryError::DuplicateId(_)
        )
    }
}
