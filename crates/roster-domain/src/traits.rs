//! Trait definitions for the service boundary
//!
//! The web layer talks to a directory only through this trait.
//! Implementations live in other crates.

use crate::{Employee, EmployeeId, NewEmployee};

/// Trait for storing and retrieving employee records
///
/// Implemented by the storage layer (roster-store). Methods take `&self` so
/// an implementation can be shared between request handlers; it is
/// responsible for its own synchronization.
pub trait EmployeeDirectory {
    /// Error type for directory operations
    type Error;

    /// All records, in insertion order
    fn list_all(&self) -> Result<Vec<Employee>, Self::Error>;

    /// The earliest-inserted record whose identifier equals `id`
    ///
    /// Fails with a not-found error when no record matches.
    fn get_by_id(&self, id: EmployeeId) -> Result<Employee, Self::Error>;

    /// Build a record from `fields`, store it, and return it
    ///
    /// Uses the supplied identifier if present, otherwise generates one.
    /// Nothing is stored when the fields are rejected.
    fn create(&self, fields: NewEmployee) -> Result<Employee, Self::Error>;
}
