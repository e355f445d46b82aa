//! Roster Domain Layer
//!
//! This crate contains the employee record model and the validation rules
//! that every record obeys. It defines the fundamental types and the trait
//! interface that the storage layer implements.
//!
//! ## Key Concepts
//!
//! - **Employee**: one employee record with identity and validated fields
//! - **EmployeeId**: 128-bit UUID naming a record; never the null identifier
//! - **NewEmployee**: the field payload a directory builds records from
//! - **EmployeeDirectory**: the service contract (list, lookup, create)
//!
//! ## Validation
//!
//! Salary, age, email and identifier rules are checked both when a record is
//! constructed and whenever one of those fields is set afterwards, so a
//! record held by a directory is always valid.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod employee;
pub mod error;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use employee::{Employee, EmployeeId, NewEmployee};
pub use error::RecordError;
pub use traits::EmployeeDirectory;
