//! Roster Storage Layer
//!
//! Implements the [`EmployeeDirectory`](roster_domain::EmployeeDirectory)
//! trait with an in-memory, insertion-ordered collection.
//!
//! # Architecture
//!
//! - One `InMemoryDirectory` per process, constructed by the host
//!   application and passed to whatever needs it (no global state)
//! - Records are validated by the domain layer before they are stored
//! - Nothing is persisted; the directory lives as long as its owner
//!
//! # Examples
//!
//! ```
//! use roster_domain::EmployeeDirectory;
//! use roster_store::{DirectoryConfig, InMemoryDirectory};
//!
//! let directory = InMemoryDirectory::new(DirectoryConfig::default());
//! assert!(directory.list_all().unwrap().is_empty());
//! ```

#![warn(missing_docs)]

mod config;
mod directory;
mod error;

pub use config::{ConfigError, DirectoryConfig};
pub use directory::InMemoryDirectory;
pub use error::DirectoryError;
