//! In-memory employee directory

use parking_lot::RwLock;
use roster_domain::{Employee, EmployeeDirectory, EmployeeId, NewEmployee};
use tracing::{debug, info, warn};

use crate::{DirectoryConfig, DirectoryError};

/// Insertion-ordered, in-memory implementation of [`EmployeeDirectory`]
///
/// Records live in a single vector behind a read-write lock. `create` holds
/// the write lock across the duplicate check and the append, so the directory
/// can be shared behind an `Arc` between request handlers.
///
/// Lookups scan linearly in insertion order.
///
/// # Examples
///
/// ```
/// use roster_domain::{EmployeeDirectory, NewEmployee};
/// use roster_store::{DirectoryConfig, InMemoryDirectory};
///
/// let directory = InMemoryDirectory::new(DirectoryConfig::default());
/// let created = directory
///     .create(NewEmployee {
///         salary: 50_000,
///         age: 30,
///         email: "a@b.com".to_string(),
///         ..Default::default()
///     })
///     .unwrap();
///
/// assert_eq!(directory.get_by_id(created.id()).unwrap(), created);
/// ```
pub struct InMemoryDirectory {
    config: DirectoryConfig,
    records: RwLock<Vec<Employee>>,
}

impl InMemoryDirectory {
    /// Create an empty directory
    pub fn new(config: DirectoryConfig) -> Self {
        info!(
            reject_duplicate_ids = config.reject_duplicate_ids,
            "Created empty employee directory"
        );
        Self {
            config,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a directory seeded with existing records, kept in the given order
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateId`] if duplicates are rejected by
    /// `config` and two seed records share an identifier.
    pub fn with_records<I>(config: DirectoryConfig, records: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = Employee>,
    {
        let records: Vec<Employee> = records.into_iter().collect();

        if config.reject_duplicate_ids {
            for (idx, record) in records.iter().enumerate() {
                if records[..idx].iter().any(|earlier| earlier.id() == record.id()) {
                    warn!(id = %record.id(), "Duplicate identifier in seed records");
                    return Err(DirectoryError::DuplicateId(record.id()));
                }
            }
        }

        info!(
            records = records.len(),
            reject_duplicate_ids = config.reject_duplicate_ids,
            "Created seeded employee directory"
        );
        Ok(Self {
            config,
            records: RwLock::new(records),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether no record has been stored yet
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new(DirectoryConfig::default())
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    type Error = DirectoryError;

    fn list_all(&self) -> Result<Vec<Employee>, Self::Error> {
        Ok(self.records.read().clone())
    }

    fn get_by_id(&self, id: EmployeeId) -> Result<Employee, Self::Error> {
        debug!(%id, "Looking up employee");

        let records = self.records.read();
        match records.iter().find(|record| record.id() == id) {
            Some(record) => Ok(record.clone()),
            None => {
                debug!(%id, "No employee found");
                Err(DirectoryError::NotFound(id))
            }
        }
    }

    fn create(&self, fields: NewEmployee) -> Result<Employee, Self::Error> {
        let id = match fields.id {
            Some(id) => id,
            None => {
                let id = EmployeeId::new();
                debug!(%id, "Generated employee identifier");
                id
            }
        };

        let employee = Employee::from_new(id, fields).map_err(|e| {
            warn!(%id, error = %e, "Rejected employee");
            DirectoryError::from(e)
        })?;

        let mut records = self.records.write();
        if self.config.reject_duplicate_ids && records.iter().any(|record| record.id() == id) {
            warn!(%id, "Rejected duplicate employee identifier");
            return Err(DirectoryError::DuplicateId(id));
        }
        records.push(employee.clone());

        info!(%id, records = records.len(), "Created employee");
        Ok(employee)
    }
}
