//! Employee module - the record held by a directory

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{check_age, check_email, check_id, check_salary};
use crate::RecordError;

/// Unique identifier for an employee, a random (v4) UUID
///
/// Any 128-bit value is a valid identifier. An absent identifier is
/// expressed as `Option<EmployeeId>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Uuid", into = "Uuid")]
pub struct EmployeeId(u128);

impl EmployeeId {
    /// Generate a new random EmployeeId
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_domain::EmployeeId;
    ///
    /// let id = EmployeeId::new();
    /// assert_ne!(id, EmployeeId::new());
    /// ```
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_u128())
    }

    /// Create an EmployeeId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an EmployeeId from a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_domain::EmployeeId;
    ///
    /// let id = EmployeeId::new();
    /// let parsed = EmployeeId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self::from)
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EmployeeId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.as_u128())
    }
}

impl From<EmployeeId> for Uuid {
    fn from(id: EmployeeId) -> Self {
        Uuid::from_u128(id.0)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Uuid::from_u128(self.0))
    }
}

/// Field values for a record that does not exist yet
///
/// This is what a caller hands to a directory's `create`. The identifier is
/// optional; when absent the directory generates one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// Requested identifier, if any
    #[serde(rename = "uuid", default)]
    pub id: Option<EmployeeId>,

    /// Given name
    #[serde(default)]
    pub first_name: String,

    /// Family name
    #[serde(default)]
    pub last_name: String,

    /// Display name
    #[serde(default)]
    pub full_name: String,

    /// Salary, must be non-negative
    pub salary: i64,

    /// Age in years, must be 18 or more
    pub age: i32,

    /// Job title
    #[serde(default)]
    pub job_title: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Contract start
    #[serde(rename = "contractHireDate", default)]
    pub hire_date: Option<DateTime<Utc>>,

    /// Contract end; `None` if still employed
    #[serde(rename = "contractTerminationDate", default)]
    pub termination_date: Option<DateTime<Utc>>,
}

/// An employee record
///
/// Fields are private so that the salary, age, email and identifier rules
/// hold for the whole life of the record. Setters for those fields return
/// [`RecordError`] and leave the record untouched on rejection.
///
/// Deserializing an `Employee` runs the same checks as [`Employee::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NewEmployee")]
pub struct Employee {
    #[serde(rename = "uuid")]
    id: EmployeeId,
    first_name: String,
    last_name: String,
    full_name: String,
    salary: i64,
    age: i32,
    job_title: String,
    email: String,
    #[serde(rename = "contractHireDate")]
    hire_date: Option<DateTime<Utc>>,
    #[serde(rename = "contractTerminationDate")]
    termination_date: Option<DateTime<Utc>>,
}

impl Employee {
    /// Create a new employee record
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, checked in field order: negative
    /// salary, age under 18, malformed email.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_domain::{Employee, EmployeeId};
    ///
    /// let employee = Employee::new(
    ///     EmployeeId::new(),
    ///     "Ada",
    ///     "Lovelace",
    ///     "Ada Lovelace",
    ///     50_000,
    ///     30,
    ///     "Analyst",
    ///     "ada@example.com",
    ///     None,
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(employee.age(), 30);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        full_name: impl Into<String>,
        salary: i64,
        age: i32,
        job_title: impl Into<String>,
        email: impl Into<String>,
        hire_date: Option<DateTime<Utc>>,
        termination_date: Option<DateTime<Utc>>,
    ) -> Result<Self, RecordError> {
        let salary = check_salary(salary)?;
        let age = check_age(age)?;
        let email = email.into();
        check_email(&email)?;

        Ok(Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            full_name: full_name.into(),
            salary,
            age,
            job_title: job_title.into(),
            email,
            hire_date,
            termination_date,
        })
    }

    /// Build a record from a payload and an already-resolved identifier
    ///
    /// The payload's own `id` is ignored in favour of `id`.
    pub fn from_new(id: EmployeeId, fields: NewEmployee) -> Result<Self, RecordError> {
        Self::new(
            id,
            fields.first_name,
            fields.last_name,
            fields.full_name,
            fields.salary,
            fields.age,
            fields.job_title,
            fields.email,
            fields.hire_date,
            fields.termination_date,
        )
    }

    /// Identifier
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Replace the identifier
    ///
    /// `None` is rejected; any supplied value is accepted.
    pub fn set_id(&mut self, id: Option<EmployeeId>) -> Result<(), RecordError> {
        self.id = check_id(id)?;
        Ok(())
    }

    /// Given name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Replace the given name
    pub fn set_first_name(&mut self, name: impl Into<String>) {
        self.first_name = name.into();
    }

    /// Family name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Replace the family name
    pub fn set_last_name(&mut self, name: impl Into<String>) {
        self.last_name = name.into();
    }

    /// Display name
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Replace the display name
    pub fn set_full_name(&mut self, name: impl Into<String>) {
        self.full_name = name.into();
    }

    /// Salary
    pub fn salary(&self) -> i64 {
        self.salary
    }

    /// Replace the salary; negative values are rejected
    pub fn set_salary(&mut self, salary: i64) -> Result<(), RecordError> {
        self.salary = check_salary(salary)?;
        Ok(())
    }

    /// Age in years
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Replace the age; values under 18 are rejected
    pub fn set_age(&mut self, age: i32) -> Result<(), RecordError> {
        self.age = check_age(age)?;
        Ok(())
    }

    /// Job title
    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    /// Replace the job title
    pub fn set_job_title(&mut self, job_title: impl Into<String>) {
        self.job_title = job_title.into();
    }

    /// Contact email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the email
    ///
    /// Rejected only when the value has neither an '@' nor a '.'.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), RecordError> {
        let email = email.into();
        check_email(&email)?;
        self.email = email;
        Ok(())
    }

    /// Contract start
    pub fn hire_date(&self) -> Option<DateTime<Utc>> {
        self.hire_date
    }

    /// Replace the contract start
    pub fn set_hire_date(&mut self, date: Option<DateTime<Utc>>) {
        self.hire_date = date;
    }

    /// Contract end, or `None` if the employee has not been terminated
    ///
    /// Returned by value: changing the result never affects the record.
    pub fn termination_date(&self) -> Option<DateTime<Utc>> {
        self.termination_date
    }

    /// Replace the contract end
    pub fn set_termination_date(&mut self, date: Option<DateTime<Utc>>) {
        self.termination_date = date;
    }

    /// Whether a termination date is set
    pub fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }
}

impl TryFrom<NewEmployee> for Employee {
    type Error = RecordError;

    /// Requires the payload to carry its own identifier
    fn try_from(fields: NewEmployee) -> Result<Self, Self::Error> {
        let id = check_id(fields.id)?;
        Self::from_new(id, fields)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: string form round-trips for every value
        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = EmployeeId::from_value(value);
            match EmployeeId::from_string(&id.to_string()) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e)),
            }
        }

        /// Property: a rejected salary never changes the stored one
        #[test]
        fn test_rejected_salary_keeps_state(salary in i64::MIN..0) {
            let mut e = Employee::new(
                EmployeeId::new(), "", "", "", 100, 30, "", "a@b.com", None, None,
            ).unwrap();
            prop_assert!(e.set_salary(salary).is_err());
            prop_assert_eq!(e.salary(), 100);
        }
    }
}
