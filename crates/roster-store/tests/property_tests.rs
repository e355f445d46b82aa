//! Property tests for directory create and lookup

use proptest::prelude::*;
use roster_domain::{EmployeeDirectory, EmployeeId, NewEmployee};
use roster_store::{DirectoryError, InMemoryDirectory};

fn valid_payload() -> impl Strategy<Value = NewEmployee> {
    (
        "[A-Za-z]{0,12}",
        "[A-Za-z]{0,12}",
        0i64..10_000_000,
        18i32..100,
        "[a-z]{1,8}@[a-z]{1,8}\\.com",
        proptest::option::of(any::<u128>()),
    )
        .prop_map(|(first, last, salary, age, email, id)| NewEmployee {
            id: id.map(EmployeeId::from_value),
            full_name: format!("{} {}", first, last),
            first_name: first,
            last_name: last,
            salary,
            age,
            job_title: "Staff".to_string(),
            email,
            hire_date: None,
            termination_date: None,
        })
}

proptest! {
    /// Property: a valid payload comes back field-for-field
    #[test]
    fn test_create_preserves_fields(payload in valid_payload()) {
        let directory = InMemoryDirectory::default();
        let created = directory.create(payload.clone()).unwrap();

        if let Some(id) = payload.id {
            prop_assert_eq!(created.id(), id);
        } else {
            prop_assert_ne!(created.id(), EmployeeId::from_value(0));
        }
        prop_assert_eq!(created.first_name(), payload.first_name.as_str());
        prop_assert_eq!(created.last_name(), payload.last_name.as_str());
        prop_assert_eq!(created.full_name(), payload.full_name.as_str());
        prop_assert_eq!(created.salary(), payload.salary);
        prop_assert_eq!(created.age(), payload.age);
        prop_assert_eq!(created.email(), payload.email.as_str());
    }

    /// Property: every stored record is found by its own identifier
    #[test]
    fn test_lookup_returns_stored_record(payloads in prop::collection::vec(valid_payload(), 1..10)) {
        let directory = InMemoryDirectory::default();
        let created: Vec<_> = payloads
            .into_iter()
            .map(|p| directory.create(p).unwrap())
            .collect();

        for record in &created {
            let found = directory.get_by_id(record.id()).unwrap();
            // Duplicate supplied ids resolve to the earliest insert
            let earliest = created.iter().find(|r| r.id() == record.id()).unwrap();
            prop_assert_eq!(&found, earliest);
        }
    }

    /// Property: an identifier never stored is not found
    #[test]
    fn test_unknown_id_not_found(value: u128) {
        let directory = InMemoryDirectory::default();
        let id = EmployeeId::from_value(value);
        prop_assert_eq!(directory.get_by_id(id), Err(DirectoryError::NotFound(id)));
    }
}
