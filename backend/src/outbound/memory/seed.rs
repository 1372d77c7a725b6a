//! Fixed records the directory starts with.

use crate::domain::{City, CityCode, User, UserId};

use super::DirectoryStoreError;

/// `(id, first name, last name, address)` in listing order.
const USERS: [(&str, &str, &str, &str); 4] = [
    ("1", "John", "Doe", "New York"),
    ("2", "Jim", "Carrey", "Washington DC"),
    ("3", "Rhoma", "Cahyanti", "Surabaya"),
    ("4", "Imania", "Ramadhani", "Surabaya"),
];

/// `(code, name, province)` in listing order.
const CITIES: [(&str, &str, &str); 6] = [
    ("SBY", "Surabaya", "Jawa Timur"),
    ("MLG", "Malang", "Jawa Timur"),
    ("SDA", "Sidoarjo", "Jawa Timur"),
    ("GRS", "Gresik", "Jawa Timur"),
    ("JKT", "Jakarta", "DKI Jakarta"),
    ("BGD", "Bandung", "Jawa Barat"),
];

pub(super) fn users() -> Result<Vec<User>, DirectoryStoreError> {
    USERS
        .iter()
        .map(|&(id, first_name, last_name, address)| -> Result<User, DirectoryStoreError> {
            // Compile-time constants; a failure here is a regression in this file.
            let id = UserId::new(id)
                .map_err(|err| DirectoryStoreError::invalid_seed(format!("user {id:?}: {err}")))?;
            Ok(User::new(id, first_name, last_name, address))
        })
        .collect()
}

pub(super) fn cities() -> Result<Vec<City>, DirectoryStoreError> {
    CITIES
        .iter()
        .map(|&(code, name, province)| -> Result<City, DirectoryStoreError> {
            let code = CityCode::new(code)
                .map_err(|err| DirectoryStoreError::invalid_seed(format!("city {code:?}: {err}")))?;
            Ok(City::new(code, name, province))
        })
        .collect()
}
