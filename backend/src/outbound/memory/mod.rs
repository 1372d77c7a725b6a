//! In-memory directory store.
//!
//! The store is built once, before the HTTP listener starts, and is never
//! mutated afterwards. Requests share it through an `Arc` and read it
//! without locking. Keys are checked for uniqueness at construction, so a
//! store can never hold two users with the same id or two cities with the
//! same code.

mod seed;

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ports::{CityDirectory, DirectoryQueryError, UserDirectory};
use crate::domain::{City, CityCode, User, UserId};

/// Errors raised while building a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryStoreError {
    /// Two users share an id.
    #[error("duplicate user id {id:?}")]
    DuplicateUserId {
        /// The repeated id.
        id: String,
    },
    /// Two cities share a code.
    #[error("duplicate city code {code:?}")]
    DuplicateCityCode {
        /// The repeated code.
        code: String,
    },
    /// A built-in seed record failed validation.
    #[error("invalid seed record: {message}")]
    InvalidSeed {
        /// Which record failed and why.
        message: String,
    },
}

impl DirectoryStoreError {
    fn invalid_seed(message: impl Into<String>) -> Self {
        Self::InvalidSeed {
            message: message.into(),
        }
    }
}

/// Immutable, insertion-ordered collections of users and cities.
///
/// # Examples
/// ```
/// use atlas::outbound::memory::InMemoryDirectory;
///
/// let store = InMemoryDirectory::seeded().expect("seed is valid");
/// assert_eq!(store.users().len(), 4);
/// assert_eq!(store.cities().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    users: Vec<User>,
    cities: Vec<City>,
}

impl InMemoryDirectory {
    /// Build a store from arbitrary records, keeping their order.
    ///
    /// # Errors
    /// Returns [`DirectoryStoreError::DuplicateUserId`] or
    /// [`DirectoryStoreError::DuplicateCityCode`] when a key repeats.
    pub fn new(users: Vec<User>, cities: Vec<City>) -> Result<Self, DirectoryStoreError> {
        let mut seen_ids: HashSet<&UserId> = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen_ids.insert(user.id()) {
                return Err(DirectoryStoreError::DuplicateUserId {
                    id: user.id().to_string(),
                });
            }
        }

        let mut seen_codes: HashSet<&CityCode> = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen_codes.insert(city.code()) {
                return Err(DirectoryStoreError::DuplicateCityCode {
                    code: city.code().to_string(),
                });
            }
        }

        Ok(Self { users, cities })
    }

    /// Build the store holding the built-in seed records.
    ///
    /// # Errors
    /// Returns [`DirectoryStoreError::InvalidSeed`] if a seed record is
    /// rejected, which indicates a bug in the seed table.
    pub fn seeded() -> Result<Self, DirectoryStoreError> {
        Self::new(seed::users()?, seed::cities()?)
    }

    /// Every user in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Every city in insertion order.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryQueryError> {
        Ok(self.users.clone())
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, DirectoryQueryError> {
        Ok(self.users.iter().find(|user| user.id() == id).cloned())
    }
}

#[async_trait]
impl CityDirectory for InMemoryDirectory {
    async fn list_cities(&self) -> Result<Vec<City>, DirectoryQueryError> {
        Ok(self.cities.clone())
    }

    async fn find_city(&self, code: &CityCode) -> Result<Option<City>, DirectoryQueryError> {
        Ok(self.cities.iter().find(|city| city.code() == code).cloned())
    }
}
