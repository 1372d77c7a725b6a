//! Read-side port over the city collection.

use async_trait::async_trait;

use crate::domain::{City, CityCode};

use super::DirectoryQueryError;

/// Port for reading cities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityDirectory: Send + Sync {
    /// Every city, in storage order.
    async fn list_cities(&self) -> Result<Vec<City>, DirectoryQueryError>;

    /// First city whose code equals `code`, or `None` when nothing matches.
    async fn find_city(&self, code: &CityCode) -> Result<Option<City>, DirectoryQueryError>;
}
