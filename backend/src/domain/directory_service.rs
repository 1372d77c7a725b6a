//! Directory read use-cases: list and look up users and cities.
//!
//! Lookups return `Option` so a miss is never confused with an entry whose
//! fields happen to be empty. Keys that cannot be valid (`""`, padded
//! strings) are treated as misses without touching the ports.

use std::sync::Arc;

use tracing::{debug, error};

use super::ports::{CityDirectory, DirectoryQueryError, UserDirectory};
use super::{City, CityCode, Error, User, UserId, UserSummary};

/// Read-only directory service shared by every request.
#[derive(Clone)]
pub struct DirectoryService {
    users: Arc<dyn UserDirectory>,
    cities: Arc<dyn CityDirectory>,
}

impl DirectoryService {
    /// Wire the service to its read ports.
    pub fn new(users: Arc<dyn UserDirectory>, cities: Arc<dyn CityDirectory>) -> Self {
        Self { users, cities }
    }

    /// Every user in storage order.
    ///
    /// # Errors
    /// Returns an internal [`Error`] when the port fails.
    pub async fn list_all_users(&self) -> Result<Vec<User>, Error> {
        self.users.list_users().await.map_err(|err| map_port_error(&err))
    }

    /// Identity and name of the first user with `id`.
    ///
    /// The address is deliberately not part of the result.
    ///
    /// # Errors
    /// Returns an internal [`Error`] when the port fails.
    pub async fn find_user_by_id(&self, id: &str) -> Result<Option<UserSummary>, Error> {
        let Ok(id) = UserId::new(id) else {
            debug!(id, "user lookup with an impossible key");
            return Ok(None);
        };
        let user = self.users.find_user(&id).await.map_err(|err| map_port_error(&err))?;
        debug!(id = %id, found = user.is_some(), "user lookup");
        Ok(user.as_ref().map(User::summary))
    }

    /// Every city in storage order.
    ///
    /// # Errors
    /// Returns an internal [`Error`] when the port fails.
    pub async fn list_all_cities(&self) -> Result<Vec<City>, Error> {
        self.cities.list_cities().await.map_err(|err| map_port_error(&err))
    }

    /// First city with `code`, all fields included.
    ///
    /// # Errors
    /// Returns an internal [`Error`] when the port fails.
    pub async fn find_city_by_code(&self, code: &str) -> Result<Option<City>, Error> {
        let Ok(code) = CityCode::new(code) else {
            debug!(code, "city lookup with an impossible key");
            return Ok(None);
        };
        let city = self.cities.find_city(&code).await.map_err(|err| map_port_error(&err))?;
        debug!(code = %code, found = city.is_some(), "city lookup");
        Ok(city)
    }
}

fn map_port_error(err: &DirectoryQueryError) -> Error {
    error!(error = %err, "directory port failed");
    Error::internal(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockCityDirectory, MockUserDirectory};
    use rstest::{fixture, rstest};

    fn john() -> User {
        User::new(UserId::new("1").expect("valid id"), "John", "Doe", "New York")
    }

    fn surabaya() -> City {
        City::new(CityCode::new("SBY").expect("valid code"), "Surabaya", "Jawa Timur")
    }

    fn service(users: MockUserDirectory, cities: MockCityDirectory) -> DirectoryService {
        DirectoryService::new(Arc::new(users), Arc::new(cities))
    }

    #[fixture]
    fn idle_cities() -> MockCityDirectory {
        MockCityDirectory::new()
    }

    #[fixture]
    fn idle_users() -> MockUserDirectory {
        MockUserDirectory::new()
    }

    #[rstest]
    #[tokio::test]
    async fn find_user_returns_summary_of_match(idle_cities: MockCityDirectory) {
        let mut users = MockUserDirectory::new();
        users
            .expect_find_user()
            .withf(|id| id.as_ref() == "1")
            .times(1)
            .returning(|_| Ok(Some(john())));

        let summary = service(users, idle_cities)
            .find_user_by_id("1")
            .await
            .expect("lookup succeeds")
            .expect("user found");

        assert_eq!(summary, john().summary());
    }

    #[rstest]
    #[tokio::test]
    async fn find_user_reports_a_miss_as_none(idle_cities: MockCityDirectory) {
        let mut users = MockUserDirectory::new();
        users.expect_find_user().times(1).returning(|_| Ok(None));

        let result = service(users, idle_cities).find_user_by_id("99").await;
        assert_eq!(result, Ok(None));
    }

    #[rstest]
    #[case("")]
    #[case(" 1")]
    #[tokio::test]
    async fn impossible_user_keys_skip_the_port(
        #[case] id: &str,
        idle_cities: MockCityDirectory,
    ) {
        let mut users = MockUserDirectory::new();
        users.expect_find_user().never();

        let result = service(users, idle_cities).find_user_by_id(id).await;
        assert_eq!(result, Ok(None));
    }

    #[rstest]
    #[tokio::test]
    async fn port_failures_become_internal_errors(idle_cities: MockCityDirectory) {
        let mut users = MockUserDirectory::new();
        users
            .expect_list_users()
            .returning(|| Err(DirectoryQueryError::unavailable("disk on fire")));

        let err = service(users, idle_cities)
            .list_all_users()
            .await
            .expect_err("port failure propagates");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "directory unavailable: disk on fire");
    }

    #[rstest]
    #[tokio::test]
    async fn find_city_returns_every_field(idle_users: MockUserDirectory) {
        let mut cities = MockCityDirectory::new();
        cities
            .expect_find_city()
            .withf(|code| code.as_ref() == "SBY")
            .returning(|_| Ok(Some(surabaya())));

        let city = service(idle_users, cities)
            .find_city_by_code("SBY")
            .await
            .expect("lookup succeeds");
        assert_eq!(city, Some(surabaya()));
    }

    #[rstest]
    #[tokio::test]
    async fn list_cities_preserves_port_order(idle_users: MockUserDirectory) {
        let mut cities = MockCityDirectory::new();
        cities.expect_list_cities().returning(|| {
            Ok(vec![
                City::new(CityCode::new("MLG").expect("valid code"), "Malang", "Jawa Timur"),
                surabaya(),
            ])
        });

        let listed = service(idle_users, cities)
            .list_all_cities()
            .await
            .expect("list succeeds");
        let codes: Vec<&str> = listed.iter().map(|city| city.code().as_ref()).collect();
        assert_eq!(codes, ["MLG", "SBY"]);
    }
}
