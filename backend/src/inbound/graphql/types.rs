//! GraphQL output objects.
//!
//! Field names are part of the public contract (`firstname`, `citycode`, ...)
//! and are pinned explicitly rather than derived from the Rust field names.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::domain::{City, User, UserSummary};

/// A person in the directory as exposed over GraphQL.
///
/// `Default` is the zero-valued record returned for lookup misses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    /// Directory key.
    pub id: String,
    /// Given name.
    #[graphql(name = "firstname")]
    #[serde(rename = "firstname")]
    pub first_name: String,
    /// Family name.
    #[graphql(name = "lastname")]
    #[serde(rename = "lastname")]
    pub last_name: String,
    /// Postal address; empty on single-user lookups.
    pub address: String,
}

impl From<&User> for UserObject {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            address: user.address().to_owned(),
        }
    }
}

/// Single-user lookups never carry an address.
impl From<UserSummary> for UserObject {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id().to_string(),
            first_name: summary.first_name().to_owned(),
            last_name: summary.last_name().to_owned(),
            address: String::new(),
        }
    }
}

/// A city in the directory as exposed over GraphQL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "City")]
pub struct CityObject {
    /// Short unique code, e.g. `SBY`.
    #[graphql(name = "citycode")]
    #[serde(rename = "citycode")]
    pub city_code: String,
    /// Display name.
    #[graphql(name = "cityname")]
    #[serde(rename = "cityname")]
    pub city_name: String,
    /// Province the city belongs to.
    pub province: String,
}

impl From<&City> for CityObject {
    fn from(city: &City) -> Self {
        Self {
            city_code: city.code().to_string(),
            city_name: city.name().to_owned(),
            province: city.province().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CityCode, UserId};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn user_object_uses_wire_field_names() {
        let user = User::new(UserId::new("2").expect("valid id"), "Jim", "Carrey", "Washington DC");
        let value = serde_json::to_value(UserObject::from(&user)).expect("serialise user");
        assert_eq!(
            value,
            json!({
                "id": "2",
                "firstname": "Jim",
                "lastname": "Carrey",
                "address": "Washington DC",
            })
        );
    }

    #[rstest]
    fn summary_conversion_blanks_the_address() {
        let user = User::new(UserId::new("1").expect("valid id"), "John", "Doe", "New York");
        let object = UserObject::from(user.summary());
        assert_eq!(object.id, "1");
        assert_eq!(object.first_name, "John");
        assert_eq!(object.address, "");
    }

    #[rstest]
    fn city_object_uses_wire_field_names() {
        let city = City::new(CityCode::new("MLG").expect("valid code"), "Malang", "Jawa Timur");
        let value = serde_json::to_value(CityObject::from(&city)).expect("serialise city");
        assert_eq!(
            value,
            json!({"citycode": "MLG", "cityname": "Malang", "province": "Jawa Timur"})
        );
    }

    #[rstest]
    fn lookup_results_survive_a_json_round_trip() {
        let city = City::new(CityCode::new("SBY").expect("valid code"), "Surabaya", "Jawa Timur");
        let original = CityObject::from(&city);
        let json = serde_json::to_string(&original).expect("serialise city");
        let decoded: CityObject = serde_json::from_str(&json).expect("deserialise city");
        assert_eq!(decoded, original);

        let user = User::new(UserId::new("3").expect("valid id"), "Rhoma", "Cahyanti", "Surabaya");
        let original = UserObject::from(user.summary());
        let json = serde_json::to_string(&original).expect("serialise user");
        let decoded: UserObject = serde_json::from_str(&json).expect("deserialise user");
        assert_eq!(decoded, original);
    }

    #[rstest]
    fn default_objects_are_zero_valued() {
        assert_eq!(
            serde_json::to_value(CityObject::default()).expect("serialise city"),
            json!({"citycode": "", "cityname": "", "province": ""})
        );
    }
}
