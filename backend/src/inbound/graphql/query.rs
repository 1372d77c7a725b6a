//! Root query type.
//!
//! Resolvers delegate to [`DirectoryService`] held in the schema data. A
//! lookup that finds nothing resolves to a zero-valued object rather than
//! `null`, so clients always see the selected fields.

use async_graphql::{Context, ErrorExtensions, Object};

use super::types::{CityObject, UserObject};
use crate::domain::{DirectoryService, Error};

/// Root of every query document.
#[derive(Debug, Default, Clone, Copy)]
pub struct Query;

#[Object]
impl Query {
    /// Every user in the directory.
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<UserObject>> {
        let service = ctx.data::<DirectoryService>()?;
        let users = service.list_all_users().await.map_err(|err| to_graphql_error(&err))?;
        Ok(users.iter().map(UserObject::from).collect())
    }

    /// Look up a user by id. The address is not returned.
    async fn user(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<UserObject>> {
        let service = ctx.data::<DirectoryService>()?;
        let summary = service
            .find_user_by_id(&id)
            .await
            .map_err(|err| to_graphql_error(&err))?;
        Ok(Some(summary.map(UserObject::from).unwrap_or_default()))
    }

    /// Every city in the directory.
    async fn cities(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<CityObject>> {
        let service = ctx.data::<DirectoryService>()?;
        let cities = service.list_all_cities().await.map_err(|err| to_graphql_error(&err))?;
        Ok(cities.iter().map(CityObject::from).collect())
    }

    /// Look up a city by its code.
    async fn city(
        &self,
        ctx: &Context<'_>,
        citycode: String,
    ) -> async_graphql::Result<Option<CityObject>> {
        let service = ctx.data::<DirectoryService>()?;
        let city = service
            .find_city_by_code(&citycode)
            .await
            .map_err(|err| to_graphql_error(&err))?;
        Ok(Some(city.as_ref().map(CityObject::from).unwrap_or_default()))
    }
}

/// Turn a domain failure into a field error clients may see.
///
/// Internal messages are redacted; the code and trace id travel in the
/// error's `extensions`.
fn to_graphql_error(error: &Error) -> async_graphql::Error {
    let client = error.redacted();
    async_graphql::Error::new(client.message()).extend_with(|_, ext| {
        ext.set("code", client.code().as_str().to_owned());
        if let Some(trace_id) = client.trace_id() {
            ext.set("traceId", trace_id.to_owned());
        }
    })
}
