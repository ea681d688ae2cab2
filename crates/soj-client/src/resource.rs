//! The generic resource client.
//!
//! One implementation of list/detail/create/update/patch/delete, shared by
//! every collection. A resource is just a path plus an entity type; adding a
//! new collection to the backend means adding one constructor on
//! [`crate::ApiClient`], not a new CRUD module.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ApiClient;
use crate::error::ApiError;
use crate::http::{check_response, read_json};

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub search: Option<String>,
}

impl ListQuery {
    /// Render as a query string, including the leading `?`. Empty when no
    /// parameter is set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset={offset}"));
        }
        if let Some(search) = &self.search {
            parts.push(format!("search={}", urlencoding::encode(search)));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

/// CRUD operations for one backend collection.
///
/// Borrowed from an [`ApiClient`]; `T` is the entity type the collection
/// serves (use `serde_json::Value` for schemaless access).
pub struct ResourceClient<'a, T> {
    pub(crate) api: &'a ApiClient,
    pub(crate) path: &'static str,
    pub(crate) _entity: PhantomData<T>,
}

impl<T: DeserializeOwned> ResourceClient<'_, T> {
    /// `GET {base}{path}` — list the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<T>, ApiError> {
        let url = format!("{}{}{}", self.api.base_url(), self.path, query.to_query_string());
        let resp = self.api.get(&url).send().await?;
        read_json(resp, self.path).await
    }

    /// `GET {base}{path}/{id}` — fetch one item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn get(&self, id: &str) -> Result<T, ApiError> {
        let resp = self.api.get(&self.item_url(id)).send().await?;
        read_json(resp, self.path).await
    }

    /// `POST {base}{path}` — create an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn create<B: Serialize + Sync>(&self, body: &B) -> Result<T, ApiError> {
        let url = format!("{}{}", self.api.base_url(), self.path);
        let resp = self.api.post(&url).json(body).send().await?;
        read_json(resp, self.path).await
    }

    /// `PUT {base}{path}/{id}` — replace an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn update<B: Serialize + Sync>(&self, id: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.api.put(&self.item_url(id)).json(body).send().await?;
        read_json(resp, self.path).await
    }

    /// `PATCH {base}{path}/{id}` — partially update an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn patch(&self, id: &str, body: &serde_json::Value) -> Result<T, ApiError> {
        let resp = self.api.patch(&self.item_url(id)).json(body).send().await?;
        read_json(resp, self.path).await
    }

    /// `DELETE {base}{path}/{id}` — delete an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let resp = self.api.delete(&self.item_url(id)).send().await?;
        check_response(resp).await?;
        Ok(())
    }

    fn item_url(&self, id: &str) -> String {
        format!(
            "{}{}/{}",
            self.api.base_url(),
            self.path,
            urlencoding::encode(id)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_query_renders_nothing() {
        assert_eq!(ListQuery::default().to_query_string(), "");
    }

    #[test]
    fn full_query_renders_all_parts() {
        let query = ListQuery {
            limit: Some(10),
            offset: Some(40),
            search: Some("river view".into()),
        };
        assert_eq!(
            query.to_query_string(),
            "?limit=10&offset=40&search=river%20view"
        );
    }

    #[test]
    fn search_only_query() {
        let query = ListQuery {
            search: Some("pho".into()),
            ..Default::default()
        };
        assert_eq!(query.to_query_string(), "?search=pho");
    }
}
