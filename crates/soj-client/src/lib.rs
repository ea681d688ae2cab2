//! # soj-client
//!
//! REST client for the Sojourn backend's resource collections and
//! push-registration endpoints.
//!
//! One [`ApiClient`] owns the connection pool; collections are accessed
//! through the generic [`ResourceClient`] (one CRUD implementation shared by
//! every resource path) via typed constructors or [`ApiClient::kind`] for
//! schemaless access. The bearer token is optional — reads work without one.

mod error;
mod http;
mod push;
mod resource;

pub use error::ApiError;
pub use http::check_response;
pub use resource::{ListQuery, ResourceClient};

use std::marker::PhantomData;
use std::time::Duration;

use soj_core::ResourceKind;
use soj_core::entities::{
    Condo, Course, Document, GeneralPost, Hotel, Restaurant, TravelPost,
};

/// HTTP client for the Sojourn backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client with a bounded per-request timeout.
    ///
    /// Trailing slashes on `base_url` are stripped so resource paths can be
    /// appended directly.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to all subsequent requests.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Schemaless access to any cataloged collection.
    #[must_use]
    pub fn kind(&self, kind: ResourceKind) -> ResourceClient<'_, serde_json::Value> {
        self.resource(kind.path())
    }

    /// Typed access to an arbitrary collection path.
    #[must_use]
    pub fn resource<T>(&self, path: &'static str) -> ResourceClient<'_, T> {
        ResourceClient {
            api: self,
            path,
            _entity: PhantomData,
        }
    }

    #[must_use]
    pub fn condos(&self) -> ResourceClient<'_, Condo> {
        self.resource(ResourceKind::Condos.path())
    }

    #[must_use]
    pub fn hotels(&self) -> ResourceClient<'_, Hotel> {
        self.resource(ResourceKind::Hotels.path())
    }

    #[must_use]
    pub fn courses(&self) -> ResourceClient<'_, Course> {
        self.resource(ResourceKind::Courses.path())
    }

    #[must_use]
    pub fn restaurants(&self) -> ResourceClient<'_, Restaurant> {
        self.resource(ResourceKind::Restaurants.path())
    }

    #[must_use]
    pub fn docs(&self) -> ResourceClient<'_, Document> {
        self.resource(ResourceKind::Docs.path())
    }

    #[must_use]
    pub fn general_posts(&self) -> ResourceClient<'_, GeneralPost> {
        self.resource(ResourceKind::General.path())
    }

    #[must_use]
    pub fn travel_posts(&self) -> ResourceClient<'_, TravelPost> {
        self.resource(ResourceKind::TravelPosts.path())
    }

    // Request builders with the bearer header attached when a token is held.

    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.get(url))
    }

    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.post(url))
    }

    pub(crate) fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.put(url))
    }

    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.patch(url))
    }

    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.delete(url))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }
}
