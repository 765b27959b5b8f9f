//! Read-only backend over a remote HTTP source.
//!
//! The source answers `GET {url}` with a JSON array of flat person
//! objects (`id`, `name`, `phone`, `street`, `city`), the shape served by a
//! `json-server` style endpoint. Only reads are supported: `find_by_id`,
//! `insert`, and `update_phone` fail with [`StoreError::Unsupported`].
//!
//! Every read re-fetches the whole list; there is no caching.

use std::time::Duration;

use phonebook_types::{Person, PersonId, PhonePolicy};
use serde::Deserialize;

use crate::error::StoreError;
use crate::store::PersonStore;

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 5000;

const BACKEND: &str = "remote";

/// Configuration for the remote source.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// URL that returns the full person list.
    pub url: String,
    /// Timeout for a single request, including connect.
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Create a new configuration for `url` with the default timeout.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Read-only [`PersonStore`] backed by an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    url: String,
}

/// A person as served by the remote source.
///
/// Remote identifiers may be strings or numbers.
#[derive(Debug, Deserialize)]
struct RemotePerson {
    id: serde_json::Value,
    name: String,
    #[serde(default)]
    phone: Option<String>,
    street: String,
    city: String,
}

impl From<RemotePerson> for Person {
    fn from(raw: RemotePerson) -> Self {
        let id = match raw.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Self {
            id: PersonId::from(id),
            name: raw.name,
            phone: raw.phone,
            street: raw.street,
            city: raw.city,
        }
    }
}

impl RemoteStore {
    /// Build a client for the configured source.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &RemoteConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        tracing::info!(url = config.url, timeout_ms = config.timeout.as_millis(), "Remote source configured");
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    async fn fetch(&self) -> Result<Vec<Person>, StoreError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Remote(format!("{} returned {status}", self.url)));
        }

        let raw: Vec<RemotePerson> = response.json().await?;
        tracing::debug!(count = raw.len(), url = self.url, "Fetched people from remote source");
        Ok(raw.into_iter().map(Person::from).collect())
    }
}

impl PersonStore for RemoteStore {
    async fn count_all(&self) -> Result<u64, StoreError> {
        let people = self.fetch().await?;
        Ok(u64::try_from(people.len()).unwrap_or(u64::MAX))
    }

    async fn list_all(&self) -> Result<Vec<Person>, StoreError> {
        self.fetch().await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, StoreError> {
        let people = self.fetch().await?;
        Ok(people.into_iter().find(|p| p.name == name))
    }

    async fn find_by_id(&self, _id: &PersonId) -> Result<Option<Person>, StoreError> {
        Err(StoreError::Unsupported {
            backend: BACKEND,
            operation: "find_by_id",
        })
    }

    async fn insert(&self, _person: Person) -> Result<Person, StoreError> {
        Err(StoreError::Unsupported {
            backend: BACKEND,
            operation: "insert",
        })
    }

    async fn update_phone(&self, _id: &PersonId, _phone: &str) -> Result<Option<Person>, StoreError> {
        Err(StoreError::Unsupported {
            backend: BACKEND,
            operation: "update_phone",
        })
    }

    fn phone_policy(&self) -> PhonePolicy {
        PhonePolicy::Optional
    }

    fn backend_name(&self) -> &'static str {
        BACKEND
    }
}
