use async_trait::async_trait;

use menagerie_core::{
    AdminConfigSnapshot, AnimalDraft, AnimalRecord, RecordId, RecordStore, StoreError, StoreResult,
};

/// Connection settings for a PostgREST-style row API.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the REST surface, e.g. `https://host/rest/v1`.
    pub base_url: String,
    /// Table (collection) name holding the animal rows.
    pub table: String,
    /// Key sent as both `apikey` and bearer token, when the backend wants one.
    pub api_key: Option<String>,
}

impl RestConfig {
    /// Read `rest.base_url`, `rest.table`, and `rest.api_key` from config.
    pub fn from_snapshot(snapshot: &AdminConfigSnapshot) -> StoreResult<Self> {
        let base_url = snapshot
            .get_string("rest.base_url")
            .ok_or_else(|| StoreError::invalid("rest.base_url is not configured"))?;
        Ok(Self {
            base_url,
            table: snapshot
                .get_string("rest.table")
                .unwrap_or_else(|| "animals".to_string()),
            api_key: snapshot.get_string("rest.api_key"),
        })
    }
}

/// Record store over a PostgREST-style row API (the shape hosted
/// backend-as-a-service products expose over their tables).
///
/// Rows are filtered with `id=eq.{id}`; mutations ask for
/// `Prefer: return=representation` so the affected rows come back in the
/// response. A mutation whose representation is empty touched nothing and is
/// reported as `NotFound`.
pub struct RestRecordStore {
    client: reqwest::Client,
    config: RestConfig,
}

impl RestRecordStore {
    pub fn new(config: RestConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request
                .header("apikey", key)
                .bearer_auth(key),
            None => request,
        }
    }

    async fn rows(&self, response: reqwest::Response) -> StoreResult<Vec<AnimalRecord>> {
        let response = response.error_for_status().map_err(StoreError::backend)?;
        response
            .json::<Vec<AnimalRecord>>()
            .await
            .map_err(StoreError::backend)
    }

    async fn single_row(
        &self,
        response: reqwest::Response,
        id: &str,
    ) -> StoreResult<AnimalRecord> {
        let mut rows = self.rows(response).await?;
        match rows.pop() {
            Some(record) => Ok(record),
            None => Err(StoreError::not_found(id)),
        }
    }
}

#[async_trait]
impl RecordStore for RestRecordStore {
    async fn list(&self) -> StoreResult<Vec<AnimalRecord>> {
        tracing::debug!(table = %self.config.table, "listing records");
        let request = self
            .client
            .get(self.endpoint())
            .query(&[("select", "*")]);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(StoreError::backend)?;
        self.rows(response).await
    }

    async fn create(&self, draft: AnimalDraft) -> StoreResult<AnimalRecord> {
        tracing::debug!(table = %self.config.table, name = %draft.name, "creating record");
        let request = self
            .client
            .post(self.endpoint())
            .header("Prefer", "return=representation")
            .json(&draft);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(StoreError::backend)?;

        let mut rows = self.rows(response).await?;
        rows.pop()
            .ok_or_else(|| StoreError::invalid("create returned no representation"))
    }

    async fn update(&self, id: &RecordId, draft: AnimalDraft) -> StoreResult<AnimalRecord> {
        tracing::debug!(table = %self.config.table, id = %id, "updating record");
        let request = self
            .client
            .patch(self.endpoint())
            .query(&[("id", format!("eq.{}", id.as_str()))])
            .header("Prefer", "return=representation")
            .json(&draft);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(StoreError::backend)?;
        self.single_row(response, id.as_str()).await
    }

    async fn remove(&self, id: &RecordId) -> StoreResult<AnimalRecord> {
        tracing::debug!(table = %self.config.table, id = %id, "removing record");
        let request = self
            .client
            .delete(self.endpoint())
            .query(&[("id", format!("eq.{}", id.as_str()))])
            .header("Prefer", "return=representation");
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(StoreError::backend)?;
        self.single_row(response, id.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::AdminConfig;

    #[test]
    fn rest_config_requires_a_base_url() {
        let snapshot = AdminConfig::new().snapshot();
        let err = RestConfig::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, StoreError::Invalid { .. }));
    }

    #[test]
    fn rest_config_defaults_table_to_animals() {
        let mut config = AdminConfig::new();
        config.set("rest.base_url", "https://host/rest/v1");
        let rest = RestConfig::from_snapshot(&config.snapshot()).unwrap();
        assert_eq!(rest.table, "animals");
        assert_eq!(rest.api_key, None);
    }

    #[test]
    fn endpoint_joins_base_and_table_without_double_slash() {
        let store = RestRecordStore::new(RestConfig {
            base_url: "https://host/rest/v1/".into(),
            table: "animals".into(),
            api_key: None,
        });
        assert_eq!(store.endpoint(), "https://host/rest/v1/animals");
    }
}
