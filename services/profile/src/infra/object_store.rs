use anyhow::Context as _;
use bytes::Bytes;

use crate::domain::repository::ObjectStorePort;
use crate::error::ProfileServiceError;

/// Object store client speaking the storage engine's HTTP object API.
///
/// Paths are relative to one bucket; the bucket never appears in stored
/// `file_path` values.
#[derive(Clone)]
pub struct HttpObjectStore {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl HttpObjectStore {
    pub fn new(base_url: &str, bucket: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            bucket: bucket.to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

impl ObjectStorePort for HttpObjectStore {
    async fn put(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), ProfileServiceError> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, path);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            // existing objects are never overwritten
            .header("x-upsert", "false")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .context("send object upload")
            .map_err(ProfileServiceError::StorageUploadFailed)?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProfileServiceError::StorageUploadFailed(anyhow::anyhow!(
                "object upload returned {status}: {body}"
            )));
        }
        Ok(())
    }

    async fn delete(&self, paths: &[String]) -> Result<(), ProfileServiceError> {
        let url = format!("{}/object/{}", self.base_url, self.bucket);
        let resp = self
            .client
            .delete(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "prefixes": paths }))
            .send()
            .await
            .context("send object delete")
            .map_err(ProfileServiceError::StorageDeleteFailed)?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProfileServiceError::StorageDeleteFailed(anyhow::anyhow!(
                "object delete returned {status}: {body}"
            )));
        }
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, path)
    }
}
