use anyhow::Context as _;
use serde::Deserialize;

use uniport_session::cookie::DEFAULT_SESSION_TTL;

use crate::domain::repository::AuthProviderPort;
use crate::domain::types::ProviderSession;
use crate::error::ProfileServiceError;

/// Identity provider client speaking a GoTrue-style REST API.
#[derive(Clone)]
pub struct HttpAuthProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpAuthProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    async fn request_session(
        &self,
        url: String,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProfileServiceError> {
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .context("send credentials to identity provider")?;

        if !resp.status().is_success() {
            let body: ProviderErrorBody = resp.json().await.unwrap_or_default();
            return Err(ProfileServiceError::AuthRejected(body.message()));
        }

        let body: ProviderSessionBody = resp
            .json()
            .await
            .context("decode identity provider session")?;
        match body.access_token {
            Some(access_token) => Ok(ProviderSession {
                access_token,
                expires_in: body.expires_in.unwrap_or(DEFAULT_SESSION_TTL),
            }),
            // 2xx without a token happens when the provider defers the
            // account to email confirmation.
            None => Err(ProfileServiceError::AuthRejected(
                "email confirmation required before signing in".to_owned(),
            )),
        }
    }
}

impl AuthProviderPort for HttpAuthProvider {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProfileServiceError> {
        let url = format!("{}/token?grant_type=password", self.base_url);
        self.request_session(url, email, password).await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProfileServiceError> {
        let url = format!("{}/signup", self.base_url);
        self.request_session(url, email, password).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), ProfileServiceError> {
        let url = format!("{}/logout", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("send sign-out to identity provider")?;
        if !resp.status().is_success() {
            let status = resp.status();
            return Err(ProfileServiceError::Internal(anyhow::anyhow!(
                "provider sign-out returned {status}"
            )));
        }
        Ok(())
    }
}

/// Session payload returned on successful sign-in/sign-up.
#[derive(Debug, Deserialize)]
struct ProviderSessionBody {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Error payload; GoTrue uses different keys per endpoint.
#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProviderErrorBody {
    fn message(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.error)
            .unwrap_or_else(|| "authentication rejected".to_owned())
    }
}
