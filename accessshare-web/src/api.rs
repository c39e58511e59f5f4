use once_cell::unsync::OnceCell;
use reqwest::{Client, Error, RequestBuilder};
use shared::models::{DeleteAccountResponse, LoginRequest, RegisterRequest, User};

use crate::session;

const DEFAULT_BASE_URL: &str = "/api/v1";

/// Header the backend uses to identify the calling account.
const USER_EMAIL_HEADER: &str = "X-User-Email";

thread_local! {
    static SHARED_CLIENT: OnceCell<AccessShareClient> = OnceCell::new();
}

/// Lightweight API client for the AccessShare backend.
#[derive(Clone, Debug)]
pub struct AccessShareClient {
    base_url: String,
    client: Client,
}

impl AccessShareClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the identification header when a session marker is present.
    fn identify(&self, request: RequestBuilder) -> RequestBuilder {
        match session::stored_email() {
            Some(email) => request.header(USER_EMAIL_HEADER, email),
            None => request,
        }
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<User, Error> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Create a new account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<User, Error> {
        let url = self.api_url("auth/register");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Retrieve the account behind the current session marker.
    pub async fn me(&self) -> Result<User, Error> {
        let url = self.api_url("auth/me");
        let response = self.identify(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Terminate the current session.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("auth/logout");
        let response = self.identify(self.client.post(url)).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Delete the current account.
    pub async fn delete_account(&self) -> Result<DeleteAccountResponse, Error> {
        let url = self.api_url("auth/delete-account");
        let response = self.identify(self.client.delete(url)).send().await?;
        response.error_for_status()?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_path() {
        let client = AccessShareClient::new("/api/v1");
        assert_eq!(client.api_url("auth/login"), "/api/v1/auth/login");
        assert_eq!(client.api_url("/auth/me"), "/api/v1/auth/me");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = AccessShareClient::new("http://localhost:8000/api/v1/");
        assert_eq!(
            client.api_url("auth/logout"),
            "http://localhost:8000/api/v1/auth/logout"
        );
    }

    #[test]
    fn auth_endpoints() {
        let client = AccessShareClient::new(DEFAULT_BASE_URL);

        assert_eq!(client.api_url("auth/login"), "/api/v1/auth/login");
        assert_eq!(client.api_url("auth/register"), "/api/v1/auth/register");
        assert_eq!(client.api_url("auth/me"), "/api/v1/auth/me");
        assert_eq!(client.api_url("auth/logout"), "/api/v1/auth/logout");
        assert_eq!(
            client.api_url("auth/delete-account"),
            "/api/v1/auth/delete-account"
        );
    }
}
