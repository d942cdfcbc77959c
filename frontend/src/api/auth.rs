use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;

use super::{
    client::{decode_body, ApiClient},
    error::ApiError,
    types::{LoginRequest, LoginResponse, ProfileResponse, SignupRequest, User},
};

const LOGIN_FAILED: &str = "Login failed";
const PROFILE_FAILED: &str = "Failed to load user profile";
const SIGNUP_FAILED: &str = "Signup failed";

/// Credential endpoints. These never read the session, so they work while
/// signed out and always report failures as `ApiError::Auth`.
impl ApiClient {
    pub async fn exchange_credentials(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let builder = self.http_client().post(url).json(request);
        let response: LoginResponse = self.send_auth(builder, LOGIN_FAILED).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::auth(LOGIN_FAILED));
        }
        Ok(response.token)
    }

    pub async fn fetch_profile(&self, token: &str) -> Result<User, ApiError> {
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::auth(PROFILE_FAILED))?;
        let url = self.endpoint("/user/me").await;
        let builder = self.http_client().get(url).header(AUTHORIZATION, bearer);
        let profile: ProfileResponse = self.send_auth(builder, PROFILE_FAILED).await?;
        Ok(profile.user)
    }

    pub async fn register(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/signup").await;
        let builder = self.http_client().post(url).json(request);
        let _: serde_json::Value = self.send_auth(builder, SIGNUP_FAILED).await?;
        Ok(())
    }

    async fn send_auth<T>(
        &self,
        builder: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .execute(builder)
            .await
            .map_err(|e| ApiError::auth(format!("{}: {}", fallback, e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::auth(format!("{}: {}", fallback, e)))?;
        if !status.is_success() {
            log::warn!("{} (status {})", fallback, status.as_u16());
            let message = body.trim();
            return Err(ApiError::auth(if message.is_empty() {
                fallback
            } else {
                message
            }));
        }
        decode_body(&body).map_err(|e| {
            log::warn!("{}: {}", fallback, e);
            ApiError::auth(fallback)
        })
    }
}
