use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::error::ApiError, config, state::session::SessionHandle};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Method, extra headers and optional JSON body of a gateway call.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn put() -> Self {
        Self {
            method: Method::PUT,
            ..Self::default()
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Gateway to the backend API. Cloning is cheap and every clone shares the
/// same session handle.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionHandle,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: SessionHandle::default(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session: SessionHandle::default(),
        }
    }

    pub fn session_handle(&self) -> SessionHandle {
        self.session.clone()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Authenticated call. Fails with `Unauthenticated` before any I/O when
    /// no session token is present.
    pub async fn call<T>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
        let headers = merge_headers(options.headers, &token)?;
        let url = self.endpoint(path).await;

        let mut request = self
            .http_client()
            .request(options.method.clone(), url)
            .headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = self.execute(request).await?;
        let status = response.status();
        let result = read_json(response).await;
        if let Err(err) = &result {
            log::warn!(
                "{} {} failed (status {}): {}",
                options.method,
                path,
                status.as_u16(),
                err.code()
            );
        }
        result
    }

    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock::responder_for(request.url().as_str()) {
            return responder.respond(&request).map(MockResponse::into_response);
        }

        self.client.execute(request).await.map_err(|e| {
            log::error!("Transport failure: {}", e);
            ApiError::Network(e.to_string())
        })
    }
}

/// Caller headers first, then the bearer token. The JSON content type is only
/// a default. A token that cannot be sent as a header counts as no token.
pub(crate) fn merge_headers(mut headers: HeaderMap, token: &str) -> Result<HeaderMap, ApiError> {
    let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| {
            log::warn!("Stored token is not a valid header value");
            ApiError::Unauthenticated
        })?;
    headers.insert(AUTHORIZATION, bearer);
    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    Ok(headers)
}

pub(crate) async fn read_json<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !status.is_success() {
        return Err(ApiError::request_failed(status.as_u16(), body));
    }
    decode_body(&body)
}

/// An empty success body decodes as JSON `null`.
pub(crate) fn decode_body<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

pub(crate) fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock::{register_mock, MockResponse, TestResponder};
