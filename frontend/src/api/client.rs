use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, state::session::Session};

// RFC 3986 path-segment reserved characters.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// The one HTTP configuration every screen talks through.
///
/// Holds the session it was built with and attaches that session's bearer
/// token to each outgoing request. There is no refresh, retry or central
/// 401 handling; callers see every failure as an [`ApiError`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Builds a request against `path` with the bearer token attached when
    /// the session holds one.
    pub(super) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let builder = self.client.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            log::warn!("Request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    pub(super) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    /// Success bodies of mutations are ignored; callers refetch instead.
    pub(super) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    async fn map_error_response(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::unknown(format!("HTTP {}", status.as_u16())),
        }
    }
}
