use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest},
};

impl ApiClient {
    /// Signs in and stores the issued token in this client's session.
    /// A rejected login leaves the session untouched.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self.request(Method::POST, "/auth/login").await.json(request);
        let response = self.send(builder).await?;
        let login_response: LoginResponse = self.map_json_response(response).await?;
        self.session().sign_in(&login_response.token)?;
        Ok(login_response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/auth/register")
            .await
            .json(request);
        let response = self.send(builder).await?;
        self.map_empty_response(response).await
    }
}
