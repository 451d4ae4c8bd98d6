use crate::api::{ApiClient, ApiError, RegisterRequest};
use crate::state::session::use_api_client;
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl Default for RegisterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(use_api_client()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
        self.client.register(&request).await
    }
}
