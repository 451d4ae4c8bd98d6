use super::utils::Submission;
use crate::api::{ApiClient, ApiError, Employee};
use crate::state::session::use_api_client;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(use_api_client()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    /// Updates when the submission carries a target id, creates otherwise.
    pub async fn save_employee(&self, submission: Submission) -> Result<(), ApiError> {
        match submission.target {
            Some(id) => self.client.update_employee(&id, &submission.payload).await,
            None => self.client.create_employee(&submission.payload).await,
        }
    }

    pub async fn delete_employee(&self, id: String) -> Result<(), ApiError> {
        self.client.delete_employee(&id).await
    }
}
