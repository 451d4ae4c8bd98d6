use reqwest::Method;

use super::{
    client::{encode_path_segment, ApiClient},
    types::{ApiError, Employee, EmployeePayload},
};

fn employee_path(id: &str) -> String {
    format!("/employees/{}", encode_path_segment(id))
}

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let builder = self.request(Method::GET, "/employees").await;
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "/employees").await.json(payload);
        let response = self.send(builder).await?;
        self.map_empty_response(response).await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &employee_path(id))
            .await
            .json(payload);
        let response = self.send(builder).await?;
        self.map_empty_response(response).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &employee_path(id)).await;
        let response = self.send(builder).await?;
        self.map_empty_response(response).await
    }
}
