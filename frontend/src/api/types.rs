use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub designation: String,
    /// `None` when the stored value is missing or not a number.
    #[serde(default, deserialize_with = "deserialize_salary")]
    pub salary: Option<f64>,
}

/// Body for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub salary: f64,
}

// Older records store salary as the raw form string, sometimes blank.
fn deserialize_salary<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let salary = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(salary.filter(|value| value.is_finite()))
}

fn default_error_code() -> String {
    "SERVER_ERROR".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(alias = "message")]
    pub error: String,
    #[serde(default = "default_error_code")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Form field the server attributes the error to, when it says so.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        Self {
            error: error.to_string(),
            code: "STORAGE_ERROR".to_string(),
            details: None,
            field: None,
        }
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
            field: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    /// The human-readable message the server sent, if there was one.
    ///
    /// Transport failures, unreadable error bodies and local storage
    /// failures carry diagnostic text only and return `None`.
    pub fn server_message(&self) -> Option<&str> {
        match self.code.as_str() {
            "REQUEST_FAILED" | "UNKNOWN" | "STORAGE_ERROR" => None,
            _ => Some(self.error.trim()).filter(|msg| !msg.is_empty()),
        }
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}
