use crate::api::LoginRequest;
use crate::utils::validation::{email_error, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors<LoginField>,
}

impl LoginFormState {
    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Stores a typed value and drops that field's error.
    pub fn input(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
        self.errors.clear(field);
    }

    /// Recomputes every field error; returns `true` when the form may be sent.
    pub fn validate(&mut self) -> bool {
        self.errors.clear_all();
        if let Some(message) = email_error(&self.email) {
            self.errors.set(LoginField::Email, message);
        }
        if self.password.is_empty() {
            self.errors.set(LoginField::Password, "Password is required");
        }
        self.errors.is_empty()
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
