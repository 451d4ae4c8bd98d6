use crate::api::RegisterRequest;
use crate::utils::validation::{email_error, FieldErrors};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegisterField {
    Name,
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub errors: FieldErrors<RegisterField>,
}

impl RegisterFormState {
    pub fn value(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Name => &self.name,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
        }
    }

    pub fn input(&mut self, field: RegisterField, value: String) {
        match field {
            RegisterField::Name => self.name = value,
            RegisterField::Email => self.email = value,
            RegisterField::Password => self.password = value,
        }
        self.errors.clear(field);
    }

    pub fn validate(&mut self) -> bool {
        self.errors.clear_all();
        if self.name.trim().is_empty() {
            self.errors.set(RegisterField::Name, "Name is required");
        }
        if let Some(message) = email_error(&self.email) {
            self.errors.set(RegisterField::Email, message);
        }
        if self.password.is_empty() {
            self.errors.set(RegisterField::Password, "Password required");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            self.errors.set(RegisterField::Password, "Minimum 6 characters");
        }
        self.errors.is_empty()
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterFormState {
        let mut form = RegisterFormState::default();
        form.input(RegisterField::Name, "Jane Doe".into());
        form.input(RegisterField::Email, "jane@example.com".into());
        form.input(RegisterField::Password, "secret1".into());
        form
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut form = RegisterFormState::default();
        assert!(!form.validate());
        assert_eq!(form.errors.get(RegisterField::Name), Some("Name is required"));
        assert_eq!(form.errors.get(RegisterField::Email), Some("Email is required"));
        assert_eq!(
            form.errors.get(RegisterField::Password),
            Some("Password required")
        );
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut form = filled();
        form.input(RegisterField::Name, "   ".into());
        assert!(!form.validate());
        assert!(form.errors.has(RegisterField::Name));
        assert_eq!(form.errors.len(), 1);
    }

    #[test]
    fn short_password_is_rejected() {
        let mut form = filled();
        form.input(RegisterField::Password, "12345".into());
        assert!(!form.validate());
        assert_eq!(
            form.errors.get(RegisterField::Password),
            Some("Minimum 6 characters")
        );

        form.input(RegisterField::Password, "123456".into());
        assert!(form.validate());
    }

    #[test]
    fn valid_form_builds_request() {
        let mut form = filled();
        assert!(form.validate());
        let request = form.to_request();
        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.email, "jane@example.com");
        assert_eq!(request.password, "secret1");
        assert_eq!(form.value(RegisterField::Name), "Jane Doe");
    }
}
