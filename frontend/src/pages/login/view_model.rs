use super::{
    repository::LoginRepository,
    utils::{LoginField, LoginFormState},
};
use crate::api::{ApiError, LoginRequest, LoginResponse};
use crate::utils::navigation::{redirect_to, DASHBOARD_PATH};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginFormState>,
    pub server_error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<LoginResponse, ApiError>>,
}

/// Settles a finished login. Returns where to navigate on success.
pub(super) fn apply_login_result(
    result: Option<Result<LoginResponse, ApiError>>,
    server_error: RwSignal<Option<String>>,
) -> Option<&'static str> {
    match result? {
        Ok(_) => {
            server_error.set(None);
            Some(DASHBOARD_PATH)
        }
        Err(err) => {
            log::warn!("Login failed: {}", err);
            server_error.set(Some(err.message_or("Login Failed")));
            None
        }
    }
}

impl LoginViewModel {
    pub fn input(&self, field: LoginField, value: String) {
        self.form.update(|form| form.input(field, value));
    }

    pub fn field_error(&self, field: LoginField) -> Option<String> {
        self.form
            .with(|form| form.errors.get(field).map(str::to_string))
    }

    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    /// Validates and, when clean, dispatches the login request.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        self.server_error.set(None);
        let mut valid = false;
        self.form.update(|form| valid = form.validate());
        if !valid {
            return;
        }
        let request = self.form.with_untracked(LoginFormState::to_request);
        self.login_action.dispatch(request);
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let repository = LoginRepository::new();
    let form = create_rw_signal(LoginFormState::default());
    let server_error = create_rw_signal(None::<String>);
    let login_action = create_action(move |request: &LoginRequest| {
        let repository = repository.clone();
        let request = request.clone();
        async move { repository.login(request).await }
    });

    create_effect(move |_| {
        if let Some(path) = apply_login_result(login_action.value().get(), server_error) {
            redirect_to(path);
        }
    });

    LoginViewModel {
        form,
        server_error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::with_runtime;
    use crate::state::session::Session;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            provide_session(Session::in_memory());
            let vm = use_login_view_model();
            assert!(vm.server_error.get_untracked().is_none());
            assert!(vm.form.get_untracked().email.is_empty());
            assert!(!vm.pending().get_untracked());
        });
    }

    #[test]
    fn invalid_submit_sets_errors_and_sends_nothing() {
        with_runtime(|| {
            provide_session(Session::in_memory());
            let vm = use_login_view_model();
            vm.input(LoginField::Email, "abc".into());
            vm.submit();

            assert_eq!(
                vm.field_error(LoginField::Email).as_deref(),
                Some("Invalid email format")
            );
            assert_eq!(
                vm.field_error(LoginField::Password).as_deref(),
                Some("Password is required")
            );
            assert!(vm.login_action.input().get_untracked().is_none());
        });
    }

    #[test]
    fn resubmitting_clears_stale_server_error() {
        with_runtime(|| {
            provide_session(Session::in_memory());
            let vm = use_login_view_model();
            vm.server_error.set(Some("Invalid credentials".into()));
            vm.submit();

            assert!(vm.server_error.get_untracked().is_none());
            assert!(vm.field_error(LoginField::Email).is_some());
        });
    }

    #[test]
    fn successful_login_redirects_to_dashboard() {
        with_runtime(|| {
            let server_error = create_rw_signal(Some("old".to_string()));
            let target = apply_login_result(
                Some(Ok(LoginResponse {
                    token: "abc".into(),
                })),
                server_error,
            );
            assert_eq!(target, Some(DASHBOARD_PATH));
            assert!(server_error.get_untracked().is_none());
        });
    }

    #[test]
    fn rejected_login_exposes_server_message() {
        with_runtime(|| {
            let server_error = create_rw_signal(None::<String>);
            let mut err = ApiError::unknown("Invalid credentials");
            err.code = "UNAUTHORIZED".into();
            let target = apply_login_result(Some(Err(err)), server_error);
            assert!(target.is_none());
            assert_eq!(
                server_error.get_untracked().as_deref(),
                Some("Invalid credentials")
            );
        });
    }

    #[test]
    fn rejected_login_without_message_uses_fallback() {
        with_runtime(|| {
            let server_error = create_rw_signal(None::<String>);
            apply_login_result(
                Some(Err(ApiError::request_failed("network down"))),
                server_error,
            );
            assert_eq!(server_error.get_untracked().as_deref(), Some("Login Failed"));
        });
    }

    #[test]
    fn no_result_changes_nothing() {
        with_runtime(|| {
            let server_error = create_rw_signal(Some("keep".to_string()));
            assert!(apply_login_result(None, server_error).is_none());
            assert_eq!(server_error.get_untracked().as_deref(), Some("keep"));
        });
    }
}
