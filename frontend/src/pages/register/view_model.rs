use super::{
    repository::RegisterRepository,
    utils::{RegisterField, RegisterFormState},
};
use crate::api::{ApiError, RegisterRequest};
use crate::utils::navigation::{redirect_to, LOGIN_PATH};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RwSignal<RegisterFormState>,
    pub server_error: RwSignal<Option<String>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

pub(super) fn apply_register_result(
    result: Option<Result<(), ApiError>>,
    server_error: RwSignal<Option<String>>,
) -> Option<&'static str> {
    match result? {
        Ok(()) => {
            server_error.set(None);
            Some(LOGIN_PATH)
        }
        Err(err) => {
            log::warn!("Registration failed: {}", err);
            server_error.set(Some(err.message_or("Registration Failed")));
            None
        }
    }
}

impl RegisterViewModel {
    pub fn input(&self, field: RegisterField, value: String) {
        self.form.update(|form| form.input(field, value));
    }

    pub fn field_error(&self, field: RegisterField) -> Option<String> {
        self.form
            .with(|form| form.errors.get(field).map(str::to_string))
    }

    pub fn pending(&self) -> Signal<bool> {
        self.register_action.pending().into()
    }

    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        self.server_error.set(None);
        let mut valid = false;
        self.form.update(|form| valid = form.validate());
        if !valid {
            return;
        }
        let request = self.form.with_untracked(RegisterFormState::to_request);
        self.register_action.dispatch(request);
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let repository = RegisterRepository::new();
    let form = create_rw_signal(RegisterFormState::default());
    let server_error = create_rw_signal(None::<String>);
    let register_action = create_action(move |request: &RegisterRequest| {
        let repository = repository.clone();
        let request = request.clone();
        async move { repository.register(request).await }
    });

    create_effect(move |_| {
        if let Some(path) = apply_register_result(register_action.value().get(), server_error) {
            redirect_to(path);
        }
    });

    RegisterViewModel {
        form,
        server_error,
        register_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_submit_sends_nothing() {
        with_runtime(|| {
            provide_session(Session::in_memory());
            let vm = use_register_view_model();
            vm.input(RegisterField::Name, "Jane".into());
            vm.input(RegisterField::Email, "jane@example.com".into());
            vm.input(RegisterField::Password, "123".into());
            vm.submit();

            assert_eq!(
                vm.field_error(RegisterField::Password).as_deref(),
                Some("Minimum 6 characters")
            );
            assert!(vm.field_error(RegisterField::Name).is_none());
            assert!(vm.register_action.input().get_untracked().is_none());
        });
    }

    #[test]
    fn resubmitting_clears_stale_server_error() {
        with_runtime(|| {
            provide_session(Session::in_memory());
            let vm = use_register_view_model();
            vm.server_error.set(Some("User already exists".into()));
            vm.submit();

            assert!(vm.server_error.get_untracked().is_none());
            assert!(vm.field_error(RegisterField::Name).is_some());
        });
    }

    #[test]
    fn typing_clears_the_field_error() {
        with_runtime(|| {
            provide_session(Session::in_memory());
            let vm = use_register_view_model();
            vm.submit();
            assert!(vm.field_error(RegisterField::Email).is_some());
            vm.input(RegisterField::Email, "j".into());
            assert!(vm.field_error(RegisterField::Email).is_none());
            assert!(vm.field_error(RegisterField::Name).is_some());
        });
    }

    #[test]
    fn successful_registration_returns_to_login() {
        with_runtime(|| {
            let server_error = create_rw_signal(None::<String>);
            assert_eq!(
                apply_register_result(Some(Ok(())), server_error),
                Some(LOGIN_PATH)
            );
        });
    }

    #[test]
    fn failed_registration_shows_server_message_or_fallback() {
        with_runtime(|| {
            let server_error = create_rw_signal(None::<String>);
            let mut err = ApiError::unknown("User already exists");
            err.code = "CONFLICT".into();
            apply_register_result(Some(Err(err)), server_error);
            assert_eq!(
                server_error.get_untracked().as_deref(),
                Some("User already exists")
            );

            apply_register_result(Some(Err(ApiError::unknown("HTTP 500"))), server_error);
            assert_eq!(
                server_error.get_untracked().as_deref(),
                Some("Registration Failed")
            );
        });
    }
}
