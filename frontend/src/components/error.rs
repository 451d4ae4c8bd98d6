use leptos::*;

/// Form-level error banner.
#[component]
pub fn InlineErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2 text-sm"
            >
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Message rendered beneath a single input.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <p class="mt-1 text-xs text-status-error-text">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some("Login Failed".to_string()));
            view! { <InlineErrorMessage message=signal /> }
        });
        assert!(html.contains("Login Failed"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn inline_error_hidden_without_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<String>);
            view! { <InlineErrorMessage message=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn field_error_renders_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some("Email is required".to_string()));
            view! { <FieldError message=signal /> }
        });
        assert!(html.contains("Email is required"));
    }
}
