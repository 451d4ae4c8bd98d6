use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    forms::TextField,
};
use crate::utils::navigation::REGISTER_PATH;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: Signal<String>,
    password: Signal<String>,
    email_error: Signal<Option<String>>,
    password_error: Signal<Option<String>>,
    server_error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface-muted py-12 px-4">
            <div class="max-w-md w-full space-y-6 rounded-lg bg-surface-elevated shadow p-8">
                <h2 class="text-center text-2xl font-bold text-fg">"Login"</h2>
                <form class="space-y-4" novalidate=true on:submit=move |ev| on_submit.call(ev)>
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="Email"
                        value=email
                        error=email_error
                        on_input=on_email_input
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Password"
                        value=password
                        error=password_error
                        on_input=on_password_input
                    />
                    <InlineErrorMessage message=server_error />
                    <Button class="w-full" loading=pending loading_label="Logging in..." attr:type="submit">
                        "Login"
                    </Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    <a href=REGISTER_PATH class="text-action-primary-bg hover:underline">
                        "New User? Register"
                    </a>
                </p>
            </div>
        </div>
    }
}
