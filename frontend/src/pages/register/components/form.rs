use crate::components::{common::Button, error::InlineErrorMessage, forms::TextField};
use crate::pages::register::utils::RegisterField;
use crate::utils::navigation::LOGIN_PATH;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterForm(
    #[prop(into)] value: Callback<RegisterField, String>,
    #[prop(into)] error: Callback<RegisterField, Option<String>>,
    server_error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_input: Callback<(RegisterField, String)>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let field = move |field: RegisterField, label: &'static str, input_type: &'static str| {
        view! {
            <TextField
                id=label.to_lowercase()
                label=label
                input_type=input_type
                placeholder=label
                value=Signal::derive(move || value.call(field))
                error=Signal::derive(move || error.call(field))
                on_input=Callback::new(move |text: String| on_input.call((field, text)))
            />
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface-muted py-12 px-4">
            <div class="max-w-md w-full space-y-6 rounded-lg bg-surface-elevated shadow p-8">
                <h2 class="text-center text-2xl font-bold text-fg">"Register"</h2>
                <form class="space-y-4" novalidate=true on:submit=move |ev| on_submit.call(ev)>
                    {field(RegisterField::Name, "Name", "text")}
                    {field(RegisterField::Email, "Email", "email")}
                    {field(RegisterField::Password, "Password", "password")}
                    <InlineErrorMessage message=server_error />
                    <Button class="w-full" loading=pending loading_label="Registering..." attr:type="submit">
                        "Register"
                    </Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    <a href=LOGIN_PATH class="text-action-primary-bg hover:underline">
                        "Already registered? Login"
                    </a>
                </p>
            </div>
        </div>
    }
}
