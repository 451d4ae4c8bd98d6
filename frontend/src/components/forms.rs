use super::error::FieldError;
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded-md border px-3 py-2 text-sm bg-form-control-bg text-fg focus:outline-none focus:ring-2";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{INPUT_CLASS} border-status-error-border focus:ring-status-error-border")
    } else {
        format!("{INPUT_CLASS} border-form-control-border focus:ring-action-primary-focus")
    }
}

/// Labelled text input bound to a form value. An error highlights the input
/// and is rendered beneath it.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg-muted mb-1">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                class=move || input_class(error.with(Option::is_some))
                aria-invalid=move || if error.with(Option::is_some) { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldError message=error />
        </div>
    }
}
