use crate::{
    components::{
        common::{Button, ButtonVariant},
        forms::TextField,
    },
    pages::employees::utils::{EditorState, EmployeeField},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeeFormModal(
    editor: Signal<EditorState>,
    #[prop(into)] value: Callback<EmployeeField, String>,
    #[prop(into)] error: Callback<EmployeeField, Option<String>>,
    pending: Signal<bool>,
    on_input: Callback<(EmployeeField, String)>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = move || editor.with(EditorState::title);
    let submit_label = move || editor.with(EditorState::submit_label);

    view! {
        <Show when=move || editor.with(EditorState::is_open)>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop"></div>
                <div
                    class="relative z-[61] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-fg mb-4">{title}</h2>
                    <form class="space-y-4" novalidate=true on:submit=move |ev| on_submit.call(ev)>
                        {EmployeeField::ALL
                            .into_iter()
                            .map(|field| {
                                view! {
                                    <TextField
                                        id=field.input_id()
                                        label=field.label()
                                        input_type=field.input_type()
                                        placeholder=field.label()
                                        value=Signal::derive(move || value.call(field))
                                        error=Signal::derive(move || error.call(field))
                                        on_input=Callback::new(move |text: String| on_input.call((field, text)))
                                    />
                                }
                            })
                            .collect_view()}
                        <div class="flex justify-end gap-2 pt-2">
                            <Button
                                variant=ButtonVariant::Secondary
                                attr:type="button"
                                on:click=move |_| on_cancel.call(())
                            >
                                "Cancel"
                            </Button>
                            <Button loading=pending loading_label="Saving..." attr:type="submit">
                                {submit_label}
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
