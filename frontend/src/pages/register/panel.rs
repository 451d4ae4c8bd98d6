use super::{
    components::form::RegisterForm,
    utils::RegisterField,
    view_model::use_register_view_model,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <RegisterForm
            value=Callback::new(move |field: RegisterField| form.with(|f| f.value(field).to_string()))
            error=Callback::new(move |field: RegisterField| vm.field_error(field))
            server_error=vm.server_error.into()
            pending=vm.pending()
            on_input=Callback::new(move |(field, value): (RegisterField, String)| vm.input(field, value))
            on_submit=on_submit
        />
    }
}
