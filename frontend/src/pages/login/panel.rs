use super::{
    components::form::LoginForm,
    utils::LoginField,
    view_model::use_login_view_model,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;

    let email = Signal::derive(move || form.with(|f| f.email.clone()));
    let password = Signal::derive(move || form.with(|f| f.password.clone()));
    let email_error = Signal::derive(move || vm.field_error(LoginField::Email));
    let password_error = Signal::derive(move || vm.field_error(LoginField::Password));

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            email=email
            password=password
            email_error=email_error
            password_error=password_error
            server_error=vm.server_error.into()
            pending=vm.pending()
            on_email_input=Callback::new(move |value: String| vm.input(LoginField::Email, value))
            on_password_input=Callback::new(move |value: String| vm.input(LoginField::Password, value))
            on_submit=on_submit
        />
    }
}
