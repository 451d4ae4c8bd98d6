use super::{
    components::{filter::DepartmentFilterSelect, form_modal::EmployeeFormModal, list::EmployeeTable},
    utils::EmployeeField,
    view_model::use_employees_view_model,
};
use crate::{
    api::Employee,
    components::{
        common::Button, confirm_dialog::ConfirmDialog, error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();

    let visible = Signal::derive(move || vm.visible_employees());
    let options = Signal::derive(move || vm.department_options());
    let selected = Signal::derive(move || vm.filter.with(|filter| filter.select_value().to_string()));
    let loading = vm.fetch_action.pending();

    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|pending| pending.as_ref().map(|employee| employee.name.clone()))
            .map(|name| format!("Delete {}? This cannot be undone.", name))
            .unwrap_or_default()
    });

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                <h2 class="text-2xl font-bold text-fg">"Employees"</h2>
                <div class="flex items-center gap-3">
                    <DepartmentFilterSelect
                        options=options
                        selected=selected
                        on_change=Callback::new(move |value: String| vm.select_department(&value))
                    />
                    <Button on:click=move |_| vm.open_create()>"Add Employee"</Button>
                </div>
            </div>

            <InlineErrorMessage message=vm.notice />

            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>

            <EmployeeTable
                employees=visible
                on_edit=Callback::new(move |employee: Employee| vm.open_edit(&employee))
                on_delete=Callback::new(move |employee: Employee| vm.request_delete(employee))
            />

            <EmployeeFormModal
                editor=vm.editor.into()
                value=Callback::new(move |field: EmployeeField| vm.field_value(field))
                error=Callback::new(move |field: EmployeeField| vm.field_error(field))
                pending=vm.submit_action.pending().into()
                on_input=Callback::new(move |(field, value): (EmployeeField, String)| vm.input(field, value))
                on_submit=on_submit
                on_cancel=Callback::new(move |_| vm.cancel_edit())
            />

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete employee"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| vm.resolve_delete(true))
                on_cancel=Callback::new(move |_| vm.resolve_delete(false))
            />
        </div>
    }
}
