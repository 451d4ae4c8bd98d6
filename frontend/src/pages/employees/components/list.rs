use crate::{
    api::Employee,
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
    },
    pages::employees::utils::format_salary,
};
use leptos::*;

#[component]
pub fn EmployeeTable(
    employees: Signal<Vec<Employee>>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <Show
            when=move || employees.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No employees found" /> }
        >
            <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated shadow">
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead class="bg-surface-muted text-left text-fg-muted">
                        <tr>
                            <th class="px-4 py-3">"Name"</th>
                            <th class="px-4 py-3">"Email"</th>
                            <th class="px-4 py-3">"Department"</th>
                            <th class="px-4 py-3">"Role"</th>
                            <th class="px-4 py-3">"Salary"</th>
                            <th class="px-4 py-3">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id.clone()
                            children=move |employee: Employee| {
                                let for_edit = employee.clone();
                                let for_delete = employee.clone();
                                view! {
                                    <tr>
                                        <td class="px-4 py-3 text-fg">{employee.name.clone()}</td>
                                        <td class="px-4 py-3 text-fg-muted">{employee.email.clone()}</td>
                                        <td class="px-4 py-3">{employee.department.clone()}</td>
                                        <td class="px-4 py-3">{employee.designation.clone()}</td>
                                        <td class="px-4 py-3">{format_salary(employee.salary)}</td>
                                        <td class="px-4 py-3 space-x-2">
                                            <Button
                                                variant=ButtonVariant::Secondary
                                                on:click=move |_| on_edit.call(for_edit.clone())
                                            >
                                                "Edit"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Danger
                                                on:click=move |_| on_delete.call(for_delete.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
