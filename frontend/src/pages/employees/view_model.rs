use super::{
    repository::EmployeesRepository,
    utils::{
        department_options, field_for_server_error, filter_employees, prepare_submission,
        DepartmentFilter, EditorState, EmployeeField, EmployeeFormState, Submission,
        GENERIC_SUBMIT_ERROR,
    },
};
use crate::api::{ApiError, Employee};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees: RwSignal<Vec<Employee>>,
    pub form: RwSignal<EmployeeFormState>,
    pub editor: RwSignal<EditorState>,
    pub filter: RwSignal<DepartmentFilter>,
    pub notice: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub fetch_action: Action<(), Result<Vec<Employee>, ApiError>>,
    pub submit_action: Action<Submission, Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

/// A failed fetch keeps whatever list was already shown; a successful one
/// replaces it and drops any earlier notice.
fn apply_fetch_result(
    result: Option<Result<Vec<Employee>, ApiError>>,
    employees: RwSignal<Vec<Employee>>,
    notice: RwSignal<Option<String>>,
) {
    match result {
        Some(Ok(list)) => {
            employees.set(list);
            notice.set(None);
        }
        Some(Err(err)) => {
            log::warn!("Failed to load employees: {}", err);
            notice.set(Some("Failed to load employees".to_string()));
        }
        None => {}
    }
}

/// Returns `true` when the list must be refetched.
fn apply_submit_result(
    result: Option<Result<(), ApiError>>,
    form: RwSignal<EmployeeFormState>,
    editor: RwSignal<EditorState>,
    notice: RwSignal<Option<String>>,
) -> bool {
    match result {
        Some(Ok(())) => {
            editor.set(EditorState::Closed);
            form.set(EmployeeFormState::default());
            notice.set(None);
            true
        }
        Some(Err(err)) => {
            log::warn!("Failed to save employee: {}", err);
            let message = err.message_or(GENERIC_SUBMIT_ERROR);
            match field_for_server_error(&err) {
                Some(field) => form.update(|form| form.errors.set(field, message)),
                None => notice.set(Some(message)),
            }
            false
        }
        None => false,
    }
}

fn apply_delete_result(
    result: Option<Result<(), ApiError>>,
    notice: RwSignal<Option<String>>,
) -> bool {
    match result {
        Some(Ok(())) => {
            notice.set(None);
            true
        }
        Some(Err(err)) => {
            log::error!("Failed to delete employee: {}", err);
            notice.set(Some("Delete Failed".to_string()));
            false
        }
        None => false,
    }
}

/// Closes the confirmation; yields the id to delete only when confirmed.
fn take_confirmed_delete(
    pending_delete: RwSignal<Option<Employee>>,
    confirmed: bool,
) -> Option<String> {
    let target = pending_delete.get_untracked();
    pending_delete.set(None);
    target.filter(|_| confirmed).map(|employee| employee.id)
}

impl EmployeesViewModel {
    pub fn open_create(&self) {
        self.form.set(EmployeeFormState::default());
        self.editor.set(EditorState::Creating);
    }

    pub fn open_edit(&self, employee: &Employee) {
        self.form.set(EmployeeFormState::from_employee(employee));
        self.editor.set(EditorState::Updating {
            id: employee.id.clone(),
        });
    }

    pub fn cancel_edit(&self) {
        self.editor.set(EditorState::Closed);
        self.form.set(EmployeeFormState::default());
    }

    pub fn input(&self, field: EmployeeField, value: String) {
        self.form.update(|form| form.input(field, value));
    }

    pub fn field_value(&self, field: EmployeeField) -> String {
        self.form.with(|form| form.value(field).to_string())
    }

    pub fn field_error(&self, field: EmployeeField) -> Option<String> {
        self.form
            .with(|form| form.errors.get(field).map(str::to_string))
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let editor = self.editor.get_untracked();
        let mut submission = None;
        self.form
            .update(|form| submission = prepare_submission(form, &editor));
        if let Some(submission) = submission {
            self.notice.set(None);
            self.submit_action.dispatch(submission);
        }
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn resolve_delete(&self, confirmed: bool) {
        if let Some(id) = take_confirmed_delete(self.pending_delete, confirmed) {
            self.delete_action.dispatch(id);
        }
    }

    pub fn select_department(&self, value: &str) {
        self.filter.set(DepartmentFilter::from_select_value(value));
    }

    pub fn visible_employees(&self) -> Vec<Employee> {
        self.employees
            .with(|list| self.filter.with(|filter| filter_employees(list, filter)))
    }

    pub fn department_options(&self) -> Vec<String> {
        self.employees.with(|list| department_options(list))
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let repository = EmployeesRepository::new();
    let employees = create_rw_signal(Vec::<Employee>::new());
    let form = create_rw_signal(EmployeeFormState::default());
    let editor = create_rw_signal(EditorState::Closed);
    let filter = create_rw_signal(DepartmentFilter::All);
    let notice = create_rw_signal(None::<String>);
    let pending_delete = create_rw_signal(None::<Employee>);

    let repo_for_fetch = repository.clone();
    let fetch_action = create_action(move |_: &()| {
        let repo = repo_for_fetch.clone();
        async move { repo.fetch_employees().await }
    });

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |submission: &Submission| {
        let repo = repo_for_submit.clone();
        let submission = submission.clone();
        async move { repo.save_employee(submission).await }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete_employee(id).await }
    });

    create_effect(move |_| fetch_action.dispatch(()));

    create_effect(move |_| {
        apply_fetch_result(fetch_action.value().get(), employees, notice);
    });

    create_effect(move |_| {
        if apply_submit_result(submit_action.value().get(), form, editor, notice) {
            fetch_action.dispatch(());
        }
    });

    create_effect(move |_| {
        if apply_delete_result(delete_action.value().get(), notice) {
            fetch_action.dispatch(());
        }
    });

    EmployeesViewModel {
        employees,
        form,
        editor,
        filter,
        notice,
        pending_delete,
        fetch_action,
        submit_action,
        delete_action,
    }
}
