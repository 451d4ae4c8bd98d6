use crate::api::{ApiError, Employee, EmployeePayload};
use crate::utils::validation::{email_error, is_letters_and_spaces, parse_number, FieldErrors};

pub const GENERIC_SUBMIT_ERROR: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeField {
    Name,
    Email,
    Department,
    Designation,
    Salary,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 5] = [
        EmployeeField::Name,
        EmployeeField::Email,
        EmployeeField::Department,
        EmployeeField::Designation,
        EmployeeField::Salary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::Name => "Name",
            EmployeeField::Email => "Email",
            EmployeeField::Department => "Department",
            EmployeeField::Designation => "Role",
            EmployeeField::Salary => "Salary",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            EmployeeField::Name => "employee-name",
            EmployeeField::Email => "employee-email",
            EmployeeField::Department => "employee-department",
            EmployeeField::Designation => "employee-designation",
            EmployeeField::Salary => "employee-salary",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            EmployeeField::Email => "email",
            EmployeeField::Salary => "number",
            _ => "text",
        }
    }

    /// Maps a field name as the server spells it.
    pub fn from_server_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "name" => Some(EmployeeField::Name),
            "email" => Some(EmployeeField::Email),
            "department" => Some(EmployeeField::Department),
            "designation" | "role" => Some(EmployeeField::Designation),
            "salary" => Some(EmployeeField::Salary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub salary: String,
    pub errors: FieldErrors<EmployeeField>,
}

/// Blank when the record carries no readable salary.
pub fn format_salary(salary: Option<f64>) -> String {
    salary.map(|value| value.to_string()).unwrap_or_default()
}

fn required_letters(value: &str, missing: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(missing)
    } else if !is_letters_and_spaces(value) {
        Some("Only letters allowed")
    } else {
        None
    }
}

fn salary_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Salary required");
    }
    match parse_number(value) {
        None => Some("Only numbers allowed"),
        Some(amount) if amount <= 0.0 => Some("Must be greater than 0"),
        Some(_) => None,
    }
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            designation: employee.designation.clone(),
            salary: format_salary(employee.salary),
            errors: FieldErrors::new(),
        }
    }

    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Name => &self.name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
            EmployeeField::Designation => &self.designation,
            EmployeeField::Salary => &self.salary,
        }
    }

    pub fn input(&mut self, field: EmployeeField, value: String) {
        let slot = match field {
            EmployeeField::Name => &mut self.name,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Department => &mut self.department,
            EmployeeField::Designation => &mut self.designation,
            EmployeeField::Salary => &mut self.salary,
        };
        *slot = value;
        self.errors.clear(field);
    }

    fn field_error(&self, field: EmployeeField) -> Option<&'static str> {
        let value = self.value(field);
        match field {
            EmployeeField::Name => required_letters(value, "Name is required"),
            EmployeeField::Email => email_error(value),
            EmployeeField::Department => required_letters(value, "Department required"),
            EmployeeField::Designation => required_letters(value, "Role required"),
            EmployeeField::Salary => salary_error(value),
        }
    }

    /// Recomputes every field error; returns `true` when the form may be sent.
    pub fn validate(&mut self) -> bool {
        self.errors.clear_all();
        for field in EmployeeField::ALL {
            if let Some(message) = self.field_error(field) {
                self.errors.set(field, message);
            }
        }
        self.errors.is_empty()
    }

    fn to_payload(&self) -> Option<EmployeePayload> {
        Some(EmployeePayload {
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
            designation: self.designation.clone(),
            salary: parse_number(&self.salary)?,
        })
    }
}

/// What the add/edit modal is doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Creating,
    Updating {
        id: String,
    },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    pub fn target_id(&self) -> Option<&str> {
        match self {
            EditorState::Updating { id } => Some(id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EditorState::Updating { .. } => "Edit Employee",
            _ => "Add Employee",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            EditorState::Updating { .. } => "Update",
            _ => "Add",
        }
    }
}

/// A validated form ready to send. `target` is set for updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub target: Option<String>,
    pub payload: EmployeePayload,
}

pub fn prepare_submission(form: &mut EmployeeFormState, editor: &EditorState) -> Option<Submission> {
    if !form.validate() {
        return None;
    }
    Some(Submission {
        target: editor.target_id().map(str::to_string),
        payload: form.to_payload()?,
    })
}

/// Department filter. `All` is kept apart from department names so a
/// department literally called "All" still filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    #[default]
    All,
    Department(String),
}

impl DepartmentFilter {
    pub fn from_select_value(value: &str) -> Self {
        if value.is_empty() {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Department(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            DepartmentFilter::All => "",
            DepartmentFilter::Department(name) => name,
        }
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Department(name) => employee.department == *name,
        }
    }
}

/// Distinct non-empty departments in first-appearance order.
pub fn department_options(employees: &[Employee]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for employee in employees {
        let department = &employee.department;
        if department.is_empty() || options.contains(department) {
            continue;
        }
        options.push(department.clone());
    }
    options
}

pub fn filter_employees(employees: &[Employee], filter: &DepartmentFilter) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| filter.matches(employee))
        .cloned()
        .collect()
}

/// Keyword match on a server message, first hit wins.
pub fn field_for_server_message(message: &str) -> Option<EmployeeField> {
    const KEYWORDS: [(&str, EmployeeField); 5] = [
        ("email", EmployeeField::Email),
        ("name", EmployeeField::Name),
        ("department", EmployeeField::Department),
        ("role", EmployeeField::Designation),
        ("salary", EmployeeField::Salary),
    ];
    let message = message.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map(|(_, field)| *field)
}

/// Field a rejected submit belongs to. A `field` named by the server wins
/// over keyword matching; errors without a server message map nowhere.
pub fn field_for_server_error(error: &ApiError) -> Option<EmployeeField> {
    if let Some(field) = error.field.as_deref().and_then(EmployeeField::from_server_name) {
        return Some(field);
    }
    error.server_message().and_then(field_for_server_message)
}
