pub mod employees;
pub mod login;
pub mod register;

pub use employees::EmployeesPage;
pub use login::LoginPage;
pub use register::RegisterPage;
