use crate::components::{guard::RequireSession, layout::Layout};
use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::EmployeesPanel;

/// The dashboard screen. Only reachable with a stored session token.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <RequireSession>
            <Layout>
                <EmployeesPanel />
            </Layout>
        </RequireSession>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::signed_in_session;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn dashboard_renders_for_signed_in_session() {
        let html = render_with_session(signed_in_session(), || view! { <EmployeesPage /> });
        assert!(html.contains("Employees"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("No employees found"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn dashboard_renders_nothing_without_token() {
        let html = render_with_session(Session::in_memory(), || view! { <EmployeesPage /> });
        assert!(!html.contains("Add Employee"));
        assert!(!html.contains("department-filter"));
    }
}
