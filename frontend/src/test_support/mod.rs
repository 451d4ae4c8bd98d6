#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Employee};
    use crate::state::session::{MemoryTokenStore, Session};
    use leptos::*;

    pub fn employee(id: &str, name: &str, department: &str) -> Employee {
        Employee {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", id),
            department: department.into(),
            designation: "Engineer".into(),
            salary: Some(50000.0),
        }
    }

    pub fn signed_in_session() -> Session {
        Session::with_store(MemoryTokenStore::with_token("test-token"))
    }

    /// Provides `session` and an API client bound to it; the client points
    /// at an unroutable host so nothing leaves the test.
    pub fn provide_session(session: Session) -> Session {
        provide_context(session.clone());
        provide_context(ApiClient::new_with_base_url(
            "http://127.0.0.1:9/api",
            session.clone(),
        ));
        session
    }
}
