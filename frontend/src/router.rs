use leptos::*;
use leptos_router::*;

use crate::{
    pages::{employees::EmployeesPage, login::LoginPage, register::RegisterPage},
    state::session::SessionProvider,
    utils::navigation::{DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH},
};

pub const ROUTE_PATHS: &[&str] = &["/", LOGIN_PATH, REGISTER_PATH, DASHBOARD_PATH];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[DASHBOARD_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    leptos_meta::provide_meta_context();
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=REGISTER_PATH view=RegisterPage/>
                    <Route path=DASHBOARD_PATH view=EmployeesPage/>
                    <Route path="/*any" view=LoginPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn auth_screens_are_public() {
        assert!(!PROTECTED_ROUTE_PATHS.contains(&LOGIN_PATH));
        assert!(!PROTECTED_ROUTE_PATHS.contains(&REGISTER_PATH));
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
