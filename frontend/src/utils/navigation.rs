pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Full-page navigation; resets all in-memory view state on the way.
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(current) = location.pathname() {
            if current == path {
                return;
            }
        }
        if location.set_href(path).is_err() {
            log::warn!("Failed to navigate to {}", path);
        }
    }
}
