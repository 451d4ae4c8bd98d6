use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://employee-infocrud-backend-flask.onrender.com/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_string(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn get_from_env_js() -> Option<String> {
    // window.__EMPLOYEE_MANAGER_ENV = { API_BASE_URL: "..." }
    read_global_string("__EMPLOYEE_MANAGER_ENV", ["API_BASE_URL", "api_base_url"])
}

fn get_from_window_config() -> Option<String> {
    // window.__EMPLOYEE_MANAGER_CONFIG = { api_base_url: "..." }
    read_global_string("__EMPLOYEE_MANAGER_CONFIG", ["api_base_url", "API_BASE_URL"])
}

fn snapshot_from_globals() -> Option<String> {
    get_from_env_js().or_else(get_from_window_config)
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(config_json_url()?).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves the API base URL once: env.js globals, then `config.json`,
/// then the built-in default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .filter(|url| !url.trim().is_empty())
    {
        return cache_base_url(&url);
    }
    log::info!("Using default API base URL");
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL resolved to {}", url);
}
