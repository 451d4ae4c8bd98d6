use thiserror::Error;
use web_sys::{Storage, Window};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    Unavailable,
    #[error("Failed to read `{0}` from localStorage")]
    Read(String),
    #[error("Failed to write `{0}` to localStorage")]
    Write(String),
    #[error("Failed to remove `{0}` from localStorage")]
    Remove(String),
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

pub fn read_item(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Read(key.to_string()))
}

pub fn write_item(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Write(key.to_string()))
}

pub fn remove_item(key: &str) -> Result<(), StorageError> {
    local_storage()?
        .remove_item(key)
        .map_err(|_| StorageError::Remove(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_messages_name_the_key() {
        assert_eq!(StorageError::NoWindow.to_string(), "No window object");
        assert_eq!(
            StorageError::Write("token".into()).to_string(),
            "Failed to write `token` to localStorage"
        );
        assert_eq!(
            StorageError::Remove("token".into()).to_string(),
            "Failed to remove `token` from localStorage"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trips_items() {
        write_item("storage-test", "value").unwrap();
        assert_eq!(read_item("storage-test").unwrap().as_deref(), Some("value"));
        remove_item("storage-test").unwrap();
        assert!(read_item("storage-test").unwrap().is_none());
    }
}
