use gloo_storage::{SessionStorage, Storage};

// Tab-scoped and cleared when the tab closes. Values are kept as plain
// strings rather than gloo's JSON encoding.

pub fn save_to_session(key: &str, value: &str) -> Result<(), String> {
    SessionStorage::raw()
        .set_item(key, value)
        .map_err(|_| format!("Could not write '{}' to sessionStorage", key))
}

pub fn load_from_session(key: &str) -> Option<String> {
    SessionStorage::raw().get_item(key).ok()?.filter(|v| !v.is_empty())
}

pub fn remove_from_session(key: &str) {
    SessionStorage::delete(key);
}
