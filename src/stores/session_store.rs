// ============================================================================
// SESSION STORE - volunteer credentials in sessionStorage
// ============================================================================

use crate::models::Credentials;
use crate::utils::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_VOLUNTEER_ID};
use crate::utils::storage::{load_from_session, remove_from_session, save_to_session};

pub struct SessionStore;

impl SessionStore {
    /// Both credentials, or `None` if either is missing
    pub fn load() -> Option<Credentials> {
        let token = load_from_session(STORAGE_KEY_TOKEN)?;
        let volunteer_id = load_from_session(STORAGE_KEY_VOLUNTEER_ID)?;
        Some(Credentials { token, volunteer_id })
    }

    pub fn save(credentials: &Credentials) -> Result<(), String> {
        save_to_session(STORAGE_KEY_TOKEN, &credentials.token)?;
        save_to_session(STORAGE_KEY_VOLUNTEER_ID, &credentials.volunteer_id)
    }

    pub fn clear() {
        for key in [STORAGE_KEY_TOKEN, STORAGE_KEY_VOLUNTEER_ID] {
            remove_from_session(key);
        }
        log::debug!("🧹 Session credentials cleared");
    }
}

/// Drops the session and hard-navigates to the landing page
pub fn logout() {
    SessionStore::clear();
    log::info!("👋 Logout");
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href("/") {
            log::error!("❌ Navigation to / failed: {:?}", e);
        }
    }
}
