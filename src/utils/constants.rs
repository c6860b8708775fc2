/// Session storage keys shared by login, signup and the dashboard
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_VOLUNTEER_ID: &str = "volunteerId";

/// Local storage key for the light/dark preference
pub const STORAGE_KEY_THEME: &str = "quickaid_theme";

pub const PHONE_DIGITS: usize = 10;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const PHONE_COUNTRY_PREFIX: &str = "🇮🇳 +91";

pub const LOGO_SRC: &str = "/assets/images/loader.png";
pub const NAV_LOGO_SRC: &str = "/assets/images/logo.png";
