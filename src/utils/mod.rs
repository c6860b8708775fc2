// Shared helpers

pub mod constants;
pub mod storage;
pub mod validation;
pub mod geolocation;
pub mod dialog;

pub use constants::*;
pub use dialog::show_alert;
