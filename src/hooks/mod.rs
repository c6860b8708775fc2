pub mod use_auth;
pub mod use_dashboard;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_dashboard::{use_dashboard, UseDashboardHandle};
