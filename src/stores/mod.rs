pub mod session_store;
pub mod dashboard_store;

pub use session_store::{logout, SessionStore};
pub use dashboard_store::{DashboardAction, DashboardBody, DashboardStore};
