pub mod auth;
pub mod home_view;
pub mod dashboard_view;

pub use auth::AuthorizationView;
pub use home_view::HomeView;
pub use dashboard_view::DashboardView;
