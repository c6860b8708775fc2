pub mod api_error;
pub mod api_client;
pub mod auth_service;
pub mod upload_service;
pub mod socket_io;
pub mod alert_feed;

pub use api_error::ApiError;
pub use api_client::ApiClient;
pub use auth_service::*;
pub use upload_service::upload_id_proof;
pub use alert_feed::AlertFeed;
