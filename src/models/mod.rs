pub mod auth;
pub mod sos;
pub mod upload;

pub use auth::{AuthResponse, Credentials, ErrorBody, LoginRequest, SignupRequest};
pub use sos::{
    AcceptSosRequest, ActiveAssignment, Location, SosAlert, SosAlertPayload, SosSearchResponse,
    StatusResponse,
};
pub use upload::ImageUploadResponse;
