pub mod loading;
pub mod field_error;
pub mod navbar;
pub mod alert_card;
pub mod active_assignment_card;
pub mod id_proof_dropzone;

pub use loading::Loading;
pub use field_error::FieldError;
pub use navbar::Navbar;
pub use alert_card::AlertCard;
pub use active_assignment_card::ActiveAssignmentCard;
pub use id_proof_dropzone::IdProofDropzone;
