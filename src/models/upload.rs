use serde::Deserialize;

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    pub image_url: String,
}

/// MIME types accepted for the ID proof
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

pub fn is_accepted_image(mime: &str) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_jpeg_and_png() {
        assert!(is_accepted_image("image/jpeg"));
        assert!(is_accepted_image("image/png"));
        assert!(!is_accepted_image("image/gif"));
        assert!(!is_accepted_image("application/pdf"));
    }
}
