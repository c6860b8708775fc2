use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::models::upload::is_accepted_image;
use crate::models::ImageUploadResponse;
use crate::services::api_client::read_json;
use crate::services::api_error::ApiError;

/// Uploads an ID proof image and returns its public URL
pub async fn upload_id_proof(file: &File) -> Result<String, ApiError> {
    let mime = file.type_();
    if !is_accepted_image(&mime) {
        return Err(ApiError::Rejected(Some(format!("Unsupported image type '{}'", mime))));
    }

    let form = FormData::new().map_err(|_| ApiError::Unavailable("FormData"))?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    log::info!("📤 Uploading ID proof {} ({} bytes)", file.name(), file.size());
    // Browser sets the multipart boundary itself
    let response = Request::post(&CONFIG.image_upload_url)
        .body(JsValue::from(form))?
        .send()
        .await?;

    let uploaded: ImageUploadResponse = read_json(response).await?;
    log::info!("✅ ID proof stored at {}", uploaded.image_url);
    Ok(uploaded.image_url)
}
