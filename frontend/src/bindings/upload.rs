use web_sys::File;

use super::core::{new_form, post_form, ApiError, RawResponse, UPLOAD_URL};

/// Multipart field the backend reads the CSV from
pub const UPLOAD_FIELD: &str = "file";

/// Upload one file as multipart form data.
///
/// Any HTTP response, success or not, is returned as `Ok`; the caller decides
/// what a failure status means for navigation.
pub async fn upload_file(file: &File) -> Result<RawResponse, ApiError> {
    let form = new_form()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    log::info!("Uploading {} ({} bytes)", file.name(), file.size());
    post_form(UPLOAD_URL, &form).await
}
