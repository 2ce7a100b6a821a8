/**
 * Upload Handler
 *
 * This module implements POST /upload. The route sits behind
 * `auth_middleware`, so the handler only runs for a verified token.
 *
 * # Upload Process
 *
 * 1. Find the multipart field named `file`
 * 2. Reduce its filename to the last path component
 * 3. Check the suffix against the allowed list
 * 4. Write the bytes to the upload directory (same name overwrites)
 * 5. Record the filename and uploader in the `files` table
 */

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection}, Multipart, State,
    },
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::upload::files::record_file;
use crate::backend::upload::policy::{is_allowed, sanitize_filename};
use crate::shared::MessageResponse;

/// Name of the multipart field carrying the upload
pub const FILE_FIELD: &str = "file";

/// A file pulled out of the multipart body
struct UploadedFile {
    filename: String,
    data: axum::body::Bytes,
}

/// Upload handler
///
/// # Errors
///
/// * `400 Bad Request` - `"No file"` when the body is not multipart or has
///   no `file` part carrying a filename,
///   `"Invalid filename"` when sanitizing leaves nothing,
///   `"Only images and PDFs allowed"` for any other suffix
/// * `401 Unauthorized` - from the auth middleware
/// * `413 Payload Too Large` - body over `max_upload_bytes`
/// * `500 Internal Server Error` - write or insert failed
pub async fn upload_file(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let multipart = multipart.map_err(|e| {
        tracing::warn!("Upload from user {} is not multipart: {}", user.user_id, e);
        BackendError::bad_request("No file")
    })?;

    let upload = read_file_field(multipart).await?.ok_or_else(|| {
        tracing::warn!("Upload without a '{}' field from user {}", FILE_FIELD, user.user_id);
        BackendError::bad_request("No file")
    })?;

    let filename = sanitize_filename(&upload.filename).ok_or_else(|| {
        tracing::warn!("Unusable upload filename: {:?}", upload.filename);
        BackendError::bad_request("Invalid filename")
    })?;

    if !is_allowed(filename) {
        tracing::warn!("Rejected upload with disallowed name: {}", filename);
        return Err(BackendError::bad_request("Only images and PDFs allowed"));
    }

    let path = state.config.upload_dir.join(filename);
    tokio::fs::write(&path, &upload.data).await?;

    let record_id = record_file(&state.db_pool, filename, Some(user.user_id)).await?;

    tracing::info!(
        "Stored upload {} ({} bytes) for user {} as record {}",
        filename,
        upload.data.len(),
        user.user_id,
        record_id
    );

    Ok(Json(MessageResponse::new("File uploaded")))
}

/// Read the first `file` field that carries a filename, skipping any others
///
/// A `file` part without a filename is a plain form value, not an upload.
async fn read_file_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, BackendError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(UploadedFile { filename, data }));
    }

    Ok(None)
}

fn multipart_error(e: MultipartError) -> BackendError {
    tracing::warn!("Failed to read multipart body: {}", e);
    BackendError::handler(e.status(), e.body_text())
}
