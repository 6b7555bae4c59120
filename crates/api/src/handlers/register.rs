//! Handlers for the registration form: form page and submission intake.

use axum::extract::Multipart;
use axum::response::Html;
use chrono::{SecondsFormat, Utc};

use enroll_core::form::{field, FileMeta, FormData};
use enroll_core::normalize::normalize_submission;

use crate::error::{AppError, AppResult};
use crate::pages;

/// GET /
///
/// Serve the registration form document.
pub async fn show_form() -> Html<&'static str> {
    Html(pages::FORM_PAGE)
}

/// POST /register
///
/// Accept a multipart submission, normalize the multi-valued fields, log the
/// payload, and confirm receipt. The client is trusted to have run the
/// validation pass; nothing is re-checked or rejected here, including the
/// honeypot -- whatever parses gets logged as-is.
pub async fn submit(mut multipart: Multipart) -> AppResult<Html<String>> {
    let mut fields = FormData::new();
    let mut photo: Option<FileMeta> = None;

    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = part.name().map(str::to_string) else {
            continue;
        };

        if name == field::PHOTO {
            let original_name = part.file_name().unwrap_or_default().to_string();
            let mime_type = part.content_type().unwrap_or_default().to_string();
            let data = part
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            // A file input left empty still submits a part; treat it as absent.
            if original_name.is_empty() && data.is_empty() {
                continue;
            }
            photo = Some(FileMeta {
                original_name,
                mime_type,
                size_bytes: data.len() as u64,
            });
            // `data` drops here; only the metadata outlives the request.
        } else {
            let text = part
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            fields.push_text(&name, text);
        }
    }

    let payload = normalize_submission(fields, photo, Utc::now());

    let dump = serde_json::to_string_pretty(&payload)
        .map_err(|e| AppError::Internal(format!("Failed to serialize payload: {e}")))?;
    tracing::info!(payload = %dump, "New registration received");

    let submitted_at = payload
        .submitted_at
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    Ok(Html(pages::confirmation_page(&submitted_at)))
}
