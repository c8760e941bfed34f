//! Document upload endpoint.

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use postlens_core::{AnalysisResult, TempUpload};
use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

/// Media type assumed when the part declares none.
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Response for a successfully analyzed document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub extracted_text: String,
    pub suggestions: Vec<String>,
}

impl From<AnalysisResult> for UploadResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            success: true,
            extracted_text: result.extracted_text,
            suggestions: result.suggestions,
        }
    }
}

/// Extract text from an uploaded document and suggest improvements.
/// POST /api/upload
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let limit = state.config.max_upload_bytes;
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::from_multipart(e, limit))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        upload = Some(spool_field(&state, field).await?);
        break;
    }

    let Some(mut upload) = upload else {
        return Err(ApiError::no_file());
    };

    debug!(
        media_type = upload.media_type(),
        size_bytes = upload.size_bytes(),
        "Upload received"
    );

    let outcome = match upload.read_document().await {
        Ok(doc) => state.analyzer.analyze(&doc).await,
        Err(e) => Err(e),
    };
    upload.release();

    Ok(Json(outcome?.into()))
}

/// Stream a multipart field into a temp file, removing it again on failure.
async fn spool_field(state: &AppState, mut field: Field<'_>) -> ApiResult<TempUpload> {
    let limit = state.config.max_upload_bytes;
    let media_type = field
        .content_type()
        .unwrap_or(FALLBACK_MEDIA_TYPE)
        .to_string();

    let mut upload = TempUpload::create(&state.config.upload_dir, media_type, limit)?;

    loop {
        let chunk = match field.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                upload.release();
                return Err(ApiError::from_multipart(e, limit));
            }
        };
        if let Err(e) = upload.write_chunk(&chunk).await {
            upload.release();
            return Err(e.into());
        }
    }

    Ok(upload)
}
