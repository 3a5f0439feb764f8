//! Video upload and analysis handler.

use std::path::PathBuf;
use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{info, warn};
use uuid::Uuid;

use stride_media::{analyze_video, is_supported_extension};
use stride_models::AnalysisRecord;

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::security::{sanitize_filename, sanitize_identifier};
use crate::state::AppState;

/// The parsed multipart upload.
struct UploadRequest {
    filename: String,
    data: Vec<u8>,
    athlete_id: Option<String>,
    test_type: Option<String>,
}

async fn read_multipart(mut multipart: Multipart) -> ApiResult<UploadRequest> {
    let mut video: Option<(String, Vec<u8>)> = None;
    let mut athlete_id = None;
    let mut test_type = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("video") => {
                let filename = field
                    .file_name()
                    .map(sanitize_filename)
                    .filter(|f| !f.is_empty())
                    .ok_or_else(|| ApiError::bad_request("Video part is missing a filename"))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
                video = Some((filename, data.to_vec()));
            }
            Some("athlete_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed athlete_id: {e}")))?;
                athlete_id = Some(sanitize_identifier(&text)).filter(|s| !s.is_empty());
            }
            Some("test_type") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed test_type: {e}")))?;
                test_type = Some(sanitize_identifier(&text)).filter(|s| !s.is_empty());
            }
            // Unknown parts are drained and ignored.
            _ => {}
        }
    }

    let (filename, data) = video.ok_or_else(|| ApiError::bad_request("No video file uploaded"))?;

    Ok(UploadRequest {
        filename,
        data,
        athlete_id,
        test_type,
    })
}

/// `POST /api/analyze-video`
///
/// Accepts a multipart upload (`video` file plus optional `athlete_id` /
/// `test_type` text parts), runs the full analysis, and returns the
/// metrics record. On any failure the per-analysis output directory is
/// removed before the error response goes out; no partial results survive.
pub async fn analyze_video_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<AnalysisRecord>> {
    let upload = read_multipart(multipart).await?;

    if !is_supported_extension(&upload.filename) {
        return Err(ApiError::bad_request(
            "Only MP4, WebM, MOV, and AVI files are supported",
        ));
    }

    let analysis_id = Uuid::new_v4().to_string();
    let analysis_dir = state.config.results_dir.join(&analysis_id);
    tokio::fs::create_dir_all(&analysis_dir)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create analysis directory: {e}")))?;

    // Until dismissed, this removes everything the analysis wrote.
    let cleanup = scopeguard::guard(analysis_dir.clone(), |dir: PathBuf| {
        if let Err(e) = std::fs::remove_dir_all(&dir) {
            warn!(dir = %dir.display(), "Failed to clean up analysis directory: {e}");
        }
    });

    let video_path = analysis_dir.join(&upload.filename);
    tokio::fs::write(&video_path, &upload.data)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to store upload: {e}")))?;

    let start = Instant::now();
    let result = match analyze_video(&video_path, &state.landmarker).await {
        Ok(result) => {
            metrics::record_analysis("success", start.elapsed().as_secs_f64());
            result
        }
        Err(e) => {
            metrics::record_analysis("failure", start.elapsed().as_secs_f64());
            return Err(e.into());
        }
    };

    let record = AnalysisRecord {
        result,
        analysis_id: analysis_id.clone(),
        original_filename: upload.filename,
        athlete_id: upload.athlete_id,
        test_type: upload.test_type,
    };

    let result_json = serde_json::to_vec_pretty(&record)
        .map_err(|e| ApiError::internal(format!("Failed to encode result: {e}")))?;
    tokio::fs::write(analysis_dir.join("result.json"), result_json)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to store result: {e}")))?;

    // Analysis and result write succeeded; keep the output directory.
    let _ = scopeguard::ScopeGuard::into_inner(cleanup);

    info!(
        analysis_id = %analysis_id,
        overall_score = record.result.overall_score,
        duration_secs = start.elapsed().as_secs_f64(),
        "Analysis complete"
    );

    Ok(Json(record))
}
