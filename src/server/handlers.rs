use super::types::{AnalyzeResponse, ErrorResponse};
use crate::analysis::{Analyst, FileUpload, UploadedImage};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub analyst: Arc<Analyst>,
}

/// Serves the single-page studio UI.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4().to_string();

    info!("Received analysis request: {}", request_id);

    match process_submission(&state, multipart).await {
        Ok(analysis) => {
            info!("Completed analysis request: {}", request_id);
            Ok(Json(AnalyzeResponse { analysis }))
        }
        Err(e) => {
            error!("Failed analysis request {}: {}", request_id, e);
            Err((
                e.status_code(),
                Json(ErrorResponse {
                    error: e.user_message(),
                }),
            ))
        }
    }
}

/// Walks the form fields and runs the analysis. Unknown fields are ignored.
async fn process_submission(state: &AppState, mut multipart: Multipart) -> crate::Result<String> {
    let mut instruction = String::new();
    let mut upload: Option<FileUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "instruction" => instruction = field.text().await?,
            "image" => {
                let content_type = field.content_type().map(|s| s.to_string());
                let data = field.bytes().await?.to_vec();
                upload = Some(FileUpload { content_type, data });
            }
            _ => {}
        }
    }

    let image = UploadedImage::from_upload(upload)?;

    state.analyst.analyze(&instruction, &image).await
}
