//! Spreadsheet upload endpoint.

use std::path::Path;

use axum::{
    extract::{multipart::MultipartError, Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::common::{Table, TableError};
use crate::domains::product_descriptions::{summarize, DescriptionSummary, ExtractionError};
use crate::server::app::AppState;

/// Multipart field carrying the workbook.
pub const FILE_FIELD: &str = "file";

/// Accepted workbook extensions, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No uploaded file found")]
    MissingFile,

    #[error("File must not exceed {}MB", .limit / (1024 * 1024))]
    TooLarge { limit: usize },

    #[error("Only Excel files are supported (.xlsx, .xls)")]
    UnsupportedType { extension: String },

    #[error("Could not read uploaded form: {0}")]
    Multipart(String),

    #[error("Could not read Excel file: {0}")]
    Workbook(#[from] TableError),

    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("File upload failed: {0}")]
    Internal(String),
}

impl UploadError {
    fn status(&self) -> StatusCode {
        match self {
            UploadError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorEnvelope {
    success: bool,
    message: String,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = %self, "Upload rejected");

        (
            status,
            Json(ErrorEnvelope {
                success: false,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub file_name: String,
    pub file_size: usize,
    pub excel_info: DescriptionSummary,
}

struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

/// Check size and extension of an uploaded file.
pub fn validate_upload(file_name: &str, size: usize, limit: usize) -> Result<(), UploadError> {
    if size > limit {
        warn!(size, limit, "Uploaded file exceeds size limit");
        return Err(UploadError::TooLarge { limit });
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        warn!(extension = %extension, "Unsupported file type");
        return Err(UploadError::UnsupportedType { extension });
    }

    Ok(())
}

async fn read_file_field(multipart: &mut Multipart, limit: usize) -> Result<UploadedFile, UploadError> {
    let multipart_error = |e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge { limit }
        } else {
            UploadError::Multipart(e.body_text())
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        return Ok(UploadedFile {
            name,
            bytes: bytes.to_vec(),
        });
    }

    Err(UploadError::MissingFile)
}

/// `POST /file/upload` - summarize the product descriptions of an order sheet
pub async fn upload_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    let file = read_file_field(&mut multipart, state.max_upload_bytes).await?;
    let file_size = file.bytes.len();

    validate_upload(&file.name, file_size, state.max_upload_bytes)?;
    info!(file_name = %file.name, file_size, "Received workbook upload");

    let bytes = file.bytes;
    let table = tokio::task::spawn_blocking(move || Table::from_workbook_bytes(bytes))
        .await
        .map_err(|e| UploadError::Internal(e.to_string()))??;

    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "Workbook read"
    );

    let summary = summarize(&table, state.generator.as_ref(), &state.refine_options).await?;

    Ok(Json(UploadResponse {
        success: true,
        message: "File uploaded successfully".to_string(),
        file_name: file.name,
        file_size,
        excel_info: summary,
    }))
}
