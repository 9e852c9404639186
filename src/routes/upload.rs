use actix_multipart::Multipart;
use actix_web::{post, web};
use futures::TryStreamExt;
use log::info;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::config::EnvConfig;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::safe_file_name;

const FILE_FIELD: &str = "file";

/// Streams the multipart field `file` into the upload directory under its
/// original (sanitized) name. Other fields are drained and ignored.
#[post("")]
async fn upload(
    config: web::Data<EnvConfig>,
    mut payload: Multipart,
) -> ApiResult<()> {
    info!("Uploading file");

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::Internal(format!("reading multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned)
            .ok_or_else(|| AppError::Internal("file field has no filename".to_string()))?;
        let file_name = safe_file_name(&original)?;
        let dest = config.upload_dir.join(&file_name);

        let mut dst = File::create(&dest).await?;
        let mut written = 0usize;
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::Internal(format!("reading file {file_name}: {e}")))?
        {
            dst.write_all(&chunk).await?;
            written += chunk.len();
        }
        dst.flush().await?;

        info!("Stored {} ({} bytes) at {}", file_name, written, dest.display());
        return Ok(ApiResponse::Text("File uploaded!!".to_string()));
    }

    Err(AppError::Internal(format!("missing form file {FILE_FIELD:?}")))
}
