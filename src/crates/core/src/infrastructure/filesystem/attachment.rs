use crate::util::errors::{PatentProError, PatentProResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, error};
use patentpro_core_types::MediaAttachment;
use std::path::Path;

/// Used when the extension says nothing; uploads are usually PDF dossiers.
pub const FALLBACK_MIME_TYPE: &str = "application/pdf";

/// A file read from disk, ready to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub name: String,
    pub attachment: MediaAttachment,
}

pub fn infer_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        Some("pdf") => "application/pdf",
        Some("txt") | Some("md") => "text/plain",
        _ => FALLBACK_MIME_TYPE,
    }
}

pub async fn load_attachment(path: &Path) -> PatentProResult<LoadedFile> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        error!("Failed to read attachment: path={}, error={}", path.display(), e);
        PatentProError::io(format!("文件读取失败: {}: {}", path.display(), e))
    })?;

    if bytes.is_empty() {
        return Err(PatentProError::io(format!(
            "文件内容为空: {}",
            path.display()
        )));
    }

    let mime_type = infer_mime_type(path);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    debug!(
        "Loaded attachment: name={}, mime_type={}, bytes={}",
        name,
        mime_type,
        bytes.len()
    );

    Ok(LoadedFile {
        name,
        attachment: MediaAttachment::new(STANDARD.encode(&bytes), mime_type),
    })
}

/// Splits a `data:<mime>;base64,<payload>` URL into an attachment.
///
/// Without a MIME type in the header the fallback type is used.
pub fn strip_data_url(data_url: &str) -> PatentProResult<MediaAttachment> {
    let (header, payload) = data_url
        .split_once(',')
        .ok_or_else(|| PatentProError::validation("文件内容为空"))?;

    if payload.is_empty() {
        return Err(PatentProError::validation("文件内容为空"));
    }

    let mime_type = header
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|mime| !mime.is_empty())
        .unwrap_or(FALLBACK_MIME_TYPE);

    Ok(MediaAttachment::new(payload, mime_type))
}
