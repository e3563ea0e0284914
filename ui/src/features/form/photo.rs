//! Welcome-screen photo upload
//!
//! Reading a picked file is the only asynchronous step in the editor. Each
//! upload is identified by a [`PhotoUploadTicket`]; the store only applies a
//! completion whose ticket is still current, so reads that finish after the
//! user moved on are dropped instead of overwriting another field.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use dioxus::html::FileEngine;
use std::sync::Arc;

use crate::services::config::EditorConfig;
use crate::services::errors::{log_error, PhotoError, PhotoResult};
use crate::console_debug;

use super::store::FormAction;
use super::types::FieldId;

/// Identifies one in-flight photo read
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoUploadTicket {
    pub field_id: FieldId,
    pub generation: u64,
}

/// What happened to a finished photo read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Applied,
    Stale,
}

/// Source of user-picked files
#[async_trait(?Send)]
pub trait PhotoSource {
    fn file_names(&self) -> Vec<String>;

    async fn read(&self, name: &str) -> Option<Vec<u8>>;
}

/// Adapter over the files attached to a Dioxus form event
pub struct FileEngineSource {
    engine: Arc<dyn FileEngine>,
}

impl FileEngineSource {
    pub fn new(engine: Arc<dyn FileEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait(?Send)]
impl PhotoSource for FileEngineSource {
    fn file_names(&self) -> Vec<String> {
        self.engine.files()
    }

    async fn read(&self, name: &str) -> Option<Vec<u8>> {
        self.engine.read_file(name).await
    }
}

/// Fallback for files whose type cannot be determined
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Image MIME type judged by the file's leading bytes
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    let mime = match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xff, 0xd8, 0xff, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        [b'B', b'M', ..] => "image/bmp",
        [b'I', b'I', 0x2a, 0x00, ..] | [b'M', b'M', 0x00, 0x2a, ..] => "image/tiff",
        [_, _, _, _, b'f', b't', b'y', b'p', brand @ ..] if brand.len() >= 4 => {
            match &brand[..4] {
                b"avif" | b"avis" => "image/avif",
                b"heic" | b"heix" | b"mif1" | b"msf1" => "image/heic",
                _ => return None,
            }
        }
        [0x00, 0x00, 0x01, 0x00, ..] => "image/x-icon",
        _ => {
            let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
            let head = head.trim_start();
            if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
                "image/svg+xml"
            } else {
                return None;
            }
        }
    };
    Some(mime)
}

/// Image MIME type for a file name, judged by extension
pub fn mime_for(name: &str) -> Option<&'static str> {
    let extension = name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jfif" | "pjpeg" | "pjp" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "heic" | "heif" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

/// MIME type for a picked file: content first, then extension, then
/// [`UNKNOWN_MIME`]. Files are never rejected for their type.
pub fn photo_mime(name: &str, bytes: &[u8]) -> &'static str {
    sniff_mime(bytes)
        .or_else(|| mime_for(name))
        .unwrap_or(UNKNOWN_MIME)
}

/// Encode image bytes as a `data:` URL suitable for an `img` src
pub fn encode_photo(name: &str, bytes: &[u8], config: &EditorConfig) -> PhotoResult<String> {
    if bytes.is_empty() {
        return Err(PhotoError::Empty {
            name: name.to_string(),
        });
    }

    let size = bytes.len() as u64;
    if size > config.max_photo_bytes {
        return Err(PhotoError::TooLarge {
            name: name.to_string(),
            size,
            limit: config.max_photo_bytes,
        });
    }

    let mime = photo_mime(name, bytes);
    Ok(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
}

/// Read the first picked file and encode it.
///
/// `Ok(None)` means nothing was picked.
pub async fn read_photo<S>(source: &S, config: &EditorConfig) -> PhotoResult<Option<String>>
where
    S: PhotoSource + ?Sized,
{
    let Some(name) = source.file_names().into_iter().next() else {
        return Ok(None);
    };

    console_debug!("[PhotoUpload] Reading {}", name);
    let bytes = source
        .read(&name)
        .await
        .ok_or_else(|| PhotoError::ReadFailed { name: name.clone() })?;

    encode_photo(&name, &bytes, config).map(Some)
}

/// Run one upload to completion and produce the action that settles `ticket`
pub async fn run_photo_upload<S>(
    source: &S,
    ticket: PhotoUploadTicket,
    config: &EditorConfig,
) -> FormAction
where
    S: PhotoSource + ?Sized,
{
    match read_photo(source, config).await {
        Ok(Some(data_url)) => FormAction::CompletePhotoUpload(ticket, data_url),
        Ok(None) => FormAction::CancelPhotoUpload(ticket),
        Err(error) => {
            log_error("PhotoUpload", &error, error.severity());
            FormAction::CancelPhotoUpload(ticket)
        }
    }
}
