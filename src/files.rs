use crate::constants::IMAGE_EXTENSIONS;
use crate::error::AgentError;
use std::{
    fs,
    io::Read,
    path::Path,
};

pub async fn encode_image(image_path: &Path) -> Result<String, AgentError> {
    let mut file = fs::File::open(image_path).map_err(|e| AgentError::input(image_path, e))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| AgentError::input(image_path, e))?;
    Ok(base64::encode(buffer))
}

pub async fn read_text_file(file_path: &Path) -> Result<String, AgentError> {
    fs::read_to_string(file_path).map_err(|e| AgentError::input(file_path, e))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

pub fn is_image_path(path: &Path) -> bool {
    extension(path).map_or(false, |ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

pub fn image_mime_type(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
