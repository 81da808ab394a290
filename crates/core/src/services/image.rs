//! Image file to embedded `data:` URL conversion.
//!
//! The catalog stores `image_url` as an opaque string; this helper produces
//! the embedded form for locally uploaded files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Read an image file and encode it as a `data:<mime>;base64,...` URL
pub fn file_to_data_url(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for_path(path),
        STANDARD.encode(bytes)
    ))
}

fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_url_roundtrip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("pixel.png");
        let bytes = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        fs::write(&path, bytes)?;

        let url = file_to_data_url(&path)?;
        assert!(url.starts_with("data:image/png;base64,"));

        let payload = url.rsplit(',').next().unwrap();
        assert_eq!(STANDARD.decode(payload)?, bytes);

        Ok(())
    }

    #[test]
    fn test_unknown_extension_falls_back() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("blob.bin");
        fs::write(&path, b"blob")?;

        let url = file_to_data_url(&path)?;
        assert!(url.starts_with("data:application/octet-stream;base64,"));

        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = file_to_data_url(Path::new("/definitely/not/here.png"));
        assert!(result.is_err());
    }
}
