/// Preview decoding for the image cards
/// Reads sample PNGs and shrinks them to display size off the UI thread
use image::imageops::FilterType;
use std::path::PathBuf;

/// Longest edge of a decoded preview
const PREVIEW_SIZE: u32 = 768;

/// Decoded RGBA pixels ready to hand to the renderer
#[derive(Clone)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for Preview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preview")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Load a preview, returning None (and logging) if the file can't be used
pub async fn load_preview(path: PathBuf) -> Option<Preview> {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read sample image {}: {}", path.display(), e);
            return None;
        }
    };

    // Spawn blocking because decoding and resizing are CPU-intensive
    let decoded = tokio::task::spawn_blocking(move || decode_preview(&bytes)).await;

    match decoded {
        Ok(Ok(preview)) => Some(preview),
        Ok(Err(e)) => {
            tracing::warn!("Failed to decode sample image {}: {}", path.display(), e);
            None
        }
        Err(e) => {
            tracing::error!("Preview task for {} failed: {}", path.display(), e);
            None
        }
    }
}

fn decode_preview(bytes: &[u8]) -> Result<Preview, image::ImageError> {
    let mut img = image::load_from_memory(bytes)?;

    if img.width() > PREVIEW_SIZE || img.height() > PREVIEW_SIZE {
        img = img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Lanczos3);
    }

    let rgba = img.to_rgba8();
    Ok(Preview {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[tokio::test]
    async fn test_missing_file() {
        assert!(load_preview(PathBuf::from("/nonexistent/image_0.png")).await.is_none());
    }

    #[tokio::test]
    async fn test_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_0.png");
        std::fs::write(&path, b"definitely not png").unwrap();
        assert!(load_preview(path).await.is_none());
    }

    #[tokio::test]
    async fn test_small_image_kept_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_1.png");
        RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255])).save(&path).unwrap();

        let preview = load_preview(path).await.unwrap();
        assert_eq!((preview.width, preview.height), (4, 3));
        assert_eq!(preview.rgba.len(), 4 * 3 * 4);
        assert_eq!(&preview.rgba[..4], &[10, 20, 30, 255]);
    }

    #[tokio::test]
    async fn test_large_image_downscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_2.png");
        RgbaImage::new(1536, 1024).save(&path).unwrap();

        let preview = load_preview(path).await.unwrap();
        assert_eq!(preview.width, PREVIEW_SIZE);
        assert_eq!(preview.height, 512);
    }
}
