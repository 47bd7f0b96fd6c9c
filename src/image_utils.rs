use std::path::Path;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use crate::constants::{AUDIO_EXTENSIONS, IMAGE_EXTENSIONS, MAX_IMAGE_DIMENSION, MAX_PIXEL_COUNT};
use crate::error::{ThumbResult, ThumbnailError};

// 画像サイズ検証（DoS防止）
pub fn validate_dimensions(width: u32, height: u32) -> ThumbResult<()> {
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(ThumbnailError::Resize(format!(
            "画像サイズが大きすぎます: {}x{} (最大: {})",
            width, height, MAX_IMAGE_DIMENSION
        )));
    }
    let pixel_count = (width as u64) * (height as u64);
    if pixel_count > MAX_PIXEL_COUNT {
        return Err(ThumbnailError::Resize(format!(
            "ピクセル数が多すぎます: {} (最大: {})",
            pixel_count, MAX_PIXEL_COUNT
        )));
    }
    Ok(())
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

// カバー画像として扱える拡張子か
pub fn is_image_file(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

// 音声ファイルの拡張子か
pub fn is_audio_file(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
}

// size x size に収まるよう縮小（拡大はしない）
pub fn create_thumbnail(img: DynamicImage, size: u32) -> DynamicImage {
    if img.width() <= size && img.height() <= size {
        return img;
    }
    img.resize(size, size, FilterType::Lanczos3)
}

// PNG形式で書き出し（拡張子に関係なくPNG）
pub fn write_png(img: &DynamicImage, dest: &Path) -> ThumbResult<()> {
    img.save_with_format(dest, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn rejects_oversized_images() {
        assert!(validate_dimensions(300, 300).is_ok());
        assert!(validate_dimensions(0, 0).is_ok());
        assert!(validate_dimensions(MAX_IMAGE_DIMENSION + 1, 1).is_err());
        assert!(validate_dimensions(20_000, 20_000).is_err());
    }

    #[test]
    fn classifies_extensions_case_insensitively() {
        assert!(is_image_file(Path::new("/a/Cover.JPG")));
        assert!(is_image_file(Path::new("/a/folder.png")));
        assert!(!is_image_file(Path::new("/a/track.flac")));
        assert!(is_audio_file(Path::new("/a/01 Track.FLAC")));
        assert!(!is_audio_file(Path::new("/a/notes")));
    }

    #[test]
    fn shrinks_to_fit_preserving_aspect() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(400, 200));
        let thumb = create_thumbnail(img, 128);
        assert_eq!((thumb.width(), thumb.height()), (128, 64));
    }

    #[test]
    fn never_upscales() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(100, 50));
        let thumb = create_thumbnail(img, 256);
        assert_eq!((thumb.width(), thumb.height()), (100, 50));
    }
}
