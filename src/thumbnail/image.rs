use std::path::{Path, PathBuf};
use crate::error::ThumbResult;
use crate::image_utils::{create_thumbnail, validate_dimensions, write_png};
use super::resizer::ArtResizer;

// image クレートによるプロセス内リサイズ
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateResizer;

impl ArtResizer for ImageCrateResizer {
    fn is_local_available(&self) -> bool {
        true
    }

    fn get_dimensions(&self, path: &Path) -> Option<(u32, u32)> {
        match image::image_dimensions(path) {
            Ok(size) => Some(size),
            Err(e) => {
                log::debug!("画像サイズ取得エラー: {} - {}", path.display(), e);
                None
            }
        }
    }

    fn resize(&self, size: u32, source: &Path, dest: &Path) -> ThumbResult<PathBuf> {
        let (width, height) = image::image_dimensions(source)?;
        validate_dimensions(width, height)?;

        let img = image::open(source)?;
        write_png(&create_thumbnail(img, size), dest)?;

        Ok(dest.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn reads_dimensions_and_resizes() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("cover.png");
        DynamicImage::ImageRgb8(RgbImage::new(300, 150)).save(&source).unwrap();

        let resizer = ImageCrateResizer;
        assert_eq!(resizer.get_dimensions(&source), Some((300, 150)));

        let dest = tmp.path().join("staging.png");
        let out = resizer.resize(128, &source, &dest).unwrap();
        assert_eq!(out, dest);
        assert_eq!(image::image_dimensions(&dest).unwrap(), (128, 64));
    }

    #[test]
    fn missing_file_has_no_dimensions() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(ImageCrateResizer.get_dimensions(&tmp.path().join("nope.jpg")), None);
    }

    #[test]
    fn undecodable_file_fails_to_resize() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("cover.jpg");
        std::fs::write(&source, b"not an image").unwrap();

        let result = ImageCrateResizer.resize(128, &source, &tmp.path().join("out.png"));
        assert!(result.is_err());
    }
}
