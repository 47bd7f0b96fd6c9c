use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::{ThumbResult, ThumbnailError};
use super::image::ImageCrateResizer;
use super::imagemagick::ImageMagickResizer;

/// 画像リサイズ機能（外部バックエンドへの委譲口）
pub trait ArtResizer {
    /// ローカルでリサイズできる状態か
    fn is_local_available(&self) -> bool;

    /// 画像の (幅, 高さ)。取得できなければ None
    fn get_dimensions(&self, path: &Path) -> Option<(u32, u32)>;

    /// `source` を `size` px に収まるよう縮小して `dest` に書き出し、結果のパスを返す
    fn resize(&self, size: u32, source: &Path, dest: &Path) -> ThumbResult<PathBuf>;
}

// 使用するリサイズバックエンド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Auto,
    Image,
    ImageMagick,
}

impl FromStr for BackendKind {
    type Err = ThumbnailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(BackendKind::Auto),
            "image" => Ok(BackendKind::Image),
            "imagemagick" => Ok(BackendKind::ImageMagick),
            other => Err(ThumbnailError::Config(format!(
                "不明なバックエンド: {} (auto / image / imagemagick)",
                other
            ))),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Auto => "auto",
            BackendKind::Image => "image",
            BackendKind::ImageMagick => "imagemagick",
        };
        f.write_str(name)
    }
}

// 設定に応じてバックエンドを選択（auto は ImageMagick 優先）
pub fn select_resizer(kind: BackendKind) -> Box<dyn ArtResizer> {
    match kind {
        BackendKind::Image => Box::new(ImageCrateResizer),
        BackendKind::ImageMagick => Box::new(ImageMagickResizer::default()),
        BackendKind::Auto => {
            let magick = ImageMagickResizer::default();
            if magick.is_local_available() {
                log::debug!("ImageMagick を使用します");
                Box::new(magick)
            } else {
                log::debug!("image クレートを使用します");
                Box::new(ImageCrateResizer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_names() {
        assert_eq!("auto".parse::<BackendKind>().unwrap(), BackendKind::Auto);
        assert_eq!(" Image ".parse::<BackendKind>().unwrap(), BackendKind::Image);
        assert_eq!("ImageMagick".parse::<BackendKind>().unwrap(), BackendKind::ImageMagick);
        assert!("pil".parse::<BackendKind>().is_err());
    }

    #[test]
    fn backend_kind_serializes_lowercase() {
        let json = serde_json::to_string(&BackendKind::ImageMagick).unwrap();
        assert_eq!(json, "\"imagemagick\"");
        assert_eq!(BackendKind::ImageMagick.to_string(), "imagemagick");
    }

    #[test]
    fn image_backend_is_always_available() {
        assert!(select_resizer(BackendKind::Image).is_local_available());
    }
}
