use std::path::PathBuf;
use thiserror::Error;

/// サムネイル生成・ライブラリ操作のエラー
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("絶対パスではないためURIに変換できません: {}", .0.display())]
    RelativePath(PathBuf),

    #[error("キャッシュディレクトリ作成失敗: {} - {source}", path.display())]
    CacheDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("リサイズエラー: {0}")]
    Resize(String),

    #[error("ライブラリエラー: {0}")]
    Library(String),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSONエラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for ThumbnailError {
    fn from(err: image::ImageError) -> Self {
        ThumbnailError::Resize(err.to_string())
    }
}

pub type ThumbResult<T> = Result<T, ThumbnailError>;
