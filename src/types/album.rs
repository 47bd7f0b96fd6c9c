use std::fmt;
use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ライブラリに登録されたアルバム
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: u64,
    pub albumartist: String,
    pub album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// アルバムのディレクトリ
    pub path: PathBuf,
    /// カバー画像の絶対パス（未設定ならアートなし）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artpath: Option<PathBuf>,
    /// 追加日時（RFC 3339 で保存）
    pub added: DateTime<Utc>,
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.albumartist, self.album)
    }
}

// 追加前のアルバム情報（IDと追加日時はライブラリが付与）
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlbum {
    pub albumartist: String,
    pub album: String,
    pub year: Option<u32>,
    pub path: PathBuf,
    pub artpath: Option<PathBuf>,
}
