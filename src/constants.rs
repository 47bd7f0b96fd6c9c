// アプリケーション名（設定・データディレクトリ名）
pub const APP_NAME: &str = "album-thumbnails";

// freedesktop.org サムネイル仕様のディレクトリ構成
pub const THUMBNAILS_DIR: &str = "thumbnails";
pub const NORMAL_DIR: &str = "normal";
pub const LARGE_DIR: &str = "large";

// サムネイルサイズ（px）
pub const NORMAL_SIZE: u32 = 128;
pub const LARGE_SIZE: u32 = 256;

// サムネイルファイルの拡張子
pub const THUMBNAIL_EXTENSION: &str = "png";

// 画像サイズ制限（DoS防止）
pub const MAX_IMAGE_DIMENSION: u32 = 65535;      // 最大辺長
pub const MAX_PIXEL_COUNT: u64 = 100_000_000;    // 最大ピクセル数（100メガピクセル）

// インポート対象の拡張子
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "opus", "m4a", "wav", "aiff", "ape", "wv"];
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

// カバー画像として優先するファイル名（拡張子なし）
pub const COVER_NAMES: &[&str] = &["cover", "folder", "front", "album"];

// ファイル名
pub const LIBRARY_FILE: &str = "library.json";
pub const CONFIG_FILE: &str = "config.json";

// 環境変数
pub const ENV_LIBRARY: &str = "ALBUM_THUMBNAILS_LIBRARY";
pub const ENV_BACKEND: &str = "ALBUM_THUMBNAILS_BACKEND";
