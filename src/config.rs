use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::constants::{APP_NAME, CONFIG_FILE, ENV_BACKEND, ENV_LIBRARY, LIBRARY_FILE};
use crate::error::{ThumbResult, ThumbnailError};
use crate::thumbnail::BackendKind;

/// 起動時に一度だけ解決する設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// キャッシュのベース（thumbnails/ はこの下）
    pub cache_home: PathBuf,
    /// ライブラリファイル
    pub library_path: PathBuf,
    pub backend: BackendKind,
}

// 設定ファイル形式（すべて省略可）
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub cache_home: Option<PathBuf>,
    pub library: Option<PathBuf>,
    pub backend: Option<BackendKind>,
}

// 設定ディレクトリを取得
fn get_config_path() -> ThumbResult<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| ThumbnailError::Config("設定ディレクトリを特定できません".to_string()))
}

impl AppConfig {
    // プラットフォーム既定値（XDG_CACHE_HOME は dirs が解決する）
    pub fn defaults() -> ThumbResult<Self> {
        let cache_home = dirs::cache_dir().ok_or_else(|| {
            ThumbnailError::Config("キャッシュディレクトリを特定できません".to_string())
        })?;
        let data_dir = dirs::data_dir().ok_or_else(|| {
            ThumbnailError::Config("データディレクトリを特定できません".to_string())
        })?;

        Ok(Self {
            cache_home,
            library_path: data_dir.join(APP_NAME).join(LIBRARY_FILE),
            backend: BackendKind::default(),
        })
    }

    /// 既定値 → 設定ファイル → 環境変数 の順に上書きして読み込む
    pub fn load() -> ThumbResult<Self> {
        let config_path = get_config_path()?.join(CONFIG_FILE);
        let file = read_config_file(&config_path)?;
        Self::resolve(Self::defaults()?, file, |key| env::var(key).ok())
    }

    pub fn resolve<F>(defaults: Self, file: Option<ConfigFile>, get_env: F) -> ThumbResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = defaults;

        if let Some(file) = file {
            if let Some(cache_home) = file.cache_home {
                config.cache_home = cache_home;
            }
            if let Some(library) = file.library {
                config.library_path = library;
            }
            if let Some(backend) = file.backend {
                config.backend = backend;
            }
        }

        if let Some(library) = get_env(ENV_LIBRARY).filter(|v| !v.is_empty()) {
            config.library_path = PathBuf::from(library);
        }
        if let Some(backend) = get_env(ENV_BACKEND).filter(|v| !v.is_empty()) {
            config.backend = backend.parse()?;
        }

        Ok(config)
    }
}

// 設定ファイルを読み込む（なければ None）
pub fn read_config_file(path: &Path) -> ThumbResult<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ThumbnailError::Config(format!("読み込みエラー: {} - {}", path.display(), e)))?;
    let file = serde_json::from_str(&content)
        .map_err(|e| ThumbnailError::Config(format!("JSON解析エラー: {} - {}", path.display(), e)))?;

    log::debug!("設定ファイルを読み込みました: {}", path.display());
    Ok(Some(file))
}
