use std::fs;
use std::path::{Path, PathBuf};
use crate::cache::hash::thumbnail_file_name;
use crate::constants::THUMBNAILS_DIR;
use crate::error::{ThumbResult, ThumbnailError};
use crate::types::ThumbnailSize;

// サムネイルキャッシュディレクトリ（<cache-home>/thumbnails）
#[derive(Debug, Clone)]
pub struct ThumbnailCache {
    pub base_dir: PathBuf,
}

impl ThumbnailCache {
    pub fn new(cache_home: &Path) -> Self {
        Self {
            base_dir: cache_home.join(THUMBNAILS_DIR),
        }
    }

    pub fn dir_for(&self, size: ThumbnailSize) -> PathBuf {
        self.base_dir.join(size.directory_name())
    }

    // サイズ区分ごとのサムネイル保存先
    pub fn thumbnail_path(&self, size: ThumbnailSize, artpath: &Path) -> ThumbResult<PathBuf> {
        Ok(self.dir_for(size).join(thumbnail_file_name(artpath)?))
    }

    // normal / large ディレクトリを作成（既にあれば何もしない）
    pub fn ensure(&self) -> ThumbResult<()> {
        for size in ThumbnailSize::all() {
            let dir = self.dir_for(size);
            if dir.is_dir() {
                continue;
            }
            fs::create_dir_all(&dir).map_err(|source| ThumbnailError::CacheDir {
                path: dir.clone(),
                source,
            })?;
            log::debug!("キャッシュディレクトリを作成: {}", dir.display());
        }
        Ok(())
    }
}
