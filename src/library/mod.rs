//! JSON ファイルに保存するアルバムライブラリ

pub mod query;

pub use query::Query;

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{ThumbResult, ThumbnailError};
use crate::types::{Album, NewAlbum};

// ライブラリファイル形式
#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    albums: Vec<Album>,
}

pub struct Library {
    path: PathBuf,
    data: LibraryFile,
}

impl Library {
    // ライブラリを開く（ファイルがなければ空）
    pub fn open(path: &Path) -> ThumbResult<Self> {
        let data = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                ThumbnailError::Library(format!("読み込みエラー: {} - {}", path.display(), e))
            })?;
            serde_json::from_str(&content)?
        } else {
            log::debug!("ライブラリファイルがないため空で開始: {}", path.display());
            LibraryFile::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.data.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.albums.is_empty()
    }

    pub fn save(&self) -> ThumbResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ThumbnailError::Library(format!("ディレクトリ作成エラー: {} - {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json).map_err(|e| {
            ThumbnailError::Library(format!("ファイル書き込みエラー: {} - {}", self.path.display(), e))
        })?;

        Ok(())
    }

    // アルバムを追加（IDと追加日時を付与）
    pub fn add_album(&mut self, new: NewAlbum) -> Album {
        let id = self.data.next_id.max(self.max_id()) + 1;
        self.data.next_id = id;

        let album = Album {
            id,
            albumartist: new.albumartist,
            album: new.album,
            year: new.year,
            path: new.path,
            artpath: new.artpath,
            added: chrono::Utc::now(),
        };
        self.data.albums.push(album.clone());
        album
    }

    pub fn get(&self, id: u64) -> Option<&Album> {
        self.data.albums.iter().find(|a| a.id == id)
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.data.albums.iter().any(|a| a.path == path)
    }

    // クエリに一致するアルバム（アルバムアーティスト、アルバム名の自然順）
    pub fn albums(&self, query: &Query) -> Vec<Album> {
        let mut albums: Vec<Album> = self
            .data
            .albums
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect();

        albums.sort_by(|a, b| {
            natord::compare_ignore_case(&a.albumartist, &b.albumartist)
                .then_with(|| natord::compare_ignore_case(&a.album, &b.album))
                .then_with(|| a.id.cmp(&b.id))
        });

        albums
    }

    fn max_id(&self) -> u64 {
        self.data.albums.iter().map(|a| a.id).max().unwrap_or(0)
    }
}
