mod image;
mod imagemagick;
mod resizer;
#[cfg(test)]
pub(crate) mod mock;

pub use self::image::ImageCrateResizer;
pub use self::imagemagick::ImageMagickResizer;
pub use self::resizer::{select_resizer, ArtResizer, BackendKind};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use crate::cache::ThumbnailCache;
use crate::constants::THUMBNAIL_EXTENSION;
use crate::error::ThumbResult;
use crate::types::{Album, ThumbnailSize};

/// アルバム1件の処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// アートが登録されていない
    NoArt,
    /// 画像サイズを取得できなかった
    NoDimensions,
    /// 書き出したサムネイル（large があれば先頭）
    Written(Vec<PathBuf>),
}

// アルバムアートからサムネイルを生成してキャッシュに配置する
pub struct ThumbnailGenerator {
    cache: ThumbnailCache,
    resizer: Box<dyn ArtResizer>,
}

impl ThumbnailGenerator {
    pub fn new(cache: ThumbnailCache, resizer: Box<dyn ArtResizer>) -> Self {
        Self { cache, resizer }
    }

    pub fn cache(&self) -> &ThumbnailCache {
        &self.cache
    }

    pub fn resizer(&self) -> &dyn ArtResizer {
        self.resizer.as_ref()
    }

    /// アルバムのサムネイルを生成する
    ///
    /// アートなし・サイズ取得失敗はスキップ扱い（エラーにしない）。
    /// リサイズや移動の失敗はそのまま返す。
    pub fn process(&self, album: &Album) -> ThumbResult<ProcessOutcome> {
        let Some(artpath) = album.artpath.as_deref() else {
            log::info!("アルバム {} にはアートがありません", album);
            return Ok(ProcessOutcome::NoArt);
        };

        let Some((width, height)) = self.resizer.get_dimensions(artpath) else {
            log::warn!("画像サイズを取得できません: {}", artpath.display());
            return Ok(ProcessOutcome::NoDimensions);
        };

        let mut written = Vec::with_capacity(2);
        if width.max(height) > 0 {
            written.push(self.make_cover_thumbnail(album, artpath, ThumbnailSize::Large)?);
        }
        written.push(self.make_cover_thumbnail(album, artpath, ThumbnailSize::Normal)?);

        log::info!("サムネイルを書き出しました: {}", album);
        Ok(ProcessOutcome::Written(written))
    }

    // 指定サイズのサムネイルを作成し、キャッシュディレクトリに移動
    fn make_cover_thumbnail(
        &self,
        album: &Album,
        artpath: &Path,
        size: ThumbnailSize,
    ) -> ThumbResult<PathBuf> {
        log::debug!("サムネイル作成 ({}px): {}", size.pixels(), album.path.display());

        // ファイル名は常に元のアートパスから求める（サイズはディレクトリで区別）
        let target = self.cache.thumbnail_path(size, artpath)?;
        let target_dir = self.cache.dir_for(size);

        // 同じディレクトリに作業ファイルを作り、リサイズ成功後に置き換える
        // 失敗時は TempPath の破棄で作業ファイルも消える
        let staging = tempfile::Builder::new()
            .prefix(".")
            .suffix(&format!(".{}", THUMBNAIL_EXTENSION))
            .tempfile_in(&target_dir)?
            .into_temp_path();

        let resized = self.resizer.resize(size.pixels(), artpath, &staging)?;

        // TODO: Thumb::URI / Thumb::MTime の PNG テキストチャンクを付与する
        move_file(&resized, &target)?;

        Ok(target)
    }
}

// rename できなければ（別ファイルシステム等）コピーして削除
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}
