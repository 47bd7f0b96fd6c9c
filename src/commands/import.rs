use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::constants::COVER_NAMES;
use crate::error::{ThumbResult, ThumbnailError};
use crate::events::{EventBus, LibraryEvent};
use crate::image_utils::{is_audio_file, is_image_file};
use crate::library::Library;
use crate::types::{Album, NewAlbum};

// "1998 - Moon Safari" 形式なら年とアルバム名に分ける
fn split_year(name: &str) -> (Option<u32>, String) {
    if let Some((prefix, rest)) = name.split_once(" - ") {
        if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) && !rest.is_empty() {
            return (prefix.parse().ok(), rest.to_string());
        }
    }
    (None, name.to_string())
}

fn file_stem_lower(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

// カバー画像を選ぶ（既知の名前を優先、なければ自然順で最初の画像）
fn pick_cover(images: &[PathBuf]) -> Option<PathBuf> {
    COVER_NAMES
        .iter()
        .find_map(|name| images.iter().find(|p| file_stem_lower(p) == *name))
        .or_else(|| images.first())
        .cloned()
}

/// ディレクトリ直下に音声ファイルがあればアルバムとして扱う
pub fn scan_album_dir(dir: &Path) -> ThumbResult<Option<NewAlbum>> {
    let mut has_audio = false;
    let mut images: Vec<PathBuf> = Vec::new();

    for entry_result in fs::read_dir(dir)? {
        // ディレクトリエントリ読み込みエラーをログ出力
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                log::warn!("ディレクトリエントリ読み込みエラー: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_audio_file(&path) {
            has_audio = true;
        } else if is_image_file(&path) {
            images.push(path);
        }
    }

    if !has_audio {
        return Ok(None);
    }

    images.sort_by(|a, b| natord::compare(&a.to_string_lossy(), &b.to_string_lossy()));

    let dir_name = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    };
    let (year, album) = split_year(&dir_name(dir));
    let albumartist = dir.parent().map(dir_name).unwrap_or_default();

    Ok(Some(NewAlbum {
        albumartist,
        album,
        year,
        path: dir.to_path_buf(),
        artpath: pick_cover(&images),
    }))
}

/// ディレクトリ以下のアルバムをライブラリに追加し、インポートイベントを送る
pub fn import_dirs<S: AsRef<str>>(
    library: &mut Library,
    events: &EventBus,
    dirs: &[S],
) -> ThumbResult<Vec<Album>> {
    if dirs.is_empty() {
        return Err(ThumbnailError::Library("インポートするディレクトリを指定してください".to_string()));
    }

    let mut imported = Vec::new();
    for dir in dirs {
        let dir: &str = dir.as_ref();
        let root = std::path::absolute(dir)?;
        if !root.is_dir() {
            return Err(ThumbnailError::Library(format!("無効なフォルダパス: {}", root.display())));
        }

        let walker = WalkDir::new(&root)
            .sort_by(|a, b| natord::compare(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("ディレクトリ走査エラー: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            if library.contains_path(entry.path()) {
                log::info!("登録済みのためスキップ: {}", entry.path().display());
                continue;
            }

            let Some(new_album) = scan_album_dir(entry.path())? else {
                continue;
            };

            let album = library.add_album(new_album);
            library.save()?;
            log::info!("インポート: {}", album);
            events.send(LibraryEvent::AlbumImported, library, &album)?;
            imported.push(album);
        }
    }

    Ok(imported)
}
