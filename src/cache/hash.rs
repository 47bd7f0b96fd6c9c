//! freedesktop.org サムネイル仕様のファイル名導出
//!
//! サムネイル名は元画像の `file://` URI の MD5（小文字16進）に `.png` を付けたもの。
//! パス文字列のみから決まるため、内容が同じでもパスが違えば別エントリになる。
//! シンボリックリンクは解決しない。

use std::path::{Component, Path};
use crate::constants::THUMBNAIL_EXTENSION;
use crate::error::{ThumbResult, ThumbnailError};

const URI_SCHEME: &str = "file://";

/// 絶対パスを `file://` URI に変換する
///
/// 各パス要素はバイト単位でパーセントエンコードされ、
/// 非予約文字（英数字と `-_.~`）と区切りの `/` だけがそのまま残る。
pub fn file_uri(path: &Path) -> ThumbResult<String> {
    if !path.is_absolute() {
        return Err(ThumbnailError::RelativePath(path.to_path_buf()));
    }

    let mut uri = String::from(URI_SCHEME);

    // 先頭がちょうど "//" のパスは POSIX 上区別されるため、components() で潰さずに残す
    let raw = path.as_os_str().as_encoded_bytes();
    if raw.starts_with(b"//") && !raw.starts_with(b"///") {
        uri.push('/');
    }

    let body_start = uri.len();
    for component in path.components() {
        match component {
            Component::Normal(part) => {
                uri.push('/');
                uri.push_str(&urlencoding::encode_binary(part.as_encoded_bytes()));
            }
            Component::ParentDir => uri.push_str("/.."),
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
        }
    }

    // ルートディレクトリそのもの
    if uri.len() == body_start {
        uri.push('/');
    }

    Ok(uri)
}

/// URI の MD5 ハッシュ（小文字16進）
pub fn uri_hash(uri: &str) -> String {
    format!("{:x}", md5::compute(uri.as_bytes()))
}

/// 元画像パスからサムネイルのファイル名を求める
pub fn thumbnail_file_name(path: &Path) -> ThumbResult<String> {
    let uri = file_uri(path)?;
    Ok(format!("{}.{}", uri_hash(&uri), THUMBNAIL_EXTENSION))
}
