use std::io::Write;
use crate::error::ThumbResult;
use crate::library::{Library, Query};

// 一致するアルバムを "アーティスト - アルバム" 形式で出力
pub fn list_albums<W: Write>(library: &Library, query: &Query, out: &mut W) -> ThumbResult<usize> {
    let albums = library.albums(query);
    for album in &albums {
        writeln!(out, "{}", album)?;
    }
    Ok(albums.len())
}
