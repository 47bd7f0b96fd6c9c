//! アルバム検索クエリ
//!
//! - `field:value` はフィールドの部分一致（大文字小文字を区別しない）
//! - `id:` と `year:` は完全一致
//! - 未知のフィールド名はエラー（コロンの後に空白があれば通常の語）
//! - `artpath:`（値なし）はアートのないアルバム
//! - フィールド指定なしの語はアルバムアーティストかアルバム名に部分一致
//! - すべての語に一致したものを返す。語がなければ全件

use std::path::Path;
use crate::error::{ThumbResult, ThumbnailError};
use crate::types::Album;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    AlbumArtist,
    Album,
    Year,
    Path,
    ArtPath,
    Id,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "albumartist" | "artist" => Some(Field::AlbumArtist),
            "album" => Some(Field::Album),
            "year" => Some(Field::Year),
            "path" => Some(Field::Path),
            "artpath" => Some(Field::ArtPath),
            "id" => Some(Field::Id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    Any(String),
    Field(Field, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<Term>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn path_contains(path: &Path, needle: &str) -> bool {
    contains_ignore_case(&path.to_string_lossy(), needle)
}

impl Query {
    // 全件一致
    pub fn all() -> Self {
        Self::default()
    }

    pub fn parse<S: AsRef<str>>(args: &[S]) -> ThumbResult<Self> {
        let mut terms = Vec::with_capacity(args.len());
        for arg in args {
            let arg = arg.as_ref().trim();
            if arg.is_empty() {
                continue;
            }
            terms.push(Self::parse_term(arg)?);
        }
        Ok(Self { terms })
    }

    fn parse_term(arg: &str) -> ThumbResult<Term> {
        if let Some((name, value)) = arg.split_once(':') {
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) {
                if let Some(field) = Field::from_name(&name.to_lowercase()) {
                    return Ok(Term::Field(field, value.to_lowercase()));
                }
                // コロンの後に空白があれば通常の語（"Live: 1999" など）
                if !value.starts_with(char::is_whitespace) {
                    return Err(ThumbnailError::Library(format!("不明なフィールド: {}", name)));
                }
            }
        }
        Ok(Term::Any(arg.to_lowercase()))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, album: &Album) -> bool {
        self.terms.iter().all(|term| Self::term_matches(term, album))
    }

    fn term_matches(term: &Term, album: &Album) -> bool {
        match term {
            Term::Any(value) => {
                contains_ignore_case(&album.albumartist, value)
                    || contains_ignore_case(&album.album, value)
            }
            Term::Field(Field::AlbumArtist, value) => contains_ignore_case(&album.albumartist, value),
            Term::Field(Field::Album, value) => contains_ignore_case(&album.album, value),
            Term::Field(Field::Year, value) => {
                album.year.map(|y| y.to_string()).as_deref() == Some(value.as_str())
            }
            Term::Field(Field::Path, value) => path_contains(&album.path, value),
            Term::Field(Field::ArtPath, value) if value.is_empty() => album.artpath.is_none(),
            Term::Field(Field::ArtPath, value) => album
                .artpath
                .as_deref()
                .is_some_and(|p| path_contains(p, value)),
            Term::Field(Field::Id, value) => album.id.to_string() == *value,
        }
    }
}
