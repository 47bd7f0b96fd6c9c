use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use crate::error::{ThumbResult, ThumbnailError};
use super::resizer::ArtResizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeCall {
    pub size: u32,
    pub source: PathBuf,
    pub dest: PathBuf,
}

// テスト用のリサイズバックエンド（"<size>:<呼び出し番号>" を書き出す）
#[derive(Debug, Clone)]
pub struct MockResizer {
    pub available: bool,
    pub dimensions: Option<(u32, u32)>,
    pub fail: bool,
    pub calls: Rc<RefCell<Vec<ResizeCall>>>,
}

impl MockResizer {
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            available: true,
            dimensions: Some((width, height)),
            fail: false,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn without_dimensions() -> Self {
        Self {
            dimensions: None,
            ..Self::with_dimensions(0, 0)
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::with_dimensions(300, 300)
        }
    }

    pub fn failing(width: u32, height: u32) -> Self {
        Self {
            fail: true,
            ..Self::with_dimensions(width, height)
        }
    }
}

impl ArtResizer for MockResizer {
    fn is_local_available(&self) -> bool {
        self.available
    }

    fn get_dimensions(&self, _path: &Path) -> Option<(u32, u32)> {
        self.dimensions
    }

    fn resize(&self, size: u32, source: &Path, dest: &Path) -> ThumbResult<PathBuf> {
        let index = self.calls.borrow().len();
        self.calls.borrow_mut().push(ResizeCall {
            size,
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
        });

        if self.fail {
            return Err(ThumbnailError::Resize("mock failure".to_string()));
        }

        fs::write(dest, format!("{}:{}", size, index))?;
        Ok(dest.to_path_buf())
    }
}
