use crate::constants::{LARGE_DIR, LARGE_SIZE, NORMAL_DIR, NORMAL_SIZE};

/// freedesktop.org 仕様のサムネイルサイズ区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailSize {
    /// 128x128
    Normal,
    /// 256x256
    Large,
}

impl ThumbnailSize {
    pub fn pixels(&self) -> u32 {
        match self {
            ThumbnailSize::Normal => NORMAL_SIZE,
            ThumbnailSize::Large => LARGE_SIZE,
        }
    }

    pub fn directory_name(&self) -> &'static str {
        match self {
            ThumbnailSize::Normal => NORMAL_DIR,
            ThumbnailSize::Large => LARGE_DIR,
        }
    }

    pub fn all() -> [ThumbnailSize; 2] {
        [ThumbnailSize::Normal, ThumbnailSize::Large]
    }
}
