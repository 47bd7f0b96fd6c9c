mod disk;
pub mod hash;

pub use disk::ThumbnailCache;
