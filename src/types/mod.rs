mod album;
mod thumbnail;

pub use album::{Album, NewAlbum};
pub use thumbnail::ThumbnailSize;
