use std::rc::Rc;
use crate::cache::ThumbnailCache;
use crate::commands::thumbnails::ThumbnailsPlugin;
use crate::config::AppConfig;
use crate::error::ThumbResult;
use crate::events::EventBus;
use crate::library::Library;
use crate::thumbnail::{select_resizer, ArtResizer, ThumbnailGenerator};

// アプリケーション状態（ライブラリ、イベント購読、サムネイル生成）
pub struct AppState {
    pub config: AppConfig,
    pub library: Library,
    pub events: EventBus,
    pub thumbnails: Rc<ThumbnailsPlugin>,
}

impl AppState {
    pub fn init(config: AppConfig) -> ThumbResult<Self> {
        let resizer = select_resizer(config.backend);
        Self::with_resizer(config, resizer)
    }

    pub fn with_resizer(config: AppConfig, resizer: Box<dyn ArtResizer>) -> ThumbResult<Self> {
        let library = Library::open(&config.library_path)?;
        let cache = ThumbnailCache::new(&config.cache_home);
        let thumbnails = ThumbnailsPlugin::new(ThumbnailGenerator::new(cache, resizer));

        let mut events = EventBus::new();
        if thumbnails.register(&mut events)? {
            log::debug!("インポート時のサムネイル生成を有効化しました");
        }

        Ok(Self {
            config,
            library,
            events,
            thumbnails,
        })
    }
}
