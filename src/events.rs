//! ライブラリイベントの同期購読
//!
//! ホスト（ライブラリ操作側）がイベント発生時に登録済みのコールバックを順に呼び出す。

use std::collections::HashMap;
use crate::error::ThumbResult;
use crate::library::Library;
use crate::types::Album;

/// ライブラリのライフサイクルイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryEvent {
    /// アルバムのインポート完了
    AlbumImported,
}

/// アルバムを受け取るリスナー
pub type AlbumListener = Box<dyn Fn(&Library, &Album) -> ThumbResult<()>>;

#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<LibraryEvent, Vec<AlbumListener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_listener(&mut self, event: LibraryEvent, listener: AlbumListener) {
        self.listeners.entry(event).or_default().push(listener);
    }

    pub fn listener_count(&self, event: LibraryEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    // 登録順に呼び出し、最初のエラーで中断
    pub fn send(&self, event: LibraryEvent, library: &Library, album: &Album) -> ThumbResult<()> {
        let Some(listeners) = self.listeners.get(&event) else {
            return Ok(());
        };
        log::debug!("イベント送信: {:?} ({} 件のリスナー)", event, listeners.len());
        for listener in listeners {
            listener(library, album)?;
        }
        Ok(())
    }
}
