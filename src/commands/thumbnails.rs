use std::rc::Rc;
use crate::error::ThumbResult;
use crate::events::{EventBus, LibraryEvent};
use crate::library::{Library, Query};
use crate::thumbnail::{ProcessOutcome, ThumbnailGenerator};
use crate::types::Album;

/// サムネイル生成のトリガー（インポートイベントと `thumbnails` コマンド）
pub struct ThumbnailsPlugin {
    generator: ThumbnailGenerator,
}

impl ThumbnailsPlugin {
    pub fn new(generator: ThumbnailGenerator) -> Rc<Self> {
        Rc::new(Self { generator })
    }

    pub fn generator(&self) -> &ThumbnailGenerator {
        &self.generator
    }

    // 起動時にリサイズ可能な場合のみインポートイベントを購読する
    pub fn register(self: &Rc<Self>, events: &mut EventBus) -> ThumbResult<bool> {
        if !self.check_local_ok()? {
            return Ok(false);
        }

        let plugin = Rc::clone(self);
        events.register_listener(
            LibraryEvent::AlbumImported,
            Box::new(move |library: &Library, album: &Album| plugin.imported(library, album)),
        );
        Ok(true)
    }

    pub fn imported(&self, _library: &Library, album: &Album) -> ThumbResult<()> {
        self.generator.process(album)?;
        Ok(())
    }

    /// クエリに一致するアルバムを順に処理し、書き出したアルバム数を返す
    ///
    /// 起動後に状況が変わりうるため、実行のたびにリサイズ可否を確認する。
    pub fn process_query(&self, library: &Library, query: &Query) -> ThumbResult<usize> {
        if !self.check_local_ok()? {
            return Ok(0);
        }

        let mut written = 0;
        for album in library.albums(query) {
            if let ProcessOutcome::Written(_) = self.generator.process(&album)? {
                written += 1;
            }
        }
        Ok(written)
    }

    // リサイズ可否の確認とキャッシュディレクトリの準備
    fn check_local_ok(&self) -> ThumbResult<bool> {
        if !self.generator.resizer().is_local_available() {
            log::warn!("ローカルで画像をリサイズできないため、サムネイルを生成できません");
            return Ok(false);
        }

        self.generator.cache().ensure()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ThumbnailCache;
    use crate::thumbnail::mock::MockResizer;
    use crate::types::{NewAlbum, ThumbnailSize};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn plugin(tmp: &TempDir, resizer: MockResizer) -> Rc<ThumbnailsPlugin> {
        let cache = ThumbnailCache::new(&tmp.path().join("cache"));
        ThumbnailsPlugin::new(ThumbnailGenerator::new(cache, Box::new(resizer)))
    }

    fn library(tmp: &TempDir) -> Library {
        let mut library = Library::open(&tmp.path().join("library.json")).unwrap();
        for (name, art) in [("One", true), ("Two", false), ("Three", true)] {
            let path = PathBuf::from(format!("/music/Artist/{}", name));
            library.add_album(NewAlbum {
                albumartist: "Artist".to_string(),
                album: name.to_string(),
                year: None,
                artpath: art.then(|| path.join("cover.jpg")),
                path,
            });
        }
        library
    }

    fn count_files(dir: &std::path::Path) -> usize {
        fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }

    #[test]
    fn registers_listener_and_prepares_cache_when_available() {
        let tmp = TempDir::new().unwrap();
        let plugin = plugin(&tmp, MockResizer::with_dimensions(300, 300));
        let mut events = EventBus::new();

        assert!(plugin.register(&mut events).unwrap());

        assert_eq!(events.listener_count(LibraryEvent::AlbumImported), 1);
        assert!(plugin.generator().cache().dir_for(ThumbnailSize::Normal).is_dir());
        assert!(plugin.generator().cache().dir_for(ThumbnailSize::Large).is_dir());
    }

    #[test]
    fn stays_inert_when_unavailable() {
        let tmp = TempDir::new().unwrap();
        let plugin = plugin(&tmp, MockResizer::unavailable());
        let mut events = EventBus::new();

        assert!(!plugin.register(&mut events).unwrap());
        assert_eq!(events.listener_count(LibraryEvent::AlbumImported), 0);

        let lib = library(&tmp);
        assert_eq!(plugin.process_query(&lib, &Query::all()).unwrap(), 0);
        assert!(!plugin.generator().cache().base_dir.exists());
    }

    #[test]
    fn import_event_writes_thumbnails() {
        let tmp = TempDir::new().unwrap();
        let plugin = plugin(&tmp, MockResizer::with_dimensions(300, 300));
        let mut events = EventBus::new();
        plugin.register(&mut events).unwrap();

        let lib = library(&tmp);
        let album = lib.get(1).unwrap().clone();
        events.send(LibraryEvent::AlbumImported, &lib, &album).unwrap();

        let cache = plugin.generator().cache();
        assert_eq!(count_files(&cache.dir_for(ThumbnailSize::Normal)), 1);
        assert_eq!(count_files(&cache.dir_for(ThumbnailSize::Large)), 1);
    }

    #[test]
    fn command_processes_matching_albums_and_skips_missing_art() {
        let tmp = TempDir::new().unwrap();
        let resizer = MockResizer::with_dimensions(300, 300);
        let calls = resizer.calls.clone();
        let plugin = plugin(&tmp, resizer);
        let lib = library(&tmp);

        assert_eq!(plugin.process_query(&lib, &Query::all()).unwrap(), 2);
        assert_eq!(calls.borrow().len(), 4);

        let only_three = Query::parse(&["album:three"]).unwrap();
        assert_eq!(plugin.process_query(&lib, &only_three).unwrap(), 1);

        let cache = plugin.generator().cache();
        assert_eq!(count_files(&cache.dir_for(ThumbnailSize::Normal)), 2);
    }

    #[test]
    fn command_rechecks_cache_directory() {
        let tmp = TempDir::new().unwrap();
        let plugin = plugin(&tmp, MockResizer::with_dimensions(300, 300));
        let mut events = EventBus::new();
        plugin.register(&mut events).unwrap();

        // 起動後にキャッシュが消されても再作成される
        fs::remove_dir_all(&plugin.generator().cache().base_dir).unwrap();

        let lib = library(&tmp);
        assert_eq!(plugin.process_query(&lib, &Query::all()).unwrap(), 2);
    }

    #[test]
    fn resize_failure_aborts_the_command() {
        let tmp = TempDir::new().unwrap();
        let resizer = MockResizer::failing(300, 300);
        let calls = resizer.calls.clone();
        let plugin = plugin(&tmp, resizer);
        let lib = library(&tmp);

        assert!(plugin.process_query(&lib, &Query::all()).is_err());
        // 最初のアルバムの large で中断
        assert_eq!(calls.borrow().len(), 1);
    }
}
