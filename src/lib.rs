mod cache;
mod commands;
mod config;
mod constants;
mod error;
mod events;
mod image_utils;
mod library;
mod state;
mod thumbnail;
mod types;

pub use cache::{hash, ThumbnailCache};
pub use commands::thumbnails::ThumbnailsPlugin;
pub use commands::{dispatch, parse_args, Subcommand};
pub use config::AppConfig;
pub use error::{ThumbResult, ThumbnailError};
pub use events::{AlbumListener, EventBus, LibraryEvent};
pub use library::{Library, Query};
pub use state::AppState;
pub use thumbnail::{
    select_resizer, ArtResizer, BackendKind, ImageCrateResizer, ImageMagickResizer,
    ProcessOutcome, ThumbnailGenerator,
};
pub use types::{Album, NewAlbum, ThumbnailSize};

use anyhow::Context;
use env_logger::Env;

fn try_run() -> anyhow::Result<()> {
    let command = parse_args(std::env::args().skip(1))?;
    if command == Subcommand::Help {
        println!("{}", commands::USAGE);
        return Ok(());
    }

    let config = AppConfig::load().context("設定の読み込みに失敗しました")?;
    log::debug!("設定: {:?}", config);

    let mut state = AppState::init(config).context("初期化に失敗しました")?;
    dispatch(&mut state, command)?;
    Ok(())
}

pub fn run() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if let Err(e) = try_run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
