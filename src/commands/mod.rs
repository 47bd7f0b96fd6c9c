pub mod import;
pub mod list;
pub mod thumbnails;

use std::io;
use crate::error::{ThumbResult, ThumbnailError};
use crate::library::Query;
use crate::state::AppState;

pub const USAGE: &str = "\
使い方: album-thumbnails <コマンド> [引数...]

コマンド:
  thumbnails [QUERY...]  アルバムのサムネイルを作成（QUERY なしで全件）
  import DIR...          ディレクトリ以下のアルバムをライブラリに追加
  ls [QUERY...]          アルバムを一覧表示
  help                   この説明を表示

QUERY: 語（アーティスト・アルバム名に部分一致）または field:value
       （albumartist, album, year, path, artpath, id）";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subcommand {
    Thumbnails(Vec<String>),
    Import(Vec<String>),
    List(Vec<String>),
    Help,
}

// コマンドライン引数（プログラム名を除く）を解釈
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> ThumbResult<Subcommand> {
    let mut args = args.into_iter();
    let Some(name) = args.next() else {
        return Ok(Subcommand::Help);
    };
    let rest: Vec<String> = args.collect();

    match name.as_str() {
        "thumbnails" => Ok(Subcommand::Thumbnails(rest)),
        "import" => Ok(Subcommand::Import(rest)),
        "ls" | "list" => Ok(Subcommand::List(rest)),
        "help" | "-h" | "--help" => Ok(Subcommand::Help),
        other => Err(ThumbnailError::Config(format!("不明なコマンド: {}\n\n{}", other, USAGE))),
    }
}

pub fn dispatch(state: &mut AppState, command: Subcommand) -> ThumbResult<()> {
    match command {
        Subcommand::Thumbnails(args) => {
            let query = Query::parse(&args)?;
            let written = state.thumbnails.process_query(&state.library, &query)?;
            log::info!("{} 件のアルバムのサムネイルを作成しました", written);
        }
        Subcommand::Import(dirs) => {
            let imported = import::import_dirs(&mut state.library, &state.events, &dirs)?;
            log::info!("{} 件のアルバムをインポートしました", imported.len());
        }
        Subcommand::List(args) => {
            let query = Query::parse(&args)?;
            list::list_albums(&state.library, &query, &mut io::stdout().lock())?;
        }
        Subcommand::Help => println!("{}", USAGE),
    }
    Ok(())
}
