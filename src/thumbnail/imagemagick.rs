use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use crate::error::{ThumbResult, ThumbnailError};
use super::resizer::ArtResizer;

// ImageMagick（convert / identify）の外部プロセスによるリサイズ
#[derive(Debug, Clone)]
pub struct ImageMagickResizer {
    pub convert: OsString,
    pub identify: OsString,
}

impl Default for ImageMagickResizer {
    fn default() -> Self {
        Self {
            convert: OsString::from("convert"),
            identify: OsString::from("identify"),
        }
    }
}

// 先頭フレームのみを対象にする（アニメーションGIF等）
fn first_frame(path: &Path) -> OsString {
    let mut arg = path.as_os_str().to_owned();
    arg.push("[0]");
    arg
}

// identify -format "%w %h" の出力を解析
fn parse_identify_output(output: &str) -> Option<(u32, u32)> {
    let mut parts = output.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    Some((width, height))
}

impl ArtResizer for ImageMagickResizer {
    fn is_local_available(&self) -> bool {
        Command::new(&self.convert)
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn get_dimensions(&self, path: &Path) -> Option<(u32, u32)> {
        let output = match Command::new(&self.identify)
            .args(["-format", "%w %h"])
            .arg(first_frame(path))
            .output()
        {
            Ok(o) => o,
            Err(e) => {
                log::debug!("identify 実行エラー: {}", e);
                return None;
            }
        };

        if !output.status.success() {
            log::debug!(
                "identify 失敗: {} - {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        parse_identify_output(&String::from_utf8_lossy(&output.stdout))
    }

    fn resize(&self, size: u32, source: &Path, dest: &Path) -> ThumbResult<PathBuf> {
        // `>` は縮小のみ（元画像が小さければそのまま）
        let geometry = format!("{}x{}>", size, size);
        let mut png_dest = OsString::from("PNG:");
        png_dest.push(dest.as_os_str());

        let output = Command::new(&self.convert)
            .arg(first_frame(source))
            .args(["-resize", &geometry])
            .arg(png_dest)
            .output()
            .map_err(|e| ThumbnailError::Resize(format!("convert 実行エラー: {}", e)))?;

        if !output.status.success() {
            return Err(ThumbnailError::Resize(format!(
                "convert 失敗: {} - {}",
                source.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(dest.to_path_buf())
    }
}
