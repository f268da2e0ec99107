//! # Export モジュール
//!
//! 生成したレコード列をフロントエンドのモジュールとして書き出します。
//!
//! 出力は `export default ` に続く JSON 配列（インデント2）で、各要素のキー順は
//! `id`, `x0`, `y0`, `points` です。既存ファイルは上書きし、出力先ディレクトリが
//! 存在しない場合は作成せずにエラーとします。

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::HexRecord;

/// 書き出しエラー
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSONシリアライズエラー: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("ファイル書き込みエラー {}: {}", .0.display(), .1)]
    Write(PathBuf, #[source] std::io::Error),
}

/// モジュールのテキストを組み立てる
pub fn render_module(prefix: &str, records: &[HexRecord]) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(records)?;
    Ok(format!("{}{}", prefix, json))
}

/// テキストを出力先に書き込む（既存ファイルは上書き）
pub fn write_module(path: &Path, contents: &str) -> Result<(), ExportError> {
    debug!("書き込み中: {} ({} bytes)", path.display(), contents.len());
    fs::write(path, contents).map_err(|e| ExportError::Write(path.to_path_buf(), e))?;
    info!("出力ファイルを書き込みました: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HexGridBuilder;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hexmap-export-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_render_prefix_and_layout() {
        let records = vec![HexRecord {
            id: "0,0".to_string(),
            x0: 0.5,
            y0: 1.0,
            points: "0.0,0.0".to_string(),
        }];
        let text = render_module("export default ", &records).unwrap();
        assert_eq!(
            text,
            "export default [\n  {\n    \"id\": \"0,0\",\n    \"x0\": 0.5,\n    \"y0\": 1.0,\n    \"points\": \"0.0,0.0\"\n  }\n]"
        );
    }

    #[test]
    fn test_render_parses_back() {
        let grid = HexGridBuilder::new(6, 6, 2).build();
        let text = render_module("export default ", &grid.records).unwrap();
        let json = text.strip_prefix("export default ").unwrap();
        let parsed: Vec<HexRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, grid.records);
    }

    #[test]
    fn test_write_overwrites_and_is_byte_identical() {
        let path = temp_path("state-hex.tsx");
        fs::write(&path, "stale contents that are longer than nothing").unwrap();

        let render = || {
            let grid = HexGridBuilder::new(6, 6, 2).build();
            render_module("export default ", &grid.records).unwrap()
        };
        write_module(&path, &render()).unwrap();
        let first = fs::read(&path).unwrap();
        write_module(&path, &render()).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with(b"export default ["));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = temp_path("no-such-dir").join("state-hex.tsx");
        let err = write_module(&path, "export default []").unwrap_err();
        assert!(matches!(err, ExportError::Write(p, _) if p == path));
    }
}
