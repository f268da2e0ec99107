use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::CORNERS_PER_HEX;

/// 既定の出力先（フロントエンドのデータディレクトリ）
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/state-hex.tsx";

/// 出力ファイル先頭に付けるモジュール export 文
pub const DEFAULT_EXPORT_PREFIX: &str = "export default ";

/// 丸め桁数の上限
pub const MAX_PRECISION: u32 = 10;

/// 1回の生成で扱う六角形数の上限（頂点数はこの6倍）
pub const MAX_HEX_COUNT: u64 = 1_000_000;

/// グリッド寸法の設定
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: 6,
            height: 6,
        }
    }
}

/// 出力設定
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSpec {
    pub path: PathBuf,
    pub precision: u32,
    pub export_prefix: String,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            precision: 2,
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
        }
    }
}

/// ジェネレータ設定
///
/// 設定ファイルを使わない場合は `Default` がそのまま固定値（6×6, 小数2桁）になります。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub grid: GridSpec,
    pub output: OutputSpec,
}

/// コマンドラインから指定された上書き値
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub precision: Option<u32>,
    pub output: Option<PathBuf>,
}

impl GeneratorConfig {
    /// YAMLファイルから設定を読み込み
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        let config: GeneratorConfig = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;

        config.validate()?;

        Ok(config)
    }

    /// コマンドライン引数の値で上書き
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(width) = overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = overrides.height {
            self.grid.height = height;
        }
        if let Some(precision) = overrides.precision {
            self.output.precision = precision;
        }
        if let Some(output) = overrides.output {
            self.output.path = output;
        }
    }

    /// 設定の基本的な検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::Validation(format!(
                "grid must contain at least one hexagon (width={}, height={})",
                self.grid.width, self.grid.height
            )));
        }
        // 各辺が1以上なので、この上限で軸座標も i32 に収まる
        if self.hex_count() > MAX_HEX_COUNT {
            return Err(ConfigError::Validation(format!(
                "grid too large: {}x{} = {} hexagons ({} corners), maximum {} hexagons",
                self.grid.width,
                self.grid.height,
                self.hex_count(),
                self.hex_count() * CORNERS_PER_HEX as u64,
                MAX_HEX_COUNT
            )));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::Validation(format!(
                "precision {} exceeds maximum {}",
                self.output.precision, MAX_PRECISION
            )));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output path is empty".to_string()));
        }
        Ok(())
    }

    /// 生成される六角形の数
    pub fn hex_count(&self) -> u64 {
        self.grid.width as u64 * self.grid.height as u64
    }

    /// 設定の概要を表示
    pub fn print_summary(&self) {
        println!("=== グリッド設定 ===");
        println!("幅 (q): {}", self.grid.width);
        println!("高さ (r): {}", self.grid.height);
        println!("六角形数: {}", self.hex_count());
        println!();

        println!("=== 出力設定 ===");
        println!("出力先: {}", self.output.path.display());
        println!("丸め桁数: {}", self.output.precision);
        println!("プレフィックス: {:?}", self.output.export_prefix);
    }
}

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("設定ファイルが見つかりません: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("ファイル読み込みエラー {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("YAML解析エラー {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] serde_yaml::Error),
    #[error("設定検証エラー: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hexmap-config-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_match_fixed_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.grid.width, 6);
        assert_eq!(config.grid.height, 6);
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.output.path, PathBuf::from("src/data/state-hex.tsx"));
        assert_eq!(config.output.export_prefix, "export default ");
        assert_eq!(config.hex_count(), 36);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: GeneratorConfig = serde_yaml::from_str("grid:\n  width: 3\n").unwrap();
        assert_eq!(config.grid.width, 3);
        assert_eq!(config.grid.height, 6);
        assert_eq!(config.output, OutputSpec::default());
    }

    #[test]
    fn test_from_file() {
        let path = temp_path("full.yaml");
        fs::write(
            &path,
            "grid:\n  width: 4\n  height: 5\noutput:\n  path: out/hex.ts\n  precision: 3\n",
        )
        .unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.grid, GridSpec { width: 4, height: 5 });
        assert_eq!(config.output.path, PathBuf::from("out/hex.ts"));
        assert_eq!(config.output.precision, 3);
        assert_eq!(config.output.export_prefix, DEFAULT_EXPORT_PREFIX);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing() {
        let err = GeneratorConfig::from_file(temp_path("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let path = temp_path("broken.yaml");
        fs::write(&path, "grid: [not, a, map]\n").unwrap();
        let err = GeneratorConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = GeneratorConfig::default();
        config.grid.width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = GeneratorConfig::default();
        config.output.precision = 11;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = GeneratorConfig::default();
        config.output.path = PathBuf::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_oversized_grid() {
        let mut config = GeneratorConfig::default();
        config.apply_overrides(ConfigOverrides {
            width: Some(2_000_000_000),
            height: Some(2_000_000_000),
            ..ConfigOverrides::default()
        });
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = GeneratorConfig::default();
        config.grid.width = u32::MAX;
        config.grid.height = 1;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = GeneratorConfig::default();
        config.grid.width = 1_000;
        config.grid.height = 1_000;
        assert_eq!(config.hex_count(), MAX_HEX_COUNT);
        assert!(config.validate().is_ok());

        config.grid.height = 1_001;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = GeneratorConfig::default();
        config.apply_overrides(ConfigOverrides {
            width: Some(2),
            height: None,
            precision: Some(4),
            output: Some(PathBuf::from("hex.js")),
        });
        assert_eq!(config.grid.width, 2);
        assert_eq!(config.grid.height, 6);
        assert_eq!(config.output.precision, 4);
        assert_eq!(config.output.path, PathBuf::from("hex.js"));
    }
}
