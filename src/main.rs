mod builder;
mod config;
mod export;
mod logging;
mod models;

use std::path::PathBuf;

use builder::HexGridBuilder;
use clap::{Arg, ArgMatches, Command, value_parser};
use config::{ConfigOverrides, GeneratorConfig};
use logging::{LogConfig, LogOutput};
use tracing::{debug, info};

fn main() {
    let matches = build_cli().get_matches();

    let verbose_level = matches.get_count("verbose");
    let log_config = LogConfig {
        level: matches
            .get_one::<String>("log-level")
            .map(|s| logging::parse_log_level(s.as_str()))
            .unwrap_or_else(|| logging::level_from_verbosity(verbose_level)),
        output: matches
            .get_one::<LogOutput>("log-output")
            .copied()
            .unwrap_or(LogOutput::Console),
        log_dir: matches
            .get_one::<String>("log-dir")
            .cloned()
            .unwrap_or_else(|| LogConfig::default().log_dir),
        ..LogConfig::default()
    };

    // ガードはプロセス終了まで保持してファイルログをフラッシュさせる
    let _log_guard = match logging::init_logging(log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: ログ初期化に失敗しました: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("hexmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("六角形グリッドの幾何データを生成します")
        .long_about(
            "軸座標の六角形グリッドについて中心点と頂点を計算し、\n\
             フロントエンド用の `export default [...]` モジュールとして書き出します。\n\
             引数を指定しない場合は 6×6 グリッド・小数2桁で src/data/state-hex.tsx に出力します。",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("設定ファイル(.yaml)のパスを指定"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("出力ファイルのパス"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("N")
                .value_parser(value_parser!(u32))
                .help("q 方向の六角形数"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("N")
                .value_parser(value_parser!(u32))
                .help("r 方向の六角形数"),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .value_name("N")
                .value_parser(value_parser!(u32))
                .help("頂点座標の丸め桁数"),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .action(clap::ArgAction::SetTrue)
                .help("設定の情報のみ表示して終了")
                .conflicts_with("stdout"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .action(clap::ArgAction::SetTrue)
                .help("ファイルに書き込まず標準出力に表示"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::Count)
                .help("詳細出力レベル (-v: info, -vv: debug, -vvv: trace)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("ログレベル (trace, debug, info, warn, error)"),
        )
        .arg(
            Arg::new("log-output")
                .long("log-output")
                .value_name("DEST")
                .value_parser(|s: &str| s.parse::<LogOutput>())
                .help("ログ出力先 (console, file, both)"),
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .value_name("DIR")
                .help("ログファイルのディレクトリ"),
        )
}

/// 設定ファイルとコマンドライン引数を合成
fn resolve_config(matches: &ArgMatches) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let config = GeneratorConfig::from_file(path)?;
            debug!("設定ファイル読み込み完了: {}", path.display());
            config
        }
        None => GeneratorConfig::default(),
    };

    config.apply_overrides(ConfigOverrides {
        width: matches.get_one::<u32>("width").copied(),
        height: matches.get_one::<u32>("height").copied(),
        precision: matches.get_one::<u32>("precision").copied(),
        output: matches.get_one::<PathBuf>("output").cloned(),
    });
    config.validate()?;

    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches)?;

    if matches.get_flag("info") {
        config.print_summary();
        return Ok(());
    }

    let grid = HexGridBuilder::from_config(&config).build();
    let module = export::render_module(&config.output.export_prefix, &grid.records)?;

    if matches.get_flag("stdout") {
        // 本文と混ざらないよう診断値はログにのみ出す
        info!(max_x = grid.bounds.max.x, max_y = grid.bounds.max.y, "グリッド境界");
        println!("{}", module);
        return Ok(());
    }

    grid.report_bounds();
    export::write_module(&config.output.path, &module)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_no_arguments_resolves_to_defaults() {
        let matches = build_cli().try_get_matches_from(["hexmap"]).unwrap();
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let matches = build_cli()
            .try_get_matches_from(["hexmap", "--width", "3", "-p", "1", "-o", "out.ts"])
            .unwrap();
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.grid.width, 3);
        assert_eq!(config.grid.height, 6);
        assert_eq!(config.output.precision, 1);
        assert_eq!(config.output.path, PathBuf::from("out.ts"));
    }

    #[test]
    fn test_cli_rejects_invalid_values() {
        let matches = build_cli().try_get_matches_from(["hexmap", "--height", "0"]).unwrap();
        assert!(resolve_config(&matches).is_err());

        let matches = build_cli()
            .try_get_matches_from(["hexmap", "--width", "2000000000", "--height", "2000000000"])
            .unwrap();
        assert!(resolve_config(&matches).is_err());

        assert!(build_cli().try_get_matches_from(["hexmap", "--log-output", "syslog"]).is_err());
        assert!(build_cli().try_get_matches_from(["hexmap", "--info", "--stdout"]).is_err());
    }
}
