//! 設定ローダー
//!
//! 作業ディレクトリから設定ファイルを発見し、ProjectConfigにパースします。
//! 複数形式を受け付けますが、最初に見つかった1ファイルだけを使用します
//! （形式をまたいだマージはしない）。

use crate::error::{CoreError, Result};
use crate::model::ProjectConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// 設定ファイルの候補（この順で探索し、最初に見つかったものを使用）
pub const CONFIG_CANDIDATES: [&str; 4] = ["fleet.yml", "fleet.yaml", "fleet.toml", "fleet.json"];

/// 作業ディレクトリから設定ファイルを発見
///
/// 最初に見つかった候補を返す。見つかったファイルがパースできなくても
/// 後続の候補にはフォールバックしない。
pub fn find_config_file(dir: &Path) -> Result<PathBuf> {
    for filename in &CONFIG_CANDIDATES {
        let path = dir.join(filename);
        if path.exists() {
            debug!(file = %path.display(), "Found config file");
            return Ok(path);
        }
    }
    Err(CoreError::ConfigNotFound)
}

/// 設定ファイルをロードしてProjectConfigを生成
#[instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load_config(dir: &Path) -> Result<ProjectConfig> {
    let path = find_config_file(dir)?;
    let config = parse_config_file(&path)?;
    info!(
        services = config.services.len(),
        file = %path.display(),
        "Config loaded"
    );
    Ok(config)
}

/// 見つかったファイルを拡張子の示す形式でパース
///
/// パース失敗はハードエラー（黙って読み飛ばさない）。
/// 省略されたオプションフィールドは空文字列のまま返し、この層では
/// デフォルト値を補わない。
pub fn parse_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let parse_err = |message: String| CoreError::ParseError {
        path: path.to_path_buf(),
        message,
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => {
            serde_yaml::from_str(&content).map_err(|e| parse_err(e.to_string()))
        }
        Some("toml") => toml::from_str(&content).map_err(|e| parse_err(e.to_string())),
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string())),
        _ => Err(parse_err("未対応の形式です".to_string())),
    }
}
