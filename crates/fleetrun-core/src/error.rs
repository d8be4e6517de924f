use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(
        "設定ファイルが見つかりません\n探索した候補: fleet.yml, fleet.yaml, fleet.toml, fleet.json\nヒント: プロジェクトルートで実行してください"
    )]
    ConfigNotFound,

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("設定ファイルのパースエラー: {path}\n理由: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("ランタイム '{family}' のサービスが定義されていません")]
    NoServicesForRuntime { family: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
