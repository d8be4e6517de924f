use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error(
        "コンテナランタイム '{tool}' を起動できません: {source}\n\nヒント:\n  • Dockerがインストールされているか確認してください\n  • PATHに '{tool}' が含まれているか確認してください"
    )]
    SpawnFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "サブコマンド '{command}' はフレームワーク '{required}' のサービスでのみ実行できます\nサービス '{service}' のフレームワーク: {actual}"
    )]
    FrameworkRequired {
        command: String,
        required: String,
        service: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, ContainerError>;
