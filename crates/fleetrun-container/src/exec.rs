//! docker exec呼び出しの構築と実行
//!
//! 形式: `docker exec -w <workdir> [-it] <container> <program> [args...]`
//! 標準入出力は子プロセスにそのまま引き継ぎ、終了コードを呼び出し元に返します。
//! 1回の呼び出しで起動する外部プロセスは1つだけで、完了まで同期的に待ちます。

use crate::error::{ContainerError, Result};
use fleetrun_core::{CommandSpec, ResolvedService, RuntimeDescriptor};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// コンテナランタイムのバイナリ名を決定
///
/// FLEET_DOCKER_BIN環境変数で上書き可能（テストハーネスが使用）。
pub fn runtime_tool() -> String {
    std::env::var("FLEET_DOCKER_BIN").unwrap_or_else(|_| "docker".to_string())
}

/// 1回分のexec呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecInvocation {
    pub container: String,
    pub workdir: String,
    pub interactive: bool,
    pub command: Vec<String>,
}

impl ExecInvocation {
    pub fn new(container: String, workdir: String, interactive: bool, command: Vec<String>) -> Self {
        Self {
            container,
            workdir,
            interactive,
            command,
        }
    }

    /// ランタイムに渡す引数列を構築
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["exec".to_string(), "-w".to_string(), self.workdir.clone()];
        if self.interactive {
            args.push("-it".to_string());
        }
        args.push(self.container.clone());
        args.extend(self.command.iter().cloned());
        args
    }

    /// 標準入出力を引き継いで実行し、子プロセスの終了コードを返す
    ///
    /// 起動自体の失敗（ツール不在など）はSpawnFailedとして区別する。
    pub fn run(&self) -> Result<i32> {
        let tool = runtime_tool();
        let args = self.to_args();
        debug!(tool = %tool, args = ?args, "Spawning container runtime");

        let status = Command::new(&tool)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ContainerError::SpawnFailed {
                tool: tool.clone(),
                source,
            })?;

        // シグナル終了などでコードが取れない場合は1とみなす
        let code = status.code().unwrap_or(1);
        info!(code, "Container runtime exited");
        Ok(code)
    }
}

/// サブコマンドを解決済みサービスに対して実行
///
/// フレームワークゲートの検査はプロセス起動前に行い、不一致なら
/// 何も起動せずにエラーを返す。
pub fn dispatch(
    rt: &RuntimeDescriptor,
    service: &ResolvedService,
    spec: &CommandSpec,
    args: &[String],
    interactive: bool,
) -> Result<i32> {
    if let Some(required) = spec.requires_framework
        && service.framework != required
    {
        return Err(ContainerError::FrameworkRequired {
            command: spec.name.to_string(),
            required: required.to_string(),
            service: service.name.clone(),
            actual: if service.framework.is_empty() {
                "未検出".to_string()
            } else {
                service.framework.clone()
            },
        });
    }

    let mut command: Vec<String> = spec.program.iter().map(|s| s.to_string()).collect();
    command.extend(args.iter().cloned());

    ExecInvocation::new(
        service.container.clone(),
        rt.workdir.to_string(),
        interactive,
        command,
    )
    .run()
}
